//! Daily log entry models.
//!
//! Field names are renamed to camelCase because the nested objects are
//! JSON-stringified into multipart text parts whose keys the server reads
//! verbatim.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity scores for the nine tracked symptoms, 1 (mild) to 10 (severe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomScores {
    pub itching: u8,
    pub flaking: u8,
    pub redness: u8,
    pub oiliness: u8,
    pub tightness: u8,
    pub tenderness: u8,
    pub hypopigmentation: u8,
    pub hair_thinning: u8,
    pub dryness: u8,
}

impl Default for SymptomScores {
    /// Unset scores submit as 1, the mild end of the scale.
    fn default() -> Self {
        Self {
            itching: 1,
            flaking: 1,
            redness: 1,
            oiliness: 1,
            tightness: 1,
            tenderness: 1,
            hypopigmentation: 1,
            hair_thinning: 1,
            dryness: 1,
        }
    }
}

/// When the symptoms started and stopped, free-form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomTiming {
    pub start_time: String,
    pub end_time: String,
}

/// Products applied on the day of the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsUsed {
    /// Products picked from the curated brand list.
    pub bea_bayou_products: Vec<String>,
    /// Anything else, free-form.
    pub other_products: String,
}

/// Hair care routine for the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaircareRoutine {
    pub hairstyle: String,
    pub was_wash_day: bool,
}

/// Diet and lifestyle factors for the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietLifestyle {
    pub meals: String,
    pub consumed_alcohol: bool,
    pub high_sugar_intake: bool,
}

/// A complete daily log entry, ready for submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogDraft {
    pub symptoms: SymptomScores,
    pub timing: SymptomTiming,
    pub products: ProductsUsed,
    pub routine: HaircareRoutine,
    /// 1 (calm) to 10 (severe stress). Defaults to 1 like the scores.
    pub stress_level: u8,
    pub diet: DietLifestyle,
    pub personal_notes: String,
    /// At most one photo is submitted per entry.
    pub scalp_photo: Option<PathBuf>,
}

impl LogDraft {
    /// Stress level with the unset-means-1 rule applied.
    pub fn effective_stress_level(&self) -> u8 {
        if self.stress_level == 0 { 1 } else { self.stress_level }
    }
}
