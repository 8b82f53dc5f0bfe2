//! Add-log view.

use std::path::PathBuf;

use clap::Args;
use scalptrack_core::log::{
    DietLifestyle, HaircareRoutine, LogDraft, ProductsUsed, SymptomScores, SymptomTiming,
};

use crate::app::AppState;

/// Today's log entry. Symptom severities run 1 (mild) to 10 (severe) and
/// default to 1 when not given.
#[derive(Debug, Args)]
pub struct AddLogArgs {
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub itching: u8,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub flaking: u8,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub redness: u8,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub oiliness: u8,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub tightness: u8,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub tenderness: u8,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub hypopigmentation: u8,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub hair_thinning: u8,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub dryness: u8,

    /// When the symptoms started (free-form)
    #[arg(long, default_value = "")]
    pub start_time: String,
    /// When the symptoms eased (free-form)
    #[arg(long, default_value = "")]
    pub end_time: String,

    /// Product from the curated list; repeat for several
    #[arg(long = "product")]
    pub products: Vec<String>,
    /// Other products used (free-form)
    #[arg(long, default_value = "")]
    pub other_products: String,

    /// Hairstyle worn today
    #[arg(long, default_value = "")]
    pub hairstyle: String,
    /// Today was a wash day
    #[arg(long)]
    pub wash_day: bool,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub stress_level: u8,

    /// Meals eaten today (free-form)
    #[arg(long, default_value = "")]
    pub meals: String,
    /// Alcohol was consumed today
    #[arg(long)]
    pub alcohol: bool,
    /// High sugar intake today
    #[arg(long)]
    pub high_sugar: bool,

    /// Personal notes
    #[arg(long, default_value = "")]
    pub notes: String,
    /// Path to a scalp photo to attach
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

impl From<AddLogArgs> for LogDraft {
    fn from(args: AddLogArgs) -> Self {
        LogDraft {
            symptoms: SymptomScores {
                itching: args.itching,
                flaking: args.flaking,
                redness: args.redness,
                oiliness: args.oiliness,
                tightness: args.tightness,
                tenderness: args.tenderness,
                hypopigmentation: args.hypopigmentation,
                hair_thinning: args.hair_thinning,
                dryness: args.dryness,
            },
            timing: SymptomTiming {
                start_time: args.start_time,
                end_time: args.end_time,
            },
            products: ProductsUsed {
                bea_bayou_products: args.products,
                other_products: args.other_products,
            },
            routine: HaircareRoutine {
                hairstyle: args.hairstyle,
                was_wash_day: args.wash_day,
            },
            stress_level: args.stress_level,
            diet: DietLifestyle {
                meals: args.meals,
                consumed_alcohol: args.alcohol,
                high_sugar_intake: args.high_sugar,
            },
            personal_notes: args.notes,
            scalp_photo: args.photo,
        }
    }
}

pub async fn run(state: &AppState, args: AddLogArgs) -> bool {
    let draft = LogDraft::from(args);
    match state.logs.add(&draft).await {
        Ok(()) => {
            println!("Log entry added successfully!");
            true
        }
        Err(e) => {
            eprintln!(
                "{}",
                e.user_message("Failed to add log entry. Please try again.")
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: AddLogArgs,
    }

    #[test]
    fn test_defaults_to_mild_scores() {
        let harness = Harness::parse_from(["test"]);
        let draft = LogDraft::from(harness.args);
        assert_eq!(draft.symptoms, SymptomScores::default());
        assert_eq!(draft.stress_level, 1);
        assert!(draft.scalp_photo.is_none());
    }

    #[test]
    fn test_args_map_onto_draft() {
        let harness = Harness::parse_from([
            "test",
            "--itching",
            "7",
            "--wash-day",
            "--product",
            "Prebiotic Scalp Oil",
            "--product",
            "Clarifying Shampoo",
            "--notes",
            "itchy after workout",
        ]);
        let draft = LogDraft::from(harness.args);
        assert_eq!(draft.symptoms.itching, 7);
        assert!(draft.routine.was_wash_day);
        assert_eq!(draft.products.bea_bayou_products.len(), 2);
        assert_eq!(draft.personal_notes, "itchy after workout");
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        assert!(Harness::try_parse_from(["test", "--itching", "11"]).is_err());
        assert!(Harness::try_parse_from(["test", "--itching", "0"]).is_err());
    }
}
