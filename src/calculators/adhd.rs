use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const SCREENER_ITEMS: usize = 6;
/// Number of items in the shaded zone needed for a positive screen.
const POSITIVE_THRESHOLD: usize = 4;

// 0 = Never, 1 = Rarely, 2 = Sometimes, 3 = Often, 4 = Very often
const MAX_FREQUENCY: i32 = 4;

fn frequencies_in_range(answers: &[i32]) -> Result<(), ValidationError> {
    if answers.iter().any(|a| !(0..=MAX_FREQUENCY).contains(a)) {
        return Err(ValidationError::new("frequency_out_of_range")
            .with_message("answers must be between 0 (never) and 4 (very often)".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdhdScreenerInput {
    #[validate(length(equal = 6), custom(function = "frequencies_in_range"))]
    pub answers: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdhdScreenerResult {
    pub positive_items: usize,
    pub screen_positive: bool,
    pub message: String,
}

/// Item thresholds: the first three count from "Sometimes", the last three from "Often".
fn item_threshold(index: usize) -> i32 {
    if index < 3 {
        2
    } else {
        3
    }
}

pub fn score_screener(input: &AdhdScreenerInput) -> AdhdScreenerResult {
    let positive_items = input
        .answers
        .iter()
        .take(SCREENER_ITEMS)
        .enumerate()
        .filter(|(index, answer)| **answer >= item_threshold(*index))
        .count();

    let screen_positive = positive_items >= POSITIVE_THRESHOLD;
    let message = if screen_positive {
        format!(
            "{} of {} answers fall in the range associated with ADHD. \
             We recommend booking an assessment with one of our specialists.",
            positive_items, SCREENER_ITEMS
        )
    } else {
        format!(
            "{} of {} answers fall in the range associated with ADHD. \
             The screen does not suggest ADHD, but talk to a doctor if you have concerns.",
            positive_items, SCREENER_ITEMS
        )
    };

    AdhdScreenerResult {
        positive_items,
        screen_positive,
        message,
    }
}
