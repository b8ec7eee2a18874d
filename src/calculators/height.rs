use serde::{Deserialize, Serialize};
use validator::Validate;

/// Half the average adult height difference between men and women, in cm.
const SEX_ADJUSTMENT_CM: f64 = 13.0;
/// Roughly two standard deviations around the target height.
const TARGET_RANGE_CM: f64 = 8.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HeightInput {
    #[validate(range(min = 100.0, max = 250.0))]
    pub father_height_cm: f64,

    #[validate(range(min = 100.0, max = 250.0))]
    pub mother_height_cm: f64,

    pub sex: Sex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeightPrediction {
    pub target_height_cm: f64,
    pub range_low_cm: f64,
    pub range_high_cm: f64,
    pub message: String,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mid-parental target height.
pub fn predict_adult_height(input: &HeightInput) -> HeightPrediction {
    let parents = input.father_height_cm + input.mother_height_cm;
    let target = match input.sex {
        Sex::Male => (parents + SEX_ADJUSTMENT_CM) / 2.0,
        Sex::Female => (parents - SEX_ADJUSTMENT_CM) / 2.0,
    };

    let target_height_cm = round1(target);
    let range_low_cm = round1(target - TARGET_RANGE_CM);
    let range_high_cm = round1(target + TARGET_RANGE_CM);

    let message = format!(
        "Based on the parents' heights, the predicted adult height is about {:.1} cm \
         (most children end up between {:.1} cm and {:.1} cm).",
        target_height_cm, range_low_cm, range_high_cm
    );

    HeightPrediction {
        target_height_cm,
        range_low_cm,
        range_high_cm,
        message,
    }
}
