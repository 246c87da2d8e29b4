#[cfg(feature = "serde")]
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::{error::AssessmentError, profile::UserProfile};

const BMI_IMPERIAL_FACTOR: f64 = 703.0;

/// Weight categories in ascending BMI order.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum Category {
    Underweight,
    #[strum(serialize = "Healthy weight")]
    HealthyWeight,
    Overweight,
    #[strum(serialize = "Obese (Class I)")]
    ObeseClassI,
    #[strum(serialize = "Obese (Class II)")]
    ObeseClassII,
    #[strum(serialize = "Severe Obesity (Class III)")]
    SevereObesityClassIII,
}

impl Category {
    /// First matching half-open interval wins.
    pub fn classify(bmi: u16) -> Self {
        let bmi = f64::from(bmi);
        if bmi < 18.5 {
            Category::Underweight
        } else if (18.5..25.0).contains(&bmi) {
            Category::HealthyWeight
        } else if (25.0..30.0).contains(&bmi) {
            Category::Overweight
        } else if (30.0..35.0).contains(&bmi) {
            Category::ObeseClassI
        } else if (35.0..40.0).contains(&bmi) {
            Category::ObeseClassII
        } else {
            Category::SevereObesityClassIII
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BmiResult {
    value: u16,
    category: Category,
}

impl BmiResult {
    pub fn from_profile(profile: &UserProfile) -> Result<Self, AssessmentError> {
        let value = body_mass_index(profile.total_height_inches(), profile.weight_lbs())?;
        Ok(Self {
            value,
            category: Category::classify(value),
        })
    }
    pub fn value(&self) -> u16 {
        self.value
    }
    pub fn category(&self) -> Category {
        self.category
    }
}

/// Imperial BMI, `weight / inches^2 * 703`, rounded half to even.
pub fn body_mass_index(total_inches: u16, weight_lbs: u16) -> Result<u16, AssessmentError> {
    if total_inches == 0 {
        return Err(AssessmentError::InvalidHeight { total_inches });
    }
    let inches = f64::from(total_inches);
    let bmi = (f64::from(weight_lbs) / (inches * inches) * BMI_IMPERIAL_FACTOR).round_ties_even();
    // Float to int casts saturate.
    Ok(bmi as u16)
}
