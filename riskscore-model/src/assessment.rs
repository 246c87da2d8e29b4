#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    advice::AdviceBundle,
    bmi::BmiResult,
    error::AssessmentError,
    profile::{ConditionFlags, ProfileInput, UserProfile},
};

/// Everything rendered for one completed form submission.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Assessment {
    profile: UserProfile,
    conditions: ConditionFlags,
    bmi: BmiResult,
    advice: AdviceBundle,
}

impl Assessment {
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
    pub fn conditions(&self) -> &ConditionFlags {
        &self.conditions
    }
    pub fn bmi(&self) -> &BmiResult {
        &self.bmi
    }
    pub fn advice(&self) -> &AdviceBundle {
        &self.advice
    }
}

pub fn assess(
    input: &ProfileInput,
    conditions: ConditionFlags,
) -> Result<Assessment, AssessmentError> {
    let profile = input.complete()?;
    let bmi = BmiResult::from_profile(&profile)?;
    let advice = AdviceBundle::lookup(bmi.category(), &conditions);
    Ok(Assessment {
        profile,
        conditions,
        bmi,
        advice,
    })
}
