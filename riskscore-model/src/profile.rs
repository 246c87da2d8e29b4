use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::error::AssessmentError;

pub const AGE_RANGE: RangeInclusive<u8> = 20..=59;
pub const HEIGHT_FEET_RANGE: RangeInclusive<u8> = 4..=6;
pub const HEIGHT_INCHES_RANGE: RangeInclusive<u8> = 0..=11;
pub const WEIGHT_LBS_RANGE: RangeInclusive<u16> = 90..=350;

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// One of the five required selections on the form.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    Age,
    Gender,
    HeightFeet,
    HeightInches,
    WeightLbs,
}

/// Form state before validation. `None` is the "Select..." placeholder.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProfileInput {
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub height_feet: Option<u8>,
    pub height_inches: Option<u8>,
    pub weight_lbs: Option<u16>,
}

impl ProfileInput {
    /// Fields that are unselected or hold a value the form cannot offer.
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if !self.age.is_some_and(|x| AGE_RANGE.contains(&x)) {
            missing.push(Field::Age);
        }
        if self.gender.is_none() {
            missing.push(Field::Gender);
        }
        if !self.height_feet.is_some_and(|x| HEIGHT_FEET_RANGE.contains(&x)) {
            missing.push(Field::HeightFeet);
        }
        if !self
            .height_inches
            .is_some_and(|x| HEIGHT_INCHES_RANGE.contains(&x))
        {
            missing.push(Field::HeightInches);
        }
        if !self.weight_lbs.is_some_and(|x| WEIGHT_LBS_RANGE.contains(&x)) {
            missing.push(Field::WeightLbs);
        }
        missing
    }

    pub fn complete(&self) -> Result<UserProfile, AssessmentError> {
        let missing = self.missing_fields();
        match (
            self.age,
            self.gender,
            self.height_feet,
            self.height_inches,
            self.weight_lbs,
        ) {
            (Some(age), Some(gender), Some(height_feet), Some(height_inches), Some(weight_lbs))
                if missing.is_empty() =>
            {
                Ok(UserProfile {
                    age,
                    gender,
                    height_feet,
                    height_inches,
                    weight_lbs,
                })
            }
            _ => Err(AssessmentError::IncompleteInput { missing }),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UserProfile {
    age: u8,
    gender: Gender,
    height_feet: u8,
    height_inches: u8,
    weight_lbs: u16,
}

impl UserProfile {
    pub fn new(
        age: u8,
        gender: Gender,
        height_feet: u8,
        height_inches: u8,
        weight_lbs: u16,
    ) -> Result<Self, AssessmentError> {
        ProfileInput {
            age: Some(age),
            gender: Some(gender),
            height_feet: Some(height_feet),
            height_inches: Some(height_inches),
            weight_lbs: Some(weight_lbs),
        }
        .complete()
    }
    pub fn age(&self) -> u8 {
        self.age
    }
    pub fn gender(&self) -> Gender {
        self.gender
    }
    pub fn height_feet(&self) -> u8 {
        self.height_feet
    }
    pub fn height_inches(&self) -> u8 {
        self.height_inches
    }
    pub fn total_height_inches(&self) -> u16 {
        u16::from(self.height_feet) * 12 + u16::from(self.height_inches)
    }
    pub fn weight_lbs(&self) -> u16 {
        self.weight_lbs
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Condition {
    Hypertension,
    Diabetes,
    Smoker,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ConditionFlags {
    pub has_hypertension: bool,
    pub has_diabetes: bool,
    pub is_smoker: bool,
}

impl ConditionFlags {
    /// Active conditions, always in hypertension, diabetes, smoker order.
    pub fn active(&self) -> Vec<Condition> {
        [
            (self.has_hypertension, Condition::Hypertension),
            (self.has_diabetes, Condition::Diabetes),
            (self.is_smoker, Condition::Smoker),
        ]
        .into_iter()
        .filter_map(|(on, condition)| on.then_some(condition))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn full_input() -> ProfileInput {
        ProfileInput {
            age: Some(35),
            gender: Some(Gender::Female),
            height_feet: Some(5),
            height_inches: Some(6),
            weight_lbs: Some(136),
        }
    }

    #[test]
    fn complete_input_builds_profile() {
        let profile = full_input().complete().unwrap();
        assert_eq!(profile.age(), 35);
        assert_eq!(profile.gender(), Gender::Female);
        assert_eq!(profile.total_height_inches(), 66);
        assert_eq!(profile.weight_lbs(), 136);
    }

    #[test]
    fn each_unselected_field_is_reported() {
        let test_data = [
            (ProfileInput { age: None, ..full_input() }, vec![Field::Age]),
            (ProfileInput { gender: None, ..full_input() }, vec![Field::Gender]),
            (
                ProfileInput { height_feet: None, ..full_input() },
                vec![Field::HeightFeet],
            ),
            (
                ProfileInput { height_inches: None, ..full_input() },
                vec![Field::HeightInches],
            ),
            (
                ProfileInput { weight_lbs: None, ..full_input() },
                vec![Field::WeightLbs],
            ),
            (
                ProfileInput::default(),
                vec![
                    Field::Age,
                    Field::Gender,
                    Field::HeightFeet,
                    Field::HeightInches,
                    Field::WeightLbs,
                ],
            ),
        ];

        for (input, expected) in test_data {
            assert_eq!(
                input.complete(),
                Err(AssessmentError::IncompleteInput { missing: expected })
            );
        }
    }

    #[test]
    fn values_outside_selection_domain_count_as_unselected() {
        let test_data = [
            (ProfileInput { age: Some(19), ..full_input() }, Field::Age),
            (ProfileInput { age: Some(60), ..full_input() }, Field::Age),
            (
                ProfileInput { height_feet: Some(3), ..full_input() },
                Field::HeightFeet,
            ),
            (
                ProfileInput { height_feet: Some(7), ..full_input() },
                Field::HeightFeet,
            ),
            (
                ProfileInput { height_inches: Some(12), ..full_input() },
                Field::HeightInches,
            ),
            (
                ProfileInput { weight_lbs: Some(89), ..full_input() },
                Field::WeightLbs,
            ),
            (
                ProfileInput { weight_lbs: Some(351), ..full_input() },
                Field::WeightLbs,
            ),
        ];

        for (input, field) in test_data {
            assert_eq!(input.missing_fields(), vec![field]);
            assert!(input.complete().is_err());
        }
    }

    #[test]
    fn domain_bounds_are_selectable() {
        assert!(UserProfile::new(20, Gender::Male, 4, 0, 90).is_ok());
        assert!(UserProfile::new(59, Gender::Other, 6, 11, 350).is_ok());
    }

    #[test]
    fn gender_labels() {
        for (label, gender) in [
            ("Male", Gender::Male),
            ("Female", Gender::Female),
            ("Other", Gender::Other),
        ] {
            assert_eq!(gender.to_string(), label);
            assert_eq!(Gender::from_str(label), Ok(gender));
        }
        assert!(Gender::from_str("Select...").is_err());
    }

    #[test]
    fn active_conditions_keep_fixed_order() {
        let flags = ConditionFlags {
            has_hypertension: true,
            has_diabetes: true,
            is_smoker: true,
        };
        assert_eq!(
            flags.active(),
            vec![Condition::Hypertension, Condition::Diabetes, Condition::Smoker]
        );
        assert!(ConditionFlags::default().active().is_empty());
        let smoker_only = ConditionFlags {
            is_smoker: true,
            ..Default::default()
        };
        assert_eq!(smoker_only.active(), vec![Condition::Smoker]);
    }
}
