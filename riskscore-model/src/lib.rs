pub mod advice;
pub mod assessment;
pub mod bmi;
pub mod error;
pub mod profile;

pub use advice::AdviceBundle;
pub use assessment::{assess, Assessment};
pub use bmi::{BmiResult, Category};
pub use error::{AssessmentError, INCOMPLETE_INPUT_PROMPT};
pub use profile::{Condition, ConditionFlags, Field, Gender, ProfileInput, UserProfile};
