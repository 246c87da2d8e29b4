use crate::profile::Field;

pub const INCOMPLETE_INPUT_PROMPT: &str = "Please fill out all fields above to calculate your BMI.";

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    #[error("{}", INCOMPLETE_INPUT_PROMPT)]
    IncompleteInput { missing: Vec<Field> },
    #[error("total height of {total_inches} in is not a usable height")]
    InvalidHeight { total_inches: u16 },
}
