use super::intake::ValidationError;
use super::scoring::IncompleteInputError;
use super::session::AssessmentStage;

/// Advisory failures raised while walking the questionnaire. None of them end a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Incomplete(#[from] IncompleteInputError),
    #[error("answers for \"{}\" cannot be accepted during \"{}\"", .expected.title(), .actual.title())]
    OutOfOrder {
        expected: AssessmentStage,
        actual: AssessmentStage,
    },
    #[error("already at the first step")]
    AtFirstStage,
}

impl AssessmentError {
    /// True when the caller should re-display the current step with an error indicator.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Incomplete(_))
    }
}
