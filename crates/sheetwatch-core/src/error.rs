use thiserror::Error;

/// The audit pipeline stages, each of which runs inside an isolated failure
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DateColumnFetch,
    RangeGeneration,
    ExceptionPreparation,
    MissingDateComputation,
    DuplicateComputation,
    MessageComposition,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::DateColumnFetch => write!(f, "Date Column Fetch"),
            Stage::RangeGeneration => write!(f, "Date Range Generation"),
            Stage::ExceptionPreparation => write!(f, "Exception Preparation"),
            Stage::MissingDateComputation => write!(f, "Missing Date Computation"),
            Stage::DuplicateComputation => write!(f, "Duplicate Computation"),
            Stage::MessageComposition => write!(f, "Message Composition"),
        }
    }
}

/// A recorded failure of one pipeline stage.
///
/// Recording a stage error does not halt the remaining stages; it forces the
/// dispatcher onto the admin error path, where every recorded error is
/// surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stage}: {detail}")]
pub struct StageError {
    pub stage: Stage,
    pub detail: String,
}

impl StageError {
    #[must_use]
    pub fn new(stage: Stage, detail: impl Into<String>) -> Self {
        Self {
            stage,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_error_renders_stage_and_detail() {
        let err = StageError::new(Stage::DuplicateComputation, "boom");
        assert_eq!(err.to_string(), "Duplicate Computation: boom");
    }
}
