use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A recorded action lacks the annotation the caller asked to extract.
    #[error("Recorded action {index} has no '{field}' entry")]
    MissingField { index: usize, field: String },

    /// A transcript line appears before any speaker label.
    #[error("Transcript line {line} is not attributed to a speaker")]
    UnattributedLine { line: usize },
}

pub type Result<T> = std::result::Result<T, FormatError>;
