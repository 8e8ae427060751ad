use thiserror::Error;

/// Errors raised while decoding the raw workflow bytes.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("Failed to parse workflow JSON: {0}")]
    Json(String),
}

/// Errors raised while validating the decoded document against the DSL schema.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("Required field '{0}' is missing from the workflow document")]
    MissingField(&'static str),

    #[error("Field 'Steps' must be a sequence of step objects")]
    StepsNotASequence,

    #[error("Workflow document does not match the expected schema: {0}")]
    Malformed(String),

    #[error("Step id '{0}' is defined more than once")]
    DuplicateStepId(String),
}

/// Errors that can abort loading a workflow document. Dangling step
/// references are never part of this taxonomy: they are reported through
/// [`crate::graph::Diagnostics`] and the affected edge is omitted instead.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
