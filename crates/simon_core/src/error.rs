use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color name: {input:?}")]
pub struct ParseColorError {
    pub input: String,
}

impl ParseColorError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
