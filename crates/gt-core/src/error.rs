use thiserror::Error;

pub type GtResult<T> = Result<T, GtError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GtError {
    #[error("Invalid node id {input:?}: expected a non-negative integer")]
    InvalidNodeId { input: String },

    #[error("Non-finite coordinate for {what}")]
    NonFinite { what: &'static str },
}
