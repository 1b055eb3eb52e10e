//! Protocol-level errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("invalid facing value {0}")]
    InvalidFacing(i32),
}
