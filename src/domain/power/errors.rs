//! Power Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PowerError {
    #[error("Power description cannot be empty")]
    EmptyDescription,
}
