//! HeroPower Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeroPowerError {
    #[error("Invalid strength value: {0}")]
    InvalidStrength(String),
}
