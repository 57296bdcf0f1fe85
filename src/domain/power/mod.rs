//! Power Context - 能力限界上下文
//!
//! 职责:
//! - 能力描述的有效性规则

mod errors;
mod value_objects;

pub use errors::PowerError;
pub use value_objects::PowerDescription;
