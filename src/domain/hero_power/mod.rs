//! HeroPower Context - 英雄能力关联上下文
//!
//! 职责:
//! - 强度等级（Strong / Weak / Average）的解析与约束

mod errors;
mod value_objects;

pub use errors::HeroPowerError;
pub use value_objects::Strength;
