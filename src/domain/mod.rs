//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Power Context: 能力描述规则
//! - HeroPower Context: 英雄与能力的关联（强度等级）
//!
//! Hero 本身没有可变规则，只作为持久化记录存在（见 application::ports）

pub mod hero_power;
pub mod power;

pub use hero_power::{HeroPowerError, Strength};
pub use power::{PowerDescription, PowerError};
