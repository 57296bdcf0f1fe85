//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod hero_queries;
mod power_queries;

pub mod handlers;

pub use hero_queries::*;
pub use power_queries::*;
