//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod hero_handlers;
mod power_handlers;

pub use hero_handlers::*;
pub use power_handlers::*;
