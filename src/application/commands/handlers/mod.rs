//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod hero_power_handlers;
mod power_handlers;

pub use hero_power_handlers::*;
pub use power_handlers::*;
