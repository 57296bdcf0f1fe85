//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod hero_power_commands;
mod power_commands;

pub mod handlers;

pub use hero_power_commands::*;
pub use power_commands::*;
