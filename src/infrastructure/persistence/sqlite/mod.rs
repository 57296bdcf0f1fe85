//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod hero_power_repo;
mod hero_repo;
mod power_repo;

pub use database::*;
pub use hero_power_repo::*;
pub use hero_repo::*;
pub use power_repo::*;
