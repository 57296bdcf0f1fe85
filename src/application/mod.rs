//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Hero / Power / HeroPower Repository）
//! - commands: CQRS 命令及处理器（更新能力描述、创建关联）
//! - queries: CQRS 查询及处理器（英雄、能力的列表与详情）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    handlers::{
        CreateHeroPowerHandler, CreateHeroPowerResponse, HeroSummary, UpdatePowerHandler,
        HERO_OR_POWER_NOT_FOUND, INVALID_STRENGTH, MISSING_REQUIRED_FIELDS, NO_VALID_FIELDS,
    },
    CreateHeroPower, UpdatePower,
};

pub use error::ApplicationError;

pub use ports::{
    HeroPowerDetail, HeroPowerRecord, HeroPowerRepositoryPort, HeroRecord, HeroRepositoryPort,
    NewHeroPower, PowerRecord, PowerRepositoryPort, RepositoryError,
};

pub use queries::{
    handlers::{
        GetHeroHandler, GetPowerHandler, HeroPowerItem, HeroResponse, ListHeroesHandler,
        ListPowersHandler, PowerResponse,
    },
    GetHero, GetPower, ListHeroes, ListPowers,
};
