//! Heroes API - 英雄 / 能力 REST 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Power Context: 能力描述规则
//! - HeroPower Context: 强度等级
//!
//! 应用层 (application/):
//! - Ports: Repository 端口定义
//! - Commands: 更新能力描述、创建英雄能力关联
//! - Queries: 英雄、能力的列表与详情
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
