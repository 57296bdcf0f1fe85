//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{PowerDescription, Strength};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// 唯一约束 / 外键 / CHECK 约束被违反
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Hero Repository
// ============================================================================

/// 英雄实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroRecord {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

/// Hero Repository Port
///
/// 英雄数据由外部导入，这里只提供只读访问
#[async_trait]
pub trait HeroRepositoryPort: Send + Sync {
    /// 根据 ID 查找英雄
    async fn find_by_id(&self, id: i64) -> Result<Option<HeroRecord>, RepositoryError>;

    /// 获取所有英雄（按 id 升序）
    async fn find_all(&self) -> Result<Vec<HeroRecord>, RepositoryError>;
}

// ============================================================================
// Power Repository
// ============================================================================

/// 能力实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Power Repository Port
#[async_trait]
pub trait PowerRepositoryPort: Send + Sync {
    /// 根据 ID 查找能力
    async fn find_by_id(&self, id: i64) -> Result<Option<PowerRecord>, RepositoryError>;

    /// 获取所有能力（按 id 升序）
    async fn find_all(&self) -> Result<Vec<PowerRecord>, RepositoryError>;

    /// 更新描述，只修改 description 一列
    ///
    /// 行不存在时返回 `RepositoryError::NotFound`
    async fn update_description(
        &self,
        id: i64,
        description: &PowerDescription,
    ) -> Result<PowerRecord, RepositoryError>;
}

// ============================================================================
// HeroPower Repository
// ============================================================================

/// 英雄能力关联实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPowerRecord {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
}

/// 待插入的关联（id 由数据库分配）
#[derive(Debug, Clone)]
pub struct NewHeroPower {
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
}

/// 关联及其能力详情（英雄详情中的嵌套列表）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPowerDetail {
    pub hero_power: HeroPowerRecord,
    pub power: PowerRecord,
}

/// HeroPower Repository Port
#[async_trait]
pub trait HeroPowerRepositoryPort: Send + Sync {
    /// 插入新关联，返回带 id 的记录
    async fn create(&self, hero_power: &NewHeroPower) -> Result<HeroPowerRecord, RepositoryError>;

    /// 获取某个英雄的所有关联（含能力详情）
    async fn find_details_by_hero(
        &self,
        hero_id: i64,
    ) -> Result<Vec<HeroPowerDetail>, RepositoryError>;

    /// 获取所有关联（含能力详情），用于英雄列表
    async fn find_all_details(&self) -> Result<Vec<HeroPowerDetail>, RepositoryError>;
}
