//! HeroPower Command Handlers

use std::sync::Arc;

use crate::application::commands::CreateHeroPower;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    HeroPowerRepositoryPort, HeroRecord, HeroRepositoryPort, NewHeroPower, PowerRepositoryPort,
    RepositoryError,
};
use crate::application::queries::handlers::PowerResponse;
use crate::domain::Strength;

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const INVALID_STRENGTH: &str = "Invalid strength value";
pub const HERO_OR_POWER_NOT_FOUND: &str = "Hero or Power not found";

// ============================================================================
// Response DTOs
// ============================================================================

/// 关联响应中嵌套的英雄信息（不含能力列表）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSummary {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

impl From<HeroRecord> for HeroSummary {
    fn from(record: HeroRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            super_name: record.super_name,
        }
    }
}

/// 创建关联响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateHeroPowerResponse {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub hero: HeroSummary,
    pub power: PowerResponse,
}

// ============================================================================
// CreateHeroPower
// ============================================================================

/// CreateHeroPower Handler
pub struct CreateHeroPowerHandler {
    hero_repo: Arc<dyn HeroRepositoryPort>,
    power_repo: Arc<dyn PowerRepositoryPort>,
    hero_power_repo: Arc<dyn HeroPowerRepositoryPort>,
}

impl CreateHeroPowerHandler {
    pub fn new(
        hero_repo: Arc<dyn HeroRepositoryPort>,
        power_repo: Arc<dyn PowerRepositoryPort>,
        hero_power_repo: Arc<dyn HeroPowerRepositoryPort>,
    ) -> Self {
        Self {
            hero_repo,
            power_repo,
            hero_power_repo,
        }
    }

    pub async fn handle(
        &self,
        command: CreateHeroPower,
    ) -> Result<CreateHeroPowerResponse, ApplicationError> {
        // 缺失 = 未提供、为 null 或为假值（id 为 0、strength 为空字符串）
        let (Some(hero_id), Some(power_id), Some(strength)) = (
            command.hero_id.filter(|id| *id != 0),
            command.power_id.filter(|id| *id != 0),
            command.strength.filter(|s| !s.is_empty()),
        ) else {
            return Err(ApplicationError::validation(MISSING_REQUIRED_FIELDS));
        };

        let strength: Strength = strength
            .parse()
            .map_err(|_| ApplicationError::validation(INVALID_STRENGTH))?;

        let hero = self.hero_repo.find_by_id(hero_id).await?;
        let power = self.power_repo.find_by_id(power_id).await?;
        let (Some(hero), Some(power)) = (hero, power) else {
            return Err(ApplicationError::reference_not_found(HERO_OR_POWER_NOT_FOUND));
        };

        let new_hero_power = NewHeroPower {
            hero_id: hero.id,
            power_id: power.id,
            strength,
        };

        // 检查与插入之间行被删除时，外键约束兜底
        let record = self
            .hero_power_repo
            .create(&new_hero_power)
            .await
            .map_err(|e| match e {
                RepositoryError::ConstraintViolation(_) => {
                    ApplicationError::reference_not_found(HERO_OR_POWER_NOT_FOUND)
                }
                other => other.into(),
            })?;

        tracing::info!(
            hero_power_id = record.id,
            hero_id = record.hero_id,
            power_id = record.power_id,
            strength = %record.strength,
            "Hero power created"
        );

        Ok(CreateHeroPowerResponse {
            id: record.id,
            hero_id: record.hero_id,
            power_id: record.power_id,
            strength: record.strength,
            hero: HeroSummary::from(hero),
            power: PowerResponse::from(power),
        })
    }
}
