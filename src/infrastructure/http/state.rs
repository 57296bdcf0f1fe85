//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态，handler 通过 axum `State` 注入

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateHeroPowerHandler, UpdatePowerHandler,
    // Query handlers
    GetHeroHandler, GetPowerHandler, ListHeroesHandler, ListPowersHandler,
    // Ports
    HeroPowerRepositoryPort, HeroRepositoryPort, PowerRepositoryPort,
};
use crate::infrastructure::persistence::sqlite::{
    DbPool, SqliteHeroPowerRepository, SqliteHeroRepository, SqlitePowerRepository,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub update_power_handler: UpdatePowerHandler,
    pub create_hero_power_handler: CreateHeroPowerHandler,

    // ========== Query Handlers ==========
    pub list_heroes_handler: ListHeroesHandler,
    pub get_hero_handler: GetHeroHandler,
    pub list_powers_handler: ListPowersHandler,
    pub get_power_handler: GetPowerHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        hero_repo: Arc<dyn HeroRepositoryPort>,
        power_repo: Arc<dyn PowerRepositoryPort>,
        hero_power_repo: Arc<dyn HeroPowerRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            update_power_handler: UpdatePowerHandler::new(power_repo.clone()),
            create_hero_power_handler: CreateHeroPowerHandler::new(
                hero_repo.clone(),
                power_repo.clone(),
                hero_power_repo.clone(),
            ),

            // Query handlers
            list_heroes_handler: ListHeroesHandler::new(
                hero_repo.clone(),
                hero_power_repo.clone(),
            ),
            get_hero_handler: GetHeroHandler::new(hero_repo, hero_power_repo),
            list_powers_handler: ListPowersHandler::new(power_repo.clone()),
            get_power_handler: GetPowerHandler::new(power_repo),
        }
    }

    /// 基于 SQLite 连接池创建应用状态
    pub fn with_sqlite(pool: DbPool) -> Self {
        Self::new(
            Arc::new(SqliteHeroRepository::new(pool.clone())),
            Arc::new(SqlitePowerRepository::new(pool.clone())),
            Arc::new(SqliteHeroPowerRepository::new(pool)),
        )
    }
}
