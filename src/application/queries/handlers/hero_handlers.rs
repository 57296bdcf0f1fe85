//! Hero Query Handlers
//!
//! 英雄详情总是带上其关联的能力列表（含强度）

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    HeroPowerDetail, HeroPowerRepositoryPort, HeroRecord, HeroRepositoryPort,
};
use crate::application::queries::handlers::PowerResponse;
use crate::application::queries::{GetHero, ListHeroes};
use crate::domain::Strength;

// ============================================================================
// Response DTOs
// ============================================================================

/// 英雄详情中的单条能力关联
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPowerItem {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub power: PowerResponse,
}

impl From<HeroPowerDetail> for HeroPowerItem {
    fn from(detail: HeroPowerDetail) -> Self {
        Self {
            id: detail.hero_power.id,
            hero_id: detail.hero_power.hero_id,
            power_id: detail.hero_power.power_id,
            strength: detail.hero_power.strength,
            power: PowerResponse::from(detail.power),
        }
    }
}

/// 英雄详情响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroResponse {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerItem>,
}

impl HeroResponse {
    fn assemble(hero: HeroRecord, details: Vec<HeroPowerDetail>) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers: details.into_iter().map(HeroPowerItem::from).collect(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetHero Handler
pub struct GetHeroHandler {
    hero_repo: Arc<dyn HeroRepositoryPort>,
    hero_power_repo: Arc<dyn HeroPowerRepositoryPort>,
}

impl GetHeroHandler {
    pub fn new(
        hero_repo: Arc<dyn HeroRepositoryPort>,
        hero_power_repo: Arc<dyn HeroPowerRepositoryPort>,
    ) -> Self {
        Self {
            hero_repo,
            hero_power_repo,
        }
    }

    pub async fn handle(&self, query: GetHero) -> Result<HeroResponse, ApplicationError> {
        let hero = self
            .hero_repo
            .find_by_id(query.hero_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Hero", query.hero_id))?;

        let details = self.hero_power_repo.find_details_by_hero(hero.id).await?;

        Ok(HeroResponse::assemble(hero, details))
    }
}

/// ListHeroes Handler
pub struct ListHeroesHandler {
    hero_repo: Arc<dyn HeroRepositoryPort>,
    hero_power_repo: Arc<dyn HeroPowerRepositoryPort>,
}

impl ListHeroesHandler {
    pub fn new(
        hero_repo: Arc<dyn HeroRepositoryPort>,
        hero_power_repo: Arc<dyn HeroPowerRepositoryPort>,
    ) -> Self {
        Self {
            hero_repo,
            hero_power_repo,
        }
    }

    pub async fn handle(&self, _query: ListHeroes) -> Result<Vec<HeroResponse>, ApplicationError> {
        let heroes = self.hero_repo.find_all().await?;
        if heroes.is_empty() {
            return Ok(Vec::new());
        }

        // 一次取出全部关联，按 hero_id 分组，避免逐个英雄查询
        let mut by_hero: HashMap<i64, Vec<HeroPowerDetail>> = HashMap::new();
        for detail in self.hero_power_repo.find_all_details().await? {
            by_hero
                .entry(detail.hero_power.hero_id)
                .or_default()
                .push(detail);
        }

        Ok(heroes
            .into_iter()
            .map(|hero| {
                let details = by_hero.remove(&hero.id).unwrap_or_default();
                HeroResponse::assemble(hero, details)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryStore;

    #[tokio::test]
    async fn test_get_hero_includes_its_powers_only() {
        let store = InMemoryStore::new();
        let kamala = store.add_hero("Kamala Khan", "Ms. Marvel");
        let doreen = store.add_hero("Doreen Green", "Squirrel Girl");
        let flight = store.add_power("flight", "gives the wielder the ability to fly");
        let strength = store.add_power("super strength", "gives the wielder super-human strengths");
        store.add_hero_power(kamala, flight, Strength::Strong);
        store.add_hero_power(doreen, strength, Strength::Weak);

        let handler = GetHeroHandler::new(store.clone(), store.clone());
        let hero = handler.handle(GetHero { hero_id: kamala }).await.unwrap();

        assert_eq!(hero.super_name, "Ms. Marvel");
        assert_eq!(hero.hero_powers.len(), 1);
        assert_eq!(hero.hero_powers[0].power.name, "flight");
        assert_eq!(hero.hero_powers[0].strength, Strength::Strong);
    }

    #[tokio::test]
    async fn test_get_missing_hero() {
        let store = InMemoryStore::new();
        let handler = GetHeroHandler::new(store.clone(), store.clone());

        let err = handler.handle(GetHero { hero_id: 99 }).await.unwrap_err();
        assert_eq!(err.to_string(), "Hero not found");
    }

    #[tokio::test]
    async fn test_list_groups_powers_per_hero() {
        let store = InMemoryStore::new();
        let first = store.add_hero("Gwen Stacy", "Spider-Gwen");
        let second = store.add_hero("Janet Van Dyne", "The Wasp");
        let power = store.add_power("elasticity", "can stretch the human body to extreme lengths");
        store.add_hero_power(first, power, Strength::Average);
        store.add_hero_power(first, power, Strength::Strong);

        let handler = ListHeroesHandler::new(store.clone(), store.clone());
        let heroes = handler.handle(ListHeroes).await.unwrap();

        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0].id, first);
        assert_eq!(heroes[0].hero_powers.len(), 2);
        assert_eq!(heroes[1].id, second);
        assert!(heroes[1].hero_powers.is_empty());
    }
}
