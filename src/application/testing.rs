//! 测试用内存仓储
//!
//! 同时实现三个 Repository Port，便于在不依赖 SQLite 的情况下测试 handler

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{
    HeroPowerDetail, HeroPowerRecord, HeroPowerRepositoryPort, HeroRecord, HeroRepositoryPort,
    NewHeroPower, PowerRecord, PowerRepositoryPort, RepositoryError,
};
use crate::domain::{PowerDescription, Strength};

#[derive(Default)]
struct Tables {
    heroes: Vec<HeroRecord>,
    powers: Vec<PowerRecord>,
    hero_powers: Vec<HeroPowerRecord>,
    next_id: i64,
    /// 下一次写操作返回的错误
    write_failure: Option<RepositoryError>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn detail(&self, hero_power: &HeroPowerRecord) -> Option<HeroPowerDetail> {
        let power = self.powers.iter().find(|p| p.id == hero_power.power_id)?;
        Some(HeroPowerDetail {
            hero_power: hero_power.clone(),
            power: power.clone(),
        })
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_hero(&self, name: &str, super_name: &str) -> i64 {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        tables.heroes.push(HeroRecord {
            id,
            name: name.to_string(),
            super_name: super_name.to_string(),
        });
        id
    }

    pub fn add_power(&self, name: &str, description: &str) -> i64 {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        tables.powers.push(PowerRecord {
            id,
            name: name.to_string(),
            description: description.to_string(),
        });
        id
    }

    pub fn add_hero_power(&self, hero_id: i64, power_id: i64, strength: Strength) -> i64 {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        tables.hero_powers.push(HeroPowerRecord {
            id,
            hero_id,
            power_id,
            strength,
        });
        id
    }

    /// 让下一次写操作（更新描述或创建关联）失败
    pub fn fail_next_write(&self, error: RepositoryError) {
        self.tables.lock().unwrap().write_failure = Some(error);
    }

    fn take_write_failure(&self) -> Result<(), RepositoryError> {
        match self.tables.lock().unwrap().write_failure.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    pub fn power(&self, id: i64) -> Option<PowerRecord> {
        let tables = self.tables.lock().unwrap();
        tables.powers.iter().find(|p| p.id == id).cloned()
    }

    pub fn hero_powers(&self) -> Vec<HeroPowerRecord> {
        self.tables.lock().unwrap().hero_powers.clone()
    }
}

#[async_trait]
impl HeroRepositoryPort for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<HeroRecord>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.heroes.iter().find(|h| h.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<HeroRecord>, RepositoryError> {
        Ok(self.tables.lock().unwrap().heroes.clone())
    }
}

#[async_trait]
impl PowerRepositoryPort for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<PowerRecord>, RepositoryError> {
        Ok(self.power(id))
    }

    async fn find_all(&self) -> Result<Vec<PowerRecord>, RepositoryError> {
        Ok(self.tables.lock().unwrap().powers.clone())
    }

    async fn update_description(
        &self,
        id: i64,
        description: &PowerDescription,
    ) -> Result<PowerRecord, RepositoryError> {
        self.take_write_failure()?;
        let mut tables = self.tables.lock().unwrap();
        let power = tables
            .powers
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("power {}", id)))?;
        power.description = description.as_str().to_string();
        Ok(power.clone())
    }
}

#[async_trait]
impl HeroPowerRepositoryPort for InMemoryStore {
    async fn create(&self, hero_power: &NewHeroPower) -> Result<HeroPowerRecord, RepositoryError> {
        self.take_write_failure()?;
        let id = self.add_hero_power(hero_power.hero_id, hero_power.power_id, hero_power.strength);
        Ok(HeroPowerRecord {
            id,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            strength: hero_power.strength,
        })
    }

    async fn find_details_by_hero(
        &self,
        hero_id: i64,
    ) -> Result<Vec<HeroPowerDetail>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .hero_powers
            .iter()
            .filter(|hp| hp.hero_id == hero_id)
            .filter_map(|hp| tables.detail(hp))
            .collect())
    }

    async fn find_all_details(&self) -> Result<Vec<HeroPowerDetail>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .hero_powers
            .iter()
            .filter_map(|hp| tables.detail(hp))
            .collect())
    }
}
