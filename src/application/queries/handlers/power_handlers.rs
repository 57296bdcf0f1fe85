//! Power Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{PowerRecord, PowerRepositoryPort};
use crate::application::queries::{GetPower, ListPowers};

// ============================================================================
// Response DTOs
// ============================================================================

/// 能力详情响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<PowerRecord> for PowerResponse {
    fn from(record: PowerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetPower Handler
pub struct GetPowerHandler {
    power_repo: Arc<dyn PowerRepositoryPort>,
}

impl GetPowerHandler {
    pub fn new(power_repo: Arc<dyn PowerRepositoryPort>) -> Self {
        Self { power_repo }
    }

    pub async fn handle(&self, query: GetPower) -> Result<PowerResponse, ApplicationError> {
        let power = self
            .power_repo
            .find_by_id(query.power_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Power", query.power_id))?;

        Ok(PowerResponse::from(power))
    }
}

/// ListPowers Handler
pub struct ListPowersHandler {
    power_repo: Arc<dyn PowerRepositoryPort>,
}

impl ListPowersHandler {
    pub fn new(power_repo: Arc<dyn PowerRepositoryPort>) -> Self {
        Self { power_repo }
    }

    pub async fn handle(&self, _query: ListPowers) -> Result<Vec<PowerResponse>, ApplicationError> {
        let powers = self.power_repo.find_all().await?;
        Ok(powers.into_iter().map(PowerResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryStore;

    #[tokio::test]
    async fn test_get_missing_power() {
        let store = InMemoryStore::new();
        let handler = GetPowerHandler::new(store.clone());

        let err = handler.handle(GetPower { power_id: 7 }).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::NotFound { resource_type: "Power", id: 7 }
        ));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let store = InMemoryStore::new();
        let handler = ListPowersHandler::new(store);

        assert!(handler.handle(ListPowers).await.unwrap().is_empty());
    }
}
