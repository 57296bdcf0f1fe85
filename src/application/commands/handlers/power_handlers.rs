//! Power Command Handlers

use std::sync::Arc;

use crate::application::commands::UpdatePower;
use crate::application::error::ApplicationError;
use crate::application::ports::{PowerRepositoryPort, RepositoryError};
use crate::application::queries::handlers::PowerResponse;
use crate::domain::PowerDescription;

pub const NO_VALID_FIELDS: &str = "No valid fields provided";

/// UpdatePower Handler
pub struct UpdatePowerHandler {
    power_repo: Arc<dyn PowerRepositoryPort>,
}

impl UpdatePowerHandler {
    pub fn new(power_repo: Arc<dyn PowerRepositoryPort>) -> Self {
        Self { power_repo }
    }

    pub async fn handle(&self, command: UpdatePower) -> Result<PowerResponse, ApplicationError> {
        let power_id = command.power_id;

        // 先确认能力存在，再校验请求内容
        let power = self
            .power_repo
            .find_by_id(power_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Power", power_id))?;

        let description = command
            .description
            .and_then(|d| PowerDescription::new(d).ok())
            .ok_or_else(|| ApplicationError::validation(NO_VALID_FIELDS))?;

        let updated = self
            .power_repo
            .update_description(power.id, &description)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => ApplicationError::not_found("Power", power_id),
                RepositoryError::ConstraintViolation(msg) => ApplicationError::ValidationError(msg),
                other => other.into(),
            })?;

        tracing::info!(
            power_id = updated.id,
            name = %updated.name,
            "Power description updated"
        );

        Ok(PowerResponse::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryStore;

    fn update(power_id: i64, description: Option<&str>) -> UpdatePower {
        UpdatePower {
            power_id,
            description: description.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_update_sets_description() {
        let store = InMemoryStore::new();
        let id = store.add_power("flight", "gives the wielder the ability to fly");
        let handler = UpdatePowerHandler::new(store.clone());

        let power = handler
            .handle(update(id, Some("soars through the skies at supersonic speed")))
            .await
            .unwrap();

        assert_eq!(power.description, "soars through the skies at supersonic speed");
        assert_eq!(power.name, "flight");
        let stored = store.power(id).unwrap();
        assert_eq!(stored.description, "soars through the skies at supersonic speed");
    }

    #[tokio::test]
    async fn test_missing_or_empty_description_leaves_row_unchanged() {
        let store = InMemoryStore::new();
        let id = store.add_power("flight", "gives the wielder the ability to fly");
        let handler = UpdatePowerHandler::new(store.clone());

        for description in [None, Some("")] {
            let err = handler.handle(update(id, description)).await.unwrap_err();
            assert_eq!(err.to_string(), NO_VALID_FIELDS);
        }

        let stored = store.power(id).unwrap();
        assert_eq!(stored.description, "gives the wielder the ability to fly");
    }

    #[tokio::test]
    async fn test_not_found_checked_before_body() {
        let store = InMemoryStore::new();
        let handler = UpdatePowerHandler::new(store);

        let err = handler.handle(update(5, None)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Power", .. }));
    }

    #[tokio::test]
    async fn test_store_constraint_violation_is_validation_error() {
        let store = InMemoryStore::new();
        let id = store.add_power("flight", "gives the wielder the ability to fly");
        store.fail_next_write(RepositoryError::ConstraintViolation(
            "CHECK constraint failed: length(description) > 0".to_string(),
        ));

        let err = UpdatePowerHandler::new(store.clone())
            .handle(update(id, Some("glides")))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::ValidationError(ref m) if m == "CHECK constraint failed: length(description) > 0"
        ));
        let stored = store.power(id).unwrap();
        assert_eq!(stored.description, "gives the wielder the ability to fly");
    }

    #[tokio::test]
    async fn test_store_failure_is_repository_error() {
        let store = InMemoryStore::new();
        let id = store.add_power("flight", "gives the wielder the ability to fly");
        store.fail_next_write(RepositoryError::DatabaseError("disk I/O error".to_string()));

        let err = UpdatePowerHandler::new(store)
            .handle(update(id, Some("glides")))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::RepositoryError(ref m) if m.contains("disk I/O error")));
    }
}
