//! Default event validation

use async_trait::async_trait;
use eventpipe_core::{Error, Event, Result, Validator};
use uuid::Uuid;

/// Checks the fields every event must carry before any work is spent on it.
///
/// Rejects events with an empty `type` or `source`, and events whose caller
/// supplied an `id` that is not a valid UUID. An empty `id` is fine; ingest
/// generates one.
#[derive(Debug, Default)]
pub struct BasicValidator;

impl BasicValidator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Validator for BasicValidator {
    async fn validate(&self, event: &Event) -> Result<()> {
        if event.event_type.is_empty() {
            return Err(Error::missing_field("type"));
        }
        if event.source.is_empty() {
            return Err(Error::missing_field("source"));
        }

        if !event.id.is_empty() && Uuid::parse_str(&event.id).is_err() {
            return Err(Error::invalid_format("id", "not a valid UUID"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_event() -> Event {
        Event::new("user_action", "web")
    }

    #[tokio::test]
    async fn test_validate_valid_event() {
        let validator = BasicValidator::new();
        let fixture = create_test_event();
        let actual = validator.validate(&fixture).await;
        assert!(actual.is_ok());
    }

    #[tokio::test]
    async fn test_validate_missing_type() {
        let validator = BasicValidator::new();
        let mut fixture = create_test_event();
        fixture.event_type = String::new();

        let actual = validator.validate(&fixture).await.unwrap_err();
        assert!(matches!(actual, Error::MissingField { field: "type" }));
    }

    #[tokio::test]
    async fn test_validate_missing_source() {
        let validator = BasicValidator::new();
        let mut fixture = create_test_event();
        fixture.source = String::new();

        let actual = validator.validate(&fixture).await.unwrap_err();
        assert!(matches!(actual, Error::MissingField { field: "source" }));
    }

    #[tokio::test]
    async fn test_validate_malformed_id() {
        let validator = BasicValidator::new();
        let fixture = create_test_event().id("not-a-uuid");

        let actual = validator.validate(&fixture).await.unwrap_err();
        assert!(matches!(actual, Error::InvalidFormat { field: "id", .. }));
    }

    #[tokio::test]
    async fn test_validate_empty_id_allowed() {
        // An empty id is filled in at ingest, so it is not a validation error.
        let validator = BasicValidator::new();
        let fixture = create_test_event().id("");

        let actual = validator.validate(&fixture).await;
        assert!(actual.is_ok());
    }

    #[tokio::test]
    async fn test_validate_error_messages() {
        let validator = BasicValidator::new();
        let fixture = create_test_event().id("nope");

        let actual = validator.validate(&fixture).await.unwrap_err();
        assert_eq!(format!("{actual}"), "invalid id format: not a valid UUID");
    }
}
