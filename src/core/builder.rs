use crate::core::event::{Action, Event};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Map;
use uuid::Uuid;

/// Supplies the current time for record stamping.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Supplies fresh record identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Builds fully populated event records.
///
/// Time and identifier generation are injected so tests can pin both to
/// fixed sequences.
pub struct RecordBuilder {
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl RecordBuilder {
    /// Creates a builder backed by the system clock and UUID v4 identifiers.
    pub fn new() -> Self {
        Self::with_parts(Box::new(SystemClock), Box::new(UuidIdSource))
    }

    /// Creates a builder with explicit time and identifier sources.
    pub fn with_parts(clock: Box<dyn Clock>, ids: Box<dyn IdSource>) -> Self {
        Self { clock, ids }
    }

    /// Builds one record. Argument values are accepted as-is, unvalidated.
    pub fn build(
        &mut self,
        user: &str,
        source_address: &str,
        action: Action,
        resource: &str,
        metadata: Map<String, serde_json::Value>,
    ) -> Event {
        Event {
            event_id: self.ids.next_id(),
            timestamp: self
                .clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            user: user.to_string(),
            source_address: source_address.to_string(),
            action,
            resource: resource.to_string(),
            metadata,
        }
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::fixed_builder;
    use super::*;

    #[test]
    fn build_stamps_id_and_timestamp() {
        let mut builder = fixed_builder();
        let event = builder.build("alice", "192.168.1.10", Action::LoginSuccess, "auth", Map::new());
        assert_eq!(event.event_id, "id-0");
        assert_eq!(event.timestamp, "2024-01-01T00:00:00.000Z");
        assert_eq!(event.user, "alice");
        assert_eq!(event.source_address, "192.168.1.10");
        assert_eq!(event.resource, "auth");
        assert!(event.metadata.is_empty());
    }

    #[test]
    fn ids_advance_per_record() {
        let mut builder = fixed_builder();
        let first = builder.build("a", "1.1.1.1", Action::LoginFail, "auth", Map::new());
        let second = builder.build("a", "1.1.1.1", Action::LoginFail, "auth", Map::new());
        assert_ne!(first.event_id, second.event_id);
    }

    #[test]
    fn default_builder_emits_unique_uuids() {
        let mut builder = RecordBuilder::new();
        let first = builder.build("a", "1.1.1.1", Action::FileAccess, "filesystem", Map::new());
        let second = builder.build("a", "1.1.1.1", Action::FileAccess, "filesystem", Map::new());
        assert_ne!(first.event_id, second.event_id);
        assert_eq!(first.event_id.len(), 36);
    }
}
