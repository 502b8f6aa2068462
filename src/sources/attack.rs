//! Fixed attack scenarios: brute force, privilege abuse, log tampering.

use super::catalog::{
    ADMIN_ADDRESS, ADMIN_USER, ATTACKER_ADDRESS, BRUTE_FORCE_TARGET, RESOURCE_AUDIT_LOG,
    RESOURCE_AUTH, RESOURCE_SYSTEM,
};
use crate::core::builder::RecordBuilder;
use crate::core::event::{Action, Event};
use crate::core::traits::EventSource;
use serde_json::{Map, Value};
use std::io;

/// Number of failed logins emitted by the brute-force scenario.
pub const BRUTE_FORCE_ATTEMPTS: u64 = 15;

/// Number of role changes emitted by the privilege-abuse scenario.
pub const PRIVILEGE_ABUSE_EVENTS: usize = 5;

/// Repeated failed logins for one target from one attacker address, with a
/// climbing attempt counter.
pub struct BruteForceScenario {
    builder: RecordBuilder,
    next_attempt: u64,
}

impl BruteForceScenario {
    pub fn new() -> Self {
        Self::with_builder(RecordBuilder::new())
    }

    pub fn with_builder(builder: RecordBuilder) -> Self {
        Self {
            builder,
            next_attempt: 1,
        }
    }
}

impl Default for BruteForceScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for BruteForceScenario {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        if self.next_attempt > BRUTE_FORCE_ATTEMPTS {
            return Ok(None);
        }
        let mut metadata = Map::new();
        metadata.insert("attempt".to_string(), Value::from(self.next_attempt));
        self.next_attempt += 1;
        Ok(Some(self.builder.build(
            BRUTE_FORCE_TARGET,
            ATTACKER_ADDRESS,
            Action::LoginFail,
            RESOURCE_AUTH,
            metadata,
        )))
    }
}

/// Repeated admin role changes against the same target account.
pub struct PrivilegeAbuseScenario {
    builder: RecordBuilder,
    remaining: usize,
}

impl PrivilegeAbuseScenario {
    pub fn new() -> Self {
        Self::with_builder(RecordBuilder::new())
    }

    pub fn with_builder(builder: RecordBuilder) -> Self {
        Self {
            builder,
            remaining: PRIVILEGE_ABUSE_EVENTS,
        }
    }
}

impl Default for PrivilegeAbuseScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for PrivilegeAbuseScenario {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        let mut metadata = Map::new();
        metadata.insert("action".to_string(), Value::from("role_change"));
        metadata.insert("target".to_string(), Value::from("bob"));
        Ok(Some(self.builder.build(
            ADMIN_USER,
            ADMIN_ADDRESS,
            Action::AdminAction,
            RESOURCE_SYSTEM,
            metadata,
        )))
    }
}

/// A single audit-log tampering event.
pub struct LogTamperingScenario {
    builder: RecordBuilder,
    emitted: bool,
}

impl LogTamperingScenario {
    pub fn new() -> Self {
        Self::with_builder(RecordBuilder::new())
    }

    pub fn with_builder(builder: RecordBuilder) -> Self {
        Self {
            builder,
            emitted: false,
        }
    }
}

impl Default for LogTamperingScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for LogTamperingScenario {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        if self.emitted {
            return Ok(None);
        }
        self.emitted = true;
        let mut metadata = Map::new();
        metadata.insert("method".to_string(), Value::from("delete_event"));
        Ok(Some(self.builder.build(
            ADMIN_USER,
            ADMIN_ADDRESS,
            Action::LogTampering,
            RESOURCE_AUDIT_LOG,
            metadata,
        )))
    }
}
