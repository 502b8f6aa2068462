//! Structured ingestion of real SSH authentication logs.
//!
//! Recognizes the two OpenSSH password outcomes and tracks consecutive
//! failures per (user, address) pair. Everything else is skipped.

use super::catalog::RESOURCE_AUTH;
use crate::core::builder::RecordBuilder;
use crate::core::event::{Action, Event};
use crate::core::traits::EventSource;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Default location of the system auth log.
pub const DEFAULT_AUTH_LOG: &str = "/var/log/auth.log";

const FAIL_PATTERN: &str = r"Failed password for (\w+) from ([\d.]+)";
const SUCCESS_PATTERN: &str = r"Accepted password for (\w+) from ([\d.]+)";

/// Reads an auth log line by line and emits login events.
///
/// The attempt counter lives on the ingestor and dies with it; counts are
/// never written to the output.
pub struct SshLogIngestor<R: BufRead> {
    reader: R,
    builder: RecordBuilder,
    fail_pattern: Regex,
    success_pattern: Regex,
    attempts: HashMap<(String, String), u64>,
    line: String,
}

impl SshLogIngestor<BufReader<File>> {
    /// Opens the auth log at `path`; the open error propagates.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> SshLogIngestor<R> {
    pub fn from_reader(reader: R) -> Self {
        Self::with_builder(reader, RecordBuilder::new())
    }

    pub fn with_builder(reader: R, builder: RecordBuilder) -> Self {
        Self {
            reader,
            builder,
            fail_pattern: Regex::new(FAIL_PATTERN).expect("hardcoded pattern compiles"),
            success_pattern: Regex::new(SUCCESS_PATTERN).expect("hardcoded pattern compiles"),
            attempts: HashMap::new(),
            line: String::new(),
        }
    }

    fn failure_event(&mut self, user: &str, address: &str) -> Event {
        let attempt = self
            .attempts
            .entry((user.to_string(), address.to_string()))
            .or_insert(0);
        *attempt += 1;
        let mut metadata = Map::new();
        metadata.insert("attempt".to_string(), Value::from(*attempt));
        self.builder
            .build(user, address, Action::LoginFail, RESOURCE_AUTH, metadata)
    }

    fn success_event(&mut self, user: &str, address: &str) -> Event {
        self.attempts
            .insert((user.to_string(), address.to_string()), 0);
        self.builder
            .build(user, address, Action::LoginSuccess, RESOURCE_AUTH, Map::new())
    }
}

impl<R: BufRead> EventSource for SshLogIngestor<R> {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            if let Some(captures) = self.fail_pattern.captures(&self.line) {
                let user = captures[1].to_string();
                let address = captures[2].to_string();
                return Ok(Some(self.failure_event(&user, &address)));
            }
            if let Some(captures) = self.success_pattern.captures(&self.line) {
                let user = captures[1].to_string();
                let address = captures[2].to_string();
                return Ok(Some(self.success_event(&user, &address)));
            }
            // Unrecognized line shapes are skipped silently.
        }
    }
}
