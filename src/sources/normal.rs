use super::catalog::{
    ActionSelector, CatalogError, ADDRESS_POOL, ADMIN_ADDRESS, ADMIN_USER, RESOURCE_AUTH,
    RESOURCE_FILESYSTEM, RESOURCE_SYSTEM, ROSTER,
};
use crate::core::builder::RecordBuilder;
use crate::core::event::{Action, Event};
use crate::core::traits::EventSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use std::io;

/// Default number of events for a normal-traffic run.
pub const DEFAULT_EVENT_COUNT: usize = 30;

/// Simulated baseline traffic: independent weighted draws, no state carried
/// between iterations.
pub struct NormalTrafficGenerator {
    rng: StdRng,
    builder: RecordBuilder,
    selector: ActionSelector,
    remaining: usize,
}

impl NormalTrafficGenerator {
    pub fn new(count: usize, seed: Option<u64>) -> Result<Self, CatalogError> {
        Self::with_builder(count, seed, RecordBuilder::new())
    }

    pub fn with_builder(
        count: usize,
        seed: Option<u64>,
        builder: RecordBuilder,
    ) -> Result<Self, CatalogError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            rng,
            builder,
            selector: ActionSelector::curated()?,
            remaining: count,
        })
    }
}

impl EventSource for NormalTrafficGenerator {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;

        let user = ROSTER[self.rng.gen_range(0..ROSTER.len())];
        let address = ADDRESS_POOL[self.rng.gen_range(0..ADDRESS_POOL.len())];

        let event = match self.selector.choose(&mut self.rng) {
            Action::LoginSuccess => {
                self.builder
                    .build(user, address, Action::LoginSuccess, RESOURCE_AUTH, Map::new())
            }
            Action::LoginFail => {
                // Always attempt 1; normal traffic carries no failure streaks.
                let mut metadata = Map::new();
                metadata.insert("attempt".to_string(), Value::from(1));
                self.builder
                    .build(user, address, Action::LoginFail, RESOURCE_AUTH, metadata)
            }
            Action::FileAccess => {
                let mut metadata = Map::new();
                metadata.insert(
                    "file".to_string(),
                    Value::from(format!("/home/{user}/report.txt")),
                );
                self.builder.build(
                    user,
                    address,
                    Action::FileAccess,
                    RESOURCE_FILESYSTEM,
                    metadata,
                )
            }
            // Admin actions are always attributed to the admin identity,
            // regardless of the sampled user/address.
            _ => {
                let mut metadata = Map::new();
                metadata.insert("action".to_string(), Value::from("view_logs"));
                self.builder.build(
                    ADMIN_USER,
                    ADMIN_ADDRESS,
                    Action::AdminAction,
                    RESOURCE_SYSTEM,
                    metadata,
                )
            }
        };

        Ok(Some(event))
    }
}
