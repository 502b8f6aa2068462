//! Fixed identities, addresses, and action weights for simulated traffic.

use crate::core::event::Action;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Users normal traffic is drawn from. Excludes the admin identity.
pub const ROSTER: [&str; 4] = ["alice", "bob", "charlie", "testuser"];

/// Source addresses normal traffic is drawn from.
pub const ADDRESS_POOL: [&str; 4] = [
    "192.168.1.10",
    "192.168.1.11",
    "192.168.1.12",
    "192.168.1.50",
];

/// The designated admin identity and its fixed address.
pub const ADMIN_USER: &str = "admin";
pub const ADMIN_ADDRESS: &str = "192.168.1.99";

/// Brute-force scenario target and origin.
pub const BRUTE_FORCE_TARGET: &str = "testuser";
pub const ATTACKER_ADDRESS: &str = "192.168.1.50";

/// Resource categories.
pub const RESOURCE_AUTH: &str = "auth";
pub const RESOURCE_FILESYSTEM: &str = "filesystem";
pub const RESOURCE_SYSTEM: &str = "system";
pub const RESOURCE_AUDIT_LOG: &str = "audit_log";

/// Error while building an action selector.
#[derive(Debug)]
pub enum CatalogError {
    EmptyActionSet,
    WeightedIndex(rand::distributions::WeightedError),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::EmptyActionSet => write!(f, "no actions available"),
            CatalogError::WeightedIndex(err) => write!(f, "invalid action weights: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Weighted-random action picker for normal traffic.
#[derive(Debug)]
pub struct ActionSelector {
    actions: Vec<Action>,
    index: WeightedIndex<u32>,
}

impl ActionSelector {
    pub fn new(entries: Vec<(Action, u32)>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::EmptyActionSet);
        }
        let weights: Vec<u32> = entries.iter().map(|(_, weight)| *weight).collect();
        let index = WeightedIndex::new(&weights).map_err(CatalogError::WeightedIndex)?;
        let actions = entries.into_iter().map(|(action, _)| action).collect();
        Ok(Self { actions, index })
    }

    /// The fixed normal-traffic mix: 60/20/15/5.
    pub fn curated() -> Result<Self, CatalogError> {
        Self::new(vec![
            (Action::LoginSuccess, 60),
            (Action::LoginFail, 20),
            (Action::FileAccess, 15),
            (Action::AdminAction, 5),
        ])
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        self.actions[self.index.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn curated_covers_the_four_normal_actions() {
        let selector = ActionSelector::curated().expect("curated selector");
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(selector.choose(&mut rng));
        }
        for action in [
            Action::LoginSuccess,
            Action::LoginFail,
            Action::FileAccess,
            Action::AdminAction,
        ] {
            assert!(seen.contains(&action), "{action} never sampled");
        }
        assert!(!seen.contains(&Action::LogTampering));
    }

    #[test]
    fn empty_action_set_is_rejected() {
        assert!(matches!(
            ActionSelector::new(Vec::new()),
            Err(CatalogError::EmptyActionSet)
        ));
    }

    #[test]
    fn zero_weights_are_rejected() {
        let result = ActionSelector::new(vec![(Action::LoginSuccess, 0)]);
        assert!(matches!(result, Err(CatalogError::WeightedIndex(_))));
    }

    #[test]
    fn roster_excludes_admin() {
        assert!(!ROSTER.contains(&ADMIN_USER));
    }
}
