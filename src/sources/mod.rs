//! Event sources: simulated traffic, attack scenarios, and real-log ingestion.

pub mod attack;
pub mod catalog;
pub mod normal;
pub mod ssh;

pub use attack::{BruteForceScenario, LogTamperingScenario, PrivilegeAbuseScenario};
pub use normal::NormalTrafficGenerator;
pub use ssh::SshLogIngestor;
