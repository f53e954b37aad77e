//! Rusers Domain Layer
pub mod config;
pub mod errors;
pub mod machine;
pub mod session_entry;
pub mod session_record;
pub mod tally;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::QueryError;
pub use machine::Machine;
pub use session_entry::SessionEntry;
pub use session_record::SessionRecord;
pub use tally::{tally_by_username, UserSessions};
