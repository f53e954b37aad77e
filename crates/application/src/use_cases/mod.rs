pub mod find_user;
pub mod query_host;
pub mod query_hosts;

// Re-export use cases
pub use find_user::{FindUserUseCase, UserMatch};
pub use query_host::QueryHostUseCase;
pub use query_hosts::{HostReport, QueryHostsUseCase};
