mod hostname_resolver;
mod session_reader;

pub use hostname_resolver::HostnameResolver;
pub use session_reader::{SessionReader, SessionReply};
