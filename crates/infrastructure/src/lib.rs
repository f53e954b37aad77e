//! Rusers Infrastructure Layer
//!
//! Adapters behind the application ports: the SunRPC transport, the rusers
//! protocol client and the platform reverse resolver.

pub mod rpc;
pub mod rusers;
pub mod system;
