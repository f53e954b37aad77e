//! Rusers Application Layer
//!
//! Ports (async traits over the transport and resolver adapters) and the
//! use cases that drive the query pipeline.
pub mod ports;
pub mod use_cases;

pub use use_cases::{
    FindUserUseCase, HostReport, QueryHostUseCase, QueryHostsUseCase, UserMatch,
};
