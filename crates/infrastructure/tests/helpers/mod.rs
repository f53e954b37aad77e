mod rpc_mock;

pub use rpc_mock::*;
