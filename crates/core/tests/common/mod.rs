//! Common test utilities shared across the integration tests.
//!
//! - Mock executors
//! - Script fixtures for tests that spawn real processes

pub mod fixtures;
pub mod mock_executors;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_executors::*;
