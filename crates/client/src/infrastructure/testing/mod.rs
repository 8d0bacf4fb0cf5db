//! Scripted provider for tests
//!
//! This stub belongs in the infrastructure layer (not ports) because:
//! 1. It is a concrete implementation of the port traits
//! 2. Stubs are infrastructure concerns, not interface definitions
//! 3. Test utilities should be close to the implementations they stand in for

pub mod fixtures;
pub mod scripted_provider;

pub use scripted_provider::{ForwardedRequest, ScriptedProvider};
