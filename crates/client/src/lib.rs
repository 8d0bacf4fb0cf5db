//! Uniform async adaptation layer over the PlayPark platform runtime.
//!
//! The platform runtime (the capability provider) exposes feature
//! namespaces with ad hoc asynchronous and synchronous operations. This
//! crate republishes every operation under one calling convention: a
//! typed async method that resolves with exactly the provider's value or
//! rejects with the payload-free [`application::CallError`].
//!
//! The provider is always injected behind the [`ports::outbound`] traits;
//! adaptation code never reaches for ambient global state.

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::{Api, CallError, Provider};
