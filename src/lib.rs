// Library target for criterion benchmarks and integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// that harnesses can import types via `conjdr::engine::*` / `conjdr::store::*`.
// Most UI code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by benchmarks and tests
pub mod engine;
pub mod error;
pub mod session;
pub mod store;
pub mod vocab;

// Private: the presentation layer, only driven by the binary
mod app;
mod config;
mod event;
mod logging;
mod ui;
