//! Unit tests for the board module.
//!
//! Tests are organised by layer: grid tests cover the pure move
//! algorithm and its invariants, service tests cover orchestration,
//! locking, and activity bumps.

mod service_tests;
