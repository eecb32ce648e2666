//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - Move generation and the legality filter
//! - `round_trips.rs` - Apply/undo round-trip correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod proptest;
