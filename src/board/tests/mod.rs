//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts against published reference values
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Castling, en passant, promotion, pins and terminal positions
//! - `proptest.rs` - Property-based tests

mod proptest;
