//! AI Live Genie: a thin client for the Poe chat-completions API plus a
//! pluggable set of live-streaming platform adapters.
//!
//! The binary in `main.rs` wires these together; everything here is usable
//! as a library.

pub mod client;
pub mod config;
pub mod paths;
pub mod select;
pub mod stream;
