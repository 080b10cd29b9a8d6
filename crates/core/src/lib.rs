//! huffchan-core: Huffman prefix coding over a simulated noisy binary channel
//!
//! This library provides the core components for a learning-focused system
//! that:
//! - Builds an optimal binary prefix code from symbol frequencies
//! - Encodes text to a bitstring and decodes bitstrings back
//! - Simulates a binary symmetric channel (independent per-bit flip noise)
//! - Measures the outcome with information-theoretic metrics
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `bits`: digit-addressable bitstring container
//! - `freq`: symbol frequency counting
//! - `huffman`: tree construction, code tables, encode/decode
//! - `channel`: noisy channel simulator with seeded randomness
//! - `metrics`: entropy, error rate, redundancy, trial reports
//! - `pipeline`: one-shot composition of a full trial
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable; decoding a
//!   corrupted stream is a measured outcome, never a failure
//! - **Stateless**: each call re-derives everything from its arguments; the
//!   caller owns the code table between encode and decode
//! - **Deterministic**: tie-breaks are fixed and channel randomness is
//!   seeded, so runs are reproducible

pub mod bits;
pub mod channel;
pub mod error;
pub mod freq;
pub mod huffman;
pub mod metrics;
pub mod pipeline;

// Re-export commonly used types
pub use error::{Error, Result};
