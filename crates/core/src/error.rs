//! Error types for the huffchan system.
//!
//! All operations return structured errors rather than panicking.
//! Decoding a corrupted bitstream is deliberately NOT an error: the decoder
//! emits whatever symbols the surviving prefixes still match, and the damage
//! is measured by the metrics module instead of raised as a failure.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure condition:
/// - Empty input: no symbols to build a code from or to measure
/// - Unknown symbol: encode saw a symbol the code table doesn't cover
/// - Invalid probability: a noise level outside [0, 1]
/// - Invalid bit: a textual bitstring contained a non-binary character
/// - I/O and configuration: shell-level failures
#[derive(Debug, Error)]
pub enum Error {
    /// Input contained no symbols, so there is nothing to encode or measure
    #[error("empty input: no symbols to work with")]
    EmptyInput,

    /// Encode requested for a symbol absent from the supplied code table
    #[error("unknown symbol {symbol:?}: not present in code table")]
    UnknownSymbol {
        /// The symbol that had no codeword
        symbol: char,
    },

    /// Noise level outside the valid probability range
    #[error("invalid probability {value}: must be within [0.0, 1.0]")]
    InvalidProbability {
        /// The rejected value
        value: f64,
    },

    /// A textual bitstring contained a character other than '0' or '1'
    #[error("invalid bit {found:?} at position {position}: expected '0' or '1'")]
    InvalidBit {
        /// Zero-based character position of the offending character
        position: usize,
        /// The character found there
        found: char,
    },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
