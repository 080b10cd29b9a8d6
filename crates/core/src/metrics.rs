//! Information-theoretic metrics for encode/transmit/decode trials.
//!
//! This module measures what the channel did to a message:
//! - Shannon entropy of a symbol sequence (bits per symbol)
//! - Entropy of an encoded bitstring over its own 0/1 alphabet
//! - Symbol error rate between the original and the decoded text
//! - Redundancy of the encoded length relative to source entropy
//!
//! # Empty inputs
//!
//! Entropy, error rate, and redundancy all divide by the length of their
//! input. Rather than propagating NaN or infinity, every zero-length
//! denominator fails with `Error::EmptyInput`.
//!
//! # Redundancy units
//!
//! `redundancy` compares the bit-length of the whole encoded stream with
//! the per-symbol entropy of the source. The units differ on purpose: this
//! is the reference metric being reproduced, not a mistake to fix.

use crate::bits::BitString;
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Shannon entropy of `text` in bits per symbol.
///
/// Computed over the empirical distribution: `-Σ p(s)·log2(p(s))` with
/// `p(s) = count(s) / length`.
///
/// # Errors
/// Returns `Error::EmptyInput` for empty text.
pub fn entropy(text: &str) -> Result<f64> {
    let freqs = FrequencyTable::from_text(text);
    if freqs.is_empty() {
        return Err(Error::EmptyInput);
    }

    let total = freqs.total() as f64;
    let mut h = 0.0;
    for (_, count) in freqs.iter() {
        let p = count as f64 / total;
        h -= p * p.log2();
    }
    Ok(h)
}

/// Shannon entropy of a bitstring over its own 0/1 alphabet, in bits per
/// bit.
///
/// # Errors
/// Returns `Error::EmptyInput` for an empty bitstring.
pub fn bit_entropy(bits: &BitString) -> Result<f64> {
    if bits.is_empty() {
        return Err(Error::EmptyInput);
    }

    let total = bits.len() as f64;
    let ones = bits.count_ones();
    let zeros = bits.len() - ones;

    let mut h = 0.0;
    for count in [zeros, ones] {
        if count > 0 {
            let p = count as f64 / total;
            h -= p * p.log2();
        }
    }
    Ok(h)
}

/// Fraction of positions of `original` where `decoded` differs.
///
/// A decoded stream that ran short (noise cut it off mid-codeword) counts
/// every missing position as a mismatch; extra decoded symbols beyond
/// `original`'s length are ignored. The denominator is `original`'s length.
///
/// # Errors
/// Returns `Error::EmptyInput` if `original` is empty.
pub fn error_rate(original: &str, decoded: &str) -> Result<f64> {
    if original.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut decoded_chars = decoded.chars();
    let mut total = 0usize;
    let mut errors = 0usize;

    for symbol in original.chars() {
        total += 1;
        match decoded_chars.next() {
            Some(got) if got == symbol => {}
            _ => errors += 1,
        }
    }

    Ok(errors as f64 / total as f64)
}

/// Redundancy of an encoding: `(encoded_bit_len − source_entropy_bits) /
/// encoded_bit_len`.
///
/// # Errors
/// Returns `Error::EmptyInput` if `encoded_bit_len` is zero.
pub fn redundancy(encoded_bit_len: usize, source_entropy_bits: f64) -> Result<f64> {
    if encoded_bit_len == 0 {
        return Err(Error::EmptyInput);
    }

    let len = encoded_bit_len as f64;
    Ok((len - source_entropy_bits) / len)
}

/// Summary of one transmission trial.
///
/// `analyze` pairs its inputs the way the reference does: source entropy is
/// computed over `original`'s symbols, encoded entropy over the clean
/// encoded stream's own bits, the error rate against the decoded text, and
/// redundancy from the encoded bit-length and the source entropy.
#[derive(Debug, Clone, Copy)]
pub struct ChannelReport {
    /// Fraction of original symbol positions the decode got wrong
    pub error_rate: f64,

    /// Entropy of the original message (bits per symbol)
    pub entropy_original: f64,

    /// Entropy of the encoded stream over the 0/1 alphabet (bits per bit)
    pub entropy_encoded: f64,

    /// Redundancy of the encoding
    pub redundancy: f64,
}

impl ChannelReport {
    /// Compute all metrics for one trial.
    ///
    /// # Arguments
    /// - `original`: the message that was encoded
    /// - `encoded`: the clean (pre-noise) encoded bitstring
    /// - `decoded`: the text recovered from the received bits
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `original` or `encoded` is empty.
    pub fn analyze(original: &str, encoded: &BitString, decoded: &str) -> Result<Self> {
        let entropy_original = entropy(original)?;

        Ok(Self {
            error_rate: error_rate(original, decoded)?,
            entropy_original,
            entropy_encoded: bit_entropy(encoded)?,
            redundancy: redundancy(encoded.len(), entropy_original)?,
        })
    }

    /// Noise resilience (1 − error rate), the headline figure of a trial.
    pub fn resilience(&self) -> f64 {
        1.0 - self.error_rate
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Channel Analysis ===");
        println!("Noise resilience: {:.3}", self.resilience());
        println!("Error rate: {:.2}%", self.error_rate * 100.0);
        println!(
            "Entropy (original message): {:.3} bits/symbol",
            self.entropy_original
        );
        println!(
            "Entropy (encoded stream): {:.3} bits/bit",
            self.entropy_encoded
        );
        println!("Redundancy: {:.3}", self.redundancy);
        println!();
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "error_rate={:.4}\n\
             resilience={:.4}\n\
             entropy_original={:.4}\n\
             entropy_encoded={:.4}\n\
             redundancy={:.4}\n",
            self.error_rate,
            self.resilience(),
            self.entropy_original,
            self.entropy_encoded,
            self.redundancy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(s: &str) -> BitString {
        s.parse().unwrap()
    }

    #[test]
    fn test_entropy_single_symbol_is_zero() {
        assert_eq!(entropy("AAAA").unwrap(), 0.0);
        assert_eq!(entropy("z").unwrap(), 0.0);
    }

    #[test]
    fn test_entropy_two_equal_symbols_is_one() {
        assert_eq!(entropy("AB").unwrap(), 1.0);
        assert_eq!(entropy("ABAB").unwrap(), 1.0);
    }

    #[test]
    fn test_entropy_nonnegative_and_bounded() {
        for text in ["AAAABBBCCD", "hello world", "абвгд", "xyzzy"] {
            let h = entropy(text).unwrap();
            let distinct = FrequencyTable::from_text(text).len() as f64;
            assert!(h >= 0.0);
            // Entropy can't exceed log2 of the alphabet size
            assert!(h <= distinct.log2() + 1e-9);
        }
    }

    #[test]
    fn test_entropy_empty_fails() {
        assert!(matches!(entropy(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_bit_entropy() {
        assert_eq!(bit_entropy(&bits_of("0101")).unwrap(), 1.0);
        assert_eq!(bit_entropy(&bits_of("0000")).unwrap(), 0.0);
        assert!(matches!(
            bit_entropy(&BitString::new()),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_error_rate_identical_is_zero() {
        assert_eq!(error_rate("hello", "hello").unwrap(), 0.0);
    }

    #[test]
    fn test_error_rate_counts_mismatches() {
        assert_eq!(error_rate("AAAA", "ABAB").unwrap(), 0.5);
        assert_eq!(error_rate("AB", "BA").unwrap(), 1.0);
    }

    #[test]
    fn test_error_rate_missing_positions_are_mismatches() {
        // Decoded ran short: the two missing positions count as errors
        assert_eq!(error_rate("ABCD", "AB").unwrap(), 0.5);
        assert_eq!(error_rate("ABCD", "").unwrap(), 1.0);
        // Extra decoded symbols beyond the original are ignored
        assert_eq!(error_rate("AB", "ABXY").unwrap(), 0.0);
    }

    #[test]
    fn test_error_rate_empty_original_fails() {
        assert!(matches!(error_rate("", "AB"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_redundancy() {
        // 10 bits carrying 1 bit/symbol of source entropy
        assert_eq!(redundancy(10, 1.0).unwrap(), 0.9);
        assert_eq!(redundancy(4, 0.0).unwrap(), 1.0);
        assert!(matches!(redundancy(0, 1.0), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_analyze_pairs_alphabets() {
        // "AB" encodes to one bit per symbol; the encoded stream "01" has
        // bit entropy 1.0 over its own alphabet
        let report = ChannelReport::analyze("AB", &bits_of("01"), "AB").unwrap();

        assert_eq!(report.error_rate, 0.0);
        assert_eq!(report.resilience(), 1.0);
        assert_eq!(report.entropy_original, 1.0);
        assert_eq!(report.entropy_encoded, 1.0);
        assert_eq!(report.redundancy, 0.5);
    }

    #[test]
    fn test_export_text() {
        let report = ChannelReport {
            error_rate: 0.25,
            entropy_original: 2.0,
            entropy_encoded: 1.0,
            redundancy: 0.5,
        };

        let text = report.export_text();
        assert!(text.contains("error_rate=0.2500"));
        assert!(text.contains("resilience=0.7500"));
        assert!(text.contains("entropy_original=2.0000"));
        assert!(text.contains("redundancy=0.5000"));
    }
}
