//! One-shot composition of the full trial pipeline.
//!
//! A trial runs the whole data flow in one call: build the code for the
//! input text, encode, transmit through the channel, decode the received
//! bits, and analyze the outcome. The core stays stateless: everything a
//! follow-up call needs (most importantly the code table) is returned to
//! the caller rather than cached internally.

use crate::bits::BitString;
use crate::channel::ChannelSimulator;
use crate::error::Result;
use crate::huffman::{CodeTable, HuffmanTree};
use crate::metrics::ChannelReport;

/// Everything produced by one transmission trial.
#[derive(Debug, Clone)]
pub struct Trial {
    /// The prefix-code table built from the input text
    pub code_table: CodeTable,

    /// Clean encoding of the input
    pub encoded: BitString,

    /// What came out of the channel
    pub received: BitString,

    /// Text recovered from the received bits
    pub decoded: String,

    /// Metrics comparing original, encoded, and decoded
    pub report: ChannelReport,
}

/// Run one complete trial: build code -> encode -> transmit -> decode ->
/// analyze.
///
/// # Errors
/// Returns `Error::EmptyInput` if `text` has no symbols. Encoding cannot
/// fail here because the table is derived from the same text.
pub fn run_trial(text: &str, channel: &mut ChannelSimulator) -> Result<Trial> {
    let tree = HuffmanTree::from_text(text)?;
    let code_table = tree.code_table();

    let encoded = code_table.encode(text)?;
    let received = channel.transmit(&encoded);
    let decoded = code_table.decode(&received);

    let report = ChannelReport::analyze(text, &encoded, &decoded)?;

    Ok(Trial {
        code_table,
        encoded,
        received,
        decoded,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelConfig;
    use crate::error::Error;

    #[test]
    fn test_trial_clean_channel() {
        let mut channel = ChannelSimulator::new(ChannelConfig::clean(42)).unwrap();

        let trial = run_trial("AAAABBBCCD", &mut channel).unwrap();

        assert_eq!(trial.received, trial.encoded);
        assert_eq!(trial.decoded, "AAAABBBCCD");
        assert_eq!(trial.report.error_rate, 0.0);
    }

    #[test]
    fn test_trial_empty_text_fails() {
        let mut channel = ChannelSimulator::new(ChannelConfig::clean(42)).unwrap();

        assert!(matches!(
            run_trial("", &mut channel),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_trial_noisy_channel_reports_damage() {
        let mut channel = ChannelSimulator::new(ChannelConfig::new(1.0, 42)).unwrap();

        let text = "mississippi riverbank";
        let trial = run_trial(text, &mut channel).unwrap();

        assert_ne!(trial.received, trial.encoded);
        // Every bit flipped: the decode cannot match everywhere
        assert!(trial.report.error_rate > 0.0);
        assert!(trial.report.resilience() < 1.0);
    }
}
