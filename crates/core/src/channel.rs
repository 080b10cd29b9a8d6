//! Binary symmetric channel simulator.
//!
//! Transmits a bitstring through a noisy channel: each bit is flipped
//! independently with probability `noise_level` (a Bernoulli draw per bit)
//! and left untouched otherwise.
//!
//! # Determinism
//!
//! All randomness comes from a seeded ChaCha8 RNG. Given the same seed and
//! input, the output is bit-identical, which keeps experiments reproducible
//! and testable. `from_entropy` gives the non-reproducible behavior of a
//! channel seeded from the operating system; even then the drawn seed is
//! recorded in the config so a run can be replayed.
//!
//! # Thread Safety
//! Not thread-safe; use one instance per thread or synchronize externally.

use crate::bits::BitString;
use crate::error::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration for channel simulation.
#[derive(Debug, Clone, Copy)]
pub struct ChannelConfig {
    /// Per-bit flip probability [0.0, 1.0]
    pub noise_level: f64,

    /// Random seed for determinism
    pub seed: u64,
}

impl ChannelConfig {
    /// Create a configuration with the given noise level.
    pub fn new(noise_level: f64, seed: u64) -> Self {
        Self { noise_level, seed }
    }

    /// Create a configuration with no noise (perfect channel).
    pub fn clean(seed: u64) -> Self {
        Self {
            noise_level: 0.0,
            seed,
        }
    }

    /// Check that the noise level is a valid probability.
    ///
    /// # Errors
    /// Returns `Error::InvalidProbability` if `noise_level` is outside
    /// [0.0, 1.0] (NaN is rejected too).
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.noise_level) {
            return Err(Error::InvalidProbability {
                value: self.noise_level,
            });
        }
        Ok(())
    }
}

/// Channel simulator applying independent per-bit flip noise.
pub struct ChannelSimulator {
    config: ChannelConfig,
    rng: ChaCha8Rng,

    // Statistics
    bits_sent: u64,
    bits_flipped: u64,
}

impl ChannelSimulator {
    /// Create a new simulator with the given configuration.
    ///
    /// # Errors
    /// Returns `Error::InvalidProbability` if the noise level is out of
    /// range.
    pub fn new(config: ChannelConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            bits_sent: 0,
            bits_flipped: 0,
        })
    }

    /// Create a simulator seeded from operating-system entropy.
    ///
    /// Output is not reproducible from the caller's point of view, but the
    /// drawn seed is kept in `config()` so a run can still be replayed.
    ///
    /// # Errors
    /// Returns `Error::InvalidProbability` if the noise level is out of
    /// range.
    pub fn from_entropy(noise_level: f64) -> Result<Self> {
        Self::new(ChannelConfig::new(noise_level, rand::random()))
    }

    /// The resolved configuration, including the seed actually in use.
    pub fn config(&self) -> ChannelConfig {
        self.config
    }

    /// Transmit a bitstring through the channel.
    ///
    /// Each bit is flipped with probability `noise_level`, independently of
    /// every other bit. The input is not modified; the (possibly corrupted)
    /// received bits are returned.
    pub fn transmit(&mut self, bits: &BitString) -> BitString {
        let mut received = bits.clone();

        for index in 0..received.len() {
            self.bits_sent += 1;

            if self.config.noise_level > 0.0 {
                let roll: f64 = self.rng.gen();
                if roll < self.config.noise_level {
                    received.flip(index);
                    self.bits_flipped += 1;
                }
            }
        }

        received
    }

    /// Get statistics about channel behavior so far.
    pub fn stats(&self) -> ChannelStats {
        ChannelStats {
            bits_sent: self.bits_sent,
            bits_flipped: self.bits_flipped,
        }
    }
}

/// Statistics about channel simulator behavior.
#[derive(Debug, Clone, Copy)]
pub struct ChannelStats {
    /// Total bits transmitted through the channel
    pub bits_sent: u64,

    /// Bits the channel corrupted
    pub bits_flipped: u64,
}

impl ChannelStats {
    /// Observed flip rate (flipped / sent).
    pub fn flip_rate(&self) -> f64 {
        if self.bits_sent == 0 {
            0.0
        } else {
            self.bits_flipped as f64 / self.bits_sent as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(s: &str) -> BitString {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_range() {
        assert!(ChannelConfig::new(0.0, 1).validate().is_ok());
        assert!(ChannelConfig::new(1.0, 1).validate().is_ok());
        assert!(ChannelConfig::new(0.5, 1).validate().is_ok());

        assert!(matches!(
            ChannelConfig::new(-0.1, 1).validate(),
            Err(Error::InvalidProbability { .. })
        ));
        assert!(matches!(
            ChannelConfig::new(1.1, 1).validate(),
            Err(Error::InvalidProbability { .. })
        ));
        assert!(matches!(
            ChannelConfig::new(f64::NAN, 1).validate(),
            Err(Error::InvalidProbability { .. })
        ));
    }

    #[test]
    fn test_clean_channel_is_identity() {
        let mut channel = ChannelSimulator::new(ChannelConfig::clean(42)).unwrap();

        let sent = bits_of("0110100111000101");
        let received = channel.transmit(&sent);

        assert_eq!(received, sent);
        assert_eq!(channel.stats().bits_flipped, 0);
        assert_eq!(channel.stats().bits_sent, 16);
    }

    #[test]
    fn test_full_noise_flips_every_bit() {
        let mut channel = ChannelSimulator::new(ChannelConfig::new(1.0, 42)).unwrap();

        let sent = bits_of("010011");
        let received = channel.transmit(&sent);

        assert_eq!(received.to_string(), "101100");
        assert_eq!(channel.stats().bits_flipped, 6);
    }

    #[test]
    fn test_statistical_flip_rate() {
        let mut channel = ChannelSimulator::new(ChannelConfig::new(0.5, 42)).unwrap();

        let sent: BitString = std::iter::repeat(false).take(1000).collect();
        let received = channel.transmit(&sent);

        let flipped = received.count_ones();
        // Should have flipped approximately half; allow 30-70% for randomness
        assert!(flipped >= 300 && flipped <= 700, "flipped {}", flipped);
        assert_eq!(channel.stats().bits_flipped as usize, flipped);
    }

    #[test]
    fn test_determinism() {
        let sent = bits_of("110010101110001010101111");

        let mut a = ChannelSimulator::new(ChannelConfig::new(0.3, 12345)).unwrap();
        let mut b = ChannelSimulator::new(ChannelConfig::new(0.3, 12345)).unwrap();

        assert_eq!(a.transmit(&sent), b.transmit(&sent));
    }

    #[test]
    fn test_different_seeds_differ() {
        let sent: BitString = std::iter::repeat(true).take(256).collect();

        let mut a = ChannelSimulator::new(ChannelConfig::new(0.5, 1)).unwrap();
        let mut b = ChannelSimulator::new(ChannelConfig::new(0.5, 2)).unwrap();

        assert_ne!(a.transmit(&sent), b.transmit(&sent));
    }

    #[test]
    fn test_from_entropy_validates() {
        assert!(ChannelSimulator::from_entropy(2.0).is_err());
        assert!(ChannelSimulator::from_entropy(0.1).is_ok());
    }

    #[test]
    fn test_empty_transmission() {
        let mut channel = ChannelSimulator::new(ChannelConfig::new(0.5, 7)).unwrap();

        let received = channel.transmit(&BitString::new());
        assert!(received.is_empty());
        assert_eq!(channel.stats().flip_rate(), 0.0);
    }
}
