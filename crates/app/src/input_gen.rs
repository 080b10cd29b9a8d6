//! Sample text generation for demonstration runs.
//!
//! When no input is specified, we generate text with interesting coding
//! characteristics: a skewed letter distribution mixed with repetitive
//! stretches, so the Huffman code has structure to exploit and the metrics
//! show something other than a uniform alphabet.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Letter pool with English-like skew: frequent letters repeated so a
/// uniform index draw yields a non-uniform distribution.
const POOL: &[u8] = b"eeeeeeeeeeeettttttttaaaaaaaooooooiiiiiinnnnnnssssshhhhhrrrrrddddlllucmfwypbvk";

/// Generate sample text of exactly `chars` characters.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `chars`: number of characters to generate
pub fn generate_sample_text(seed: u64, chars: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(chars);

    let mut remaining = chars;
    while remaining > 0 {
        let stretch = remaining.min(rng.gen_range(20..=80));

        // Choose stretch type randomly
        let stretch_type: u8 = rng.gen_range(0..10);

        match stretch_type {
            // 20% highly compressible (runs of one letter)
            0..=1 => {
                let idx = rng.gen_range(0..POOL.len());
                let letter = POOL[idx] as char;
                for _ in 0..stretch {
                    text.push(letter);
                }
            }

            // 80% word-like text from the skewed pool
            _ => {
                let mut word_left = rng.gen_range(2..=9);
                for _ in 0..stretch {
                    if word_left == 0 {
                        text.push(' ');
                        word_left = rng.gen_range(2..=9);
                    } else {
                        let idx = rng.gen_range(0..POOL.len());
                        text.push(POOL[idx] as char);
                        word_left -= 1;
                    }
                }
            }
        }

        remaining = remaining.saturating_sub(stretch);
    }

    text.truncate(chars);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length() {
        for chars in [0, 1, 10, 400, 5000] {
            let text = generate_sample_text(42, chars);
            assert_eq!(text.chars().count(), chars);
        }
    }

    #[test]
    fn test_determinism() {
        let a = generate_sample_text(12345, 1000);
        let b = generate_sample_text(12345, 1000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let a = generate_sample_text(1, 1000);
        let b = generate_sample_text(2, 1000);
        assert_ne!(a, b);
    }

    #[test]
    fn test_skewed_distribution() {
        let text = generate_sample_text(7, 10_000);

        let e_count = text.chars().filter(|&c| c == 'e').count();
        let k_count = text.chars().filter(|&c| c == 'k').count();

        // 'e' dominates the pool; 'k' appears once in it
        assert!(e_count > k_count);
    }
}
