//! huffchan: Huffman coding over a simulated noisy binary channel.
//!
//! The shell wires user input to the core pipeline: obtain text, build the
//! prefix code, encode, push the bits through the channel, decode what came
//! out, and print the code table plus the information-theoretic analysis.

mod config;
mod input_gen;

use config::Config;
use huffchan_core::channel::{ChannelConfig, ChannelSimulator};
use huffchan_core::pipeline::{run_trial, Trial};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    let text = match load_text(&config) {
        Ok(text) => text,
        Err(message) => {
            eprintln!("error: {}", message);
            std::process::exit(1);
        }
    };

    if text.trim().is_empty() {
        eprintln!("error: input text is empty; nothing to encode");
        std::process::exit(1);
    }

    let channel_config = ChannelConfig::new(config.noise_level, config.seed);
    let mut channel = match ChannelSimulator::new(channel_config) {
        Ok(channel) => channel,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    let trial = match run_trial(&text, &mut channel) {
        Ok(trial) => trial,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    print_trial(&config, &text, &trial, &channel);
}

/// Resolve the input text: explicit --text, then --in file, then a
/// generated sample.
fn load_text(config: &Config) -> Result<String, String> {
    if let Some(text) = &config.text {
        return Ok(text.clone());
    }

    if let Some(path) = &config.input_file {
        return std::fs::read_to_string(path)
            .map_err(|err| format!("cannot read {:?}: {}", path, err));
    }

    Ok(input_gen::generate_sample_text(
        config.seed,
        config.sample_chars,
    ))
}

/// Print the trial results section by section.
fn print_trial(config: &Config, text: &str, trial: &Trial, channel: &ChannelSimulator) {
    if config.show_codes {
        println!("=== Huffman Codes ===");
        println!("{}", trial.code_table.describe());
        println!();
    }

    let symbol_count = text.chars().count();
    let stats = channel.stats();

    println!("=== Transmission ===");
    println!("Input: {} symbols, {} distinct", symbol_count, trial.code_table.len());
    println!(
        "Encoded: {} bits ({:.2} bits/symbol)",
        trial.encoded.len(),
        trial.encoded.len() as f64 / symbol_count as f64
    );
    println!("Noise level: {:.2}%", config.noise_level * 100.0);
    println!(
        "Bits flipped: {} ({:.2}%)",
        stats.bits_flipped,
        stats.flip_rate() * 100.0
    );
    println!("Decoded: {} symbols", trial.decoded.chars().count());
    println!("Sent:     {}", preview_bits(&trial.encoded.to_string()));
    println!("Received: {}", preview_bits(&trial.received.to_string()));
    println!("Original: {}", preview_text(text));
    println!("Recovered: {}", preview_text(&trial.decoded));
    println!();

    if config.print_metrics {
        trial.report.print_summary();
    }
}

/// First 64 bits of a bitstring, with an ellipsis when truncated.
fn preview_bits(bits: &str) -> String {
    preview(bits, 64)
}

/// First 48 characters of a text, newlines flattened.
fn preview_text(text: &str) -> String {
    preview(&text.replace('\n', " "), 48)
}

fn preview(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}... ({} total)", head, s.chars().count())
    }
}
