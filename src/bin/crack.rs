// src/bin/crack.rs
//! Exhaustive key search against a framed ciphertext file.

use anyhow::{Context, Result};
use log::info;
use sdes_crack::config::{load as load_config, Mode};
use sdes_crack::framing::read_ciphertext_file;
use sdes_crack::search::{crack_single, crack_triple, SearchConfig, SearchOutcome};
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config();
    info!("sdes-crack — exhaustive key search");

    let ciphertext = read_ciphertext_file(Path::new(&config.input.ciphertext_path))
        .with_context(|| format!("failed to load ciphertext from {}", config.input.ciphertext_path))?;
    info!(
        "loaded {} ciphertext bits from {}",
        ciphertext.len(),
        config.input.ciphertext_path
    );

    let started = Instant::now();
    match config.search.mode {
        Mode::Single => match crack_single(&ciphertext)? {
            SearchOutcome::Found { key, plaintext } => report(&key.to_string(), &plaintext),
            SearchOutcome::Exhausted => println!("no key found — 2^10 space exhausted"),
        },
        Mode::Triple => {
            let search = if config.search.workers == 0 {
                SearchConfig::default()
            } else {
                SearchConfig {
                    workers: config.search.workers,
                }
            };
            match crack_triple(&ciphertext, &search)? {
                SearchOutcome::Found { key, plaintext } => report(&key.to_string(), &plaintext),
                SearchOutcome::Exhausted => println!("no key found — 2^20 space exhausted"),
            }
        }
    }
    println!("elapsed: {:.3}s", started.elapsed().as_secs_f64());

    Ok(())
}

fn report(key: &str, plaintext: &str) {
    println!("key: {key}");
    println!("plaintext: {plaintext}");
}
