// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Example: derive PMKs for a wordlist
//
// Reads one passphrase per line from a file or stdin, splits the list into
// batches of eight, and derives them on a pool of worker threads, one
// workspace per worker. Prints `passphrase:pmk` lines in input order.
//
//   pmk-driver --essid linksys wordlist.txt
//   WPAPSK_BACKEND=scalar pmk-driver --essid linksys --encoding crypt64 < words

mod driver;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use wpapsk::{BackendChoice, Interleave, KernelConfig, Pmk};

#[derive(Parser)]
#[command(name = "pmk-driver")]
#[command(about = "Derive WPA/WPA2 PMKs for a wordlist", long_about = None)]
struct Args {
    /// Network name (at most 32 bytes)
    #[arg(short, long)]
    essid: String,

    /// Wordlist, one passphrase per line (default: stdin)
    #[arg(value_name = "WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Worker threads (default: CPU count)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Backend: auto, scalar, portable, sse2, avx2, neon (overrides WPAPSK_BACKEND)
    #[arg(long)]
    backend: Option<BackendChoice>,

    /// Interleave factor: 1 or 2 (overrides WPAPSK_INTERLEAVE)
    #[arg(long)]
    interleave: Option<Interleave>,

    /// PMK rendering
    #[arg(long, value_enum, default_value_t = Encoding::Hex)]
    encoding: Encoding,
}

#[derive(Clone, Copy, ValueEnum)]
enum Encoding {
    Hex,
    Crypt64,
}

impl Encoding {
    fn render(self, pmk: &Pmk) -> String {
        match self {
            Encoding::Hex => pmk.to_hex(),
            Encoding::Crypt64 => pmk.to_crypt64(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = KernelConfig::from_env().context("Invalid kernel environment")?;
    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if let Some(interleave) = args.interleave {
        config.interleave = interleave;
    }
    let kernel = config.kernel()?;

    let words = match &args.wordlist {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open wordlist {}", path.display()))?;
            driver::read_wordlist(BufReader::new(file))?
        }
        None => driver::read_wordlist(io::stdin().lock())?,
    };

    let workers = args
        .workers
        .or_else(|| std::thread::available_parallelism().ok().map(usize::from))
        .unwrap_or(1)
        .max(1);

    eprintln!(
        "Kernel: {kernel}, {workers} workers, {} candidates",
        words.len()
    );

    let started = Instant::now();
    let pmks = driver::derive_all(kernel, workers, args.essid.as_bytes(), &words)?;
    let elapsed = started.elapsed();

    let mut out = BufWriter::new(io::stdout().lock());
    for (word, pmk) in words.iter().zip(&pmks) {
        match pmk {
            Some(pmk) => writeln!(
                out,
                "{}:{}",
                String::from_utf8_lossy(word),
                args.encoding.render(pmk)
            )?,
            None => writeln!(out, "{}:", String::from_utf8_lossy(word))?,
        }
    }
    out.flush()?;

    let derived = pmks.iter().flatten().count();
    eprintln!(
        "Derived {derived} PMKs in {elapsed:.2?} ({:.0} PMK/s)",
        driver::rate(derived, elapsed)
    );

    Ok(())
}
