//! Command-line interface for `rijndael-core`.

#![forbid(unsafe_code)]

mod input;

use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{
    encrypt, encrypt_traced, generate_table, KeySchedule, State, Trace, SCHEDULE_WORDS,
};

use crate::input::parse_input;

/// AES-128 over explicit GF(2) polynomials.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    about = "AES-128 built from polynomial arithmetic, with a per-round trace"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block and print every round.
    Encrypt {
        /// Text file with 16 binary message groups followed by 16 hex key bytes.
        #[arg(long, value_name = "FILE", conflicts_with_all = ["message_hex", "key_hex"])]
        input: Option<PathBuf>,
        /// Message block as 32 hex characters, column-major.
        #[arg(long, value_name = "HEX", requires = "key_hex")]
        message_hex: Option<String>,
        /// AES-128 key as 32 hex characters, column-major.
        #[arg(long, value_name = "HEX", requires = "message_hex")]
        key_hex: Option<String>,
        /// Save the round trace to this path.
        #[arg(long, value_name = "FILE")]
        trace_out: Option<PathBuf>,
    },
    /// Print a trace saved by `encrypt --trace-out`.
    Replay {
        /// Path to the serialized trace.
        #[arg(long, value_name = "FILE")]
        trace: PathBuf,
    },
    /// Print the 44 expanded key words.
    Schedule {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Print the generated S-box as a 16x16 table.
    Sbox,
    /// Encrypt a random block under a random key and cross-check the trace.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Encrypt {
            input,
            message_hex,
            key_hex,
            trace_out,
        } => cmd_encrypt(
            input.as_deref(),
            message_hex.as_deref(),
            key_hex.as_deref(),
            trace_out.as_deref(),
        ),
        Commands::Replay { trace } => cmd_replay(&trace),
        Commands::Schedule { key_hex } => cmd_schedule(&key_hex),
        Commands::Sbox => cmd_sbox(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn cmd_encrypt(
    input: Option<&Path>,
    message_hex: Option<&str>,
    key_hex: Option<&str>,
    trace_out: Option<&Path>,
) -> Result<()> {
    let (message, key) = match (input, message_hex, key_hex) {
        (Some(path), _, _) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            let parsed =
                parse_input(&text).with_context(|| format!("parse {}", path.display()))?;
            (parsed.message, parsed.key)
        }
        (None, Some(message), Some(key)) => (
            parse_block_hex(message, "message")?,
            parse_block_hex(key, "key")?,
        ),
        _ => bail!("provide either --input or both --message-hex and --key-hex"),
    };

    let trace = encrypt_traced(&message, &key);
    print!("{}", render_trace(&trace).context("render trace")?);
    if let Some(path) = trace_out {
        let bytes = trace.to_bytes().context("serialize trace")?;
        fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        info!("trace written to {}", path.display());
    }
    Ok(())
}

fn cmd_replay(path: &Path) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let trace = Trace::from_bytes(&bytes).context("deserialize trace")?;
    debug!("loaded trace with {} rounds", trace.rounds.len());
    print!("{}", render_trace(&trace).context("render trace")?);
    Ok(())
}

fn cmd_schedule(key_hex: &str) -> Result<()> {
    let key = parse_block_hex(key_hex, "key")?;
    let schedule = KeySchedule::expand(&key);
    for (index, word) in schedule.words().iter().enumerate() {
        println!("W[{index:2}] = {}", hex::encode(word));
    }
    debug!("printed {SCHEDULE_WORDS} words");
    Ok(())
}

fn cmd_sbox() -> Result<()> {
    print!("{}", render_sbox(&generate_table()).context("render table")?);
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    let mut message_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut message_bytes);
    let key = State::from_bytes(key_bytes);
    let message = State::from_bytes(message_bytes);

    let trace = encrypt_traced(&message, &key);
    let ciphertext = encrypt(&message, &key);
    println!("demo key: {}", hex::encode(key_bytes));
    println!("message: {}", hex::encode(message_bytes));
    println!("ciphertext: {}", hex::encode(ciphertext.to_bytes()));
    if trace.ciphertext != ciphertext {
        bail!("traced and direct encryption disagree");
    }
    let replayed = Trace::from_bytes(&trace.to_bytes().context("serialize trace")?)
        .context("deserialize trace")?;
    if replayed != trace {
        bail!("trace did not survive serialization");
    }
    Ok(())
}

/// Per-round log: the key matrix, then the state, then the ciphertext as hex.
fn render_trace(trace: &Trace) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for record in &trace.rounds {
        writeln!(out, "Round {}", record.round)?;
        writeln!(out, "Key\n----------")?;
        writeln!(out, "{}", State::from_columns(record.round_key))?;
        writeln!(out, "Message:\n--------")?;
        writeln!(out, "{}\n", record.state)?;
    }
    writeln!(out, "Ciphertext: {}", hex::encode(trace.ciphertext.to_bytes()))?;
    Ok(out)
}

fn render_sbox(table: &[u8; 256]) -> Result<String, fmt::Error> {
    let mut out = String::from("    ");
    for col in 0..16 {
        write!(out, " {col:x} ")?;
    }
    out.push('\n');
    for (row, chunk) in table.chunks(16).enumerate() {
        write!(out, "{row:x}0 |")?;
        for byte in chunk {
            write!(out, "{byte:02x} ")?;
        }
        out.push('\n');
    }
    Ok(out)
}

fn parse_block_hex(hex_str: &str, what: &str) -> Result<State> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))?;
    if bytes.len() != 16 {
        bail!("{what} must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(State::from_bytes(block))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
