//! CLI for the decode toolbox.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use decode_core::codec::CipherId;
use decode_core::config;

use commands::{run_check, run_ciphers, run_codec, run_shorten, Direction};

/// Exit status for `check` when the link needs confirmation before opening.
pub const EXIT_SUSPICIOUS: i32 = 2;

/// Top-level CLI for decode.
#[derive(Debug, Parser)]
#[command(name = "decode")]
#[command(about = "decode: classic text ciphers and local link-safety checks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Encode text with a cipher.
    Encrypt {
        /// Cipher id (see `decode ciphers`); defaults to the configured cipher.
        #[arg(long, short)]
        cipher: Option<CipherId>,
        /// Caesar shift; any integer, reduced mod 26.
        #[arg(long, short, allow_negative_numbers = true)]
        shift: Option<i64>,
        /// Text to encode; read from stdin when omitted.
        text: Option<String>,
    },

    /// Decode text with a cipher.
    Decrypt {
        /// Cipher id (see `decode ciphers`); defaults to the configured cipher.
        #[arg(long, short)]
        cipher: Option<CipherId>,
        /// Caesar shift; any integer, reduced mod 26.
        #[arg(long, short, allow_negative_numbers = true)]
        shift: Option<i64>,
        /// Text to decode; read from stdin when omitted.
        text: Option<String>,
    },

    /// List available ciphers.
    Ciphers,

    /// Check a link against local risk heuristics. Exits 2 when suspicious.
    Check {
        /// Link to analyze.
        url: String,
        /// Print the analysis as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Normalize a link for shortening and print its offline fallback short URL.
    Shorten {
        /// Link to shorten.
        url: String,
    },
}

impl CliCommand {
    /// Returns the process exit status.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let code = match cli.command {
            CliCommand::Encrypt {
                cipher,
                shift,
                text,
            } => {
                let cipher = cipher.unwrap_or(cfg.default_cipher);
                let shift = shift.unwrap_or(cfg.default_shift);
                run_codec(Direction::Encrypt, cipher, shift, text)?;
                0
            }
            CliCommand::Decrypt {
                cipher,
                shift,
                text,
            } => {
                let cipher = cipher.unwrap_or(cfg.default_cipher);
                let shift = shift.unwrap_or(cfg.default_shift);
                run_codec(Direction::Decrypt, cipher, shift, text)?;
                0
            }
            CliCommand::Ciphers => {
                run_ciphers();
                0
            }
            CliCommand::Check { url, json } => run_check(&url, json || cfg.output.json)?,
            CliCommand::Shorten { url } => {
                run_shorten(&url, &cfg.shortener.fallback_base_url)?;
                0
            }
        };

        Ok(code)
    }
}

#[cfg(test)]
mod tests;
