// src/main.rs
mod logger;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huffman", version = "0.1.0")]
#[command(about = "Huffman-code a file into plain and packed forms, and back.", long_about = None)]
struct Cli {
    /// Log tree and code-table details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode INPUT into OUTPUT and its `_compressed` sibling
    Encode { input: PathBuf, output: PathBuf },
    /// Decode a packed file (or a plain one with --plain)
    Decode {
        encoded: PathBuf,
        decoded: PathBuf,
        #[arg(long)]
        plain: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let span = tracing::info_span!("command_execution", command = ?std::env::args().collect::<Vec<_>>());
    let _enter = span.enter();

    match cli.command {
        Commands::Encode { input, output } => {
            huffman::encode(&input, &output)?;
            println!(
                "Encoded {} -> {} and {}",
                input.display(),
                output.display(),
                huffman::compressed_path(&output).display()
            );
        }
        Commands::Decode { encoded, decoded, plain } => {
            let result = if plain {
                huffman::decode_plain(&encoded, &decoded)?
            } else {
                huffman::decode(&encoded, &decoded)?
            };
            if result.is_truncated() {
                println!(
                    "Partially decoded {}: recovered {} of {} bytes",
                    encoded.display(),
                    result.bytes.len(),
                    result.expected
                );
            } else {
                println!("Decoded {} -> {}", encoded.display(), decoded.display());
            }
        }
    }

    Ok(())
}
