//! FIB resource-pack generator CLI
//!
//! Scans a folder of item PNGs and writes the item index + bitmap font descriptor.
//!
//! Example:
//!   cargo run -- assets/fib --unicode-output out/unicodeItems.json --font-output out/default.json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fib_pack::{build_pack, write_outputs, BuildConfig, PackConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate unicodeItems.json and default.json from PNG files", long_about = None)]
struct Cli {
    /// Path to folder containing PNG files
    png_folder: PathBuf,
    /// Output path for unicodeItems.json
    #[arg(long, default_value = fib_pack::pack::DEFAULT_UNICODE_OUTPUT)]
    unicode_output: PathBuf,
    /// Output path for default.json
    #[arg(long, default_value = fib_pack::pack::DEFAULT_FONT_OUTPUT)]
    font_output: PathBuf,
    /// RON config layers (later files override earlier ones)
    #[arg(long)]
    config: Vec<PathBuf>,
    /// Generate and print the summary without writing any file
    #[arg(long)]
    dry_run: bool,
    /// Also print the font descriptor to stdout
    #[arg(long)]
    stdout_json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let cfg = BuildConfig {
        png_folder: cli.png_folder,
        unicode_output: cli.unicode_output,
        font_output: cli.font_output,
        pack: PackConfig::load_cli_layers(&cli.config).map_err(|e| anyhow::anyhow!("config: {e}"))?,
    };

    println!("Scanning folder: {}", cfg.png_folder.display());
    let artifact = build_pack(&cfg).with_context(|| format!("generate from {}", cfg.png_folder.display()))?;
    println!("Found {} materials", artifact.generated.material_count);

    if cli.dry_run {
        log::info!("dry run: not writing {} or {}", cfg.unicode_output.display(), cfg.font_output.display());
    } else {
        for path in write_outputs(&artifact)? {
            println!("✓ Generated: {}", path.display());
        }
    }
    if cli.stdout_json {
        println!("{}", String::from_utf8_lossy(&artifact.font_json));
    }

    println!("\n{}", artifact.summary());
    Ok(())
}
