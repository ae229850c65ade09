//! Check a generated item index + font descriptor for consistency.
//!
//! Example:
//!   cargo run --bin fib_pack_inspect -- --unicode-items unicodeItems.json --font default.json

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fib_pack::inspect::inspect_files;
use fib_pack::PackConfig;

#[derive(Parser, Debug)]
#[command(about = "Inspect generated unicodeItems.json + default.json", version)]
struct Args {
    #[arg(long, default_value = fib_pack::pack::DEFAULT_UNICODE_OUTPUT)] unicode_items: PathBuf,
    #[arg(long, default_value = fib_pack::pack::DEFAULT_FONT_OUTPUT)] font: PathBuf,
    /// RON config layers the pack was generated with (defaults otherwise)
    #[arg(long)] config: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().filter_level(log::LevelFilter::Info).parse_default_env().init();
    let args = Args::parse();
    let cfg = PackConfig::load_cli_layers(&args.config).map_err(|e| anyhow::anyhow!("config: {e}"))?;
    let res = inspect_files(&args.unicode_items, &args.font, &cfg)?;
    let range = res.range.map(|(lo, hi)| format!("{lo} - {hi}")).unwrap_or_else(|| "empty".into());
    println!("Pack: materials={} items={} providers={} range={range}", res.material_count, res.item_count, res.provider_count);
    for issue in &res.issues {
        println!("  issue: {issue}");
    }
    if !res.is_consistent() {
        anyhow::bail!("{} consistency issue(s)", res.issues.len());
    }
    Ok(())
}
