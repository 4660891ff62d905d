//! # convsplit CLI
//!
//! Command-line interface for the convsplit library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use convsplit::ConvsplitError;
use convsplit::cli::Args;
use convsplit::core::{partition_dataset, read_dataset, write_dataset};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the summary.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), ConvsplitError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let config = args.partition_config();
    config.validate()?;

    if !Path::new(&args.input).exists() {
        return Err(ConvsplitError::invalid_format(
            "input",
            format!("input file does not exist: {}", args.input),
        ));
    }

    println!("📦 convsplit v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", args.output);
    println!("⏳ Max gap: {} day(s)", config.max_days);
    if config.strict {
        println!("🔒 Mode:    strict");
    }
    println!();

    // Step 1: Load
    println!("📖 Loading conversations from {}...", args.input);
    let load_start = Instant::now();
    let conversations = read_dataset(&args.input)?;
    println!(
        "   Loaded {} conversation(s) ({:.2}s)",
        conversations.len(),
        load_start.elapsed().as_secs_f64()
    );

    // Step 2: Partition
    let partition_start = Instant::now();
    let outcome = partition_dataset(conversations, &config)?;
    let partition_time = partition_start.elapsed();

    // Step 3: Write
    let write_start = Instant::now();
    write_dataset(&outcome.conversations, &args.output, !args.no_pretty)?;
    let write_time = write_start.elapsed();

    let stats = &outcome.stats;
    println!();
    println!(
        "Partitioned {} conversation(s) into {} conversation(s)",
        stats.original_count, stats.fragment_count
    );
    println!("✅ Done! Output saved to {}", args.output);

    println!();
    println!("📊 Summary:");
    println!("   Original:  {} conversations", stats.original_count);
    println!("   Split:     {} conversations", stats.split_count());
    println!("   Final:     {} conversations", stats.fragment_count);
    println!("   Ratio:     {:.2} per original", stats.split_ratio());

    println!();
    println!("⚡ Performance:");
    println!("   Partition:   {:.2}s", partition_time.as_secs_f64());
    println!("   Write:       {:.2}s", write_time.as_secs_f64());
    println!("   Total time:  {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
