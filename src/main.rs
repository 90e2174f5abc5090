//! fieldmap CLI - demonstrates cached field mapping
//!
//! Usage: fieldmap [--config <PATH>] [-v...] <COMMAND>
//!
//! Commands:
//!   demo  Map a sample order into several DTOs and show cache statistics
//!   plan  Print the compiled plans for the demo type pairs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fieldmap::{CacheStats, Mapper, MapperConfig};

mod demo;

use demo::{Order, OrderDto, OrderDto2, OrderNote};

/// fieldmap - cached, plan-compiled field mapping
#[derive(Parser, Debug)]
#[command(name = "fieldmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a fieldmap TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Map a sample order into several DTOs and show cache statistics
    Demo {
        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the compiled plans for the demo type pairs
    Plan,
}

#[derive(Serialize)]
struct DemoReport {
    order_dto: OrderDto,
    order_dto_cached: OrderDto,
    order_dto2: OrderDto2,
    order_note: OrderNote,
    stats: CacheStats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, warnings) = MapperConfig::load_or_default(cli.config.as_deref())
        .with_context(|| match &cli.config {
            Some(path) => format!("failed to load config from {}", path.display()),
            None => "failed to load config".to_string(),
        })?;
    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }

    let mapper = Mapper::with_config(&config);

    match cli.command {
        Commands::Demo { json } => cmd_demo(&mapper, json),
        Commands::Plan => cmd_plan(&mapper),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_demo(mapper: &Mapper, json: bool) -> Result<()> {
    let order = demo::sample_order();

    let order_dto: OrderDto = mapper.map(&order)?;
    // Second call with the same pair is served from the cache
    let order_dto_cached: OrderDto = mapper.map(&order)?;
    let order_dto2: OrderDto2 = mapper.map(&order)?;
    let order_note: OrderNote = mapper.map(&order)?;

    let report = DemoReport {
        order_dto,
        order_dto_cached,
        order_dto2,
        order_note,
        stats: mapper.stats(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("source:           {:?}", order);
    println!("OrderDto:         {:?}", report.order_dto);
    println!("OrderDto (cache): {:?}", report.order_dto_cached);
    println!("OrderDto2:        {:?}", report.order_dto2);
    println!("OrderNote:        {:?}", report.order_note);
    println!();
    let stats = report.stats;
    println!(
        "plans: {}  hits: {}  misses: {}  compilations: {}",
        stats.entries, stats.hits, stats.misses, stats.compilations
    );
    Ok(())
}

fn cmd_plan(mapper: &Mapper) -> Result<()> {
    let plans = [
        mapper.plan::<Order, OrderDto>()?,
        mapper.plan::<Order, OrderDto2>()?,
        mapper.plan::<Order, OrderNote>()?,
    ];
    for plan in plans {
        print!("{}", plan);
    }
    Ok(())
}
