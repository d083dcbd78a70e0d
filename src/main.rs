use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use pcf_client::ProcessClient;
use pcf_core::config::Config;
use pcf_core::{validate, Process, DOMAIN};

#[derive(Parser)]
#[command(name = "pcf", about = "Query the APQC Process Classification Framework")]
struct Cli {
    /// Override the snapshot base URL from config.
    #[arg(long)]
    base_url: Option<String>,

    /// Emit JSON instead of text lines.
    #[arg(long)]
    json: bool,

    /// Write debug logs to stderr (filter via RUST_LOG).
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a single process by taxonomy code (pCFID).
    Get { code: String },
    /// Search process names and descriptions, case-insensitively.
    Search { query: String },
    /// Look up a single process by hierarchy ID (e.g. 3.4.2).
    Show { hierarchy_id: String },
    /// List the direct children of a hierarchy position.
    Children { hierarchy_id: String },
    /// List every process in a category (e.g. 1 or 13).
    Category { number: String },
    /// Print the dataset's namespace descriptor.
    Domain,
    /// Validate a local things.json snapshot before publication.
    Check { file: std::path::PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let mut config = Config::load().context("loading ~/.config/pcf/config.toml")?;
    if let Some(base_url) = cli.base_url {
        config.source.base_url = base_url;
    }
    let json = cli.json || config.output.format == "json";
    tracing::debug!(base_url = %config.source.base_url, json, "resolved configuration");

    match cli.command {
        Command::Check { file } => check(&file, json),
        Command::Domain => {
            if json {
                println!("{}", serde_json::to_string_pretty(&DOMAIN)?);
            } else {
                println!("{} (parent: {})", DOMAIN.name, DOMAIN.parent);
                println!("types: {}", DOMAIN.types.join(", "));
            }
            Ok(())
        }
        command => run_query(ProcessClient::new(config.source)?, command, json).await,
    }
}

async fn run_query(client: ProcessClient, command: Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::Get { code } => match client.get(&code).await {
            Some(process) => print_one(&process, json)?,
            None => bail!("no process with code {code:?}"),
        },
        Command::Search { query } => print_many(&client.search(&query).await, json)?,
        Command::Show { hierarchy_id } => match client.get_by_hierarchy_id(&hierarchy_id).await {
            Some(process) => print_one(&process, json)?,
            None => bail!("no process at {hierarchy_id:?}"),
        },
        Command::Children { hierarchy_id } => {
            print_many(&client.get_children(&hierarchy_id).await?, json)?
        }
        Command::Category { number } => {
            print_many(&client.get_by_category(&number).await?, json)?
        }
        Command::Domain | Command::Check { .. } => unreachable!("handled by main"),
    }
    Ok(())
}

fn print_one(process: &Process, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(process)?);
        return Ok(());
    }
    println!("{}  {}  [{}]", process.hierarchy_id, process.name, process.level);
    println!("code: {}", process.code);
    if let Some(description) = &process.description {
        println!("{description}");
    }
    if process.metrics_available {
        println!("metrics: available");
    }
    Ok(())
}

fn print_many(things: &[Process], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(things)?);
        return Ok(());
    }
    for process in things {
        println!("{:<12} {:<14} {}", process.hierarchy_id, process.level.to_string(), process.name);
    }
    if things.is_empty() {
        eprintln!("no results");
    }
    Ok(())
}

fn check(file: &std::path::Path, json: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let things: Vec<Process> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {} as a things.json array", file.display()))?;

    let violations = validate::validate(&things);
    if json {
        let lines: Vec<String> = violations.iter().map(ToString::to_string).collect();
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for violation in &violations {
            println!("{violation}");
        }
    }

    if violations.is_empty() {
        eprintln!("{} records, no violations", things.len());
        Ok(())
    } else {
        bail!("{} violation(s) in {}", violations.len(), file.display())
    }
}
