use clap::Parser;
use rusers_domain::tally::tally_by_username;
use rusers_domain::{CliOverrides, Machine, SessionRecord};
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "rusers")]
#[command(version)]
#[command(about = "Query logged-in users on remote hosts over SunRPC")]
struct Cli {
    /// Hosts to query; the machines file is swept when none are given
    hosts: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Overall window for the rusers call, in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Machines file to sweep when no hosts are given (default ~/.machines)
    #[arg(short = 'm', long, value_name = "FILE")]
    machines_file: Option<String>,

    /// Count sessions per user instead of listing them
    #[arg(long, conflicts_with = "find")]
    count: bool,

    /// Only show sessions whose username matches one of these patterns
    #[arg(long, value_name = "PATTERN")]
    find: Vec<String>,

    /// Match --find patterns against the whole username
    #[arg(long, requires = "find")]
    exact: bool,

    /// Emit JSON instead of the table
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        call_timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let machines = resolve_machines(&cli)?;
    info!(machines = machines.len(), "Starting rusers query");

    let use_cases = di::UseCases::new(&config);

    if !cli.find.is_empty() {
        let matches = use_cases
            .find_user
            .execute(&cli.find, &machines, cli.exact)
            .await
            .map_err(|e| anyhow::anyhow!("invalid search pattern: {}", e))?;

        if cli.json {
            output::print_matches_json(&matches)?;
        } else {
            output::print_matches(&matches);
        }
        return Ok(());
    }

    let reports = use_cases.query_hosts.execute(&machines).await;

    if reports.iter().all(|report| report.outcome.is_err()) {
        anyhow::bail!("no hosts answered");
    }

    if cli.count {
        let records: Vec<SessionRecord> = reports
            .iter()
            .filter_map(|report| report.outcome.as_ref().ok())
            .flatten()
            .cloned()
            .collect();
        let tallies = tally_by_username(&records);

        if cli.json {
            output::print_tallies_json(&tallies)?;
        } else {
            output::print_tallies(&tallies);
        }
    } else if cli.json {
        output::print_reports_json(&reports)?;
    } else {
        output::print_reports(&reports);
    }

    Ok(())
}

/// Hosts from the command line, or the machines file when none were given.
fn resolve_machines(cli: &Cli) -> anyhow::Result<Vec<Machine>> {
    if !cli.hosts.is_empty() {
        return Ok(cli
            .hosts
            .iter()
            .map(|host| Machine::named(host.as_str()))
            .collect());
    }

    let path = match &cli.machines_file {
        Some(path) => PathBuf::from(path),
        None => match dirs::home_dir() {
            Some(home) => home.join(".machines"),
            None => anyhow::bail!("no hosts given and no home directory for a machines file"),
        },
    };

    if !path.exists() {
        anyhow::bail!("no hosts given and no machines file at {}", path.display());
    }

    let machines = rusers_domain::machine::load_machines(&path)?;
    if machines.is_empty() {
        anyhow::bail!("machines file {} lists no machines", path.display());
    }
    Ok(machines)
}
