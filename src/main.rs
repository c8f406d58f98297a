// Copyright 2026 Skillrank Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use serde_json::Value;

use skillrank::error::PipelineError;
use skillrank::{extract, fetch, payload, rank, skills};

#[derive(Parser)]
#[command(
    name = "skillrank",
    about = "Skillrank — rank skill sources on skills.sh by peak installs",
    version,
    after_help = "Fetches the live site by default. Use --html-path to rank a saved page, or '-' to read it from stdin."
)]
struct Cli {
    /// Base URL to fetch when no local page is given
    #[arg(long, default_value = "https://skills.sh/")]
    url: String,

    /// Read the page from a local file ('-' for stdin) instead of fetching --url
    #[arg(long, default_value = "")]
    html_path: String,

    /// Which skill listing to rank
    #[arg(long, value_enum, default_value_t = View::AllTime)]
    view: View,

    /// Minimum install count for a skill to be considered
    #[arg(long, default_value_t = 1000)]
    min_installs: i64,

    /// Keep only this many top-ranked sources (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_sources: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Slug)]
    format: Format,

    /// Seconds before the network fetch aborts
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose/debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Generate shell completion scripts and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum View {
    /// The trending listing
    Trending,
    /// The all-time listing
    AllTime,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Bare owner/repository slugs, one per line
    Slug,
    /// GitHub URLs, one per line
    Url,
    /// Ranked groups with their skills as a JSON array
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "skillrank", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(cli.verbose);

    if let Err(e) = run(&cli).await {
        // Payload problems have a fixed exit code; everything else exits
        // through anyhow with its context chain.
        if let Some(pipeline) = e.downcast_ref::<PipelineError>() {
            eprintln!("ERROR: {pipeline}");
            std::process::exit(2);
        }
        return Err(e);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "skillrank=debug"
    } else {
        "skillrank=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> Result<()> {
    let html = if cli.html_path.is_empty() {
        fetch::fetch_text(&cli.url, cli.timeout).await?
    } else {
        fetch::read_local(&cli.html_path)?
    };

    let skills_payload = payload::find_skills_payload(extract::push_strings(&html))
        .ok_or(PipelineError::PayloadNotFound)?;

    let skills_key = match cli.view {
        View::Trending => payload::TRENDING_KEY,
        View::AllTime => payload::ALL_TIME_KEY,
    };
    let raw_items = skills_payload
        .get(skills_key)
        .and_then(Value::as_array)
        .ok_or(PipelineError::MissingViewKey(skills_key))?;

    let parsed = skills::parse_skills(raw_items);
    let groups = rank::rank_sources(parsed, cli.min_installs, cli.max_sources);

    let out = match cli.format {
        Format::Slug => rank::render_slug(&groups),
        Format::Url => rank::render_url(&groups),
        Format::Json => rank::render_json(&groups),
    };
    print!("{out}");
    Ok(())
}
