//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `schema_grader` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing results as JSON
//!
//! All core functionality is implemented in the library crate.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use strum::IntoEnumIterator;

use schema_grader::config::{DEFAULT_MAX_CONCURRENCY, DEFAULT_USER_AGENT};
use schema_grader::initialization::init_logger_with;
use schema_grader::{
    analyze, analyze_batch, AnalysisInput, Config, HttpFetcher, IssueKind, LogFormat, LogLevel,
};

#[derive(Debug, Parser)]
#[command(
    name = "schema_grader",
    about = "Extracts, validates and scores structured-data markup in HTML pages."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    global: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Page fetch timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze one HTML document or URL and print the result as JSON
    Analyze(AnalyzeArgs),
    /// Analyze every URL in a file (one per line) and print JSON lines
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct AnalyzeArgs {
    /// HTML file to analyze ("-" reads stdin)
    #[arg(long)]
    html: Option<PathBuf>,

    /// URL to fetch and analyze
    #[arg(long)]
    url: Option<String>,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// File with one URL per line ("#" starts a comment)
    file: PathBuf,

    /// Maximum concurrent analyses
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    max_concurrency: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let GlobalOpts {
        log_level,
        log_format,
        timeout_seconds,
        user_agent,
    } = cli.global;
    init_logger_with(log_level.clone().into(), log_format.clone())
        .context("Failed to initialize logger")?;

    let mut config = Config {
        log_level,
        log_format,
        fetch_timeout: Duration::from_secs(timeout_seconds),
        user_agent,
        ..Default::default()
    };

    let outcome = match cli.command {
        Command::Analyze(args) => run_analyze(args, &config).await,
        Command::Batch(args) => {
            config.max_concurrency = args.max_concurrency;
            run_batch(&args.file, &config).await
        }
    };

    if let Err(e) = outcome {
        eprintln!("schema_grader error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run_analyze(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let input = match (args.html, args.url) {
        (Some(path), _) => AnalysisInput::Html(read_html(&path)?),
        (None, Some(url)) => AnalysisInput::Url(url),
        // clap enforces exactly one of --html / --url
        (None, None) => anyhow::bail!("either --html or --url is required"),
    };

    let fetcher = HttpFetcher::new(config).context("Failed to build HTTP client")?;
    let result = analyze(&input, &fetcher, config.fetch_timeout).await;

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
    println!("{json}");
    Ok(())
}

async fn run_batch(file: &Path, config: &Config) -> Result<()> {
    let contents = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read URL file {}", file.display()))?;
    let urls = parse_url_list(&contents);

    let fetcher = HttpFetcher::new(config).context("Failed to build HTTP client")?;
    let report = analyze_batch(urls, &fetcher, config).await;

    for entry in &report.entries {
        let line = serde_json::to_string(entry).context("Failed to serialize result")?;
        println!("{line}");
    }

    info!(
        "Analyzed {} URL{} ({} reachable, {} unreachable) in {:.1}s",
        report.total,
        if report.total == 1 { "" } else { "s" },
        report.reachable,
        report.unreachable,
        report.elapsed_seconds
    );
    for kind in IssueKind::iter() {
        let count = report.issue_stats.get_count(kind);
        if count > 0 {
            info!("   {}: {}", kind, count);
        }
    }
    Ok(())
}

fn read_html(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read HTML from stdin")?;
        return Ok(html);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read HTML file {}", path.display()))
}

fn parse_url_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_list_skips_blanks_and_comments() {
        let contents = "https://a.example\n\n# comment\n  b.example  \n";
        assert_eq!(
            parse_url_list(contents),
            vec!["https://a.example".to_string(), "b.example".to_string()]
        );
    }

    #[test]
    fn test_read_html_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "<div typeof=\"Place\"></div>").expect("Failed to write HTML");
        let html = read_html(file.path()).unwrap();
        assert_eq!(html, "<div typeof=\"Place\"></div>");
    }

    #[test]
    fn test_read_html_missing_file() {
        let err = read_html(Path::new("/nonexistent/page.html")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read HTML file"));
    }

    #[test]
    fn test_cli_requires_one_input() {
        assert!(Cli::try_parse_from(["schema_grader", "analyze"]).is_err());
        assert!(Cli::try_parse_from([
            "schema_grader",
            "analyze",
            "--html",
            "a.html",
            "--url",
            "https://example.com"
        ])
        .is_err());
    }

    #[test]
    fn test_cli_parses_batch_with_globals() {
        let cli = Cli::try_parse_from([
            "schema_grader",
            "batch",
            "urls.txt",
            "--max-concurrency",
            "4",
            "--timeout-seconds",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.global.timeout_seconds, 5);
        match cli.command {
            Command::Batch(args) => {
                assert_eq!(args.file, PathBuf::from("urls.txt"));
                assert_eq!(args.max_concurrency, 4);
            }
            Command::Analyze(_) => panic!("expected batch"),
        }
    }
}
