use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::tools::crawl::{crawl_all, CrawlReport};
use crate::tools::extract::{extract_menu_with, origin_of, ExtractionResult};
use crate::tools::fetch::FetchProfile;
use crate::{runtime, ApiResponse, Config};

#[derive(Parser)]
#[command(name = "menucrawl", version, about = "Restaurant menu extraction (JSON only)")]
pub struct Cli {
    /// JSON config file with `fetch`, `extract` and `crawl` sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract a menu from saved HTML (file path or `-` for stdin)
    Extract(ExtractArgs),
    /// Fetch restaurant pages and extract their menus
    Crawl(CrawlArgs),
}

#[derive(Args)]
struct ExtractArgs {
    input: String,
    /// Page URL the HTML came from; relative image paths resolve against it
    #[arg(long)]
    url: Option<String>,
}

#[derive(Args)]
struct CrawlArgs {
    #[arg(required = true)]
    urls: Vec<String>,
    #[arg(long)]
    concurrency: Option<usize>,
    #[arg(long = "timeout-ms")]
    timeout_ms: Option<u64>,
    #[arg(long, value_enum)]
    profile: Option<FetchProfile>,
    /// Accept links on any host
    #[arg(long = "any-host")]
    any_host: bool,
}

#[derive(serde::Serialize)]
struct CrawlEntry {
    url: String,
    #[serde(flatten)]
    response: ApiResponse<CrawlReport>,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    match cli.cmd {
        Command::Extract(args) => {
            let res = extract_cmd(&mut config, args);
            print_json(&ApiResponse::from(res))
        }
        Command::Crawl(args) => {
            if let Some(n) = args.concurrency {
                config.crawl.concurrency = n;
            }
            if let Some(ms) = args.timeout_ms {
                config.fetch.timeout_ms = ms;
            }
            if let Some(profile) = args.profile {
                config.fetch.profile = profile;
            }
            if args.any_host {
                config.crawl.allowed_hosts.clear();
            }

            let results = runtime::block_on(crawl_all(args.urls, &config))?;
            let entries: Vec<CrawlEntry> = results
                .into_iter()
                .map(|(url, res)| CrawlEntry {
                    url,
                    response: res.into(),
                })
                .collect();
            print_json(&entries)
        }
    }
}

fn extract_cmd(config: &mut Config, args: ExtractArgs) -> crate::Result<ExtractionResult> {
    if let Some(url) = args.url.as_deref() {
        config.extract.origin = origin_of(url)?;
    }
    let html = read_input(&args.input)?;
    Ok(extract_menu_with(&html, &config.extract)?)
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
    }
}

/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn print_json<T: serde::Serialize>(val: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}
