use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use gitscout::config::{find_config_file, get_config, load_config};
use gitscout::pagination;
use gitscout::{GitHubClient, SearchQuery, UserSearch};
use tracing_subscriber::EnvFilter;

/// Search GitHub users by bio text, enriched with their most used language
#[derive(Parser, Debug)]
#[command(name = "gitscout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find GitHub users by searching their bio descriptions", long_about = None)]
struct Cli {
    /// Bio keywords to search for
    #[arg(required = true)]
    keyword: Vec<String>,

    /// Filter results by profile location
    #[arg(long, short)]
    location: Option<String>,

    /// Result page to fetch (1-based, 10 users per page)
    #[arg(long, short, default_value_t = 1)]
    page: u32,

    /// Enable verbose logging (-v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("gitscout={}", default_level))),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let keyword = cli.keyword.join(" ");
    if keyword.trim().is_empty() {
        // A blank search is a no-op, not an error.
        println!("Enter a search term to find GitHub users");
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => match find_config_file() {
            Some(path) => load_config(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => get_config(),
        },
    };

    let client = GitHubClient::from_config(&config)?;
    let search = UserSearch::new(Arc::new(client));

    let mut query = SearchQuery::new(keyword).page(cli.page);
    if let Some(location) = cli.location {
        query = query.location(location);
    }

    let page = search
        .search(&query)
        .await
        .context("Search failed")?;

    if page.is_empty() {
        println!("No users found matching your search criteria.");
        return Ok(());
    }

    gitscout::ui::print_page(&page);

    let total_pages = page.total_pages();
    if total_pages > 1 {
        let window = pagination::window(page.current_page, total_pages);
        println!("{}", gitscout::ui::render_pager(&window, page.current_page));
        println!("Page {} of {}", page.current_page, total_pages);
    }

    Ok(())
}
