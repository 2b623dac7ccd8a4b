use anyhow::Result;
use clap::Parser;
use nutree_web::{
    commands,
    config::{DEFAULT_REPO, DEFAULT_REVALIDATE_SECS, SiteOptions},
    releases::DEFAULT_RELEASE_LIMIT,
    site::Page,
};
use std::net::SocketAddr;
use std::path::PathBuf;

/// nutree-web - the Nutree AI marketing site
///
/// Serves the landing page, legal pages and a changelog built from GitHub releases.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// Set POSTHOG_KEY (and optionally POSTHOG_HOST) to enable product analytics.
///
/// Examples:
///   nutree-web serve                     # Serve on 127.0.0.1:3000
///   nutree-web render changelog          # Print the changelog page
///   nutree-web export --out ./public     # Write the whole site as static files
#[derive(Parser, Debug)]
#[command(author, version = env!("NUTREE_WEB_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Repository whose releases fill the changelog
    #[arg(
        long,
        env = "NUTREE_GITHUB_REPO",
        value_name = "OWNER/REPO",
        default_value = DEFAULT_REPO,
        global = true
    )]
    pub repo: String,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Number of releases shown on the changelog
    #[arg(long, value_name = "N", default_value_t = DEFAULT_RELEASE_LIMIT, global = true)]
    pub limit: u32,

    /// Seconds a fetched release list is reused before refetching
    #[arg(
        long = "revalidate-secs",
        env = "NUTREE_REVALIDATE_SECS",
        value_name = "SECS",
        default_value_t = DEFAULT_REVALIDATE_SECS,
        global = true
    )]
    pub revalidate_secs: u64,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the site over HTTP
    Serve(ServeArgs),

    /// Render a single page to stdout
    Render(RenderArgs),

    /// Write every page as static HTML
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(
        long,
        env = "NUTREE_BIND",
        value_name = "ADDR",
        default_value = "127.0.0.1:3000"
    )]
    pub bind: SocketAddr,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Page to render: home, changelog, privacy, terms or not-found
    #[arg(value_name = "PAGE")]
    pub page: Page,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,
}

impl Cli {
    fn site_options(&self) -> SiteOptions {
        SiteOptions {
            repo: self.repo.clone(),
            api_url: self.api_url.clone(),
            release_limit: self.limit,
            revalidate_secs: self.revalidate_secs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let runtime = nutree_web::runtime::RealRuntime;
    let options = cli.site_options();

    match cli.command {
        Commands::Serve(args) => commands::serve(runtime, options, args.bind).await?,
        Commands::Render(args) => {
            let mut stdout = std::io::stdout().lock();
            commands::render(runtime, options, args.page, &mut stdout).await?
        }
        Commands::Export(args) => commands::export(runtime, options, &args.out).await?,
    }
    Ok(())
}
