//! Coach extraction CLI
//!
//! Reads one page from a file or over HTTP, runs the extraction core and
//! prints JSON to stdout. Logs go to stderr.

mod config;
mod fetcher;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use coach_extraction::{
    detect_platform, extract_coaches, find_staff_directory_links, homepage_guesses,
    is_staff_directory_page, persist_candidates, plan_navigation, ExtractionConfig, FetchedPage,
    Level, MemoryStore, OrganizationContext, PageFetcher, RunDeduplicator, StaffPage, SubLevel,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::fetcher::HttpFetcher;

#[derive(Parser)]
#[command(name = "coach-extract")]
#[command(about = "Extract coaching-staff contacts from staff directory pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract coach candidates from a staff page
    Extract {
        #[command(flatten)]
        source: PageSource,

        #[command(flatten)]
        org: OrgArgs,

        /// Skip platform card profiles
        #[arg(long)]
        no_platform_cards: bool,

        /// Run candidates through validation, dedup and an in-memory store
        #[arg(long)]
        persist: bool,
    },

    /// Rank links on a homepage that may lead to a staff directory
    Links {
        #[command(flatten)]
        source: PageSource,
    },

    /// Score a page for being a staff directory
    Score {
        #[command(flatten)]
        source: PageSource,
    },

    /// Plan where to go from an organization homepage
    Plan {
        /// Homepage URL; guessed from --org-name when absent
        #[arg(long)]
        url: Option<String>,

        /// Read HTML from a file instead of fetching --url
        #[arg(long, requires = "url")]
        file: Option<PathBuf>,

        /// Organization name, used to guess a homepage
        #[arg(long)]
        org_name: Option<String>,

        /// college, high_school or youth
        #[arg(long, default_value = "youth")]
        level: Level,

        /// Two-letter state code, used for district and k12 guesses
        #[arg(long, default_value = "")]
        state: String,
    },
}

#[derive(Args)]
struct PageSource {
    /// Page URL (fetched unless --file is given)
    #[arg(long)]
    url: String,

    /// Read HTML from a file instead of fetching
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct OrgArgs {
    /// Organization name
    #[arg(long)]
    org_name: String,

    /// college, high_school or youth
    #[arg(long)]
    level: Level,

    /// Two-letter state code
    #[arg(long)]
    state: String,

    #[arg(long)]
    org_id: Option<i64>,

    /// Sub-level within the level (e.g. club_team, little_league)
    #[arg(long)]
    sub_level: Option<SubLevel>,

    #[arg(long)]
    division: Option<String>,
}

impl OrgArgs {
    fn into_context(self) -> Result<OrganizationContext> {
        let mut org = OrganizationContext::new(self.org_name, self.level, self.state);
        if let Some(id) = self.org_id {
            org = org.with_id(id);
        }
        if let Some(sub_level) = self.sub_level {
            if !sub_level.belongs_to(self.level) {
                bail!("sub-level {} does not belong to level {}", sub_level, self.level);
            }
            org = org.with_sub_level(sub_level);
        }
        if let Some(division) = self.division {
            org = org.with_division(division);
        }
        Ok(org)
    }
}

#[derive(Serialize)]
struct ScoreOutput {
    url: String,
    platform: coach_extraction::Platform,
    staff_page_confidence: f32,
}

#[derive(Serialize)]
struct ExtractOutput {
    coaches: Vec<coach_extraction::CoachCandidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<coach_extraction::PersistStats>,
}

fn output<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

async fn load_page(source: &PageSource, fetcher: &HttpFetcher) -> Result<StaffPage> {
    let fetched = match &source.file {
        Some(path) => {
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            FetchedPage::new(source.url.as_str(), html)
        }
        None => fetcher
            .fetch(&source.url)
            .await
            .with_context(|| format!("Failed to fetch {}", source.url))?,
    };
    Ok(StaffPage::from_fetched(&fetched))
}

fn extraction_config(config: &Config) -> ExtractionConfig {
    let mut extraction = ExtractionConfig::default();
    if let Some(threshold) = config.staff_page_threshold {
        extraction = extraction.with_staff_page_threshold(threshold);
    }
    if let Some(threshold) = config.school_homepage_threshold {
        extraction = extraction.with_school_homepage_threshold(threshold);
    }
    extraction
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,coach_extraction=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let fetcher = HttpFetcher::new(&config)?;
    let extraction = extraction_config(&config);

    match cli.command {
        Commands::Extract {
            source,
            org,
            no_platform_cards,
            persist,
        } => {
            let org = org.into_context()?;
            let extraction = extraction.with_platform_cards(!no_platform_cards);
            let page = load_page(&source, &fetcher).await?;
            let coaches = extract_coaches(&page, &org, &extraction);

            let stats = if persist {
                let store = MemoryStore::new();
                let mut dedup = RunDeduplicator::new();
                Some(persist_candidates(&store, coaches.clone(), &mut dedup, &extraction).await)
            } else {
                None
            };

            output(&ExtractOutput { coaches, stats })
        }
        Commands::Links { source } => {
            let page = load_page(&source, &fetcher).await?;
            output(&find_staff_directory_links(&page))
        }
        Commands::Score { source } => {
            let page = load_page(&source, &fetcher).await?;
            output(&ScoreOutput {
                url: page.url().to_string(),
                platform: detect_platform(page.markup()),
                staff_page_confidence: is_staff_directory_page(&page),
            })
        }
        Commands::Plan {
            url,
            file,
            org_name,
            level,
            state,
        } => {
            let page = match (url, org_name) {
                (Some(url), _) => load_page(&PageSource { url, file }, &fetcher).await?,
                (None, Some(name)) => {
                    let guesses =
                        homepage_guesses(&OrganizationContext::new(name.as_str(), level, state));
                    if guesses.is_empty() {
                        bail!("cannot guess a homepage for {:?}", name);
                    }
                    let fetched = fetcher
                        .fetch_first(&guesses)
                        .await
                        .with_context(|| format!("No guessed homepage responded for {:?}", name))?;
                    StaffPage::from_fetched(&fetched)
                }
                (None, None) => bail!("either --url or --org-name is required"),
            };
            output(&plan_navigation(&page, level, &extraction))
        }
    }
}
