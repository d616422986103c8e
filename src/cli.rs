use crate::api;
use crate::tools::fetch::HttpFetcher;
use crate::types::{
    ApiResponse, CategoryOutcome, CrawlConfig, RunSummary, DEFAULT_ROOT_URL, DEFAULT_USER_AGENT,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "recipe-qrawl",
    version,
    about = "Crawl recipe categories into per-category CSV files"
)]
pub struct Cli {
    /// Debug logging for this crate (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// User-Agent header sent with every request
    #[arg(long, global = true)]
    user_agent: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Crawl every category and write one CSV per category
    Crawl(CrawlArgs),
    /// Print the category links found on the root listing (JSON)
    Categories {
        #[arg(default_value = DEFAULT_ROOT_URL)]
        url: String,
    },
    /// Print the recipe URLs listed by a category page (JSON)
    Recipes { category_url: String },
    /// Print the record extracted from one recipe page (JSON)
    Extract { url: String },
}

#[derive(Args)]
struct CrawlArgs {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    root_url: Option<String>,

    /// Directory for the CSV files
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Skip categories whose URL contains this text (repeatable)
    #[arg(long = "skip", value_name = "TEXT")]
    skip: Vec<String>,

    /// Recipe pages fetched at once within a category
    #[arg(long)]
    concurrency: Option<usize>,

    /// Pause after each recipe request, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Only fetch the first N recipes of each category
    #[arg(long)]
    max_recipes: Option<usize>,
}

impl CrawlArgs {
    fn into_config(self, user_agent: Option<&str>) -> crate::Result<CrawlConfig> {
        let mut cfg = match &self.config {
            Some(path) => CrawlConfig::from_file(path)?,
            None => CrawlConfig::default(),
        };
        if let Some(url) = self.root_url {
            cfg.root_url = url;
        }
        if let Some(dir) = self.out_dir {
            cfg.out_dir = dir;
        }
        cfg.skip_categories.extend(self.skip);
        if let Some(n) = self.concurrency {
            cfg.concurrency = n;
        }
        if let Some(ms) = self.delay_ms {
            cfg = cfg.with_delay_ms(ms);
        }
        if self.max_recipes.is_some() {
            cfg.max_recipes_per_category = self.max_recipes;
        }
        if let Some(ua) = user_agent {
            cfg = cfg.with_user_agent(ua);
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

pub async fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    let user_agent = cli.user_agent.as_deref();

    match cli.cmd {
        Command::Crawl(args) => {
            let config = args.into_config(user_agent)?;
            let summary = api::crawl(config).await?;
            report(&summary);
            Ok(if summary.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Categories { url } => {
            let fetcher = http_fetcher(user_agent)?;
            Ok(finish(api::list_categories(&fetcher, &url).await))
        }
        Command::Recipes { category_url } => {
            let fetcher = http_fetcher(user_agent)?;
            Ok(finish(api::list_recipes(&fetcher, &category_url).await))
        }
        Command::Extract { url } => {
            let fetcher = http_fetcher(user_agent)?;
            Ok(finish(api::extract_url(&fetcher, &url).await))
        }
    }
}

fn http_fetcher(user_agent: Option<&str>) -> crate::Result<HttpFetcher> {
    HttpFetcher::new(user_agent.unwrap_or(DEFAULT_USER_AGENT))
}

fn report(summary: &RunSummary) {
    for c in &summary.categories {
        match &c.outcome {
            CategoryOutcome::Written { path, rows, failed } => {
                info!(category = %c.url, path = %path.display(), rows, failed, "written")
            }
            CategoryOutcome::Empty { failed } => info!(category = %c.url, failed, "empty"),
            CategoryOutcome::Skipped { matched } => info!(category = %c.url, matched = %matched, "skipped"),
            CategoryOutcome::Unreachable { error } => warn!(category = %c.url, error = %error, "unreachable"),
        }
    }
    if !summary.is_success() {
        warn!("no category produced a dataset");
    }
}

fn finish<T: serde::Serialize>(res: crate::Result<T>) -> ExitCode {
    match res {
        Ok(v) => {
            print_json(ApiResponse::ok(v));
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_json(ApiResponse::<()>::err(e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: serde::Serialize>(val: T) {
    match serde_json::to_string_pretty(&val) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_crawl_flags_override_defaults() {
        let cli = parse(&[
            "recipe-qrawl",
            "crawl",
            "--skip",
            "apple",
            "--skip",
            "tuna",
            "--concurrency",
            "4",
            "--out-dir",
            "data",
            "--max-recipes",
            "2",
            "--delay-ms",
            "250",
        ]);
        let Command::Crawl(args) = cli.cmd else {
            panic!("expected crawl");
        };

        let cfg = args.into_config(cli.user_agent.as_deref()).unwrap();
        assert_eq!(cfg.skip_categories, vec!["apple", "tuna"]);
        assert_eq!(cfg.concurrency, 4);
        assert_eq!(cfg.out_dir, PathBuf::from("data"));
        assert_eq!(cfg.max_recipes_per_category, Some(2));
        assert_eq!(cfg.delay_ms, 250);
        assert_eq!(cfg.root_url, DEFAULT_ROOT_URL);
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_user_agent_is_global() {
        let cli = parse(&["recipe-qrawl", "crawl", "--user-agent", "bot/1.0"]);
        let Command::Crawl(args) = cli.cmd else {
            panic!("expected crawl");
        };
        let cfg = args.into_config(cli.user_agent.as_deref()).unwrap();
        assert_eq!(cfg.user_agent, "bot/1.0");

        let cli = parse(&["recipe-qrawl", "--user-agent", "bot/2.0", "extract", "https://x.test/r/"]);
        assert_eq!(cli.user_agent.as_deref(), Some("bot/2.0"));
        assert!(matches!(cli.cmd, Command::Extract { .. }));

        let cli = parse(&["recipe-qrawl", "recipes", "https://x.test/c/", "--user-agent", "bot/3.0"]);
        assert_eq!(cli.user_agent.as_deref(), Some("bot/3.0"));
    }

    #[test]
    fn test_flag_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crawl.json");
        std::fs::write(&path, r#"{"userAgent": "from-file", "delayMs": 10, "skipCategories": ["apple"]}"#)
            .unwrap();

        let config_arg = path.to_string_lossy().into_owned();
        let cli = parse(&["recipe-qrawl", "crawl", "--config", &config_arg, "--skip", "tuna"]);
        let Command::Crawl(args) = cli.cmd else {
            panic!("expected crawl");
        };
        let cfg = args.into_config(None).unwrap();
        assert_eq!(cfg.user_agent, "from-file");
        assert_eq!(cfg.delay_ms, 10);
        assert_eq!(cfg.skip_categories, vec!["apple", "tuna"]);
    }

    #[test]
    fn test_crawl_rejects_zero_concurrency() {
        let cli = parse(&["recipe-qrawl", "crawl", "--concurrency", "0"]);
        let Command::Crawl(args) = cli.cmd else {
            panic!("expected crawl");
        };
        assert!(args.into_config(None).is_err());
    }

    #[test]
    fn test_categories_defaults_to_root() {
        let cli = parse(&["recipe-qrawl", "categories"]);
        match cli.cmd {
            Command::Categories { url } => assert_eq!(url, DEFAULT_ROOT_URL),
            _ => panic!("expected categories"),
        }
    }
}
