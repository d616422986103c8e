//! Library entrypoints used by the CLI.

use crate::engine::Engine;
use crate::error::Result;
use crate::tools::extract::{extract_recipe, RecipeRecord};
use crate::tools::fetch::{Fetcher, HttpFetcher};
use crate::tools::map::{map_categories, map_recipe_urls, CategoryLink, RecipeReference};
use crate::types::{CrawlConfig, RunSummary};
use std::time::Instant;
use tracing::info;

/// Run a full crawl over HTTP with the given configuration.
pub async fn crawl(config: CrawlConfig) -> Result<RunSummary> {
    config.validate()?;
    let fetcher = HttpFetcher::new(&config.user_agent)?;
    crawl_with(&fetcher, config).await
}

/// Run a full crawl with a caller-supplied fetcher.
pub async fn crawl_with(fetcher: &dyn Fetcher, config: CrawlConfig) -> Result<RunSummary> {
    let start_time = Instant::now();
    let summary = Engine::new(fetcher, config).run().await?;
    info!(
        written = summary.written(),
        skipped = summary.skipped(),
        rows = summary.rows(),
        failed = summary.failed_recipes(),
        "crawl finished in {}ms",
        start_time.elapsed().as_millis()
    );
    Ok(summary)
}

/// Fetch the root listing and return its category links.
pub async fn list_categories(fetcher: &dyn Fetcher, root_url: &str) -> Result<Vec<CategoryLink>> {
    let page = fetcher.fetch(root_url).await?;
    Ok(map_categories(&page.document(), &page.final_url))
}

/// Fetch a category page and return its recipe URLs in listing order.
pub async fn list_recipes(
    fetcher: &dyn Fetcher,
    category_url: &str,
) -> Result<Vec<RecipeReference>> {
    let page = fetcher.fetch(category_url).await?;
    Ok(map_recipe_urls(&page.document(), &page.final_url))
}

/// Fetch one recipe page and extract its record.
pub async fn extract_url(fetcher: &dyn Fetcher, url: &str) -> Result<RecipeRecord> {
    let page = fetcher.fetch(url).await?;
    Ok(extract_recipe(&page.document(), url))
}
