use crate::error::Result;
use crate::tools::batch::batch;
use crate::tools::extract::{extract_recipe, RecipeRecord};
use crate::tools::fetch::Fetcher;
use crate::tools::map::{map_categories, map_recipe_urls, CategoryLink, RecipeReference};
use crate::tools::write::write_category;
use crate::types::*;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where a run currently is. Categories cycle through the middle three states
/// one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    EnumeratingCategories,
    WalkingListing,
    FetchingRecipes,
    Flushing,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunState::Idle => "idle",
            RunState::EnumeratingCategories => "enumerating-categories",
            RunState::WalkingListing => "walking-listing",
            RunState::FetchingRecipes => "fetching-recipes",
            RunState::Flushing => "flushing",
        };
        f.write_str(s)
    }
}

/// Drives a crawl: categories → listings → recipes → one CSV per category.
///
/// Failures are contained at the smallest scope that can recover. A recipe
/// that fails to fetch is dropped from its batch; a category page that fails
/// to fetch yields no artifact. Only a root fetch failure or a write failure
/// ends the run early, and artifacts flushed before that stay on disk.
pub struct Engine<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub config: CrawlConfig,
}

impl<'a> Engine<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, config: CrawlConfig) -> Self {
        Self { fetcher, config }
    }

    fn enter(&self, state: RunState, url: &str) {
        debug!(state = %state, url, "state");
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let started_at = chrono::Utc::now();
        let root_url = self.config.root_url.as_str();

        info!(url = root_url, fetcher = self.fetcher.name(), "starting crawl");
        self.enter(RunState::EnumeratingCategories, root_url);
        let categories = self.enumerate_categories().await?;

        let mut reports = Vec::with_capacity(categories.len());
        if categories.is_empty() {
            warn!(url = root_url, "recipe section not loading/found, nothing to crawl");
        } else {
            info!(url = root_url, count = categories.len(), "found categories");
        }

        for category in &categories {
            let outcome = self.crawl_category(category).await?;
            reports.push(CategoryReport {
                url: category.url.clone(),
                outcome,
            });
        }

        self.enter(RunState::Idle, root_url);
        Ok(RunSummary {
            root_url: root_url.to_string(),
            started_at,
            finished_at: chrono::Utc::now(),
            categories: reports,
        })
    }

    /// Fetch the root listing and map its categories. A fetch failure here is fatal.
    pub async fn enumerate_categories(&self) -> Result<Vec<CategoryLink>> {
        let root = self.fetcher.fetch(&self.config.root_url).await?;
        Ok(map_categories(&root.document(), &root.final_url))
    }

    /// Walk one category and flush its batch. Only a write failure is returned as an error.
    pub async fn crawl_category(&self, category: &CategoryLink) -> Result<CategoryOutcome> {
        let url = category.url.as_str();

        if let Some(matched) = self.config.skip_match(url) {
            info!(category = url, matched, "skipping category");
            return Ok(CategoryOutcome::Skipped {
                matched: matched.to_string(),
            });
        }

        self.enter(RunState::WalkingListing, url);
        info!(category = url, "crawling category");
        let mut refs = match self.fetcher.fetch(url).await {
            Ok(page) => map_recipe_urls(&page.document(), &page.final_url),
            Err(e) => {
                warn!(category = url, error = %e, "category page unreachable");
                return Ok(CategoryOutcome::Unreachable {
                    error: e.to_string(),
                });
            }
        };
        if let Some(max) = self.config.max_recipes_per_category {
            refs.truncate(max);
        }

        self.enter(RunState::FetchingRecipes, url);
        let (records, failed) = self.fetch_recipes(refs).await;

        if records.is_empty() {
            info!(category = url, failed, "no recipes collected, nothing to flush");
            return Ok(CategoryOutcome::Empty { failed });
        }

        self.enter(RunState::Flushing, url);
        let rows = records.len();
        let path = write_category(&records, &self.config.out_dir, url)?;
        Ok(CategoryOutcome::Written { path, rows, failed })
    }

    /// Fetch and extract every reference; the batch keeps listing order.
    /// Returns the collected records and how many references failed.
    pub async fn fetch_recipes(&self, refs: Vec<RecipeReference>) -> (Vec<RecipeRecord>, usize) {
        let total = refs.len();
        let results = batch(refs, self.config.concurrency, move |r| self.fetch_recipe(r)).await;

        let records: Vec<RecipeRecord> = results.into_iter().flatten().collect();
        let failed = total - records.len();
        (records, failed)
    }

    async fn fetch_recipe(&self, reference: RecipeReference) -> Option<RecipeRecord> {
        debug!(url = %reference.url, "fetching recipe");
        let result = self.fetcher.fetch(&reference.url).await;

        if self.config.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        }

        match result {
            Ok(page) => Some(extract_recipe(&page.document(), &reference.url)),
            Err(e) => {
                warn!(url = %reference.url, error = %e, "skipping recipe");
                None
            }
        }
    }
}
