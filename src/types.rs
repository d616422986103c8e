use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{QrawlError, Result};

/// Listing page of every ingredient category.
pub const DEFAULT_ROOT_URL: &str = "https://www.jamieoliver.com/recipes/category/ingredient/";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Crawl configuration.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrawlConfig {
    pub root_url: String,
    /// Categories whose URL contains any of these substrings are not crawled.
    pub skip_categories: Vec<String>,
    pub out_dir: PathBuf,
    /// Recipe fetches in flight per category. 1 keeps the run strictly sequential.
    pub concurrency: usize,
    /// Pause after each recipe request.
    pub delay_ms: u64,
    pub max_recipes_per_category: Option<usize>,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
            skip_categories: Vec::new(),
            out_dir: PathBuf::from("."),
            concurrency: 1,
            delay_ms: 0,
            max_recipes_per_category: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| QrawlError::Config(format!("{}: {e}", path.display())))?;
        let cfg: CrawlConfig = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.root_url)
            .map_err(|_| QrawlError::InvalidUrl(self.root_url.clone()))?;
        if self.concurrency == 0 {
            return Err(QrawlError::Config("concurrency must be at least 1".into()));
        }
        Ok(())
    }

    pub fn with_root_url(mut self, url: &str) -> Self {
        self.root_url = url.to_string();
        self
    }

    pub fn with_skip_categories(mut self, skip: &[&str]) -> Self {
        self.skip_categories = skip.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn with_concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }

    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn with_max_recipes(mut self, max: usize) -> Self {
        self.max_recipes_per_category = Some(max);
        self
    }

    pub fn with_user_agent(mut self, ua: &str) -> Self {
        self.user_agent = ua.to_string();
        self
    }

    /// First skip-list entry contained in `category_url`, if any.
    pub fn skip_match(&self, category_url: &str) -> Option<&str> {
        self.skip_categories
            .iter()
            .map(String::as_str)
            .find(|s| !s.is_empty() && category_url.contains(s))
    }
}

/// What happened to one category during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CategoryOutcome {
    Skipped { matched: String },
    /// The category page itself could not be fetched.
    Unreachable { error: String },
    /// Nothing to flush: empty listing, or every recipe failed.
    Empty { failed: usize },
    Written {
        path: PathBuf,
        rows: usize,
        failed: usize,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub url: String,
    pub outcome: CategoryOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub root_url: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub categories: Vec<CategoryReport>,
}

impl RunSummary {
    pub fn written(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| matches!(c.outcome, CategoryOutcome::Written { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| matches!(c.outcome, CategoryOutcome::Skipped { .. }))
            .count()
    }

    pub fn rows(&self) -> usize {
        self.categories
            .iter()
            .map(|c| match c.outcome {
                CategoryOutcome::Written { rows, .. } => rows,
                _ => 0,
            })
            .sum()
    }

    pub fn failed_recipes(&self) -> usize {
        self.categories
            .iter()
            .map(|c| match c.outcome {
                CategoryOutcome::Written { failed, .. } | CategoryOutcome::Empty { failed } => {
                    failed
                }
                CategoryOutcome::Skipped { .. } | CategoryOutcome::Unreachable { .. } => 0,
            })
            .sum()
    }

    /// A run succeeds when no category was attempted, or at least one was flushed.
    pub fn is_success(&self) -> bool {
        let attempted = self.categories.len() - self.skipped();
        attempted == 0 || self.written() > 0
    }
}

/// JSON envelope printed by the inspection commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let cfg = CrawlConfig::new()
            .with_concurrency(0)
            .with_skip_categories(&["apple", "tuna"])
            .with_delay_ms(250)
            .with_user_agent("bot/1.0");

        assert_eq!(cfg.concurrency, 1);
        assert_eq!(cfg.delay_ms, 250);
        assert_eq!(cfg.user_agent, "bot/1.0");
        assert_eq!(cfg.skip_categories, vec!["apple", "tuna"]);
        assert_eq!(cfg.root_url, DEFAULT_ROOT_URL);
    }

    #[test]
    fn test_skip_match_is_substring() {
        let cfg = CrawlConfig::new().with_skip_categories(&["tuna", ""]);
        assert_eq!(
            cfg.skip_match("https://site.test/recipes/tuna-recipes/"),
            Some("tuna")
        );
        assert_eq!(cfg.skip_match("https://site.test/recipes/beef-recipes/"), None);
    }

    #[test]
    fn test_config_file_partial_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crawl.json");
        std::fs::write(&path, r#"{"skipCategories": ["apple"], "concurrency": 4}"#).unwrap();

        let cfg = CrawlConfig::from_file(&path).unwrap();
        assert_eq!(cfg.skip_categories, vec!["apple"]);
        assert_eq!(cfg.concurrency, 4);
        assert_eq!(cfg.out_dir, PathBuf::from("."));
    }

    #[test]
    fn test_config_rejects_zero_concurrency() {
        let cfg = CrawlConfig {
            concurrency: 0,
            ..CrawlConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(QrawlError::Config(_))));
    }

    #[test]
    fn test_summary_success_rules() {
        let now = Utc::now();
        let mut summary = RunSummary {
            root_url: DEFAULT_ROOT_URL.into(),
            started_at: now,
            finished_at: now,
            categories: vec![CategoryReport {
                url: "a".into(),
                outcome: CategoryOutcome::Skipped {
                    matched: "a".into(),
                },
            }],
        };
        assert!(summary.is_success());

        summary.categories.push(CategoryReport {
            url: "b".into(),
            outcome: CategoryOutcome::Empty { failed: 2 },
        });
        assert!(!summary.is_success());
        assert_eq!(summary.failed_recipes(), 2);

        summary.categories.push(CategoryReport {
            url: "c".into(),
            outcome: CategoryOutcome::Written {
                path: "c.csv".into(),
                rows: 3,
                failed: 1,
            },
        });
        assert!(summary.is_success());
        assert_eq!(summary.rows(), 3);
        assert_eq!(summary.written(), 1);
    }
}
