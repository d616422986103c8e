//! Map Tools
//!
//! Turn listing pages into the links the crawler visits next.

mod tests;
mod utils;

pub mod types;

pub use types::*;

use crate::selectors::{CATEGORY_BLOCK_SELECTOR, CATEGORY_SECTION_SELECTOR, RECIPE_SECTION_SELECTOR};
use scraper::Html;
use tracing::{debug, warn};
use url::Url;
use utils::*;

/// Map category links from the root listing page.
///
/// Returns an empty list (with a warning) when the category section is missing.
pub fn map_categories(doc: &Html, base_url: &str) -> Vec<CategoryLink> {
    let base = Url::parse(base_url).ok();

    let Some(section) = doc.select(&CATEGORY_SECTION_SELECTOR).next() else {
        warn!(url = base_url, section = "section#recipe-cat-listing", "category section not found");
        return Vec::new();
    };

    let mut links: Vec<CategoryLink> = Vec::new();
    for block in section.select(&CATEGORY_BLOCK_SELECTOR) {
        let Some(href) = first_href(&block) else {
            warn!(url = base_url, "category block without a link");
            continue;
        };
        let Some(url) = resolve_link(href, base.as_ref()) else {
            debug!(href, "skipping unusable category link");
            continue;
        };
        let link = CategoryLink { url };
        if !links.contains(&link) {
            links.push(link);
        }
    }

    debug!(url = base_url, count = links.len(), "mapped categories");
    links
}

/// Map recipe URLs from a category page's embedded JSON-LD ItemList.
///
/// Order follows the ItemList. A missing section, script or list yields an
/// empty result with a warning naming the category.
pub fn map_recipe_urls(doc: &Html, category_url: &str) -> Vec<RecipeReference> {
    let base = Url::parse(category_url).ok();

    let Some(section) = doc.select(&RECIPE_SECTION_SELECTOR).next() else {
        warn!(
            category = category_url,
            section = "section#recipe-subcat-listing",
            "recipe section not found"
        );
        return Vec::new();
    };

    let items = match find_itemlist(&section) {
        ItemListLookup::Found(items) => items,
        ItemListLookup::NoScript => {
            warn!(category = category_url, "JSON-LD script not found");
            return Vec::new();
        }
        ItemListLookup::Malformed(e) => {
            warn!(category = category_url, error = %e, "JSON-LD script is not valid JSON");
            return Vec::new();
        }
        ItemListLookup::NoItemList => {
            warn!(category = category_url, "JSON-LD script has no itemListElement");
            return Vec::new();
        }
    };

    let refs: Vec<RecipeReference> = items
        .iter()
        .filter_map(|item| {
            let raw = item_url(item)?;
            let url = resolve_link(raw, base.as_ref());
            if url.is_none() {
                debug!(category = category_url, raw, "skipping unusable recipe url");
            }
            url
        })
        .map(|url| RecipeReference { url })
        .collect();

    debug!(category = category_url, count = refs.len(), "mapped recipe urls");
    refs
}

/// Parse raw HTML and map category links.
pub fn map_categories_html(html: &str, base_url: &str) -> Vec<CategoryLink> {
    map_categories(&Html::parse_document(html), base_url)
}

/// Parse raw HTML and map recipe URLs.
pub fn map_recipe_urls_html(html: &str, category_url: &str) -> Vec<RecipeReference> {
    map_recipe_urls(&Html::parse_document(html), category_url)
}
