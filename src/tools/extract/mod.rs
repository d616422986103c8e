//! Extract Tools
//!
//! Pure functions from a parsed recipe page to a [`RecipeRecord`]. Every field
//! lookup is optional and defaults to empty when the page lacks the element.
//!
//! Title, subheading and intro are trimmed only. List items and the
//! serves/time details have whitespace runs collapsed.

mod utils;

pub mod types;

pub use types::*;
use utils::*;

use crate::selectors::{
    HERO_SELECTOR, INGREDIENT_SELECTOR, INTRO_SELECTOR, SERVES_SELECTOR, STEP_SELECTOR,
    SUBHEADING_SELECTOR, TIME_SELECTOR, TITLE_SELECTOR,
};
use scraper::Html;
use tracing::{debug, warn};

/// Extract a recipe record from a parsed page. Never fails.
pub fn extract_recipe(doc: &Html, url: &str) -> RecipeRecord {
    let ingredients = select_list(doc, &INGREDIENT_SELECTOR);
    if ingredients.is_empty() {
        warn!(url, section = "ul.ingred-list", "ingredients list not found");
    }

    let record = RecipeRecord {
        url: url.to_string(),
        title: select_text(doc, &TITLE_SELECTOR).unwrap_or_default(),
        subheading: select_text(doc, &SUBHEADING_SELECTOR).unwrap_or_default(),
        image_link: select_image_src(doc, &HERO_SELECTOR).unwrap_or_default(),
        serves: select_text(doc, &SERVES_SELECTOR)
            .map(|t| tail_tokens(&t, 2))
            .unwrap_or_default(),
        time: select_text(doc, &TIME_SELECTOR)
            .map(|t| tail_tokens(&t, 2))
            .unwrap_or_default(),
        intro: select_text(doc, &INTRO_SELECTOR).unwrap_or_default(),
        nutrition: extract_nutrition(doc),
        ingredients,
        steps: select_list(doc, &STEP_SELECTOR),
    };

    debug!(
        url,
        title = %record.title,
        nutrients = record.nutrition.found(),
        ingredients = record.ingredients.len(),
        steps = record.steps.len(),
        "extracted recipe"
    );
    record
}

/// Parse raw HTML and extract a recipe record.
pub fn extract_recipe_html(html: &str, url: &str) -> RecipeRecord {
    extract_recipe(&Html::parse_document(html), url)
}
