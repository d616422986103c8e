//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Selector for anchor elements with hrefs.
pub static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("a[href]"));

/// Selector for JSON-LD script tags.
pub static JSONLD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| sel("script[type='application/ld+json']"));

/// Selector for `<title>` tags.
pub static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("title"));

/// Selector for `<img>` elements.
pub static IMG_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("img"));

/* ---------- root listing ---------- */

/// Section on the root page listing every ingredient category.
pub static CATEGORY_SECTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| sel("section#recipe-cat-listing"));

/// One category tile inside the category section.
pub static CATEGORY_BLOCK_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("div.recipe-block"));

/* ---------- category listing ---------- */

/// Section on a category page that embeds the recipe ItemList.
pub static RECIPE_SECTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| sel("section#recipe-subcat-listing"));

/* ---------- recipe page ---------- */

pub static SUBHEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("p.subheading"));

pub static HERO_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("div.hero-wrapper"));

pub static SERVES_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("div.recipe-detail.serves"));

pub static TIME_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("div.recipe-detail.time"));

pub static INTRO_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("div.recipe-intro"));

/// Nutrition list items; each carries a `span.title` name and a `span.top` value.
pub static NUTRITION_ITEM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| sel(".nutrition-expanded li"));

pub static NUTRITION_NAME_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("span.title"));

pub static NUTRITION_VALUE_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("span.top"));

pub static INGREDIENT_SELECTOR: Lazy<Selector> = Lazy::new(|| sel("ul.ingred-list li"));

pub static STEP_SELECTOR: Lazy<Selector> =
    Lazy::new(|| sel(".recipe-instructions .recipeSteps li"));
