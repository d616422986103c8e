use scraper::{ElementRef, Html, Selector};

use super::types::{Nutrient, Nutrition};
use crate::selectors::{
    IMG_SELECTOR, NUTRITION_ITEM_SELECTOR, NUTRITION_NAME_SELECTOR, NUTRITION_VALUE_SELECTOR,
};

/// Text content of an element with whitespace runs collapsed and ends trimmed.
pub(super) fn element_text(el: &ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text content of an element with only the ends trimmed. Inner line breaks survive.
pub(super) fn element_text_trimmed(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first element matching `selector`, if the page has one.
pub(super) fn select_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector).next().map(|el| element_text_trimmed(&el))
}

/// `src` of the first `<img>` inside the first element matching `container`.
pub(super) fn select_image_src(doc: &Html, container: &Selector) -> Option<String> {
    let wrapper = doc.select(container).next()?;
    let img = wrapper.select(&IMG_SELECTOR).next()?;
    img.value().attr("src").map(|s| s.trim().to_string())
}

/// Text of every element matching `selector`, in document order, empties dropped.
pub(super) fn select_list(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector)
        .map(|el| element_text(&el))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Keep the last `n` whitespace-separated tokens, joined by single spaces.
///
/// Detail blocks read like "Serves 4" or "Cooks In 1 hour 10 minutes"; the
/// value sits at the end of the label. Tied to the current page wording.
pub(super) fn tail_tokens(text: &str, n: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let start = tokens.len().saturating_sub(n);
    tokens[start..].join(" ")
}

/// Collect nutrition name/value pairs. Every nutrient starts empty; items
/// missing a name or value span, or naming an unknown nutrient, are ignored.
pub(super) fn extract_nutrition(doc: &Html) -> Nutrition {
    let mut nutrition = Nutrition::default();

    for item in doc.select(&NUTRITION_ITEM_SELECTOR) {
        let name = item
            .select(&NUTRITION_NAME_SELECTOR)
            .next()
            .map(|el| element_text(&el));
        let value = item
            .select(&NUTRITION_VALUE_SELECTOR)
            .next()
            .map(|el| element_text(&el));

        if let (Some(name), Some(value)) = (name, value) {
            if let Some(nutrient) = Nutrient::from_label(&name) {
                nutrition.set(nutrient, value);
            }
        }
    }

    nutrition
}
