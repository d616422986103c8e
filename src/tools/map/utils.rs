use scraper::ElementRef;
use serde_json::Value;
use url::Url;

use crate::selectors::{JSONLD_SELECTOR, LINK_SELECTOR};

/// Resolve `href` against `base`, keeping only http(s) results.
pub(super) fn resolve_link(href: &str, base: Option<&Url>) -> Option<String> {
    let href = clean_href(href);
    if href.is_empty() {
        return None;
    }

    let url = match Url::parse(&href) {
        Ok(u) => u,
        Err(url::ParseError::RelativeUrlWithoutBase) => base?.join(&href).ok()?,
        Err(_) => return None,
    };

    is_valid_scheme(&url).then(|| url.to_string())
}

/// Strip quotes and whitespace left behind by sloppy markup.
fn clean_href(href: &str) -> String {
    href.replace("&quot;", "")
        .replace("&#34;", "")
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim()
        .to_string()
}

fn is_valid_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// `href` of the first link inside `block`.
pub(super) fn first_href<'a>(block: &ElementRef<'a>) -> Option<&'a str> {
    block
        .select(&LINK_SELECTOR)
        .next()
        .and_then(|a| a.value().attr("href"))
}

/// Outcome of looking for an ItemList inside a section.
#[derive(Debug)]
pub(super) enum ItemListLookup {
    Found(Vec<Value>),
    NoScript,
    Malformed(String),
    NoItemList,
}

/// Find the JSON-LD script in `section` and return its `itemListElement` entries.
pub(super) fn find_itemlist(section: &ElementRef) -> ItemListLookup {
    let scripts: Vec<ElementRef> = section.select(&JSONLD_SELECTOR).collect();
    if scripts.is_empty() {
        return ItemListLookup::NoScript;
    }

    let mut malformed = None;
    for script in scripts {
        let raw = script.text().collect::<String>();
        match serde_json::from_str::<Value>(raw.trim()) {
            Ok(value) => {
                if let Some(items) = collect_itemlist(&value) {
                    return ItemListLookup::Found(items);
                }
            }
            Err(e) => malformed = Some(e.to_string()),
        }
    }

    match malformed {
        Some(e) => ItemListLookup::Malformed(e),
        None => ItemListLookup::NoItemList,
    }
}

/// First `itemListElement` array found, searching arrays and `@graph` wrappers.
fn collect_itemlist(value: &Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(arr) => arr.iter().find_map(collect_itemlist),
        Value::Object(obj) => {
            if let Some(Value::Array(items)) = obj.get("itemListElement") {
                return Some(items.clone());
            }
            obj.get("@graph").and_then(collect_itemlist)
        }
        _ => None,
    }
}

/// `url` of one ItemList entry; entries may nest it under `item`.
pub(super) fn item_url(item: &Value) -> Option<&str> {
    item.get("url")
        .and_then(Value::as_str)
        .or_else(|| item.get("item").and_then(|i| i.get("url")).and_then(Value::as_str))
}
