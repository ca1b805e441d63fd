//! Structured-data (JSON-LD) extraction.
//!
//! Walks every `<script type="application/ld+json">` block looking for the
//! first Schema.org object whose `@type` names an article, including objects
//! nested under `@graph`. Malformed JSON is skipped, never an error.

use dom_query::Document;
use serde_json::{Map, Value};

/// Recursion guard for pathologically nested structured data.
const MAX_DEPTH: usize = 64;

/// Article fields lifted out of structured data. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct StructuredArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub date_published: Option<String>,
    pub image: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// Find the first article-typed object across all JSON-LD scripts.
#[must_use]
pub fn extract_structured(doc: &Document) -> Option<StructuredArticle> {
    for script in doc.select(r#"script[type="application/ld+json"]"#).iter() {
        let raw = script.text();
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            continue;
        };

        if let Some(article) = find_article_object(&value, 0) {
            return Some(article_fields(article));
        }
    }

    None
}

/// Depth-first search for an object whose `@type` contains "article" or
/// "blogposting", case-insensitively. `@graph` arrays are plain arrays here,
/// so the same recursion covers them.
fn find_article_object(value: &Value, depth: usize) -> Option<&Map<String, Value>> {
    if depth >= MAX_DEPTH {
        return None;
    }

    match value {
        Value::Object(map) => {
            if map.get("@type").is_some_and(is_article_type) {
                return Some(map);
            }
            map.values().find_map(|nested| find_article_object(nested, depth + 1))
        }
        Value::Array(items) => {
            items.iter().find_map(|item| find_article_object(item, depth + 1))
        }
        _ => None,
    }
}

fn is_article_type(type_value: &Value) -> bool {
    fn matches(name: &str) -> bool {
        let lowered = name.to_lowercase();
        lowered.contains("article") || lowered.contains("blogposting")
    }

    match type_value {
        Value::String(name) => matches(name),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .any(matches),
        _ => false,
    }
}

fn article_fields(map: &Map<String, Value>) -> StructuredArticle {
    StructuredArticle {
        title: string_field(map, "headline").or_else(|| string_field(map, "name")),
        description: string_field(map, "description"),
        author: map.get("author").and_then(|value| name_of(value, 0)),
        date_published: string_field(map, "datePublished")
            .or_else(|| string_field(map, "dateCreated")),
        image: map.get("image").and_then(|value| url_of(value, 0)),
        keywords: map.get("keywords").and_then(keyword_list),
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Author values appear as a plain name, a `Person` object, or a sequence of
/// either. The first non-empty name wins.
fn name_of(value: &Value, depth: usize) -> Option<String> {
    if depth >= MAX_DEPTH {
        return None;
    }

    match value {
        Value::String(name) => {
            let name = name.trim();
            (!name.is_empty()).then(|| name.to_string())
        }
        Value::Object(map) => string_field(map, "name"),
        Value::Array(items) => items.iter().find_map(|item| name_of(item, depth + 1)),
        _ => None,
    }
}

/// Images appear as a URL string, an `ImageObject`, or a sequence of either.
fn url_of(value: &Value, depth: usize) -> Option<String> {
    if depth >= MAX_DEPTH {
        return None;
    }

    match value {
        Value::String(url) => {
            let url = url.trim();
            (!url.is_empty()).then(|| url.to_string())
        }
        Value::Object(map) => string_field(map, "url"),
        Value::Array(items) => items.iter().find_map(|item| url_of(item, depth + 1)),
        _ => None,
    }
}

fn keyword_list(value: &Value) -> Option<Vec<String>> {
    let keywords: Vec<String> = match value {
        Value::String(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    (!keywords.is_empty()).then_some(keywords)
}
