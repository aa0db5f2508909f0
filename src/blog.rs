use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use dashmap::DashMap;
#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{html, Options, Parser};
#[cfg(any(feature = "ssr", feature = "rss"))]
use rust_embed::Embed;
#[cfg(any(feature = "ssr", feature = "rss"))]
use std::sync::LazyLock;

/// Parsed entries keyed by file name.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub static GLOBAL_ENTRY_CACHE: LazyLock<DashMap<String, BlogEntry>> = LazyLock::new(DashMap::new);

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Embed)]
#[folder = "posts"]
pub struct Assets;

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    date: DateTime<Utc>,
    image: String,
    url: String,
}

/// A teaser for an article hosted elsewhere. The markdown body of the entry
/// file is the excerpt, rendered to HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogEntry {
    pub name: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub image: String,
    pub url: String,
    pub excerpt: String,
}

impl BlogEntry {
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlogError {
    #[error("blog entry not found: {0}")]
    NotFound(String),
    #[error("blog entry {0} is not valid UTF-8")]
    Encoding(String),
    #[error("couldn't parse front matter of blog entry {0}")]
    FrontMatter(String),
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn parse_entry(file_name: &str, content: &str) -> Result<BlogEntry, BlogError> {
    let name = file_name.strip_suffix(".md").unwrap_or(file_name).to_string();
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| BlogError::FrontMatter(name.clone()))?;

    let mut excerpt = String::new();
    html::push_html(
        &mut excerpt,
        Parser::new_ext(parsed.content.trim(), Options::empty()),
    );

    Ok(BlogEntry {
        name,
        title: parsed.data.title,
        date: parsed.data.date,
        image: parsed.data.image,
        url: parsed.data.url,
        excerpt,
    })
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn load_entry(file_name: &str) -> Result<BlogEntry, BlogError> {
    if let Some(entry) = GLOBAL_ENTRY_CACHE.get(file_name) {
        return Ok(entry.clone());
    }
    let file = Assets::get(file_name).ok_or_else(|| BlogError::NotFound(file_name.to_string()))?;
    let content =
        std::str::from_utf8(&file.data).map_err(|_| BlogError::Encoding(file_name.to_string()))?;
    let entry = parse_entry(file_name, content)?;
    GLOBAL_ENTRY_CACHE.insert(file_name.to_string(), entry.clone());
    Ok(entry)
}

/// All embedded entries, newest first. Entries that fail to parse are logged
/// and left out.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn get_entries() -> Vec<BlogEntry> {
    let mut entries = Assets::iter()
        .filter_map(|file| match load_entry(&file) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping {e}");
                None
            }
        })
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_date() {
        let entry = BlogEntry {
            name: "x".to_string(),
            title: "x".to_string(),
            date: Utc.with_ymd_and_hms(2023, 6, 2, 0, 0, 0).unwrap(),
            image: String::new(),
            url: String::new(),
            excerpt: String::new(),
        };
        assert_eq!(entry.display_date(), "June 2, 2023");
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_parse_entry() {
        let content = r#"---
title: "Hello"
date: 2024-01-05T00:00:00Z
image: /images/hello.png
url: https://example.com/hello
---
Some **bold** teaser.
"#;
        let entry = parse_entry("hello.md", content).unwrap();
        assert_eq!(entry.name, "hello");
        assert_eq!(entry.title, "Hello");
        assert_eq!(entry.url, "https://example.com/hello");
        assert_eq!(entry.excerpt, "<p>Some <strong>bold</strong> teaser.</p>\n");
        assert_eq!(entry.display_date(), "January 5, 2024");
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_parse_entry_without_front_matter() {
        let err = parse_entry("bare.md", "just text").unwrap_err();
        assert_eq!(err, BlogError::FrontMatter("bare".to_string()));
    }

    #[cfg(any(feature = "ssr", feature = "rss"))]
    #[test]
    fn test_embedded_entries_newest_first() {
        let entries = get_entries();
        let names = entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>();
        assert_eq!(
            names,
            ["aws-bedrock-guide", "building-wellbot", "mastering-langchain"]
        );
        assert!(GLOBAL_ENTRY_CACHE.contains_key("building-wellbot.md"));
        assert_eq!(load_entry("missing.md"), Err(BlogError::NotFound("missing.md".to_string())));
    }
}
