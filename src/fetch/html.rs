// src/fetch/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Unlike a link checker, the crawler wants the raw href exactly as written
// in the page. Resolution and domain filtering happen in crawl::normalize.
// =============================================================================

use crate::error::CrawlError;
use scraper::{Html, Selector};

/// A hyperlink found on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The href attribute, trimmed
    pub href: String,
    /// Visible text of the <a> element with whitespace collapsed
    pub text: String,
}

/// Turns page content into the links it contains
pub trait LinkExtractor {
    fn extract(&self, content: &[u8]) -> Result<Vec<Link>, CrawlError>;
}

/// Extracts <a href> links with scraper
#[derive(Debug)]
pub struct HtmlLinkExtractor {
    selector: Selector,
}

impl HtmlLinkExtractor {
    pub fn new() -> Result<Self, CrawlError> {
        let selector = Selector::parse("a[href]")
            .map_err(|e| CrawlError::Parse(format!("invalid link selector: {}", e)))?;
        Ok(HtmlLinkExtractor { selector })
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    fn extract(&self, content: &[u8]) -> Result<Vec<Link>, CrawlError> {
        let html = std::str::from_utf8(content)
            .map_err(|e| CrawlError::Parse(format!("page is not valid UTF-8: {}", e)))?;

        let document = Html::parse_document(html);

        let links = document
            .select(&self.selector)
            .filter_map(|element| {
                let href = element.value().attr("href")?;
                let text = element.text().collect::<Vec<_>>().join(" ");
                Some(Link {
                    href: href.trim().to_string(),
                    text: text.split_whitespace().collect::<Vec<_>>().join(" "),
                })
            })
            .collect();

        Ok(links)
    }
}
