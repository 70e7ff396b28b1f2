// src/sitemap.rs
// =============================================================================
// Renders a list of URLs as a sitemap.xml document (or a JSON report).
//
// Output shape (two-space indent, no trailing newline):
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com</loc>
//     </url>
//   </urlset>
// =============================================================================

use crate::error::CrawlError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Builds the sitemap document for `urls`, one <url> block each, in order
pub fn serialize<S: AsRef<str>>(urls: &[S]) -> Result<String, CrawlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NAMESPACE)])),
    )?;

    for url in urls {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        write(&mut writer, Event::Start(BytesStart::new("loc")))?;
        write(&mut writer, Event::Text(BytesText::new(url.as_ref())))?;
        write(&mut writer, Event::End(BytesEnd::new("loc")))?;
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| CrawlError::Encoding(e.to_string()))
}

/// JSON form of a crawl result, for --json
#[derive(Debug, Serialize)]
pub struct SitemapReport<'a> {
    pub seed: &'a str,
    pub count: usize,
    pub urls: &'a [String],
}

pub fn to_json<'a>(seed: &'a str, urls: &'a [String]) -> Result<String, CrawlError> {
    let report = SitemapReport {
        seed,
        count: urls.len(),
        urls,
    };
    serde_json::to_string_pretty(&report).map_err(|e| CrawlError::Encoding(e.to_string()))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), CrawlError> {
    writer
        .write_event(event)
        .map_err(|e| CrawlError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_two_urls() {
        let urls = vec![
            "http://www.example.com/foo1.html",
            "http://www.example.com/foo2.html",
        ];

        let got = serialize(&urls).unwrap();

        let want = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>http://www.example.com/foo1.html</loc>
  </url>
  <url>
    <loc>http://www.example.com/foo2.html</loc>
  </url>
</urlset>"#;
        assert_eq!(got, want);
    }

    #[test]
    fn test_serialize_empty_list() {
        let urls: Vec<String> = Vec::new();

        let got = serialize(&urls).unwrap();

        assert_eq!(
            got,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
             </urlset>"
        );
    }

    #[test]
    fn test_serialize_escapes_markup() {
        let got = serialize(&["https://example.com/search?a=1&b=2"]).unwrap();
        assert!(got.contains("<loc>https://example.com/search?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_to_json_report() {
        let urls = vec!["https://example.com".to_string(), "https://example.com/a".to_string()];

        let json = to_json("https://example.com/", &urls).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(value["seed"], "https://example.com/");
        assert_eq!(value["count"], 2);
        assert_eq!(
            value["urls"],
            serde_json::json!(["https://example.com", "https://example.com/a"])
        );
    }
}
