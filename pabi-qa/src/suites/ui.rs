//! UI suite: page title and product-view checks.
//!
//! The original flows drove a real browser; here they are expressed at
//! the HTTP level — fetch the page, parse the rendered HTML, follow the
//! product link — since browser automation itself is out of scope.

use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::errors::HarnessError;

use super::config::SuiteConfig;
use super::http::PageFetcher;

fn parse_selector(selector: &str) -> Result<Selector, HarnessError> {
    Selector::parse(selector).map_err(|e| HarnessError::selector(selector, format!("{e:?}")))
}

/// Extracts the page title, if present.
pub fn page_title(html: &str) -> Result<Option<String>, HarnessError> {
    let document = Html::parse_document(html);
    let selector = parse_selector("title")?;

    Ok(document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string()))
}

/// Finds the href of the first link whose text carries the price marker.
///
/// Product cards on the landing page are anchors wrapping the current
/// price label, so this is the HTTP-level equivalent of clicking the
/// first listing.
pub fn find_product_href(html: &str, price_marker: &str) -> Result<Option<String>, HarnessError> {
    let document = Html::parse_document(html);
    let selector = parse_selector("a[href]")?;

    for element in document.select(&selector) {
        let text: String = element.text().collect();
        if text.contains(price_marker) {
            if let Some(href) = element.value().attr("href") {
                return Ok(Some(href.to_string()));
            }
        }
    }

    Ok(None)
}

/// Resolves a possibly-relative href against a base URL.
#[must_use]
pub fn resolve_url(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    if let Some(rest_start) = base.find("://").map(|i| i + 3) {
        if href.starts_with('/') {
            let rest = &base[rest_start..];
            let origin_end = rest.find('/').map_or(base.len(), |i| rest_start + i);
            return format!("{}{}", &base[..origin_end], href);
        }
    }

    let trimmed = base.trim_end_matches('/');
    format!("{trimmed}/{href}")
}

/// Runs the UI checks: title assertion, then product-click navigation.
pub async fn run_ui_checks(
    fetcher: &PageFetcher,
    config: &SuiteConfig,
    verbose: bool,
) -> Result<(), HarnessError> {
    let landing = fetcher.fetch(&config.base_url).await?;

    let title = page_title(&landing.text)?.unwrap_or_default();
    if verbose {
        info!(title = %title, "Landing page title");
    } else {
        debug!(title = %title, "Landing page title");
    }
    if !title.contains(&config.title_token) {
        return Err(HarnessError::assertion(
            "browser_title",
            format!("expected '{}' in title, got '{title}'", config.title_token),
        ));
    }

    let href = find_product_href(&landing.text, &config.price_marker)?.ok_or_else(|| {
        HarnessError::assertion(
            "product_link",
            format!("no listing carrying '{}' found", config.price_marker),
        )
    })?;

    let product_url = resolve_url(&config.base_url, &href);
    let detail = fetcher.fetch(&product_url).await?;
    if verbose {
        info!(url = %detail.final_url, "Opened product page");
    } else {
        debug!(url = %detail.final_url, "Opened product page");
    }

    // Navigation counts if we left the landing page or the detail page
    // shows the bid label.
    if detail.final_url == config.base_url && !detail.text.contains(&config.bid_marker) {
        return Err(HarnessError::assertion(
            "product_view",
            format!(
                "still on '{}' and no '{}' marker present",
                detail.final_url, config.bid_marker
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LANDING: &str = r#"
        <html>
          <head><title>Pa-Bi Auction</title></head>
          <body>
            <a href="/product/42">
              <div class="card">
                <span>빈티지 카메라</span>
                <span>현재가 15,000원</span>
              </div>
            </a>
            <a href="/about">About</a>
          </body>
        </html>
    "#;

    #[test]
    fn test_page_title() {
        let title = page_title(LANDING).unwrap();
        assert_eq!(title, Some("Pa-Bi Auction".to_string()));
    }

    #[test]
    fn test_page_title_missing() {
        let title = page_title("<html><body>no head</body></html>").unwrap();
        assert_eq!(title, None);
    }

    #[test]
    fn test_find_product_href() {
        let href = find_product_href(LANDING, "현재가").unwrap();
        assert_eq!(href, Some("/product/42".to_string()));
    }

    #[test]
    fn test_find_product_href_no_marker() {
        let href = find_product_href(LANDING, "없는표시").unwrap();
        assert_eq!(href, None);
    }

    #[test]
    fn test_find_product_href_skips_unrelated_links() {
        let html = r#"<a href="/about">About 현재</a><a href="/p/1">현재가 100원</a>"#;
        let href = find_product_href(html, "현재가").unwrap();
        assert_eq!(href, Some("/p/1".to_string()));
    }

    #[test]
    fn test_resolve_url_absolute() {
        assert_eq!(
            resolve_url("https://syeob.lovable.app/", "https://other.app/p/1"),
            "https://other.app/p/1"
        );
    }

    #[test]
    fn test_resolve_url_rooted() {
        assert_eq!(
            resolve_url("https://syeob.lovable.app/", "/product/42"),
            "https://syeob.lovable.app/product/42"
        );
        assert_eq!(
            resolve_url("https://syeob.lovable.app/listings/", "/product/42"),
            "https://syeob.lovable.app/product/42"
        );
    }

    #[test]
    fn test_resolve_url_relative() {
        assert_eq!(
            resolve_url("https://syeob.lovable.app/", "product/42"),
            "https://syeob.lovable.app/product/42"
        );
    }
}
