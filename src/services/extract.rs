use scraper::{Html, Selector};

use crate::services::ServiceError;

/// Rows considered from a search-results page.
pub const MAX_LINKS: usize = 5;

/// Extraction strategy for detail links on a mirror's search-results page.
/// The site's markup is unversioned, so the rule that reads it is kept
/// behind a seam the caller never looks through.
pub trait DetailLinkExtractor: Send + Sync {
    fn extract(&self, html: &str, base_url: &str) -> Result<Vec<String>, ServiceError>;
}

/// Production layout: a `table.table-striped` whose body rows carry the
/// detail anchor in their last cell.
pub struct StripedTableExtractor;

impl DetailLinkExtractor for StripedTableExtractor {
    fn extract(&self, html: &str, base_url: &str) -> Result<Vec<String>, ServiceError> {
        let row_selector = parse_selector("table.table-striped tbody tr")?;
        let anchor_selector = parse_selector("td:last-child a")?;

        let document = Html::parse_document(html);
        let base = base_url.trim_end_matches('/');

        let mut links = Vec::new();
        for row in document.select(&row_selector).take(MAX_LINKS) {
            // Rows without a detail anchor are skipped, not an error.
            if let Some(href) = row
                .select(&anchor_selector)
                .next()
                .and_then(|anchor| anchor.value().attr("href"))
            {
                links.push(format!("{}/{}", base, href));
            }
        }

        Ok(links)
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ServiceError> {
    Selector::parse(selector).map_err(|e| ServiceError::Selector(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://libgen.gs";

    fn page_with_rows(rows: &str) -> String {
        format!(
            "<html><body><table class=\"table-striped\"><tbody>{}</tbody></table></body></html>",
            rows
        )
    }

    fn row_with_link(id: u32) -> String {
        format!(
            "<tr><td>Title {id}</td><td>Author</td><td><a href=\"book/index.php?id={id}\">link</a></td></tr>"
        )
    }

    #[test]
    fn extracts_links_in_row_order() {
        let html = page_with_rows(&format!("{}{}", row_with_link(1), row_with_link(2)));
        let links = StripedTableExtractor.extract(&html, BASE).unwrap();

        assert_eq!(
            links,
            vec![
                "https://libgen.gs/book/index.php?id=1",
                "https://libgen.gs/book/index.php?id=2",
            ]
        );
    }

    #[test]
    fn caps_at_five_rows() {
        let rows: String = (1..=8).map(row_with_link).collect();
        let links = StripedTableExtractor.extract(&page_with_rows(&rows), BASE).unwrap();

        assert_eq!(links.len(), MAX_LINKS);
        assert_eq!(links[4], "https://libgen.gs/book/index.php?id=5");
    }

    #[test]
    fn skips_rows_without_anchor() {
        let rows = format!(
            "{}<tr><td>Title</td><td>Author</td><td>no link here</td></tr>{}",
            row_with_link(1),
            row_with_link(3)
        );
        let links = StripedTableExtractor.extract(&page_with_rows(&rows), BASE).unwrap();

        assert_eq!(
            links,
            vec![
                "https://libgen.gs/book/index.php?id=1",
                "https://libgen.gs/book/index.php?id=3",
            ]
        );
    }

    #[test]
    fn reads_anchor_from_last_cell_only() {
        let rows = "<tr>\
            <td><a href=\"cover.php?id=9\">cover</a></td>\
            <td><a href=\"book/index.php?id=9\">detail</a></td>\
            </tr>";
        let links = StripedTableExtractor.extract(&page_with_rows(rows), BASE).unwrap();

        assert_eq!(links, vec!["https://libgen.gs/book/index.php?id=9"]);
    }

    #[test]
    fn missing_table_is_empty_success() {
        let html = "<html><body><p>Temporarily unavailable</p></body></html>";
        let links = StripedTableExtractor.extract(html, BASE).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn other_tables_are_ignored() {
        let html = format!(
            "<html><body><table class=\"catalog\"><tbody>{}</tbody></table></body></html>",
            row_with_link(1)
        );
        let links = StripedTableExtractor.extract(&html, BASE).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn trailing_slash_on_base_is_not_doubled() {
        let html = page_with_rows(&row_with_link(1));
        let links = StripedTableExtractor.extract(&html, "https://libgen.gs/").unwrap();
        assert_eq!(links[0], "https://libgen.gs/book/index.php?id=1");
    }
}
