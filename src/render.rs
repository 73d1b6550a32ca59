use crate::collect::NewsItem;

/// Render the selected headlines as a markdown bullet list.
///
/// An empty selection produces a fixed placeholder line. There is no trailing
/// newline in either case.
pub fn to_markdown(items: &[NewsItem]) -> String {
    if items.is_empty() {
        return "No feed items available today.".to_string();
    }

    let mut lines = vec!["Recent AI headlines:".to_string()];
    for item in items {
        let title = item.title.replace('\n', " ").trim().to_string();
        lines.push(format!("- {} — {} — {}", title, item.source, item.link));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(title: &str, source: &str, link: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            link: link.to_string(),
            source: source.to_string(),
            published: Utc::now(),
        }
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        assert_eq!(to_markdown(&[]), "No feed items available today.");
    }

    #[test]
    fn test_header_and_one_line_per_item() {
        let items = vec![
            item("A", "Feed One", "https://example.com/a"),
            item("B", "Feed Two", "https://example.com/b"),
        ];
        let md = to_markdown(&items);
        assert_eq!(
            md,
            "Recent AI headlines:\n\
             - A — Feed One — https://example.com/a\n\
             - B — Feed Two — https://example.com/b"
        );
    }

    #[test]
    fn test_items_render_in_input_order() {
        let items = vec![
            item("second", "F", "l2"),
            item("first", "F", "l1"),
        ];
        let md = to_markdown(&items);
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("- second"));
        assert!(lines[2].starts_with("- first"));
    }

    #[test]
    fn test_newlines_in_title_become_spaces() {
        let items = vec![item("Line1\nLine2", "Feed", "https://example.com")];
        let md = to_markdown(&items);
        assert!(md.contains("- Line1 Line2 — Feed — https://example.com"));
    }

    #[test]
    fn test_no_trailing_newline() {
        let items = vec![item("A", "Feed", "link")];
        assert!(!to_markdown(&items).ends_with('\n'));
        assert!(!to_markdown(&[]).ends_with('\n'));
    }
}
