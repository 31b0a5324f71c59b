use super::colors::PUBLICATIONS;
use super::html::{escape, present};
use crate::model::Publication;

fn row(item: &Publication) -> String {
    let title = escape(&item.title);
    let title = match present(item.link.as_ref()) {
        Some(link) => format!(
            r#"<a href="{}" target="_blank" class="text-blue-600 hover:underline dark:text-blue-400">{title}</a>"#,
            escape(link)
        ),
        None => title,
    };
    let source = if item.source.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="text-sm text-slate-500 dark:text-slate-400 mt-1 italic">{}</p>"#,
            escape(&item.source)
        )
    };
    let authors = escape(&item.authors);
    let mobile_authors = if authors.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="text-sm text-slate-600 dark:text-slate-400 mt-2 md:hidden"><strong>作者:</strong> {authors}</p>"#)
    };
    let year = item.year.map(|y| y.to_string()).unwrap_or_default();
    format!(
        r#"<tr class="publication-item border-t border-slate-200 dark:border-slate-700"><td class="p-4 font-medium">{title}{source}{mobile_authors}</td><td class="p-4 text-slate-600 dark:text-slate-400 hidden md:table-cell">{authors}</td><td class="p-4 text-center text-slate-600 dark:text-slate-400">{year}</td><td class="p-4 text-center">{}</td></tr>"#,
        PUBLICATIONS.badge(&item.category)
    )
}

/// Table body rows, in the order given.
pub fn rows<'a>(items: impl IntoIterator<Item = &'a Publication>) -> String {
    items.into_iter().map(row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Year;

    fn publication(title: &str, category: &str) -> Publication {
        Publication {
            title: title.to_owned(),
            authors: String::from("Lin, Chen"),
            source: String::from("Journal"),
            year: Some(Year(2023)),
            category: category.to_owned(),
            link: Some(String::from("https://doi.org/x")),
        }
    }

    #[test]
    fn test_row() {
        let html = rows([&publication("Paper", "論文")]);
        assert!(html.contains(r#"<a href="https://doi.org/x""#));
        assert!(html.contains(">2023<"));
        assert!(html.contains("bg-purple-100"));
        assert_eq!(html.matches("<tr").count(), 1);
    }

    #[test]
    fn test_unknown_category() {
        let html = rows([&publication("Paper", "海報")]);
        assert!(html.contains("bg-gray-100"));
        assert!(html.contains("海報"));
    }

    #[test]
    fn test_missing_link_and_source() {
        let mut p = publication("Paper", "論文");
        p.link = None;
        p.source = String::new();
        p.year = None;
        let html = rows([&p]);
        assert!(!html.contains("<a "));
        assert!(!html.contains("italic"));
        assert!(!html.contains("undefined"));
        assert!(!html.contains("None"));
    }

    #[test]
    fn test_order_preserved() {
        let a = publication("First", "論文");
        let b = publication("Second", "獎項");
        let html = rows([&a, &b]);
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
    }
}
