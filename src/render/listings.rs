//! Flat listings for projects, news and activities.

use super::NO_DATA;
use super::colors::{ACTIVITIES, NEWS, PROJECTS};
use super::html::{escape, present};
use crate::model::{ActivityItem, NewsItem, Project};
use std::fmt::Write;

/// Concatenate the cards in order, or the placeholder when there are none.
pub fn listing<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    card: impl Fn(&T) -> String,
) -> String {
    let html: String = items.into_iter().map(card).collect();
    if html.is_empty() {
        String::from(NO_DATA)
    } else {
        html
    }
}

pub fn project(project: &Project) -> String {
    let mut details = String::new();
    if let Some(agency) = present(project.agency.as_ref()) {
        let _ = write!(
            details,
            r#"<p><i class="fas fa-landmark fa-fw mr-2"></i>{}</p>"#,
            escape(agency)
        );
    }
    if let Some(duration) = present(project.duration.as_ref()) {
        let _ = write!(
            details,
            r#"<p><i class="fas fa-calendar-alt fa-fw mr-2"></i>{}</p>"#,
            escape(duration)
        );
    }
    format!(
        r#"<div class="project-item bg-white dark:bg-slate-800 p-6 rounded-lg shadow-md">{}<h3 class="text-lg font-semibold mt-2">{}</h3><div class="mt-2 text-sm text-slate-600 dark:text-slate-400">{details}</div></div>"#,
        PROJECTS.badge(&project.category),
        escape(&project.title)
    )
}

fn dated_card(
    class: &str,
    date: &str,
    badge: String,
    title: &str,
    text: Option<&String>,
    link: Option<&String>,
) -> String {
    let title = escape(title);
    let title = match present(link) {
        Some(link) => format!(
            r#"<a href="{}" target="_blank" class="hover:underline">{title}</a>"#,
            escape(link)
        ),
        None => title,
    };
    let text = present(text).map_or_else(String::new, |text| {
        format!(
            r#"<p class="mt-2 text-slate-600 dark:text-slate-300">{}</p>"#,
            escape(text)
        )
    });
    format!(
        r#"<article class="{class} bg-white dark:bg-slate-800 p-6 rounded-lg shadow-md"><div class="flex items-center gap-3 text-sm"><time class="text-slate-500">{}</time>{badge}</div><h3 class="text-lg font-semibold mt-2">{title}</h3>{text}</article>"#,
        escape(date)
    )
}

pub fn news(item: &NewsItem) -> String {
    dated_card(
        "news-item",
        &item.date,
        NEWS.badge(&item.category),
        &item.title,
        item.summary.as_ref(),
        item.link.as_ref(),
    )
}

pub fn activity(item: &ActivityItem) -> String {
    dated_card(
        "activity-item",
        &item.date,
        ACTIVITIES.badge(&item.category),
        &item.title,
        item.description.as_ref(),
        item.link.as_ref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_placeholder_idempotent() {
        let first = listing(Vec::<&NewsItem>::new(), news);
        let second = listing(Vec::<&NewsItem>::new(), news);
        assert_eq!(first, NO_DATA);
        assert_eq!(first, second);
    }

    #[test]
    fn test_news_optional_link() {
        let item = NewsItem {
            date: String::from("2024-03-01"),
            category: String::from("榮譽"),
            title: String::from("Award"),
            summary: None,
            link: None,
        };
        let html = news(&item);
        assert!(!html.contains("<a "));
        assert!(!html.contains("<p"));
        assert!(html.contains("bg-yellow-100"));
        let item = NewsItem {
            link: Some(String::from("https://lab.org/n/1")),
            summary: Some(String::from("We won")),
            ..item
        };
        let html = news(&item);
        assert!(html.contains(r#"href="https://lab.org/n/1""#));
        assert!(html.contains("We won"));
    }

    #[test]
    fn test_project_fields() {
        let project = Project {
            title: String::from("Tutor"),
            category: String::from("其他"),
            agency: Some(String::from("NSTC")),
            duration: None,
        };
        let html = super::project(&project);
        assert!(html.contains("NSTC"));
        assert!(!html.contains("fa-calendar-alt"));
        assert!(html.contains("bg-gray-100"));
    }

    #[test]
    fn test_activity_order() {
        let items = [
            ActivityItem {
                title: String::from("One"),
                ..Default::default()
            },
            ActivityItem {
                title: String::from("Two"),
                ..Default::default()
            },
        ];
        let html = listing(&items, activity);
        assert!(html.find("One").unwrap() < html.find("Two").unwrap());
    }
}
