use super::html::{escape, present};
use crate::model::{SystemCard, SystemSection};

fn card(card: &SystemCard) -> String {
    let features: String = card
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", escape(f)))
        .collect();
    let features = if features.is_empty() {
        features
    } else {
        format!(r#"<ul class="mt-4 list-disc list-inside text-sm space-y-1">{features}</ul>"#)
    };
    let link = present(card.link.as_ref()).map_or_else(String::new, |link| {
        format!(
            r#"<a href="{}" target="_blank" class="mt-auto pt-4 text-blue-600 hover:underline">前往系統</a>"#,
            escape(link)
        )
    });
    format!(
        r#"<div class="system-card flex flex-col bg-white dark:bg-slate-800 p-6 rounded-lg shadow-md"><h3 class="text-xl font-semibold">{}</h3><p class="mt-2 text-slate-600 dark:text-slate-300">{}</p>{features}{link}</div>"#,
        escape(&card.title),
        escape(&card.description)
    )
}

/// Render every section that still has cards; sections left without any
/// visible card are omitted.
pub fn sections<'a>(
    sections: impl IntoIterator<Item = (&'a SystemSection, Vec<&'a SystemCard>)>,
) -> String {
    sections
        .into_iter()
        .filter(|(_, cards)| !cards.is_empty())
        .map(|(section, cards)| {
            format!(
                r#"<section id="{}"><h2 class="text-2xl font-bold border-l-4 border-blue-500 pl-4 mb-6">{}</h2><div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">{}</div></section>"#,
                escape(&section.id),
                escape(&section.title),
                cards.into_iter().map(card).collect::<String>()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, titles: &[&str]) -> SystemSection {
        SystemSection {
            id: id.to_owned(),
            title: id.to_uppercase(),
            systems: titles
                .iter()
                .map(|t| SystemCard {
                    title: (*t).to_owned(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_sections_omitted() {
        let learning = section("learning-systems", &["Quiz"]);
        let tutor = section("tutor-systems", &["Bot"]);
        let html = sections([
            (&learning, learning.systems.iter().collect::<Vec<_>>()),
            (&tutor, Vec::<&SystemCard>::new()),
        ]);
        assert!(html.contains(r#"id="learning-systems""#));
        assert!(!html.contains("tutor-systems"));
        assert!(!html.contains("<ul"));
        assert!(!html.contains("前往系統"));
    }
}
