use super::html::escape;

/// Color used for any category missing from a lookup table.
pub const OTHER: &str = "gray";

pub struct ColorTable(&'static [(&'static str, &'static str)]);

impl ColorTable {
    pub fn color_of(&self, category: &str) -> &'static str {
        self.0
            .iter()
            .find_map(|&(c, color)| (c == category).then_some(color))
            .unwrap_or(OTHER)
    }

    pub fn badge(&self, category: &str) -> String {
        let color = self.color_of(category);
        format!(
            r#"<span class="bg-{color}-100 text-{color}-800 text-sm font-medium px-2.5 py-0.5 rounded dark:bg-{color}-900 dark:text-{color}-300">{}</span>"#,
            escape(category)
        )
    }
}

pub const PUBLICATIONS: ColorTable = ColorTable(&[
    ("論文", "purple"),
    ("專案", "blue"),
    ("產學合作", "green"),
    ("獎項", "yellow"),
]);

pub const PROJECTS: ColorTable = ColorTable(&[
    ("國科會", "blue"),
    ("教育部", "green"),
    ("產學合作", "yellow"),
]);

pub const NEWS: ColorTable = ColorTable(&[
    ("榮譽", "yellow"),
    ("活動", "blue"),
    ("公告", "red"),
    ("演講", "purple"),
]);

pub const ACTIVITIES: ColorTable = ColorTable(&[
    ("研討會", "blue"),
    ("工作坊", "green"),
    ("參訪", "purple"),
    ("競賽", "yellow"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(PUBLICATIONS.color_of("論文"), "purple");
        assert_eq!(PUBLICATIONS.color_of("獎項"), "yellow");
    }

    #[test]
    fn test_unknown_category_falls_back() {
        for table in [&PUBLICATIONS, &PROJECTS, &NEWS, &ACTIVITIES] {
            assert_eq!(table.color_of("???"), OTHER);
            assert_eq!(table.color_of(""), OTHER);
            assert!(table.badge("???").contains("bg-gray-100"));
        }
    }
}
