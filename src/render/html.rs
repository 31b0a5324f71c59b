pub use handlebars::html_escape as escape;

/// An optional field counts as absent when missing or blank.
pub fn present(field: Option<&String>) -> Option<&str> {
    field.map(|s| s.trim()).filter(|s| !s.is_empty())
}

pub fn position_class(hint: Option<&String>) -> String {
    present(hint).map_or_else(String::new, |hint| {
        format!("object-position-{}", escape(hint))
    })
}
