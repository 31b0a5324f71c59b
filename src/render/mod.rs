//! Pure mappings from collections to markup fragments.

pub mod colors;
pub mod html;
pub mod listings;
pub mod publications;
pub mod systems;
pub mod team;

/// Shown in place of a listing when the collection is empty.
pub const NO_DATA: &str = r#"<p class="text-center text-slate-500 dark:text-slate-400 col-span-full">目前沒有資料。</p>"#;
