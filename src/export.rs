use crate::model::Publication;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

pub const MIME_TYPE: &str = "text/csv";
pub const FILENAME: &str = "kslab_publications.csv";
pub const LEGACY_FILENAME: &str = "ks_lab_publications.csv";

const BOM: &str = "\u{feff}";
const HEADER: [&str; 6] = ["標題", "作者", "年份", "類別", "出處", "連結"];

/// A file handed to the user as a download.
#[derive(Debug)]
pub struct Download {
    pub filename: &'static str,
    pub mime_type: &'static str,
    pub contents: Vec<u8>,
}

pub fn filename(legacy: bool) -> &'static str {
    if legacy { LEGACY_FILENAME } else { FILENAME }
}

/// Serialize publications, one quoted row each, after a BOM and a fixed
/// header row. Absent fields are written as empty strings.
pub fn publications<'a>(
    items: impl IntoIterator<Item = &'a Publication>,
    filename: &'static str,
) -> Result<Download, csv::Error> {
    let mut contents = Vec::from(BOM);
    contents.extend_from_slice(HEADER.join(",").as_bytes());
    contents.push(b'\n');
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(contents);
    let mut rows = 0;
    for item in items {
        let year = item.year.map(|y| y.to_string()).unwrap_or_default();
        writer.write_record([
            item.title.as_str(),
            item.authors.as_str(),
            year.as_str(),
            item.category.as_str(),
            item.source.as_str(),
            item.link.as_deref().unwrap_or_default(),
        ])?;
        rows += 1;
    }
    let contents = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    debug!(rows, filename, "publications exported");
    Ok(Download {
        filename,
        mime_type: MIME_TYPE,
        contents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Year;

    fn export(items: &[Publication]) -> String {
        let download = publications(items, FILENAME).unwrap();
        String::from_utf8(download.contents).unwrap()
    }

    #[test]
    fn test_layout() {
        let item = Publication {
            title: String::from("Deep Tutors"),
            authors: String::from("Lin, Chen"),
            source: String::from("ICCE"),
            year: Some(Year(2023)),
            category: String::from("論文"),
            link: Some(String::from("https://doi.org/1")),
        };
        assert_eq!(
            export(&[item]),
            "\u{feff}標題,作者,年份,類別,出處,連結\n\
             \"Deep Tutors\",\"Lin, Chen\",\"2023\",\"論文\",\"ICCE\",\"https://doi.org/1\"\n"
        );
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let text = export(&[Publication::default()]);
        assert!(text.ends_with("\n\"\",\"\",\"\",\"\",\"\",\"\"\n"));
        assert!(!text.contains("null"));
        assert!(!text.contains("None"));
    }

    #[test]
    fn test_quotes_round_trip() {
        let title = r#"Say "hello", then "bye""#;
        let item = Publication {
            title: String::from(title),
            ..Default::default()
        };
        let text = export(&[item]);
        assert!(text.contains(r#""Say ""hello"", then ""bye""""#));
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], title);
    }

    #[test]
    fn test_empty_selection_is_header_only() {
        assert_eq!(export(&[]), "\u{feff}標題,作者,年份,類別,出處,連結\n");
    }

    #[test]
    fn test_filenames() {
        assert_eq!(filename(false), "kslab_publications.csv");
        assert_eq!(filename(true), "ks_lab_publications.csv");
        let download = publications(std::iter::empty(), FILENAME).unwrap();
        assert_eq!(download.mime_type, "text/csv");
    }
}
