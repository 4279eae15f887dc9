use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};
use walkdir::WalkDir;

/// One place reference read from a place-list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceLine {
    pub place: String,
    pub year: Option<i32>,
    pub individual_id: Option<String>,
    pub event_type: Option<String>,
    pub source_file: PathBuf,
    /// 1-based line number in `source_file`
    pub line: usize,
}

// Last 3-4 digit number in a date field: "1875", "ABT 1875", "12 MAR 1875", "BET 1870 AND 1875"
static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{3,4})\b").unwrap());

/// Pull a year out of a free-form date field.
pub fn parse_year(field: &str) -> Option<i32> {
    RE_YEAR
        .captures_iter(field)
        .last()
        .and_then(|c| c[1].parse().ok())
}

fn non_empty(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse a tab-separated place list.
///
/// Each line is `place[\tdate[\tindividual_id[\tevent_type]]]`. Blank lines
/// and lines starting with `#` are skipped.
pub fn parse_place_list(content: &str, source_file: &Path) -> Vec<PlaceLine> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                return None;
            }
            let mut fields = line.split('\t');
            let place = fields.next()?.trim().to_string();
            let year = fields.next().and_then(parse_year);
            Some(PlaceLine {
                place,
                year,
                individual_id: non_empty(fields.next()),
                event_type: non_empty(fields.next()),
                source_file: source_file.to_path_buf(),
                line: i + 1,
            })
        })
        .collect()
}

/// Discover place-list files under `root` (a file or a directory).
///
/// Only `.tsv` and `.txt` files are picked up; results are sorted by path
/// so batch output is stable across runs.
pub fn scan_place_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| match e {
            Ok(e) => Some(e),
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| matches!(p.extension().and_then(|e| e.to_str()), Some("tsv" | "txt")))
        .collect();
    files.sort();
    files
}

/// Read every place line under `root`. Unreadable files are logged and skipped.
pub fn read_place_lines(root: &Path) -> Vec<PlaceLine> {
    let mut out = Vec::new();
    for path in scan_place_files(root) {
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let lines = parse_place_list(&content, &path);
                info!(file = %path.display(), places = lines.len(), "read place list");
                out.extend(lines);
            }
            Err(e) => warn!(file = %path.display(), "cannot read place list: {e}"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_variants() {
        assert_eq!(parse_year("1875"), Some(1875));
        assert_eq!(parse_year("ABT 1875"), Some(1875));
        assert_eq!(parse_year("12 MAR 1875"), Some(1875));
        assert_eq!(parse_year("BET 1870 AND 1875"), Some(1875));
        assert_eq!(parse_year("unknown"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn test_parse_place_list_fields() {
        let content = "# comment\nParis, France\t1850\t@I1@\tbirth\n\nTexas\n  \nEast Germany\tABT 1975\n";
        let lines = parse_place_list(content, Path::new("x.tsv"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].place, "Paris, France");
        assert_eq!(lines[0].year, Some(1850));
        assert_eq!(lines[0].individual_id.as_deref(), Some("@I1@"));
        assert_eq!(lines[0].event_type.as_deref(), Some("birth"));
        assert_eq!(lines[0].line, 2);
        assert_eq!(lines[1].place, "Texas");
        assert_eq!(lines[1].year, None);
        assert_eq!(lines[2].year, Some(1975));
        assert_eq!(lines[2].line, 6);
    }

    #[test]
    fn test_empty_id_fields_become_none() {
        let lines = parse_place_list("Lyon\t\t\tdeath", Path::new("x.tsv"));
        assert_eq!(lines[0].individual_id, None);
        assert_eq!(lines[0].event_type.as_deref(), Some("death"));
    }

    #[test]
    fn test_scan_filters_extensions_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("nested");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(dir.path().join("b.tsv"), "France\n").unwrap();
        std::fs::write(sub.join("a.txt"), "Spain\nItaly\n").unwrap();
        std::fs::write(dir.path().join("notes.md"), "Germany\n").unwrap();

        let files = scan_place_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.windows(2).all(|w| w[0] <= w[1]));

        let lines = read_place_lines(dir.path());
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_scan_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("places.tsv");
        std::fs::write(&file, "Wales\t1901\n").unwrap();
        assert_eq!(scan_place_files(&file), vec![file]);
    }
}
