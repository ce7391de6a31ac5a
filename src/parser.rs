//! Menu list parser
//!
//! Reads the indented item list, one entry per line:
//!
//! ```text
//! <tabs>[IMG:<path><TAB>]<label>[<TAB>...<output>]
//! ```
//!
//! The number of leading tabs is the nesting level. A line with nothing after
//! its indentation is a separator.

use std::io::BufRead;
use std::path::PathBuf;

use crate::domain::entities::MenuRecord;
use crate::error::PieResult;

/// Prefix introducing an icon path in place of the label
const ICON_MARKER: &str = "IMG:";

/// Read every line of `reader` into records
pub fn parse_records(reader: impl BufRead) -> PieResult<Vec<MenuRecord>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let record = parse_line(&line?, index + 1);
        log::trace!("line {}: {:?}", record.line, record);
        records.push(record);
    }
    log::debug!("parsed {} records", records.len());
    Ok(records)
}

/// Split one line (without its newline) into a record
pub fn parse_line(line: &str, number: usize) -> MenuRecord {
    let line = line.trim_end_matches(['\n', '\r']);
    let rest = line.trim_start_matches('\t');
    let level = line.len() - rest.len();

    let (mut label, mut rest) = next_field(rest);
    let mut icon = None;
    if let Some(path) = label.and_then(|l| l.strip_prefix(ICON_MARKER)) {
        if !path.is_empty() {
            icon = Some(PathBuf::from(path));
        }
        (label, rest) = next_field(rest.trim_start_matches('\t'));
    }

    let output = Some(rest.trim_start_matches('\t')).filter(|o| !o.is_empty());

    MenuRecord {
        level,
        label: label.map(str::to_string),
        output: output.map(str::to_string),
        icon,
        line: number,
    }
}

/// Take the text up to the next tab. Returns the field (`None` when empty)
/// and whatever follows the tab.
fn next_field(text: &str) -> (Option<&str>, &str) {
    let (field, rest) = text.split_once('\t').unwrap_or((text, ""));
    (Some(field).filter(|f| !f.is_empty()), rest)
}
