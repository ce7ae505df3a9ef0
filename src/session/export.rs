//! Session export parsing.
//!
//! Locates the two table blocks in a tab-separated session export and
//! parses their timecode columns. A block opens with a row containing
//! `TRACK NAME` and its column-header row is the following row containing
//! `CHANNEL`. The first block holds the full clip timeline, the second the
//! grouped regions. Uses the `csv` crate for the tabular rows.

use std::fs;
use std::path::Path;

use crate::constants::{COLUMN_MARKER, END_COLUMN, START_COLUMN, TRACK_MARKER};
use crate::error::{Error, Result};
use crate::timecode::TimeCode;

use super::{Interval, SessionTimelines};

/// Row indexes of one table block within the export.
#[derive(Debug, Clone, Copy)]
struct TableBlock {
    /// Row containing the `TRACK NAME` marker.
    track_row: usize,
    /// Row containing the column headers (the `CHANNEL` marker).
    header_row: usize,
}

/// Parse a session export into its two ordered timelines.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the file cannot be read,
/// [`Error::SessionExport`] if the two table blocks or their
/// `START TIME` / `END TIME` columns cannot be located, and
/// [`Error::TimecodeFormat`] for malformed timestamps.
pub fn parse_session_export(path: &Path) -> Result<SessionTimelines> {
    let text = fs::read_to_string(path).map_err(|e| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let lines: Vec<&str> = text.lines().collect();
    let blocks = locate_blocks(&lines);
    if blocks.len() < 2 {
        return Err(Error::SessionExport {
            path: path.to_path_buf(),
            message: format!(
                "expected two table blocks ('{TRACK_MARKER}' + '{COLUMN_MARKER}' rows), found {}",
                blocks.len()
            ),
        });
    }

    // First block runs until the second block's track marker, the second
    // until end of file. Blank rows in between are skipped.
    let clips = parse_block(path, &lines, blocks[0].header_row, blocks[1].track_row)?;
    let groups = parse_block(path, &lines, blocks[1].header_row, lines.len())?;

    Ok(SessionTimelines { clips, groups })
}

/// Find `TRACK NAME` / `CHANNEL` marker pairs.
fn locate_blocks(lines: &[&str]) -> Vec<TableBlock> {
    let mut blocks = Vec::new();
    let mut pending_track: Option<usize> = None;

    for (idx, line) in lines.iter().enumerate() {
        if line.contains(TRACK_MARKER) {
            pending_track = Some(idx);
        } else if line.contains(COLUMN_MARKER)
            && let Some(track_row) = pending_track.take()
        {
            blocks.push(TableBlock {
                track_row,
                header_row: idx,
            });
        }
    }
    blocks
}

/// Parse one table block into intervals.
///
/// `header_row` is the column-header row; data rows run up to (exclusive)
/// `end_row`.
fn parse_block(
    path: &Path,
    lines: &[&str],
    header_row: usize,
    end_row: usize,
) -> Result<Vec<Interval>> {
    // Keep non-blank rows along with their 1-based file line numbers so
    // diagnostics point at the export, not at a filtered row index.
    let mut kept: Vec<(usize, &str)> = vec![(header_row + 1, lines[header_row])];
    for (idx, line) in lines
        .iter()
        .enumerate()
        .take(end_row)
        .skip(header_row + 1)
    {
        if !line.trim().is_empty() {
            kept.push((idx + 1, *line));
        }
    }

    let body = kept
        .iter()
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader.headers().map_err(|e| Error::SessionExport {
        path: path.to_path_buf(),
        message: format!("line {}: {e}", header_row + 1),
    })?;
    let start_col = column_index(path, headers, START_COLUMN, header_row)?;
    let end_col = column_index(path, headers, END_COLUMN, header_row)?;

    let mut intervals = Vec::new();
    // Data rows of `kept` line up one-to-one with csv records.
    for ((line_no, _), record) in kept.iter().skip(1).zip(reader.records()) {
        let record = record.map_err(|e| Error::SessionExport {
            path: path.to_path_buf(),
            message: format!("line {line_no}: {e}"),
        })?;

        let start = field(path, &record, start_col, *line_no, START_COLUMN)?;
        let end = field(path, &record, end_col, *line_no, END_COLUMN)?;
        intervals.push(Interval::new(
            TimeCode::parse(start)?,
            TimeCode::parse(end)?,
        ));
    }

    Ok(intervals)
}

/// Resolve a named column in the header row.
fn column_index(
    path: &Path,
    headers: &csv::StringRecord,
    name: &str,
    header_row: usize,
) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::SessionExport {
            path: path.to_path_buf(),
            message: format!("line {}: missing '{name}' column", header_row + 1),
        })
}

/// Fetch one cell of a data row.
fn field<'r>(
    path: &Path,
    record: &'r csv::StringRecord,
    col: usize,
    line_no: usize,
    name: &str,
) -> Result<&'r str> {
    record.get(col).ok_or_else(|| Error::SessionExport {
        path: path.to_path_buf(),
        message: format!("line {line_no}: row has no '{name}' cell"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXPORT: &str = "SESSION NAME:\tdemo\n\
\n\
TRACK NAME:\tMusic\n\
CHANNEL \tEVENT \tCLIP NAME \tSTART TIME \tEND TIME \tDURATION \tSTATE\n\
1\t1\tclip-a\t0:00.000\t0:01.000\t0:01.000\tUnmuted\n\
1\t2\tclip-b\t0:01.000\t0:02.500\t0:01.500\tUnmuted\n\
\n\
TRACK NAME:\tGroups\n\
CHANNEL \tEVENT \tCLIP NAME \tSTART TIME \tEND TIME \tDURATION \tSTATE\n\
1\t1\tintro\t0:00.000\t0:02.500\t0:02.500\tUnmuted\n";

    fn write_export(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_two_blocks() {
        let file = write_export(EXPORT);
        let timelines = parse_session_export(file.path()).unwrap();

        assert_eq!(timelines.clips.len(), 2);
        assert_eq!(timelines.groups.len(), 1);
        assert_eq!(timelines.clips[0].start_ms(), 0);
        assert_eq!(timelines.clips[1].end_ms(), 2500);
        assert_eq!(timelines.groups[0].end_ms(), 2500);
    }

    #[test]
    fn test_header_names_are_trimmed() {
        // Headers in the fixture carry trailing spaces; column lookup must
        // still find them.
        let file = write_export(EXPORT);
        assert!(parse_session_export(file.path()).is_ok());
    }

    #[test]
    fn test_single_block_is_rejected() {
        let export = "TRACK NAME:\tMusic\n\
CHANNEL\tSTART TIME\tEND TIME\n\
1\t0:00.000\t0:01.000\n";
        let file = write_export(export);
        let err = parse_session_export(file.path()).unwrap_err();
        assert!(matches!(err, Error::SessionExport { .. }));
        assert!(err.to_string().contains("two table blocks"));
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let export = "TRACK NAME:\tMusic\n\
CHANNEL\tSTART TIME\tFINISH\n\
1\t0:00.000\t0:01.000\n\
TRACK NAME:\tGroups\n\
CHANNEL\tSTART TIME\tEND TIME\n\
1\t0:00.000\t0:01.000\n";
        let file = write_export(export);
        let err = parse_session_export(file.path()).unwrap_err();
        assert!(err.to_string().contains("END TIME"));
    }

    #[test]
    fn test_bad_timecode_names_the_text() {
        let export = "TRACK NAME:\tMusic\n\
CHANNEL\tSTART TIME\tEND TIME\n\
1\tnot-a-time\t0:01.000\n\
TRACK NAME:\tGroups\n\
CHANNEL\tSTART TIME\tEND TIME\n\
1\t0:00.000\t0:01.000\n";
        let file = write_export(export);
        let err = parse_session_export(file.path()).unwrap_err();
        assert!(matches!(err, Error::TimecodeFormat { .. }));
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = parse_session_export(Path::new("/nonexistent/session.txt")).unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }
}
