//! Reading the game's score export.
//!
//! The export is comma-separated text with a header row. Columns used:
//!
//! | Column | Meaning |
//! |---|---|
//! | 0 | song title |
//! | 1 | difficulty (appended to the title) |
//! | 2 | level |
//! | 3 | clear label (`PERFECT`, `ULTIMATE CHAIN`, ...) |
//! | 5 | score |

use std::fs;
use std::path::Path;

use encoding_rs::{SHIFT_JIS, UTF_8};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::play::PlayFields;
use crate::score::Clear;

const TITLE_COLUMN: usize = 0;
const DIFFICULTY_COLUMN: usize = 1;
const LEVEL_COLUMN: usize = 2;
const CLEAR_COLUMN: usize = 3;
const SCORE_COLUMN: usize = 5;

/// Read and parse a score export file.
pub fn load_score_export<P: AsRef<Path>>(path: P) -> Result<Vec<PlayFields>> {
    let bytes = fs::read(&path)?;
    let plays = parse_score_export(&decode_export(&bytes));
    info!(
        "Read {} plays from {}",
        plays.len(),
        path.as_ref().display()
    );
    Ok(plays)
}

/// Decode export bytes as UTF-8 (honoring a BOM), falling back to
/// Shift-JIS when the bytes are not valid UTF-8.
pub fn decode_export(bytes: &[u8]) -> String {
    let (decoded, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return decoded.into_owned();
    }

    let (decoded, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        warn!("Score export is neither valid UTF-8 nor Shift-JIS; some characters were replaced");
    } else {
        debug!("Decoded score export as Shift-JIS");
    }
    decoded.into_owned()
}

/// Parse export text into play field-sets. The first line is a header;
/// blank lines are skipped.
pub fn parse_score_export(text: &str) -> Vec<PlayFields> {
    text.trim()
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(parse_row)
        .collect()
}

/// Parse one export row. Missing columns read as empty.
pub fn parse_row(row: &str) -> PlayFields {
    let columns: Vec<&str> = row.split(',').collect();
    let column = |index: usize| columns.get(index).copied().unwrap_or("");

    let clear_label = column(CLEAR_COLUMN);
    let clear = Clear::from_result_label(clear_label);
    if clear.is_none() {
        debug!("Unknown clear label '{}', using the default", clear_label);
    }

    PlayFields {
        name: Some(format!(
            "{} {}",
            column(TITLE_COLUMN),
            column(DIFFICULTY_COLUMN)
        )),
        level: Some(safe_integer(column(LEVEL_COLUMN))),
        score: Some(safe_integer(column(SCORE_COLUMN))),
        clear,
    }
}

/// Lenient integer parsing: never fails.
///
/// Accepts surrounding whitespace, a sign, decimals and exponents
/// (truncated toward zero), and `0x`/`0o`/`0b` prefixes. Anything
/// unparseable is 0; results are clamped to `0..=u32::MAX`.
pub fn safe_integer(text: &str) -> u32 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = text
            .strip_prefix(prefix)
            .or_else(|| text.strip_prefix(&prefix.to_uppercase()))
        {
            return u64::from_str_radix(digits, radix)
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
                .unwrap_or(0);
        }
    }

    match text.parse::<f64>() {
        Ok(n) if n.is_nan() || n <= 0.0 => 0,
        // `as` truncates toward zero and saturates at u32::MAX.
        Ok(n) => n as u32,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
title,difficulty,level,clear,grade,score
Lachryma《Re:Queen’M》,MXM,18,EXCESSIVE COMPLETE,AAA+,9890000
Blastix Riotz,GRV,20,ULTIMATE CHAIN,S,9912345
";

    #[test]
    fn test_parse_score_export() {
        let plays = parse_score_export(EXPORT);
        assert_eq!(plays.len(), 2);

        assert_eq!(plays[0].name.as_deref(), Some("Lachryma《Re:Queen’M》 MXM"));
        assert_eq!(plays[0].level, Some(18));
        assert_eq!(plays[0].clear, Some(Clear::ExcessiveComplete));
        assert_eq!(plays[0].score, Some(9_890_000));

        assert_eq!(plays[1].name.as_deref(), Some("Blastix Riotz GRV"));
        assert_eq!(plays[1].clear, Some(Clear::UltimateChain));
    }

    #[test]
    fn test_parse_handles_crlf_and_blank_lines() {
        let text = "h\r\nA,NOV,5,COMPLETE,B,8000000\r\n\r\nB,ADV,9,PLAYED,C,700\r\n";
        let plays = parse_score_export(text);

        assert_eq!(plays.len(), 2);
        assert_eq!(plays[0].score, Some(8_000_000));
        assert_eq!(plays[1].clear, Some(Clear::Played));
        assert_eq!(plays[1].score, Some(700));
    }

    #[test]
    fn test_header_only() {
        assert!(parse_score_export("title,difficulty,level,clear,grade,score\n").is_empty());
        assert!(parse_score_export("").is_empty());
    }

    #[test]
    fn test_row_with_unknown_clear_and_bad_numbers() {
        let fields = parse_row("Song,EXH,abc,FAILED,D,");
        assert_eq!(fields.name.as_deref(), Some("Song EXH"));
        assert_eq!(fields.level, Some(0));
        assert_eq!(fields.score, Some(0));
        assert_eq!(fields.clear, None);
    }

    #[test]
    fn test_short_row() {
        let fields = parse_row("Song");
        assert_eq!(fields.name.as_deref(), Some("Song "));
        assert_eq!(fields.level, Some(0));
        assert_eq!(fields.score, Some(0));
        assert_eq!(fields.clear, None);
    }

    #[test]
    fn test_safe_integer() {
        assert_eq!(safe_integer("18"), 18);
        assert_eq!(safe_integer(" 9890000 "), 9_890_000);
        assert_eq!(safe_integer("17.9"), 17);
        assert_eq!(safe_integer("1e3"), 1000);
        assert_eq!(safe_integer("0x10"), 16);
        assert_eq!(safe_integer("0B101"), 5);
        assert_eq!(safe_integer(""), 0);
        assert_eq!(safe_integer("abc"), 0);
        assert_eq!(safe_integer("12abc"), 0);
        assert_eq!(safe_integer("-5"), 0);
        assert_eq!(safe_integer("NaN"), 0);
        assert_eq!(safe_integer("1e20"), u32::MAX);
        assert_eq!(safe_integer("inf"), u32::MAX);
    }

    #[test]
    fn test_decode_export_utf8_with_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("title\nA,B,1,COMPLETE,D,5".as_bytes());
        assert_eq!(decode_export(&bytes), "title\nA,B,1,COMPLETE,D,5");
    }

    #[test]
    fn test_decode_export_shift_jis() {
        let (bytes, _, _) = SHIFT_JIS.encode("曲名,EXH,18");
        assert_eq!(decode_export(&bytes), "曲名,EXH,18");
    }

    #[test]
    fn test_load_score_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        fs::write(&path, EXPORT).unwrap();

        let plays = load_score_export(&path).unwrap();
        assert_eq!(plays.len(), 2);
        assert_eq!(plays[1].score, Some(9_912_345));
    }
}
