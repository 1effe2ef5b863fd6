//! Console table of plays with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::play::Play;
use crate::ranking::{Volforce, is_counted, positions};
use crate::score::{Clear, Grade};

/// How a play table is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Emit ANSI colors.
    pub color: bool,
    /// Show scores in thousands.
    pub compact_score: bool,
    /// List plays in ranking order instead of stored order.
    pub ranked: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            color: true,
            compact_score: false,
            ranked: false,
        }
    }
}

const NAME_MIN_WIDTH: usize = 4;

/// Format plays as a table headed by the volforce total.
///
/// Each row shows the stored index (used by edit commands), the 1-based
/// ranking position, the stored fields, and the derived grade and force.
/// Plays outside the counted top positions are dimmed.
pub fn format_play_table(plays: &[Play], options: &TableOptions) -> String {
    let mut output = String::new();

    let volforce = Volforce::of(plays);
    let _ = writeln!(
        output,
        "VOLFORCE {}",
        paint(&volforce.to_string(), options.color, |s| s.bold().to_string())
    );

    let positions = positions(plays);
    let mut order: Vec<usize> = (0..plays.len()).collect();
    if options.ranked {
        order.sort_by_key(|&index| positions[index]);
    }

    let name_width = plays
        .iter()
        .map(|play| play.name().chars().count())
        .max()
        .unwrap_or(0)
        .max(NAME_MIN_WIDTH);
    let score_width = if options.compact_score { 5 } else { 8 };

    let header = format!(
        "{:>4} {:>4}  {:<name_width$}  {:>3}  {:>score_width$}  {:<5}  {:<5}  {:>4}",
        "#", "POS", "NAME", "LV", "SCORE", "CLEAR", "GRADE", "VF"
    );
    let _ = writeln!(
        output,
        "{}",
        paint(&header, options.color, |s| s.underline().to_string())
    );

    for index in order {
        let play = &plays[index];
        let position = positions[index];
        let counted = is_counted(position);

        let row = format!(
            "{:>4} {:>4}  {:<name_width$}  {:>3}  {:>score_width$}  {}  {}  {:>4}",
            index,
            position + 1,
            play.name(),
            play.level(),
            play.display_score(options.compact_score),
            format_colored_clear(play.clear(), options.color && counted),
            format_colored_grade(play.grade(), options.color && counted),
            play.force(),
        );

        if counted {
            let _ = writeln!(output, "{}", row);
        } else {
            let _ = writeln!(output, "{}", paint(&row, options.color, |s| s.dimmed().to_string()));
        }
    }

    output
}

/// One-line summary of a play for logs and command output
pub fn format_play_summary(play: &Play) -> String {
    format!(
        "{} Lv.{} {} {} {} (VF {})",
        if play.name().is_empty() {
            "(untitled)"
        } else {
            play.name()
        },
        play.level(),
        play.long_score(),
        play.clear().short_name(),
        play.grade().short_name(),
        play.force()
    )
}

fn paint(text: &str, color: bool, style: impl Fn(&str) -> String) -> String {
    if color {
        style(text)
    } else {
        text.to_string()
    }
}

/// Format clear type with color, padded to the column width
fn format_colored_clear(clear: Clear, color: bool) -> String {
    let name = format!("{:<5}", clear.short_name());
    if !color {
        return name;
    }
    match clear {
        Clear::PerfectUltimateChain => name.truecolor(255, 200, 0).bold().to_string(),
        Clear::UltimateChain => name.truecolor(255, 105, 180).to_string(),
        Clear::ExcessiveComplete => name.truecolor(230, 80, 50).to_string(),
        Clear::Complete => name.green().to_string(),
        Clear::Played => name.dimmed().to_string(),
    }
}

/// Format grade with color, padded to the column width
fn format_colored_grade(grade: Grade, color: bool) -> String {
    let name = format!("{:<5}", grade.short_name());
    if !color {
        return name;
    }
    match grade {
        // S: gold
        Grade::S => name.truecolor(255, 200, 0).bold().to_string(),
        Grade::AaaPlus | Grade::Aaa => name.yellow().to_string(),
        // AA+/AA: silver
        Grade::AaPlus | Grade::Aa => name.truecolor(192, 192, 192).to_string(),
        Grade::APlus | Grade::A => name.cyan().to_string(),
        Grade::B | Grade::C => name.truecolor(110, 170, 255).to_string(),
        Grade::D => name.dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::volforce::TOP_PLAYS;
    use crate::play::PlayFields;

    fn plain() -> TableOptions {
        TableOptions {
            color: false,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Play> {
        vec![
            Play::new(PlayFields::new().name("Weak").level(17).score(900)),
            Play::new(
                PlayFields::new()
                    .name("Lachryma")
                    .level(20)
                    .score(989)
                    .clear(Clear::ExcessiveComplete),
            ),
        ]
    }

    #[test]
    fn test_plain_table_layout() {
        let table = format_play_table(&sample(), &plain());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("VOLFORCE "));
        assert!(lines[1].contains("NAME"));
        // Stored order: the weak play comes first but ranks second.
        assert!(lines[2].contains("Weak"));
        assert!(lines[2].trim_start().starts_with("0    2"));
        assert!(lines[3].contains("Lachryma"));
        assert!(lines[3].contains("9890000"));
        assert!(lines[3].contains("AAA+"));
        assert!(lines[3].contains("411"));
        assert!(!table.contains('\u{1b}'));
    }

    #[test]
    fn test_ranked_table_order() {
        let options = TableOptions {
            ranked: true,
            ..plain()
        };
        let table = format_play_table(&sample(), &options);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[2].contains("Lachryma"));
        assert!(lines[2].trim_start().starts_with("1    1"));
        assert!(lines[3].contains("Weak"));
    }

    #[test]
    fn test_compact_scores() {
        let options = TableOptions {
            compact_score: true,
            ..plain()
        };
        let table = format_play_table(&sample(), &options);
        assert!(table.contains(" 9890 "));
        assert!(!table.contains("9890000"));
    }

    #[test]
    fn test_colored_table_dims_uncounted_rows() {
        let mut plays: Vec<Play> = (0..TOP_PLAYS)
            .map(|_| Play::new(PlayFields::new().name("strong").level(20).score(995)))
            .collect();
        plays.push(Play::new(PlayFields::new().name("extra").level(1).score(1)));

        let table = format_play_table(&plays, &TableOptions::default());
        let extra = table.lines().find(|line| line.contains("extra")).unwrap();
        // dimmed rows start with the SGR "faint" sequence
        assert!(extra.starts_with("\u{1b}[2m"));
    }

    #[test]
    fn test_format_play_summary() {
        let summary = format_play_summary(&sample()[1]);
        assert!(summary.contains("Lachryma"));
        assert!(summary.contains("Lv.20"));
        assert!(summary.contains("9890000"));
        assert!(summary.contains("EXC"));
        assert!(summary.contains("AAA+"));
        assert!(summary.contains("VF 411"));

        assert!(format_play_summary(&Play::default()).starts_with("(untitled)"));
    }
}
