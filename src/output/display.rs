//! Colored rendering of codes, feedback and results

use super::formatters::{create_progress_bar, feedback_summary, guess_count_label};
use crate::core::{Color, Feedback, Guess, Mark, Palette, Secret};
use crate::scores::ScoreBoard;
use colored::{ColoredString, Colorize};

/// Paint `text` in the terminal color closest to `color`
#[must_use]
pub fn paint(color: Color, text: &str) -> ColoredString {
    match color {
        Color::Red => text.red(),
        Color::Green => text.green(),
        Color::Blue => text.blue(),
        Color::Yellow => text.yellow(),
        Color::Cyan => text.cyan(),
        Color::Magenta => text.magenta(),
        Color::Gray => text.bright_black(),
        Color::Black => text.black().on_white(),
        Color::Orange => text.truecolor(0xff, 0x66, 0x00),
        Color::Pink => text.truecolor(0xf3, 0xc2, 0xe2),
    }
}

/// Guess as colored letter codes; unset slots show as `_`
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(color) => paint(*color, &color.code().to_string()).bold().to_string(),
            None => "_".bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feedback symbols: red `●` exact, yellow `○` present, dim `·` absent
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| {
            let symbol = mark.symbol().to_string();
            match mark {
                Mark::Exact => symbol.red().bold().to_string(),
                Mark::Present => symbol.yellow().bold().to_string(),
                Mark::Absent => symbol.bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per palette color: code and name
#[must_use]
pub fn palette_legend(palette: &Palette) -> String {
    palette
        .colors()
        .iter()
        .map(|&color| {
            format!(
                "{}={}",
                paint(color, &color.code().to_string()).bold(),
                paint(color, &color.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Print the result of checking a single guess
pub fn print_check_result(secret: &Secret, guess: &Guess, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Secret:   {}", colored_guess(&secret.as_guess()));
    println!("Guess:    {}", colored_guess(guess));
    println!("Feedback: {}", colored_feedback(feedback));
    println!("{}", "─".repeat(40).cyan());

    if feedback.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!("{}", feedback_summary(feedback).bright_white());
    }
}

/// Render the score board, best first
///
/// With `palette_size` set only rounds played with that many colors are shown.
#[must_use]
pub fn format_scoreboard(board: &ScoreBoard, palette_size: Option<usize>) -> String {
    let ranked = match palette_size {
        Some(size) => board.ranked_for_palette(size),
        None => board.ranked(),
    };

    let mut out = format!("\n{}\n", " SCORES ".bright_cyan().bold());
    if ranked.is_empty() {
        out.push_str("   No rounds finished yet\n");
        return out;
    }

    let worst = ranked.iter().map(|r| r.score).max().unwrap_or(1).max(1);
    for (i, record) in ranked.iter().enumerate() {
        let bar = create_progress_bar(f64::from(record.score), f64::from(worst), 20);
        out.push_str(&format!(
            "   {:>2}. {:<16} {:>2} colors  {} {}\n",
            i + 1,
            record.player,
            record.palette_size,
            bar.green(),
            guess_count_label(record.score).bright_yellow()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FinalScore;
    use crate::scores::{ScoreRecord, ScoreSink};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn colored_guess_plain_text() {
        plain();
        let mut guess = Guess::empty();
        guess.set(0, Color::Red);
        guess.set(2, Color::Pink);
        assert_eq!(colored_guess(&guess), "R _ P _");
    }

    #[test]
    fn colored_feedback_plain_text() {
        plain();
        let feedback = Feedback::new([Mark::Present, Mark::Exact, Mark::Absent, Mark::Exact]);
        assert_eq!(colored_feedback(&feedback), "○ ● · ●");
    }

    #[test]
    fn legend_lists_palette() {
        plain();
        let legend = palette_legend(&Palette::standard(4).unwrap());
        assert_eq!(legend, "R=Red  G=Green  B=Blue  Y=Yellow");
    }

    #[test]
    fn scoreboard_lists_best_first() {
        plain();
        let mut board = ScoreBoard::new();
        board.record(ScoreRecord::new("ann", 6, FinalScore { final_score: 5 }));
        board.record(ScoreRecord::new("bo", 6, FinalScore { final_score: 2 }));
        board.record(ScoreRecord::new("cy", 8, FinalScore { final_score: 1 }));

        let all = format_scoreboard(&board, None);
        let cy = all.find("cy").unwrap();
        let bo = all.find("bo").unwrap();
        let ann = all.find("ann").unwrap();
        assert!(cy < bo && bo < ann);

        let six = format_scoreboard(&board, Some(6));
        assert!(!six.contains("cy"));
        assert!(six.contains("2 guesses"));
    }

    #[test]
    fn scoreboard_empty() {
        plain();
        let text = format_scoreboard(&ScoreBoard::new(), None);
        assert!(text.contains("No rounds finished yet"));
    }
}
