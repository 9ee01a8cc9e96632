//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one line per guess.

use crate::config::GameConfig;
use crate::core::{CODE_LENGTH, Guess, Palette};
use crate::game::{PickSource, Round, SubmitOutcome};
use crate::output::formatters::{feedback_summary, guess_count_label};
use crate::output::{colored_feedback, colored_guess, format_scoreboard, palette_legend};
use crate::scores::{ScoreBoard, ScoreRecord, ScoreSink};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    Restart,
    Scores,
    Help,
    Empty,
    Guess(Guess),
    Invalid(String),
}

fn parse_input(line: &str, palette: &Palette) -> Input {
    let command = line.trim().to_lowercase();
    match command.as_str() {
        "" => Input::Empty,
        "quit" | "q" | "exit" => Input::Quit,
        "restart" | "new" | "n" => Input::Restart,
        "scores" | "s" => Input::Scores,
        "help" | "h" | "?" => Input::Help,
        _ => match line.parse::<Guess>() {
            Ok(guess) => match guess.slots().iter().flatten().find(|&&c| !palette.contains(c)) {
                Some(color) => Input::Invalid(format!("{color} is not in this round's palette")),
                None => Input::Guess(guess),
            },
            Err(err) => Input::Invalid(err.to_string()),
        },
    }
}

/// Line-based game loop
///
/// Reads guesses from `input` and writes the board to `output`; finished
/// rounds are recorded in `scores`.
///
/// # Errors
///
/// Returns an error if the palette is too small for a round or if reading or
/// writing fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: BufRead, W: Write>(
    config: &GameConfig,
    source: &mut dyn PickSource,
    scores: &mut ScoreBoard,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut round = Round::with_source(config.palette.clone(), source)
        .context("cannot start a round")?;

    writeln!(output, "\n╔══════════════════════════════════════════════════╗")?;
    writeln!(output, "║            Mastermind - Simple Mode              ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════╝\n")?;
    print_help(&mut output, &config.palette)?;

    loop {
        let Some(row) = round.active_row() else {
            // Won rounds are restarted or left before looping again
            break;
        };

        write!(output, "Guess {}: ", row + 1)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match parse_input(&line, &config.palette) {
            Input::Empty => {}
            Input::Quit => break,
            Input::Help => print_help(&mut output, &config.palette)?,
            Input::Scores => write!(output, "{}", format_scoreboard(scores, None))?,
            Input::Restart => {
                round.restart_with(config.palette.clone(), source)?;
                writeln!(output, "\n🔄 New round started!\n")?;
            }
            Input::Invalid(reason) => writeln!(output, "❌ {reason}")?,
            Input::Guess(guess) => {
                for (slot, color) in guess.slots().iter().enumerate() {
                    if let Some(color) = color {
                        round.select_color(row, slot, *color);
                    }
                }

                match round.submit_guess(row) {
                    SubmitOutcome::Ignored => writeln!(output, "❌ Guess not accepted")?,
                    SubmitOutcome::Continue(feedback) => writeln!(
                        output,
                        "   {}   {}   {}",
                        colored_guess(&guess),
                        colored_feedback(&feedback),
                        feedback_summary(&feedback).bright_black()
                    )?,
                    SubmitOutcome::Won(score) => {
                        writeln!(output, "\n{}", "═".repeat(52).bright_cyan())?;
                        writeln!(
                            output,
                            "{}",
                            "     🎉  C O D E   C R A C K E D !  🎉".bright_green().bold()
                        )?;
                        writeln!(output, "{}", "═".repeat(52).bright_cyan())?;
                        writeln!(
                            output,
                            "\n  Solved in {}",
                            guess_count_label(score.final_score).bright_cyan().bold()
                        )?;

                        writeln!(output, "\n  Guess history:")?;
                        for (i, past) in round.rows().iter().enumerate() {
                            if let Some(feedback) = past.feedback() {
                                writeln!(
                                    output,
                                    "    {}. {}   {}",
                                    (i + 1).to_string().bright_black(),
                                    colored_guess(past.guess()),
                                    colored_feedback(feedback)
                                )?;
                            }
                        }

                        scores.record(ScoreRecord::new(
                            config.player.clone(),
                            config.palette.len(),
                            score,
                        ));
                        write!(output, "{}", format_scoreboard(scores, Some(config.palette.len())))?;

                        write!(output, "\nPlay again? (yes/no): ")?;
                        output.flush()?;
                        let mut answer = String::new();
                        input.read_line(&mut answer)?;
                        match answer.trim().to_lowercase().as_str() {
                            "yes" | "y" => {
                                round.restart_with(config.palette.clone(), source)?;
                                writeln!(output, "\n🔄 New round started!\n")?;
                            }
                            _ => break,
                        }
                    }
                }
            }
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn print_help<W: Write>(output: &mut W, palette: &Palette) -> Result<()> {
    writeln!(
        output,
        "Crack the hidden code of {CODE_LENGTH} distinct colors. Enter guesses as color codes:"
    )?;
    writeln!(output, "  {}\n", palette_legend(palette))?;
    writeln!(output, "Feedback per position:")?;
    writeln!(output, "  ● right color, right place")?;
    writeln!(output, "  ○ color is elsewhere in the code")?;
    writeln!(output, "  · color not in the code\n")?;
    writeln!(output, "Commands: 'restart', 'scores', 'help', 'quit'\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::game::ScriptedPicks;
    use std::io::Cursor;

    fn play(lines: &str, script: &[usize]) -> (String, ScoreBoard) {
        colored::control::set_override(false);
        let config = GameConfig::new(6, "ann", None).unwrap();
        let mut source = ScriptedPicks::new(script.iter().copied());
        let mut scores = ScoreBoard::new();
        let mut output = Vec::new();

        run_simple(
            &config,
            &mut source,
            &mut scores,
            Cursor::new(lines.to_string()),
            &mut output,
        )
        .unwrap();

        (String::from_utf8(output).unwrap(), scores)
    }

    #[test]
    fn parse_commands_and_guesses() {
        let palette = Palette::standard(6).unwrap();
        assert_eq!(parse_input(" Quit \n", &palette), Input::Quit);
        assert_eq!(parse_input("new", &palette), Input::Restart);
        assert_eq!(parse_input("\n", &palette), Input::Empty);
        assert_eq!(
            parse_input("rgby", &palette),
            Input::Guess(Guess::from_colors([
                Color::Red,
                Color::Green,
                Color::Blue,
                Color::Yellow
            ]))
        );
        assert!(matches!(parse_input("RGB", &palette), Input::Invalid(_)));
    }

    #[test]
    fn colors_outside_palette_are_rejected() {
        let palette = Palette::standard(6).unwrap();
        assert_eq!(
            parse_input("RGBP", &palette),
            Input::Invalid("Pink is not in this round's palette".to_string())
        );
    }

    #[test]
    fn wrong_guess_shows_feedback() {
        let (out, scores) = play("BGRY\nquit\n", &[0, 1, 2, 3]);
        assert!(out.contains("B G R Y   ○ ● ○ ●   2 exact, 2 present"));
        assert!(out.contains("Guess 2: "));
        assert!(scores.is_empty());
    }

    #[test]
    fn win_records_score_and_ends_on_no() {
        let (out, scores) = play("CMBY\nRGBY\nno\n", &[0, 1, 2, 3]);
        assert!(out.contains("Solved in 2 guesses"));
        assert!(out.contains("Thanks for playing"));

        assert_eq!(scores.len(), 1);
        assert_eq!(scores.records()[0].player, "ann");
        assert_eq!(scores.records()[0].palette_size, 6);
        assert_eq!(scores.records()[0].score, 2);
    }

    #[test]
    fn play_again_starts_fresh_round() {
        // Second round draws Cyan, Magenta, Red, Green
        let (out, scores) = play("RGBY\nyes\nCMRG\nno\n", &[0, 1, 2, 3, 4, 5, 0, 1]);
        assert!(out.contains("New round started"));
        assert_eq!(scores.len(), 2);
        assert!(scores.records().iter().all(|r| r.score == 1));
    }

    #[test]
    fn invalid_input_keeps_row() {
        let (out, _) = play("XYZW\nRGB\nquit\n", &[0, 1, 2, 3]);
        assert!(out.contains("unknown color 'X'"));
        assert!(out.contains("exactly 4 colors"));
        assert!(!out.contains("Guess 2: "));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (out, _) = play("BGRY\n", &[0, 1, 2, 3]);
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn restart_resets_row_counter() {
        let (out, _) = play("BGRY\nrestart\nquit\n", &[0, 1, 2, 3]);
        let after_restart = out.split("New round started").nth(1).unwrap();
        assert!(after_restart.contains("Guess 1: "));
        assert!(!after_restart.contains("Guess 2: "));
    }
}
