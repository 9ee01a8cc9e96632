//! TUI rendering with ratatui
//!
//! Board, score panel and input help for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as PegColor, Feedback, Guess, Mark};
use crate::game::Row;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Terminal color for a peg
#[must_use]
pub fn peg_color(color: PegColor) -> Color {
    match color {
        PegColor::Red => Color::Red,
        PegColor::Green => Color::Green,
        PegColor::Blue => Color::Blue,
        PegColor::Yellow => Color::Yellow,
        PegColor::Cyan => Color::Cyan,
        PegColor::Magenta => Color::Magenta,
        PegColor::Gray => Color::Gray,
        PegColor::Black => Color::Black,
        PegColor::Orange => Color::Rgb(0xff, 0x66, 0x00),
        PegColor::Pink => Color::Rgb(0xf3, 0xc2, 0xe2),
    }
}

fn peg_style(color: PegColor) -> Style {
    let style = Style::default()
        .fg(peg_color(color))
        .add_modifier(Modifier::BOLD);
    // Black pegs would vanish on dark terminals
    if color == PegColor::Black {
        style.bg(Color::White)
    } else {
        style
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input help
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn guess_spans(guess: &Guess, cursor: Option<usize>) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (slot, color) in guess.slots().iter().enumerate() {
        let selected = cursor == Some(slot);
        let (open, close) = if selected { ("[", "]") } else { (" ", " ") };
        spans.push(Span::styled(open, Style::default().fg(Color::White)));
        spans.push(match color {
            Some(color) => Span::styled("●", peg_style(*color)),
            None => Span::styled("◌", Style::default().fg(Color::DarkGray)),
        });
        spans.push(Span::styled(close, Style::default().fg(Color::White)));
    }
    spans
}

fn feedback_spans(feedback: Option<&Feedback>) -> Vec<Span<'static>> {
    let Some(feedback) = feedback else {
        return vec![Span::styled("    ", Style::default())];
    };

    feedback
        .marks()
        .iter()
        .map(|mark| {
            let style = match mark {
                Mark::Exact => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                Mark::Present => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                Mark::Absent => Style::default().fg(Color::DarkGray),
            };
            Span::styled(mark.symbol().to_string(), style)
        })
        .collect()
}

fn row_line(index: usize, row: &Row, cursor: Option<usize>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:>3} ", index + 1),
        Style::default().fg(Color::DarkGray),
    )];
    spans.extend(guess_spans(row.guess(), cursor));
    spans.push(Span::raw("   "));
    spans.extend(feedback_spans(row.feedback()));
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.round.rows();
    let active = app.round.active_row();

    // Keep the newest rows visible
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = rows.len().saturating_sub(visible);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, row)| {
            let cursor = (active == Some(i)).then_some(app.cursor);
            ListItem::new(row_line(i, row, cursor))
        })
        .collect();

    let board = List::new(items).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Score
            Constraint::Length(5),  // Palette
            Constraint::Min(4),     // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_palette(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let best = app
        .scores
        .best_for(&app.config.player)
        .map_or_else(|| "-".to_string(), |s| s.to_string());

    let mut content = vec![
        Line::from(vec![
            Span::raw("Your score: "),
            Span::styled(
                app.round.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Player:     {}", app.config.player)),
        Line::from(format!("Best:       {best}")),
    ];

    if let Some(secret) = app.round.revealed_secret() {
        let mut spans = vec![Span::raw("Secret:    ")];
        spans.extend(guess_spans(&secret.as_guess(), None));
        content.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = app
        .round
        .palette()
        .colors()
        .iter()
        .flat_map(|&color| {
            [
                Span::styled("● ", peg_style(color)),
                Span::styled(
                    format!("{}  ", color.code()),
                    Style::default().fg(Color::White),
                ),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" Palette ({} colors) ", app.round.palette().len()))
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 ",
            "Press 'n' for new round or 'q' to quit",
            Color::Green,
        ),
        InputMode::Editing => (
            " Build your guess ",
            "←/→ slot | Space cycle color | letter sets color | Enter submit",
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Editing => "Mode: Playing",
        InputMode::WinCelebration => "Mode: Won",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Won: {}/{}",
        app.stats.rounds_won, app.stats.rounds_started
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let average_text = app
        .stats
        .average_guesses()
        .map_or_else(|| "Avg: -".to_string(), |avg| format!("Avg: {avg:.1}"));
    let average = Paragraph::new(average_text).alignment(Alignment::Center);
    f.render_widget(average, chunks[2]);

    let help = Paragraph::new("q: Quit | n: New Round")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
