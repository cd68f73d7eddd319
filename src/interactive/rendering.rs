//! TUI rendering with ratatui
//!
//! Visualizations for the phrase solver interface.

use super::app::{App, MessageStyle, Prompt};
use crate::core::SPACE;
use crate::output::formatters::{describe_guess, entropy_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Phrase
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_phrase(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    render_slots(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HANGMAN ENTROPY SOLVER - Interactive Mode")
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

fn render_phrase(f: &mut Frame, app: &App, area: Rect) {
    let phrase = app
        .outcome
        .as_ref()
        .map(|o| o.phrase.clone())
        .or_else(|| app.round.as_ref().map(|r| r.phrase.clone()))
        .or_else(|| app.phrase_len.map(|n| "*".repeat(n)))
        .unwrap_or_default();

    let spaced: String = phrase
        .chars()
        .map(|c| if c == SPACE { "   ".to_string() } else { format!("{c} ") })
        .collect();

    let mut lines = vec![Line::from(Span::styled(
        spaced,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(round) = &app.round {
        lines.push(Line::from(format!(
            "Best guess so far: {}",
            round.best_phrase
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Phrase ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_slots(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.round {
        None => vec![Line::from("Waiting for the first round...")],
        Some(round) => {
            let mut lines = Vec::new();
            for slot in &round.slots {
                let mark = if slot.collapsed { " collapsed" } else { "" };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("Word {} ({} letters) ", slot.index + 1, slot.length),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(entropy_bar(slot.entropy, 12), Style::default().fg(Color::Green)),
                    Span::raw(format!(
                        " {:.3} bits, {} left{mark}",
                        slot.entropy, slot.remaining
                    )),
                ]));

                let top: Vec<String> = slot
                    .top
                    .iter()
                    .take(4)
                    .map(|(w, p)| format!("{w} {p:.2}"))
                    .collect();
                lines.push(Line::from(Span::styled(
                    format!("  {}", top.join("  ")),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Revealed gauge
            Constraint::Length(4),      // Letter ranking
            Constraint::Percentage(50), // History
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_ranking(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (known, total) = app.round.as_ref().map_or((0, 0), |r| {
        let unknown = r.phrase.chars().filter(|&c| c == '*').count();
        (r.phrase.chars().count() - unknown, r.phrase.chars().count())
    });
    let known = if app.outcome.is_some() { total } else { known };
    let pct = if total > 0 { known * 100 / total } else { 0 };
    let entropy = app.round.as_ref().map_or(0.0, |r| r.joint_entropy);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Revealed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(pct as u16)
        .label(format!("{known}/{total} | joint entropy {entropy:.2} bits"));
    f.render_widget(gauge, area);
}

fn render_ranking(f: &mut Frame, app: &App, area: Rect) {
    let text = app.round.as_ref().map_or_else(String::new, |round| {
        round
            .ranking
            .iter()
            .take(6)
            .map(|s| format!("{} {:.3}", s.letter, s.score))
            .collect::<Vec<_>>()
            .join("  ")
    });

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Best Letters ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(8)
        .map(|record| ListItem::new(describe_guess(record)))
        .collect();

    let history = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn prompt_title(prompt: &Prompt) -> String {
    match prompt {
        Prompt::Length => " How many characters in the phrase (including spaces)? ".to_string(),
        Prompt::Letter { letter, number } if *letter == SPACE => {
            format!(" Guess #{number}: Is there a space? (N or Y, 3, 4) ")
        }
        Prompt::Letter { letter, number } => {
            format!(" Guess #{number}: Is there a(n) {letter}? (N or Y, 3, 4) ")
        }
        Prompt::Phrase { phrase, number } => {
            format!(" Guess #{number}: Is the phrase {phrase}? (Y/N) ")
        }
        Prompt::Finished => " 🎉 SOLVED! Press any key to exit ".to_string(),
    }
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.prompt {
        Prompt::Finished => Color::Green,
        Prompt::Phrase { .. } => Color::Cyan,
        _ => Color::Yellow,
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(prompt_title(&app.prompt))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let guesses = app
        .outcome
        .as_ref()
        .map(|o| o.guesses_used)
        .or_else(|| app.round.as_ref().map(|r| r.guesses_used))
        .unwrap_or(0);

    let status = Paragraph::new(format!(
        "Guesses used: {guesses} | Enter: Submit | Esc/Ctrl-C: Quit"
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessResponse, WordEntry};
    use crate::solver::{Session, SolverConfig};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_length_prompt() {
        let app = App::new();
        let text = screen(&app);
        assert!(text.contains("How many characters"));
    }

    #[test]
    fn renders_round_state() {
        let corpus = vec![WordEntry::new("CAT", 10.0), WordEntry::new("CAR", 5.0)];
        let mut session =
            Session::new(3, GuessResponse::Negative, &corpus, SolverConfig::default()).unwrap();
        let round = session.prepare_round().unwrap();

        let mut app = App::new();
        app.phrase_len = Some(3);
        app.prompt = Prompt::Letter {
            letter: 'T',
            number: 2,
        };
        app.round = Some(round);
        let text = screen(&app);

        assert!(text.contains("Is there a(n) T?"));
        assert!(text.contains("Word 1 (3 letters)"));
        assert!(text.contains("CAT"));
    }

    #[test]
    fn prompt_titles() {
        let space = Prompt::Letter {
            letter: SPACE,
            number: 1,
        };
        assert!(prompt_title(&space).contains("Is there a space?"));
        let phrase = Prompt::Phrase {
            phrase: "GOOD MORNING".to_string(),
            number: 4,
        };
        assert!(prompt_title(&phrase).contains("Guess #4: Is the phrase GOOD MORNING?"));
    }
}
