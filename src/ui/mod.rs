pub mod board;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::{Phase, Snapshot};

use board::{board_lines, BOARD_HEIGHT, BOARD_WIDTH};

const ACCENT: Color = Color::Rgb(80, 255, 80);
const DIM: Color = Color::Rgb(120, 120, 140);
const KEY: Color = Color::Rgb(80, 200, 255);

pub fn render(frame: &mut Frame, app: &App) {
    match app.view.as_ref() {
        Some(snapshot) => draw(frame, snapshot, app.paused),
        None => {
            let waiting = Paragraph::new("Starting...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(DIM));
            frame.render_widget(waiting, frame.area());
        }
    }
}

/// Draw a full frame for one snapshot.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, paused: bool) {
    let area = centered(frame.area(), BOARD_WIDTH + 2, BOARD_HEIGHT + 4);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT))
        .title(" Space Invaders ")
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Score line
            Constraint::Length(BOARD_HEIGHT), // Board
            Constraint::Length(1),            // Controls
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(status_line(snapshot, paused)), chunks[0]);
    frame.render_widget(Paragraph::new(board_lines(snapshot)), chunks[1]);
    frame.render_widget(Paragraph::new(help_line(snapshot.phase, paused)), chunks[2]);

    if let Some(text) = snapshot.phase.banner() {
        render_banner(frame, chunks[1], text, snapshot.phase);
    }
}

fn status_line(snapshot: &Snapshot, paused: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" Wave: {} ", snapshot.wave),
            Style::default().fg(Color::Green),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Invaders: {} ", snapshot.invaders.len()),
            Style::default().fg(Color::Rgb(255, 80, 80)),
        ),
    ];
    if paused {
        spans.push(Span::styled(
            "| PAUSED ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!("Score: {}", snapshot.score),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ));
    Line::from(spans)
}

fn help_line(phase: Phase, paused: bool) -> Line<'static> {
    let bindings: &[(&str, &str)] = match phase {
        Phase::Ready => &[("Enter", "Start"), ("q", "Quit")],
        Phase::GameOver | Phase::Won => &[("Enter", "Try Again"), ("q", "Quit")],
        Phase::Playing | Phase::WaveCleared { .. } if paused => {
            &[("p", "Resume"), ("r", "Reset"), ("q", "Quit")]
        }
        Phase::Playing | Phase::WaveCleared { .. } => &[
            ("\u{2190}\u{2192}", "Move"),
            ("Space", "Fire"),
            ("p", "Pause"),
            ("r", "Reset"),
            ("q", "Quit"),
        ],
    };
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, label)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))));
        }
        spans.push(Span::styled(format!("{key} "), Style::default().fg(KEY).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!("{label} "), Style::default().fg(DIM)));
    }
    Line::from(spans)
}

fn render_banner(frame: &mut Frame, board: Rect, text: &str, phase: Phase) {
    let fg = match phase {
        Phase::GameOver => Color::Red,
        Phase::Won => Color::Rgb(255, 215, 0),
        _ => Color::White,
    };
    let width = (text.chars().count() as u16 + 4).min(board.width);
    let area = centered(board, width, 3);
    frame.render_widget(Clear, area);
    let banner = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(fg)),
        );
    frame.render_widget(banner, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use ratatui::backend::TestBackend;

    fn rendered(snapshot: &Snapshot, paused: bool) -> String {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, snapshot, paused)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_score_and_wave() {
        let text = rendered(&GameState::new().snapshot(), false);
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Wave: 1"));
        assert!(text.contains("Start"));
    }

    #[test]
    fn game_over_banner() {
        let mut snap = GameState::new().snapshot();
        snap.phase = Phase::GameOver;
        let text = rendered(&snap, false);
        assert!(text.contains("Game Over"));
        assert!(text.contains("Try Again"));
    }

    #[test]
    fn paused_marker() {
        let mut state = GameState::new();
        state.start();
        let text = rendered(&state.snapshot(), true);
        assert!(text.contains("PAUSED"));
        assert!(text.contains("Resume"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(8, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let snap = GameState::new().snapshot();
        terminal.draw(|f| draw(f, &snap, false)).unwrap();
    }
}
