use ratatui::prelude::*;

use crate::game::consts::{GRID_HEIGHT, GRID_WIDTH};
use crate::game::{Position, Rgb, Snapshot};

/// Terminal columns per grid cell; keeps cells roughly square.
pub const CELL_WIDTH: u16 = 2;
pub const BOARD_WIDTH: u16 = GRID_WIDTH as u16 * CELL_WIDTH;
pub const BOARD_HEIGHT: u16 = GRID_HEIGHT as u16;

const BACKGROUND: Color = Color::Rgb(0, 0, 0);
const FILLED: &str = "██";
const MISSILE: &str = "▐▌";
const EMPTY: &str = "  ";

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn on_grid(p: Position) -> bool {
    p.x >= 0 && p.y >= 0 && p.x < GRID_WIDTH && p.y < GRID_HEIGHT
}

/// One `Line` per grid row. Anything off the grid is clipped.
pub fn board_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let blank = (EMPTY, Style::default().bg(BACKGROUND));
    let mut grid = vec![vec![blank; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
    let mut put = |p: Position, glyph: &'static str, rgb: Rgb| {
        if on_grid(p) {
            grid[p.y as usize][p.x as usize] = (glyph, Style::default().fg(color(rgb)).bg(BACKGROUND));
        }
    };

    for missile in &snapshot.missiles {
        put(*missile, MISSILE, snapshot.missile_color);
    }
    for invader in &snapshot.invaders {
        put(invader.pos, FILLED, invader.color);
    }
    if snapshot.ship_visible {
        for &cell in &snapshot.ship_cells {
            put(cell, FILLED, snapshot.ship_color);
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(glyph, style)| Span::styled(glyph, style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    fn cell(lines: &[Line], p: Position) -> String {
        lines[p.y as usize].spans[p.x as usize].content.to_string()
    }

    #[test]
    fn board_has_one_line_per_row() {
        let lines = board_lines(&GameState::new().snapshot());
        assert_eq!(lines.len(), GRID_HEIGHT as usize);
        assert!(lines.iter().all(|l| l.width() == BOARD_WIDTH as usize));
    }

    #[test]
    fn invaders_drawn_and_offgrid_clipped() {
        let snap = GameState::new().snapshot();
        let lines = board_lines(&snap);
        assert_eq!(cell(&lines, Position::new(1, 1)), FILLED);
        assert_eq!(cell(&lines, Position::new(2, 1)), EMPTY);
        // the eighth invader of row one sits past the right edge
        assert!(snap.invaders.iter().any(|i| i.pos.x >= GRID_WIDTH));
    }

    #[test]
    fn ship_only_drawn_when_in_play() {
        let mut state = GameState::new();
        let ready = board_lines(&state.snapshot());
        assert_eq!(cell(&ready, Position::new(10, 18)), EMPTY);

        state.start();
        let playing = board_lines(&state.snapshot());
        assert_eq!(cell(&playing, Position::new(10, 18)), FILLED);
        assert_eq!(cell(&playing, Position::new(9, 19)), FILLED);
    }
}
