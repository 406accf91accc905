//! Fixed rules of the game. Nothing here is read from config except the
//! two timing defaults, which `Config` starts from.

/// Number of columns in the play field.
pub const GRID_WIDTH: i32 = 21;
/// Number of rows in the play field.
pub const GRID_HEIGHT: i32 = 20;

pub const DEFAULT_TICK_MS: u64 = 20;
/// How long the "Wave Cleared!" banner holds the next wave back.
pub const DEFAULT_WAVE_PAUSE_MS: u64 = 1200;

pub const FORMATION_ROWS: usize = 5;
pub const FORMATION_COLS: usize = 8;
pub const MAX_INVADERS: usize = FORMATION_ROWS * FORMATION_COLS;
pub const INVADERS_BASE: usize = 8;
pub const INVADERS_PER_WAVE: usize = 4;

// Formation layout
pub const FORMATION_TOP: i32 = 1;
pub const FORMATION_LEFT: i32 = 1;
pub const FORMATION_ROW_GAP: i32 = 2;
pub const FORMATION_COL_GAP: i32 = 3;

pub const KILL_SCORE: u32 = 10;
pub const WAVE_CLEAR_SCORE: u32 = 100;

/// Columns covered by an invader's hit box, starting at its own x.
/// Wider than the single cell it is drawn as.
pub const INVADER_HITBOX_WIDTH: i32 = 3;

/// An invader on or below this row ends the run.
pub const FLOOR_ROW: i32 = GRID_HEIGHT - 2;

/// Cells of the ship relative to its anchor.
pub const SHIP_SHAPE: [(i32, i32); 6] = [(-1, 0), (0, 0), (1, 0), (0, -1), (-1, 1), (1, 1)];

/// The anchor cell may sit on either edge column; the wings are clipped
/// when drawn.
pub const SHIP_WIDTH_ADJUSTMENT: i32 = 0;
pub const SHIP_MIN_X: i32 = 0;
pub const SHIP_MAX_X: i32 = GRID_WIDTH - 1 - SHIP_WIDTH_ADJUSTMENT;
pub const SHIP_START_X: i32 = (GRID_WIDTH - 1) / 2;
pub const SHIP_ROW: i32 = GRID_HEIGHT - 1;
