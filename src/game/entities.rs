use super::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

/// Plain RGB triple so the core stays free of any terminal colour type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const SHIP_COLOR: Rgb = Rgb(0, 0, 255);
pub const MISSILE_COLOR: Rgb = Rgb(255, 200, 0);
pub const INVADER_COLOR: Rgb = Rgb(0, 255, 0);

/// Horizontal step requested for the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    pub pos: Position,
}

impl Ship {
    pub fn spawn() -> Self {
        Ship { pos: Position::new(SHIP_START_X, SHIP_ROW) }
    }

    /// Grid cells covered by the ship, including any that fall off the grid.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        SHIP_SHAPE
            .iter()
            .map(move |&(dx, dy)| Position::new(self.pos.x + dx, self.pos.y + dy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Missile {
    pub pos: Position,
}

impl Missile {
    pub fn new(x: i32, y: i32) -> Self {
        Missile { pos: Position::new(x, y) }
    }

    pub fn advance(&mut self) {
        self.pos.y -= 1;
    }

    pub fn is_spent(&self) -> bool {
        self.pos.y <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invader {
    pub pos: Position,
    pub moving_right: bool,
    pub color: Rgb,
}

impl Invader {
    pub fn new(x: i32, y: i32) -> Self {
        Invader {
            pos: Position::new(x, y),
            moving_right: true,
            color: INVADER_COLOR,
        }
    }

    /// One step sideways; on touching a side wall drop a row and turn round.
    pub fn advance(&mut self) {
        if self.moving_right {
            self.pos.x += 1;
            if self.pos.x + 1 >= GRID_WIDTH {
                self.pos.y += 1;
                self.moving_right = false;
            }
        } else {
            self.pos.x -= 1;
            if self.pos.x <= 0 {
                self.pos.y += 1;
                self.moving_right = true;
            }
        }
    }

    pub fn is_hit_by(&self, missile: &Missile) -> bool {
        let m = missile.pos;
        m.y == self.pos.y && m.x >= self.pos.x && m.x < self.pos.x + INVADER_HITBOX_WIDTH
    }

    pub fn has_landed(&self) -> bool {
        self.pos.y >= FLOOR_ROW
    }
}

/// Formation size for a wave index: `8 + wave * 4`, capped by the 5x8 layout.
pub fn invader_count(wave: u32) -> usize {
    (INVADERS_BASE + wave as usize * INVADERS_PER_WAVE).min(MAX_INVADERS)
}

/// Lay out a wave row-major from the top-left corner.
pub fn create_invaders(wave: u32) -> Vec<Invader> {
    let count = invader_count(wave);
    let mut invaders = Vec::with_capacity(count);
    'rows: for row in 0..FORMATION_ROWS {
        let y = FORMATION_TOP + row as i32 * FORMATION_ROW_GAP;
        for col in 0..FORMATION_COLS {
            if invaders.len() >= count {
                break 'rows;
            }
            let x = FORMATION_LEFT + col as i32 * FORMATION_COL_GAP;
            invaders.push(Invader::new(x, y));
        }
    }
    invaders
}
