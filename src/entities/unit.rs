use ratatui::style::Color;

use super::power::PowerKind;

/// Symbol of a consumed or finished unit
pub const BLANK: char = ' ';

/// Anything that occupies one cell of the grid
pub trait GridObject {
    fn position(&self) -> (u16, u16);
    fn symbol(&self) -> char;
    fn color(&self) -> Color;

    /// A blanked symbol marks an object whose effect has already been applied
    fn is_consumed(&self) -> bool {
        self.symbol() == BLANK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Obstacle,
    PowerUp(PowerKind),
    Bullet,
    Explosion { frame: u8 },
}

/// A single-cell entity living in one of the world's collections
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub x: u16,
    pub y: u16,
    pub symbol: char,
    pub color: Color,
    pub kind: UnitKind,
}

impl Unit {
    /// Creates a unit with an explicit look
    pub fn custom(x: u16, y: u16, color: Color, symbol: char, kind: UnitKind) -> Self {
        Self {
            x,
            y,
            symbol,
            color,
            kind,
        }
    }

    pub fn is_power_up(&self) -> bool {
        matches!(self.kind, UnitKind::PowerUp(_))
    }

    pub fn consume(&mut self) {
        self.symbol = BLANK;
    }
}

impl GridObject for Unit {
    fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    fn symbol(&self) -> char {
        self.symbol
    }

    fn color(&self) -> Color {
        self.color
    }
}
