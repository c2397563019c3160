use rand::Rng;
use ratatui::style::Color;

use super::power::PowerChoice;
use super::unit::{Unit, UnitKind};

/// Debris glyphs falling through hyperspace
pub const OBSTACLE_GLYPHS: [char; 6] = ['!', '.', ':', ';', '\'', '"'];

pub const POWER_UP_SYMBOL: char = '@';

impl Unit {
    /// A plain falling obstacle with a random glyph
    pub fn obstacle(x: u16, y: u16, rng: &mut impl Rng) -> Self {
        let symbol = OBSTACLE_GLYPHS[rng.random_range(0..OBSTACLE_GLYPHS.len())];
        Self::custom(x, y, Color::Cyan, symbol, UnitKind::Obstacle)
    }

    /// A falling power-up; `Random` is resolved here, once
    pub fn power_up(x: u16, y: u16, choice: PowerChoice, rng: &mut impl Rng) -> Self {
        let kind = choice.resolve(rng);
        Self::custom(x, y, kind.color(), POWER_UP_SYMBOL, UnitKind::PowerUp(kind))
    }

    /// Spawns either an obstacle or, with `power_up_chance`, a random power-up
    pub fn spawn_falling(x: u16, power_up_chance: f64, rng: &mut impl Rng) -> Self {
        if rng.random_bool(power_up_chance) {
            Self::power_up(x, 0, PowerChoice::Random, rng)
        } else {
            Self::obstacle(x, 0, rng)
        }
    }

    /// Drops one row
    pub fn fall(&mut self) {
        self.y = self.y.saturating_add(1);
    }

    /// True once the unit has reached the HUD separator row
    pub fn has_passed(&self, field_bottom: u16) -> bool {
        self.y >= field_bottom
    }
}
