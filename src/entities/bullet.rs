use ratatui::style::Color;

use super::unit::{Unit, UnitKind};

pub const BULLET_SYMBOL: char = 'o';

impl Unit {
    pub fn bullet(x: u16, y: u16) -> Self {
        Self::custom(x, y, Color::Magenta, BULLET_SYMBOL, UnitKind::Bullet)
    }

    /// Moves up one row. Returns false once the bullet has left the field.
    pub fn rise(&mut self) -> bool {
        self.y = self.y.saturating_sub(1);
        self.y > 0
    }

    /// Whether `other` sits in this bullet's column, at its row or the row above
    pub fn lines_up_with(&self, other: &Unit) -> bool {
        other.x == self.x && (other.y == self.y || Some(other.y) == self.y.checked_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_bullet_new() {
        let bullet = Unit::bullet(10, 10);
        assert_eq!(bullet.kind, UnitKind::Bullet);
        assert_eq!(bullet.symbol, 'o');
        assert_eq!(bullet.color, Color::Magenta);
    }

    #[test]
    fn test_bullet_rises() {
        let mut bullet = Unit::bullet(10, 10);
        assert!(bullet.rise());
        assert_eq!(bullet.y, 9);
    }

    #[test]
    fn test_bullet_leaves_at_top_row() {
        let mut bullet = Unit::bullet(10, 2);
        assert!(bullet.rise());
        assert!(!bullet.rise());
        assert_eq!(bullet.y, 0);
    }

    #[test]
    fn test_lines_up_with_same_and_next_row() {
        let mut rng = StdRng::seed_from_u64(0);
        let bullet = Unit::bullet(8, 10);
        assert!(bullet.lines_up_with(&Unit::obstacle(8, 10, &mut rng)));
        assert!(bullet.lines_up_with(&Unit::obstacle(8, 9, &mut rng)));
        assert!(!bullet.lines_up_with(&Unit::obstacle(8, 8, &mut rng)));
        assert!(!bullet.lines_up_with(&Unit::obstacle(8, 11, &mut rng)));
        assert!(!bullet.lines_up_with(&Unit::obstacle(9, 10, &mut rng)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_bullet_moves_up(x in 0u16..60, y in 1u16..25) {
                let mut bullet = Unit::bullet(x, y);
                let alive = bullet.rise();
                prop_assert_eq!(bullet.y, y - 1);
                prop_assert_eq!(alive, y > 1);
            }
        }
    }
}
