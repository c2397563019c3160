use ratatui::style::Color;

use super::unit::{BLANK, Unit, UnitKind};

/// An explosion is dropped once it would enter this frame
pub const FINAL_FRAME: u8 = 4;

impl Unit {
    pub fn explosion(x: u16, y: u16) -> Self {
        Self::custom(x, y, Color::White, 'X', UnitKind::Explosion { frame: 1 })
    }

    /// Steps the animation: (White, X) -> (Yellow, #) -> (Red, x) -> blank.
    /// Other kinds are left untouched.
    pub fn next_frame(&mut self) {
        let UnitKind::Explosion { frame } = &mut self.kind else {
            return;
        };
        *frame = frame.saturating_add(1);

        match *frame {
            2 => {
                self.color = Color::Yellow;
                self.symbol = '#';
            }
            3 => {
                self.color = Color::Red;
                self.symbol = 'x';
            }
            _ => self.symbol = BLANK,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.kind, UnitKind::Explosion { frame } if frame >= FINAL_FRAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explosion_new() {
        let explosion = Unit::explosion(4, 5);
        assert_eq!(explosion.kind, UnitKind::Explosion { frame: 1 });
        assert_eq!((explosion.color, explosion.symbol), (Color::White, 'X'));
        assert!(!explosion.is_finished());
    }

    #[test]
    fn test_explosion_sequence() {
        let mut explosion = Unit::explosion(4, 5);
        let mut seen = vec![(explosion.color, explosion.symbol)];
        while !explosion.is_finished() {
            explosion.next_frame();
            seen.push((explosion.color, explosion.symbol));
        }

        assert_eq!(
            seen,
            vec![
                (Color::White, 'X'),
                (Color::Yellow, '#'),
                (Color::Red, 'x'),
                (Color::Red, BLANK),
            ]
        );
        assert_eq!(explosion.kind, UnitKind::Explosion { frame: FINAL_FRAME });
        assert_eq!((explosion.x, explosion.y), (4, 5));
    }

    #[test]
    fn test_next_frame_ignores_other_kinds() {
        let mut bullet = Unit::bullet(1, 1);
        bullet.next_frame();
        assert_eq!(bullet, Unit::bullet(1, 1));
        assert!(!bullet.is_finished());
    }
}
