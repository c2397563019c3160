use ratatui::style::Color;

use super::power::PowerKind;
use super::unit::{GridObject, Unit};
use crate::config::{
    AMMO_BONUS, HEALTH_BONUS, MAX_SPEED, SPEED_PENALTY, START_AMMO, START_HEALTH,
};

pub const SHIP_SYMBOL: char = '^';

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub x: u16,
    pub y: u16,
    pub symbol: char,
    pub color: Color,
    /// Higher is faster; clamped to `0..=MAX_SPEED` at the end of each tick
    pub speed: i32,
    /// May dip below zero before the alive check ends the round
    pub health: i32,
    pub ammo: u32,
}

impl Ship {
    /// A ship at full health and ammo, standing still
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            symbol: SHIP_SYMBOL,
            color: Color::Red,
            speed: 0,
            health: START_HEALTH,
            ammo: START_AMMO,
        }
    }

    /// Moves one column left, never past `min_x`
    pub fn move_left(&mut self, min_x: u16) {
        if self.x > min_x {
            self.x -= 1;
        }
    }

    /// Moves one column right, never past `max_x`
    pub fn move_right(&mut self, max_x: u16) {
        if self.x < max_x {
            self.x += 1;
        }
    }

    /// Moves one row up, stopping at `min_y`
    pub fn move_up(&mut self, min_y: u16) {
        if self.y > min_y {
            self.y -= 1;
        }
    }

    /// Moves one row down, stopping at `max_y`
    pub fn move_down(&mut self, max_y: u16) {
        if self.y < max_y {
            self.y += 1;
        }
    }

    /// Fires a bullet from the row above the ship if there is ammo left
    pub fn try_fire(&mut self) -> Option<Unit> {
        if self.ammo == 0 {
            return None;
        }
        self.ammo -= 1;
        Some(Unit::bullet(self.x, self.y.saturating_sub(1)))
    }

    /// Subtracts damage from health without any floor
    pub fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
    }

    /// Applies a picked-up power-up to the ship's stats
    pub fn apply_power(&mut self, kind: PowerKind) {
        match kind {
            PowerKind::Ammo => self.ammo += AMMO_BONUS,
            PowerKind::Speed => self.speed -= SPEED_PENALTY,
            PowerKind::Health => self.health += HEALTH_BONUS,
        }
    }

    /// Per-tick difficulty ramp
    pub fn ramp_speed(&mut self) {
        if self.speed < MAX_SPEED {
            self.speed += 1;
        }
        self.speed = self.speed.clamp(0, MAX_SPEED);
    }

    /// Check if the ship still has health left
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl GridObject for Ship {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::UnitKind;

    #[test]
    fn test_ship_new() {
        let ship = Ship::new(29, 24);
        assert_eq!(ship.position(), (29, 24));
        assert_eq!(ship.health, 100);
        assert_eq!(ship.ammo, 20);
        assert_eq!(ship.speed, 0);
        assert_eq!(ship.symbol, '^');
        assert!(ship.is_alive());
    }

    #[test]
    fn test_ship_movement_clamped() {
        let mut ship = Ship::new(0, 2);
        ship.move_left(0);
        ship.move_up(2);
        assert_eq!(ship.position(), (0, 2));

        ship.x = 58;
        ship.y = 24;
        ship.move_right(58);
        ship.move_down(24);
        assert_eq!(ship.position(), (58, 24));

        ship.move_left(0);
        ship.move_up(2);
        assert_eq!(ship.position(), (57, 23));
    }

    #[test]
    fn test_fire_spawns_bullet_above() {
        let mut ship = Ship::new(10, 20);
        let bullet = ship.try_fire().expect("ship has ammo");
        assert_eq!(bullet.kind, UnitKind::Bullet);
        assert_eq!((bullet.x, bullet.y), (10, 19));
        assert_eq!(ship.ammo, 19);
    }

    #[test]
    fn test_fire_without_ammo_is_noop() {
        let mut ship = Ship::new(10, 20);
        ship.ammo = 0;
        assert!(ship.try_fire().is_none());
        assert_eq!(ship.ammo, 0);
    }

    #[test]
    fn test_apply_power() {
        let mut ship = Ship::new(10, 20);
        ship.speed = 80;
        ship.apply_power(PowerKind::Ammo);
        ship.apply_power(PowerKind::Speed);
        ship.apply_power(PowerKind::Health);
        assert_eq!(ship.ammo, 30);
        assert_eq!(ship.speed, 30);
        assert_eq!(ship.health, 120);
    }

    #[test]
    fn test_health_can_go_negative() {
        let mut ship = Ship::new(10, 20);
        ship.health = 10;
        ship.take_damage(20);
        assert_eq!(ship.health, -10);
        assert!(!ship.is_alive());
    }

    #[test]
    fn test_ramp_speed_clamps() {
        let mut ship = Ship::new(10, 20);
        ship.speed = 169;
        ship.ramp_speed();
        assert_eq!(ship.speed, 170);
        ship.ramp_speed();
        assert_eq!(ship.speed, 170);

        ship.speed = -50;
        ship.ramp_speed();
        assert_eq!(ship.speed, 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_ship_stays_in_bounds(
                moves in prop::collection::vec(0u8..4, 0..200)
            ) {
                let mut ship = Ship::new(29, 24);
                for m in moves {
                    match m {
                        0 => ship.move_left(0),
                        1 => ship.move_right(58),
                        2 => ship.move_up(2),
                        _ => ship.move_down(24),
                    }
                    prop_assert!(ship.x <= 58);
                    prop_assert!((2..=24).contains(&ship.y));
                }
            }

            #[test]
            fn test_ammo_never_negative(shots in 0usize..60, start in 0u32..30) {
                let mut ship = Ship::new(29, 24);
                ship.ammo = start;
                let fired = (0..shots).filter_map(|_| ship.try_fire()).count();
                prop_assert_eq!(fired as u32, start.min(shots as u32));
                prop_assert_eq!(ship.ammo, start - fired as u32);
            }

            #[test]
            fn test_speed_stays_clamped(powers in prop::collection::vec(any::<bool>(), 0..300)) {
                let mut ship = Ship::new(29, 24);
                for speed_power in powers {
                    if speed_power {
                        ship.apply_power(PowerKind::Speed);
                    }
                    ship.ramp_speed();
                    prop_assert!((0..=MAX_SPEED).contains(&ship.speed));
                }
            }
        }
    }
}
