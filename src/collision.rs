//! Ship and bullet collision rules and the points they award

use crate::config::{HIT_POINTS, OBSTACLE_DAMAGE};
use crate::entities::{GridObject, PowerKind, Ship, Unit, UnitKind};

/// Result of an obstacle landing on the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Plain obstacle: the ship took damage
    Damage,
    /// Power-up picked up
    PowerUp(PowerKind),
    /// Already consumed, nothing happened
    None,
}

pub fn occupies_ship_cell(ship: &Ship, unit: &Unit) -> bool {
    unit.position() == ship.position()
}

/// Applies `obstacle` to the ship and marks it consumed. A consumed obstacle
/// has no further effect.
pub fn resolve_ship_collision(ship: &mut Ship, obstacle: &mut Unit) -> Impact {
    if obstacle.is_consumed() {
        return Impact::None;
    }

    let impact = match obstacle.kind {
        UnitKind::PowerUp(kind) => {
            ship.apply_power(kind);
            Impact::PowerUp(kind)
        }
        UnitKind::Obstacle => {
            ship.take_damage(OBSTACLE_DAMAGE);
            Impact::Damage
        }
        UnitKind::Bullet | UnitKind::Explosion { .. } => return Impact::None,
    };

    obstacle.consume();
    impact
}

/// What the bullets did this tick
#[derive(Debug, Default)]
pub struct BulletOutcome {
    /// Bullets that missed, moved up and are still on the field
    pub survivors: Vec<Unit>,
    pub explosions: Vec<Unit>,
    pub points: u32,
}

/// Resolves every bullet against `obstacles`, removing whatever was hit.
///
/// A bullet hits all obstacles in its column at its row or the row above,
/// since both move within the same tick. Each hitting bullet is spent, leaves
/// one explosion above its position and scores `HIT_POINTS`. Missing bullets
/// rise one row.
pub fn resolve_bullet_hits(bullets: Vec<Unit>, obstacles: &mut Vec<Unit>) -> BulletOutcome {
    let mut outcome = BulletOutcome::default();

    for mut bullet in bullets {
        if obstacles.iter().any(|o| bullet.lines_up_with(o)) {
            obstacles.retain(|o| !bullet.lines_up_with(o));
            outcome
                .explosions
                .push(Unit::explosion(bullet.x, bullet.y.saturating_sub(1)));
            outcome.points += HIT_POINTS;
        } else if bullet.rise() {
            outcome.survivors.push(bullet);
        }
    }

    outcome
}
