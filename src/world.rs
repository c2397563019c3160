use log::debug;
use rand::Rng;

use crate::audio::Cue;
use crate::collision::{Impact, occupies_ship_cell, resolve_bullet_hits, resolve_ship_collision};
use crate::config::{Bounds, DODGE_POINTS, POWER_UP_CHANCE};
use crate::entities::{GridObject, Ship, Unit};
use crate::input::InputAction;

/// Everything that lives on the grid during one session
#[derive(Debug, Clone)]
pub struct World {
    pub bounds: Bounds,
    pub ship: Ship,
    pub obstacles: Vec<Unit>,
    pub bullets: Vec<Unit>,
    pub explosions: Vec<Unit>,
    pub score: u32,
    cues: Vec<Cue>,
}

impl World {
    pub fn new(bounds: Bounds) -> Self {
        let (x, y) = bounds.ship_start();
        Self {
            bounds,
            ship: Ship::new(x, y),
            obstacles: Vec::new(),
            bullets: Vec::new(),
            explosions: Vec::new(),
            score: 0,
            cues: Vec::new(),
        }
    }

    /// Fresh session: ship re-centred with full stats, field emptied
    pub fn reset(&mut self) {
        *self = Self::new(self.bounds);
    }

    /// Drops one obstacle (or power-up) into a random column of the top row
    pub fn spawn_obstacle(&mut self, rng: &mut impl Rng) {
        let x = rng.random_range(0..self.bounds.spawn_columns());
        self.obstacles
            .push(Unit::spawn_falling(x, POWER_UP_CHANCE, rng));
    }

    pub fn apply_action(&mut self, action: InputAction) {
        let bounds = self.bounds;
        match action {
            InputAction::MoveLeft => self.ship.move_left(0),
            InputAction::MoveRight => self.ship.move_right(bounds.ship_max_x()),
            InputAction::MoveUp => self.ship.move_up(bounds.ship_min_y()),
            InputAction::MoveDown => self.ship.move_down(bounds.ship_max_y()),
            InputAction::Fire => {
                if let Some(bullet) = self.ship.try_fire() {
                    self.bullets.push(bullet);
                    self.cues.push(Cue::Fire);
                }
            }
        }
    }

    /// Explosion at a random cell next to the ship, kept inside the field
    pub fn spawn_death_explosion(&mut self, rng: &mut impl Rng) {
        let x = jitter(self.ship.x, self.bounds.width.saturating_sub(1), rng);
        let y = jitter(self.ship.y, self.bounds.field_bottom().saturating_sub(1), rng);

        self.explosions.push(Unit::explosion(x, y));
        self.cues.push(Cue::Explosion);
    }

    /// Advances every entity one tick.
    ///
    /// Each collection is built fresh from the current one and swapped in at
    /// the end, so nothing is removed from a list while it is being walked.
    pub fn advance(&mut self) {
        let mut next_obstacles = Vec::with_capacity(self.obstacles.len());
        let mut next_explosions = Vec::new();
        let field_bottom = self.bounds.field_bottom();

        // Obstacles fall, then hit the ship or get dodged
        for mut obstacle in std::mem::take(&mut self.obstacles) {
            obstacle.fall();

            if occupies_ship_cell(&self.ship, &obstacle) {
                match resolve_ship_collision(&mut self.ship, &mut obstacle) {
                    Impact::Damage => {
                        debug!(
                            "Ship hit at ({}, {}), health {}",
                            obstacle.x, obstacle.y, self.ship.health
                        );
                        next_explosions
                            .push(Unit::explosion(obstacle.x, obstacle.y.saturating_sub(1)));
                        self.cues.push(Cue::Explosion);
                    }
                    Impact::PowerUp(kind) => {
                        debug!("Picked up {} power-up", kind.get_name());
                        self.cues.push(Cue::PowerUp);
                    }
                    Impact::None => {}
                }
            }

            if obstacle.is_consumed() {
                continue;
            }
            if obstacle.has_passed(field_bottom) {
                self.score += DODGE_POINTS;
            } else {
                next_obstacles.push(obstacle);
            }
        }

        // Bullets against what is left
        let outcome = resolve_bullet_hits(std::mem::take(&mut self.bullets), &mut next_obstacles);
        self.score += outcome.points;
        for _ in &outcome.explosions {
            self.cues.push(Cue::Explosion);
        }
        next_explosions.extend(outcome.explosions);

        // Older explosions animate; this tick's stay on their first frame
        for mut explosion in std::mem::take(&mut self.explosions) {
            explosion.next_frame();
            if !explosion.is_finished() {
                next_explosions.push(explosion);
            }
        }

        self.obstacles = next_obstacles;
        self.bullets = outcome.survivors;
        self.explosions = next_explosions;
    }

    /// Takes the audio cues raised since the last call
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }
}

/// A coordinate within one cell of `v`, capped at `max`
fn jitter(v: u16, max: u16, rng: &mut impl Rng) -> u16 {
    let lo = v.saturating_sub(1).min(max);
    let hi = v.saturating_add(1).min(max);
    rng.random_range(lo..=hi)
}
