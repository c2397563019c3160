use color_eyre::Result;
use log::info;
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::Backend};
use std::thread;
use std::time::Duration;

use crate::audio::AudioCue;
use crate::config::{BASE_DELAY_MS, Bounds, DEATH_EXPLOSION_CUTOFF, DEATH_FRAME_DELAY, DEATH_FRAMES};
use crate::entities::GameState;
use crate::input::{InputManager, KeySource};
use crate::renderer::{GameRenderer, RenderView};
use crate::world::World;

/// Delay before the next Playing tick: faster ships tick sooner
pub fn tick_delay(speed: i32) -> Duration {
    let ms = (BASE_DELAY_MS as i64 - speed as i64).max(1);
    Duration::from_millis(ms as u64)
}

/// The session controller: owns the world and drives the
/// Playing -> Dying -> GameOver -> Playing/Terminated cycle.
pub struct App<K: KeySource, R: Rng = StdRng> {
    game_state: GameState,
    world: World,
    /// Remaining frames of the death animation
    death_frames: u8,
    rng: R,
    input_manager: InputManager<K>,
    renderer: GameRenderer,
    audio: Box<dyn AudioCue>,
}

impl<K: KeySource, R: Rng> App<K, R> {
    pub fn new(bounds: Bounds, keys: K, audio: Box<dyn AudioCue>, rng: R) -> Self {
        Self {
            game_state: GameState::Playing,
            world: World::new(bounds),
            death_frames: 0,
            rng,
            input_manager: InputManager::new(keys),
            renderer: GameRenderer::new(),
            audio,
        }
    }

    /// Run the game until the player declines a replay.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Session started");
        while self.game_state != GameState::Terminated {
            let delay = self.step(terminal)?;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        info!("Player quit");
        Ok(())
    }

    /// Executes one tick of the current state and returns how long to wait
    /// before the next one.
    pub fn step<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Duration> {
        match self.game_state {
            GameState::Playing => self.play_tick(terminal),
            GameState::Dying => self.death_tick(terminal),
            GameState::GameOver => self.prompt_replay(terminal),
            GameState::Terminated => Ok(Duration::ZERO),
        }
    }

    fn play_tick<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Duration> {
        self.world.spawn_obstacle(&mut self.rng);

        if let Some(action) = self.input_manager.poll_action()? {
            self.world.apply_action(action);
        }
        self.world.advance();
        self.play_cues();
        self.draw(terminal)?;

        self.world.ship.ramp_speed();

        if !self.world.ship.is_alive() {
            info!(
                "Ship destroyed, score {} health {}",
                self.world.score, self.world.ship.health
            );
            self.game_state = GameState::Dying;
            self.death_frames = DEATH_FRAMES;
        }

        Ok(tick_delay(self.world.ship.speed))
    }

    /// One frame of the death animation; the field keeps moving, the player
    /// has no control.
    fn death_tick<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Duration> {
        if self.death_frames > DEATH_EXPLOSION_CUTOFF {
            self.world.spawn_death_explosion(&mut self.rng);
        }
        self.death_frames = self.death_frames.saturating_sub(1);

        self.world.advance();
        self.play_cues();
        self.draw(terminal)?;

        if self.death_frames == 0 {
            info!("Game over, final score {}", self.world.score);
            self.game_state = GameState::GameOver;
        }

        Ok(DEATH_FRAME_DELAY)
    }

    fn prompt_replay<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<Duration> {
        self.draw(terminal)?;

        if self.input_manager.await_replay()? {
            info!("Replay requested, resetting session");
            self.world.reset();
            self.game_state = GameState::Playing;
        } else {
            self.game_state = GameState::Terminated;
        }

        Ok(Duration::ZERO)
    }

    fn play_cues(&mut self) {
        for cue in self.world.drain_cues() {
            self.audio.play(cue);
        }
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let view = RenderView {
            game_state: self.game_state,
            world: &self.world,
        };
        terminal.draw(|frame| self.renderer.render(frame, &view))?;
        Ok(())
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn input_manager_mut(&mut self) -> &mut InputManager<K> {
        &mut self.input_manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_delay() {
        assert_eq!(tick_delay(0), Duration::from_millis(190));
        assert_eq!(tick_delay(100), Duration::from_millis(90));
        assert_eq!(tick_delay(170), Duration::from_millis(20));
        assert_eq!(tick_delay(500), Duration::from_millis(1));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_delay_shrinks_with_speed(speed in 0i32..170) {
                prop_assert!(tick_delay(speed + 1) < tick_delay(speed));
                prop_assert!(tick_delay(speed) >= Duration::from_millis(20));
            }
        }
    }
}
