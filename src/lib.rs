// Library exports for testing
pub use app::{App, tick_delay};
pub use audio::{AudioCue, Cue, Silent};
pub use collision::{BulletOutcome, Impact, resolve_bullet_hits, resolve_ship_collision};
pub use config::{Bounds, GameConfig};
pub use entities::{GameState, GridObject, PowerChoice, PowerKind, Ship, Unit, UnitKind};
pub use input::{GameKey, InputAction, InputManager, KeySource, TerminalKeys};
pub use world::World;

pub mod app;
pub mod audio;
pub mod collision;
pub mod config;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod world;
