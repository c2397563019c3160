mod bullet;
mod explosion;
mod game_state;
mod obstacle;
mod power;
mod ship;
mod unit;

// Re-export all public types
pub use explosion::FINAL_FRAME;
pub use game_state::GameState;
pub use obstacle::OBSTACLE_GLYPHS;
pub use power::{PowerChoice, PowerKind};
pub use ship::Ship;
pub use unit::{BLANK, GridObject, Unit, UnitKind};
