use log::LevelFilter;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Grid size of the original console window
pub const GRID_WIDTH: u16 = 60;
pub const GRID_HEIGHT: u16 = 30;

/// Rows reserved below the play field for the separator and HUD
pub const HUD_ROWS: u16 = 5;

pub const START_HEALTH: i32 = 100;
pub const START_AMMO: u32 = 20;
pub const MAX_SPEED: i32 = 170;

pub const OBSTACLE_DAMAGE: i32 = 20;
pub const AMMO_BONUS: u32 = 10;
pub const SPEED_PENALTY: i32 = 50;
pub const HEALTH_BONUS: i32 = 20;

pub const HIT_POINTS: u32 = 20;
pub const DODGE_POINTS: u32 = 1;

pub const POWER_UP_CHANCE: f64 = 0.1;

/// Base tick delay in milliseconds, reduced by the ship's speed
pub const BASE_DELAY_MS: u64 = 190;
pub const DEATH_FRAMES: u8 = 50;
/// Death explosions stop spawning once the countdown reaches this
pub const DEATH_EXPLOSION_CUTOFF: u8 = 10;
pub const DEATH_FRAME_DELAY: Duration = Duration::from_millis(50);

/// Play-field geometry derived from the grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u16,
    pub height: u16,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl Bounds {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// First row below the play field. Obstacles reaching it are dodged.
    pub fn field_bottom(&self) -> u16 {
        self.height.saturating_sub(HUD_ROWS)
    }

    pub fn ship_min_y(&self) -> u16 {
        2
    }

    pub fn ship_max_y(&self) -> u16 {
        self.height.saturating_sub(HUD_ROWS + 1)
    }

    pub fn ship_max_x(&self) -> u16 {
        self.width.saturating_sub(2)
    }

    /// Obstacles spawn in columns `0..spawn_columns()`
    pub fn spawn_columns(&self) -> u16 {
        self.width.saturating_sub(2).max(1)
    }

    pub fn ship_start(&self) -> (u16, u16) {
        ((self.width / 2).saturating_sub(1), self.ship_max_y())
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.field_bottom()
    }
}

/// Runtime settings read once at startup
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub bounds: Bounds,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub mute: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            log_file: PathBuf::from("hyperspace.log"),
            log_level: LevelFilter::Info,
            mute: false,
        }
    }
}

impl GameConfig {
    /// Reads `HYPERSPACE_LOG`, `HYPERSPACE_LOG_FILE` and `HYPERSPACE_MUTE`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("HYPERSPACE_LOG")
            && let Ok(level) = LevelFilter::from_str(level.trim())
        {
            config.log_level = level;
        }
        if let Some(path) = lookup("HYPERSPACE_LOG_FILE")
            && !path.is_empty()
        {
            config.log_file = PathBuf::from(path);
        }
        config.mute = lookup("HYPERSPACE_MUTE").is_some();

        config
    }
}
