use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// The closed set of keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Yes,
    No,
}

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,
}

impl GameKey {
    /// Maps a terminal key event; anything unrecognised yields `None`
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => Some(GameKey::No),
            (_, KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W')) => Some(GameKey::Up),
            (_, KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S')) => Some(GameKey::Down),
            (_, KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A')) => Some(GameKey::Left),
            (_, KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D')) => Some(GameKey::Right),
            (_, KeyCode::Char(' ')) => Some(GameKey::Fire),
            (_, KeyCode::Char('y') | KeyCode::Char('Y')) => Some(GameKey::Yes),
            (_, KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc) => Some(GameKey::No),
            _ => None,
        }
    }

    /// The in-game action for this key, if it has one
    pub fn action(self) -> Option<InputAction> {
        match self {
            GameKey::Up => Some(InputAction::MoveUp),
            GameKey::Down => Some(InputAction::MoveDown),
            GameKey::Left => Some(InputAction::MoveLeft),
            GameKey::Right => Some(InputAction::MoveRight),
            GameKey::Fire => Some(InputAction::Fire),
            GameKey::Yes | GameKey::No => None,
        }
    }
}

/// Where keys come from
pub trait KeySource {
    /// Non-blocking check for a pending key
    fn key_available(&mut self) -> Result<bool>;

    /// Blocks for the next key. Unmapped keys and other events yield `None`.
    fn read_key(&mut self) -> Result<Option<GameKey>>;
}

/// Keys read from the terminal through crossterm
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn key_available(&mut self) -> Result<bool> {
        Ok(event::poll(Duration::ZERO)?)
    }

    fn read_key(&mut self) -> Result<Option<GameKey>> {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                Ok(GameKey::from_key_event(key))
            }
            _ => Ok(None),
        }
    }
}

/// Manages input polling and translates keys into game actions
pub struct InputManager<K: KeySource> {
    source: K,
}

impl<K: KeySource> InputManager<K> {
    pub fn new(source: K) -> Self {
        Self { source }
    }

    /// Takes at most one action for this tick. The first pending key wins and
    /// everything queued behind it is discarded.
    pub fn poll_action(&mut self) -> Result<Option<InputAction>> {
        if !self.source.key_available()? {
            return Ok(None);
        }

        let first = self.source.read_key()?;
        while self.source.key_available()? {
            self.source.read_key()?;
        }

        Ok(first.and_then(GameKey::action))
    }

    /// Blocks until the player answers yes or no
    pub fn await_replay(&mut self) -> Result<bool> {
        loop {
            match self.source.read_key()? {
                Some(GameKey::Yes) => return Ok(true),
                Some(GameKey::No) => return Ok(false),
                _ => {}
            }
        }
    }

    pub fn source_mut(&mut self) -> &mut K {
        &mut self.source
    }
}
