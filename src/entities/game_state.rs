/// Phase of the play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Death animation running; the countdown lives in the app
    Dying,
    GameOver,
    Terminated,
}
