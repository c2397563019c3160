use color_eyre::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hyperspace::{App, AudioCue, GameConfig, TerminalKeys, audio};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = GameConfig::from_env();
    // Raw mode owns the terminal, so logs go to a file
    simple_logging::log_to_file(&config.log_file, config.log_level)?;
    info!(
        "Starting HyperSpace on a {}x{} grid",
        config.bounds.width, config.bounds.height
    );

    let audio = audio::open(config.mute);
    info!("Audio output: {}", if audio.is_audible() { "on" } else { "off" });

    // Setup terminal manually for full control
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config.bounds, TerminalKeys, audio, StdRng::from_os_rng());
    let result = app.run(&mut terminal);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!("Game loop failed: {err:?}");
    }
    info!("Exiting");

    result
}
