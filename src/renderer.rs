use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::{Bounds, MAX_SPEED};
use crate::entities::{GameState, GridObject};
use crate::world::World;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub world: &'a World,
}

/// Handles all rendering responsibilities for the game
#[derive(Debug, Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let bounds = view.world.bounds;
        let grid = frame
            .area()
            .intersection(Rect::new(0, 0, bounds.width, bounds.height));

        self.render_field(frame.buffer_mut(), grid, view);
        self.render_hud(frame.buffer_mut(), grid, view.world);

        if view.game_state == GameState::GameOver {
            self.render_game_over(frame, grid, view.world.score);
        }
    }

    /// Ship, obstacles, bullets and explosions, one cell each
    fn render_field(&self, buffer: &mut Buffer, grid: Rect, view: &RenderView) {
        let world = view.world;

        if view.game_state != GameState::GameOver {
            put_object(buffer, grid, world.bounds, &world.ship);
        }
        for unit in world
            .obstacles
            .iter()
            .chain(&world.bullets)
            .chain(&world.explosions)
        {
            put_object(buffer, grid, world.bounds, unit);
        }
    }

    /// Separator and the four counters below the field
    fn render_hud(&self, buffer: &mut Buffer, grid: Rect, world: &World) {
        let bottom = world.bounds.field_bottom();
        let separator = "-".repeat(world.bounds.width as usize);
        put_text(buffer, grid, 0, bottom, &separator, Style::default().fg(Color::White));

        let hud = Style::default().fg(Color::Green);
        let row = bottom + 2;
        put_text(buffer, grid, 10, row, &format!("Score: {}", world.score), hud);
        // Drawn before the end-of-tick ramp, so a fresh speed pickup can sit below zero
        let speed = world.ship.speed.clamp(0, MAX_SPEED);
        put_text(buffer, grid, 10, row + 1, &format!("Speed: {speed}"), hud);
        put_text(buffer, grid, 30, row, &format!("Health: {}", world.ship.health), hud);
        put_text(buffer, grid, 30, row + 1, &format!("Ammo: {}", world.ship.ammo), hud);
    }

    /// Modal asking whether to play again
    fn render_game_over(&self, frame: &mut Frame, grid: Rect, score: u32) {
        let text = vec![
            Line::from("Game Over!").bold(),
            Line::from(format!("Score: {score}")),
            Line::from("Try again?"),
            Line::from("(Y/N)"),
        ];

        let area = Rect::new(grid.x + 20, grid.y + 10, 20, 6).intersection(grid);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Green)),
                )
                .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            area,
        );
    }
}

/// Draws one grid object, skipping anything outside the play field
fn put_object(buffer: &mut Buffer, grid: Rect, bounds: Bounds, object: &impl GridObject) {
    let (x, y) = object.position();
    if !bounds.contains(x, y) {
        return;
    }
    put_text(
        buffer,
        grid,
        x,
        y,
        &object.symbol().to_string(),
        Style::default().fg(object.color()),
    );
}

/// Writes text at grid coordinates, clipped to the visible area
fn put_text(buffer: &mut Buffer, grid: Rect, x: u16, y: u16, text: &str, style: Style) {
    let (x, y) = (grid.x + x, grid.y + y);
    if x >= grid.right() || y >= grid.bottom() {
        return;
    }
    let max_width = (grid.right() - x) as usize;
    buffer.set_stringn(x, y, text, max_width, style);
}
