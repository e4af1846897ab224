mod button;
pub mod drift;

pub use button::Button;
pub use drift::Drift;

use crate::application::{MenuItem, content::THEMES};
use crate::domain::COLS;
use macroquad::prelude::{BLACK, Color, WHITE};

// Fixed window layout
pub const SCREEN_WIDTH: f32 = 1100.0;
pub const SCREEN_HEIGHT: f32 = 630.0;
pub const CELL_SIZE: f32 = 50.0;
pub const GRID_LEFT: f32 = (SCREEN_WIDTH - COLS as f32 * CELL_SIZE) / 2.0;
pub const GRID_TOP: f32 = 120.0;
pub const GRID_WIDTH: f32 = COLS as f32 * CELL_SIZE;

pub const BUTTON_X: f32 = 400.0;
pub const BUTTON_WIDTH: f32 = 300.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const THEME_TOP: f32 = 180.0;
const MENU_TOP: f32 = 200.0;
const MENU_SPACING: f32 = 70.0;

/// Decorative blobs stay out of this horizontal band on the start pages
pub const CENTER_BAND: (f32, f32) = (300.0, 800.0);
/// Storyline text box is wider, so its band starts earlier
pub const STORY_BAND: (f32, f32) = (250.0, 800.0);

/// Grid coordinates under a screen point; may be off the board
pub fn screen_to_cell(x: f32, y: f32) -> (i32, i32) {
    let row = ((y - GRID_TOP) / CELL_SIZE).floor() as i32;
    let col = ((x - GRID_LEFT) / CELL_SIZE).floor() as i32;
    (row, col)
}

/// Top-left corner of a cell on screen
pub fn cell_origin(row: usize, col: usize) -> (f32, f32) {
    (GRID_LEFT + col as f32 * CELL_SIZE, GRID_TOP + row as f32 * CELL_SIZE)
}

/// Theme row under a y coordinate; rows past the list are still reported
pub fn theme_row_at(y: f32) -> Option<usize> {
    (y >= THEME_TOP).then(|| ((y - THEME_TOP) / BUTTON_HEIGHT) as usize)
}

pub fn start_button() -> Button {
    Button::new(
        SCREEN_WIDTH / 2.0 - 150.0,
        SCREEN_HEIGHT / 2.0 + 60.0,
        BUTTON_WIDTH,
        50.0,
        "Start",
    )
}

pub fn back_button() -> Button {
    Button::new(20.0, 20.0, 100.0, 30.0, "Back")
}

pub fn mute_button(is_muted: bool) -> Button {
    let (label, color) = if is_muted {
        ("Unmute", Color::from_rgba(200, 0, 0, 255))
    } else {
        ("Mute", Color::from_rgba(0, 200, 0, 255))
    };
    Button::new(SCREEN_WIDTH - 120.0, 20.0, 100.0, 40.0, label).with_colors(color, WHITE)
}

/// One square button per theme, filled with the theme color
pub fn theme_buttons() -> Vec<Button> {
    THEMES
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let (r, g, b) = theme.rgb;
            let fill = if theme.is_dark() {
                WHITE
            } else {
                Color::from_rgba(r, g, b, 255)
            };
            Button::new(
                BUTTON_X,
                THEME_TOP + i as f32 * BUTTON_HEIGHT,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
                theme.name,
            )
            .with_colors(fill, BLACK)
            .square()
        })
        .collect()
}

pub fn menu_buttons() -> Vec<(MenuItem, Button)> {
    MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let y = MENU_TOP + i as f32 * MENU_SPACING;
            (*item, Button::new(BUTTON_X, y, BUTTON_WIDTH, BUTTON_HEIGHT, item.label()))
        })
        .collect()
}
