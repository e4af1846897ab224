use log::warn;
use macroquad::prelude::*;
use std::path::Path;

use crate::application::content::{CONTROL_LINES, RULE_LINES, STORY_LINES};
use crate::application::{GameState, Notice, Screen};
use crate::domain::{BlobVariant, Grid, presets};
use crate::ui::{
    self, CELL_SIZE, Drift, GRID_LEFT, GRID_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, cell_origin,
};

const TITLE_SIZE: f32 = 50.0;
const HEADING_SIZE: f32 = 36.0;
const BODY_SIZE: f32 = 28.0;

/// Fallback colors when blob sprites are missing, one per variant
const BLOB_COLORS: [Color; BlobVariant::COUNT as usize] = [
    Color::new(0.36, 0.80, 0.45, 1.0),
    Color::new(0.40, 0.62, 0.95, 1.0),
];

/// Optional textures; anything missing is drawn with shapes instead
pub struct Sprites {
    blobs: Vec<Texture2D>,
    blobbo: Option<Texture2D>,
}

async fn load_optional(dir: &Path, file: &str) -> Option<Texture2D> {
    let path = dir.join(file);
    let path_str = path.to_string_lossy();
    match load_texture(&path_str).await {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("render: could not load {path_str}: {e:?}");
            None
        }
    }
}

impl Sprites {
    pub async fn load(assets_dir: &Path) -> Self {
        let mut blobs = Vec::new();
        for file in ["blob1.png", "blob2.png"] {
            if let Some(texture) = load_optional(assets_dir, file).await {
                blobs.push(texture);
            }
        }
        // a partial set would make variants look inconsistent
        if blobs.len() != BlobVariant::COUNT as usize {
            blobs.clear();
        }
        let blobbo = load_optional(assets_dir, "blobbo.png").await;
        Self { blobs, blobbo }
    }

    fn draw_blob(&self, variant: BlobVariant, x: f32, y: f32, size: f32) {
        match self.blobs.get(variant.index()) {
            Some(texture) => draw_texture_ex(
                texture,
                x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(size, size)),
                    ..Default::default()
                },
            ),
            None => {
                let r = size / 2.0;
                draw_circle(x + r, y + r, r * 0.85, BLOB_COLORS[variant.index()]);
                draw_circle(x + r * 0.7, y + r * 0.8, r * 0.12, BLACK);
                draw_circle(x + r * 1.3, y + r * 0.8, r * 0.12, BLACK);
            }
        }
    }
}

fn theme_color(state: &GameState) -> Color {
    let (r, g, b) = state.theme().rgb;
    Color::from_rgba(r, g, b, 255)
}

fn draw_text_centered(text: &str, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (SCREEN_WIDTH - dims.width) / 2.0, y + dims.height / 2.0, size, color);
}

fn draw_lines(lines: &[&str], x: f32, top: f32, spacing: f32, size: f32) {
    lines.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, x, top + i as f32 * spacing, size, WHITE);
    });
}

/// Draw the board: sprites for living cells and white grid lines
pub fn draw_grid(grid: &Grid, sprites: &Sprites) {
    for cell in grid.iter_cells() {
        let (x, y) = cell_origin(cell.row(), cell.col());
        if let Some(variant) = cell.variant() {
            sprites.draw_blob(variant, x, y, CELL_SIZE);
        }
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, WHITE);
    }
}

fn draw_drift(drift: &Drift, sprites: &Sprites) {
    for blob in &drift.blobs {
        sprites.draw_blob(blob.variant, blob.x, blob.y, CELL_SIZE);
    }
}

fn draw_progress_bar(state: &GameState) {
    let (x, y, h) = (GRID_LEFT, 70.0, 10.0);
    draw_rectangle(x, y, GRID_WIDTH, h, WHITE);
    draw_rectangle(
        x,
        y,
        GRID_WIDTH * state.progress_fraction(),
        h,
        Color::from_rgba(255, 105, 180, 255),
    );
}

fn draw_start(drift: &Drift, sprites: &Sprites, mouse_pos: (f32, f32)) {
    draw_drift(drift, sprites);
    draw_text_centered("Welcome to Blob Life!", 120.0, TITLE_SIZE, WHITE);
    draw_text_centered(
        "A fun interactive game where blobs come to life!",
        180.0,
        BODY_SIZE,
        WHITE,
    );
    ui::start_button().draw(mouse_pos);
}

fn draw_theme_select(drift: &Drift, sprites: &Sprites, mouse_pos: (f32, f32)) {
    draw_drift(drift, sprites);
    draw_text_centered("Choose Your Theme!", 100.0, TITLE_SIZE, WHITE);
    ui::theme_buttons().iter().for_each(|b| b.draw(mouse_pos));
}

fn draw_menu(drift: &Drift, sprites: &Sprites, mouse_pos: (f32, f32)) {
    draw_drift(drift, sprites);
    draw_text_centered("Welcome to Blob Life!", 100.0, TITLE_SIZE, WHITE);
    draw_text_centered("Game of Life with a Blob Twist!", 160.0, HEADING_SIZE, WHITE);
    ui::menu_buttons()
        .iter()
        .for_each(|(_, button)| button.draw(mouse_pos));
}

fn draw_tutorial(state: &GameState, sprites: &Sprites) {
    draw_text_centered("Blobbo Tutorial", 100.0, TITLE_SIZE, WHITE);
    draw_text_centered(state.tutorial_message(), 200.0, BODY_SIZE, WHITE);
    let (x, y) = (SCREEN_WIDTH / 2.0 - 40.0, 300.0);
    match &sprites.blobbo {
        Some(texture) => draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(80.0, 80.0)),
                ..Default::default()
            },
        ),
        None => sprites.draw_blob(BlobVariant::nth(0), x, y, 80.0),
    }
    draw_text_centered("Click to continue tutorial", 450.0, BODY_SIZE, WHITE);
}

fn draw_storyline(drift: &Drift, sprites: &Sprites) {
    let (box_x, box_y) = (300.0, 100.0);
    draw_rectangle(box_x, box_y, SCREEN_WIDTH - 600.0, 450.0, Color::from_rgba(30, 30, 30, 255));
    STORY_LINES.iter().enumerate().for_each(|(i, line)| {
        let size = if i == 0 { TITLE_SIZE } else { BODY_SIZE };
        draw_text_centered(line, box_y + 50.0 + i as f32 * 40.0, size, WHITE);
    });
    draw_drift(drift, sprites);
}

fn draw_simulation(state: &GameState, sprites: &Sprites) {
    draw_text_centered(&format!("Generation: {}", state.generation), 40.0, HEADING_SIZE, WHITE);
    draw_progress_bar(state);
    draw_grid(&state.grid, sprites);

    let help_x = SCREEN_WIDTH - 280.0;
    draw_text("Controls:", help_x, 135.0, BODY_SIZE, WHITE);
    draw_lines(&CONTROL_LINES, help_x, 165.0, 20.0, 22.0);

    draw_text("Blob Life Rules:", 10.0, 150.0, HEADING_SIZE, WHITE);
    draw_lines(&RULE_LINES, 10.0, 195.0, 22.0, 24.0);

    draw_text("Templates:", 10.0, 380.0, BODY_SIZE, WHITE);
    let template_lines: Vec<String> = presets::all_templates()
        .iter()
        .enumerate()
        .flat_map(|(i, t)| [format!("{}: {}", i + 1, t.name), format!("   {}", t.description)])
        .collect();
    let template_lines: Vec<&str> = template_lines.iter().map(String::as_str).collect();
    draw_lines(&template_lines, 10.0, 410.0, 22.0, 22.0);

    let status = if state.is_running {
        "Running"
    } else if state.just_paused {
        "Paused"
    } else {
        "Ready"
    };
    draw_text(status, GRID_LEFT, 105.0, BODY_SIZE, WHITE);
}

fn draw_notice(state: &GameState, notice: Notice) {
    clear_background(theme_color(state));
    draw_text_centered(notice.message(), SCREEN_HEIGHT / 2.0 - 30.0, HEADING_SIZE, WHITE);
    draw_text_centered(notice.hint(), SCREEN_HEIGHT / 2.0 + 30.0, BODY_SIZE, WHITE);
}

/// Draw one frame for the current screen
pub fn draw_frame(state: &GameState, drift: &Drift, sprites: &Sprites, mouse_pos: (f32, f32)) {
    if let Some(notice) = state.notice {
        draw_notice(state, notice);
        return;
    }

    clear_background(theme_color(state));
    match state.screen {
        Screen::Start => draw_start(drift, sprites, mouse_pos),
        Screen::ThemeSelect => draw_theme_select(drift, sprites, mouse_pos),
        Screen::Menu => draw_menu(drift, sprites, mouse_pos),
        Screen::Tutorial => draw_tutorial(state, sprites),
        Screen::Storyline => draw_storyline(drift, sprites),
        Screen::Simulation => draw_simulation(state, sprites),
    }

    if state.screen.has_back() {
        ui::back_button().draw(mouse_pos);
    }
    ui::mute_button(state.is_muted).draw(mouse_pos);
}
