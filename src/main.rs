use blob_life::{
    Config, Flow, GameState, Screen,
    audio::MacroquadAudio,
    input::{self, InputQueue},
    rendering::{self, Sprites},
    ui::{self, Drift},
};
use log::info;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Blob Life".to_owned(),
        window_width: ui::SCREEN_WIDTH as i32,
        window_height: ui::SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let config = Config::from_env();

    let mut state = GameState::new(&config);
    let mut audio = MacroquadAudio::load(&config.assets_dir).await;
    let sprites = Sprites::load(&config.assets_dir).await;
    let mut decor_rng = ::rand::rng();
    let mut drift = Drift::new(30, ui::SCREEN_WIDTH, ui::SCREEN_HEIGHT, &mut decor_rng);

    // window close arrives as an event so it can be handled from any screen
    prevent_quit();
    let mut inputs = InputQueue::new();

    'frames: loop {
        let now_ms = (get_time() * 1000.0) as u64;

        for raw in inputs.drain(now_ms) {
            let Some(event) = input::to_event(&state, raw) else {
                continue;
            };
            if state.handle(event, &mut audio) == Flow::Quit {
                break 'frames;
            }
        }

        let band = match state.screen {
            Screen::Storyline => ui::STORY_BAND,
            _ => ui::CENTER_BAND,
        };
        drift.update(band, &mut decor_rng);

        rendering::draw_frame(&state, &drift, &sprites, mouse_position());
        next_frame().await;
    }

    audio.shutdown();
    info!("exiting after generation {}", state.generation);
}
