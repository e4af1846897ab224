use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::*;

use crate::application::{Event, GameState, Key, Screen};
use crate::ui::{self, theme_row_at};

/// Keyboard keys the simulation reacts to
const KEY_MAP: [(KeyCode, Key); 7] = [
    (KeyCode::Space, Key::Space),
    (KeyCode::R, Key::R),
    (KeyCode::Left, Key::Left),
    (KeyCode::Right, Key::Right),
    (KeyCode::Key1, Key::One),
    (KeyCode::Key2, Key::Two),
    (KeyCode::Key3, Key::Three),
];

/// Key held to run generations at the fast interval
pub const SPEED_UP_KEY: KeyCode = KeyCode::S;

/// Resolve a left click against the controls of the current screen.
/// Mute is checked first, then Back, then the screen's own controls.
pub fn click_event(screen: Screen, is_muted: bool, mouse_pos: (f32, f32)) -> Option<Event> {
    if ui::mute_button(is_muted).is_hovered(mouse_pos) {
        return Some(Event::ToggleMute);
    }
    if screen.has_back() && ui::back_button().is_hovered(mouse_pos) {
        return Some(Event::Back);
    }

    match screen {
        Screen::Start => ui::start_button()
            .is_hovered(mouse_pos)
            .then_some(Event::Start),
        Screen::ThemeSelect => theme_row_at(mouse_pos.1).map(Event::SelectTheme),
        Screen::Menu => ui::menu_buttons()
            .into_iter()
            .find(|(_, button)| button.is_hovered(mouse_pos))
            .map(|(item, _)| Event::Menu(item)),
        Screen::Tutorial => Some(Event::Advance),
        Screen::Storyline => None,
        Screen::Simulation => {
            let (row, col) = ui::screen_to_cell(mouse_pos.0, mouse_pos.1);
            Some(Event::ClickCell { row, col })
        }
    }
}

/// One raw input, in the order the window delivered it
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawInput {
    Quit,
    Click { x: f32, y: f32 },
    Key(KeyCode),
    Tick { now_ms: u64, speed_up: bool },
}

/// Translate one raw input against the state it will be applied to.
/// While a notice is up any click dismisses it.
pub fn to_event(state: &GameState, raw: RawInput) -> Option<Event> {
    match raw {
        RawInput::Quit => Some(Event::Quit),
        RawInput::Click { .. } if state.notice.is_some() => Some(Event::Dismiss),
        RawInput::Click { x, y } => click_event(state.screen, state.is_muted, (x, y)),
        RawInput::Key(code) => KEY_MAP
            .iter()
            .find(|(mapped, _)| *mapped == code)
            .map(|(_, key)| Event::Key(*key)),
        RawInput::Tick { now_ms, speed_up } => Some(Event::Tick { now_ms, speed_up }),
    }
}

#[derive(Default)]
struct Arrivals {
    inputs: Vec<RawInput>,
}

impl EventHandler for Arrivals {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if !repeat {
            self.inputs.push(RawInput::Key(keycode));
        }
    }

    fn mouse_button_down_event(&mut self, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.inputs.push(RawInput::Click { x, y });
        }
    }
}

/// Replays the window's key and mouse events in arrival order
pub struct InputQueue {
    subscriber: usize,
    arrivals: Arrivals,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            subscriber: register_input_subscriber(),
            arrivals: Arrivals::default(),
        }
    }

    /// This frame's inputs: Quit first if requested, then clicks and keys
    /// as they arrived, then a tick
    pub fn drain(&mut self, now_ms: u64) -> Vec<RawInput> {
        self.arrivals.inputs.clear();
        repeat_all_miniquad_input(&mut self.arrivals, self.subscriber);

        let mut inputs = Vec::with_capacity(self.arrivals.inputs.len() + 2);
        if is_quit_requested() {
            inputs.push(RawInput::Quit);
        }
        inputs.append(&mut self.arrivals.inputs);
        inputs.push(RawInput::Tick {
            now_ms,
            speed_up: is_key_down(SPEED_UP_KEY),
        });
        inputs
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
