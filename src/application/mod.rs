mod game_state;
pub mod content;
pub mod pacing;
pub mod screen;
pub mod survey;

pub use game_state::GameState;
pub use pacing::{Pacer, should_step};
pub use screen::{Event, Flow, Key, MenuItem, Notice, Screen};
