// Domain layer - automaton engine
pub mod domain;
pub mod error;

// Application layer - screen state machine and pacing
pub mod application;
pub mod config;

// Infrastructure layer - UI, rendering, input, audio
pub mod audio;
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Event, Flow, GameState, Screen};
pub use config::Config;
pub use domain::{Cell, Grid, Template, apply_template, presets};
pub use error::LifeError;
