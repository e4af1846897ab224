use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use super::content::{DEFAULT_THEME, THEMES, TUTORIAL_MESSAGES, Theme};
use super::pacing::{Pacer, should_step};
use super::screen::{Event, Flow, Key, MenuItem, Notice, Screen};
use crate::audio::AudioSink;
use crate::config::Config;
use crate::domain::{Grid, apply_template, presets};
use crate::error::{LifeError, Result};

/// GameState owns everything the main loop mutates: the current
/// screen, the grid and its generation counter, and pacing.
/// Events go in through `handle`; rendering only reads.
pub struct GameState {
    pub screen: Screen,
    pub grid: Grid,
    pub generation: u64,
    pub tutorial_step: usize,
    pub is_running: bool,
    /// Set when the last Space press paused the simulation
    pub just_paused: bool,
    pub is_muted: bool,
    theme_index: usize,
    pub last_update_ms: u64,
    /// Blocking message; while set only Dismiss and Quit are handled
    pub notice: Option<Notice>,
    pub pacer: Pacer,
    pub progress_period: u64,
    rng: StdRng,
}

impl GameState {
    /// Create the start-page state from config
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            screen: Screen::default(),
            grid: Grid::new(),
            generation: 0,
            tutorial_step: 0,
            is_running: false,
            just_paused: false,
            is_muted: false,
            theme_index: DEFAULT_THEME,
            last_update_ms: 0,
            notice: None,
            pacer: Pacer::from_config(config),
            progress_period: config.progress_period.max(1),
            rng,
        }
    }

    /// Currently selected background theme
    pub fn theme(&self) -> &'static Theme {
        THEMES.get(self.theme_index).unwrap_or(&THEMES[DEFAULT_THEME])
    }

    /// Current tutorial line
    pub fn tutorial_message(&self) -> &'static str {
        TUTORIAL_MESSAGES[self.tutorial_step.min(TUTORIAL_MESSAGES.len() - 1)]
    }

    /// Position inside the current progress cycle
    pub fn progress(&self) -> u64 {
        self.generation % self.progress_period
    }

    /// Progress bar fill in `[0, 1]`; full at every nonzero multiple of the period
    pub fn progress_fraction(&self) -> f32 {
        let position = match self.progress() {
            0 if self.generation != 0 => self.progress_period,
            p => p,
        };
        position as f32 / self.progress_period as f32
    }

    /// Apply one input event.
    /// Recoverable errors are logged and dropped; only Quit stops the loop.
    pub fn handle(&mut self, event: Event, audio: &mut dyn AudioSink) -> Flow {
        if event == Event::Quit {
            info!("nav: quit requested on {}", self.screen.name());
            return Flow::Quit;
        }

        if let Some(notice) = self.notice {
            if event == Event::Dismiss {
                debug!("sim: dismissed {notice:?}");
                self.notice = None;
                self.reset_grid();
            }
            return Flow::Continue;
        }

        if let Err(e) = self.dispatch(event, audio) {
            debug!("nav: ignored {event:?} on {}: {e}", self.screen.name());
        }
        Flow::Continue
    }

    fn dispatch(&mut self, event: Event, audio: &mut dyn AudioSink) -> Result<()> {
        match (self.screen, event) {
            (_, Event::ToggleMute) => {
                self.is_muted = !self.is_muted;
                audio.set_muted(self.is_muted);
                debug!("nav: muted={}", self.is_muted);
            }
            (screen, Event::Back) if screen.has_back() => self.go_to(Screen::Menu),
            (Screen::Start, Event::Start) => self.go_to(Screen::ThemeSelect),
            (Screen::ThemeSelect, Event::SelectTheme(index)) => {
                self.select_theme(index)?;
                self.go_to(Screen::Menu);
            }
            (Screen::Menu, Event::Menu(item)) => self.select_menu(item),
            (Screen::Tutorial, Event::Advance) => self.advance_tutorial(),
            (Screen::Simulation, Event::ClickCell { row, col }) => {
                self.grid = self.grid.toggle(row, col, &mut self.rng)?;
            }
            (Screen::Simulation, Event::Key(key)) => self.handle_key(key, audio)?,
            (Screen::Simulation, Event::Tick { now_ms, speed_up }) => {
                self.tick(now_ms, speed_up, audio)
            }
            _ => {}
        }
        Ok(())
    }

    fn go_to(&mut self, screen: Screen) {
        debug!("nav: {} -> {}", self.screen.name(), screen.name());
        self.screen = screen;
    }

    /// Pick a background theme by row
    pub fn select_theme(&mut self, index: usize) -> Result<()> {
        if index >= THEMES.len() {
            return Err(LifeError::InvalidThemeIndex(index));
        }
        self.theme_index = index;
        debug!("nav: theme {}", THEMES[index].name);
        Ok(())
    }

    fn select_menu(&mut self, item: MenuItem) {
        match item {
            MenuItem::Tutorial => {
                self.tutorial_step = 0;
                self.go_to(Screen::Tutorial);
            }
            MenuItem::Storyline => self.go_to(Screen::Storyline),
            MenuItem::Play => self.enter_simulation(),
            MenuItem::Theme => self.go_to(Screen::ThemeSelect),
        }
    }

    fn advance_tutorial(&mut self) {
        if self.tutorial_step + 1 < TUTORIAL_MESSAGES.len() {
            self.tutorial_step += 1;
        } else {
            self.enter_simulation();
        }
    }

    fn enter_simulation(&mut self) {
        self.reset_grid();
        self.is_running = false;
        self.go_to(Screen::Simulation);
    }

    /// Replace the grid with an empty one and restart the count
    pub fn reset_grid(&mut self) {
        self.grid = Grid::new();
        self.generation = 0;
    }

    /// Play/pause
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        self.just_paused = !self.is_running;
        debug!("sim: running={}", self.is_running);
    }

    /// Fill the grid with coin flips
    pub fn randomize(&mut self) {
        self.grid = self.grid.randomize(&mut self.rng);
        self.generation = 0;
    }

    /// Replace the grid with a named template
    pub fn load_template(&mut self, name: &str) -> Result<()> {
        self.grid = apply_template(name, &mut self.rng)?;
        self.generation = 0;
        debug!("sim: loaded template {name}");
        Ok(())
    }

    /// Advance one generation, popping if anything was born
    pub fn step(&mut self, audio: &mut dyn AudioSink) {
        let next = self.grid.step(&mut self.rng);
        self.grid = next.grid;
        self.generation += 1;
        if next.births > 0 && !self.is_muted {
            audio.play_pop();
        }
    }

    fn handle_key(&mut self, key: Key, audio: &mut dyn AudioSink) -> Result<()> {
        if key == Key::Space {
            self.toggle_running();
            return Ok(());
        }
        if self.is_running {
            return Ok(());
        }

        let templates = presets::all_templates();
        match key {
            Key::R => self.randomize(),
            Key::Left => self.reset_grid(),
            Key::Right => self.step(audio),
            Key::One => self.load_template(templates[0].name)?,
            Key::Two => self.load_template(templates[1].name)?,
            Key::Three => self.load_template(templates[2].name)?,
            Key::Space => {}
        }
        Ok(())
    }

    /// Frame tick: step if running and the interval has elapsed
    fn tick(&mut self, now_ms: u64, speed_up: bool, audio: &mut dyn AudioSink) {
        if !self.is_running {
            return;
        }
        let interval = self.pacer.interval(speed_up);
        if !should_step(now_ms, self.last_update_ms, interval) {
            return;
        }

        self.step(audio);
        if self.grid.is_extinct() {
            info!("sim: extinct after {} generations", self.generation);
            self.is_running = false;
            self.notice = Some(Notice::Extinction);
        }
        self.last_update_ms = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ROWS;

    #[derive(Default)]
    struct RecordingAudio {
        pops: usize,
        muted: Vec<bool>,
    }

    impl AudioSink for RecordingAudio {
        fn play_pop(&mut self) {
            self.pops += 1;
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted.push(muted);
        }
    }

    fn config() -> Config {
        Config {
            seed: Some(11),
            ..Config::default()
        }
    }

    fn send(state: &mut GameState, audio: &mut RecordingAudio, events: &[Event]) {
        for event in events {
            assert_eq!(state.handle(*event, audio), Flow::Continue);
        }
    }

    fn at_menu() -> (GameState, RecordingAudio) {
        let mut state = GameState::new(&config());
        let mut audio = RecordingAudio::default();
        send(&mut state, &mut audio, &[Event::Start, Event::SelectTheme(0)]);
        assert_eq!(state.screen, Screen::Menu);
        (state, audio)
    }

    fn in_simulation() -> (GameState, RecordingAudio) {
        let (mut state, mut audio) = at_menu();
        send(&mut state, &mut audio, &[Event::Menu(MenuItem::Play)]);
        (state, audio)
    }

    fn tick(now_ms: u64) -> Event {
        Event::Tick { now_ms, speed_up: false }
    }

    #[test]
    fn test_start_to_menu_sets_theme() {
        let mut state = GameState::new(&config());
        let mut audio = RecordingAudio::default();
        assert_eq!(state.screen, Screen::Start);
        assert_eq!(state.theme().name, "None");

        send(&mut state, &mut audio, &[Event::Start]);
        assert_eq!(state.screen, Screen::ThemeSelect);

        send(&mut state, &mut audio, &[Event::SelectTheme(2)]);
        assert_eq!(state.screen, Screen::Menu);
        assert_eq!(state.theme().name, "Honey");
    }

    #[test]
    fn test_invalid_theme_is_noop() {
        let mut state = GameState::new(&config());
        let mut audio = RecordingAudio::default();
        send(&mut state, &mut audio, &[Event::Start, Event::SelectTheme(42)]);
        assert_eq!(state.screen, Screen::ThemeSelect);
        assert_eq!(state.theme_index, DEFAULT_THEME);
        assert_eq!(state.select_theme(6), Err(LifeError::InvalidThemeIndex(6)));
        assert_eq!(state.theme().name, THEMES[DEFAULT_THEME].name);

        state.select_theme(1).unwrap();
        assert_eq!(
            state.select_theme(usize::MAX),
            Err(LifeError::InvalidThemeIndex(usize::MAX))
        );
        assert_eq!(state.theme().name, "Candy");
    }

    #[test]
    fn test_events_for_other_screens_are_ignored() {
        let mut state = GameState::new(&config());
        let mut audio = RecordingAudio::default();
        send(
            &mut state,
            &mut audio,
            &[
                Event::Menu(MenuItem::Play),
                Event::Back,
                Event::ClickCell { row: 0, col: 0 },
                Event::Key(Key::Space),
            ],
        );
        assert_eq!(state.screen, Screen::Start);
        assert!(state.grid.is_extinct());
        assert!(!state.is_running);
    }

    #[test]
    fn test_menu_routes() {
        let (mut state, mut audio) = at_menu();

        send(&mut state, &mut audio, &[Event::Menu(MenuItem::Storyline)]);
        assert_eq!(state.screen, Screen::Storyline);

        send(&mut state, &mut audio, &[Event::Back, Event::Menu(MenuItem::Theme)]);
        assert_eq!(state.screen, Screen::ThemeSelect);

        // Back is not offered on the theme picker
        send(&mut state, &mut audio, &[Event::Back]);
        assert_eq!(state.screen, Screen::ThemeSelect);
    }

    #[test]
    fn test_tutorial_walks_into_simulation() {
        let (mut state, mut audio) = at_menu();
        state.tutorial_step = 3;
        send(&mut state, &mut audio, &[Event::Menu(MenuItem::Tutorial)]);
        assert_eq!(state.screen, Screen::Tutorial);
        assert_eq!(state.tutorial_step, 0);
        assert_eq!(state.tutorial_message(), TUTORIAL_MESSAGES[0]);

        for expected in 1..TUTORIAL_MESSAGES.len() {
            send(&mut state, &mut audio, &[Event::Advance]);
            assert_eq!(state.tutorial_step, expected);
            assert_eq!(state.screen, Screen::Tutorial);
        }

        send(&mut state, &mut audio, &[Event::Advance]);
        assert_eq!(state.screen, Screen::Simulation);
        assert_eq!(state.generation, 0);
        assert!(state.grid.is_extinct());
    }

    #[test]
    fn test_play_always_starts_fresh() {
        let (mut state, mut audio) = in_simulation();
        send(
            &mut state,
            &mut audio,
            &[Event::Key(Key::One), Event::Key(Key::Right), Event::Key(Key::Space)],
        );
        assert!(state.is_running);
        assert_eq!(state.generation, 1);

        send(&mut state, &mut audio, &[Event::Back, Event::Menu(MenuItem::Play)]);
        assert_eq!(state.screen, Screen::Simulation);
        assert_eq!(state.generation, 0);
        assert!(!state.is_running);
        assert!(state.grid.is_extinct());
    }

    #[test]
    fn test_click_toggles_cell_and_ignores_off_board() {
        let (mut state, mut audio) = in_simulation();
        send(&mut state, &mut audio, &[Event::ClickCell { row: 0, col: 0 }]);
        assert!(state.grid.get(0, 0).unwrap().is_alive());

        send(
            &mut state,
            &mut audio,
            &[
                Event::ClickCell { row: -1, col: 3 },
                Event::ClickCell { row: ROWS as i32, col: 3 },
            ],
        );
        assert_eq!(state.grid.population(), 1);

        send(&mut state, &mut audio, &[Event::ClickCell { row: 0, col: 0 }]);
        assert!(state.grid.is_extinct());
    }

    #[test]
    fn test_click_toggles_while_running() {
        let (mut state, mut audio) = in_simulation();
        send(
            &mut state,
            &mut audio,
            &[Event::Key(Key::Space), Event::ClickCell { row: 4, col: 4 }],
        );
        assert!(state.is_running);
        assert_eq!(state.grid.population(), 1);
    }

    #[test]
    fn test_space_tracks_just_paused() {
        let (mut state, mut audio) = in_simulation();
        send(&mut state, &mut audio, &[Event::Key(Key::Space)]);
        assert!(state.is_running);
        assert!(!state.just_paused);

        send(&mut state, &mut audio, &[Event::Key(Key::Space)]);
        assert!(!state.is_running);
        assert!(state.just_paused);
    }

    #[test]
    fn test_editing_keys_only_while_paused() {
        let (mut state, mut audio) = in_simulation();
        send(&mut state, &mut audio, &[Event::Key(Key::Space), Event::Key(Key::Two)]);
        assert!(state.grid.is_extinct());

        send(&mut state, &mut audio, &[Event::Key(Key::Space), Event::Key(Key::Two)]);
        assert_eq!(state.grid.population(), presets::SMILEY.len());

        send(&mut state, &mut audio, &[Event::Key(Key::Three)]);
        assert_eq!(state.grid.population(), presets::LETTER_A.len());

        send(&mut state, &mut audio, &[Event::Key(Key::Right), Event::Key(Key::Right)]);
        assert_eq!(state.generation, 2);

        send(&mut state, &mut audio, &[Event::Key(Key::Left)]);
        assert_eq!(state.generation, 0);
        assert!(state.grid.is_extinct());

        send(&mut state, &mut audio, &[Event::Key(Key::R)]);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_heart_key_loads_ten_cells() {
        let (mut state, mut audio) = in_simulation();
        send(&mut state, &mut audio, &[Event::Key(Key::Right), Event::Key(Key::One)]);
        assert_eq!(state.grid.population(), 10);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_unknown_template_leaves_grid() {
        let (mut state, _) = in_simulation();
        state.load_template("Heart").unwrap();
        let before = state.grid.clone();
        assert!(matches!(
            state.load_template("Nonexistent"),
            Err(LifeError::UnknownTemplate(_))
        ));
        assert_eq!(state.grid, before);
    }

    #[test]
    fn test_tick_respects_interval_and_speed_key() {
        let (mut state, mut audio) = in_simulation();
        state.load_template("Letter A").unwrap();
        send(&mut state, &mut audio, &[tick(10_000)]);
        assert_eq!(state.generation, 0, "paused grid must not step");

        send(&mut state, &mut audio, &[Event::Key(Key::Space), tick(10_000)]);
        assert_eq!(state.generation, 1);
        assert_eq!(state.last_update_ms, 10_000);

        send(&mut state, &mut audio, &[tick(10_499)]);
        assert_eq!(state.generation, 1);

        send(
            &mut state,
            &mut audio,
            &[Event::Tick { now_ms: 10_100, speed_up: true }],
        );
        assert_eq!(state.generation, 2);

        send(&mut state, &mut audio, &[tick(10_600)]);
        assert_eq!(state.generation, 3);
    }

    #[test]
    fn test_births_pop_unless_muted() {
        let (mut state, mut audio) = in_simulation();
        // L-tromino: one birth on the next step
        for (r, c) in [(1, 1), (1, 2), (2, 1)] {
            send(&mut state, &mut audio, &[Event::ClickCell { row: r, col: c }]);
        }
        send(&mut state, &mut audio, &[Event::Key(Key::Right)]);
        assert_eq!(audio.pops, 1);

        // block is stable: no births
        send(&mut state, &mut audio, &[Event::Key(Key::Right)]);
        assert_eq!(audio.pops, 1);

        send(&mut state, &mut audio, &[Event::ToggleMute]);
        assert_eq!(audio.muted, vec![true]);
        state.load_template("Heart").unwrap();
        send(&mut state, &mut audio, &[Event::Key(Key::Right)]);
        assert_eq!(audio.pops, 1);
    }

    #[test]
    fn test_mute_works_on_every_screen() {
        let mut state = GameState::new(&config());
        let mut audio = RecordingAudio::default();
        send(&mut state, &mut audio, &[Event::ToggleMute, Event::Start, Event::ToggleMute]);
        assert_eq!(audio.muted, vec![true, false]);
        assert!(!state.is_muted);
        assert_eq!(state.screen, Screen::ThemeSelect);
    }

    #[test]
    fn test_extinction_blocks_until_dismissed() {
        let (mut state, mut audio) = in_simulation();
        send(
            &mut state,
            &mut audio,
            &[
                Event::ClickCell { row: 5, col: 5 },
                Event::Key(Key::Space),
                tick(1_000),
            ],
        );
        assert!(state.grid.is_extinct());
        assert!(!state.is_running);
        assert_eq!(state.notice, Some(Notice::Extinction));
        assert_eq!(state.generation, 1);

        // everything else is swallowed while the notice is up
        send(
            &mut state,
            &mut audio,
            &[
                Event::Back,
                Event::ClickCell { row: 0, col: 0 },
                Event::Key(Key::Space),
                Event::ToggleMute,
            ],
        );
        assert_eq!(state.screen, Screen::Simulation);
        assert!(state.grid.is_extinct());
        assert!(!state.is_running);
        assert!(!state.is_muted);

        send(&mut state, &mut audio, &[Event::Dismiss]);
        assert_eq!(state.notice, None);
        assert_eq!(state.generation, 0);
        assert_eq!(state.screen, Screen::Simulation);
    }

    #[test]
    fn test_quit_is_honored_everywhere() {
        let mut state = GameState::new(&config());
        let mut audio = RecordingAudio::default();
        assert_eq!(state.handle(Event::Quit, &mut audio), Flow::Quit);

        let (mut state, mut audio) = in_simulation();
        state.notice = Some(Notice::Extinction);
        assert_eq!(state.handle(Event::Quit, &mut audio), Flow::Quit);
    }

    #[test]
    fn test_progress_cycles_every_twenty() {
        let mut state = GameState::new(&config());
        assert_eq!(state.progress(), 0);
        assert_eq!(state.progress_fraction(), 0.0);

        state.generation = 5;
        assert_eq!(state.progress(), 5);
        assert_eq!(state.progress_fraction(), 0.25);

        state.generation = 40;
        assert_eq!(state.progress(), 0);
        assert_eq!(state.progress_fraction(), 1.0);
    }
}
