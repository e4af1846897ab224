/// Mutually exclusive interaction modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    ThemeSelect,
    Menu,
    Tutorial,
    Storyline,
    Simulation,
}

impl Screen {
    /// Screens that show a back button leading to the menu
    pub const fn has_back(self) -> bool {
        matches!(self, Screen::Tutorial | Screen::Storyline | Screen::Simulation)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Screen::Start => "start",
            Screen::ThemeSelect => "theme_select",
            Screen::Menu => "menu",
            Screen::Tutorial => "tutorial",
            Screen::Storyline => "storyline",
            Screen::Simulation => "simulation",
        }
    }
}

/// Main menu entries, top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Tutorial,
    Storyline,
    Play,
    Theme,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Tutorial,
        MenuItem::Storyline,
        MenuItem::Play,
        MenuItem::Theme,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MenuItem::Tutorial => "Tutorial",
            MenuItem::Storyline => "Storyline",
            MenuItem::Play => "Play",
            MenuItem::Theme => "Theme Select",
        }
    }
}

/// Keys the simulation screen reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Space,
    R,
    Left,
    Right,
    One,
    Two,
    Three,
}

/// Input already resolved against the on-screen controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Start button on the start page
    Start,
    /// Row `i` of the theme list
    SelectTheme(usize),
    Menu(MenuItem),
    /// Click anywhere on the tutorial page
    Advance,
    Back,
    ToggleMute,
    /// Pointer click mapped to grid coordinates; may be off the board
    ClickCell { row: i32, col: i32 },
    Key(Key),
    /// Once per frame with a monotonic timestamp
    Tick { now_ms: u64, speed_up: bool },
    /// Click that closes a blocking notice
    Dismiss,
    Quit,
}

/// Whether the main loop keeps going after an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Modal messages that block all other input until dismissed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Extinction,
}

impl Notice {
    pub const fn message(self) -> &'static str {
        match self {
            Notice::Extinction => "Oh no! All the blobs have vanished!",
        }
    }

    pub const fn hint(self) -> &'static str {
        match self {
            Notice::Extinction => "Click anywhere to reset",
        }
    }
}
