//! Fixed text and theme tables shown by the screens.

/// Background theme: a name and an RGB fill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

impl Theme {
    /// Dark backgrounds need light buttons to stay readable
    pub const fn is_dark(&self) -> bool {
        let (r, g, b) = self.rgb;
        (r as u16 + g as u16 + b as u16) < 96
    }
}

pub const THEMES: [Theme; 6] = [
    Theme { name: "Ocean", rgb: (173, 216, 230) },
    Theme { name: "Candy", rgb: (255, 204, 229) },
    Theme { name: "Honey", rgb: (246, 190, 0) },
    Theme { name: "Meadow", rgb: (204, 255, 204) },
    Theme { name: "Fairy", rgb: (229, 204, 255) },
    Theme { name: "None", rgb: (0, 0, 0) },
];

/// Theme used before the player picks one
pub const DEFAULT_THEME: usize = THEMES.len() - 1;

pub const TUTORIAL_MESSAGES: [&str; 4] = [
    "Hi! I'm Blobbo. Let me teach you blob life!",
    "Click to place a blob!",
    "Press spacebar to watch your blobs grow!",
    "Nice job! You're ready to play!",
];

pub const STORY_LINES: [&str; 10] = [
    "The Blob Life Story",
    "",
    "Once upon a time, a genius named Conway made",
    "a grid where life grew using rules, not magic!",
    "",
    "Now blobs have taken over in this playful version!",
    "They pop in, disappear, or stay, based on how",
    "many blob buddies are around.",
    "",
    "It's Conway's Game of Life... blobified!",
];

pub const RULE_LINES: [&str; 7] = [
    "Lonely blob? It poofs!",
    "(0-1 friends)",
    "Happy blob? It stays!",
    "(2-3 friends)",
    "Crowded blob? It poofs!",
    "(4+ friends)",
    "New blob? 3 nearby friends!",
];

pub const CONTROL_LINES: [&str; 8] = [
    "Space: Pause/Resume",
    "R: Randomize",
    "Left Arrow: Reset Grid",
    "Click to toggle blobs",
    "Right Arrow: Next Generation",
    "S: Speed Up Generations",
    "Mute/Unmute Music",
    "Click to place blobs",
];
