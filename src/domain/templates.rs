use super::Grid;
use crate::error::{LifeError, Result};
use rand::Rng;

/// Name that clears the board instead of naming a template
pub const NO_TEMPLATE: &str = "None";

/// A named set of (row, col) coordinates that start alive
#[derive(Clone, Copy, Debug)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Template {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Built-in templates, in number-key order (1, 2, 3)
pub mod presets {
    use super::Template;

    pub const HEART: Template = Template {
        name: "Heart",
        description: "Ten blobs in a heart",
        cells: &[
            (6, 4),
            (5, 3), (5, 5),
            (4, 2), (4, 6),
            (3, 2), (3, 6),
            (2, 3), (3, 4), (2, 5),
        ],
    };

    pub const SMILEY: Template = Template {
        name: "Smiley",
        description: "Two eyes and a grin",
        cells: &[
            (7, 4), (6, 3), (7, 5), (6, 6),
            (5, 2), (5, 7),
            (2, 3), (2, 6),
            (3, 3), (3, 6),
            (1, 3), (1, 6),
        ],
    };

    pub const LETTER_A: Template = Template {
        name: "Letter A",
        description: "A capital A",
        cells: &[
            (1, 3), (1, 4), (1, 5), (1, 6),
            (2, 3), (2, 6),
            (3, 3), (3, 4), (3, 5), (3, 6),
            (4, 3), (4, 6),
            (5, 3), (5, 6),
        ],
    };

    /// Get all available templates
    pub const fn all_templates() -> [Template; 3] {
        [HEART, SMILEY, LETTER_A]
    }
}

/// Look up a registered template by name
pub fn find(name: &str) -> Result<Template> {
    presets::all_templates()
        .into_iter()
        .find(|t| t.name == name)
        .ok_or_else(|| LifeError::UnknownTemplate(name.to_owned()))
}

/// Build a fresh grid from the named template.
/// `"None"` yields an empty grid; any other unknown name is an error.
pub fn apply_template<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Result<Grid> {
    if name == NO_TEMPLATE {
        return Ok(Grid::new());
    }
    let template = find(name)?;
    Ok(Grid::from_template(&template, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{COLS, ROWS};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_heart_has_exactly_its_cells() {
        let grid = apply_template("Heart", &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(grid.population(), 10);

        let mut expected = presets::HEART.cells.to_vec();
        expected.sort();
        assert_eq!(grid.alive_coords(), expected);
    }

    #[test]
    fn test_unknown_template_fails() {
        let result = apply_template("Nonexistent", &mut StdRng::seed_from_u64(3));
        assert_eq!(result, Err(LifeError::UnknownTemplate("Nonexistent".into())));
    }

    #[test]
    fn test_none_clears_board() {
        let grid = apply_template(NO_TEMPLATE, &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(grid.is_extinct());
    }

    #[test]
    fn test_presets_fit_board_without_duplicates() {
        for template in presets::all_templates() {
            let grid = Grid::from_template(&template, &mut StdRng::seed_from_u64(0));
            assert!(!template.is_empty());
            assert!(!template.description.is_empty());
            assert_eq!(grid.population(), template.len(), "{}", template.name);
            assert!(template.cells.iter().all(|&(r, c)| r < ROWS && c < COLS));
        }
    }
}
