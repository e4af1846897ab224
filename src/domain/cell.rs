use rand::Rng;

/// Opaque visual variant of a living blob.
/// The renderer maps it to one of its blob sprites.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct BlobVariant(u8);

impl BlobVariant {
    /// Number of distinct blob looks
    pub const COUNT: u8 = 2;

    /// Pick a variant uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..Self::COUNT))
    }

    /// The `i`-th look, wrapping around
    pub const fn nth(i: u8) -> Self {
        Self(i % Self::COUNT)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What happens to a cell between two generations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fate {
    Survives,
    Born,
    Dies,
    StaysDead,
}

/// Cell is one grid position.
/// The variant is present exactly when the cell is alive, so liveness
/// is derived from it rather than stored twice.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    row: usize,
    col: usize,
    variant: Option<BlobVariant>,
}

impl Cell {
    /// Create a dead cell at the given position
    pub const fn dead(row: usize, col: usize) -> Self {
        Self { row, col, variant: None }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    pub const fn is_alive(&self) -> bool {
        self.variant.is_some()
    }

    pub const fn variant(&self) -> Option<BlobVariant> {
        self.variant
    }

    /// Bring the cell to life with a fresh variant
    pub fn born<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        Self { variant: Some(BlobVariant::random(rng)), ..self }
    }

    /// Kill the cell, dropping its variant
    pub const fn killed(self) -> Self {
        Self { variant: None, ..self }
    }

    /// Set liveness; a cell that becomes or stays alive gets a fresh variant
    pub fn with_alive<R: Rng + ?Sized>(self, alive: bool, rng: &mut R) -> Self {
        if alive { self.born(rng) } else { self.killed() }
    }

    /// Flip liveness
    pub fn toggle<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let alive = !self.is_alive();
        self.with_alive(alive, rng)
    }

    /// Conway's rules (B3/S23):
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn fate(&self, neighbors: u8) -> Fate {
        match (self.is_alive(), neighbors) {
            (true, 2 | 3) => Fate::Survives,
            (true, _) => Fate::Dies,
            (false, 3) => Fate::Born,
            (false, _) => Fate::StaysDead,
        }
    }
}
