//! Headless batch runs over seeded random boards.

use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use std::ops::Range;

use crate::domain::Grid;

/// Outcome of one seeded run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trial {
    pub seed: u64,
    /// Generations stepped before extinction or the cap
    pub generations: u64,
    pub extinct: bool,
    pub final_population: usize,
}

/// Aggregate over many trials
#[derive(Clone, Debug, PartialEq)]
pub struct SurveyReport {
    pub trials: usize,
    pub extinct: usize,
    /// Mean generations until extinction, over the trials that died out
    pub mean_lifespan: f64,
    pub longest_lifespan: u64,
}

/// Randomize a board from `seed` and step it until it dies or `cap` is hit
pub fn run_trial(seed: u64, cap: u64) -> Trial {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new().randomize(&mut rng);
    let mut generations = 0;

    while generations < cap && !grid.is_extinct() {
        grid = grid.step(&mut rng).grid;
        generations += 1;
    }

    Trial {
        seed,
        generations,
        extinct: grid.is_extinct(),
        final_population: grid.population(),
    }
}

/// Summarize finished trials
pub fn summarize(trials: &[Trial]) -> SurveyReport {
    let lifespans: Vec<u64> = trials
        .iter()
        .filter(|t| t.extinct)
        .map(|t| t.generations)
        .collect();
    let mean_lifespan = if lifespans.is_empty() {
        0.0
    } else {
        lifespans.iter().sum::<u64>() as f64 / lifespans.len() as f64
    };

    SurveyReport {
        trials: trials.len(),
        extinct: lifespans.len(),
        mean_lifespan,
        longest_lifespan: lifespans.iter().copied().max().unwrap_or(0),
    }
}

/// Run one trial per seed in parallel
pub fn survey(seeds: Range<u64>, cap: u64) -> SurveyReport {
    let trials: Vec<Trial> = seeds
        .into_par_iter()
        .map(|seed| run_trial(seed, cap))
        .collect();
    summarize(&trials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_cap_does_not_step() {
        let trial = run_trial(5, 0);
        assert_eq!(trial.generations, 0);
    }

    #[test]
    fn test_trial_is_reproducible() {
        assert_eq!(run_trial(17, 200), run_trial(17, 200));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let serial: Vec<Trial> = (0..32).map(|seed| run_trial(seed, 100)).collect();
        assert_eq!(survey(0..32, 100), summarize(&serial));
    }

    #[test]
    fn test_summary_only_averages_extinct_runs() {
        let trials = [
            Trial { seed: 0, generations: 4, extinct: true, final_population: 0 },
            Trial { seed: 1, generations: 8, extinct: true, final_population: 0 },
            Trial { seed: 2, generations: 50, extinct: false, final_population: 6 },
        ];
        let report = summarize(&trials);
        assert_eq!(report.trials, 3);
        assert_eq!(report.extinct, 2);
        assert_eq!(report.mean_lifespan, 6.0);
        assert_eq!(report.longest_lifespan, 8);
    }
}
