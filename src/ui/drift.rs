//! Decorative blobs that wander sideways behind the menus.

use crate::domain::BlobVariant;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftingBlob {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// -1.0 or 1.0
    pub dir: f32,
    pub variant: BlobVariant,
}

/// A flock of drifting blobs kept out of a central band of the screen
pub struct Drift {
    pub blobs: Vec<DriftingBlob>,
    width: f32,
    height: f32,
}

impl Drift {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f32, height: f32, rng: &mut R) -> Self {
        let blobs = (0..count)
            .map(|_| DriftingBlob {
                x: rng.random_range(0.0..=300.0),
                y: rng.random_range(0.0..=height),
                speed: if rng.random_bool(0.5) { 1.0 } else { 2.0 },
                dir: if rng.random_bool(0.5) { -1.0 } else { 1.0 },
                variant: BlobVariant::random(rng),
            })
            .collect();
        Self { blobs, width, height }
    }

    /// Move every blob one frame; blobs that enter `band` or leave the
    /// screen respawn at a random spot left or right of the band
    pub fn update<R: Rng + ?Sized>(&mut self, band: (f32, f32), rng: &mut R) {
        let (band_start, band_end) = band;
        for blob in &mut self.blobs {
            blob.x += blob.speed * blob.dir;
            let in_band = blob.x >= band_start && blob.x <= band_end;
            if in_band || blob.x < 0.0 || blob.x > self.width {
                blob.x = if rng.random_bool(0.5) || band_end + 1.0 >= self.width {
                    rng.random_range(0.0..band_start.max(1.0))
                } else {
                    rng.random_range(band_end + 1.0..self.width)
                };
                blob.y = rng.random_range(0.0..=self.height);
            }
        }
    }
}
