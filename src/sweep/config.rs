use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::core::{Fps, Point};
use crate::foundation::error::{HypoError, HypoResult};
use crate::motion::trace::{Hypocycloid, REFERENCE_FIXED_RADIUS};

/// A walk through several ratios, one full roll per ratio.
///
/// Every field is optional in JSON; missing fields take the values of the hypocycloid
/// animation: fixed circle of radius 2 centred at `(0, -0.8)`, ratios 2 through 6, 30 fps,
/// five seconds per roll, logistic easing with inflection 7.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Centre of the fixed circle.
    pub origin: Point,
    /// Radius of the fixed circle.
    pub fixed_radius: f64,
    /// Ratios visited in order.
    pub ratios: Vec<f64>,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Frames spent on each ratio.
    pub segment_frames: u64,
    /// Easing shared by the rolling circle and the traced point.
    pub ease: Ease,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, -0.8),
            fixed_radius: REFERENCE_FIXED_RADIUS,
            ratios: vec![2.0, 3.0, 4.0, 5.0, 6.0],
            fps: Fps { num: 30, den: 1 },
            segment_frames: 150,
            ease: Ease::reference(),
        }
    }
}

impl SweepConfig {
    /// Parse a sweep configuration from a JSON reader.
    ///
    /// Malformed JSON and unknown fields are [`HypoError::Serde`]; values are only checked by
    /// [`SweepConfig::validate`].
    pub fn from_reader<R: std::io::Read>(r: R) -> HypoResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Parse a sweep configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> HypoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HypoError::validation(format!("open sweep config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> HypoResult<()> {
        self.curves().map(|_| ())
    }

    /// Validate and build one curve per ratio.
    pub(crate) fn curves(&self) -> HypoResult<Vec<Hypocycloid>> {
        if self.ratios.is_empty() {
            return Err(HypoError::validation("sweep must list at least one ratio"));
        }
        if self.segment_frames == 0 {
            return Err(HypoError::validation("segment_frames must be >= 1"));
        }
        (self.ratios.len() as u64)
            .checked_mul(self.segment_frames)
            .ok_or_else(|| HypoError::validation("sweep duration overflows u64 frames"))?;
        Fps::new(self.fps.num, self.fps.den)?;
        self.ease.validate()?;

        self.ratios
            .iter()
            .map(|&n| Hypocycloid::with_radius(self.origin, self.fixed_radius, n))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sweep/config.rs"]
mod tests;
