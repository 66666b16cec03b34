use rayon::prelude::*;

use crate::animation::ease::Easing;
use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{HypoError, HypoResult};
use crate::motion::trace::Hypocycloid;

/// Polyline sampling options.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SampleOpts {
    /// Number of samples over `[0, 1]`, endpoints included. Must be `>= 2`.
    pub samples: usize,
    /// Evaluate samples on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only). `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for SampleOpts {
    fn default() -> Self {
        Self {
            samples: 256,
            parallel: false,
            threads: None,
        }
    }
}

impl SampleOpts {
    pub fn validate(&self) -> HypoResult<()> {
        if self.samples < 2 {
            return Err(HypoError::validation(format!(
                "sample count must be >= 2, got {}",
                self.samples
            )));
        }
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(HypoError::validation(
                "sampling 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Evaluate the traced point at `samples` evenly spaced progress values `i / (samples - 1)`.
///
/// Sequential and parallel modes return the same sequence.
#[tracing::instrument(skip(curve, ease))]
pub fn sample_points<E>(
    curve: &Hypocycloid,
    opts: &SampleOpts,
    ease: &E,
) -> HypoResult<Vec<Point>>
where
    E: Easing + Sync + ?Sized,
{
    opts.validate()?;
    sample_span(curve, 1.0, opts, ease)
}

/// The part of the curve traced between progress 0 and `progress`, as a polyline.
///
/// Vertices are spaced as in [`sample_points`] over `[0, progress]`; the last vertex is the
/// traced point at `progress` itself. Progress is clamped to `[0, 1]`.
#[tracing::instrument(skip(curve, ease))]
pub fn trace_path<E>(
    curve: &Hypocycloid,
    progress: f64,
    opts: &SampleOpts,
    ease: &E,
) -> HypoResult<BezPath>
where
    E: Easing + Sync + ?Sized,
{
    opts.validate()?;
    if !progress.is_finite() {
        return Err(HypoError::validation(format!(
            "trace progress must be finite, got {progress}"
        )));
    }
    let progress = progress.clamp(0.0, 1.0);
    let points = sample_span(curve, progress, opts, ease)?;
    Ok(polyline(&points))
}

/// Build a polyline path through `points`.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

/// SVG path data (`d` attribute) for handing a traced path to a renderer.
pub fn path_svg(path: &BezPath) -> String {
    path.to_svg()
}

fn sample_span<E>(
    curve: &Hypocycloid,
    end: f64,
    opts: &SampleOpts,
    ease: &E,
) -> HypoResult<Vec<Point>>
where
    E: Easing + Sync + ?Sized,
{
    let last = (opts.samples - 1) as f64;
    let at = |i: usize| curve.point(end * ((i as f64) / last), ease);

    if !opts.parallel {
        return Ok((0..opts.samples).map(at).collect());
    }

    let pool = build_thread_pool(opts.threads)?;
    tracing::debug!(threads = pool.current_num_threads(), "sampling in parallel");
    Ok(pool.install(|| (0..opts.samples).into_par_iter().map(at).collect()))
}

fn build_thread_pool(threads: Option<usize>) -> HypoResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| HypoError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/curve/sample.rs"]
mod tests;
