use crate::animation::ease::Ease;
use crate::curve::sample::{SampleOpts, trace_path};
use crate::foundation::core::{BezPath, Circle, FrameIndex, FrameRange, Point};
use crate::foundation::error::{HypoError, HypoResult};
use crate::motion::trace::Hypocycloid;
use crate::sweep::config::SweepConfig;

/// Motion state at one frame of a sweep.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MotionFrame {
    pub frame: FrameIndex,
    /// Timeline position in seconds.
    pub time_secs: f64,
    /// Index into the configured ratios.
    pub segment: usize,
    pub ratio: f64,
    /// Un-eased progress through the current roll, `[0, 1]`.
    pub progress: f64,
    pub fixed_circle: Circle,
    pub rolling_circle: Circle,
    pub traced_point: Point,
}

/// Validated sweep timeline.
///
/// Segment `k` covers frames `[k * L, (k + 1) * L)` with `L = segment_frames`. Inside a segment
/// local frame `i` maps to progress `i / (L - 1)`, so every roll ends exactly on progress 1.
#[derive(Clone, Debug)]
pub struct Sweep {
    config: SweepConfig,
    curves: Vec<Hypocycloid>,
}

impl Sweep {
    #[tracing::instrument(skip(config))]
    pub fn new(config: SweepConfig) -> HypoResult<Self> {
        let curves = config.curves()?;
        tracing::debug!(
            segments = curves.len(),
            segment_frames = config.segment_frames,
            "sweep ready"
        );
        Ok(Self { config, curves })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// One curve per configured ratio, in order.
    pub fn curves(&self) -> &[Hypocycloid] {
        &self.curves
    }

    /// Total number of frames (exclusive end of the timeline).
    pub fn duration(&self) -> FrameIndex {
        FrameIndex(self.curves.len() as u64 * self.config.segment_frames)
    }

    /// The whole timeline, `[0, duration)`.
    pub fn frames(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration(),
        }
    }

    pub fn ease(&self) -> Ease {
        self.config.ease
    }

    /// Segment index and un-eased progress for `frame`.
    pub fn locate(&self, frame: FrameIndex) -> HypoResult<(usize, f64)> {
        if !self.frames().contains(frame) {
            return Err(HypoError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0,
                self.duration().0
            )));
        }
        let len = self.config.segment_frames;
        let segment = (frame.0 / len) as usize;
        let local = frame.0 % len;
        let progress = if len == 1 {
            0.0
        } else {
            local as f64 / (len - 1) as f64
        };
        Ok((segment, progress))
    }

    pub fn eval_frame(&self, frame: FrameIndex) -> HypoResult<MotionFrame> {
        let (segment, progress) = self.locate(frame)?;
        let curve = &self.curves[segment];
        let ease = self.config.ease;
        Ok(MotionFrame {
            frame,
            time_secs: self.config.fps.frames_to_secs(frame.0),
            segment,
            ratio: curve.ratio(),
            progress,
            fixed_circle: curve.fixed_circle(),
            rolling_circle: curve.rolling_circle_at(progress, &ease),
            traced_point: curve.point(progress, &ease),
        })
    }

    /// Evaluate every frame of a half-open range.
    #[tracing::instrument(skip(self))]
    pub fn eval_range(&self, range: FrameRange) -> HypoResult<Vec<MotionFrame>> {
        if range.is_empty() {
            return Ok(Vec::new());
        }
        if range.end.0 > self.duration().0 {
            return Err(HypoError::evaluation(format!(
                "range end {} exceeds duration {}",
                range.end.0,
                self.duration().0
            )));
        }
        let mut out = Vec::with_capacity(range.len_frames() as usize);
        for f in range.start.0..range.end.0 {
            out.push(self.eval_frame(FrameIndex(f))?);
        }
        Ok(out)
    }

    /// Evaluate the whole timeline.
    pub fn eval_all(&self) -> HypoResult<Vec<MotionFrame>> {
        self.eval_range(self.frames())
    }

    /// Curve traced so far at `frame` within its segment.
    ///
    /// Progress is eased the same way as the traced point, so the path always ends at
    /// [`MotionFrame::traced_point`].
    pub fn trace_at(&self, frame: FrameIndex, opts: &SampleOpts) -> HypoResult<BezPath> {
        let (segment, progress) = self.locate(frame)?;
        trace_path(&self.curves[segment], progress, opts, &self.config.ease)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sweep/timeline.rs"]
mod tests;
