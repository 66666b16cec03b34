//! Hypocycloid motion model.
//!
//! A circle of radius `R / n` rolls without slipping inside a fixed circle of radius `R`. This
//! crate computes, as pure functions of normalized progress `t` in `[0, 1]`:
//!
//! - the rolling circle's centre ([`rolling_center_position`], [`Roll`])
//! - the point on its rim that traces the curve ([`traced_point_position`], [`Hypocycloid`])
//! - sampled polylines of the curve ([`sample_points`], [`trace_path`])
//! - a frame-indexed sweep through several ratios ([`Sweep`])
//!
//! Pacing is an injectable [`Easing`] strategy shared by every operation.
#![forbid(unsafe_code)]

mod animation;
mod curve;
mod foundation;
mod motion;
mod sweep;

pub use crate::animation::ease::{Ease, Easing, MAX_SMOOTHSTEP_ORDER, REFERENCE_INFLECTION};
pub use crate::curve::sample::{SampleOpts, path_svg, polyline, sample_points, trace_path};
pub use crate::foundation::core::{BezPath, Circle, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use crate::foundation::error::{HypoError, HypoResult};
pub use crate::motion::roll::{AngleFrame, Roll, rolling_center_position};
pub use crate::motion::trace::{Hypocycloid, REFERENCE_FIXED_RADIUS, traced_point_position};
pub use crate::sweep::config::SweepConfig;
pub use crate::sweep::timeline::{MotionFrame, Sweep};
