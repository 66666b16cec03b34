use std::f64::consts::TAU;

use crate::animation::ease::Easing;
use crate::foundation::core::{Circle, Point, Vec2};
use crate::foundation::error::{HypoError, HypoResult};
use crate::motion::roll::Roll;

/// Fixed-circle radius the closed-form traced-point formula is written for.
pub const REFERENCE_FIXED_RADIUS: f64 = 2.0;

/// Hypocycloid traced by a circle of radius `fixed_radius / ratio` rolling inside a fixed circle
/// of radius `fixed_radius` centred at `origin`.
///
/// The traced point starts at the top of the fixed circle and the rolling circle travels
/// counter-clockwise. Integer ratios `n >= 2` close after one revolution with `n` cusps; `n = 2`
/// collapses to the vertical diameter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Hypocycloid {
    origin: Point,
    fixed_radius: f64,
    ratio: f64,
}

impl Hypocycloid {
    /// Hypocycloid at the reference scale (fixed radius 2).
    pub fn new(origin: Point, ratio: f64) -> HypoResult<Self> {
        Self::with_radius(origin, REFERENCE_FIXED_RADIUS, ratio)
    }

    /// Hypocycloid inside a fixed circle of radius `fixed_radius`.
    pub fn with_radius(origin: Point, fixed_radius: f64, ratio: f64) -> HypoResult<Self> {
        check_ratio(ratio)?;
        if !fixed_radius.is_finite() || fixed_radius <= 0.0 {
            return Err(HypoError::validation(format!(
                "fixed radius must be finite and > 0, got {fixed_radius}"
            )));
        }
        if !origin.is_finite() {
            return Err(HypoError::validation("origin must be finite"));
        }
        Ok(Self {
            origin,
            fixed_radius,
            ratio,
        })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn fixed_radius(&self) -> f64 {
        self.fixed_radius
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Radius of the rolling circle, `fixed_radius / ratio` (absolute value).
    pub fn rolling_radius(&self) -> f64 {
        (self.fixed_radius / self.ratio).abs()
    }

    /// Number of cusps when the ratio is a positive integer `>= 2`.
    pub fn cusp_count(&self) -> Option<u32> {
        let n = self.ratio;
        if n >= 2.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) {
            Some(n as u32)
        } else {
            None
        }
    }

    pub fn fixed_circle(&self) -> Circle {
        Circle::new(self.origin, self.fixed_radius)
    }

    /// Motion of the rolling circle's centre: tangent to the top of the fixed circle at
    /// progress 0, one full counter-clockwise turn over `[0, 1]`. The starting angle is
    /// measured around `origin` ([`crate::AngleFrame::Origin`]) so the circle stays tangent for
    /// any origin.
    pub fn rolling_circle(&self) -> Roll {
        let offset = self.fixed_radius - self.fixed_radius / self.ratio;
        Roll::full_turn(self.origin, self.origin + Vec2::new(0.0, offset)).relative_to_origin()
    }

    /// The rolling circle at progress `t`.
    pub fn rolling_circle_at<E: Easing + ?Sized>(&self, t: f64, ease: &E) -> Circle {
        Circle::new(self.rolling_circle().position(t, ease), self.rolling_radius())
    }

    /// Offset of the traced point from `origin` after the rolling circle's centre has turned
    /// `theta` radians.
    pub fn local_offset(&self, theta: f64) -> Vec2 {
        unit_offset(self.ratio, theta) * (self.fixed_radius / REFERENCE_FIXED_RADIUS)
    }

    pub fn point_at_angle(&self, theta: f64) -> Point {
        self.origin + self.local_offset(theta)
    }

    /// Traced point at progress `t`.
    pub fn point<E: Easing + ?Sized>(&self, t: f64, ease: &E) -> Point {
        self.point_at_angle(ease.apply(t) * TAU)
    }
}

/// Traced point at progress `t` for ratio `n` at the reference scale (fixed radius 2):
///
/// `x = (-(n-1) sin θ + sin((n-1) θ)) / (n/2)`, `y = ((n-1) cos θ + cos((n-1) θ)) / (n/2)`,
/// with `θ = ease(t) · 2π`.
///
/// Fails with [`HypoError::InvalidRatio`] when `n` is zero or not finite.
pub fn traced_point_position<E: Easing + ?Sized>(
    origin: Point,
    n: f64,
    t: f64,
    ease: &E,
) -> HypoResult<Point> {
    check_ratio(n)?;
    Ok(origin + unit_offset(n, ease.apply(t) * TAU))
}

fn check_ratio(n: f64) -> HypoResult<()> {
    if n == 0.0 || !n.is_finite() {
        return Err(HypoError::InvalidRatio(n));
    }
    Ok(())
}

fn unit_offset(n: f64, theta: f64) -> Vec2 {
    let m = n - 1.0;
    let half = n / 2.0;
    Vec2::new(
        (-m * theta.sin() + (m * theta).sin()) / half,
        (m * theta.cos() + (m * theta).cos()) / half,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/motion/trace.rs"]
mod tests;
