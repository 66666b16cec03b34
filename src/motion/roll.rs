use std::f64::consts::TAU;

use crate::animation::ease::Easing;
use crate::foundation::core::{Point, Vec2};

/// Where the starting polar angle of a [`Roll`] is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleFrame {
    /// `atan2(start.y, start.x)`: the start position's angle around the coordinate origin.
    #[default]
    World,
    /// `atan2` of `start - origin`: the start position's angle around the fixed circle's centre.
    /// Progress 0 then lands exactly on `start` for any `origin`.
    Origin,
}

/// Circular motion of a rolling circle's centre around the fixed circle's centre.
///
/// The start position is captured once. The radius is always `|start - origin|`; the starting
/// angle follows [`AngleFrame`]. `span` radians are swept as eased progress goes from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Roll {
    /// Centre of the fixed circle.
    pub origin: Point,
    /// Centre of the rolling circle at progress 0.
    pub start: Point,
    /// Total angle in radians swept over progress `[0, 1]`. Positive is counter-clockwise.
    pub span: f64,
    /// Reference for the starting angle.
    #[serde(default)]
    pub frame: AngleFrame,
}

impl Roll {
    /// Create a roll sweeping `span` radians.
    pub fn new(origin: Point, start: Point, span: f64) -> Self {
        Self {
            origin,
            start,
            span,
            frame: AngleFrame::World,
        }
    }

    /// Measure the starting angle around `origin` instead of the coordinate origin.
    pub fn relative_to_origin(self) -> Self {
        Self {
            frame: AngleFrame::Origin,
            ..self
        }
    }

    /// Create a roll sweeping one full turn.
    pub fn full_turn(origin: Point, start: Point) -> Self {
        Self::new(origin, start, TAU)
    }

    /// Distance from `origin` to the centre; constant over the whole roll.
    pub fn radius(&self) -> f64 {
        (self.start - self.origin).hypot()
    }

    /// Starting polar angle, per [`AngleFrame`].
    pub fn start_angle(&self) -> f64 {
        match self.frame {
            AngleFrame::World => self.start.to_vec2().atan2(),
            AngleFrame::Origin => (self.start - self.origin).atan2(),
        }
    }

    /// Centre position after turning `angle` radians away from the start.
    pub fn position_at_angle(&self, angle: f64) -> Point {
        self.origin + Vec2::from_angle(self.start_angle() + angle) * self.radius()
    }

    /// Centre position at progress `t`.
    pub fn position<E: Easing + ?Sized>(&self, t: f64, ease: &E) -> Point {
        self.position_at_angle(self.span * ease.apply(t))
    }
}

/// Rolling-circle centre at progress `t`, sweeping `span` radians around `origin`.
///
/// `origin + |start - origin| * (cos(a + span * ease(t)), sin(a + span * ease(t)))` with
/// `a = atan2(start.y, start.x)`. `start == origin` is a degenerate roll that stays at `origin`.
pub fn rolling_center_position<E: Easing + ?Sized>(
    origin: Point,
    start: Point,
    t: f64,
    span: f64,
    ease: &E,
) -> Point {
    Roll::new(origin, start, span).position(t, ease)
}

#[cfg(test)]
#[path = "../../tests/unit/motion/roll.rs"]
mod tests;
