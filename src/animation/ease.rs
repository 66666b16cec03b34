use crate::foundation::error::{HypoError, HypoResult};

/// Highest [`Ease::SmoothStep`] order accepted; beyond it the binomial terms lose precision.
pub const MAX_SMOOTHSTEP_ORDER: u32 = 16;

/// Inflection of the logistic ease the hypocycloid animation is paced with.
pub const REFERENCE_INFLECTION: f64 = 7.0;

/// Strategy mapping normalized progress onto eased progress.
///
/// Implementations must map `0` to `0` and `1` to `1` and be monotonic in between. The motion
/// model only ever sees this trait, so closures work as well as [`Ease`]:
///
/// ```
/// use hypocycloid::{Easing, Point, traced_point_position};
///
/// let linear = |t: f64| t;
/// let p = traced_point_position(Point::ORIGIN, 4.0, 0.0, &linear).unwrap();
/// assert_eq!(p, Point::new(0.0, 2.0));
/// assert_eq!(linear.apply(0.5), 0.5);
/// ```
pub trait Easing {
    /// Map progress `t` onto eased progress.
    fn apply(&self, t: f64) -> f64;
}

impl<F> Easing for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Easing functions used to map normalized motion progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Logistic curve rescaled onto `[0, 1]`; larger `inflection` gives a sharper middle and
    /// flatter ends.
    ///
    /// Inflections so small that the rescaling underflows are rejected by [`Ease::validate`];
    /// [`Ease::apply`] treats them as their limit, [`Ease::Linear`].
    Smooth {
        /// Steepness of the logistic curve, finite and `> 0`.
        inflection: f64,
    },
    /// Generalized smoothstep `S_N`: the first `order` derivatives vanish at both ends.
    ///
    /// Orders above [`MAX_SMOOTHSTEP_ORDER`] are rejected by [`Ease::validate`];
    /// [`Ease::apply`] saturates them to [`MAX_SMOOTHSTEP_ORDER`].
    SmoothStep {
        /// Polynomial order `N`, at most [`MAX_SMOOTHSTEP_ORDER`].
        order: u32,
    },
}

impl Default for Ease {
    fn default() -> Self {
        Self::reference()
    }
}

impl Ease {
    /// The ease the rolling animation uses: [`Ease::Smooth`] with inflection 7.
    pub const fn reference() -> Self {
        Self::Smooth {
            inflection: REFERENCE_INFLECTION,
        }
    }

    /// Check the parameters of parameterized variants.
    pub fn validate(self) -> HypoResult<()> {
        match self {
            Self::Smooth { inflection } => {
                if !inflection.is_finite() || inflection <= 0.0 {
                    return Err(HypoError::validation(format!(
                        "Smooth inflection must be finite and > 0, got {inflection}"
                    )));
                }
                if smooth_scale(inflection).is_none() {
                    return Err(HypoError::validation(format!(
                        "Smooth inflection {inflection} is too small to rescale; use Linear"
                    )));
                }
                Ok(())
            }
            Self::SmoothStep { order } => {
                if order > MAX_SMOOTHSTEP_ORDER {
                    return Err(HypoError::validation(format!(
                        "SmoothStep order must be <= {MAX_SMOOTHSTEP_ORDER}, got {order}"
                    )));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Smooth { inflection } => pinned(t, |t| smooth(t, inflection)),
            Self::SmoothStep { order } => {
                let order = order.min(MAX_SMOOTHSTEP_ORDER);
                pinned(t, |t| smoothstep(t, order))
            }
        }
    }
}

impl Easing for Ease {
    fn apply(&self, t: f64) -> f64 {
        Ease::apply(*self, t)
    }
}

// Endpoints are exact regardless of rounding inside `f`.
fn pinned(t: f64, f: impl Fn(f64) -> f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        f(t).clamp(0.0, 1.0)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

// Offset and span of the logistic over [0, 1]; `None` for non-positive or non-finite
// inflections and once the span is no longer a normal positive number.
fn smooth_scale(inflection: f64) -> Option<(f64, f64)> {
    if !inflection.is_finite() || inflection <= 0.0 {
        return None;
    }
    let error = sigmoid(-inflection / 2.0);
    let span = 1.0 - 2.0 * error;
    (span.is_normal() && span > 0.0).then_some((error, span))
}

fn smooth(t: f64, inflection: f64) -> f64 {
    match smooth_scale(inflection) {
        Some((error, span)) => (sigmoid(inflection * (t - 0.5)) - error) / span,
        None => t,
    }
}

// S_N(x) = 1 - S_N(1 - x); evaluating the upper half through the lower half keeps the
// alternating sum away from cancellation near x = 1.
fn smoothstep(x: f64, order: u32) -> f64 {
    if x > 0.5 {
        return 1.0 - smoothstep_lower(1.0 - x, order);
    }
    smoothstep_lower(x, order)
}

fn smoothstep_lower(x: f64, n: u32) -> f64 {
    let mut sum = 0.0;
    for k in 0..=n {
        sum += binomial(n + k, k) * binomial(2 * n + 1, n - k) * (-x).powi(k as i32);
    }
    x.powi(n as i32 + 1) * sum
}

fn binomial(n: u32, k: u32) -> f64 {
    let k = k.min(n - k);
    let mut acc = 1.0;
    for i in 0..k {
        acc = acc * f64::from(n - i) / f64::from(i + 1);
    }
    acc
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
