use orrery::Scalar;
use tracing::trace;

/// Half-sine ease between two values.
///
/// The phase is not stored here: [`step`](Self::step) takes the current
/// phase and returns the advanced one, which the caller passes back next
/// time. One phase per animation.
///
/// The curve is `(sin(q + 1.5π) + 1) · (x2 − x1) / d + x1`, i.e.
/// `(1 − cos q) · (x2 − x1) / d + x1`:
/// - full (`d = 2`): `q` runs over `[0, π]` (the last step may pass π), zero
///   velocity at both ends
/// - half (`d = 1`): `q` runs over `[0, π/2]`, eases out of `x1` only
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothLerp<S> {
    /// Phase advance per call (radians).
    pub rate: S,
    /// Traverse a quarter sine instead of a half sine.
    pub half_smooth: bool,
    /// Never saturate: keep advancing and swing between the endpoints.
    pub infinite: bool,
}

impl<S: Scalar> SmoothLerp<S> {
    pub fn new(rate: S) -> Self {
        Self { rate, half_smooth: false, infinite: false }
    }

    pub fn half(mut self) -> Self {
        self.half_smooth = true;
        self
    }

    pub fn infinite(mut self) -> Self {
        self.infinite = true;
        self
    }

    /// Phase at which a one-shot ease reaches `x2`: π, or π/2 when half.
    #[inline]
    pub fn ceiling(&self) -> S {
        if self.half_smooth { S::FRAC_PI_2 } else { S::PI }
    }

    /// Evaluate at `phase`, returning `(value, next_phase)`.
    ///
    /// A one-shot ease whose phase has reached the ceiling returns `x2` and
    /// the phase unchanged.
    pub fn step(&self, x1: S, x2: S, phase: S) -> (S, S) {
        let ceiling = self.ceiling();
        if !self.infinite && phase >= ceiling {
            trace!(phase = phase.to_f64(), "ease saturated");
            return (x2, phase);
        }

        let phase = phase + self.rate;
        // The quarter sine overshoots x2 past π/2; the half sine stays in range.
        let q = if self.infinite {
            fold(phase, ceiling)
        } else if self.half_smooth {
            phase.min(ceiling)
        } else {
            phase
        };
        let divisor = if self.half_smooth { S::ONE } else { S::TWO };
        let value = ((q + S::from_f64(1.5) * S::PI).sin() + S::ONE) * ((x2 - x1) / divisor) + x1;
        (value, phase)
    }
}

/// Reflect `phase` back and forth over `[0, ceiling]`. Identity on that interval.
fn fold<S: Scalar>(phase: S, ceiling: S) -> S {
    let period = ceiling * S::TWO;
    let t = phase - (phase / period).floor() * period;
    if t > ceiling { period - t } else { t }
}

/// One call of the phase-driven ease, see [`SmoothLerp`].
///
/// Returns `(value, phase)`; feed `phase` back on the next call.
pub fn lerp_smooth_1d<S: Scalar>(
    x1: S,
    x2: S,
    p: S,
    rate: S,
    half_smooth: bool,
    infinite: bool,
) -> (S, S) {
    SmoothLerp { rate, half_smooth, infinite }.step(x1, x2, p)
}
