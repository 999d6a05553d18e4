use std::time::Duration;

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// A fixed-duration tween with the standard fast-out-slow-in curve.
    pub fn tween(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis), Easing::FastOutSlowIn)
    }

    /// A physics spring. The duration is the spring's settle time.
    pub fn spring(spring: Spring) -> Self {
        Self::new(spring.settle_duration(), Easing::Spring(spring))
    }
}

impl Default for TransitionConfig {
    /// The toolkit default: a stiff, non-bouncy spring.
    fn default() -> Self {
        Self::spring(Spring::default())
    }
}

/// Damped harmonic spring with unit mass, animating from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping_ratio: f32,
}

impl Spring {
    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
    pub const STIFFNESS_LOW: f32 = 200.0;
    pub const STIFFNESS_VERY_LOW: f32 = 50.0;

    pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

    /// Remaining displacement considered "at rest".
    const REST_THRESHOLD: f32 = 0.001;

    pub const fn new(stiffness: f32, damping_ratio: f32) -> Self {
        Self {
            stiffness,
            damping_ratio,
        }
    }

    fn natural_frequency(&self) -> f32 {
        self.stiffness.max(f32::EPSILON).sqrt()
    }

    /// Rate at which the slowest mode decays.
    fn decay_rate(&self) -> f32 {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio.max(0.0);
        if zeta > 1.0 {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        } else {
            (omega * zeta).max(f32::EPSILON)
        }
    }

    /// Time until the envelope of the oscillation drops below the rest threshold.
    pub fn settle_duration(&self) -> Duration {
        let seconds = (1.0 / Self::REST_THRESHOLD).ln() / self.decay_rate();
        Duration::from_secs_f32(seconds.min(60.0))
    }

    /// Spring position after `seconds`, starting at rest at 0 with target 1.
    pub fn position(&self, seconds: f32) -> f32 {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio.max(0.0);
        let t = seconds.max(0.0);

        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            1.0 - envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
        } else if zeta == 1.0 {
            1.0 - (1.0 + omega * t) * (-omega * t).exp()
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(Self::STIFFNESS_MEDIUM, Self::DAMPING_RATIO_NO_BOUNCY)
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Cubic bezier (0.4, 0.0, 0.2, 1.0).
    FastOutSlowIn,
    Spring(Spring),
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    ///
    /// Springs may overshoot 1.0 before settling; every curve ends exactly at 1.0.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::Spring(spring) => {
                let settle = spring.settle_duration().as_secs_f32();
                spring.position(t * settle)
            }
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    fn component(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    // x(s) is monotonic for control points inside the unit square
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..32 {
        let mid = (lo + hi) / 2.0;
        if component(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    component(y1, y2, (lo + hi) / 2.0)
}

/// Transitions configuration for an element.
/// Similar to Style, this is a builder for configuring property transitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transitions {
    pub background: Option<TransitionConfig>,
    pub foreground: Option<TransitionConfig>,
    pub rotation: Option<TransitionConfig>,
    /// Laid-out height changes.
    pub height: Option<TransitionConfig>,
    /// Grow from zero height when the element is first mounted.
    pub enter_height: Option<TransitionConfig>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, config: TransitionConfig) -> Self {
        self.background = Some(config);
        self
    }

    pub fn foreground(mut self, config: TransitionConfig) -> Self {
        self.foreground = Some(config);
        self
    }

    pub fn rotation(mut self, config: TransitionConfig) -> Self {
        self.rotation = Some(config);
        self
    }

    pub fn height(mut self, config: TransitionConfig) -> Self {
        self.height = Some(config);
        self
    }

    pub fn enter_height(mut self, config: TransitionConfig) -> Self {
        self.enter_height = Some(config);
        self
    }

    /// Returns true if any transition is configured.
    pub fn has_any(&self) -> bool {
        self.background.is_some()
            || self.foreground.is_some()
            || self.rotation.is_some()
            || self.height.is_some()
            || self.enter_height.is_some()
    }
}
