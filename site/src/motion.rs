//! Declarative animation presets and their compilation to CSS.
//!
//! Presets describe *what* an element looks like at rest and once revealed,
//! plus *how* it gets there. The page never animates anything itself: the
//! presets are compiled into a stylesheet (see [`stylesheet`]) and a tiny
//! reveal script flips `data-motion-state` on containers once they scroll
//! into view.
//!
//! # Presets
//!
//! | Preset              | Rest                | Revealed        | Transition                      |
//! |---------------------|---------------------|-----------------|---------------------------------|
//! | [`CONTAINER`]       | opacity 0           | opacity 1       | children delayed 200ms + 200ms·i |
//! | [`ITEM`]            | opacity 0, y +20    | opacity 1, y 0  | spring, stiffness 100           |
//! | [`SLIDE_FROM_LEFT`] | opacity 0, x -50    | opacity 1, x 0  | 800ms ease-out, on mount        |
//! | [`SLIDE_FROM_RIGHT`]| opacity 0, x +50    | opacity 1, x 0  | 800ms ease-out, on mount        |

use serde::Serialize;
use std::time::Duration;

/// A visual state: opacity plus a translation in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
}

impl Pose {
    /// Fully visible, untranslated.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
        }
    }

    pub const fn offset(self, x: f32, y: f32) -> Self {
        Pose { x, y, ..self }
    }

    /// Value for the CSS `translate` property.
    pub fn css_translate(&self) -> String {
        format!("{}px {}px", self.x, self.y)
    }

    /// Declarations applying this pose.
    fn css_declarations(&self) -> String {
        format!(
            "opacity: {}; translate: {};",
            self.opacity,
            self.css_translate()
        )
    }
}

/// Time-based easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseIn => "ease-in",
            Ease::EaseOut => "ease-out",
            Ease::EaseInOut => "ease-in-out",
        }
    }
}

/// Horizon after which a spring is considered settled no matter what.
const SPRING_MAX_DURATION: Duration = Duration::from_secs(10);
const SPRING_SAMPLE_STEP: f64 = 0.005;

/// Damped harmonic oscillator driving a value from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed (units per second) under which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Spring::new(100.0)
    }
}

impl Spring {
    /// Spring with the given stiffness and the usual defaults: damping 10,
    /// mass 1, rest thresholds suited to normalized values.
    pub const fn new(stiffness: f64) -> Self {
        Spring {
            stiffness,
            damping: 10.0,
            mass: 1.0,
            rest_delta: 0.005,
            rest_speed: 0.01,
        }
    }

    pub const fn with_damping(self, damping: f64) -> Self {
        Spring { damping, ..self }
    }

    /// Undamped angular frequency, rad/s.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Position at `t` seconds for a unit step starting at rest.
    pub fn position(&self, t: f64) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        let t = t.max(0.0);

        if (zeta - 1.0).abs() < 1e-9 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = zeta * w0;
            1.0 - (-decay * t).exp() * ((wd * t).cos() + decay / wd * (wd * t).sin())
        } else {
            let (a, r1, b, r2) = self.overdamped_terms();
            1.0 + a * (r1 * t).exp() + b * (r2 * t).exp()
        }
    }

    /// Velocity at `t` seconds, units per second.
    pub fn velocity(&self, t: f64) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        let t = t.max(0.0);

        if (zeta - 1.0).abs() < 1e-9 {
            w0 * w0 * t * (-w0 * t).exp()
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            (-zeta * w0 * t).exp() * (wd * t).sin() * w0 * w0 / wd
        } else {
            let (a, r1, b, r2) = self.overdamped_terms();
            a * r1 * (r1 * t).exp() + b * r2 * (r2 * t).exp()
        }
    }

    /// Coefficients and roots of the two decaying exponentials.
    fn overdamped_terms(&self) -> (f64, f64, f64, f64) {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - root);
        let r2 = -w0 * (zeta + root);
        let a = r2 / (r1 - r2);
        let b = -r1 / (r1 - r2);
        (a, r1, b, r2)
    }

    fn at_rest(&self, t: f64) -> bool {
        (1.0 - self.position(t)).abs() <= self.rest_delta && self.velocity(t).abs() <= self.rest_speed
    }

    /// Time after which the spring never leaves its rest thresholds again.
    pub fn settle_time(&self) -> Duration {
        let horizon = SPRING_MAX_DURATION.as_secs_f64();
        let steps = (horizon / SPRING_SAMPLE_STEP).ceil() as usize;
        let last_moving = (0..=steps)
            .rev()
            .find(|&i| !self.at_rest(i as f64 * SPRING_SAMPLE_STEP));

        match last_moving {
            None => Duration::ZERO,
            Some(i) if i >= steps => SPRING_MAX_DURATION,
            Some(i) => Duration::from_secs_f64((i + 1) as f64 * SPRING_SAMPLE_STEP),
        }
    }

    /// CSS `linear()` easing approximating this spring over [`Self::settle_time`].
    ///
    /// Values may exceed 1 while the spring overshoots; the last stop is
    /// always exactly 1 so the element ends on its resting pose.
    pub fn css_easing(&self, samples: usize) -> String {
        let samples = samples.max(2);
        let duration = self.settle_time().as_secs_f64();
        let stops: Vec<String> = std::iter::once("0".to_string())
            .chain(
                (1..samples - 1)
                    .map(|i| duration * i as f64 / (samples - 1) as f64)
                    .map(|t| format!("{:.3}", self.position(t))),
            )
            .chain(std::iter::once("1".to_string()))
            .collect();
        format!("linear({})", stops.join(", "))
    }
}

/// How a preset moves between its poses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Transition {
    Tween {
        duration: Duration,
        ease: Ease,
    },
    Spring(Spring),
    /// Schedules descendants instead of animating a value of its own.
    Orchestrate {
        delay_children: Duration,
        stagger_children: Duration,
    },
}

impl Transition {
    /// Delay before the `index`-th descendant starts its own animation.
    pub fn child_delay(&self, index: usize) -> Duration {
        match *self {
            Transition::Orchestrate {
                delay_children,
                stagger_children,
            } => delay_children + stagger_children * index as u32,
            _ => Duration::ZERO,
        }
    }
}

/// Rest and revealed poses plus the transition between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

/// When a viewport-triggered preset activates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Never re-hide after the first reveal.
    pub once: bool,
    /// Fraction of the element that must be on screen.
    pub amount: f32,
}

/// Transient scale feedback on pointer hover and press.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gesture {
    pub class: &'static str,
    pub hover: Option<f32>,
    pub tap: Option<f32>,
}

/// Section wrapper: fades in and staggers its items.
pub const CONTAINER: Variants = Variants {
    hidden: Pose::hidden(),
    visible: Pose::REST,
    transition: Transition::Orchestrate {
        delay_children: Duration::from_millis(200),
        stagger_children: Duration::from_millis(200),
    },
};

/// Card inside a [`CONTAINER`]: rises 20px into place on a spring.
pub const ITEM: Variants = Variants {
    hidden: Pose::hidden().offset(0.0, 20.0),
    visible: Pose::REST,
    transition: Transition::Spring(Spring::new(100.0)),
};

const HERO_TWEEN: Transition = Transition::Tween {
    duration: Duration::from_millis(800),
    ease: Ease::EaseOut,
};

/// Hero copy column.
pub const SLIDE_FROM_LEFT: Variants = Variants {
    hidden: Pose::hidden().offset(-50.0, 0.0),
    visible: Pose::REST,
    transition: HERO_TWEEN,
};

/// Hero preview column.
pub const SLIDE_FROM_RIGHT: Variants = Variants {
    hidden: Pose::hidden().offset(50.0, 0.0),
    visible: Pose::REST,
    transition: HERO_TWEEN,
};

/// Reveal once, when 30% of the container is visible.
pub const IN_VIEW: Viewport = Viewport {
    once: true,
    amount: 0.3,
};

/// Fade of a container's own opacity; orchestration carries no timing for it.
const CONTAINER_FADE: Duration = Duration::from_millis(300);

/// Scale feedback uses a stiff, well damped spring.
pub const GESTURE_SPRING: Spring = Spring::new(500.0).with_damping(25.0);

pub const HERO_BUTTON: Gesture = Gesture {
    class: "gesture-hero-button",
    hover: Some(1.05),
    tap: Some(0.95),
};

pub const FEATURE_CARD: Gesture = Gesture {
    class: "gesture-feature-card",
    hover: Some(1.03),
    tap: None,
};

pub const STEP_CARD: Gesture = Gesture {
    class: "gesture-step-card",
    hover: Some(1.02),
    tap: None,
};

pub const CTA_BUTTON: Gesture = Gesture {
    class: "gesture-cta-button",
    hover: Some(1.1),
    tap: Some(0.95),
};

const GESTURES: [Gesture; 4] = [HERO_BUTTON, FEATURE_CARD, STEP_CARD, CTA_BUTTON];

/// Number of stops in generated `linear()` easings.
const EASING_SAMPLES: usize = 40;

/// CSS time value.
pub fn css_time(d: Duration) -> String {
    format!("{}ms", d.as_millis())
}

/// Inline style placing an item at `index` in its container's stagger.
pub fn item_style(index: usize) -> String {
    format!(
        "--motion-delay: {}",
        css_time(CONTAINER.transition.child_delay(index))
    )
}

fn timing(transition: &Transition) -> (Duration, String) {
    match transition {
        Transition::Tween { duration, ease } => (*duration, ease.css().to_string()),
        Transition::Spring(spring) => (spring.settle_time(), spring.css_easing(EASING_SAMPLES)),
        Transition::Orchestrate { .. } => (CONTAINER_FADE, Ease::EaseOut.css().to_string()),
    }
}

fn slide_rules(name: &str, variants: &Variants) -> [String; 2] {
    let (duration, ease) = timing(&variants.transition);
    [
        format!(
            "@keyframes {name} {{ from {{ {} }} to {{ {} }} }}",
            variants.hidden.css_declarations(),
            variants.visible.css_declarations()
        ),
        format!(
            ".{name} {{ animation: {name} {} {ease} both; }}",
            css_time(duration)
        ),
    ]
}

/// Motion stylesheet generated from the presets.
pub fn stylesheet() -> String {
    let (fade, fade_ease) = timing(&CONTAINER.transition);
    let (enter, enter_ease) = timing(&ITEM.transition);
    let (press, press_ease) = (
        GESTURE_SPRING.settle_time(),
        GESTURE_SPRING.css_easing(EASING_SAMPLES),
    );

    let mut rules = vec![
        format!(
            "[data-motion=\"container\"] {{ transition: opacity {} {fade_ease}; }}",
            css_time(fade)
        ),
        format!(
            "[data-motion=\"container\"][data-motion-state=\"hidden\"] {{ opacity: {}; }}",
            CONTAINER.hidden.opacity
        ),
        format!(
            ".gesture {{ transition: scale {} {press_ease}; }}",
            css_time(press)
        ),
        // Replaces `.gesture`'s transition on cards, so it repeats `scale`.
        format!(
            ".motion-item {{ transition: opacity {t} {e} var(--motion-delay, 0ms), translate {t} {e} var(--motion-delay, 0ms), scale {p} {press_ease}; }}",
            t = css_time(enter),
            e = enter_ease,
            p = css_time(press),
        ),
        format!(
            "[data-motion-state=\"hidden\"] .motion-item {{ {} }}",
            ITEM.hidden.css_declarations()
        ),
    ];

    for gesture in GESTURES {
        if let Some(scale) = gesture.hover {
            rules.push(format!(".{}:hover {{ scale: {scale}; }}", gesture.class));
        }
        if let Some(scale) = gesture.tap {
            rules.push(format!(".{}:active {{ scale: {scale}; }}", gesture.class));
        }
    }

    rules.extend(slide_rules("motion-slide-left", &SLIDE_FROM_LEFT));
    rules.extend(slide_rules("motion-slide-right", &SLIDE_FROM_RIGHT));

    let mut css = rules.join("\n");
    css.push('\n');
    css.push_str(
        "@media (prefers-reduced-motion: reduce) {\n\
         \x20 [data-motion], .motion-item, .gesture { transition: none; }\n\
         \x20 .motion-slide-left, .motion-slide-right { animation: none; }\n\
         \x20 [data-motion-state=\"hidden\"], [data-motion-state=\"hidden\"] .motion-item { opacity: 1; translate: none; }\n\
         }\n",
    );
    css
}

/// Styles revealing every container when scripts are disabled.
pub const NOSCRIPT_CSS: &str = "[data-motion-state=\"hidden\"], [data-motion-state=\"hidden\"] .motion-item { opacity: 1; translate: none; }";
