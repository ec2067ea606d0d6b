pub const HERO_FADE_END: f64 = 0.05;
pub const HERO_MIN_SCALE: f64 = 0.8;

// seconds between siblings in a staggered group
pub const STAGGER_STEP: f64 = 0.1;
pub const TIMELINE_STEP: f64 = 0.2;

/// Dips slightly below the start before a long, fast settle.
pub const EASE_ANTICIPATE: Ease = Ease::CubicBezier(0.6, -0.05, 0.01, 0.99);

/// Linear interpolation of `input` from `from` onto `to`, clamped at both ends.
pub fn interpolate(input: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let (in_start, in_end) = from;
    let (out_start, out_end) = to;
    if input.is_nan() {
        return out_start;
    }
    if in_end <= in_start {
        return if input >= in_end { out_end } else { out_start };
    }
    let t = ((input - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start * (1.0 - t) + out_end * t
}

pub fn hero_opacity(progress: f64) -> f64 {
    interpolate(progress, (0.0, HERO_FADE_END), (1.0, 0.0))
}

pub fn hero_scale(progress: f64) -> f64 {
    interpolate(progress, (0.0, HERO_FADE_END), (1.0, HERO_MIN_SCALE))
}

pub fn hero_style(progress: f64) -> String {
    format!(
        "opacity: {}; transform: scale({});",
        hero_opacity(progress),
        hero_scale(progress)
    )
}

pub fn progress_bar_style(progress: f64) -> String {
    format!(
        "transform: scaleX({}); transform-origin: 0% 50%;",
        progress.clamp(0.0, 1.0)
    )
}

pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP
}

pub fn timeline_delay(index: usize) -> f64 {
    index as f64 * TIMELINE_STEP
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Ease {
    fn css(&self) -> String {
        match self {
            Self::EaseOut => "ease-out".to_string(),
            Self::CubicBezier(a, b, c, d) => format!("cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: Ease::EaseOut,
        }
    }

    pub const fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn css(&self) -> String {
        let ease = self.ease.css();
        format!(
            "transition: opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s;",
            d = self.duration,
            delay = self.delay,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn offset_y(y: f64) -> Self {
        Self {
            opacity: 0.0,
            x: 0.0,
            y,
            scale: 1.0,
        }
    }

    /// Moved but already opaque; only the position animates.
    pub const fn shifted_y(y: f64) -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y,
            scale: 1.0,
        }
    }

    pub const fn offset_x(x: f64) -> Self {
        Self {
            opacity: 0.0,
            x,
            y: 0.0,
            scale: 1.0,
        }
    }

    pub const fn scaled(scale: f64) -> Self {
        Self {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

/// Animation from an offset, invisible pose to [`Pose::REST`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub from: Pose,
    pub transition: Transition,
}

impl Entrance {
    pub const fn new(from: Pose, transition: Transition) -> Self {
        Self { from, transition }
    }

    pub const fn delayed(mut self, delay: f64) -> Self {
        self.transition.delay = delay;
        self
    }

    pub fn style(&self, shown: bool) -> String {
        let pose = if shown { Pose::REST } else { self.from };
        format!("{} {}", pose.css(), self.transition.css())
    }
}

pub const FADE_IN_UP: Entrance = Entrance::new(
    Pose::offset_y(60.0),
    Transition::new(0.8).ease(EASE_ANTICIPATE),
);

pub const RISE: Entrance = Entrance::new(Pose::offset_y(20.0), Transition::new(0.6));

pub const HERO_CONTENT_IN: Entrance =
    Entrance::new(Pose::offset_y(20.0), Transition::new(1.0)).delayed(0.2);
pub const HERO_TITLE_RISE: Entrance = Entrance::new(
    Pose::shifted_y(50.0),
    Transition::new(0.8).ease(EASE_ANTICIPATE),
);
pub const HERO_RISE: Entrance = Entrance::new(
    Pose::offset_y(50.0),
    Transition::new(0.8).ease(EASE_ANTICIPATE),
);

pub const SLIDE_IN_LEFT: Entrance = Entrance::new(Pose::offset_x(-20.0), Transition::new(0.5));
pub const DROP_IN: Entrance = Entrance::new(Pose::offset_y(-20.0), Transition::new(0.5));

pub const OVERLAY_IN: Entrance = Entrance::new(Pose::scaled(0.95), Transition::new(0.3));
pub const OVERLAY_LINK_IN: Entrance = Entrance::new(Pose::offset_y(20.0), Transition::new(0.3));

/// Latches the first sighting of an element so its reveal does not repeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, visible: bool) -> bool {
        self.revealed |= visible;
        self.revealed
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_interpolate_clamps() {
        assert_eq!(interpolate(-1.0, (0.0, 1.0), (10.0, 20.0)), 10.0);
        assert_eq!(interpolate(2.0, (0.0, 1.0), (10.0, 20.0)), 20.0);
        assert!(approx(interpolate(0.25, (0.0, 1.0), (10.0, 20.0)), 12.5));
        // degenerate input range steps instead of dividing by zero
        assert_eq!(interpolate(0.4, (0.5, 0.5), (1.0, 0.0)), 1.0);
        assert_eq!(interpolate(0.5, (0.5, 0.5), (1.0, 0.0)), 0.0);
        assert_eq!(interpolate(f64::NAN, (0.0, 1.0), (3.0, 4.0)), 3.0);
    }

    #[test]
    fn test_hero_fade_and_shrink() {
        for p in [-0.5, -0.01, 0.0] {
            assert_eq!(hero_opacity(p), 1.0);
            assert_eq!(hero_scale(p), 1.0);
        }

        assert_eq!(hero_opacity(HERO_FADE_END), 0.0);
        assert_eq!(hero_scale(HERO_FADE_END), HERO_MIN_SCALE);

        assert!(approx(hero_opacity(0.025), 0.5));
        assert!(approx(hero_scale(0.025), 0.9));

        for p in [0.06, 0.5, 1.0] {
            assert_eq!(hero_opacity(p), 0.0);
            assert_eq!(hero_scale(p), HERO_MIN_SCALE);
        }
    }

    #[test]
    fn test_hero_values_only_decrease_with_scroll() {
        let mut last = (hero_opacity(0.0), hero_scale(0.0));
        for step in 1..=100 {
            let p = step as f64 / 1000.0;
            let cur = (hero_opacity(p), hero_scale(p));
            assert!(cur.0 <= last.0 && cur.1 <= last.1);
            last = cur;
        }
    }

    #[test]
    fn test_styles() {
        assert_eq!(hero_style(0.0), "opacity: 1; transform: scale(1);");
        assert_eq!(hero_style(0.5), "opacity: 0; transform: scale(0.8);");
        assert_eq!(
            progress_bar_style(0.5),
            "transform: scaleX(0.5); transform-origin: 0% 50%;"
        );
        assert!(progress_bar_style(1.7).starts_with("transform: scaleX(1);"));
    }

    #[test]
    fn test_entrance_style() {
        let hidden = FADE_IN_UP.style(false);
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, 60px) scale(1);"));
        assert!(hidden.contains("cubic-bezier(0.6, -0.05, 0.01, 0.99)"));

        let shown = RISE.delayed(0.4).style(true);
        assert!(shown.starts_with("opacity: 1; transform: translate(0px, 0px) scale(1);"));
        assert!(shown.contains("opacity 0.6s ease-out 0.4s"));
    }

    #[test]
    fn test_hero_entrances() {
        let wrapper = HERO_CONTENT_IN.style(false);
        assert!(wrapper.starts_with("opacity: 0; transform: translate(0px, 20px) scale(1);"));
        assert!(wrapper.contains("opacity 1s ease-out 0.2s"));

        // the title only moves; it is never transparent
        let title = HERO_TITLE_RISE.style(false);
        assert!(title.starts_with("opacity: 1; transform: translate(0px, 50px) scale(1);"));
        assert!(HERO_RISE.delayed(0.2).style(false).starts_with("opacity: 0;"));
    }

    #[test]
    fn test_timeline_delay() {
        let delays = (0..4).map(timeline_delay).collect::<Vec<_>>();
        for (got, want) in delays.iter().zip([0.0, 0.2, 0.4, 0.6]) {
            assert!(approx(*got, want));
        }
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0.0);
        assert!(approx(stagger_delay(3), 0.3));
        let delays = (0..12).map(stagger_delay).collect::<Vec<_>>();
        assert!(delays.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_reveal_latch_is_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        // scrolled away and back
        assert!(latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.revealed());
    }
}
