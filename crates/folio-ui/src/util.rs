// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Small helpers shared by the behaviors: easing, smooth-scroll planning, number
formatting, timing gates and cross-platform randomness.

Randomness uses platform-specific sources:
- Desktop/Server: `rand` crate
- WASM/Browser: `Math.random()`
*/

/// Navbar height subtracted from anchor scroll targets
pub const SMOOTH_SCROLL_OFFSET: f64 = 80.0;

/// Default smooth-scroll duration
pub const SMOOTH_SCROLL_DURATION_MS: f64 = 1000.0;

/// Source of uniform values in `[0.0, 1.0)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Platform random source
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformRandom;

impl RandomSource for PlatformRandom {
    fn next_f64(&mut self) -> f64 {
        random_f64()
    }
}

/// Generate random f64 in range [0.0, 1.0)
#[cfg(not(target_family = "wasm"))]
pub fn random_f64() -> f64 {
    use rand::Rng;
    rand::thread_rng().gen()
}

#[cfg(target_family = "wasm")]
pub fn random_f64() -> f64 {
    js_sys::Math::random()
}

/// Uniform value in `[min, max)`
pub fn random_between(source: &mut dyn RandomSource, min: f64, max: f64) -> f64 {
    source.next_f64() * (max - min) + min
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(value.min(max))
}

/// Quartic ease-in-out.
///
/// `t` elapsed time, `b` start value, `c` total change, `d` duration.
pub fn ease_in_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t + b;
    }
    t -= 2.0;
    -c / 2.0 * (t * t * t * t - 2.0) + b
}

/// Thousands separators: `1234567` -> `"1,234,567"`
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Planned scroll from the current offset to an element, eased over a fixed
/// duration. The clock starts on the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    start_y: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl SmoothScroll {
    pub fn to_element(element_top: f64, current_y: f64) -> Self {
        Self::new(current_y, element_top - SMOOTH_SCROLL_OFFSET, SMOOTH_SCROLL_DURATION_MS)
    }

    pub fn new(start_y: f64, target_y: f64, duration_ms: f64) -> Self {
        Self {
            start_y,
            distance: target_y - start_y,
            duration_ms,
            started_at: None,
        }
    }

    /// Scroll offset for this frame and whether another frame is needed
    pub fn frame(&mut self, now_ms: f64) -> (f64, bool) {
        let started = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started;
        if elapsed >= self.duration_ms {
            return (self.start_y + self.distance, false);
        }
        (
            ease_in_out_quart(elapsed, self.start_y, self.distance, self.duration_ms),
            true,
        )
    }
}

/// Leading-edge rate limiter
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_fired: None,
        }
    }

    /// True when a call at `now_ms` may run
    pub fn allow(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

/// Trailing-edge (optionally leading-edge) debouncer, driven by the caller's
/// clock
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    immediate: bool,
    pending_since: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: f64, immediate: bool) -> Self {
        Self {
            wait_ms,
            immediate,
            pending_since: None,
        }
    }

    /// Register a call. Returns true when it should run right away
    /// (leading edge in immediate mode).
    pub fn call(&mut self, now_ms: f64) -> bool {
        let call_now = self.immediate && self.pending_since.is_none();
        self.pending_since = Some(now_ms);
        call_now
    }

    /// Returns true once the quiet period after the last call has elapsed.
    /// In immediate mode the trailing edge only re-arms.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.pending_since {
            Some(since) if now_ms - since >= self.wait_ms => {
                self.pending_since = None;
                !self.immediate
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed sequence
    struct SeqRandom(Vec<f64>, usize);

    impl RandomSource for SeqRandom {
        fn next_f64(&mut self) -> f64 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    #[test]
    fn test_ease_in_out_quart_endpoints() {
        assert_eq!(ease_in_out_quart(0.0, 10.0, 100.0, 1000.0), 10.0);
        assert!((ease_in_out_quart(500.0, 10.0, 100.0, 1000.0) - 60.0).abs() < 1e-9);
        assert!((ease_in_out_quart(1000.0, 10.0, 100.0, 1000.0) - 110.0).abs() < 1e-9);
        assert_eq!(ease_in_out_quart(5.0, 0.0, 50.0, 0.0), 50.0);
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut scroll = SmoothScroll::to_element(1080.0, 0.0);

        assert_eq!(scroll.frame(100.0), (0.0, true));
        let (mid, more) = scroll.frame(600.0);
        assert!(more);
        assert!((mid - 500.0).abs() < 1e-9);
        assert_eq!(scroll.frame(1100.0), (1000.0, false));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-98765), "-98,765");
    }

    #[test]
    fn test_clamp_and_random_between() {
        assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp(-1.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 3.0), 2.0);

        let mut rng = SeqRandom(vec![0.0, 0.5], 0);
        assert_eq!(random_between(&mut rng, 10.0, 20.0), 10.0);
        assert_eq!(random_between(&mut rng, 10.0, 20.0), 15.0);
    }

    #[test]
    fn test_platform_random_in_range() {
        let mut rng = PlatformRandom;
        for _ in 0..100 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_throttle() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.allow(0.0));
        assert!(!throttle.allow(10.0));
        assert!(throttle.allow(16.0));
        assert!(!throttle.allow(31.9));
        assert!(throttle.allow(40.0));
    }

    #[test]
    fn test_debounce_trailing() {
        let mut debounce = Debounce::new(100.0, false);
        assert!(!debounce.call(0.0));
        assert!(!debounce.call(50.0));
        assert!(!debounce.poll(120.0));
        assert!(debounce.poll(150.0));
        assert!(!debounce.poll(300.0));
    }

    #[test]
    fn test_debounce_immediate() {
        let mut debounce = Debounce::new(100.0, true);
        assert!(debounce.call(0.0));
        assert!(!debounce.call(20.0));
        assert!(!debounce.poll(200.0));
        assert!(debounce.call(250.0));
    }
}
