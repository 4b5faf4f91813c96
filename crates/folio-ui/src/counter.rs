// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Count-up animation for `.stat-number[data-count]`.

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_STEP_MS: u32 = 16;

/// One running count from zero to `target`
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target as f64 / (COUNTER_DURATION_MS / COUNTER_STEP_MS as f64),
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one step and return the text to show. The last step shows
    /// exactly the target; earlier steps show the floor and stay below it.
    pub fn tick(&mut self) -> String {
        if self.finished {
            return self.target.to_string();
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            return self.target.to_string();
        }
        (self.current.floor() as u64).min(self.target).to_string()
    }
}

/// Parse a `data-count` attribute from its leading digits, so `"50+"` counts
/// to 50. Negative or digit-less values are not counters.
pub fn parse_count(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(raw.len(), |(i, _)| i);
    raw[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: u64) -> Vec<u64> {
        let mut counter = CounterAnimation::new(target);
        let mut shown = Vec::new();
        while !counter.is_finished() {
            shown.push(counter.tick().parse::<u64>().unwrap());
            assert!(shown.len() <= 200, "counter did not finish");
        }
        shown
    }

    #[test]
    fn test_ends_exactly_on_target_and_never_exceeds() {
        for target in [1, 2, 7, 125, 999, 12345] {
            let shown = run(target);
            assert_eq!(*shown.last().unwrap(), target);
            assert!(shown.iter().all(|v| *v <= target));
            assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_runs_about_two_seconds() {
        let steps = run(500).len();
        assert!((124..=126).contains(&steps), "{} steps", steps);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        assert_eq!(run(0), vec![0]);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("150"), Some(150));
        assert_eq!(parse_count(" 3 "), Some(3));
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("-4"), None);
        assert_eq!(parse_count("50+"), Some(50));
        assert_eq!(parse_count("98%"), Some(98));
        assert_eq!(parse_count("+12k"), Some(12));
        assert_eq!(parse_count(""), None);
    }
}
