// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Navbar styling and auto-hide on scroll.
//!
//! Scroll events are throttled with a trailing edge: the last offset dropped
//! inside a throttle window is kept and applied by [`NavbarScroll::flush`], so
//! the navbar always ends in the state of the final scroll position.

use crate::effects::{DomEffect, Target};
use crate::util::Throttle;

/// Scroll offset past which the navbar is restyled and may hide
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Minimum spacing between handled scroll events (~one frame)
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Delay before a dropped offset is applied
pub const SCROLL_FLUSH_DELAY_MS: u32 = 16;

const SCROLLED: &str = "scrolled";
const HIDDEN: &str = "translateY(-100%)";
const SHOWN: &str = "translateY(0)";

#[derive(Debug)]
pub struct NavbarScroll {
    last_y: f64,
    pending: Option<f64>,
    throttle: Throttle,
}

impl NavbarScroll {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            pending: None,
            throttle: Throttle::new(SCROLL_THROTTLE_MS),
        }
    }

    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// True while a dropped offset waits for [`flush`](Self::flush)
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Throttled entry point. A dropped event is remembered as pending and
    /// leaves the compared offset in place.
    pub fn scrolled(&mut self, y: f64, now_ms: f64) -> Vec<DomEffect> {
        if !self.throttle.allow(now_ms) {
            self.pending = Some(y);
            return Vec::new();
        }
        self.pending = None;
        self.update(y)
    }

    /// Apply the last dropped offset, if any
    pub fn flush(&mut self) -> Vec<DomEffect> {
        match self.pending.take() {
            Some(y) => self.update(y),
            None => Vec::new(),
        }
    }

    /// Compare with the previous offset and restyle
    pub fn update(&mut self, y: f64) -> Vec<DomEffect> {
        let past_threshold = y > SCROLL_THRESHOLD;
        let class = if past_threshold {
            DomEffect::AddClass { target: Target::Navbar, class: SCROLLED }
        } else {
            DomEffect::RemoveClass { target: Target::Navbar, class: SCROLLED }
        };
        let transform = if y > self.last_y && past_threshold { HIDDEN } else { SHOWN };
        self.last_y = y;

        vec![
            class,
            DomEffect::SetStyle {
                target: Target::Navbar,
                property: "transform",
                value: transform.to_string(),
            },
        ]
    }
}
