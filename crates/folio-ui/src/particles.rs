// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Floating hero particles.

use crate::util::{random_between, RandomSource};

pub const PARTICLE_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub alpha: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        Self {
            size_px: random_between(rng, 1.0, 4.0),
            alpha: random_between(rng, 0.3, 0.8),
            left_pct: random_between(rng, 0.0, 100.0),
            top_pct: random_between(rng, 0.0, 100.0),
            duration_s: random_between(rng, 10.0, 20.0),
            delay_s: random_between(rng, 0.0, 10.0),
        }
    }

    /// Inline `style` attribute value
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; \
             background: rgba(99, 102, 241, {alpha}); border-radius: 50%; \
             left: {left}%; top: {top}%; \
             animation: particleFloat {duration}s linear infinite; \
             animation-delay: {delay}s;",
            size = self.size_px,
            alpha = self.alpha,
            left = self.left_pct,
            top = self.top_pct,
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

pub fn generate(count: usize, rng: &mut dyn RandomSource) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
