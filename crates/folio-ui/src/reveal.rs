// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Reveal-on-scroll classes.

use std::collections::HashSet;

use crate::effects::{DomEffect, ObserverOptions, Target};

/// Elements that gain `visible` when they first intersect
pub const REVEAL_SELECTOR: &str =
    ".fade-in-observer, .slide-in-left-observer, .slide-in-right-observer, .scale-in-observer";

/// Containers that gain `animate` once
pub const STAGGER_SELECTOR: &str = ".stagger-container";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn reveal_observer_options() -> ObserverOptions {
    ObserverOptions {
        threshold: REVEAL_THRESHOLD,
        root_margin: REVEAL_ROOT_MARGIN.to_string(),
    }
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
    staggered: HashSet<usize>,
}

impl RevealTracker {
    /// Observe every reveal element and stagger container
    pub fn attach(reveal_count: usize, stagger_count: usize) -> Vec<DomEffect> {
        (0..reveal_count)
            .map(Target::Reveal)
            .chain((0..stagger_count).map(Target::Stagger))
            .map(|target| DomEffect::Observe {
                target,
                options: reveal_observer_options(),
            })
            .collect()
    }

    pub fn intersected(&mut self, target: Target) -> Vec<DomEffect> {
        match target {
            Target::Reveal(i) if self.revealed.insert(i) => {
                vec![DomEffect::AddClass { target, class: "visible" }]
            }
            Target::Stagger(i) if self.staggered.insert(i) => vec![
                DomEffect::AddClass { target, class: "animate" },
                DomEffect::Unobserve { target },
            ],
            _ => Vec::new(),
        }
    }
}
