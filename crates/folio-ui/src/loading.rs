// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Loading screen: fade after a fixed delay, then remove from layout.

use crate::effects::{DomEffect, Target};

pub const FADE_DELAY_MS: u32 = 1500;
pub const HIDE_DELAY_MS: u32 = 500;

pub fn fade_out() -> DomEffect {
    DomEffect::AddClass {
        target: Target::LoadingScreen,
        class: "fade-out",
    }
}

pub fn hide() -> DomEffect {
    DomEffect::SetStyle {
        target: Target::LoadingScreen,
        property: "display",
        value: "none".to_string(),
    }
}
