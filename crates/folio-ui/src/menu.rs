// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Mobile navigation menu.

use crate::effects::{DomEffect, Target};

/// Viewport width above which the mobile menu is force-closed
pub const MOBILE_BREAKPOINT: f64 = 768.0;

const ACTIVE: &str = "active";

#[derive(Debug, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> Vec<DomEffect> {
        if self.open {
            self.close()
        } else {
            self.open = true;
            vec![
                DomEffect::AddClass { target: Target::MenuToggle, class: ACTIVE },
                DomEffect::AddClass { target: Target::MenuOverlay, class: ACTIVE },
                DomEffect::LockScroll,
            ]
        }
    }

    pub fn close(&mut self) -> Vec<DomEffect> {
        self.open = false;
        vec![
            DomEffect::RemoveClass { target: Target::MenuToggle, class: ACTIVE },
            DomEffect::RemoveClass { target: Target::MenuOverlay, class: ACTIVE },
            DomEffect::UnlockScroll,
        ]
    }

    /// Clicks inside the menu panel are ignored
    pub fn overlay_clicked(&mut self, on_overlay: bool) -> Vec<DomEffect> {
        if on_overlay {
            self.close()
        } else {
            Vec::new()
        }
    }

    pub fn resized(&mut self, width: f64) -> Vec<DomEffect> {
        if width > MOBILE_BREAKPOINT && self.open {
            self.close()
        } else {
            Vec::new()
        }
    }
}
