// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Custom cursor and trailing follower.

use crate::effects::{DomEffect, Target};

pub const CURSOR_EASING: f64 = 0.9;
pub const FOLLOWER_EASING: f64 = 0.1;
pub const HOVER_SELECTOR: &str = "a, button, .clickable";

const HOVER_CLASS: &str = "cursor-hover";

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    fn ease_toward(&mut self, to: Point, factor: f64) {
        self.x += (to.x - self.x) * factor;
        self.y += (to.y - self.y) * factor;
    }
}

#[derive(Debug, Default)]
pub struct CustomCursor {
    pointer: Point,
    cursor: Point,
    follower: Point,
    hovering: bool,
}

impl CustomCursor {
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Point { x, y };
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn follower(&self) -> Point {
        self.follower
    }

    /// Ease both elements toward the pointer and reposition them
    pub fn frame(&mut self) -> Vec<DomEffect> {
        self.cursor.ease_toward(self.pointer, CURSOR_EASING);
        self.follower.ease_toward(self.pointer, FOLLOWER_EASING);
        vec![translate(Target::Cursor, self.cursor), translate(Target::CursorFollower, self.follower)]
    }

    pub fn hover(&mut self, entered: bool) -> Vec<DomEffect> {
        if entered == self.hovering {
            return Vec::new();
        }
        self.hovering = entered;
        [Target::Cursor, Target::CursorFollower]
            .into_iter()
            .map(|target| {
                if entered {
                    DomEffect::AddClass { target, class: HOVER_CLASS }
                } else {
                    DomEffect::RemoveClass { target, class: HOVER_CLASS }
                }
            })
            .collect()
    }
}

fn translate(target: Target, at: Point) -> DomEffect {
    DomEffect::SetStyle {
        target,
        property: "transform",
        value: format!("translate3d({}px, {}px, 0)", at.x, at.y),
    }
}
