// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Inputs to and outputs from the interaction controller.

use serde::{Deserialize, Serialize};

use crate::tasks::TaskTicket;

/// Page elements the controller addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// `document.documentElement`
    Root,
    Body,
    LoadingScreen,
    Navbar,
    MenuToggle,
    MenuOverlay,
    Typewriter,
    /// n-th `.stat-number[data-count]`
    Counter(usize),
    /// n-th element carrying one of the reveal classes
    Reveal(usize),
    /// n-th `.stagger-container`
    Stagger(usize),
    Particles,
    Cursor,
    CursorFollower,
}

/// IntersectionObserver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

/// Everything the controller asks the page to do
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DomEffect {
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    SetText { target: Target, text: String },
    SetStyle { target: Target, property: &'static str, value: String },
    SetAttribute { target: Target, name: &'static str, value: String },
    LockScroll,
    UnlockScroll,
    ScrollTo { y: f64 },
    Observe { target: Target, options: ObserverOptions },
    Unobserve { target: Target },
    /// Append one `div.particle` per inline style string
    MountParticles { styles: Vec<String> },
    /// Build the video modal around an autoplaying `<video>` of `src`
    MountModal { src: String },
    UnmountModal,
    ScheduleTimer { ticket: TaskTicket, delay_ms: u32 },
    RequestFrame { ticket: TaskTicket },
    CancelTask { ticket: TaskTicket },
}

/// What exists on the page when it becomes ready
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub has_loading_screen: bool,
    pub has_navbar: bool,
    /// Toggle button and overlay are both present
    pub has_mobile_menu: bool,
    pub has_theme_toggle: bool,
    pub has_typewriter: bool,
    /// Parsed `data-count` per counter; `None` when unparseable
    pub counters: Vec<Option<u64>>,
    pub reveal_count: usize,
    pub stagger_count: usize,
    pub has_particles: bool,
    /// Cursor and follower are both present
    pub has_cursor: bool,
    pub viewport_width: f64,
    pub scroll_y: f64,
}

/// Browser events routed into the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    Ready(PageSnapshot),
    MenuToggleClicked,
    /// `on_overlay` is true when the click target is the overlay itself
    MenuOverlayClicked { on_overlay: bool },
    ThemeToggleClicked,
    Scrolled { y: f64, now_ms: f64 },
    Resized { width: f64 },
    KeyDown { key: String },
    PointerMoved { x: f64, y: f64 },
    /// Pointer entered an `a, button, .clickable` element
    HoverEntered,
    HoverLeft,
    AnchorClicked { target_top: f64, current_y: f64 },
    PlayVideoClicked { src: String },
    ModalCloseClicked,
    /// `on_backdrop` is true when the click target is the backdrop itself
    ModalBackdropClicked { on_backdrop: bool },
    Intersected { target: Target },
    TimerFired { ticket: TaskTicket },
    AnimationFrame { ticket: TaskTicket, now_ms: f64 },
}
