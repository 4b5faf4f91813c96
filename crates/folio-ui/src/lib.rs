// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# folio client interaction controller

Every visual behavior of the site (loading screen, mobile menu, theme,
navbar, typewriter, counters, reveal-on-scroll, particles, custom cursor,
video modal) as a state machine driven by [`UiEvent`]s and answering with
[`DomEffect`]s. Nothing here touches a browser, so the whole session can be
exercised in plain unit tests.

With the `wasm` feature on a wasm target, [`dom`] binds the controller to the
live page.
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod controller;
pub mod counter;
pub mod cursor;
pub mod effects;
pub mod loading;
pub mod menu;
pub mod modal;
pub mod navbar;
pub mod particles;
pub mod reveal;
pub mod tasks;
pub mod theme;
pub mod typewriter;
pub mod util;

#[cfg(all(feature = "wasm", target_family = "wasm"))]
pub mod dom;

pub use controller::{InteractionController, SessionState};
pub use effects::{DomEffect, ObserverOptions, PageSnapshot, Target, UiEvent};
pub use tasks::{TaskId, TaskRegistry, TaskTicket};
pub use theme::{MemoryStore, Theme, ThemeStore};
