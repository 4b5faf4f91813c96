// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
The interaction controller.

```text
 browser event -> UiEvent -> InteractionController::handle -> Vec<DomEffect> -> DOM
                                   |
                            SessionState + TaskRegistry
```

All per-page state lives in one [`SessionState`]. Behaviors whose element is
missing from the page are never attached and ignore their events.
*/

use tracing::debug;

use crate::counter::{CounterAnimation, COUNTER_STEP_MS};
use crate::cursor::CustomCursor;
use crate::effects::{DomEffect, ObserverOptions, PageSnapshot, Target, UiEvent};
use crate::loading;
use crate::menu::MobileMenu;
use crate::modal::VideoModal;
use crate::navbar::{NavbarScroll, SCROLL_FLUSH_DELAY_MS};
use crate::particles::{self, PARTICLE_COUNT};
use crate::reveal::RevealTracker;
use crate::tasks::{TaskId, TaskRegistry, TaskTicket};
use crate::theme::{ThemeState, ThemeStore};
use crate::typewriter::Typewriter;
use crate::util::{PlatformRandom, RandomSource, SmoothScroll};

/// One `.stat-number[data-count]`
#[derive(Debug)]
pub struct CounterSlot {
    pub target: u64,
    pub triggered: bool,
    animation: Option<CounterAnimation>,
}

/// Everything the page session remembers between events
#[derive(Debug, Default)]
pub struct SessionState {
    pub page: PageSnapshot,
    pub ready: bool,
    pub menu: MobileMenu,
    pub theme: ThemeState,
    pub navbar: Option<NavbarScroll>,
    pub typewriter: Option<Typewriter>,
    pub counters: Vec<Option<CounterSlot>>,
    pub reveal: RevealTracker,
    pub cursor: Option<CustomCursor>,
    pub modal: VideoModal,
    pub smooth_scroll: Option<SmoothScroll>,
}

pub struct InteractionController {
    session: SessionState,
    tasks: TaskRegistry,
    store: Box<dyn ThemeStore>,
    rng: Box<dyn RandomSource>,
}

impl InteractionController {
    pub fn new(store: Box<dyn ThemeStore>) -> Self {
        Self::with_random(store, Box::new(PlatformRandom))
    }

    pub fn with_random(store: Box<dyn ThemeStore>, rng: Box<dyn RandomSource>) -> Self {
        Self {
            session: SessionState::default(),
            tasks: TaskRegistry::new(),
            store,
            rng,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    pub fn store(&self) -> &dyn ThemeStore {
        self.store.as_ref()
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<DomEffect> {
        if !self.session.ready && !matches!(event, UiEvent::Ready(_)) {
            return Vec::new();
        }

        match event {
            UiEvent::Ready(page) => self.attach(page),
            UiEvent::MenuToggleClicked if self.session.page.has_mobile_menu => {
                self.session.menu.toggle()
            }
            UiEvent::MenuOverlayClicked { on_overlay } if self.session.page.has_mobile_menu => {
                self.session.menu.overlay_clicked(on_overlay)
            }
            UiEvent::ThemeToggleClicked if self.session.page.has_theme_toggle => {
                vec![self.session.theme.toggle(self.store.as_mut())]
            }
            UiEvent::Scrolled { y, now_ms } => self.scrolled(y, now_ms),
            UiEvent::Resized { width } if self.session.page.has_mobile_menu => {
                self.session.menu.resized(width)
            }
            UiEvent::KeyDown { key } => self.session.modal.key_down(&key),
            UiEvent::PointerMoved { x, y } => {
                if let Some(cursor) = self.session.cursor.as_mut() {
                    cursor.pointer_moved(x, y);
                }
                Vec::new()
            }
            UiEvent::HoverEntered => self.hover(true),
            UiEvent::HoverLeft => self.hover(false),
            UiEvent::AnchorClicked { target_top, current_y } => {
                self.session.smooth_scroll = Some(SmoothScroll::to_element(target_top, current_y));
                let mut effects = Vec::new();
                let ticket = self.start_task(TaskId::SmoothScroll, &mut effects);
                effects.push(DomEffect::RequestFrame { ticket });
                effects
            }
            UiEvent::PlayVideoClicked { src } => self.session.modal.open(&src),
            UiEvent::ModalCloseClicked => self.session.modal.close(),
            UiEvent::ModalBackdropClicked { on_backdrop } => {
                self.session.modal.backdrop_clicked(on_backdrop)
            }
            UiEvent::Intersected { target } => self.intersected(target),
            UiEvent::TimerFired { ticket } => self.timer_fired(ticket),
            UiEvent::AnimationFrame { ticket, now_ms } => self.animation_frame(ticket, now_ms),
            _ => Vec::new(),
        }
    }

    /// Cancel every running task and close anything that locks scrolling
    pub fn teardown(&mut self) -> Vec<DomEffect> {
        let mut effects: Vec<DomEffect> = self
            .tasks
            .stop_all()
            .into_iter()
            .map(|ticket| DomEffect::CancelTask { ticket })
            .collect();
        effects.extend(self.session.modal.close());
        if self.session.menu.is_open() {
            effects.extend(self.session.menu.close());
        }
        self.session.ready = false;
        debug!(target: "folio-ui", "Controller torn down ({} effects)", effects.len());
        effects
    }

    /// Start (or restart) the typewriter from the first phrase
    pub fn start_typewriter(&mut self) -> Vec<DomEffect> {
        if !self.session.page.has_typewriter {
            return Vec::new();
        }
        let mut typewriter = Typewriter::default();
        let frame = typewriter.tick();
        self.session.typewriter = Some(typewriter);

        let mut effects = Vec::new();
        let ticket = self.start_task(TaskId::Typewriter, &mut effects);
        effects.push(DomEffect::SetText { target: Target::Typewriter, text: frame.text });
        effects.push(DomEffect::ScheduleTimer { ticket, delay_ms: frame.next_delay_ms });
        effects
    }

    /// Stop one task, cancelling its pending callback
    pub fn stop(&mut self, id: TaskId) -> Vec<DomEffect> {
        match self.tasks.stop(id) {
            Some(ticket) => vec![DomEffect::CancelTask { ticket }],
            None => Vec::new(),
        }
    }

    fn attach(&mut self, page: PageSnapshot) -> Vec<DomEffect> {
        if self.session.ready {
            return Vec::new();
        }

        let mut effects = Vec::new();
        let (theme, apply_theme) = ThemeState::init(self.store.as_ref());
        self.session.theme = theme;
        effects.push(apply_theme);

        self.session.page = page.clone();
        self.session.ready = true;

        if page.has_loading_screen {
            let ticket = self.start_task(TaskId::LoadingFade, &mut effects);
            effects.push(DomEffect::ScheduleTimer { ticket, delay_ms: loading::FADE_DELAY_MS });
        }

        if page.has_navbar {
            self.session.navbar = Some(NavbarScroll::new(page.scroll_y));
        }

        effects.extend(self.start_typewriter());

        self.session.counters = page
            .counters
            .iter()
            .map(|target| {
                target.map(|target| CounterSlot {
                    target,
                    triggered: false,
                    animation: None,
                })
            })
            .collect();
        for (i, slot) in self.session.counters.iter().enumerate() {
            if slot.is_some() {
                effects.push(DomEffect::Observe {
                    target: Target::Counter(i),
                    options: ObserverOptions::default(),
                });
            }
        }

        effects.extend(RevealTracker::attach(page.reveal_count, page.stagger_count));

        if page.has_particles {
            let styles = particles::generate(PARTICLE_COUNT, self.rng.as_mut())
                .iter()
                .map(|p| p.style())
                .collect();
            effects.push(DomEffect::MountParticles { styles });
        }

        if page.has_cursor {
            self.session.cursor = Some(CustomCursor::default());
            let ticket = self.start_task(TaskId::CursorLoop, &mut effects);
            effects.push(DomEffect::RequestFrame { ticket });
        }

        debug!(
            target: "folio-ui",
            "Attached behaviors: {} tasks, {} effects",
            self.tasks.len(),
            effects.len()
        );
        effects
    }

    fn start_task(&mut self, id: TaskId, effects: &mut Vec<DomEffect>) -> TaskTicket {
        let (ticket, replaced) = self.tasks.start(id);
        if let Some(replaced) = replaced {
            effects.push(DomEffect::CancelTask { ticket: replaced });
        }
        ticket
    }

    fn scrolled(&mut self, y: f64, now_ms: f64) -> Vec<DomEffect> {
        let Some(navbar) = self.session.navbar.as_mut() else {
            return Vec::new();
        };
        let mut effects = navbar.scrolled(y, now_ms);
        if navbar.has_pending() && !self.tasks.is_running(TaskId::NavbarFlush) {
            let ticket = self.start_task(TaskId::NavbarFlush, &mut effects);
            effects.push(DomEffect::ScheduleTimer { ticket, delay_ms: SCROLL_FLUSH_DELAY_MS });
        }
        effects
    }

    fn hover(&mut self, entered: bool) -> Vec<DomEffect> {
        match self.session.cursor.as_mut() {
            Some(cursor) => cursor.hover(entered),
            None => Vec::new(),
        }
    }

    fn intersected(&mut self, target: Target) -> Vec<DomEffect> {
        match target {
            Target::Counter(i) => {
                let Some(Some(slot)) = self.session.counters.get_mut(i) else {
                    return Vec::new();
                };
                if slot.triggered {
                    return Vec::new();
                }
                slot.triggered = true;
                slot.animation = Some(CounterAnimation::new(slot.target));

                let mut effects = vec![DomEffect::Unobserve { target }];
                let ticket = self.start_task(TaskId::Counter(i), &mut effects);
                effects.push(DomEffect::ScheduleTimer { ticket, delay_ms: COUNTER_STEP_MS });
                effects
            }
            _ => self.session.reveal.intersected(target),
        }
    }

    fn timer_fired(&mut self, ticket: TaskTicket) -> Vec<DomEffect> {
        if !self.tasks.is_current(ticket) {
            return Vec::new();
        }

        match ticket.id {
            TaskId::LoadingFade => {
                self.tasks.stop(TaskId::LoadingFade);
                let mut effects = vec![loading::fade_out()];
                let ticket = self.start_task(TaskId::LoadingHide, &mut effects);
                effects.push(DomEffect::ScheduleTimer { ticket, delay_ms: loading::HIDE_DELAY_MS });
                effects
            }
            TaskId::LoadingHide => {
                self.tasks.stop(TaskId::LoadingHide);
                vec![loading::hide()]
            }
            TaskId::Typewriter => match self.session.typewriter.as_mut() {
                Some(typewriter) => {
                    let frame = typewriter.tick();
                    vec![
                        DomEffect::SetText { target: Target::Typewriter, text: frame.text },
                        DomEffect::ScheduleTimer { ticket, delay_ms: frame.next_delay_ms },
                    ]
                }
                None => Vec::new(),
            },
            TaskId::Counter(i) => {
                let Some(Some(slot)) = self.session.counters.get_mut(i) else {
                    return Vec::new();
                };
                let Some(animation) = slot.animation.as_mut() else {
                    return Vec::new();
                };
                let text = animation.tick();
                let finished = animation.is_finished();
                let mut effects = vec![DomEffect::SetText { target: Target::Counter(i), text }];
                if finished {
                    self.tasks.stop(ticket.id);
                } else {
                    effects.push(DomEffect::ScheduleTimer { ticket, delay_ms: COUNTER_STEP_MS });
                }
                effects
            }
            TaskId::NavbarFlush => {
                self.tasks.stop(TaskId::NavbarFlush);
                match self.session.navbar.as_mut() {
                    Some(navbar) => navbar.flush(),
                    None => Vec::new(),
                }
            }
            TaskId::CursorLoop | TaskId::SmoothScroll => Vec::new(),
        }
    }

    fn animation_frame(&mut self, ticket: TaskTicket, now_ms: f64) -> Vec<DomEffect> {
        if !self.tasks.is_current(ticket) {
            return Vec::new();
        }

        match ticket.id {
            TaskId::CursorLoop => match self.session.cursor.as_mut() {
                Some(cursor) => {
                    let mut effects = cursor.frame();
                    effects.push(DomEffect::RequestFrame { ticket });
                    effects
                }
                None => Vec::new(),
            },
            TaskId::SmoothScroll => match self.session.smooth_scroll.as_mut() {
                Some(scroll) => {
                    let (y, more) = scroll.frame(now_ms);
                    let mut effects = vec![DomEffect::ScrollTo { y }];
                    if more {
                        effects.push(DomEffect::RequestFrame { ticket });
                    } else {
                        self.tasks.stop(TaskId::SmoothScroll);
                        self.session.smooth_scroll = None;
                    }
                    effects
                }
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }
}
