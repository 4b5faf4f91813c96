// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Browser binding.

Collects the page's elements once, forwards DOM events into the
[`InteractionController`] and applies the returned [`DomEffect`]s. Timers and
animation frames are tracked by ticket so `CancelTask` can clear them.

Listeners are bound once at boot and live for the whole page, so their
closures are leaked with `Closure::forget`. Nothing registers a listener per
modal open: close and backdrop clicks go through one delegated document
listener. `pagehide` (or the exported [`teardown`]) cancels every task.
*/

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent, Storage,
    Window,
};

use crate::controller::InteractionController;
use crate::counter::parse_count;
use crate::cursor::HOVER_SELECTOR;
use crate::effects::{DomEffect, ObserverOptions, PageSnapshot, Target, UiEvent};
use crate::modal::{MODAL_BACKDROP_CLASS, MODAL_CLASS, MODAL_CLOSE_CLASS, MODAL_CONTENT_CLASS};
use crate::reveal::{REVEAL_SELECTOR, STAGGER_SELECTOR};
use crate::tasks::{TaskId, TaskTicket};
use crate::theme::ThemeStore;

/// `window.localStorage`; silently inert when storage is unavailable
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                tracing::warn!(target: "folio-ui", "localStorage write failed: {:?}", err);
            }
        }
    }
}

struct Elements {
    loading_screen: Option<Element>,
    navbar: Option<Element>,
    menu_toggle: Option<Element>,
    menu_overlay: Option<Element>,
    theme_toggle: Option<Element>,
    typewriter: Option<Element>,
    counters: Vec<Element>,
    reveals: Vec<Element>,
    staggers: Vec<Element>,
    particles: Option<Element>,
    cursor: Option<Element>,
    follower: Option<Element>,
    modal: Option<Element>,
}

impl Elements {
    fn collect(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            loading_screen: document.get_element_by_id("loading-screen"),
            navbar: document.get_element_by_id("navbar"),
            menu_toggle: document.get_element_by_id("mobile-menu-toggle"),
            menu_overlay: document.get_element_by_id("mobile-menu-overlay"),
            theme_toggle: document.get_element_by_id("theme-toggle"),
            typewriter: document.query_selector(".typewriter-text")?,
            counters: query_all(document, ".stat-number[data-count]")?,
            reveals: query_all(document, REVEAL_SELECTOR)?,
            staggers: query_all(document, STAGGER_SELECTOR)?,
            particles: document.get_element_by_id("hero-particles"),
            cursor: document.query_selector(".cursor")?,
            follower: document.query_selector(".cursor-follower")?,
            modal: None,
        })
    }

    fn snapshot(&self, window: &Window) -> PageSnapshot {
        PageSnapshot {
            has_loading_screen: self.loading_screen.is_some(),
            has_navbar: self.navbar.is_some(),
            has_mobile_menu: self.menu_toggle.is_some() && self.menu_overlay.is_some(),
            has_theme_toggle: self.theme_toggle.is_some(),
            has_typewriter: self.typewriter.is_some(),
            counters: self
                .counters
                .iter()
                .map(|el| el.get_attribute("data-count").as_deref().and_then(parse_count))
                .collect(),
            reveal_count: self.reveals.len(),
            stagger_count: self.staggers.len(),
            has_particles: self.particles.is_some(),
            has_cursor: self.cursor.is_some() && self.follower.is_some(),
            viewport_width: viewport_width(window),
            scroll_y: window.scroll_y().unwrap_or(0.0),
        }
    }

    fn targets_of(&self, element: &Element) -> Vec<Target> {
        let position = |list: &[Element]| list.iter().position(|el| el == element);
        let mut targets = Vec::new();
        if let Some(i) = position(&self.counters) {
            targets.push(Target::Counter(i));
        }
        if let Some(i) = position(&self.reveals) {
            targets.push(Target::Reveal(i));
        }
        if let Some(i) = position(&self.staggers) {
            targets.push(Target::Stagger(i));
        }
        targets
    }
}

struct Runtime {
    controller: InteractionController,
    window: Window,
    document: Document,
    elements: Elements,
    timers: HashMap<TaskTicket, i32>,
    frames: HashMap<TaskTicket, i32>,
    observers: HashMap<String, IntersectionObserver>,
}

type Shared = Rc<RefCell<Runtime>>;

thread_local! {
    static RUNTIME: RefCell<Option<Shared>> = RefCell::new(None);
}

fn with_runtime(f: impl FnOnce(&Shared)) {
    let rt = RUNTIME.with(|slot| slot.borrow().clone());
    match rt {
        Some(rt) => f(&rt),
        None => tracing::debug!(target: "folio-ui", "Controller not attached"),
    }
}

/// Cancel every timer and frame loop and release scroll locks
#[wasm_bindgen]
pub fn teardown() {
    with_runtime(|rt| {
        let effects = rt.borrow_mut().controller.teardown();
        apply_all(rt, effects);
    });
}

/// Restart the typewriter from its first phrase
#[wasm_bindgen(js_name = startTypewriter)]
pub fn start_typewriter() {
    with_runtime(|rt| {
        let effects = rt.borrow_mut().controller.start_typewriter();
        apply_all(rt, effects);
    });
}

#[wasm_bindgen(js_name = stopTypewriter)]
pub fn stop_typewriter() {
    with_runtime(|rt| {
        let effects = rt.borrow_mut().controller.stop(TaskId::Typewriter);
        apply_all(rt, effects);
    });
}

/// Module entry point: attach once the document is parsed
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let listen_on = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = boot(window, document) {
                tracing::error!(target: "folio-ui", "Failed to attach: {:?}", err);
            }
        });
        listen_on.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    } else {
        boot(window, document)
    }
}

fn boot(window: Window, document: Document) -> Result<(), JsValue> {
    let elements = Elements::collect(&document)?;
    let snapshot = elements.snapshot(&window);
    let controller = InteractionController::new(Box::new(LocalStorage::from_window(&window)));

    let rt: Shared = Rc::new(RefCell::new(Runtime {
        controller,
        window,
        document,
        elements,
        timers: HashMap::new(),
        frames: HashMap::new(),
        observers: HashMap::new(),
    }));

    bind_listeners(&rt)?;
    RUNTIME.with(|slot| *slot.borrow_mut() = Some(rt.clone()));
    dispatch(&rt, UiEvent::Ready(snapshot));
    Ok(())
}

fn dispatch(rt: &Shared, event: UiEvent) {
    let effects = rt.borrow_mut().controller.handle(event);
    apply_all(rt, effects);
}

fn apply_all(rt: &Shared, effects: Vec<DomEffect>) {
    for effect in effects {
        if let Err(err) = apply(rt, effect) {
            tracing::warn!(target: "folio-ui", "DOM effect failed: {:?}", err);
        }
    }
}

fn listen<E, F>(target: &web_sys::EventTarget, kind: &str, rt: &Shared, handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: Fn(&E) -> Option<UiEvent> + 'static,
{
    let rt = rt.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            if let Some(ui_event) = handler(&event) {
                dispatch(&rt, ui_event);
            }
        }
    });
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn bind_listeners(rt: &Shared) -> Result<(), JsValue> {
    let (window, document, menu_toggle, menu_overlay, theme_toggle, has_cursor) = {
        let r = rt.borrow();
        (
            r.window.clone(),
            r.document.clone(),
            r.elements.menu_toggle.clone(),
            r.elements.menu_overlay.clone(),
            r.elements.theme_toggle.clone(),
            r.elements.cursor.is_some() && r.elements.follower.is_some(),
        )
    };

    if let Some(toggle) = menu_toggle {
        listen::<Event, _>(&toggle, "click", rt, |_| Some(UiEvent::MenuToggleClicked))?;
    }
    if let Some(overlay) = menu_overlay {
        listen::<Event, _>(&overlay, "click", rt, |e| {
            Some(UiEvent::MenuOverlayClicked {
                on_overlay: e.target() == e.current_target(),
            })
        })?;
    }
    if let Some(toggle) = theme_toggle {
        listen::<Event, _>(&toggle, "click", rt, |_| Some(UiEvent::ThemeToggleClicked))?;
    }

    // Passive scroll listener; throttling happens in the controller
    {
        let rt_scroll = rt.clone();
        let scroll_window = window.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let y = scroll_window.scroll_y().unwrap_or(0.0);
            dispatch(&rt_scroll, UiEvent::Scrolled { y, now_ms: js_sys::Date::now() });
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        callback.forget();
    }

    let resize_window = window.clone();
    listen::<Event, _>(&window, "resize", rt, move |_| {
        Some(UiEvent::Resized { width: viewport_width(&resize_window) })
    })?;

    // The only keydown listener; the controller knows whether a modal is open
    listen::<KeyboardEvent, _>(&document, "keydown", rt, |e| {
        Some(UiEvent::KeyDown { key: e.key() })
    })?;

    if has_cursor {
        listen::<MouseEvent, _>(&document, "mousemove", rt, |e| {
            Some(UiEvent::PointerMoved {
                x: f64::from(e.client_x()),
                y: f64::from(e.client_y()),
            })
        })?;
        for el in query_all(&document, HOVER_SELECTOR)? {
            listen::<Event, _>(&el, "mouseenter", rt, |_| Some(UiEvent::HoverEntered))?;
            listen::<Event, _>(&el, "mouseleave", rt, |_| Some(UiEvent::HoverLeft))?;
        }
    }

    for anchor in query_all(&document, "a[href^=\"#\"]")? {
        let anchor_document = document.clone();
        let anchor_window = window.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen::<Event, _>(&anchor, "click", rt, move |e| {
            e.prevent_default();
            let target = anchor_document.query_selector(&href).ok().flatten()?;
            let top = target.dyn_ref::<HtmlElement>()?.offset_top();
            Some(UiEvent::AnchorClicked {
                target_top: f64::from(top),
                current_y: anchor_window.scroll_y().unwrap_or(0.0),
            })
        })?;
    }

    // Modal controls are created per open; one delegated listener serves all of them
    listen::<Event, _>(&document, "click", rt, |e| {
        let target = e.target()?.dyn_into::<Element>().ok()?;
        let close_selector = format!(".{}", MODAL_CLOSE_CLASS);
        if target.closest(&close_selector).ok().flatten().is_some() {
            return Some(UiEvent::ModalCloseClicked);
        }
        if target.class_list().contains(MODAL_BACKDROP_CLASS) {
            return Some(UiEvent::ModalBackdropClicked { on_backdrop: true });
        }
        None
    })?;

    let rt_hide = rt.clone();
    let on_page_hide = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let effects = rt_hide.borrow_mut().controller.teardown();
        apply_all(&rt_hide, effects);
    });
    window.add_event_listener_with_callback("pagehide", on_page_hide.as_ref().unchecked_ref())?;
    on_page_hide.forget();

    for button in query_all(&document, ".play-video")? {
        let src = button.get_attribute("data-video").unwrap_or_default();
        listen::<Event, _>(&button, "click", rt, move |e| {
            e.prevent_default();
            Some(UiEvent::PlayVideoClicked { src: src.clone() })
        })?;
    }

    Ok(())
}

fn apply(rt: &Shared, effect: DomEffect) -> Result<(), JsValue> {
    match effect {
        DomEffect::AddClass { target, class } => {
            if let Some(el) = element(rt, target) {
                el.class_list().add_1(class)?;
            }
        }
        DomEffect::RemoveClass { target, class } => {
            if let Some(el) = element(rt, target) {
                el.class_list().remove_1(class)?;
            }
        }
        DomEffect::SetText { target, text } => {
            if let Some(el) = element(rt, target) {
                el.set_text_content(Some(&text));
            }
        }
        DomEffect::SetStyle { target, property, value } => {
            if let Some(el) = element(rt, target).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
                el.style().set_property(property, &value)?;
            }
        }
        DomEffect::SetAttribute { target, name, value } => {
            if let Some(el) = element(rt, target) {
                el.set_attribute(name, &value)?;
            }
        }
        DomEffect::LockScroll => set_body_overflow(rt, "hidden")?,
        DomEffect::UnlockScroll => set_body_overflow(rt, "")?,
        DomEffect::ScrollTo { y } => rt.borrow().window.scroll_to_with_x_and_y(0.0, y),
        DomEffect::Observe { target, options } => {
            if let Some(el) = element(rt, target) {
                observer_for(rt, &options)?.observe(&el);
            }
        }
        DomEffect::Unobserve { target } => {
            if let Some(el) = element(rt, target) {
                for observer in rt.borrow().observers.values() {
                    observer.unobserve(&el);
                }
            }
        }
        DomEffect::MountParticles { styles } => {
            let r = rt.borrow();
            if let Some(container) = &r.elements.particles {
                for style in styles {
                    let particle = r.document.create_element("div")?;
                    particle.set_class_name("particle");
                    particle.set_attribute("style", &style)?;
                    container.append_child(&particle)?;
                }
            }
        }
        DomEffect::MountModal { src } => mount_modal(rt, &src)?,
        DomEffect::UnmountModal => {
            if let Some(modal) = rt.borrow_mut().elements.modal.take() {
                modal.remove();
            }
        }
        DomEffect::ScheduleTimer { ticket, delay_ms } => {
            let rt_timer = rt.clone();
            let callback = Closure::once_into_js(move || {
                rt_timer.borrow_mut().timers.remove(&ticket);
                dispatch(&rt_timer, UiEvent::TimerFired { ticket });
            });
            let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
            let mut r = rt.borrow_mut();
            let handle = r
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)?;
            r.timers.insert(ticket, handle);
        }
        DomEffect::RequestFrame { ticket } => {
            let rt_frame = rt.clone();
            let callback = Closure::once_into_js(move |now_ms: f64| {
                rt_frame.borrow_mut().frames.remove(&ticket);
                dispatch(&rt_frame, UiEvent::AnimationFrame { ticket, now_ms });
            });
            let mut r = rt.borrow_mut();
            let handle = r.window.request_animation_frame(callback.unchecked_ref())?;
            r.frames.insert(ticket, handle);
        }
        DomEffect::CancelTask { ticket } => {
            let mut r = rt.borrow_mut();
            if let Some(handle) = r.timers.remove(&ticket) {
                r.window.clear_timeout_with_handle(handle);
            }
            if let Some(handle) = r.frames.remove(&ticket) {
                r.window.cancel_animation_frame(handle)?;
            }
        }
    }
    Ok(())
}

fn element(rt: &Shared, target: Target) -> Option<Element> {
    let r = rt.borrow();
    let el = &r.elements;
    match target {
        Target::Root => r.document.document_element(),
        Target::Body => r.document.body().map(Element::from),
        Target::LoadingScreen => el.loading_screen.clone(),
        Target::Navbar => el.navbar.clone(),
        Target::MenuToggle => el.menu_toggle.clone(),
        Target::MenuOverlay => el.menu_overlay.clone(),
        Target::Typewriter => el.typewriter.clone(),
        Target::Counter(i) => el.counters.get(i).cloned(),
        Target::Reveal(i) => el.reveals.get(i).cloned(),
        Target::Stagger(i) => el.staggers.get(i).cloned(),
        Target::Particles => el.particles.clone(),
        Target::Cursor => el.cursor.clone(),
        Target::CursorFollower => el.follower.clone(),
    }
}

fn set_body_overflow(rt: &Shared, value: &str) -> Result<(), JsValue> {
    if let Some(body) = rt.borrow().document.body() {
        body.style().set_property("overflow", value)?;
    }
    Ok(())
}

fn observer_for(rt: &Shared, options: &ObserverOptions) -> Result<IntersectionObserver, JsValue> {
    let key = format!("{}|{}", options.threshold, options.root_margin);
    if let Some(observer) = rt.borrow().observers.get(&key) {
        return Ok(observer.clone());
    }

    let rt_observer = rt.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let targets = rt_observer.borrow().elements.targets_of(&entry.target());
                for target in targets {
                    dispatch(&rt_observer, UiEvent::Intersected { target });
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    rt.borrow_mut().observers.insert(key, observer.clone());
    Ok(observer)
}

fn mount_modal(rt: &Shared, src: &str) -> Result<(), JsValue> {
    let (document, body) = {
        let r = rt.borrow();
        let body = r
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;
        (r.document.clone(), body)
    };

    let modal = document.create_element("div")?;
    modal.set_class_name(MODAL_CLASS);

    let backdrop = document.create_element("div")?;
    backdrop.set_class_name(MODAL_BACKDROP_CLASS);

    let content = document.create_element("div")?;
    content.set_class_name(MODAL_CONTENT_CLASS);

    let close = document.create_element("button")?;
    close.set_class_name(MODAL_CLOSE_CLASS);
    close.set_attribute("aria-label", "Chiudi")?;
    close.set_text_content(Some("\u{00d7}"));

    let video = document.create_element("video")?;
    video.set_attribute("controls", "")?;
    video.set_attribute("autoplay", "")?;

    let source = document.create_element("source")?;
    source.set_attribute("src", src)?;
    source.set_attribute("type", "video/mp4")?;

    video.append_child(&source)?;
    content.append_child(&close)?;
    content.append_child(&video)?;
    backdrop.append_child(&content)?;
    modal.append_child(&backdrop)?;
    body.append_child(&modal)?;

    rt.borrow_mut().elements.modal = Some(modal);
    Ok(())
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}
