//! Finds the page's elements and attaches every controller to them.
//!
//! Each wiring step checks for its elements first and reports `Ok(false)`
//! when the current page doesn't have them. A failing step is logged and
//! the remaining ones still run.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Array, Function, Object, Promise, Reflect};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, Node, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

use crate::components::carousel::CarouselController;
use crate::components::counter::CounterController;
use crate::components::filter::CaseFilter;
use crate::components::form::FieldFeedback;
use crate::components::nav::{mark_active_link, MenuController};
use crate::components::reveal::Reveal;
use crate::components::scroll::ScrollEffects;
use crate::components::share::{CopyAttempt, ShareLabel};
use crate::components::theme::ThemeController;
use crate::config::Config;
use crate::dom::{by_id, query, query_all, query_all_within, query_within, ViewNode};
use crate::error::UiError;
use crate::platform::{LocalStore, PerformanceClock, WindowViewport};

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
const STATS_THRESHOLD: f64 = 0.5;

pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Config,
}

impl Page {
    pub fn current(config: Config) -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let document = window.document().ok_or(UiError::NoDocument)?;
        Ok(Self {
            window,
            document,
            config,
        })
    }
}

type Wiring = fn(&Page) -> Result<bool, UiError>;

pub fn mount(page: &Page) {
    let wirings: [(&str, Wiring); 11] = [
        ("theme", wire_theme),
        ("menu", wire_menu),
        ("active link", wire_active_link),
        ("scroll effects", wire_scroll),
        ("scroll indicator", wire_scroll_indicator),
        ("reveal", wire_reveal),
        ("stats", wire_stats),
        ("filter", wire_filter),
        ("carousel", wire_carousel),
        ("form", wire_form),
        ("share", wire_share),
    ];

    let mut wired = 0;
    for (name, wire) in wirings {
        match wire(page) {
            Ok(true) => {
                debug!("Wired {}", name);
                wired += 1;
            }
            Ok(false) => debug!("Skipped {}: not on this page", name),
            Err(e) => warn!("Could not wire {}: {}", name, e),
        }
    }
    info!("Page behavior ready ({} of {} controllers)", wired, wirings.len());
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    callback.forget();
    Ok(())
}

/// Observes `targets`; `on_entry` gets each reported element and whether it
/// intersects, and returns true to stop observing that element.
fn observe<F>(
    targets: &[HtmlElement],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: F,
) -> Result<(), UiError>
where
    F: FnMut(&Element, bool) -> bool + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            if on_entry(&target, entry.is_intersecting()) {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(())
}

fn same_node(a: &HtmlElement, b: &Element) -> bool {
    let b: &Node = b;
    a.is_same_node(Some(b))
}

fn wire_theme(page: &Page) -> Result<bool, UiError> {
    let sel = &page.config.selectors;
    let Some(toggle) = by_id(&page.document, &sel.theme_toggle_id) else {
        return Ok(false);
    };
    let root = page
        .document
        .document_element()
        .ok_or(UiError::NoDocument)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::Js("document root is not an HTML element".to_string()))?;
    let icon = query_within(&toggle, &sel.theme_icon)
        .or_else(|| query(&page.document, &sel.theme_icon));

    let ctl = ThemeController::new(
        root,
        icon,
        LocalStore::new(&page.window),
        page.config.theme_storage_key.clone(),
    );
    let theme = ctl.init();
    debug!("Initial theme {}", theme.as_str());

    listen(&toggle, "click", move |_| {
        let theme = ctl.toggle();
        info!("Theme switched to {}", theme.as_str());
    })?;
    Ok(true)
}

fn wire_menu(page: &Page) -> Result<bool, UiError> {
    let sel = &page.config.selectors;
    let (Some(button), Some(menu)) = (
        by_id(&page.document, &sel.hamburger_id),
        query(&page.document, &sel.nav_menu),
    ) else {
        return Ok(false);
    };
    let links = query_all(&page.document, &sel.nav_links);
    let ctl = Rc::new(MenuController::new(button.clone(), menu));

    {
        let ctl = ctl.clone();
        listen(&button, "click", move |_| {
            ctl.toggle();
        })?;
    }
    for link in &links {
        let ctl = ctl.clone();
        listen(link, "click", move |_| ctl.close())?;
    }
    listen(&page.document, "keydown", move |e| {
        if let Some(key) = e.dyn_ref::<KeyboardEvent>() {
            if ctl.handle_key(&key.key()) {
                debug!("Menu closed with Escape");
            }
        }
    })?;
    Ok(true)
}

fn wire_active_link(page: &Page) -> Result<bool, UiError> {
    let links = query_all(&page.document, &page.config.selectors.nav_links);
    if links.is_empty() {
        return Ok(false);
    }
    let path = page.window.location().pathname()?;
    match mark_active_link(&links, &path) {
        Some(i) => debug!("Active nav link {} for {}", i, path),
        None => debug!("No nav link for {}", path),
    }
    Ok(true)
}

fn wire_scroll(page: &Page) -> Result<bool, UiError> {
    let sel = &page.config.selectors;
    let header = by_id(&page.document, &sel.header_id);
    let to_top = by_id(&page.document, &sel.scroll_to_top_id);
    if header.is_none() && to_top.is_none() {
        return Ok(false);
    }

    let fx = Rc::new(ScrollEffects::new(
        header,
        to_top.clone(),
        WindowViewport::new(page.window.clone()),
        page.config.header_threshold,
        page.config.scroll_top_threshold,
    ));
    let state = fx.update();
    debug!(
        "Scroll effects start with header scrolled: {}, scroll-to-top visible: {}",
        state.header_scrolled, state.to_top_visible
    );

    {
        let fx = fx.clone();
        listen(&page.window, "scroll", move |_| {
            fx.update();
        })?;
    }
    if let Some(button) = to_top {
        listen(&button, "click", move |_| fx.scroll_to_top())?;
    }
    Ok(true)
}

fn wire_scroll_indicator(page: &Page) -> Result<bool, UiError> {
    let sel = &page.config.selectors;
    let (Some(indicator), Some(target)) = (
        query(&page.document, &sel.scroll_indicator),
        query(&page.document, &sel.stats_dashboard),
    ) else {
        return Ok(false);
    };
    listen(&indicator, "click", move |_| {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    })?;
    Ok(true)
}

fn wire_reveal(page: &Page) -> Result<bool, UiError> {
    let targets = query_all(&page.document, &page.config.selectors.reveal_targets);
    if targets.is_empty() {
        return Ok(false);
    }
    let reveals: Vec<RefCell<Reveal<HtmlElement>>> = targets
        .iter()
        .cloned()
        .map(|el| RefCell::new(Reveal::new(el)))
        .collect();

    observe(&targets, REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move |target, visible| {
        reveals
            .iter()
            .find(|r| same_node(r.borrow().node(), target))
            .map(|r| r.borrow_mut().on_intersection(visible))
            .unwrap_or(false)
    })?;
    Ok(true)
}

type SharedCounter = Rc<RefCell<CounterController<HtmlElement>>>;

fn wire_stats(page: &Page) -> Result<bool, UiError> {
    let sel = &page.config.selectors;
    if query(&page.document, &sel.stats_dashboard).is_none() {
        return Ok(false);
    }
    let cards = query_all(&page.document, &sel.stat_card);
    let counters: Vec<(HtmlElement, SharedCounter)> = cards
        .iter()
        .filter_map(|card| {
            let number = query_within(card, &sel.stat_number)?;
            match CounterController::new(number.clone(), page.config.counter_duration_ms) {
                Some(counter) => Some((card.clone(), Rc::new(RefCell::new(counter)))),
                None => {
                    warn!(
                        "Stat counter {:?} has no numeric data-target, leaving it static",
                        number.text()
                    );
                    None
                }
            }
        })
        .collect();

    let window = page.window.clone();
    let clock = Rc::new(PerformanceClock::new(page.window.clone()));
    observe(&cards, STATS_THRESHOLD, None, move |target, visible| {
        if !visible {
            return false;
        }
        if let Some((_, counter)) = counters.iter().find(|(card, _)| same_node(card, target)) {
            let started = counter.borrow_mut().start(true, clock.as_ref());
            if started && counter.borrow().is_running() {
                run_frames(&window, counter.clone(), clock.clone());
            }
        }
        // Cards are watched once, with or without a counter.
        true
    })?;
    Ok(true)
}

/// Drives a counter on `requestAnimationFrame` until it reports done.
fn run_frames(window: &Window, counter: SharedCounter, clock: Rc<PerformanceClock>) {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    let win = window.clone();

    *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if counter.borrow_mut().tick(clock.as_ref()) {
            if let Some(cb) = frame.borrow().as_ref() {
                if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    warn!("Counter animation stopped early: {:?}", e);
                }
            }
        } else {
            // Dropping the closure ends the loop and frees it.
            let _ = frame.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = first.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            warn!("Counter animation not scheduled: {:?}", e);
        }
    };
}

fn wire_filter(page: &Page) -> Result<bool, UiError> {
    let sel = &page.config.selectors;
    let buttons = query_all(&page.document, &sel.filter_button);
    if buttons.is_empty() {
        return Ok(false);
    }
    let cards = query_all(&page.document, &sel.case_card);
    let filter = Rc::new(CaseFilter::new(buttons.clone(), cards));

    for (i, button) in buttons.iter().enumerate() {
        let filter = filter.clone();
        listen(button, "click", move |_| {
            if let Some(visible) = filter.select(i) {
                debug!("Filter {} shows {} cards", i, visible);
            }
        })?;
    }
    Ok(true)
}

fn wire_carousel(page: &Page) -> Result<bool, UiError> {
    let sel = &page.config.selectors;
    let (Some(prev), Some(next)) = (
        query(&page.document, &sel.carousel_prev),
        query(&page.document, &sel.carousel_next),
    ) else {
        return Ok(false);
    };
    let items = query_all(&page.document, &sel.testimonial_item);
    let count = items.len();
    let ctl = Rc::new(RefCell::new(CarouselController::new(items)));
    debug!("Carousel of {} testimonials showing {}", count, ctl.borrow().index());

    {
        let ctl = ctl.clone();
        listen(&prev, "click", move |_| {
            ctl.borrow_mut().prev();
            debug!("Testimonial {}", ctl.borrow().index());
        })?;
    }
    listen(&next, "click", move |_| {
        ctl.borrow_mut().next();
        debug!("Testimonial {}", ctl.borrow().index());
    })?;
    Ok(true)
}

fn wire_form(page: &Page) -> Result<bool, UiError> {
    let sel = &page.config.selectors;
    let Some(form) = query(&page.document, &sel.form) else {
        return Ok(false);
    };
    for field in query_all_within(&form, &sel.form_fields) {
        let feedback = Rc::new(FieldFeedback::new(field.clone()));
        {
            let feedback = feedback.clone();
            listen(&field, "blur", move |_| feedback.on_blur())?;
        }
        listen(&field, "input", move |_| feedback.on_input())?;
    }
    Ok(true)
}

fn wire_share(page: &Page) -> Result<bool, UiError> {
    let buttons = query_all(&page.document, &page.config.selectors.share_button);
    if buttons.is_empty() {
        return Ok(false);
    }
    for button in buttons {
        let label = Rc::new(ShareLabel::new(button.clone()));
        let window = page.window.clone();
        let feedback_ms = page.config.share_feedback_ms;
        listen(&button, "click", move |_| {
            let href = window.location().href().unwrap_or_default();
            let (url, title) = (label.url(&href), label.title());
            share_or_copy(&window, &url, &title, label.clone(), feedback_ms);
        })?;
    }
    Ok(true)
}

/// Web Share when the browser has it, clipboard copy with label feedback
/// otherwise. Both APIs are looked up dynamically since support varies.
fn share_or_copy(
    window: &Window,
    url: &str,
    title: &str,
    label: Rc<ShareLabel<HtmlElement>>,
    feedback_ms: u32,
) {
    let navigator = window.navigator();

    if let Some(share) = method(&navigator, "share") {
        let data = Object::new();
        let _ = Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title));
        let _ = Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url));
        match share.call1(&navigator, &data) {
            Ok(promise) => settle(promise, "share"),
            Err(e) => warn!("Share failed: {:?}", e),
        }
        return;
    }

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|c| !c.is_undefined() && !c.is_null());
    let attempt = match clipboard.as_ref().and_then(|c| method(c, "writeText").map(|f| (c, f))) {
        Some((clipboard, write_text)) => {
            match write_text.call1(clipboard, &JsValue::from_str(url)) {
                Ok(promise) => {
                    settle(promise, "clipboard write");
                    CopyAttempt::Started
                }
                Err(e) => {
                    warn!("Clipboard write failed: {:?}", e);
                    CopyAttempt::Failed
                }
            }
        }
        None => {
            warn!("Neither share nor clipboard is available");
            CopyAttempt::Unavailable
        }
    };

    if label.after_copy(attempt) {
        Timeout::new(feedback_ms, move || label.reset()).forget();
    }
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn settle(value: JsValue, what: &'static str) {
    let Ok(promise) = value.dyn_into::<Promise>() else {
        return;
    };
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            debug!("{} rejected: {:?}", what, e);
        }
    });
}
