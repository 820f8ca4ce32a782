//! Web platform adapter for Coverflow.
//!
//! Binds a [`Carousel`] to a scroll container in the page: reads the items
//! from markup, wires mouse, touch and resize listeners, and drives the
//! engine from `requestAnimationFrame` for the lifetime of the page.

pub mod events;
pub mod options;
pub mod surface;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use coverflow_core::{Carousel, CarouselConfig, CarouselEvent, Mode, PointerSource, TrackSurface};
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget, HtmlElement, MouseEvent, TouchEvent, Window};

pub use events::TouchGuard;
pub use options::WebCarouselOptions;
pub use surface::DomSurface;

struct Shared {
    carousel: Carousel,
    surface: DomSurface,
    touch_guard: TouchGuard,
}

impl Shared {
    fn dispatch(&mut self, event: CarouselEvent) -> bool {
        self.carousel.handle(event, &mut self.surface).consumed
    }

    fn dispatch_resize(&mut self) {
        let viewport_width = self.surface.viewport_width();
        self.dispatch(CarouselEvent::Resize { viewport_width });
    }
}

/// Handle to a mounted carousel. Listeners stay registered after the
/// handle is dropped.
#[derive(Clone)]
pub struct WebCarousel {
    shared: Rc<RefCell<Shared>>,
}

impl std::fmt::Debug for WebCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebCarousel")
            .field("mode", &self.mode())
            .field("position", &self.position())
            .finish()
    }
}

impl WebCarousel {
    pub fn position(&self) -> f64 {
        self.shared.borrow().carousel.position()
    }

    pub fn mode(&self) -> Mode {
        self.shared.borrow().carousel.mode()
    }

    /// Rebuilds the track, e.g. after items changed size.
    pub fn rebuild(&self) {
        let mut shared = self.shared.borrow_mut();
        let Shared {
            carousel, surface, ..
        } = &mut *shared;
        carousel.rebuild(surface);
    }
}

/// Mounts a carousel on `frame`, the element that scrolls horizontally.
pub fn mount(
    frame: HtmlElement,
    options: WebCarouselOptions,
    config: CarouselConfig,
) -> Result<WebCarousel, JsValue> {
    config
        .validate()
        .map_err(|err| JsValue::from_str(&format!("invalid carousel config: {err}")))?;

    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    let track = match &options.track_selector {
        Some(selector) => frame
            .query_selector(selector)?
            .ok_or_else(|| format!("track '{}' not found inside carousel", selector))?,
        None => frame.clone().into(),
    };

    let (mut surface, items) = DomSurface::from_markup(document.clone(), frame.clone(), track)?;
    let mut carousel = Carousel::new(items, config);
    carousel.mount(&mut surface);

    let shared = Rc::new(RefCell::new(Shared {
        carousel,
        surface,
        touch_guard: TouchGuard::default(),
    }));

    wire_mouse(&window, &frame, &shared)?;
    wire_touch(&frame, &shared)?;
    wire_resize(&window, &shared, options.resize_debounce_ms)?;

    let handle = WebCarousel { shared };

    // Images without intrinsic size report zero width until they load.
    if document.ready_state() != "complete" {
        let handle = handle.clone();
        let once = AddEventListenerOptions::new();
        once.set_once(true);
        let closure = Closure::wrap(Box::new(move || {
            handle.rebuild();
            log::debug!("coverflow: rebuilt after load at {}", handle.position());
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            closure.as_ref().unchecked_ref(),
            &once,
        )?;
        closure.forget();
    }

    start_frame_loop(&window, &handle.shared)?;

    Ok(handle)
}

fn wire_mouse(
    window: &Window,
    frame: &HtmlElement,
    shared: &Rc<RefCell<Shared>>,
) -> Result<(), JsValue> {
    {
        let shared = shared.clone();
        listen(frame, "mousedown", move |event: MouseEvent| {
            let mut shared = shared.borrow_mut();
            if shared.touch_guard.is_replay(event.time_stamp()) {
                return;
            }
            if let Some(press) = events::mouse_press(&event) {
                if shared.dispatch(press) {
                    // Keeps the browser from starting a text or image drag.
                    event.prevent_default();
                }
            }
        })?;
    }
    {
        let shared = shared.clone();
        listen(frame, "mouseenter", move |event: MouseEvent| {
            let mut shared = shared.borrow_mut();
            if !shared.touch_guard.is_replay(event.time_stamp()) {
                shared.dispatch(CarouselEvent::Enter);
            }
        })?;
    }
    {
        let shared = shared.clone();
        listen(frame, "mouseleave", move |_event: MouseEvent| {
            shared.borrow_mut().dispatch(CarouselEvent::Leave);
        })?;
    }

    // Move and release are tracked on the window so a drag survives the
    // pointer leaving the frame.
    {
        let shared = shared.clone();
        listen(window, "mousemove", move |event: MouseEvent| {
            let x = events::mouse_x(&event);
            shared.borrow_mut().dispatch(CarouselEvent::Move { x });
        })?;
    }
    {
        let shared = shared.clone();
        listen(window, "mouseup", move |_event: MouseEvent| {
            shared.borrow_mut().dispatch(CarouselEvent::Release {
                source: PointerSource::Mouse,
            });
        })?;
    }
    Ok(())
}

fn wire_touch(frame: &HtmlElement, shared: &Rc<RefCell<Shared>>) -> Result<(), JsValue> {
    {
        let shared = shared.clone();
        listen(frame, "touchstart", move |event: TouchEvent| {
            let mut shared = shared.borrow_mut();
            shared.touch_guard.record_touch(event.time_stamp());
            if let Some(press) = events::touch_press(&event) {
                shared.dispatch(press);
            }
        })?;
    }
    {
        let shared = shared.clone();
        let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
            let x = events::touch_x(&event);
            if shared.borrow_mut().dispatch(CarouselEvent::Move { x }) {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        // Must be non-passive for prevent_default to stop native panning.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        frame.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        closure.forget();
    }
    for kind in ["touchend", "touchcancel"] {
        let shared = shared.clone();
        listen(frame, kind, move |event: TouchEvent| {
            let mut shared = shared.borrow_mut();
            shared.touch_guard.record_touch(event.time_stamp());
            shared.dispatch(CarouselEvent::Release {
                source: PointerSource::Touch,
            });
        })?;
    }
    Ok(())
}

fn wire_resize(
    window: &Window,
    shared: &Rc<RefCell<Shared>>,
    debounce_ms: Option<i32>,
) -> Result<(), JsValue> {
    let Some(debounce_ms) = debounce_ms else {
        let shared = shared.clone();
        return listen(window, "resize", move |_event: web_sys::Event| {
            shared.borrow_mut().dispatch_resize();
        });
    };

    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let apply = {
        let shared = shared.clone();
        let pending = pending.clone();
        Rc::new(Closure::wrap(Box::new(move || {
            pending.set(None);
            shared.borrow_mut().dispatch_resize();
        }) as Box<dyn FnMut()>))
    };

    let timer_window = window.clone();
    listen(window, "resize", move |_event: web_sys::Event| {
        if let Some(handle) = pending.take() {
            timer_window.clear_timeout_with_handle(handle);
        }
        match timer_window.set_timeout_with_callback_and_timeout_and_arguments_0(
            (*apply).as_ref().unchecked_ref(),
            debounce_ms,
        ) {
            Ok(handle) => pending.set(Some(handle)),
            Err(err) => log::error!("coverflow: failed to schedule resize: {:?}", err),
        }
    })
}

fn start_frame_loop(window: &Window, shared: &Rc<RefCell<Shared>>) -> Result<(), JsValue> {
    let frame_loop: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = frame_loop.clone();
    let shared = shared.clone();
    let loop_window = window.clone();

    *frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        shared
            .borrow_mut()
            .dispatch(CarouselEvent::Frame { timestamp_ms });

        // Re-arm every frame regardless of mode.
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&loop_window, callback) {
                log::error!("coverflow: requestAnimationFrame failed: {:?}", err);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let started = match frame_loop.borrow().as_ref() {
        Some(callback) => request_animation_frame(window, callback),
        None => Err("frame loop closure missing".into()),
    };
    started
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut(f64)>) -> Result<(), JsValue> {
    window
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map(|_| ())
}

/// Registers a listener for the page's lifetime.
fn listen<E, F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    E: 'static,
    F: FnMut(E) + 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
