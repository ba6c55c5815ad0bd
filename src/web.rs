//! Browser bindings: the `window`-backed [`Host`] and the exported `GridField`.
//!
//! Every registration is an RAII handle from gloo: dropping an
//! [`EventListener`] removes it, dropping an [`AnimationFrame`] cancels it,
//! dropping a [`Timeout`] clears it. Unmount is therefore just dropping them.
//!
//! ```js
//! import init, { GridField, initLogging } from "./pkg/gridfield.js";
//! await init();
//! initLogging();
//! const field = new GridField(document.querySelector("#grid"), null);
//! field.setVisible(true);
//! // later
//! field.unmount();
//! ```

use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::config::GridConfig;
use crate::engine::Renderer;
use crate::error::RendererError;
use crate::geometry::{Point, Viewport};
use crate::host::{ActiveHandles, Host, HostEvent, ListenerKind};
use crate::render::CanvasSurface;

/// [`Host`] backed by the global `window`.
pub struct WebHost {
    window: Window,
    listeners: Vec<EventListener>,
    frame: Option<AnimationFrame>,
    timer: Option<Timeout>,
}

impl WebHost {
    /// # Errors
    ///
    /// Returns [`RendererError::NoWindow`] outside a browser.
    pub fn new() -> Result<Self, RendererError> {
        let window = web_sys::window().ok_or(RendererError::NoWindow)?;
        Ok(Self { window, listeners: Vec::new(), frame: None, timer: None })
    }
}

fn viewport_of(window: &Window) -> Result<Viewport, RendererError> {
    let width = window.inner_width()?.as_f64();
    let height = window.inner_height()?.as_f64();
    match (width, height) {
        (Some(w), Some(h)) => Ok(Viewport::new(w, h)),
        _ => Err(RendererError::Js("window size is not a number".to_owned())),
    }
}

impl Host for WebHost {
    fn viewport(&self) -> Result<Viewport, RendererError> {
        viewport_of(&self.window)
    }

    fn scroll_y(&self) -> Result<f64, RendererError> {
        Ok(self.window.scroll_y()?)
    }

    fn listen(&mut self, kind: ListenerKind, mut callback: Box<dyn FnMut(HostEvent)>) -> Result<(), RendererError> {
        let window = self.window.clone();
        // gloo listeners are passive unless asked otherwise.
        let listener = match kind {
            ListenerKind::PointerMove => EventListener::new(&self.window, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let sample = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                    callback(HostEvent::PointerMove(sample));
                }
            }),
            ListenerKind::Scroll => EventListener::new(&self.window, "scroll", move |_| match window.scroll_y() {
                Ok(scroll_y) => callback(HostEvent::Scroll(scroll_y)),
                Err(err) => log::warn!("scroll offset unavailable: {err:?}"),
            }),
            ListenerKind::Resize => EventListener::new(&self.window, "resize", move |_| match viewport_of(&window) {
                Ok(viewport) => callback(HostEvent::Resize(viewport)),
                Err(err) => log::warn!("viewport size unavailable: {err}"),
            }),
        };
        self.listeners.push(listener);
        Ok(())
    }

    fn request_frame(&mut self, callback: Box<dyn FnOnce(f64)>) {
        self.frame = Some(request_animation_frame(callback));
    }

    fn set_timeout(&mut self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        self.timer = Some(Timeout::new(delay_ms, callback));
    }

    fn clear_timeout(&mut self) {
        self.timer = None;
    }

    fn release(&mut self) {
        self.listeners.clear();
        self.frame = None;
        self.timer = None;
    }

    fn active(&self) -> ActiveHandles {
        ActiveHandles {
            listeners: self.listeners.len(),
            frames: usize::from(self.frame.is_some()),
            timers: usize::from(self.timer.is_some()),
        }
    }
}

/// The pointer-reactive grid, mounted on a `<canvas>` element.
#[wasm_bindgen]
pub struct GridField {
    renderer: Renderer<WebHost, CanvasSurface>,
}

#[wasm_bindgen]
impl GridField {
    /// Mount on `canvas`. `config_json` overrides the design values.
    ///
    /// # Errors
    ///
    /// Throws if the config is invalid or the canvas cannot be drawn on.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<GridField, JsValue> {
        let config = match config_json.as_deref() {
            Some(raw) => GridConfig::from_json(raw).map_err(RendererError::from)?,
            None => GridConfig::default(),
        };
        let host = WebHost::new()?;
        let surface = CanvasSurface::new(canvas)?;
        let renderer = Renderer::mount(host, surface, config)?;
        Ok(Self { renderer })
    }

    /// The host's `isVisible` signal.
    #[wasm_bindgen(js_name = setVisible)]
    pub fn set_visible(&self, visible: bool) {
        self.renderer.set_visible(visible);
    }

    /// Current effective opacity.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.renderer.opacity()
    }

    /// Stop drawing and release every listener, frame and timer.
    pub fn unmount(&self) {
        self.renderer.unmount();
    }
}

/// Route `log` output to the browser console and install the panic hook.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}
