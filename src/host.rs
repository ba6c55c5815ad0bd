//! Event-loop seam: listeners, animation frames and the intro timer.
//!
//! The renderer never touches `window` directly. Everything it needs from the
//! browser goes through [`Host`], which lets tests queue and fire callbacks by
//! hand and count what is still registered after unmount.

use crate::error::RendererError;
use crate::geometry::{Point, Viewport};

/// Which ambient signal a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    PointerMove,
    Scroll,
    Resize,
}

/// A snapshot delivered to a listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer position in viewport coordinates.
    PointerMove(Point),
    /// New vertical scroll offset.
    Scroll(f64),
    /// New viewport size.
    Resize(Viewport),
}

/// Registrations a host is currently holding for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveHandles {
    pub listeners: usize,
    pub frames: usize,
    pub timers: usize,
}

impl ActiveHandles {
    /// Nothing registered, nothing pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.listeners == 0 && self.frames == 0 && self.timers == 0
    }
}

/// The renderer's view of the browser event loop.
///
/// Every registration is owned by the host: replacing a frame or timer
/// cancels the previous one, and [`Host::release`] drops all of them.
pub trait Host {
    /// Current viewport size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the size cannot be read.
    fn viewport(&self) -> Result<Viewport, RendererError>;

    /// Current vertical scroll offset.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the offset cannot be read.
    fn scroll_y(&self) -> Result<f64, RendererError>;

    /// Subscribe `callback` to `kind` until [`Host::release`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the listener cannot be attached.
    fn listen(&mut self, kind: ListenerKind, callback: Box<dyn FnMut(HostEvent)>) -> Result<(), RendererError>;

    /// Run `callback` with the frame timestamp (ms) on the next animation frame.
    fn request_frame(&mut self, callback: Box<dyn FnOnce(f64)>);

    /// Run `callback` once after `delay_ms`, replacing any pending timer.
    fn set_timeout(&mut self, delay_ms: u32, callback: Box<dyn FnOnce()>);

    /// Cancel the pending timer, if any.
    fn clear_timeout(&mut self);

    /// Remove every listener and cancel the pending frame and timer.
    fn release(&mut self);

    /// What is currently registered.
    fn active(&self) -> ActiveHandles;
}
