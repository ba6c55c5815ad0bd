use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::GridConfig;
use crate::error::RendererError;
use crate::geometry::{Point, Viewport};
use crate::grid::{self, Grid, GridLayout};
use crate::host::{ActiveHandles, Host, HostEvent, ListenerKind};
use crate::pointer::PointerState;
use crate::scheduler::{FrameStats, FrameThrottle, TickDecision};
use crate::surface::{FrameView, Glow, Surface};
use crate::visibility::{IntroCommand, IntroPhase, Visibility};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core renderer state: everything that doesn't depend on the browser.
///
/// Separated from [`Renderer`] so the per-tick step can be tested without a
/// canvas or an event loop.
#[derive(Debug, Clone)]
pub struct RendererCore {
    config: GridConfig,
    viewport: Viewport,
    pointer: PointerState,
    scroll_y: f64,
    visibility: Visibility,
    throttle: FrameThrottle,
    stats: FrameStats,
    grid: Grid,
}

impl Default for RendererCore {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl RendererCore {
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            viewport: Viewport::default(),
            pointer: PointerState::default(),
            scroll_y: 0.0,
            visibility: Visibility::new(&config),
            throttle: FrameThrottle::new(config.frame_interval_ms()),
            stats: FrameStats::default(),
            grid: Grid::default(),
            config,
        }
    }

    // --- Ambient inputs ---

    /// Record a pointer sample. Only the next executed frame moves the cursor.
    pub fn on_pointer_move(&mut self, sample: Point) {
        self.pointer.record(sample);
    }

    /// Record the scroll offset and refresh the scroll fade.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
        self.visibility.update_scroll(scroll_y, self.viewport.height);
    }

    /// Record a new viewport size. The fade thresholds scale with height.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.visibility.update_scroll(self.scroll_y, viewport.height);
    }

    // --- Visibility ---

    /// Apply the host's visible signal; the caller owns the timer.
    pub fn set_host_visible(&mut self, visible: bool) -> IntroCommand {
        self.visibility.set_host_visible(visible)
    }

    /// The intro timer armed with `token` fired.
    pub fn intro_elapsed(&mut self, token: u64) -> bool {
        self.visibility.intro_elapsed(token)
    }

    // --- Frame step ---

    /// Run one tick of the frame loop at `timestamp_ms`.
    ///
    /// On an executed frame the cursor advances, then the grid is rebuilt, then
    /// the surface draws it, in that order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface fails to draw. The tick still counts.
    pub fn tick<S>(&mut self, timestamp_ms: f64, surface: &mut S) -> Result<TickDecision, RendererError>
    where
        S: Surface + ?Sized,
    {
        let decision = self.throttle.decide(timestamp_ms, self.opacity());
        self.stats.record(decision);
        if decision != TickDecision::Render {
            return Ok(decision);
        }

        let cursor = self.pointer.advance(self.config.pointer_smoothing);
        self.grid = grid::build(self.viewport, self.scroll_y, cursor, self.layout(), self.config.field());
        surface.draw(FrameView {
            viewport: self.viewport,
            grid: &self.grid,
            glow: Glow { center: cursor, radius: self.config.influence_radius },
        })?;
        Ok(decision)
    }

    fn layout(&self) -> GridLayout {
        GridLayout {
            spacing: self.config.grid_spacing,
            step: self.config.sample_step,
            parallax_factor: self.config.parallax_factor,
        }
    }

    // --- Queries ---

    /// Effective opacity: zero until the intro elapses, then the scroll fade.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.visibility.opacity()
    }

    #[must_use]
    pub fn intro_phase(&self) -> IntroPhase {
        self.visibility.phase()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn cursor(&self) -> Point {
        self.pointer.smoothed()
    }

    /// Geometry from the last executed frame.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}

struct Mounted<H, S> {
    core: RendererCore,
    host: H,
    surface: S,
    live: bool,
    presented_opacity: Option<f64>,
}

impl<H: Host + 'static, S: Surface + 'static> Mounted<H, S> {
    fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::PointerMove(sample) => self.core.on_pointer_move(sample),
            HostEvent::Scroll(scroll_y) => {
                self.core.on_scroll(scroll_y);
                self.present_opacity();
            }
            HostEvent::Resize(viewport) => {
                self.core.on_resize(viewport);
                if let Err(err) = self.surface.resize(viewport) {
                    log::warn!("grid resize failed: {err}");
                }
                self.present_opacity();
            }
        }
    }

    /// Push the effective opacity to the surface when it changed.
    fn present_opacity(&mut self) {
        let opacity = self.core.opacity();
        if self.presented_opacity == Some(opacity) {
            return;
        }
        match self.surface.set_opacity(opacity) {
            Ok(()) => self.presented_opacity = Some(opacity),
            Err(err) => log::warn!("grid opacity update failed: {err}"),
        }
    }

    fn schedule_frame(&mut self, weak: Weak<RefCell<Self>>) {
        self.host.request_frame(Box::new(move |timestamp| Self::on_frame(&weak, timestamp)));
    }

    fn on_frame(weak: &Weak<RefCell<Self>>, timestamp: f64) {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Ok(mut this) = shared.try_borrow_mut() else {
            log::warn!("grid frame re-entered; loop stopped");
            return;
        };
        if !this.live {
            return;
        }
        let Self { core, surface, .. } = &mut *this;
        if let Err(err) = core.tick(timestamp, surface) {
            log::warn!("grid frame failed: {err}");
        }
        this.schedule_frame(weak.clone());
    }

    fn on_intro_timer(weak: &Weak<RefCell<Self>>, token: u64) {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Ok(mut this) = shared.try_borrow_mut() else {
            return;
        };
        if !this.live {
            return;
        }
        if this.core.intro_elapsed(token) {
            this.host.clear_timeout();
            log::debug!("grid intro elapsed");
            this.present_opacity();
        }
    }
}

/// A mounted grid field: owns the core, the host registrations and the surface.
///
/// Listener, frame and timer callbacks hold only weak references, so anything
/// that fires after [`Renderer::unmount`] (or drop) does nothing.
pub struct Renderer<H: Host + 'static, S: Surface + 'static> {
    shared: Rc<RefCell<Mounted<H, S>>>,
}

impl<H: Host + 'static, S: Surface + 'static> Renderer<H, S> {
    /// Size the surface, subscribe to pointer, scroll and resize, and start
    /// the frame loop.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the config is invalid or the host cannot supply its
    /// initial state or listeners. Nothing stays registered on failure.
    pub fn mount(host: H, surface: S, config: GridConfig) -> Result<Self, RendererError> {
        config.validate()?;
        let shared = Rc::new(RefCell::new(Mounted {
            core: RendererCore::new(config),
            host,
            surface,
            live: true,
            presented_opacity: None,
        }));
        let renderer = Self { shared };
        if let Err(err) = renderer.start() {
            renderer.unmount();
            return Err(err);
        }
        Ok(renderer)
    }

    fn start(&self) -> Result<(), RendererError> {
        let weak = Rc::downgrade(&self.shared);
        let mut this = self.shared.borrow_mut();

        let viewport = this.host.viewport()?;
        let scroll_y = this.host.scroll_y()?;
        this.surface.resize(viewport)?;
        this.core.on_resize(viewport);
        this.core.on_scroll(scroll_y);
        this.present_opacity();

        for kind in [ListenerKind::PointerMove, ListenerKind::Scroll, ListenerKind::Resize] {
            let weak = weak.clone();
            this.host.listen(
                kind,
                Box::new(move |event| {
                    if let Some(shared) = weak.upgrade()
                        && let Ok(mut this) = shared.try_borrow_mut()
                        && this.live
                    {
                        this.handle(event);
                    }
                }),
            )?;
        }

        this.schedule_frame(weak);
        log::debug!("grid mounted at {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    /// Forward the host's visible signal, arming or cancelling the intro timer.
    pub fn set_visible(&self, visible: bool) {
        let mut this = self.shared.borrow_mut();
        if !this.live {
            return;
        }
        match this.core.set_host_visible(visible) {
            IntroCommand::Arm { token, delay_ms } => {
                let weak = Rc::downgrade(&self.shared);
                this.host.set_timeout(
                    delay_ms,
                    Box::new(move || Mounted::<H, S>::on_intro_timer(&weak, token)),
                );
                log::debug!("grid intro armed ({delay_ms} ms)");
            }
            IntroCommand::Cancel => {
                this.host.clear_timeout();
                log::debug!("grid intro cancelled");
            }
            IntroCommand::Keep => {}
        }
        this.present_opacity();
    }

    /// Remove all listeners and cancel the pending frame and timer. Idempotent.
    pub fn unmount(&self) {
        let mut this = self.shared.borrow_mut();
        if !this.live {
            return;
        }
        this.live = false;
        this.host.release();
        let stats = this.core.stats();
        log::debug!(
            "grid unmounted after {} ticks ({} rendered, {} throttled, {} invisible)",
            stats.ticks(),
            stats.rendered,
            stats.throttled,
            stats.invisible
        );
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.shared.borrow().live
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.shared.borrow().core.opacity()
    }

    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.shared.borrow().core.stats()
    }

    /// What the host still holds for this renderer.
    #[must_use]
    pub fn active_handles(&self) -> ActiveHandles {
        self.shared.borrow().host.active()
    }

    /// Read-only access to the core, for inspection.
    pub fn with_core<R>(&self, f: impl FnOnce(&RendererCore) -> R) -> R {
        f(&self.shared.borrow().core)
    }
}

impl<H: Host + 'static, S: Surface + 'static> Drop for Renderer<H, S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
