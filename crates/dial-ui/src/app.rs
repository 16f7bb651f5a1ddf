use std::collections::HashMap;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use dial_engine::coords::Vec2;
use dial_engine::core::{App as EngineApp, AppControl, FrameCtx};
use dial_engine::device::GpuInit;
use dial_engine::input::MouseButton;
use dial_engine::paint::Color;
use dial_engine::render::SceneRenderer;
use dial_engine::text::FontId;
use dial_engine::time::FrameTime;
use dial_engine::window::{CursorIcon, Runtime, RuntimeConfig};

use crate::scene::{UiInput, UiScene};
use crate::timer::{QuitHandle, Timer, TimerSet};
use crate::widget::Element;

// ── FontMap ───────────────────────────────────────────────────────────────

/// A name-keyed map of loaded font handles.
///
/// Passed to the builder closure in [`Application::run_widget`] so the
/// application can retrieve [`FontId`] values by name.
pub struct FontMap(pub(crate) HashMap<String, FontId>);

impl FontMap {
    /// Returns the [`FontId`] registered under `name`.
    pub fn get(&self, name: &str) -> Option<FontId> {
        self.0.get(name).copied()
    }
}

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// Configure the window, fonts, and timers, then start the event loop with
/// [`run_widget`](Self::run_widget).
///
/// ```rust,ignore
/// let tick = Timer::new(Duration::from_secs(1));
/// let app = Application::new().title("Clock").font("body", bytes);
/// let quit = app.quit_handle();
/// app.timer(&tick, move || refresh())
///     .run_widget(|fonts| Ok(MyRoot::new(fonts.get("body")?).into()))?;
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    min_size: Option<(f64, f64)>,
    background: Color,
    fonts: Vec<(String, Vec<u8>)>,
    timers: TimerSet,
    quit: QuitHandle,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "dial".to_string(),
            width: 500.0,
            height: 500.0,
            min_size: None,
            background: Color::WHITE,
            fonts: Vec::new(),
            timers: TimerSet::default(),
            quit: QuitHandle::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Smallest window size in logical pixels.
    pub fn min_size(mut self, width: f64, height: f64) -> Self {
        self.min_size = Some((width, height));
        self
    }

    /// Color the window is cleared to behind the widgets.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Register a named font, retrieved later through [`FontMap::get`].
    pub fn font(mut self, name: impl Into<String>, data: Vec<u8>) -> Self {
        self.fonts.push((name.into(), data));
        self
    }

    /// Run `callback` on the UI thread each time `timer` fires.
    ///
    /// Timers are polled once per frame before layout, and the event loop
    /// sleeps until the earliest running timer is due.
    pub fn timer(mut self, timer: &Timer, callback: impl FnMut() + 'static) -> Self {
        self.timers.add(timer.clone(), Box::new(callback));
        self
    }

    /// Handle that ends the event loop after the current frame.
    pub fn quit_handle(&self) -> QuitHandle {
        self.quit.clone()
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Loads the fonts, builds the root widget, and runs the event loop until
    /// the window closes or a [`QuitHandle`] fires.
    ///
    /// `build` is called once; the returned [`Element`] persists across
    /// frames and is mutated in place via `on_event`.
    pub fn run_widget<F>(self, build: F) -> Result<()>
    where
        F: FnOnce(&FontMap) -> Result<Element>,
    {
        let mut ui_scene = UiScene::new();
        let mut fonts = HashMap::new();
        for (name, bytes) in &self.fonts {
            let id = ui_scene
                .load_font(bytes)
                .with_context(|| format!("failed to load font '{name}'"))?;
            fonts.insert(name.clone(), id);
        }
        let root = build(&FontMap(fonts)).context("failed to build the widget tree")?;

        let config = RuntimeConfig {
            title: self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            min_size: self.min_size.map(|(w, h)| LogicalSize::new(w, h)),
        };
        let state = UiAppState {
            ui_scene,
            renderer: SceneRenderer::new(),
            root,
            timers: self.timers,
            quit: self.quit,
            background: self.background,
            cursor: CursorIcon::Default,
        };
        Runtime::run(config, GpuInit::default(), state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Implements the engine's `App` on behalf of the widget tree.
///
/// Everything engine-specific (renderer, FrameCtx) lives here.
struct UiAppState {
    ui_scene: UiScene,
    renderer: SceneRenderer,
    root: Element,
    timers: TimerSet,
    quit: QuitHandle,
    background: Color,
    cursor: CursorIcon,
}

impl UiAppState {
    /// Timers, then events, layout and paint, all against the frame's
    /// single timestamp. Returns the cursor the widgets asked for.
    fn update(&mut self, time: FrameTime, viewport: Vec2, input: &UiInput) -> CursorIcon {
        log::trace!("frame {} (dt {:.3}s)", time.frame_index, time.dt);
        self.timers.poll(time.now);
        self.ui_scene.frame(&mut self.root, viewport, input)
    }
}

impl EngineApp for UiAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let ui_input = UiInput {
            mouse_pos: ctx.input.pointer_pos.map(|(x, y)| Vec2::new(x, y)),
            mouse_pressed: ctx.input.button_down(MouseButton::Left),
            mouse_clicked: ctx.input_frame.released(MouseButton::Left),
        };

        let cursor = self.update(ctx.time, Vec2::new(w, h), &ui_input);
        if cursor != self.cursor {
            ctx.window.set_cursor(cursor);
            self.cursor = cursor;
        }

        if self.quit.is_requested() {
            return AppControl::Exit;
        }

        // ── Render ────────────────────────────────────────────────────────
        let dl = &mut self.ui_scene.draw_list;
        let fs = &self.ui_scene.font_system;
        let renderer = &mut self.renderer;
        ctx.render(self.background, |rctx, target| renderer.render(rctx, target, dl, fs))
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use dial_engine::time::FrameClock;

    use super::*;
    use crate::widgets::label::Label;

    fn state(timers: TimerSet, root: Element) -> UiAppState {
        UiAppState {
            ui_scene: UiScene::new(),
            renderer: SceneRenderer::new(),
            root,
            timers,
            quit: QuitHandle::default(),
            background: Color::WHITE,
            cursor: CursorIcon::Default,
        }
    }

    #[test]
    fn timers_fire_at_the_frame_timestamp_before_paint() {
        let t0 = Instant::now();
        let timer = Timer::new(Duration::from_millis(10));
        timer.start_at(t0);

        let ticks = Rc::new(Cell::new(0));
        let mut timers = TimerSet::default();
        let counter = ticks.clone();
        timers.add(timer.clone(), Box::new(move || counter.set(counter.get() + 1)));

        let shown = ticks.clone();
        let label = Label::new(move || format!("ticks {}", shown.get()), FontId::default(), 12.0, Color::BLACK);
        let mut app = state(timers, label.into());
        let mut clock = FrameClock::new();
        let viewport = Vec2::new(200.0, 100.0);

        app.update(clock.tick_at(t0 + Duration::from_millis(5)), viewport, &UiInput::default());
        assert_eq!(ticks.get(), 0);

        app.update(clock.tick_at(t0 + Duration::from_millis(10)), viewport, &UiInput::default());
        assert_eq!(ticks.get(), 1);
        let painted = app.ui_scene.draw_list.items().iter().any(|i| match &i.cmd {
            dial_engine::scene::DrawCmd::Text(t) => t.text == "ticks 1",
            _ => false,
        });
        assert!(painted);
        assert_eq!(app.next_deadline(), Some(t0 + Duration::from_millis(20)));
    }
}
