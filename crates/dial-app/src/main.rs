//! Clock & stopwatch window.

mod config;
mod face;
mod fonts;
mod model;
mod view;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use dial_clock::SystemClock;
use dial_engine::logging::{init_logging, LoggingConfig};
use dial_ui::prelude::*;

use crate::config::DialConfig;
use crate::model::DialModel;
use crate::view::Controls;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DialConfig::default();
    let font = fonts::load_system_font()?;

    let model = Rc::new(RefCell::new(DialModel::new(SystemClock)));
    let clock_timer = Timer::new(config.clock_period);
    let stopwatch_timer = Timer::new(config.stopwatch_period);
    clock_timer.start();

    let app = Application::new()
        .title(config.title.clone())
        .size(config.width, config.height)
        .min_size(240.0, 320.0)
        .background(Color::from_srgb_u8(238, 238, 238, 255))
        .font("body", font);
    let quit = app.quit_handle();

    let on_clock = model.clone();
    let on_stopwatch = model.clone();
    let controls = Controls { stopwatch_timer: stopwatch_timer.clone(), quit };

    log::info!("starting {}", config.title);
    app.timer(&clock_timer, move || on_clock.borrow_mut().tick_clock())
        .timer(&stopwatch_timer, move || on_stopwatch.borrow_mut().tick_stopwatch(Instant::now()))
        .run_widget(|fonts| {
            let font = fonts.get("body").context("body font was not registered")?;
            Ok(view::build(&config, font, model, controls))
        })
        .context("dial exited with an error")
}
