use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use dial_ui::prelude::*;

use crate::config::DialConfig;
use crate::face::AnalogFace;
use crate::model::DialModel;

pub type SharedModel = Rc<RefCell<DialModel>>;

/// Handles the buttons need besides the model.
pub struct Controls {
    pub stopwatch_timer: Timer,
    pub quit: QuitHandle,
}

/// Readouts on top, face in the middle, buttons at the bottom.
pub fn build(config: &DialConfig, font: FontId, model: SharedModel, controls: Controls) -> Element {
    let clock = model.clone();
    let stopwatch = model.clone();
    let face = model.clone();

    let readouts = Column::new()
        .spacing(4.0)
        .child(
            Label::new(move || clock.borrow().clock_text(), font, config.readout_size, Color::BLACK)
                .align(TextAlign::Center),
        )
        .child(
            Label::new(move || stopwatch.borrow().stopwatch_text(), font, config.readout_size, Color::BLACK)
                .align(TextAlign::Center),
        );

    Column::new()
        .padding(Edges::symmetric(10.0, 10.0))
        .spacing(6.0)
        .cross_align(Align::Center)
        .child(Container::new().padding(Edges::symmetric(4.0, 0.0)).child(readouts))
        .grow(AnalogFace::new(
            move || face.borrow().wall_time(),
            font,
            config.numeral_size,
            config.face,
        ))
        .child(button_row(config, font, model, controls))
        .into()
}

fn button_row(config: &DialConfig, font: FontId, model: SharedModel, controls: Controls) -> Row {
    let Controls { stopwatch_timer, quit } = controls;
    let size = config.button_text_size;

    let start = {
        let (model, timer) = (model.clone(), stopwatch_timer.clone());
        button("Start", font, size).on_click(move || {
            if model.borrow_mut().start(Instant::now()) {
                timer.start();
            }
        })
    };
    let stop = {
        let (model, timer) = (model.clone(), stopwatch_timer.clone());
        button("Stop", font, size).on_click(move || {
            timer.stop();
            model.borrow_mut().stop(Instant::now());
        })
    };
    let reset = {
        let timer = stopwatch_timer;
        button("Reset", font, size).on_click(move || {
            timer.stop();
            model.borrow_mut().reset();
        })
    };
    let close = button("Close", font, size).on_click(move || quit.quit());

    Row::new().spacing(8.0).cross_align(Align::Center).children([start, stop, reset, close])
}

fn button(label: &str, font: FontId, size: f32) -> Button {
    let fill = Color::from_srgb_u8(246, 246, 246, 255);
    let accent = Color::from_srgb_u8(120, 160, 220, 255);
    Button::new(Text::new(label, font, size, Color::BLACK))
        .background(fill)
        .hover_background(fill.lerp(accent, 0.2))
        .press_background(fill.lerp(accent, 0.45))
        .stroke(Stroke::new(1.0, Color::from_srgb_u8(140, 140, 140, 255)))
        .corner_radius(3.0)
        .padding(Edges::symmetric(6.0, 14.0))
        .min_size(72.0, 0.0)
}
