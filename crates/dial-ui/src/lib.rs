//! Dial UI: retained widget tree on top of `dial-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dial_ui::prelude::*;
//!
//! let tick = Timer::new(Duration::from_secs(1));
//! tick.start();
//!
//! Application::new()
//!     .title("Hello")
//!     .font("body", font_bytes)
//!     .timer(&tick, || log::info!("tick"))
//!     .run_widget(|fonts| {
//!         let font = fonts.get("body").context("no body font")?;
//!         Ok(Column::new()
//!             .child(Text::new("Hello!", font, 18.0, Color::BLACK))
//!             .child(Button::new(Text::new("Click me", font, 14.0, Color::BLACK))
//!                 .on_click(|| log::info!("clicked")))
//!             .into())
//!     })?;
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere
//! an [`Element`](widget::Element) is accepted.

pub mod app;
pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod timer;
pub mod widget;
pub mod widgets;

pub use app::Application;

/// Everything you need to build and extend UI; import this in your component files.
pub mod prelude {
    pub use crate::app::{Application, FontMap};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::timer::{QuitHandle, Timer};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        button::Button,
        container::Container,
        flex::{Align, Column, Row},
        label::{Label, TextAlign},
        text::Text,
    };

    // Re-export the engine primitives everyone needs.
    pub use dial_engine::coords::{Rect, Vec2};
    pub use dial_engine::paint::Color;
    pub use dial_engine::scene::{LineCap, Stroke};
    pub use dial_engine::text::FontId;
}
