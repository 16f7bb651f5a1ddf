use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// A font file could not be parsed.
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Handle to a font in a [`FontSystem`]. The default handle is the first
/// font loaded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Vertical metrics of one line, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineMetrics {
    /// Distance from the top of the line box to the baseline.
    pub ascent: f32,
    /// Height of the line box.
    pub height: f32,
}

/// Loaded fonts, shared by layout (measuring) and the text renderer.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType/OpenType font.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        log::debug!("loaded font {:?} as {id:?}", font.name().unwrap_or("<unnamed>"));
        self.fonts.push(font);
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Line metrics for `size`; falls back to `0.8 / 1.2 × size` when the
    /// font lacks horizontal metrics or `id` is unknown.
    pub fn line_metrics(&self, id: FontId, size: f32) -> LineMetrics {
        self.get(id)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map(|m| LineMetrics { ascent: m.ascent, height: m.new_line_size })
            .unwrap_or(LineMetrics { ascent: size * 0.8, height: size * 1.2 })
    }

    /// Size of `text` laid out on one line (or wrapped at `max_width`).
    ///
    /// Width is the advance extent rather than the ink extent, so feeding it
    /// back as `max_width` never wraps the same text.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        let line_height = self.line_metrics(id, size).height;
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, line_height);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { max_width, ..LayoutSettings::default() });
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, line_height);
        }

        let width = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        Vec2::new(width, layout.height().max(line_height))
    }
}
