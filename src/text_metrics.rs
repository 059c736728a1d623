//! Text measurement capability. The layout pass never touches fonts
//! directly; it asks a [`TextMeasurer`] for the pixel size of a string.
//! [`SystemTextMeasurer`] answers from installed system fonts;
//! [`FixedTextMeasurer`] answers deterministically for tests and headless
//! hosts.

use std::collections::HashMap;
use std::sync::Mutex;

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use ttf_parser::Face;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, font_family: &str, font_size: f32) -> TextSize;
}

/// Width per character as a fraction of the font size; a workable average
/// for proportional faces when no real font is available.
const FALLBACK_ADVANCE: f32 = 0.56;
const LINE_HEIGHT: f32 = 1.2;

/// Deterministic measurer: every character advances the same fraction of
/// the font size. Layout output becomes independent of installed fonts.
#[derive(Debug, Clone, Copy)]
pub struct FixedTextMeasurer {
    pub advance: f32,
}

impl Default for FixedTextMeasurer {
    fn default() -> Self {
        Self {
            advance: FALLBACK_ADVANCE,
        }
    }
}

impl TextMeasurer for FixedTextMeasurer {
    fn measure(&self, text: &str, _font_family: &str, font_size: f32) -> TextSize {
        TextSize {
            width: text.chars().count() as f32 * font_size * self.advance,
            height: font_size * LINE_HEIGHT,
        }
    }
}

static FONT_DB: Lazy<Database> = Lazy::new(|| {
    let mut db = Database::new();
    db.load_system_fonts();
    db
});

struct LoadedFace {
    data: Vec<u8>,
    index: u32,
}

/// Measures with real glyph advances from system fonts, falling back to
/// the fixed advance for families or glyphs that cannot be resolved.
pub struct SystemTextMeasurer {
    faces: Mutex<HashMap<String, Option<LoadedFace>>>,
}

impl Default for SystemTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemTextMeasurer {
    pub fn new() -> Self {
        Self {
            faces: Mutex::new(HashMap::new()),
        }
    }

    fn load_face(family_list: &str) -> Option<LoadedFace> {
        let mut names: Vec<String> = Vec::new();
        let mut families: Vec<Family<'_>> = Vec::new();
        for part in family_list.split(',') {
            let raw = part.trim().trim_matches('"').trim_matches('\'');
            if raw.is_empty() {
                continue;
            }
            match raw.to_ascii_lowercase().as_str() {
                "serif" => families.push(Family::Serif),
                "sans-serif" | "system-ui" => families.push(Family::SansSerif),
                "monospace" | "ui-monospace" => families.push(Family::Monospace),
                "cursive" => families.push(Family::Cursive),
                "fantasy" => families.push(Family::Fantasy),
                _ => names.push(raw.to_string()),
            }
        }
        let named: Vec<Family<'_>> = names.iter().map(|n| Family::Name(n.as_str())).collect();
        let mut ordered = named;
        ordered.extend(families);
        if ordered.is_empty() {
            ordered.push(Family::SansSerif);
        }

        let query = Query {
            families: &ordered,
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = FONT_DB.query(&query)?;
        let mut loaded = None;
        FONT_DB.with_face_data(id, |data, index| {
            loaded = Some(LoadedFace {
                data: data.to_vec(),
                index,
            });
        });
        loaded
    }

    fn measure_with_face(face: &LoadedFace, text: &str, font_size: f32) -> Option<TextSize> {
        let face = Face::parse(&face.data, face.index).ok()?;
        let scale = font_size / face.units_per_em().max(1) as f32;
        let mut width = 0.0f32;
        for ch in text.chars() {
            if ch == '\n' {
                continue;
            }
            let advance = face
                .glyph_index(ch)
                .and_then(|id| face.glyph_hor_advance(id));
            match advance {
                Some(units) => width += units as f32 * scale,
                None => width += font_size * FALLBACK_ADVANCE,
            }
        }
        Some(TextSize {
            width,
            height: font_size * LINE_HEIGHT,
        })
    }
}

impl TextMeasurer for SystemTextMeasurer {
    fn measure(&self, text: &str, font_family: &str, font_size: f32) -> TextSize {
        if text.is_empty() || font_size <= 0.0 {
            return TextSize {
                width: 0.0,
                height: font_size.max(0.0) * LINE_HEIGHT,
            };
        }
        let fallback = FixedTextMeasurer::default().measure(text, font_family, font_size);
        let Ok(mut faces) = self.faces.lock() else {
            return fallback;
        };
        let face = faces
            .entry(font_family.trim().to_string())
            .or_insert_with(|| Self::load_face(font_family));
        match face {
            Some(face) => Self::measure_with_face(face, text, font_size).unwrap_or(fallback),
            None => fallback,
        }
    }
}
