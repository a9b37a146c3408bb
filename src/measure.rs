use crate::catalog::Weight;
use crate::theme::Theme;
use fontdb::{Database, Family, Query, Stretch, Style};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use ttf_parser::{Face, GlyphId};

/// Measured rendered size of a label, in canvas units. The placement pass
/// adds its own breathing-room padding on top; implementors report the raw
/// rendered size only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn padded(self, pad_x: f32, pad_y: f32) -> Extent {
        Extent {
            width: self.width + pad_x,
            height: self.height + pad_y,
        }
    }
}

/// Host-provided text measurement capability. The engine never assumes a
/// rendering technology; any host with accurate metrics for the four
/// weight classes satisfies the contract. `None` means the host could not
/// measure this label; the engine falls back to an estimated extent.
pub trait ExtentMeasurer {
    fn measure(&self, text: &str, weight: Weight) -> Option<Extent>;
}

/// Deterministic measurer with fixed per-character advance, for hosts
/// without font access and for reproducible tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for FixedMeasurer {
    fn default() -> Self {
        Self {
            char_width: 9.0,
            line_height: 20.0,
        }
    }
}

impl ExtentMeasurer for FixedMeasurer {
    fn measure(&self, text: &str, weight: Weight) -> Option<Extent> {
        let scale = u8::from(weight) as f32;
        Some(Extent {
            width: text.chars().count() as f32 * self.char_width * scale,
            height: self.line_height * scale,
        })
    }
}

/// Conservative estimate used when measurement fails: the usual average
/// advance of a sans face is a bit over half an em, and a single line is
/// roughly 1.2em tall.
pub fn approximate_extent(text: &str, weight: Weight, theme: &Theme) -> Extent {
    let font_size = theme.font_size(weight);
    Extent {
        width: text.chars().count().max(1) as f32 * font_size * 0.56,
        height: font_size * 1.2,
    }
}

static FONT_STORE: Lazy<Mutex<FontStore>> = Lazy::new(|| Mutex::new(FontStore::new()));

/// Measures labels against the system font database, resolving each weight
/// class to its mapped font size and weight.
#[derive(Debug, Clone)]
pub struct SystemFontMeasurer {
    theme: Theme,
}

impl SystemFontMeasurer {
    pub fn new(theme: &Theme) -> Self {
        Self {
            theme: theme.clone(),
        }
    }
}

impl ExtentMeasurer for SystemFontMeasurer {
    fn measure(&self, text: &str, weight: Weight) -> Option<Extent> {
        let font_size = self.theme.font_size(weight);
        // Declining keeps reported extents strictly positive; the caller
        // routes unmeasurable labels through the estimate instead.
        if text.is_empty() || font_size <= 0.0 {
            return None;
        }
        let mut store = FONT_STORE.lock().ok()?;
        store.measure(
            text,
            font_size,
            &self.theme.font_family,
            self.theme.font_weight(weight),
        )
    }
}

struct FontStore {
    db: Database,
    loaded_system_fonts: bool,
    cache: HashMap<(String, u16), Option<FontFace>>,
}

impl FontStore {
    fn new() -> Self {
        Self {
            db: Database::new(),
            loaded_system_fonts: false,
            cache: HashMap::new(),
        }
    }

    fn measure(
        &mut self,
        text: &str,
        font_size: f32,
        font_family: &str,
        css_weight: u16,
    ) -> Option<Extent> {
        let key = (normalize_family_key(font_family), css_weight);
        if !self.cache.contains_key(&key) {
            let face = self.load_face(font_family, css_weight);
            self.cache.insert(key.clone(), face);
        }
        let face = self.cache.get_mut(&key).and_then(|face| face.as_mut())?;
        let normalized = text.replace('\t', "    ");
        face.measure(&normalized, font_size)
    }

    fn load_face(&mut self, font_family: &str, css_weight: u16) -> Option<FontFace> {
        let mut names: Vec<String> = Vec::new();
        let mut generics: Vec<Option<Family<'static>>> = Vec::new();
        for part in font_family.split(',') {
            let raw = part.trim().trim_matches('"').trim_matches('\'');
            if raw.is_empty() {
                continue;
            }
            match raw.to_ascii_lowercase().as_str() {
                "serif" => generics.push(Some(Family::Serif)),
                "sans-serif" | "system-ui" | "-apple-system" | "ui-sans-serif" => {
                    generics.push(Some(Family::SansSerif))
                }
                "monospace" | "ui-monospace" => generics.push(Some(Family::Monospace)),
                "cursive" => generics.push(Some(Family::Cursive)),
                "fantasy" => generics.push(Some(Family::Fantasy)),
                _ => {
                    names.push(raw.to_string());
                    generics.push(None);
                }
            }
        }

        let mut name_iter = names.iter();
        let mut families: Vec<Family<'_>> = Vec::with_capacity(generics.len().max(1));
        for generic in generics {
            match generic {
                Some(family) => families.push(family),
                None => {
                    if let Some(name) = name_iter.next() {
                        families.push(Family::Name(name.as_str()));
                    }
                }
            }
        }
        if families.is_empty() {
            families.push(Family::SansSerif);
        }

        if !self.loaded_system_fonts {
            self.db.load_system_fonts();
            self.loaded_system_fonts = true;
        }

        let query = Query {
            families: &families,
            weight: fontdb::Weight(css_weight),
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = self.db.query(&query)?;
        let mut loaded: Option<FontFace> = None;
        self.db.with_face_data(id, |data, index| {
            let bytes = data.to_vec();
            loaded = FontFace::parse(bytes, index);
        });
        loaded
    }
}

struct FontFace {
    _data: Vec<u8>,
    units_per_em: u16,
    line_units: f32,
    face: Face<'static>,
    ascii_advances: [u16; 128],
    advance_cache: HashMap<char, Option<u16>>,
}

impl FontFace {
    fn parse(data: Vec<u8>, index: u32) -> Option<Self> {
        let face = Face::parse(&data, index).ok()?;
        // The face borrows from `_data`, which lives exactly as long as
        // this struct and is never mutated.
        let face = unsafe { std::mem::transmute::<Face<'_>, Face<'static>>(face) };
        let units_per_em = face.units_per_em().max(1);
        let line_units = (face.ascender() as f32 - face.descender() as f32).max(1.0);
        let mut ascii_advances = [0u16; 128];
        for byte in 0u8..=127 {
            if let Some(glyph_id) = face.glyph_index(byte as char) {
                ascii_advances[byte as usize] = face.glyph_hor_advance(glyph_id).unwrap_or(0);
            }
        }
        Some(Self {
            _data: data,
            units_per_em,
            line_units,
            face,
            ascii_advances,
            advance_cache: HashMap::new(),
        })
    }

    fn measure(&mut self, text: &str, font_size: f32) -> Option<Extent> {
        let scale = font_size / self.units_per_em as f32;
        let fallback = font_size * 0.56;
        let height = self.line_units * scale;

        let mut width = 0.0f32;
        if text.is_ascii() {
            for byte in text.as_bytes() {
                if *byte == b'\n' {
                    continue;
                }
                let advance = self.ascii_advances[*byte as usize];
                if advance == 0 {
                    width += fallback;
                } else {
                    width += advance as f32 * scale;
                }
            }
            return Some(Extent {
                width: width.max(0.0),
                height,
            });
        }

        for ch in text.chars() {
            if ch == '\n' {
                continue;
            }
            let advance = if let Some(cached) = self.advance_cache.get(&ch) {
                *cached
            } else {
                let advance = self
                    .face
                    .glyph_index(ch)
                    .and_then(|id| self.face.glyph_hor_advance(GlyphId(id.0)));
                self.advance_cache.insert(ch, advance);
                advance
            };
            match advance {
                Some(units) => width += units as f32 * scale,
                None => width += fallback,
            }
        }
        Some(Extent {
            width: width.max(0.0),
            height,
        })
    }
}

fn normalize_family_key(font_family: &str) -> String {
    let trimmed = font_family.trim();
    if trimmed.is_empty() {
        "sans-serif".to_string()
    } else {
        trimmed.to_string()
    }
}
