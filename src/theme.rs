use crate::catalog::Weight;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    /// Font size of a weight-1 label; heavier classes scale off this.
    pub base_font_size: f32,
    pub brand_color: String,
    pub ink_color: String,
    pub background: String,
    /// Opacity applied to non-brand words.
    pub ink_opacity: f32,
}

impl Theme {
    /// Palette of the original HALP site: red brand accents over sand.
    pub fn halp() -> Self {
        Self {
            font_family: "Fredoka, Inter, system-ui, sans-serif".to_string(),
            base_font_size: 16.0,
            brand_color: "#ff3a3a".to_string(),
            ink_color: "#2c2c2c".to_string(),
            background: "#f5efe6".to_string(),
            ink_opacity: 0.85,
        }
    }

    pub fn monochrome() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            base_font_size: 16.0,
            brand_color: "#1c2430".to_string(),
            ink_color: "#1c2430".to_string(),
            background: "#ffffff".to_string(),
            ink_opacity: 0.7,
        }
    }

    /// Font size for a weight class: {1: base, 2: 1.25x, 3: 1.75x, 4: 2.5x},
    /// the desktop steps of the original size ramp.
    pub fn font_size(&self, weight: Weight) -> f32 {
        let scale = match weight {
            Weight::Light => 1.0,
            Weight::Medium => 1.25,
            Weight::Bold => 1.75,
            Weight::Hero => 2.5,
        };
        self.base_font_size * scale
    }

    /// CSS font weight for a class: normal/semibold/bold/extrabold.
    pub fn font_weight(&self, weight: Weight) -> u16 {
        match weight {
            Weight::Light => 400,
            Weight::Medium => 600,
            Weight::Bold => 700,
            Weight::Hero => 800,
        }
    }

    /// Words alternate brand/ink by processing index; every third word
    /// carries the brand color at full opacity.
    pub fn word_color(&self, index: usize) -> (&str, f32) {
        if index % 3 == 0 {
            (self.brand_color.as_str(), 1.0)
        } else {
            (self.ink_color.as_str(), self.ink_opacity)
        }
    }
}
