use crate::catalog::Weight;
use serde::Serialize;

/// Axis-aligned bounding box in canvas coordinates, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// AABB intersection. Touching edges count as non-colliding, so the
    /// separation test uses `<=`.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x + self.w <= other.x
            || other.x + other.w <= self.x
            || self.y + self.h <= other.y
            || other.y + other.h <= self.y)
    }
}

/// The placement surface. Width comes from the host container at layout
/// time; height is a configured constant. The center is the spiral origin
/// for every label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Final per-label result: the footprint rectangle (padding included), the
/// decorative rotation, and whether the spiral search was exhausted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordPlacement {
    pub text: String,
    pub weight: Weight,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees; derived from processing index only, never from geometry,
    /// and never part of collision testing.
    pub rotate: f32,
    /// True when the label was stacked by the fallback path. Fallback
    /// placements are not collision-checked and may overlap.
    pub fallback: bool,
}

impl WordPlacement {
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.left,
            y: self.top,
            w: self.width,
            h: self.height,
        }
    }
}

/// One complete placement pass over the catalog, in processing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudLayout {
    pub width: f32,
    pub height: f32,
    pub words: Vec<WordPlacement>,
}
