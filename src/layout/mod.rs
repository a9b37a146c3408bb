mod order;
mod spiral;
pub(crate) mod types;

pub use types::*;

pub use order::processing_order;
pub use spiral::{collides, fallback_rect, place_on_spiral, rotation_for_index};

use crate::catalog::Label;
use crate::config::CloudConfig;
use crate::measure::{ExtentMeasurer, approximate_extent};
use crate::theme::Theme;

/// Run one placement pass over the catalog: deterministic ordering, extent
/// measurement with breathing-room padding, spiral search per label, and
/// the fallback stacker for anything the spiral cannot fit. Stateless
/// across invocations; identical inputs yield identical layouts.
///
/// A canvas that has not been laid out yet (width or height <= 0) skips
/// the pass and returns an empty layout rather than producing degenerate
/// rectangles.
pub fn compute_cloud_layout(
    labels: &[Label],
    measurer: &dyn ExtentMeasurer,
    canvas: Canvas,
    theme: &Theme,
    config: &CloudConfig,
) -> CloudLayout {
    let mut layout = CloudLayout {
        width: canvas.width.max(0.0),
        height: canvas.height.max(0.0),
        words: Vec::with_capacity(labels.len()),
    };
    if canvas.width <= 0.0 || canvas.height <= 0.0 {
        return layout;
    }

    let ordered = processing_order(labels);
    let mut placed_rects: Vec<Rect> = Vec::with_capacity(ordered.len());

    for (index, label) in ordered.iter().enumerate() {
        let measured = measurer.measure(&label.text, label.weight);
        // A label the host cannot measure still gets a deterministic
        // position: estimate its extent and stack it.
        let unmeasured = measured.is_none();
        let extent = measured
            .unwrap_or_else(|| approximate_extent(&label.text, label.weight, theme))
            .padded(config.extent_pad_x, config.extent_pad_y);

        let spiral_rect = if unmeasured {
            None
        } else {
            place_on_spiral(extent, canvas, &placed_rects, config)
        };

        let (rect, rotate, fallback) = match spiral_rect {
            Some(rect) => (rect, rotation_for_index(index), false),
            None => (fallback_rect(extent, index, canvas, config), 0.0, true),
        };

        placed_rects.push(rect);
        layout.words.push(WordPlacement {
            text: label.text.clone(),
            weight: label.weight,
            left: rect.x,
            top: rect.y,
            width: rect.w,
            height: rect.h,
            rotate,
            fallback,
        });
    }

    layout
}
