use super::types::{Canvas, Rect};
use crate::config::CloudConfig;
use crate::measure::Extent;

/// True iff the candidate overlaps at least one already-placed rectangle.
/// Touching edges count as non-colliding. A linear scan is enough at this
/// scale (dozens of labels).
pub fn collides(candidate: &Rect, existing: &[Rect]) -> bool {
    existing.iter().any(|rect| candidate.intersects(rect))
}

/// Walk an Archimedean spiral r = a + b*theta out from the canvas center
/// and return the first candidate rectangle that is inside the inset
/// bounds and collision-free. Out-of-bounds candidates are skipped without
/// a collision check; the walk continues. Returns None once the attempt
/// budget is exhausted.
pub fn place_on_spiral(
    extent: Extent,
    canvas: Canvas,
    existing: &[Rect],
    config: &CloudConfig,
) -> Option<Rect> {
    let (center_x, center_y) = canvas.center();
    let inset = config.inset;
    let mut theta = 0.0f32;

    for _ in 0..config.max_attempts {
        let r = config.spiral_a + config.spiral_b * theta;
        let x = center_x + r * theta.cos() - extent.width / 2.0;
        let y = center_y + r * theta.sin() - extent.height / 2.0;

        if x < inset
            || y < inset
            || x + extent.width > canvas.width - inset
            || y + extent.height > canvas.height - inset
        {
            theta += config.theta_step;
            continue;
        }

        let candidate = Rect {
            x,
            y,
            w: extent.width,
            h: extent.height,
        };
        if !collides(&candidate, existing) {
            return Some(candidate);
        }
        theta += config.theta_step;
    }

    None
}

/// Deterministic stacked position for a label the spiral could not place:
/// rows walk down from the top by processing index, x is centered but
/// pinned inside the left/right insets. Not collision-checked; overlap in
/// this degraded mode is accepted.
pub fn fallback_rect(extent: Extent, index: usize, canvas: Canvas, config: &CloudConfig) -> Rect {
    let (center_x, _) = canvas.center();
    let y = config.fallback_top + index as f32 * (extent.height + config.fallback_gap);
    // min-then-max mirrors the reference clamp: a label wider than the
    // canvas pins to the left inset.
    let x = (center_x - extent.width / 2.0)
        .min(canvas.width - extent.width - config.inset)
        .max(config.inset);
    Rect {
        x,
        y,
        w: extent.width,
        h: extent.height,
    }
}

/// Decorative tilt for the word at a processing index: magnitude cycles
/// 1..=5 degrees, sign alternates with index parity. Purely cosmetic and
/// never fed back into collision geometry.
pub fn rotation_for_index(index: usize) -> f32 {
    let sign = if (index * 13) % 2 == 0 { 1.0 } else { -1.0 };
    let magnitude = ((index % 5) as f32 + 1.0).min(5.0);
    sign * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CloudConfig {
        CloudConfig::default()
    }

    fn extent(width: f32, height: f32) -> Extent {
        Extent { width, height }
    }

    #[test]
    fn collides_false_for_touching_edge() {
        let candidate = Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        let existing = [Rect {
            x: 10.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        }];
        assert!(!collides(&candidate, &existing));
    }

    #[test]
    fn collides_true_for_overlap() {
        let candidate = Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        let existing = [Rect {
            x: 5.0,
            y: 5.0,
            w: 10.0,
            h: 10.0,
        }];
        assert!(collides(&candidate, &existing));
    }

    #[test]
    fn collides_false_against_empty_set() {
        let candidate = Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        assert!(!collides(&candidate, &[]));
    }

    #[test]
    fn first_label_lands_at_the_center() {
        let canvas = Canvas::new(960.0, 420.0);
        let rect = place_on_spiral(extent(100.0, 30.0), canvas, &[], &config())
            .expect("empty canvas must place");
        // theta = 0: candidate center sits at (cx + a, cy).
        assert!((rect.x - (480.0 + 8.0 - 50.0)).abs() < 1e-3);
        assert!((rect.y - (210.0 - 15.0)).abs() < 1e-3);
    }

    #[test]
    fn spiral_placement_respects_inset_bounds() {
        let canvas = Canvas::new(300.0, 200.0);
        let cfg = config();
        let mut placed: Vec<Rect> = Vec::new();
        for _ in 0..8 {
            if let Some(rect) = place_on_spiral(extent(60.0, 24.0), canvas, &placed, &cfg) {
                assert!(rect.x >= cfg.inset);
                assert!(rect.y >= cfg.inset);
                assert!(rect.x + rect.w <= canvas.width - cfg.inset);
                assert!(rect.y + rect.h <= canvas.height - cfg.inset);
                placed.push(rect);
            }
        }
        assert!(!placed.is_empty());
    }

    #[test]
    fn spiral_placements_never_overlap() {
        let canvas = Canvas::new(600.0, 420.0);
        let cfg = config();
        let mut placed: Vec<Rect> = Vec::new();
        for _ in 0..12 {
            if let Some(rect) = place_on_spiral(extent(90.0, 28.0), canvas, &placed, &cfg) {
                assert!(!collides(&rect, &placed));
                placed.push(rect);
            }
        }
        assert!(placed.len() >= 2, "canvas should fit several labels");
    }

    #[test]
    fn oversized_label_exhausts_the_spiral() {
        let canvas = Canvas::new(50.0, 50.0);
        let result = place_on_spiral(extent(100.0, 30.0), canvas, &[], &config());
        assert_eq!(result, None);
    }

    #[test]
    fn fallback_rect_stacks_by_processing_index() {
        let canvas = Canvas::new(960.0, 420.0);
        let cfg = config();
        let first = fallback_rect(extent(100.0, 30.0), 0, canvas, &cfg);
        let third = fallback_rect(extent(100.0, 30.0), 2, canvas, &cfg);
        assert_eq!(first.y, 10.0);
        assert_eq!(third.y, 10.0 + 2.0 * 36.0);
        assert_eq!(first.x, 480.0 - 50.0);
    }

    #[test]
    fn fallback_rect_pins_oversized_label_to_left_inset() {
        let canvas = Canvas::new(50.0, 50.0);
        let cfg = config();
        let rect = fallback_rect(extent(100.0, 30.0), 0, canvas, &cfg);
        assert_eq!(rect.x, cfg.inset);
    }

    #[test]
    fn fallback_rect_centers_when_the_label_fits() {
        let canvas = Canvas::new(200.0, 420.0);
        let cfg = config();
        let rect = fallback_rect(extent(150.0, 30.0), 0, canvas, &cfg);
        assert_eq!(rect.x, 25.0);
        assert!(rect.x + rect.w <= canvas.width - cfg.inset);
    }

    #[test]
    fn rotation_magnitude_cycles_one_through_five() {
        for index in 0..25 {
            let rotate = rotation_for_index(index);
            let magnitude = rotate.abs();
            assert!((1.0..=5.0).contains(&magnitude), "index {index}: {rotate}");
            assert_eq!(magnitude, (index % 5) as f32 + 1.0);
        }
    }

    #[test]
    fn rotation_sign_alternates_with_index_parity() {
        for index in 0..10 {
            let rotate = rotation_for_index(index);
            if index % 2 == 0 {
                assert!(rotate > 0.0, "even index {index} should tilt positive");
            } else {
                assert!(rotate < 0.0, "odd index {index} should tilt negative");
            }
        }
    }
}
