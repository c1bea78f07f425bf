use egui::{Rect, Vec2, pos2};

/// Scale `source` uniformly so it fits inside `target`, centered.
///
/// Returns the destination rectangle inside `target` (origin at 0,0). Sources smaller
/// than the target are scaled up. Degenerate sources yield `Rect::NOTHING`.
pub fn fit_centered(source: Vec2, target: Vec2) -> Rect {
    if source.x <= 0.0 || source.y <= 0.0 {
        return Rect::NOTHING;
    }

    let ratio = (target.x / source.x).min(target.y / source.y);
    let size = source * ratio;
    let offset = pos2((target.x - size.x) / 2.0, (target.y - size.y) / 2.0);
    Rect::from_min_size(offset, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_wide_image_is_letterboxed() {
        let rect = fit_centered(vec2(1400.0, 300.0), vec2(700.0, 600.0));
        assert_eq!(rect.width(), 700.0);
        assert_eq!(rect.height(), 150.0);
        assert_eq!(rect.min, pos2(0.0, 225.0));
    }

    #[test]
    fn test_tall_image_is_pillarboxed() {
        let rect = fit_centered(vec2(100.0, 300.0), vec2(700.0, 600.0));
        assert_eq!(rect.height(), 600.0);
        assert_eq!(rect.width(), 200.0);
        assert_eq!(rect.min, pos2(250.0, 0.0));
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(fit_centered(vec2(0.0, 10.0), vec2(700.0, 600.0)), Rect::NOTHING);
    }
}
