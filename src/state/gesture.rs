use egui::Pos2;

use crate::surface::{CoverageMask, Snapshot};

/// One pointer-down to pointer-up interaction on the surface.
///
/// Holds the anchor, every pointer position seen so far (anchor first), and the
/// surface snapshot taken when the gesture started.
#[derive(Debug, Clone)]
pub struct Gesture {
    anchor: Pos2,
    current: Pos2,
    path: Vec<Pos2>,
    snapshot: Snapshot,
    trail: Option<Trail>,
}

/// Coverage of the freehand path, extended segment by segment as points arrive.
#[derive(Debug, Clone)]
struct Trail {
    mask: CoverageMask,
    stroke_width: f32,
    /// Number of path points already folded into `mask`.
    covered: usize,
}

impl Trail {
    fn new(width: u32, height: u32, stroke_width: f32) -> Self {
        Self {
            mask: CoverageMask::new(width, height),
            stroke_width,
            covered: 0,
        }
    }

    fn extend(&mut self, path: &[Pos2]) {
        let half_width = self.stroke_width / 2.0;
        if self.covered == 0 {
            if let Some(first) = path.first() {
                self.mask.add_segment(*first, *first, half_width);
                self.covered = 1;
            }
        }
        for i in self.covered.max(1)..path.len() {
            self.mask.add_segment(path[i - 1], path[i], half_width);
        }
        self.covered = self.covered.max(path.len());
    }
}

impl Gesture {
    pub fn new(anchor: Pos2, snapshot: Snapshot) -> Self {
        Self {
            anchor,
            current: anchor,
            path: vec![anchor],
            snapshot,
            trail: None,
        }
    }

    /// Record a new pointer position.
    pub fn push(&mut self, pos: Pos2) {
        self.current = pos;
        self.path.push(pos);
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn current(&self) -> Pos2 {
        self.current
    }

    /// All positions of the gesture, starting with the anchor.
    pub fn path(&self) -> &[Pos2] {
        &self.path
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Coverage of the whole path stroked at `stroke_width` on a `width` x `height`
    /// surface.
    ///
    /// Only the segments added since the last call are rasterized. The cache is
    /// rebuilt when the width or the surface size changes.
    pub fn trail(&mut self, stroke_width: f32, width: u32, height: u32) -> &CoverageMask {
        let stale = self.trail.as_ref().is_none_or(|trail| {
            trail.stroke_width != stroke_width || trail.mask.dimensions() != (width, height)
        });
        if stale {
            self.trail = None;
        }
        let trail = self
            .trail
            .get_or_insert_with(|| Trail::new(width, height, stroke_width));
        trail.extend(&self.path);
        &trail.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Outline, Surface};
    use egui::pos2;

    fn gesture(points: &[Pos2]) -> Gesture {
        let mut gesture = Gesture::new(points[0], Surface::new(60, 60).snapshot());
        for p in &points[1..] {
            gesture.push(*p);
        }
        gesture
    }

    #[test]
    fn test_trail_grows_with_path() {
        let points = [pos2(5.0, 5.0), pos2(30.0, 10.0), pos2(50.0, 50.0)];
        let mut live = gesture(&points[..1]);
        live.trail(4.0, 60, 60);
        for p in &points[1..] {
            live.push(*p);
            live.trail(4.0, 60, 60);
        }

        let mut expected = CoverageMask::new(60, 60);
        expected.add_outline(&Outline::open(points.to_vec()), 2.0);
        assert_eq!(live.trail(4.0, 60, 60), &expected);
    }

    #[test]
    fn test_trail_rebuilds_when_width_changes() {
        let points = [pos2(5.0, 5.0), pos2(50.0, 5.0)];
        let mut live = gesture(&points);
        live.trail(2.0, 60, 60);

        let mut expected = CoverageMask::new(60, 60);
        expected.add_outline(&Outline::open(points.to_vec()), 5.0);
        assert_eq!(live.trail(10.0, 60, 60), &expected);
    }
}
