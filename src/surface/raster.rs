//! Coverage-based rasterization of stroked outlines.
//!
//! A stroke of width `w` covers every pixel whose center lies within `w / 2` of the
//! outline. Edges get one pixel of linear falloff for anti-aliasing. Joins and caps
//! are round, which falls out of the distance test for free.
//!
//! Coverage is gathered piece by piece into a [`CoverageMask`]: every segment only
//! visits the pixels near itself and keeps the maximum coverage seen per pixel. The
//! mask is then composited onto the pixels in a single pass, so overlapping segments
//! of one stroke never blend twice.

use egui::{Color32, Pos2, Rect, pos2};
use image::{Rgba, RgbaImage};

use crate::stroke::StrokeStyle;

/// How a stroke combines with the pixels already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Paint the stroke color over the existing pixels.
    SourceOver,
    /// Remove existing pixels where the stroke covers them; the color is ignored.
    DestinationOut,
}

/// An outline to be stroked.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Connected line segments. A single point renders as a round dot.
    Polyline { points: Vec<Pos2>, closed: bool },
    Circle { center: Pos2, radius: f32 },
}

impl Outline {
    pub fn open(points: Vec<Pos2>) -> Self {
        Outline::Polyline {
            points,
            closed: false,
        }
    }

    pub fn closed(points: Vec<Pos2>) -> Self {
        Outline::Polyline {
            points,
            closed: true,
        }
    }
}

fn segment_distance(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelBox {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl PixelBox {
    fn union(self, other: PixelBox) -> PixelBox {
        PixelBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// Per-pixel stroke coverage in `0.0..=1.0`, sized like the surface it targets.
#[derive(Clone, PartialEq)]
pub struct CoverageMask {
    width: u32,
    height: u32,
    values: Vec<f32>,
    /// Smallest box holding every nonzero value.
    dirty: Option<PixelBox>,
}

impl std::fmt::Debug for CoverageMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverageMask")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl CoverageMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width as usize * height as usize],
            dirty: None,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.dirty.is_none()
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.values[self.index(x, y)]
    }

    /// Add the coverage of a segment stroked with the given half width. `a == b`
    /// gives a round dot.
    pub fn add_segment(&mut self, a: Pos2, b: Pos2, half_width: f32) {
        let bounds = Rect::from_two_pos(a, b);
        self.add_region(bounds, half_width, |p| segment_distance(p, a, b));
    }

    /// Add the coverage of a whole outline.
    pub fn add_outline(&mut self, outline: &Outline, half_width: f32) {
        match outline {
            Outline::Polyline { points, closed } => {
                match points.as_slice() {
                    [] => {}
                    [only] => self.add_segment(*only, *only, half_width),
                    _ => {
                        for pair in points.windows(2) {
                            self.add_segment(pair[0], pair[1], half_width);
                        }
                    }
                }
                if *closed && points.len() > 2 {
                    if let (Some(first), Some(last)) = (points.first(), points.last()) {
                        self.add_segment(*last, *first, half_width);
                    }
                }
            }
            Outline::Circle { center, radius } => {
                let (center, radius) = (*center, *radius);
                let bounds = Rect::from_center_size(center, egui::Vec2::splat(radius * 2.0));
                self.add_region(bounds, half_width, |p| (p.distance(center) - radius).abs());
            }
        }
    }

    /// Visit the pixels of `bounds` grown by the stroke reach and keep the larger
    /// of the stored and the new coverage.
    fn add_region(&mut self, bounds: Rect, half_width: f32, distance: impl Fn(Pos2) -> f32) {
        let half_width = half_width.max(0.0);
        let Some(region) = self.clip(bounds.expand(half_width + 1.0)) else {
            return;
        };

        let mut touched = false;
        for y in region.y0..region.y1 {
            let row = y as usize * self.width as usize;
            for x in region.x0..region.x1 {
                let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (half_width + 0.5 - distance(center)).clamp(0.0, 1.0);
                let value = &mut self.values[row + x as usize];
                if coverage > *value {
                    *value = coverage;
                    touched = true;
                }
            }
        }

        if touched {
            self.dirty = Some(match self.dirty {
                Some(dirty) => dirty.union(region),
                None => region,
            });
        }
    }

    fn clip(&self, bounds: Rect) -> Option<PixelBox> {
        if !bounds.is_finite() || bounds.is_negative() {
            return None;
        }
        let region = PixelBox {
            x0: bounds.min.x.floor().max(0.0) as u32,
            y0: bounds.min.y.floor().max(0.0) as u32,
            x1: (bounds.max.x.ceil().max(0.0) as u32).min(self.width),
            y1: (bounds.max.y.ceil().max(0.0) as u32).min(self.height),
        };
        (region.x0 < region.x1 && region.y0 < region.y1).then_some(region)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Apply the mask to `pixels` once, returning whether any pixel was touched.
    pub fn composite(&self, pixels: &mut RgbaImage, color: Color32, composite: Composite) -> bool {
        if pixels.dimensions() != self.dimensions() {
            log::warn!(
                "Coverage mask {:?} does not match pixels {:?}",
                self.dimensions(),
                pixels.dimensions()
            );
            return false;
        }
        let Some(region) = self.dirty else {
            return false;
        };

        let src = color.to_srgba_unmultiplied();
        let mut touched = false;
        for y in region.y0..region.y1 {
            for x in region.x0..region.x1 {
                let coverage = self.values[self.index(x, y)];
                if coverage <= 0.0 {
                    continue;
                }
                let dst = pixels.get_pixel_mut(x, y);
                match composite {
                    Composite::SourceOver => blend_over(dst, src, coverage),
                    Composite::DestinationOut => erase(dst, coverage),
                }
                touched = true;
            }
        }
        touched
    }
}

/// Stroke `outline` into `pixels`, returning whether any pixel was touched.
pub fn stroke(pixels: &mut RgbaImage, outline: &Outline, style: &StrokeStyle, composite: Composite) -> bool {
    let mut mask = CoverageMask::new(pixels.width(), pixels.height());
    mask.add_outline(outline, style.width / 2.0);
    mask.composite(pixels, style.color, composite)
}

fn blend_over(dst: &mut Rgba<u8>, src: [u8; 4], coverage: f32) {
    let src_a = coverage * f32::from(src[3]) / 255.0;
    let dst_a = f32::from(dst.0[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        dst.0 = [0, 0, 0, 0];
        return;
    }
    for i in 0..3 {
        let c = (f32::from(src[i]) * src_a + f32::from(dst.0[i]) * dst_a * (1.0 - src_a)) / out_a;
        dst.0[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = (out_a * 255.0).round() as u8;
}

fn erase(dst: &mut Rgba<u8>, coverage: f32) {
    let a = f32::from(dst.0[3]) * (1.0 - coverage);
    dst.0[3] = a.round() as u8;
    if dst.0[3] == 0 {
        dst.0 = [0, 0, 0, 0];
    }
}
