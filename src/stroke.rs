use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::filter::Filter;

pub const MIN_BRUSH_WIDTH: u32 = 1;
pub const MAX_BRUSH_WIDTH: u32 = 30;
pub const DEFAULT_BRUSH_WIDTH: u32 = 5;

/// Color shown in the custom color picker before anything is chosen.
pub const CUSTOM_COLOR_DEFAULT: Color32 = Color32::from_rgb(0x4A, 0x98, 0xF7);

/// Stroke width in pixels, always within `MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct BrushWidth(u32);

impl BrushWidth {
    /// Build a width, clamping out-of-range requests to the nearest bound.
    pub fn new(width: u32) -> Self {
        Self(width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl Default for BrushWidth {
    fn default() -> Self {
        Self(DEFAULT_BRUSH_WIDTH)
    }
}

impl From<u32> for BrushWidth {
    fn from(width: u32) -> Self {
        Self::new(width)
    }
}

impl From<BrushWidth> for u32 {
    fn from(width: BrushWidth) -> Self {
        width.0
    }
}

/// Style applied to whatever the active tool renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
}

impl StrokeStyle {
    pub fn new(color: Color32, width: BrushWidth) -> Self {
        Self {
            color,
            width: width.as_f32(),
        }
    }
}

/// The fixed swatches next to the color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    White,
    Black,
    Red,
    Green,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 4] = [
        PaletteColor::White,
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Green,
    ];

    pub fn color(self) -> Color32 {
        match self {
            Self::White => Color32::WHITE,
            Self::Black => Color32::BLACK,
            Self::Red => Color32::from_rgb(0xff, 0x00, 0x00),
            Self::Green => Color32::from_rgb(0x00, 0xff, 0x00),
        }
    }

    /// Black and white swatches turn the background image grayscale, the others restore it.
    pub fn filter(self) -> Filter {
        match self {
            Self::White | Self::Black => Filter::Grayscale,
            Self::Red | Self::Green => Filter::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Green => "Green",
        }
    }
}
