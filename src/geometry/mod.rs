//! Pure geometry for the drawing tools and the image loader.
//!
//! Everything here works in surface pixel coordinates: origin at the top-left
//! corner of the canvas, `x` to the right, `y` downwards.

mod fit;
mod shapes;

pub use fit::fit_centered;
pub use shapes::{circle_radius, rectangle_corners, triangle_vertices};
