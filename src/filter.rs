use image::{GrayImage, RgbaImage};
use serde::{Deserialize, Serialize};

/// Visual filter applied to the background image when it is drawn onto the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    None,
    #[default]
    Grayscale,
}

impl Filter {
    /// Return a filtered copy of `image`, keeping its alpha channel.
    pub fn apply(self, image: &RgbaImage) -> RgbaImage {
        match self {
            Filter::None => image.clone(),
            Filter::Grayscale => {
                let luma: GrayImage = image::imageops::grayscale(image);
                let mut out = image.clone();
                for (dst, src) in out.pixels_mut().zip(luma.pixels()) {
                    let l = src.0[0];
                    dst.0 = [l, l, l, dst.0[3]];
                }
                out
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::None => "none",
            Filter::Grayscale => "grayscale",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_grayscale_equalizes_channels_and_keeps_alpha() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([200, 40, 10, 128]));
        let gray = Filter::Grayscale.apply(&image);
        for pixel in gray.pixels() {
            let [r, g, b, a] = pixel.0;
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert_eq!(a, 128);
        }
    }

    #[test]
    fn test_none_is_identity() {
        let image = RgbaImage::from_pixel(3, 1, Rgba([1, 2, 3, 4]));
        assert_eq!(Filter::None.apply(&image), image);
    }
}
