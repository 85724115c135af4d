// Turn sampled function values into an image
//
// Hue and brightness come from the colour model. The saturation is used to
// draw faint grid lines where the real or imaginary part of the output is an
// even integer.

use std::f64::consts::PI;

use image::{Rgb, RgbImage};
use num::complex::Complex64;

use crate::colour::colors;
use crate::grid::Grid;

const GRID_LINE_WIDTH : f64 = 0.15;

fn mod2(val : f64) -> f64 {
    val.rem_euclid(2.0)
}

// Hue in [0, 1), saturation and value in [0, 1]
pub fn hsv_to_rgb(hue : f64, saturation : f64, value : f64) -> Rgb<u8> {
    let degrees = hue.rem_euclid(1.0) * 360.0;
    let chroma = value * saturation;
    let x = chroma * (1.0 - (mod2(degrees / 60.0) - 1.0).abs());
    let (r, g, b) = if degrees < 60.0 {
        (chroma, x, 0.0)
    } else if degrees < 120.0 {
        (x, chroma, 0.0)
    } else if degrees < 180.0 {
        (0.0, chroma, x)
    } else if degrees < 240.0 {
        (0.0, x, chroma)
    } else if degrees < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };
    let m = value - chroma;
    let to_u8 = |c : f64| (255.0 * (c + m)).round().clamp(0.0, 255.0) as u8;
    Rgb([to_u8(r), to_u8(g), to_u8(b)])
}

fn grid_lines(z : Complex64, line_width : f64) -> f64 {
    (PI / 2.0 * z.re).sin().abs().powf(line_width) * (PI / 2.0 * z.im).sin().abs().powf(line_width)
}

pub fn domain_coloring(func_val : &Grid<Complex64>, grid : bool) -> RgbImage {
    let line_width = if grid { GRID_LINE_WIDTH } else { 0.0 };
    let (hue, value) = colors(func_val);
    let mut img = RgbImage::new(func_val.width() as u32, func_val.height() as u32);
    for j in 0..func_val.height() {
        for i in 0..func_val.width() {
            let saturation = grid_lines(func_val.get(i, j), line_width);
            img.put_pixel(i as u32, j as u32, hsv_to_rgb(hue.get(i, j), saturation, value.get(i, j)));
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use crate::grid::{func_grid, Window};

    use super::*;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb([255, 0, 0]));
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Rgb([0, 255, 0]));
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Rgb([0, 0, 255]));
        assert_eq!(hsv_to_rgb(1.0 / 6.0, 1.0, 1.0), Rgb([255, 255, 0]));
    }

    #[test]
    fn test_hsv_value_and_saturation() {
        assert_eq!(hsv_to_rgb(0.3, 1.0, 0.0), Rgb([0, 0, 0]));
        assert_eq!(hsv_to_rgb(0.7, 0.0, 1.0), Rgb([255, 255, 255]));
        assert_eq!(hsv_to_rgb(0.0, 1.0, 0.5), Rgb([128, 0, 0]));
    }

    #[test]
    fn test_domain_coloring_shape_and_zero() {
        let window = Window::new((-1.0, 1.0), (-0.5, 0.5), 0.5).unwrap();
        let img = domain_coloring(&func_grid(|z| z, &window), true);
        assert_eq!(img.dimensions(), (5, 3));
        // The zero in the middle is black
        assert_eq!(*img.get_pixel(2, 1), Rgb([0, 0, 0]));
        // z = 1 sits on a grid line so has no saturation
        let grey = img.get_pixel(4, 1);
        assert_eq!(grey.0[0], grey.0[1]);
        assert_eq!(grey.0[1], grey.0[2]);
    }

    #[test]
    fn test_domain_coloring_without_grid_is_saturated() {
        let window = Window::new((-1.0, 1.0), (-0.5, 0.5), 0.5).unwrap();
        let img = domain_coloring(&func_grid(|z| z, &window), false);
        // z = 1 is pure red at half brightness
        assert_eq!(*img.get_pixel(4, 1), Rgb([128, 0, 0]));
    }
}
