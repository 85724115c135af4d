// Winding number of a rectangle read off the hue array
//
// Walk the edge of the rectangle counterclockwise and count how many colour
// sectors are passed, forwards (red -> orange -> ... -> violet -> red) counting
// positive. A closed walk passes a whole multiple of the eight sectors, one
// lap for each zero inside and minus one for each pole.

use crate::colour::{Anchor, ANCHORS};
use crate::grid::{Grid, Rect};

pub fn winding_num(hue : &Grid<f64>, rect : &Rect) -> i64 {
    if rect.is_degenerate() || !rect.within(hue) {
        return 0;
    }
    let path = rect.boundary();
    let sectors : i64 = path.windows(2).map(
        |pair| Anchor::from_hue(hue[pair[0]]).steps_to(Anchor::from_hue(hue[pair[1]]))
    ).sum();
    (sectors as f64 / ANCHORS.len() as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use cgmath::point2;
    use num::complex::Complex64;

    use crate::colour::colors;
    use crate::grid::{func_grid, Window};

    use super::*;

    fn hue_of<F>(func : F, re_range : (f64, f64), im_range : (f64, f64), step : f64) -> Grid<f64>
        where F : Fn(Complex64) -> Complex64 + Sync
    {
        let window = Window::new(re_range, im_range, step).unwrap();
        colors(&func_grid(func, &window)).0
    }

    fn whole(hue : &Grid<f64>) -> Rect {
        Rect::whole(hue).unwrap()
    }

    #[test]
    fn test_winding_simple_zero_on_3x3() {
        let hue = hue_of(|z| z, (-1.0, 1.0), (-1.0, 1.0), 1.0);
        assert_eq!(winding_num(&hue, &Rect::new(point2(0, 0), point2(2, 2))), 1);
    }

    #[test]
    fn test_winding_simple_pole_on_3x3() {
        let hue = hue_of(|z| z.inv(), (-1.0, 1.0), (-1.0, 1.0), 1.0);
        assert_eq!(winding_num(&hue, &Rect::new(point2(0, 0), point2(2, 2))), -1);
    }

    #[test]
    fn test_winding_orders_of_zeros() {
        let range = (-10.0, 10.0);
        let linear = hue_of(|z| z, range, range, 0.1);
        assert_eq!(winding_num(&linear, &whole(&linear)), 1);
        let square = hue_of(|z| z * z, range, range, 0.1);
        assert_eq!(winding_num(&square, &whole(&square)), 2);
        let cubic = hue_of(|z| z * z * z - 1.0, range, range, 0.1);
        assert_eq!(winding_num(&cubic, &whole(&cubic)), 3);
        // Right half plane only holds the root at 1
        let right = Rect::new(point2(100, 0), point2(200, 200));
        assert_eq!(winding_num(&cubic, &right), 1);
    }

    #[test]
    fn test_winding_pole_and_double_pole() {
        let range = (-3.0, 3.0);
        let pole = hue_of(|z| z.inv(), range, range, 0.05);
        assert_eq!(winding_num(&pole, &whole(&pole)), -1);
        let double = hue_of(|z| (z * z).inv(), range, range, 0.05);
        assert_eq!(winding_num(&double, &whole(&double)), -2);
    }

    #[test]
    fn test_winding_zero_and_pole_cancel() {
        // (z - 1) / (z + 1)
        let hue = hue_of(|z| (z - 1.0) / (z + 1.0), (-3.0, 3.0), (-3.0, 3.0), 0.05);
        assert_eq!(winding_num(&hue, &whole(&hue)), 0);
    }

    #[test]
    fn test_winding_without_zeros() {
        let hue = hue_of(|z| z.exp(), (-2.0, 2.0), (-2.0, 2.0), 0.05);
        assert_eq!(winding_num(&hue, &whole(&hue)), 0);
        // Away from the root at 0
        let shifted = hue_of(|z| z, (-5.0, 5.0), (-5.0, 5.0), 0.1);
        let corner = Rect::new(point2(10, 10), point2(40, 40));
        assert_eq!(winding_num(&shifted, &corner), 0);
    }

    #[test]
    fn test_winding_degenerate_rect_is_zero() {
        let hue = hue_of(|z| z, (-1.0, 1.0), (-1.0, 1.0), 0.1);
        assert_eq!(winding_num(&hue, &Rect::new(point2(0, 10), point2(20, 10))), 0);
        assert_eq!(winding_num(&hue, &Rect::new(point2(10, 0), point2(10, 20))), 0);
    }

    #[test]
    fn test_winding_off_grid_is_zero() {
        let hue = hue_of(|z| z, (-1.0, 1.0), (-1.0, 1.0), 0.1);
        assert_eq!(winding_num(&hue, &Rect::new(point2(0, 0), point2(50, 50))), 0);
    }
}
