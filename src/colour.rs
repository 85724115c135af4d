// Hue and brightness for complex values
//
// The hue is the phase angle scaled to [0, 1) and the value is a saturating
// function of the modulus, 0 at a zero and tending to 1 at a pole.

use std::f64::consts::PI;

use num::complex::Complex64;

use crate::grid::Grid;

// The hue circle is cut into eight equal sectors which are always visited in
// this order as the phase increases. A boundary walk counts how many times it
// goes round them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Red,
    Orange,
    Yellow,
    Green,
    Turquoise,
    Blue,
    Indigo,
    Violet
}

pub const ANCHORS : [Anchor; 8] = [
    Anchor::Red,
    Anchor::Orange,
    Anchor::Yellow,
    Anchor::Green,
    Anchor::Turquoise,
    Anchor::Blue,
    Anchor::Indigo,
    Anchor::Violet
];

impl Anchor {
    pub fn from_hue(hue : f64) -> Anchor {
        let sector = (hue * ANCHORS.len() as f64).floor() as i64;
        ANCHORS[sector.rem_euclid(ANCHORS.len() as i64) as usize]
    }

    pub fn index(self) -> i64 {
        self as i64
    }

    // Signed number of sectors passed going from self to next the short way
    // round. A jump of exactly half the circle counts as forwards.
    pub fn steps_to(self, next : Anchor) -> i64 {
        let count = ANCHORS.len() as i64;
        let diff = (next.index() - self.index()).rem_euclid(count);
        if diff > count / 2 {
            diff - count
        } else {
            diff
        }
    }
}

// Phase of z as a fraction of a turn, 0 at a zero
pub fn hue(z : Complex64) -> f64 {
    let angle = z.arg();
    (angle + 2.0 * PI) % (2.0 * PI) / (2.0 * PI)
}

pub fn value(z : Complex64) -> f64 {
    2.0 / PI * z.norm().atan()
}

pub fn colors(func_val : &Grid<Complex64>) -> (Grid<f64>, Grid<f64>) {
    (func_val.map(hue), func_val.map(value))
}

#[cfg(test)]
mod tests {
    use cgmath::assert_abs_diff_eq;

    use crate::grid::{func_grid, Window};

    use super::*;

    #[test]
    fn test_colors_of_identity() {
        let window = Window::new((-1.0, 1.0), (-1.0, 1.0), 1.0).unwrap();
        let (hue, value) = colors(&func_grid(|z| z, &window));
        let expected_hue = [
            [0.375, 0.25, 0.125],
            [0.5, 0.0, 0.0],
            [0.625, 0.75, 0.875]
        ];
        let expected_value = [
            [0.608173448, 0.5, 0.608173448],
            [0.5, 0.0, 0.5],
            [0.608173448, 0.5, 0.608173448]
        ];
        for y in 0..3 {
            for x in 0..3 {
                assert_abs_diff_eq!(hue.get(x, y), expected_hue[y][x], epsilon = 1e-9);
                assert_abs_diff_eq!(value.get(x, y), expected_value[y][x], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_colors_are_repeatable() {
        let window = Window::new((-2.0, 2.0), (-2.0, 2.0), 0.05).unwrap();
        let grid = func_grid(|z| z * z * z - 1.0, &window);
        let first = colors(&grid);
        let second = colors(&grid);
        let bits = |g : &Grid<f64>| g.values().iter().map(|v| v.to_bits()).collect::<Vec<u64>>();
        assert_eq!(bits(&first.0), bits(&second.0));
        assert_eq!(bits(&first.1), bits(&second.1));
    }

    #[test]
    fn test_extremes_stay_finite() {
        assert_eq!(hue(Complex64::new(0.0, 0.0)), 0.0);
        assert_eq!(value(Complex64::new(0.0, 0.0)), 0.0);
        let huge = value(Complex64::new(1e300, 1e300));
        assert!(huge.is_finite());
        assert_abs_diff_eq!(huge, 1.0, epsilon = 1e-12);
        let h = hue(Complex64::new(1.0, -1e-18));
        assert!(h >= 0.0 && h < 1.0);
    }

    #[test]
    fn test_anchor_order_follows_phase() {
        let anchors : Vec<Anchor> = (0..8).map(
            |i| Anchor::from_hue((i as f64 + 0.5) / 8.0)
        ).collect();
        assert_eq!(anchors, ANCHORS.to_vec());
        assert_eq!(Anchor::from_hue(0.999), Anchor::Violet);
    }

    #[test]
    fn test_anchor_steps_wrap() {
        assert_eq!(Anchor::Violet.steps_to(Anchor::Red), 1);
        assert_eq!(Anchor::Red.steps_to(Anchor::Violet), -1);
        assert_eq!(Anchor::Green.steps_to(Anchor::Green), 0);
        assert_eq!(Anchor::Orange.steps_to(Anchor::Blue), 4);
        assert_eq!(Anchor::Blue.steps_to(Anchor::Orange), 4);
        assert_eq!(Anchor::Yellow.steps_to(Anchor::Red), -2);
    }
}
