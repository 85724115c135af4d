// Look for a branch cut or branch point along the real and imaginary axes
//
// Compare the hue a couple of rows either side of the axis. A smooth function
// changes its hue gradually across the axis, so a large jump that is not just
// the hue wrapping from violet back to red, and that is not next to a dark
// zero or a bright pole, is taken to be a cut. Poor resolution can hide a cut
// or invent one.

use log::debug;

use crate::grid::{Grid, Window};

// Smallest hue jump counted as a cut, tuned on common functions with cuts
const BRANCH_LIM : f64 = 0.4;
// Rows or columns either side of the axis that are compared
const DEVIATION : usize = 2;
// A jump from above WRAP_HIGH to below WRAP_LOW is the hue wrapping round
const WRAP_HIGH : f64 = 0.9;
const WRAP_LOW : f64 = 0.1;
// Samples this dark are too close to a zero to trust their hue
const DARK : f64 = 0.2;
// Samples this bright are too close to a pole. Must stay above the brightness
// of log along its cut.
const BRIGHT : f64 = 0.88;

fn is_cut(hue1 : f64, hue2 : f64, value1 : f64, value2 : f64) -> bool {
    let wraps = (hue1 > WRAP_HIGH && hue2 < WRAP_LOW) || (hue2 > WRAP_HIGH && hue1 < WRAP_LOW);
    let trusted = |value : f64| value > DARK && value < BRIGHT;
    !wraps && trusted(value1) && trusted(value2) && (hue1 - hue2).abs() > BRANCH_LIM
}

// Index of the lattice line sitting on the axis, with room either side to
// compare, None if the axis is not inside range or too near its edge
fn axis_line(range : (f64, f64), offset : f64, step : f64, len : usize) -> Option<usize> {
    if !(range.0 < 0.0 && 0.0 < range.1) {
        return None;
    }
    let line = (offset / step).round() as usize;
    if line < DEVIATION || line + DEVIATION >= len {
        return None;
    }
    Some(line)
}

fn cut_along_real_axis(hue : &Grid<f64>, value : &Grid<f64>, window : &Window) -> bool {
    let Some(row) = axis_line(window.im_range, window.im_range.1, window.step, hue.height()) else {
        return false;
    };
    let (above, below) = (row - DEVIATION, row + DEVIATION);
    (0..hue.width()).any(
        |col| is_cut(hue.get(col, above), hue.get(col, below), value.get(col, above), value.get(col, below))
    )
}

fn cut_along_imaginary_axis(hue : &Grid<f64>, value : &Grid<f64>, window : &Window) -> bool {
    let Some(col) = axis_line(window.re_range, -window.re_range.0, window.step, hue.width()) else {
        return false;
    };
    let (left, right) = (col - DEVIATION, col + DEVIATION);
    (0..hue.height()).any(
        |row| is_cut(hue.get(left, row), hue.get(right, row), value.get(left, row), value.get(right, row))
    )
}

/// Whether the hue jumps across the real or imaginary axis inside the window.
///
/// The thresholds do not scale with the step. The compared lines sit two steps
/// either side of the axis, so with a coarse step an ordinary zero or pole close
/// to the axis can turn the hue far enough to be reported as a cut.
pub fn branch_cut(hue : &Grid<f64>, value : &Grid<f64>, window : &Window) -> bool {
    if hue.width() != value.width() || hue.height() != value.height() {
        return false;
    }
    let real = cut_along_real_axis(hue, value, window);
    let imaginary = cut_along_imaginary_axis(hue, value, window);
    debug!("Branch cut on real axis: {}, on imaginary axis: {}", real, imaginary);
    real || imaginary
}
