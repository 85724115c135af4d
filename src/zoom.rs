// Pick a tighter window around the zeros that were found
//
// From the outermost zeros walk left, right, up and down until the colouring
// is at least as light as the requested value. The new window just holds those
// light samples. The step shrinks with the longer side of the frame so the new
// grid never has more samples along either axis than the old one.

use cgmath::{point2, Point2};
use log::debug;

use crate::grid::{Grid, Window};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    Up,
    Down
}

impl Direction {
    fn next(self, pos : Point2<usize>, grid : &Grid<f64>) -> Option<Point2<usize>> {
        let next = match self {
            Direction::Left => point2(pos.x.checked_sub(1)?, pos.y),
            Direction::Right => point2(pos.x + 1, pos.y),
            Direction::Up => point2(pos.x, pos.y.checked_sub(1)?),
            Direction::Down => point2(pos.x, pos.y + 1)
        };
        if grid.contains(next) { Some(next) } else { None }
    }
}

// Number of steps from start to the first sample at least light_val, None if
// the edge of the grid comes first
fn brightness(value : &Grid<f64>, start : Point2<usize>, light_val : f64, direction : Direction) -> Option<usize> {
    let mut pos = start;
    let mut diff = 0;
    while value[pos] < light_val {
        pos = direction.next(pos, value)?;
        diff += 1;
    }
    Some(diff)
}

/// Window framing the dark dips around zero_index, or the current window if
/// there is nothing better.
pub fn zoom_fit_zero(
    zero_index : &[Point2<usize>],
    value : &Grid<f64>,
    window : &Window,
    light_val : f64
) -> Window {
    let zero_index : Vec<Point2<usize>> = zero_index.iter().copied().filter(
        |index| value.contains(*index)
    ).collect();
    let (Some(left), Some(right), Some(top), Some(bottom)) = (
        zero_index.iter().min_by_key(|index| index.x),
        zero_index.iter().max_by_key(|index| index.x),
        zero_index.iter().min_by_key(|index| index.y),
        zero_index.iter().max_by_key(|index| index.y)
    ) else {
        return *window;
    };
    let diffs = (
        brightness(value, *left, light_val, Direction::Left),
        brightness(value, *right, light_val, Direction::Right),
        brightness(value, *top, light_val, Direction::Up),
        brightness(value, *bottom, light_val, Direction::Down)
    );
    let (Some(diff_left), Some(diff_right), Some(diff_up), Some(diff_down)) = diffs else {
        debug!("Light value {} not reached inside the window", light_val);
        return *window;
    };
    let x_min = left.x - diff_left;
    let x_max = right.x + diff_right;
    let y_min = top.y - diff_up;
    let y_max = bottom.y + diff_down;
    if x_min == 0 && y_min == 0 && x_max + 1 == value.width() && y_max + 1 == value.height() {
        return *window;
    }
    let top_left = window.point_at(point2(x_min, y_min));
    let bottom_right = window.point_at(point2(x_max, y_max));
    let re_scale = (bottom_right.re - top_left.re) / (window.re_range.1 - window.re_range.0);
    let im_scale = (top_left.im - bottom_right.im) / (window.im_range.1 - window.im_range.0);
    let new_step = re_scale.max(im_scale) * window.step;
    Window::new(
        (top_left.re, bottom_right.re),
        (bottom_right.im, top_left.im),
        new_step
    ).unwrap_or(*window)
}
