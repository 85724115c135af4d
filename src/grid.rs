// The sampling lattice shared by every stage of the analysis
//
// A window describes the region of the complex plane and the spacing of the
// samples. Grids hold one value per lattice point with row 0 at the top of
// the imaginary range and column 0 at the left of the real range, the same
// layout as an image.

use std::io::{Error, ErrorKind};
use std::ops::Index;

use cgmath::{point2, Point2};
use json::JsonValue;
use num::complex::Complex64;
use rayon::prelude::*;

// Absorbs float noise when a range is an exact multiple of the step
const STEP_SLACK : f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub re_range : (f64, f64),
    pub im_range : (f64, f64),
    pub step : f64
}

fn range_from_json(input : &JsonValue, default : (f64, f64)) -> std::io::Result<(f64, f64)> {
    if input.is_null() {
        return Ok(default);
    }
    let low = input[0].as_f64();
    let high = input[1].as_f64();
    match (low, high) {
        (Some(low), Some(high)) => Ok((low, high)),
        _ => Err(Error::new(ErrorKind::InvalidData, "Range must be [low, high]"))
    }
}

impl Window {
    pub fn new(re_range : (f64, f64), im_range : (f64, f64), step : f64) -> std::io::Result<Window> {
        if !(re_range.1 > re_range.0) || !(im_range.1 > im_range.0) {
            return Err(Error::new(ErrorKind::InvalidData, "Ranges must have high > low"));
        }
        if !(step > 0.0) {
            return Err(Error::new(ErrorKind::InvalidData, "Step must be positive"));
        }
        Ok(Window { re_range, im_range, step })
    }

    pub fn from_json(input : &JsonValue) -> std::io::Result<Window> {
        let re_range = range_from_json(&input["re_range"], (-10.0, 10.0))?;
        let im_range = range_from_json(&input["im_range"], (-10.0, 10.0))?;
        let step = input["step"].as_f64().unwrap_or(0.01);
        Window::new(re_range, im_range, step)
    }

    pub fn width(&self) -> usize {
        samples(self.re_range, self.step)
    }

    pub fn height(&self) -> usize {
        samples(self.im_range, self.step)
    }

    // Complex coordinate of a lattice point, fractional indices allowed
    pub fn point(&self, col : f64, row : f64) -> Complex64 {
        Complex64::new(
            self.re_range.0 + col * self.step,
            self.im_range.1 - row * self.step
        )
    }

    pub fn point_at(&self, index : Point2<usize>) -> Complex64 {
        self.point(index.x as f64, index.y as f64)
    }

    // Nearest lattice point to z, None when z is outside the window
    #[cfg(test)]
    pub fn index_of(&self, z : Complex64) -> Option<Point2<usize>> {
        let col = ((z.re - self.re_range.0) / self.step).round();
        let row = ((self.im_range.1 - z.im) / self.step).round();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width() || row >= self.height() {
            None
        } else {
            Some(point2(col, row))
        }
    }
}

fn samples(range : (f64, f64), step : f64) -> usize {
    ((range.1 - range.0) / step + STEP_SLACK).floor() as usize + 1
}

// Row-major 2d array indexed by (col, row)
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width : usize,
    height : usize,
    data : Vec<T>
}

impl<T : Copy> Grid<T> {
    // None when the data does not fill the shape exactly
    #[cfg(test)]
    pub fn from_vec(width : usize, height : usize, data : Vec<T>) -> Option<Grid<T>> {
        if width * height != data.len() {
            return None;
        }
        Some(Grid { width, height, data })
    }

    // None for ragged rows
    #[cfg(test)]
    pub fn from_rows(rows : &[Vec<T>]) -> Option<Grid<T>> {
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let data : Vec<T> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Grid::from_vec(width, rows.len(), data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x : usize, y : usize) -> T {
        self.data[y * self.width + x]
    }

    pub fn contains(&self, index : Point2<usize>) -> bool {
        index.x < self.width && index.y < self.height
    }

    #[cfg(test)]
    pub fn values(&self) -> &[T] {
        &self.data
    }

    pub fn map<U, F>(&self, f : F) -> Grid<U>
        where U : Copy + Send, T : Sync, F : Fn(T) -> U + Sync
    {
        Grid {
            width : self.width,
            height : self.height,
            data : self.data.par_iter().map(|v| f(*v)).collect()
        }
    }
}

impl<T : Copy> Index<Point2<usize>> for Grid<T> {
    type Output = T;

    fn index(&self, index : Point2<usize>) -> &T {
        &self.data[index.y * self.width + index.x]
    }
}

// Two opposite corners of a block of lattice points, stored normalised so
// that min is the top left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub min : Point2<usize>,
    pub max : Point2<usize>
}

impl Rect {
    pub fn new(a : Point2<usize>, b : Point2<usize>) -> Rect {
        Rect {
            min : point2(a.x.min(b.x), a.y.min(b.y)),
            max : point2(a.x.max(b.x), a.y.max(b.y))
        }
    }

    pub fn whole<T : Copy>(grid : &Grid<T>) -> Option<Rect> {
        if grid.width() == 0 || grid.height() == 0 {
            return None;
        }
        Some(Rect::new(point2(0, 0), point2(grid.width() - 1, grid.height() - 1)))
    }

    pub fn from_json(input : &JsonValue) -> Option<Rect> {
        let x1 = input[0][0].as_usize()?;
        let y1 = input[0][1].as_usize()?;
        let x2 = input[1][0].as_usize()?;
        let y2 = input[1][1].as_usize()?;
        Some(Rect::new(point2(x1, y1), point2(x2, y2)))
    }

    // Width in lattice steps
    pub fn cols(&self) -> usize {
        self.max.x - self.min.x
    }

    // Height in lattice steps
    pub fn rows(&self) -> usize {
        self.max.y - self.min.y
    }

    // A single row or column has no interior to walk around
    pub fn is_degenerate(&self) -> bool {
        self.cols() == 0 || self.rows() == 0
    }

    pub fn within<T : Copy>(&self, grid : &Grid<T>) -> bool {
        grid.contains(self.max)
    }

    // Part of the rect that lies on the grid, None when nothing does
    pub fn clip<T : Copy>(&self, grid : &Grid<T>) -> Option<Rect> {
        if !grid.contains(self.min) {
            return None;
        }
        Some(Rect {
            min : self.min,
            max : point2(
                self.max.x.min(grid.width() - 1),
                self.max.y.min(grid.height() - 1)
            )
        })
    }

    pub fn centre(&self) -> (f64, f64) {
        (
            (self.min.x + self.max.x) as f64 / 2.0,
            (self.min.y + self.max.y) as f64 / 2.0
        )
    }

    // Closed path around the edge, counterclockwise in the complex plane
    //
    // Rows grow downwards so "up" is towards row min. Starts and ends at the
    // bottom right corner.
    pub fn boundary(&self) -> Vec<Point2<usize>> {
        let (x1, y1) = (self.min.x, self.min.y);
        let (x2, y2) = (self.max.x, self.max.y);
        let mut path = Vec::with_capacity(2 * (self.cols() + self.rows()) + 1);
        path.extend((y1..=y2).rev().map(|y| point2(x2, y)));
        path.extend((x1..x2).rev().map(|x| point2(x, y1)));
        path.extend((y1 + 1..=y2).map(|y| point2(x1, y)));
        path.extend((x1 + 1..=x2).map(|x| point2(x, y2)));
        path
    }

    pub fn points(&self) -> impl Iterator<Item = Point2<usize>> + '_ {
        (self.min.y..=self.max.y).flat_map(
            move |y| (self.min.x..=self.max.x).map(move |x| point2(x, y))
        )
    }

    // Halves sharing the middle line, split across the longer side
    pub fn bisect(&self) -> [Rect; 2] {
        if self.cols() >= self.rows() {
            let mid = (self.min.x + self.max.x + 1) / 2;
            [
                Rect { min : self.min, max : point2(mid, self.max.y) },
                Rect { min : point2(mid, self.min.y), max : self.max }
            ]
        } else {
            let mid = (self.min.y + self.max.y + 1) / 2;
            [
                Rect { min : self.min, max : point2(self.max.x, mid) },
                Rect { min : point2(self.min.x, mid), max : self.max }
            ]
        }
    }

    // Quadrants sharing the middle lines, or halves if one side is too thin
    pub fn split(&self) -> Vec<Rect> {
        if self.cols() < 2 || self.rows() < 2 {
            return self.bisect().to_vec();
        }
        let mid_x = (self.min.x + self.max.x + 1) / 2;
        let mid_y = (self.min.y + self.max.y + 1) / 2;
        vec![
            Rect { min : self.min, max : point2(mid_x, mid_y) },
            Rect { min : point2(mid_x, self.min.y), max : point2(self.max.x, mid_y) },
            Rect { min : point2(self.min.x, mid_y), max : point2(mid_x, self.max.y) },
            Rect { min : point2(mid_x, mid_y), max : self.max }
        ]
    }
}

// Sample func over the window, clamping anything non-finite to zero
pub fn func_grid<F>(func : F, window : &Window) -> Grid<Complex64>
    where F : Fn(Complex64) -> Complex64 + Sync
{
    let width = window.width();
    let height = window.height();
    let mut data = vec![Complex64::new(0.0, 0.0); width * height];
    data.par_chunks_mut(width).enumerate().for_each(
        |(j, row)| {
            for (i, sample) in row.iter_mut().enumerate() {
                let val = func(window.point(i as f64, j as f64));
                if val.is_finite() {
                    *sample = val;
                }
            }
        }
    );
    Grid { width, height, data }
}
