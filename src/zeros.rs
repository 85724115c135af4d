// Find the zeros of a function from its domain colouring
//
// Start with a rectangle and keep cutting any piece with a nonzero winding
// number into quadrants until the pieces are smaller than the tolerance.
// Pieces still winding forwards at that size hold a zero.
//
// This can miss zeros when several share a rectangle whose windings happen to
// cancel, and can be fooled by functions which are tiny but nonzero over a
// wide area.

use cgmath::Point2;
use log::debug;
use num::complex::Complex64;

use crate::grid::{Grid, Rect, Window};
use crate::winding::winding_num;

// Mean value around a dark sample above which it is a clamped pole rather
// than a zero
const DIP_NEIGHBOURS : f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZeroEstimate {
    pub root : Complex64,
    pub index : Point2<usize>
}

struct Candidate {
    estimate : ZeroEstimate,
    darkness : f64,
    // Found inside a winding rectangle rather than on an edge
    enclosed : bool
}

fn darkest<I>(value : &Grid<f64>, points : I) -> Option<Point2<usize>>
    where I : IntoIterator<Item = Point2<usize>>
{
    points.into_iter().min_by(|a, b| value[*a].total_cmp(&value[*b]))
}

// Whether the sample at index is the bottom of a dark dip
fn is_dip(value : &Grid<f64>, index : Point2<usize>, tol : f64) -> bool {
    let dark = value[index];
    if dark >= tol {
        return false;
    }
    let x_range = index.x.saturating_sub(1)..=(index.x + 1).min(value.width() - 1);
    let y_range = index.y.saturating_sub(1)..=(index.y + 1).min(value.height() - 1);
    let neighbours : Vec<f64> = y_range.flat_map(
        |y| x_range.clone().map(move |x| (x, y))
    ).filter(
        |&(x, y)| (x, y) != (index.x, index.y)
    ).map(
        |(x, y)| value.get(x, y)
    ).collect();
    if neighbours.is_empty() {
        return true;
    }
    let mean = neighbours.iter().sum::<f64>() / neighbours.len() as f64;
    neighbours.iter().all(|v| *v >= dark) && mean < DIP_NEIGHBOURS
}

// Collapse candidates closer than radius, preferring enclosed then darker
fn merge(mut candidates : Vec<Candidate>, radius : f64) -> Vec<ZeroEstimate> {
    candidates.sort_by(
        |a, b| b.enclosed.cmp(&a.enclosed).then(a.darkness.total_cmp(&b.darkness))
    );
    let mut estimates : Vec<ZeroEstimate> = Vec::new();
    for candidate in candidates {
        let seen = estimates.iter().any(
            |kept| (kept.root - candidate.estimate.root).norm() < radius
        );
        if !seen {
            estimates.push(candidate.estimate);
        }
    }
    estimates.sort_by_key(|estimate| (estimate.index.y, estimate.index.x));
    estimates
}

/// Locate the zeros inside rect, or the whole grid when rect is None.
///
/// tol is the side length in the complex plane at which a winding rectangle
/// stops being cut up, and also the value below which an edge sample is taken
/// to be a zero lying on the cut between two rectangles. Each zero is reported
/// at the centre of its final rectangle together with the darkest sample in it.
pub fn zeros(
    hue : &Grid<f64>,
    value : &Grid<f64>,
    window : &Window,
    rect : Option<Rect>,
    tol : f64
) -> Vec<ZeroEstimate> {
    if hue.width() != value.width() || hue.height() != value.height() {
        return Vec::new();
    }
    let start = match rect {
        Some(rect) => rect.clip(hue),
        None => Rect::whole(hue)
    };
    let mut candidates = Vec::new();
    let mut pending : Vec<Rect> = start.into_iter().collect();
    while let Some(rect) = pending.pop() {
        let winding = winding_num(hue, &rect);
        if winding == 0 {
            // A zero exactly on the edge can be invisible to the walk
            if let Some(index) = darkest(value, rect.boundary()) {
                if is_dip(value, index, tol) {
                    candidates.push(Candidate {
                        estimate : ZeroEstimate { root : window.point_at(index), index },
                        darkness : value[index],
                        enclosed : false
                    });
                }
            }
            continue;
        }
        let size = rect.cols().max(rect.rows()) as f64 * window.step;
        if size >= tol && (rect.cols() > 1 || rect.rows() > 1) {
            pending.extend(rect.split());
            continue;
        }
        if winding < 0 {
            debug!("Skipping pole near {:?}", rect.centre());
            continue;
        }
        if let Some(index) = darkest(value, rect.points()) {
            let (col, row) = rect.centre();
            let root = window.point(col, row);
            debug!("Winding {} around {} at {:?}", winding, root, index);
            candidates.push(Candidate {
                estimate : ZeroEstimate { root, index },
                darkness : value[index],
                enclosed : true
            });
        }
    }
    merge(candidates, 2.0 * tol.max(window.step))
}
