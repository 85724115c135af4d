// Make a domain colouring image of a complex function and report what can be
// read off the colours: the total winding number, any branch cut on the axes
// and the location of the zeros.
//
// If asked the picture is redrawn over a window fitted around the zeros.

use std::io::{Error, ErrorKind};

use cgmath::Point2;
use image::RgbImage;
use json::JsonValue;
use log::info;
use num::complex::Complex64;

use crate::branch::branch_cut;
use crate::colour::colors;
use crate::function::ComplexFunction;
use crate::grid::{func_grid, Grid, Rect, Window};
use crate::render::domain_coloring;
use crate::winding::winding_num;
use crate::zeros::{zeros, ZeroEstimate};
use crate::zoom::zoom_fit_zero;

struct DomainColouring {
    function : ComplexFunction,
    window : Window,
    grid : bool,
    tolerance : f64,
    light_value : f64,
    rect : Option<Rect>,
    zoom : bool
}

// What the analysis found, ready for logging
struct Report {
    winding : i64,
    branch : bool,
    zeros : Vec<ZeroEstimate>,
    zoom_window : Window
}

impl DomainColouring {
    fn from_json(input : &JsonValue) -> std::io::Result<DomainColouring> {
        if input["function"].is_null() {
            return Err(Error::new(ErrorKind::InvalidData, "Missing function"));
        }
        let function = ComplexFunction::from_json(&input["function"])?;
        let window = Window::from_json(input)?;
        let grid = input["grid"].as_bool().unwrap_or(true);
        let tolerance = input["tolerance"].as_f64().unwrap_or(0.01);
        let light_value = input["light_value"].as_f64().unwrap_or(0.95);
        let rect = if input["rect"].is_null() {
            None
        } else {
            Some(Rect::from_json(&input["rect"]).ok_or(
                Error::new(ErrorKind::InvalidData, "Rect must be [[col, row], [col, row]]")
            )?)
        };
        let zoom = input["zoom"].as_bool().unwrap_or(false);
        Ok(DomainColouring {
            function,
            window,
            grid,
            tolerance,
            light_value,
            rect,
            zoom
        })
    }

    fn sample(&self, window : &Window) -> Grid<Complex64> {
        func_grid(|z| self.function.evaluate(z), window)
    }

    fn analyse(&self) -> Report {
        let values = self.sample(&self.window);
        let (hue, value) = colors(&values);
        let winding = Rect::whole(&hue).map(
            |whole| winding_num(&hue, &whole)
        ).unwrap_or(0);
        let branch = branch_cut(&hue, &value, &self.window);
        let found = zeros(&hue, &value, &self.window, self.rect, self.tolerance);
        let index : Vec<Point2<usize>> = found.iter().map(|estimate| estimate.index).collect();
        let zoom_window = zoom_fit_zero(&index, &value, &self.window, self.light_value);
        Report { winding, branch, zeros : found, zoom_window }
    }

    fn make_image(&self, report : &Report) -> RgbImage {
        let window = if self.zoom { &report.zoom_window } else { &self.window };
        domain_coloring(&self.sample(window), self.grid)
    }
}

fn log_report(report : &Report) {
    info!("Winding number around the window: {}", report.winding);
    if report.branch {
        info!("This function has a branch cut or branch point");
    }
    info!("Found {} zeros", report.zeros.len());
    for estimate in report.zeros.iter() {
        info!("Zero at {} (sample {}, {})", estimate.root, estimate.index.x, estimate.index.y);
    }
    let zoom = &report.zoom_window;
    info!(
        "Zoomed window re {:?} im {:?} step {}",
        zoom.re_range, zoom.im_range, zoom.step
    );
}

pub fn generate(input : &JsonValue) -> std::io::Result<RgbImage> {
    info!("Generating domain colouring image");
    let colouring = DomainColouring::from_json(input)?;
    let report = colouring.analyse();
    log_report(&report);
    Ok(colouring.make_image(&report))
}
