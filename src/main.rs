// Load a json file that describes a complex function and the window to look
// at it through, analyse its domain colouring and write the image out

use std::io::{Error, Read, ErrorKind};
use std::fs::{File, create_dir_all};
use std::env;
use std::path::Path;

use image::RgbImage;
use json::JsonValue;
use log::info;

mod branch;
mod colour;
mod domain_colouring;
mod function;
mod grid;
mod render;
mod winding;
mod zeros;
mod zoom;

fn make_directory_for_image(path_str : &str) -> std::io::Result<()> {
    let path = Path::new(path_str);
    if let Some(dir) = path.parent() {
        create_dir_all(dir)
    } else {
        Ok(())
    }
}

fn make_image(input : &JsonValue) -> std::io::Result<RgbImage> {
    let algorithm = input["algorithm"].as_str().unwrap_or("domain-colouring");
    match algorithm {
        "domain-colouring" => domain_colouring::generate(input),
        _ => Err(Error::new(ErrorKind::InvalidData, "Unknown algorithm"))
    }
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // Get file to use else default
    let in_filename = env::args().nth(1).unwrap_or("input.json".to_string());
    let out_filename = env::args().nth(2).unwrap_or("output.png".to_string());
    info!("Loading input file: {}", in_filename);
    let mut file = File::open(in_filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    info!("Parsing input file");
    let input = json::parse(&contents).map_err(
        |_| Error::new(ErrorKind::InvalidData, "Couldn't parse input")
    )?;
    let image = make_image(&input)?;
    info!("Writing output to {}", out_filename);
    make_directory_for_image(&out_filename)?;
    image.save(out_filename).map_err(
        |_| Error::new(ErrorKind::InvalidData, "Couldn't write image")
    )?;
    Ok(())
}
