//! Rasterization of a woven grid and PNG export
//!
//! Each cell occupies a `CELL_STRIDE`-pixel square. The over thread is
//! drawn as a continuous stroke across the cell; the under thread is split
//! either side of the crossing, so its rewritten half is visible leaving the
//! cell. Rectangles use inclusive corner coordinates clipped to the image,
//! drawn cell by cell in row-major order over a black background.

use crate::io::configuration::CELL_STRIDE;
use crate::io::error::{Result, WeaveError};
use crate::io::palette::{Colour, Palette};
use crate::weave::grid::{Cell, WovenGrid};
use crate::weave::thread::Crossing;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Background colour behind the threads
const BACKGROUND: Colour = [0, 0, 0];

/// Fill a rectangle with inclusive corners, clipped to the image bounds
fn fill_rect(img: &mut RgbImage, x0: usize, y0: usize, x1: usize, y1: usize, colour: Colour) {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let x_end = x1.min(width as usize - 1);
    let y_end = y1.min(height as usize - 1);
    for y in y0..=y_end {
        for x in x0..=x_end {
            img.put_pixel(x as u32, y as u32, Rgb(colour));
        }
    }
}

/// Draw one cell at grid position `(x, y)`
fn render_cell(img: &mut RgbImage, cell: Cell, x: usize, y: usize, palette: &Palette) {
    let sx = x * CELL_STRIDE;
    let sy = y * CELL_STRIDE;
    let ex = sx + CELL_STRIDE;
    let ey = sy + CELL_STRIDE;
    let cx = sx + CELL_STRIDE / 2;
    let cy = sy + CELL_STRIDE / 2;

    fill_rect(img, sx, sy, ex, ey, BACKGROUND);

    match Crossing::at(x, y) {
        Crossing::Warp => {
            // Vertical thread split above and below the horizontal stroke
            fill_rect(img, cx, sy, cx + 1, cy - 2, palette.colour(cell.up));
            fill_rect(img, cx, cy + 3, cx + 1, ey, palette.colour(cell.down));
            fill_rect(img, sx, cy, ex, cy + 1, palette.colour(cell.left));
        }
        Crossing::Weft => {
            // Horizontal thread split either side of the vertical stroke
            fill_rect(img, sx, cy, cx - 2, cy + 1, palette.colour(cell.left));
            fill_rect(img, cx + 3, cy, ex, cy + 1, palette.colour(cell.right));
            fill_rect(img, cx, sy, cx + 1, ey, palette.colour(cell.up));
        }
    }
}

/// Rasterize a woven grid into an RGB image
///
/// The image is square with side `grid.size() * CELL_STRIDE` pixels.
pub fn render_grid(grid: &WovenGrid, palette: &Palette) -> RgbImage {
    let pixels = grid.size() * CELL_STRIDE;
    let mut img = RgbImage::new(pixels as u32, pixels as u32);
    for ((y, x), cell) in grid.cells().indexed_iter() {
        render_cell(&mut img, *cell, x, y, palette);
    }
    img
}

/// Rasterize a grid and save it as a PNG file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the given path.
pub fn export_grid_as_png(grid: &WovenGrid, palette: &Palette, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, palette);
    save_png(&img, output_path)
}

/// Save an already rendered image, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the given path.
pub fn save_png(img: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| WeaveError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| WeaveError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
