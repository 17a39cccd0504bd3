// src/templates/placer.rs

use crate::error::{Diagnostic, Diagnostics};
use crate::map::{Grid, GridPos, Tile};
use crate::templates::{Template, START_AREA};
use log::debug;
use rand::Rng;

/// Where the start area landed and the entry found inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartArea {
    pub origin_x: i32,
    pub origin_y: i32,
    pub entry: Option<GridPos>,
}

/// Stamp `template` onto `grid` with its top-left cell at the origin.
///
/// Template cells landing outside the grid are clipped: they are neither
/// read nor written. Later placements overwrite earlier ones.
/// Returns the number of cells written.
pub fn place(grid: &mut Grid, template: &Template, origin_x: i32, origin_y: i32) -> usize {
    let (cols, rows) = (template.width() as i32, template.height() as i32);

    // Template-local range that maps inside [0, width) x [0, height).
    let x_start = (-origin_x).max(0);
    let x_end = (grid.width() as i32 - origin_x).min(cols);
    let y_start = (-origin_y).max(0);
    let y_end = (grid.height() as i32 - origin_y).min(rows);

    let mut written = 0;
    for ty in y_start..y_end {
        for tx in x_start..x_end {
            if let Some(tile) = template.get(tx as usize, ty as usize) {
                if grid.set(origin_x + tx, origin_y + ty, tile) {
                    written += 1;
                }
            }
        }
    }
    written
}

/// Draw a uniform origin in `[margin, dimension - size - margin]` on both axes.
/// `None` when the template does not fit between the margins.
pub fn random_origin<R: Rng + ?Sized>(
    grid: &Grid,
    template: &Template,
    margin_x: usize,
    margin_y: usize,
    rng: &mut R,
) -> Option<(i32, i32)> {
    let max_x = grid
        .width()
        .checked_sub(template.width().checked_add(margin_x)?)?;
    let max_y = grid
        .height()
        .checked_sub(template.height().checked_add(margin_y)?)?;
    if max_x < margin_x || max_y < margin_y {
        return None;
    }
    let x = rng.random_range(margin_x..=max_x);
    let y = rng.random_range(margin_y..=max_y);
    Some((x as i32, y as i32))
}

/// Place `template` at a random origin, reporting `PlacementSkipped` when it
/// cannot fit.
pub fn place_random<R: Rng + ?Sized>(
    grid: &mut Grid,
    template: &Template,
    margin_x: usize,
    margin_y: usize,
    rng: &mut R,
    diagnostics: &mut Diagnostics,
) -> Option<(i32, i32)> {
    match random_origin(grid, template, margin_x, margin_y, rng) {
        Some((x, y)) => {
            place(grid, template, x, y);
            debug!("placed `{}` at ({}, {})", template.name, x, y);
            Some((x, y))
        }
        None => {
            diagnostics.report(Diagnostic::PlacementSkipped {
                template: template.name,
                template_width: template.width(),
                template_height: template.height(),
                grid_width: grid.width(),
                grid_height: grid.height(),
                margin_x,
                margin_y,
            });
            None
        }
    }
}

/// Origin of the start area: a quarter of the way across, one tile in from
/// the top, and pulled back so one tile of border stays on every side.
pub fn start_area_origin(grid: &Grid, template: &Template) -> (i32, i32) {
    let (width, height) = (grid.width() as i32, grid.height() as i32);
    let (cols, rows) = (template.width() as i32, template.height() as i32);

    let mut x = (width / 4 - cols / 2).max(1);
    let mut y = 1;
    if x + cols + 1 > width {
        x = width - cols - 1;
    }
    if y + rows + 1 > height {
        y = height - rows - 1;
    }
    (x, y)
}

/// Stamp the start area and locate its entry tile by scanning the stamped
/// rectangle.
pub fn place_start_area(grid: &mut Grid) -> StartArea {
    let (origin_x, origin_y) = start_area_origin(grid, &START_AREA);
    place(grid, &START_AREA, origin_x, origin_y);
    let entry = grid.find_in(
        Tile::Entry,
        origin_x,
        origin_y,
        START_AREA.width(),
        START_AREA.height(),
    );
    StartArea {
        origin_x,
        origin_y,
        entry,
    }
}
