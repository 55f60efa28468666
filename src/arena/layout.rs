//! Regular lattice placement for pickups.

use glam::Vec2;

use crate::constants::MAX_PICKUPS;
use crate::error::LayoutError;

/// A lattice of cell centres covering an arena centred on the origin.
///
/// The cell pitch is `2 * radius * sparsity`. Any space left over when the pitch does not
/// divide the arena evenly is spread between the cells, so the outermost centres always
/// sit half a pitch in from the edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGrid {
    pub nx: usize,
    pub ny: usize,
    pub pitch: f32,
    /// Distance between neighbouring centres on each axis.
    pub step: Vec2,
    /// The first (top-left) centre.
    pub origin: Vec2,
}

impl CellGrid {
    /// Computes the lattice for a `width` x `height` arena.
    ///
    /// Both dimensions must be strictly larger than twice the pitch, and the grid may hold
    /// at most [`MAX_PICKUPS`] cells.
    pub fn new(width: f32, height: f32, radius: f32, sparsity: f32) -> Result<Self, LayoutError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(LayoutError::NonPositiveDimensions { width, height });
        }
        if !(radius.is_finite() && sparsity.is_finite() && radius > 0.0 && sparsity > 0.0) {
            return Err(LayoutError::InvalidCell { radius, sparsity });
        }

        let pitch = 2.0 * radius * sparsity;
        if width <= 2.0 * pitch {
            return Err(LayoutError::ArenaTooSmall {
                axis: "width",
                size: width,
                pitch,
            });
        }
        if height <= 2.0 * pitch {
            return Err(LayoutError::ArenaTooSmall {
                axis: "height",
                size: height,
                pitch,
            });
        }

        // At least 2 per axis, which also keeps the step division below well defined
        let nx = ((width / pitch).floor() as usize).max(2);
        let ny = ((height / pitch).floor() as usize).max(2);
        match nx.checked_mul(ny) {
            Some(count) if count <= MAX_PICKUPS => {}
            _ => return Err(LayoutError::TooManyCells { nx, ny, max: MAX_PICKUPS }),
        }

        let step = Vec2::new((width - pitch) / (nx - 1) as f32, (height - pitch) / (ny - 1) as f32);
        let origin = Vec2::new(-width * 0.5 + pitch * 0.5, -height * 0.5 + pitch * 0.5);

        Ok(Self {
            nx,
            ny,
            pitch,
            step,
            origin,
        })
    }

    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Yields every centre, column by column: `x` in the outer loop, `y` in the inner.
    ///
    /// Positions are computed from integer indices rather than accumulated, so the
    /// count is always exactly `nx * ny`.
    pub fn centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.nx).flat_map(move |i| {
            (0..self.ny).map(move |j| self.origin + self.step * Vec2::new(i as f32, j as f32))
        })
    }
}

/// Computes every pickup centre for the arena, or fails without producing any.
pub fn pickup_grid(width: f32, height: f32, radius: f32, sparsity: f32) -> Result<Vec<Vec2>, LayoutError> {
    let grid = CellGrid::new(width, height, radius, sparsity)?;
    Ok(grid.centers().collect())
}
