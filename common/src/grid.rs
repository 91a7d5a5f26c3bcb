use glam::UVec2;

use crate::{
    error::{Axis, GridError},
    zigzag::{FirstStep, ZigzagScan},
};

/// Dimensions of an implicit `width` by `height` grid of cells.
///
/// Cells are addressed by `UVec2 { x, y }` with `x` along the width and `y`
/// along the height. Nothing is stored per cell, positions and values are
/// computed on demand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    size: UVec2,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: UVec2::new(width, height),
        }
    }

    /// Build a grid from signed dimensions, rejecting anything a `u32` cannot hold.
    pub fn try_new(width: i64, height: i64) -> Result<Self, GridError> {
        Ok(Self::new(
            dimension(Axis::Width, width)?,
            dimension(Axis::Height, height)?,
        ))
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn cell_count(&self) -> u64 {
        self.size.x as u64 * self.size.y as u64
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    pub fn contains(&self, cell: UVec2) -> bool {
        cell.x < self.size.x && cell.y < self.size.y
    }

    /// 1-based row-major index of `cell`, `x + width * y + 1`
    pub fn value_of(&self, cell: UVec2) -> u64 {
        cell.x as u64 + self.size.x as u64 * cell.y as u64 + 1
    }

    /// Inverse of [`Grid::value_of`]. `None` for values outside `1..=cell_count`.
    pub fn cell_of(&self, value: u64) -> Option<UVec2> {
        if value == 0 || value > self.cell_count() {
            return None;
        }

        let index = value - 1;
        let width = self.size.x as u64;

        // Both fit in u32, as index < width * height
        Some(UVec2::new((index % width) as u32, (index / width) as u32))
    }

    /// Diagonal zigzag over every cell, starting at the origin and stepping right.
    pub fn zigzag(&self) -> ZigzagScan {
        self.zigzag_from(FirstStep::Right)
    }

    pub fn zigzag_from(&self, first_step: FirstStep) -> ZigzagScan {
        log::trace!(
            "Zigzag scan over {}x{} grid, first step {:?}",
            self.width(),
            self.height(),
            first_step
        );

        ZigzagScan::new(*self, first_step)
    }
}

impl From<UVec2> for Grid {
    fn from(size: UVec2) -> Self {
        Self { size }
    }
}

fn dimension(axis: Axis, value: i64) -> Result<u32, GridError> {
    if value < 0 {
        return Err(GridError::NegativeDimension { axis, value });
    }

    u32::try_from(value).map_err(|_| GridError::DimensionTooLarge { axis, value })
}
