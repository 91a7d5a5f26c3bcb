pub mod error;
pub mod grid;
pub mod zigzag;

pub use error::{Axis, GridError};
pub use grid::Grid;
pub use zigzag::{zigzag, Direction, FirstStep, Values, WithDirection, ZigzagScan};
