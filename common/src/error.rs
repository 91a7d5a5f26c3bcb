use core::fmt;

/// Which side of a grid a dimension describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "Width"),
            Axis::Height => write!(f, "Height"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("{axis} must not be negative, got {value}")]
    NegativeDimension { axis: Axis, value: i64 },
    #[error("{axis} of {value} does not fit in a u32")]
    DimensionTooLarge { axis: Axis, value: i64 },
}

impl GridError {
    pub fn axis(&self) -> Axis {
        match *self {
            GridError::NegativeDimension { axis, .. } => axis,
            GridError::DimensionTooLarge { axis, .. } => axis,
        }
    }
}
