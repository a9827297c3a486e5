//! Observation of the carrier-robot environment.
use carrier_core::Obs;

/// Observation of [`CarrierEnv`](crate::CarrierEnv).
///
/// A snapshot of the field plus the robot and target coordinates. The field
/// buffer is row-major with the cell states of the [`field`](crate::field)
/// module; the robot's own cell is marked blocked because the robot occupies
/// space.
#[derive(Debug, Clone)]
pub struct CarrierObs {
    /// Row-major field snapshot.
    pub field: Vec<i8>,

    /// The number of rows of the field.
    pub rows: usize,

    /// The number of columns of the field.
    pub cols: usize,

    /// Robot position as `[row, col]`.
    pub pos: [usize; 2],

    /// Target position as `[row, col]`.
    pub target: [usize; 2],
}

impl Obs for CarrierObs {
    fn dummy(_n: usize) -> Self {
        Self {
            field: vec![],
            rows: 0,
            cols: 0,
            pos: [0, 0],
            target: [0, 0],
        }
    }

    fn len(&self) -> usize {
        1
    }
}
