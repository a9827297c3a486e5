//! Action of the carrier-robot environment.
use carrier_core::Act;

/// Discrete action of [`CarrierEnv`](crate::CarrierEnv).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierAct {
    /// Do nothing.
    Stay,

    /// Move one row down.
    Down,

    /// Move one column right.
    Right,

    /// Move one row up.
    Up,

    /// Move one column left.
    Left,
}

impl CarrierAct {
    /// The number of discrete actions.
    pub const N: usize = 5;

    /// Row and column displacement of the action.
    pub(crate) fn delta(&self) -> (isize, isize) {
        match self {
            CarrierAct::Stay => (0, 0),
            CarrierAct::Down => (1, 0),
            CarrierAct::Right => (0, 1),
            CarrierAct::Up => (-1, 0),
            CarrierAct::Left => (0, -1),
        }
    }
}

impl From<u8> for CarrierAct {
    /// Maps an action index to an action; indices wrap modulo [`CarrierAct::N`].
    fn from(ix: u8) -> Self {
        match ix as usize % Self::N {
            0 => CarrierAct::Stay,
            1 => CarrierAct::Down,
            2 => CarrierAct::Right,
            3 => CarrierAct::Up,
            _ => CarrierAct::Left,
        }
    }
}

impl Act for CarrierAct {
    fn len(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::CarrierAct;

    #[test]
    fn test_index_mapping() {
        assert_eq!(CarrierAct::from(0u8), CarrierAct::Stay);
        assert_eq!(CarrierAct::from(1u8), CarrierAct::Down);
        assert_eq!(CarrierAct::from(4u8), CarrierAct::Left);
        assert_eq!(CarrierAct::from(5u8), CarrierAct::Stay);
    }
}
