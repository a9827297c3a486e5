//! Core functionalities.
mod env;
mod policy;
mod step;
use std::fmt::Debug;

pub use env::Env;
pub use policy::{Configurable, Policy};
pub use step::{Info, Step};

/// A set of observations of an environment.
///
/// The library does not implement vectorized environments, so [`Obs`]`::len()`
/// always returns 1 in practice.
pub trait Obs: Clone + Debug {
    /// Returns a dummy observation.
    ///
    /// The observation created with this method is ignored.
    fn dummy(n: usize) -> Self;

    /// Returns the number of observations in the object.
    fn len(&self) -> usize;

    /// Returns `true` if the object contains no observation.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A set of actions of the environment.
pub trait Act: Clone + Debug {
    /// Returns the number of actions in the object.
    fn len(&self) -> usize;

    /// Returns `true` if the object contains no action.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
