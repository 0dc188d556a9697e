//! Bitvectors are simply sequences of boolean values. Here, they represent global states of
//! a network: one value per node, indexed by `NodeId`.
//!
//! ```rust
//! use boolean_dynamics::bitvector::{BitVector, NetworkState};
//! // Create a state of 4 nodes, all inactive.
//! let mut state = NetworkState::empty(4);
//! assert_eq!(4, state.len());
//! state.flip(1); // Invert value at given index.
//! state.set(2, true); // Set value at index to a constant.
//! assert!(state.get(1));
//! assert!(!state.get(3));
//! // Prints BV(4)[1 2] using default `Display` implementation.
//! println!("{}", state);
//! ```
//!
//! ### `BitVector` conversions
//!
//! Every `BitVector` provides conversion to and from `Vec<bool>` (exact representation of
//! the values) and `Vec<usize>` (indices of `true` items). A `NetworkState` additionally
//! converts to and from the `0`/`1` byte rows used by `TimeSeries`.
//!
//! ```rust
//! use boolean_dynamics::bitvector::{BitVector, NetworkState};
//! let state = NetworkState::from(vec![false, true, true, false]);
//! assert_eq!(vec![false, true, true, false], state.values());
//! assert_eq!(state, NetworkState::from_ones(4, vec![1, 2]));
//! assert_eq!(vec![1, 2], state.ones());
//! assert_eq!(vec![0, 3], state.zeros());
//! assert_eq!(vec![0, 1, 1, 0], state.to_bytes());
//! ```

use std::fmt::{Display, Formatter};

mod _impl_network_state;

/// `BitVector` is a collection of boolean values of a fixed length.
///
/// When implementing `Display` and `From<Vec<bool>>`, please consult `BitVector::display` and
/// `BitVector::from_bool_vector`.
pub trait BitVector: Clone + Eq + Display + From<Vec<bool>> {
    /// Create a new `BitVector` with the given length. Once created, the length
    /// cannot be changed.
    fn empty(len: usize) -> Self;

    /// Create a new `BitVector` which contains `items` specified in the given vector.
    fn from_ones(len: usize, items: Vec<usize>) -> Self {
        let mut bits = Self::empty(len);
        for i in items {
            bits.set(i, true);
        }
        bits
    }

    /// The number of elements stored in this `BitVector`.
    fn len(&self) -> usize;

    /// Get the boolean value at the given `index`.
    fn get(&self, index: usize) -> bool;

    /// Set the boolean `value` at the given `index`.
    fn set(&mut self, index: usize, value: bool);

    /// Invert the value at the given `index`.
    fn flip(&mut self, index: usize);

    /// Return a vector of the values in this `BitVector`.
    fn values(&self) -> Vec<bool> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }

    /// A vector of the indices of this `BitVector` which are set.
    fn ones(&self) -> Vec<usize> {
        (0..self.len()).filter(|i| self.get(*i)).collect()
    }

    /// A vector of the indices of this `BitVector` which are *not* set.
    fn zeros(&self) -> Vec<usize> {
        (0..self.len()).filter(|i| !self.get(*i)).collect()
    }

    /// A helper method for `Display` trait implementations for all variants of `BitVector`.
    fn display(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "BV({})[", self.len())?;
        let mut first = true;
        for i in 0..self.len() {
            if self.get(i) {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{i}")?;
                first = false;
            }
        }
        write!(f, "]")?;
        Ok(())
    }

    /// A helper method for converting a vector of Booleans into a `BitVector`. Useful when
    /// implementing `From<Vec<bool>>`.
    fn from_bool_vector(items: Vec<bool>) -> Self {
        let mut bits = Self::empty(items.len());
        for (i, val) in items.iter().enumerate() {
            if *val {
                bits.set(i, true);
            }
        }
        bits
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A global state of a network, backed by the explicit implementation from
/// the `bitvector` crate.
#[derive(Clone, PartialEq)]
pub struct NetworkState {
    len: usize,
    values: bitvector::BitVector,
}
