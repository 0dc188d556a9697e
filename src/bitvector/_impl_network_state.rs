use crate::bitvector::{BitVector, NetworkState};
use std::fmt::{Debug, Display, Formatter};

/* Not sure why bitvector::BitVector does not implement Eq, but we want to. */
impl Eq for NetworkState {}

impl NetworkState {
    /// **(internal)** Check if the given index is valid in this `NetworkState` - panic otherwise.
    fn check_access(&self, index: usize) {
        if index >= self.len {
            panic!(
                "Accessing node {} in a NetworkState of length {}.",
                index, self.len
            );
        }
    }

    /// Build a state from a row of `0`/`1` bytes. Any non-zero byte is an active node.
    pub fn from_bytes(bytes: &[u8]) -> NetworkState {
        let mut state = NetworkState::empty(bytes.len());
        for (i, byte) in bytes.iter().enumerate() {
            if *byte != 0 {
                state.values.insert(i);
            }
        }
        state
    }

    /// Write this state as a row of `0`/`1` bytes into `row`.
    ///
    /// Panics if `row` does not have exactly one entry per node.
    pub fn write_bytes(&self, row: &mut [u8]) {
        assert_eq!(self.len, row.len(), "Row length must match the state length.");
        for (i, byte) in row.iter_mut().enumerate() {
            *byte = u8::from(self.values.contains(i));
        }
    }

    /// Convert this state into a row of `0`/`1` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut row = vec![0; self.len];
        self.write_bytes(&mut row);
        row
    }

    /// The number of active nodes.
    pub fn count_ones(&self) -> usize {
        self.values.iter().count()
    }
}

impl BitVector for NetworkState {
    fn empty(len: usize) -> Self {
        NetworkState {
            len,
            values: bitvector::BitVector::new(len),
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> bool {
        self.check_access(index);
        self.values.contains(index)
    }

    fn set(&mut self, index: usize, value: bool) {
        self.check_access(index);
        if value {
            self.values.insert(index);
        } else {
            self.values.remove(index);
        }
    }

    fn flip(&mut self, index: usize) {
        self.check_access(index);
        if self.values.contains(index) {
            self.values.remove(index);
        } else {
            self.values.insert(index);
        }
    }

    fn ones(&self) -> Vec<usize> {
        // slightly more efficient than default implementation
        self.values.iter().collect()
    }
}

impl Display for NetworkState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.display(f)
    }
}

impl From<Vec<bool>> for NetworkState {
    fn from(data: Vec<bool>) -> Self {
        Self::from_bool_vector(data)
    }
}

impl Debug for NetworkState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "NetworkState({})[", self.len)?;
        for i in 0..self.len {
            write!(f, "{}", u8::from(self.values.contains(i)))?;
        }
        write!(f, "]")
    }
}
