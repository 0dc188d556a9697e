use crate::bitvector::{BitVector, NetworkState};
use crate::error::{DynamicsError, DynamicsResult};
use crate::{StateId, MAX_STATE_WIDTH};
use std::fmt::{Display, Error, Formatter};

impl StateId {
    /// Encode a global state into its identifier.
    ///
    /// Bits are folded from the highest node index down to node `0`, so node `0` becomes
    /// the least significant bit. Fails if the state has more than `MAX_STATE_WIDTH` nodes.
    pub fn encode(state: &NetworkState) -> DynamicsResult<StateId> {
        check_width(state.len())?;
        let mut id = 0u64;
        for i in (0..state.len()).rev() {
            id = (id << 1) | u64::from(state.get(i));
        }
        Ok(StateId(id))
    }

    /// Decode this identifier into a global state of `width` nodes.
    ///
    /// The least significant bit is written to node `0`, the next bit to node `1`, etc.
    /// Fails if `width` exceeds `MAX_STATE_WIDTH` or the identifier has bits set above `width`.
    pub fn decode(self, width: usize) -> DynamicsResult<NetworkState> {
        check_width(width)?;
        if width < MAX_STATE_WIDTH && self.0 >> width != 0 {
            return Err(DynamicsError::StateIdOutOfRange { id: self.0, width });
        }
        let mut state = NetworkState::empty(width);
        let mut id = self.0;
        for i in 0..width {
            state.set(i, id & 1 == 1);
            id >>= 1;
        }
        Ok(state)
    }

    /// Test if the bit of the given node is set or not.
    pub fn get_bit(self, bit: usize) -> bool {
        bit < MAX_STATE_WIDTH && (self.0 >> bit) & 1 == 1
    }

    /// Flip the bit of the given node.
    pub fn flip_bit(self, bit: usize) -> StateId {
        StateId(self.0 ^ (1 << bit))
    }

    /// The number of distinct identifiers of a network with `width` nodes,
    /// or `None` when it does not fit into `u64`.
    pub fn state_count(width: usize) -> Option<u64> {
        1u64.checked_shl(u32::try_from(width).ok()?)
    }
}

/// **(internal)** Ensure a state of `width` nodes can be encoded into a `StateId`.
fn check_width(width: usize) -> DynamicsResult<()> {
    if width > MAX_STATE_WIDTH {
        Err(DynamicsError::StateWidthOverflow {
            width,
            max: MAX_STATE_WIDTH,
        })
    } else {
        Ok(())
    }
}

impl From<u64> for StateId {
    fn from(val: u64) -> Self {
        StateId(val)
    }
}

impl From<StateId> for u64 {
    fn from(state: StateId) -> Self {
        state.0
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "State({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::bitvector::{BitVector, NetworkState};
    use crate::error::DynamicsError;
    use crate::{StateId, MAX_STATE_WIDTH};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn encode_node_zero_is_least_significant() {
        let state = NetworkState::from(vec![true, false, true, true]);
        assert_eq!(StateId::from(0b1101), StateId::encode(&state).unwrap());
        assert_eq!(StateId::from(0), StateId::encode(&NetworkState::empty(0)).unwrap());
    }

    #[test]
    fn decode_writes_low_order_bits() {
        let state = StateId::from(0b0110).decode(5).unwrap();
        assert_eq!(vec![false, true, true, false, false], state.values());
    }

    #[test]
    fn round_trip_exhaustive_small_widths() {
        for width in 0..=10 {
            for x in 0..StateId::state_count(width).unwrap() {
                let id = StateId::from(x);
                assert_eq!(id, StateId::encode(&id.decode(width).unwrap()).unwrap());
            }
        }
    }

    #[test]
    fn round_trip_random_wide_states() {
        let mut rng = StdRng::seed_from_u64(7);
        for width in [11, 31, 32, 33, 63, MAX_STATE_WIDTH] {
            for _ in 0..100 {
                let values: Vec<bool> = (0..width).map(|_| rng.gen()).collect();
                let state = NetworkState::from(values);
                let id = StateId::encode(&state).unwrap();
                assert_eq!(state, id.decode(width).unwrap());
            }
        }
        let full = NetworkState::from(vec![true; MAX_STATE_WIDTH]);
        assert_eq!(StateId::from(u64::MAX), StateId::encode(&full).unwrap());
    }

    #[test]
    fn overflow_is_reported() {
        let wide = NetworkState::empty(MAX_STATE_WIDTH + 1);
        assert_eq!(
            Err(DynamicsError::StateWidthOverflow {
                width: 65,
                max: 64
            }),
            StateId::encode(&wide)
        );
        assert!(StateId::from(1).decode(65).is_err());
        assert_eq!(
            Err(DynamicsError::StateIdOutOfRange { id: 8, width: 3 }),
            StateId::from(8).decode(3)
        );
        assert_eq!(None, StateId::state_count(64));
        assert_eq!(Some(1 << 63), StateId::state_count(63));
    }

    #[test]
    fn id_bits() {
        let id = StateId::from(0b10110);
        assert!(!id.get_bit(0));
        assert!(id.get_bit(1));
        assert!(id.get_bit(2));
        assert!(!id.get_bit(3));
        assert!(id.get_bit(4));
        assert!(!id.get_bit(100));
        assert_eq!(0b11110_u64, id.flip_bit(3).into());
        assert_eq!("State(22)", id.to_string());
    }
}
