use crate::{NodeId, Regulation};

impl Regulation {
    pub fn new(source: NodeId, weight: i32) -> Regulation {
        Regulation { source, weight }
    }

    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn get_weight(&self) -> i32 {
        self.weight
    }

    /// True if the regulation increases the majority sum of its target.
    pub fn is_activating(&self) -> bool {
        self.weight > 0
    }

    /// True if the regulation decreases the majority sum of its target.
    pub fn is_inhibiting(&self) -> bool {
        self.weight < 0
    }
}
