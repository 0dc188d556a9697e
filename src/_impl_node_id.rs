use crate::NodeId;
use std::fmt::{Display, Error, Formatter};

impl NodeId {
    /// Create a `NodeId` from a raw zero-based index.
    pub fn from_index(index: usize) -> NodeId {
        NodeId(index)
    }

    /// The raw zero-based index of this node.
    pub fn to_index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(val: usize) -> Self {
        NodeId(val)
    }
}

impl From<NodeId> for usize {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "Node({})", self.0)
    }
}
