use crate::bitvector::{BitVector, NetworkState};
use crate::error::{DynamicsError, DynamicsResult};
use crate::{NodeId, NodeIdIterator, PredecessorGraph, Regulation};

/// Methods for safely constructing new instances of `PredecessorGraph`s.
impl PredecessorGraph {
    /// Create a new `PredecessorGraph` from the raw predecessor arrays.
    ///
    /// The layout is validated before anything is stored: `inc_ptr` must start at `0`,
    /// be non-decreasing and end at the number of edges, the two edge arrays must have
    /// the same length and every source must be a valid node index.
    pub fn new(
        inc_adj: Vec<usize>,
        regulation: Vec<i32>,
        inc_ptr: Vec<usize>,
    ) -> DynamicsResult<PredecessorGraph> {
        let Some(first) = inc_ptr.first().copied() else {
            return Err(DynamicsError::EmptyOffsetTable);
        };
        if first != 0 {
            return Err(DynamicsError::NonZeroFirstOffset { first });
        }
        for (node, window) in inc_ptr.windows(2).enumerate() {
            if window[0] > window[1] {
                return Err(DynamicsError::DecreasingOffsets {
                    node,
                    begin: window[0],
                    end: window[1],
                });
            }
        }
        let last = inc_ptr[inc_ptr.len() - 1];
        if last != inc_adj.len() || last != regulation.len() {
            return Err(DynamicsError::EdgeCountMismatch {
                last,
                sources: inc_adj.len(),
                weights: regulation.len(),
            });
        }
        let num_nodes = inc_ptr.len() - 1;
        if let Some((edge, source)) = inc_adj.iter().enumerate().find(|(_, s)| **s >= num_nodes) {
            return Err(DynamicsError::NodeOutOfRange {
                edge,
                source_node: *source,
                num_nodes,
            });
        }

        Ok(PredecessorGraph {
            inc_adj: inc_adj.into_iter().map(NodeId).collect(),
            regulation,
            inc_ptr,
        })
    }

    /// Create a `PredecessorGraph` with `num_nodes` nodes and no edges.
    pub fn empty(num_nodes: usize) -> PredecessorGraph {
        PredecessorGraph {
            inc_adj: Vec::new(),
            regulation: Vec::new(),
            inc_ptr: vec![0; num_nodes + 1],
        }
    }

    /// Build a `PredecessorGraph` from a list of `(source, target, weight)` edges.
    ///
    /// Incoming edges of each target are stored in the order in which they appear
    /// in `edges`.
    pub fn from_edges(
        num_nodes: usize,
        edges: &[(usize, usize, i32)],
    ) -> DynamicsResult<PredecessorGraph> {
        let mut in_degree = vec![0usize; num_nodes];
        for (edge, (source, target, _)) in edges.iter().enumerate() {
            for node in [*source, *target] {
                if node >= num_nodes {
                    return Err(DynamicsError::NodeOutOfRange {
                        edge,
                        source_node: node,
                        num_nodes,
                    });
                }
            }
            in_degree[*target] += 1;
        }

        let mut inc_ptr = Vec::with_capacity(num_nodes + 1);
        inc_ptr.push(0);
        for degree in &in_degree {
            inc_ptr.push(inc_ptr[inc_ptr.len() - 1] + degree);
        }

        // Next free slot of every target's predecessor slice.
        let mut cursor: Vec<usize> = inc_ptr[..num_nodes].to_vec();
        let mut inc_adj = vec![0usize; edges.len()];
        let mut regulation = vec![0i32; edges.len()];
        for (source, target, weight) in edges {
            let slot = cursor[*target];
            inc_adj[slot] = *source;
            regulation[slot] = *weight;
            cursor[*target] += 1;
        }

        PredecessorGraph::new(inc_adj, regulation, inc_ptr)
    }
}

/// Some basic utility methods for inspecting the `PredecessorGraph`.
impl PredecessorGraph {
    /// The number of nodes in this `PredecessorGraph`.
    pub fn num_nodes(&self) -> usize {
        self.inc_ptr.len() - 1
    }

    /// The total number of edges in this `PredecessorGraph`.
    pub fn num_edges(&self) -> usize {
        self.inc_adj.len()
    }

    /// Return an iterator over all node ids of this graph.
    pub fn nodes(&self) -> NodeIdIterator {
        (0..self.num_nodes()).map(NodeId)
    }

    /// The source nodes of all incoming edges of `node`.
    pub fn predecessors(&self, node: NodeId) -> &[NodeId] {
        &self.inc_adj[self.inc_ptr[node.0]..self.inc_ptr[node.0 + 1]]
    }

    /// The weights of all incoming edges of `node`, parallel to `predecessors`.
    pub fn weights(&self, node: NodeId) -> &[i32] {
        &self.regulation[self.inc_ptr[node.0]..self.inc_ptr[node.0 + 1]]
    }

    /// The number of incoming edges of `node`.
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.inc_ptr[node.0 + 1] - self.inc_ptr[node.0]
    }

    /// Iterate over the incoming edges of `node` as `Regulation`s.
    pub fn regulations(&self, node: NodeId) -> impl Iterator<Item = Regulation> + '_ {
        self.predecessors(node)
            .iter()
            .zip(self.weights(node))
            .map(|(source, weight)| Regulation::new(*source, *weight))
    }

    /// Find the weight of the edge `source -> target`, if it exists.
    ///
    /// If there are parallel edges, the first one is returned.
    pub fn find_regulation(&self, source: NodeId, target: NodeId) -> Option<i32> {
        self.regulations(target)
            .find(|r| r.get_source() == source)
            .map(|r| r.get_weight())
    }

    pub fn inc_adj(&self) -> &[NodeId] {
        &self.inc_adj
    }

    pub fn regulation(&self) -> &[i32] {
        &self.regulation
    }

    pub fn inc_ptr(&self) -> &[usize] {
        &self.inc_ptr
    }

    /// **(internal)** Ensure the given state has exactly one value per node.
    pub(crate) fn check_state(&self, state: &NetworkState) -> DynamicsResult<()> {
        if state.len() == self.num_nodes() {
            Ok(())
        } else {
            Err(DynamicsError::StateLengthMismatch {
                expected: self.num_nodes(),
                actual: state.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DynamicsError;
    use crate::{NodeId, PredecessorGraph, Regulation};
    use pretty_assertions::assert_eq;

    #[test]
    fn build_from_raw_arrays() {
        // 0 -> 1, 1 -> 2, 2 -> 0
        let graph = PredecessorGraph::new(vec![2, 0, 1], vec![1, 1, 1], vec![0, 1, 2, 3]).unwrap();
        assert_eq!(3, graph.num_nodes());
        assert_eq!(3, graph.num_edges());
        assert_eq!(&[NodeId(2)], graph.predecessors(NodeId(0)));
        assert_eq!(&[1], graph.weights(NodeId(2)));
        assert_eq!(Some(1), graph.find_regulation(NodeId(0), NodeId(1)));
        assert_eq!(None, graph.find_regulation(NodeId(1), NodeId(0)));
    }

    #[test]
    fn build_from_edges() {
        let graph =
            PredecessorGraph::from_edges(3, &[(0, 1, 1), (2, 0, -1), (1, 1, 2), (0, 0, 1)])
                .unwrap();
        assert_eq!(&[0, 2, 4, 4], graph.inc_ptr());
        assert_eq!(
            vec![Regulation::new(NodeId(2), -1), Regulation::new(NodeId(0), 1)],
            graph.regulations(NodeId(0)).collect::<Vec<_>>()
        );
        assert_eq!(&[NodeId(0), NodeId(1)], graph.predecessors(NodeId(1)));
        assert_eq!(0, graph.in_degree(NodeId(2)));
        assert!(graph.regulations(NodeId(1)).all(|r| r.is_activating()));
    }

    #[test]
    fn empty_graph() {
        let graph = PredecessorGraph::empty(4);
        assert_eq!(4, graph.num_nodes());
        assert_eq!(0, graph.num_edges());
        assert_eq!(4, graph.nodes().count());
        assert!(graph.nodes().all(|n| graph.predecessors(n).is_empty()));

        let nothing = PredecessorGraph::new(vec![], vec![], vec![0]).unwrap();
        assert_eq!(0, nothing.num_nodes());
    }

    #[test]
    fn invalid_layouts() {
        assert_eq!(
            Err(DynamicsError::EmptyOffsetTable),
            PredecessorGraph::new(vec![], vec![], vec![])
        );
        assert_eq!(
            Err(DynamicsError::NonZeroFirstOffset { first: 1 }),
            PredecessorGraph::new(vec![0], vec![1], vec![1, 1])
        );
        assert_eq!(
            Err(DynamicsError::DecreasingOffsets {
                node: 1,
                begin: 2,
                end: 1
            }),
            PredecessorGraph::new(vec![0, 1], vec![1, 1], vec![0, 2, 1, 2])
        );
        assert_eq!(
            Err(DynamicsError::EdgeCountMismatch {
                last: 2,
                sources: 2,
                weights: 1
            }),
            PredecessorGraph::new(vec![0, 1], vec![1], vec![0, 1, 2])
        );
        assert_eq!(
            Err(DynamicsError::NodeOutOfRange {
                edge: 1,
                source_node: 5,
                num_nodes: 2
            }),
            PredecessorGraph::new(vec![0, 5], vec![1, 1], vec![0, 1, 2])
        );
        assert!(PredecessorGraph::from_edges(2, &[(0, 2, 1)]).is_err());
    }
}
