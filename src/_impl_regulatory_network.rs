use crate::_impl_predecessor_graph_display::write_regulation;
use crate::bitvector::{BitVector, NetworkState};
use crate::error::{DynamicsError, DynamicsResult};
use crate::{NodeId, PredecessorGraph, RegulatoryNetwork};
use fxhash::{FxHashMap, FxHashSet};
use regex::Regex;
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

lazy_static! {
    /// Matches one regulation line: `source`, optional weight `magnitude`,
    /// `arrow` (`>` activation, `|` inhibition) and `target`.
    static ref REGULATION: Regex = Regex::new(
        r"^\s*(?P<source>[a-zA-Z0-9_]+)\s*-(?P<magnitude>[0-9]+)?(?P<arrow>[>|])\s*(?P<target>[a-zA-Z0-9_]+)\s*$"
    )
    .unwrap();
}

/// **(internal)** A helper struct for representing a parsed regulation that has not been
/// integrated into a `RegulatoryNetwork` yet.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct RegulationTemp {
    source: String,
    target: String,
    weight: i32,
}

impl TryFrom<&str> for RegulationTemp {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let Some(captures) = REGULATION.captures(value) else {
            return Err(format!("String \"{}\" is not a valid regulation.", value));
        };
        let magnitude: i64 = match captures.name("magnitude") {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| format!("Weight in \"{}\" is too large.", value))?,
            None => 1,
        };
        if magnitude == 0 {
            return Err(format!("Regulation \"{}\" has zero weight.", value));
        }
        let signed = if &captures["arrow"] == "|" {
            -magnitude
        } else {
            magnitude
        };
        let weight =
            i32::try_from(signed).map_err(|_| format!("Weight in \"{}\" is too large.", value))?;
        Ok(RegulationTemp {
            source: captures["source"].to_string(),
            target: captures["target"].to_string(),
            weight,
        })
    }
}

impl TryFrom<&str> for RegulatoryNetwork {
    type Error = DynamicsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // trim lines and remove comments
        let lines = value.lines().filter_map(|l| {
            let line = l.trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some(line)
            }
        });

        let mut regulations = Vec::new();
        for line in lines {
            regulations.push(RegulationTemp::try_from(line).map_err(DynamicsError::Parse)?);
        }

        let mut names = BTreeSet::new();
        for reg in &regulations {
            names.insert(reg.source.clone());
            names.insert(reg.target.clone());
        }
        let names: Vec<String> = names.into_iter().collect();
        let name_to_index: FxHashMap<String, NodeId> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), NodeId::from(i)))
            .collect();

        let mut seen = FxHashSet::default();
        let mut edges = Vec::with_capacity(regulations.len());
        for reg in &regulations {
            if !seen.insert((reg.source.as_str(), reg.target.as_str())) {
                return Err(DynamicsError::Parse(format!(
                    "Invalid regulation: {} already regulates {}.",
                    reg.source, reg.target
                )));
            }
            let source = name_to_index[&reg.source].to_index();
            let target = name_to_index[&reg.target].to_index();
            edges.push((source, target, reg.weight));
        }

        Ok(RegulatoryNetwork {
            graph: PredecessorGraph::from_edges(names.len(), &edges)?,
            names,
            name_to_index,
        })
    }
}

impl RegulatoryNetwork {
    /// The underlying predecessor layout of this network.
    pub fn as_graph(&self) -> &PredecessorGraph {
        &self.graph
    }

    pub fn into_graph(self) -> PredecessorGraph {
        self.graph
    }

    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    /// Find a `NodeId` for the given name, or `None` if the node does not exist.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.name_to_index.get(name).cloned()
    }

    pub fn node_name(&self, id: NodeId) -> &str {
        &self.names[id.to_index()]
    }

    /// Names of all nodes, ordered by their `NodeId`.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Build a global state in which exactly the `active` nodes are set.
    pub fn state_from_names(&self, active: &[&str]) -> DynamicsResult<NetworkState> {
        let mut state = NetworkState::empty(self.num_nodes());
        for name in active {
            let id = self
                .find_node(name)
                .ok_or_else(|| DynamicsError::UnknownNode(name.to_string()))?;
            state.set(id.to_index(), true);
        }
        Ok(state)
    }

    /// Names of the active nodes of `state`.
    pub fn active_names(&self, state: &NetworkState) -> Vec<&str> {
        state
            .ones()
            .into_iter()
            .map(|i| self.names[i].as_str())
            .collect()
    }
}

impl Display for RegulatoryNetwork {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for target in self.graph.nodes() {
            for regulation in self.graph.regulations(target) {
                write_regulation(
                    f,
                    self.node_name(regulation.get_source()),
                    regulation.get_weight(),
                    self.node_name(target),
                )?;
            }
        }
        Ok(())
    }
}
