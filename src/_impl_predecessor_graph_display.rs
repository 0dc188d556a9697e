use crate::PredecessorGraph;
use std::fmt::{Display, Error, Formatter};

/// **(internal)** Write one regulation line, choosing the shortest arrow for `weight`.
pub(crate) fn write_regulation(
    f: &mut Formatter<'_>,
    source: &str,
    weight: i32,
    target: &str,
) -> Result<(), Error> {
    match weight {
        1 => writeln!(f, "{} -> {}", source, target),
        -1 => writeln!(f, "{} -| {}", source, target),
        w if w < 0 => writeln!(f, "{} -{}| {}", source, w.unsigned_abs(), target),
        w => writeln!(f, "{} -{}> {}", source, w, target),
    }
}

/// Nodes are written using their raw indices, one regulation per line, grouped by target.
impl Display for PredecessorGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for target in self.nodes() {
            let target_name = target.to_index().to_string();
            for regulation in self.regulations(target) {
                let source_name = regulation.get_source().to_index().to_string();
                write_regulation(f, &source_name, regulation.get_weight(), &target_name)?;
            }
        }
        Ok(())
    }
}
