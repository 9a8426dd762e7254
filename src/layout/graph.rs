//! Dependency graph: one directed edge per (dependency, dependent) pair.
//!
//! Built over the ordered rows so edge order follows row order, then the
//! order dependencies were listed in. Construction re-checks that every
//! dependency names a row; a schedule that slipped past the parser with a
//! dangling reference fails here.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::LayoutError;

use super::types::RowItem;

/// Directed graph over row indices.
pub struct DependencyGraph {
    /// Node weight is the row index.
    pub digraph: DiGraph<usize, ()>,
    /// Maps item id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn from_rows(rows: &[RowItem]) -> Result<Self, LayoutError> {
        let mut digraph: DiGraph<usize, ()> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for row in rows {
            let idx = digraph.add_node(row.row);
            node_index.insert(row.id.clone(), idx);
        }

        for row in rows {
            let to_idx = node_index[&row.id];
            for dep in &row.dependencies {
                let Some(&from_idx) = node_index.get(dep) else {
                    return Err(LayoutError::ReferenceNotFound {
                        from: dep.clone(),
                        to: row.id.clone(),
                    });
                };
                digraph.add_edge(from_idx, to_idx, ());
            }
        }

        Ok(Self {
            digraph,
            node_index,
        })
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// `(source_row, target_row)` pairs in insertion order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.digraph
            .edge_indices()
            .filter_map(|e| self.digraph.edge_endpoints(e))
            .map(|(a, b)| (self.digraph[a], self.digraph[b]))
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
