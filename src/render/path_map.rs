//! Plain-text path map.
//!
//! Rows run from the boss (top) down to the start (bottom):
//!
//! ```text
//! Step10:  [!]
//!            |
//! Step 9:  [X]    [X]
//!            |      |
//! ...
//! Step 0: >[@]<
//! ```
//!
//! A current node is drawn `>[X]<`, a visited one ` [X.] `. Connector rows
//! are decoration only and do not follow the real edges.

use crate::core::{GameState, NodeId};
use crate::path::{PathGraph, PathNode, BOSS_STEP};

const CELL_GAP: &str = "  ";
const CONNECTOR_INDENT: &str = "         ";
const CONNECTOR: &str = "  |    ";

/// Render the board of a running game.
#[must_use]
pub fn render_path_map(state: &GameState) -> String {
    render_graph(&state.path, Some(state.current_node))
}

/// Render any path graph, optionally highlighting one node.
#[must_use]
pub fn render_graph(graph: &PathGraph, current: Option<NodeId>) -> String {
    let mut lines = Vec::with_capacity(usize::from(BOSS_STEP) * 2 + 1);

    for step in (0..=BOSS_STEP).rev() {
        let nodes = graph.nodes_at_step(step);

        let mut row = format!("Step{step:>2}: ");
        for node in &nodes {
            row.push_str(&node_cell(node, current));
            row.push_str(CELL_GAP);
        }
        lines.push(row.trim_end().to_string());

        if step > 0 {
            let connector = format!("{CONNECTOR_INDENT}{}", CONNECTOR.repeat(nodes.len()));
            lines.push(connector.trim_end().to_string());
        }
    }

    lines.join("\n")
}

fn node_cell(node: &PathNode, current: Option<NodeId>) -> String {
    let symbol = node.space_type.symbol();
    if current == Some(node.id) {
        format!(">{symbol}<")
    } else if node.is_visited {
        format!(" [{}.] ", node.space_type.glyph())
    } else {
        format!(" {symbol} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PathTopology;
    use crate::path::SpaceType;

    #[test]
    fn test_cells() {
        let graph = PathGraph::generate(PathTopology::Diamond);
        let mut node = graph.nodes_at_step(2)[1].clone();
        assert_eq!(node.space_type, SpaceType::Reward);

        assert_eq!(node_cell(&node, None), " [R] ");
        assert_eq!(node_cell(&node, Some(node.id)), ">[R]<");
        node.is_visited = true;
        assert_eq!(node_cell(&node, None), " [R.] ");
        assert_eq!(node_cell(&node, Some(node.id)), ">[R]<");
    }

    #[test]
    fn test_row_count_and_order() {
        let map = render_graph(&PathGraph::generate(PathTopology::Diamond), None);
        let lines: Vec<&str> = map.lines().collect();

        // Eleven step rows and ten connector rows.
        assert_eq!(lines.len(), 21);
        assert!(lines[0].starts_with("Step10:"));
        assert!(lines[20].starts_with("Step 0:"));
        assert!(lines.iter().all(|line| line.trim_end() == *line));
    }
}
