//! Text output: the path map and status lines.
//!
//! Everything here is a pure function of the state it is given.

pub mod path_map;
pub mod status;

pub use path_map::{render_graph, render_path_map};
pub use status::{deck_status_line, enemy_hp_bar, hp_bar, player_hp_bar};
