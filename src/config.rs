//! Static configuration: where the data lives and how big the graph is.

pub const DEFAULT_GRAPH_WIDTH: f64 = 800.0;
pub const DEFAULT_GRAPH_HEIGHT: f64 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashboardConfig {
	pub nodes_url: &'static str,
	pub edges_url: &'static str,
	pub graph_width: f64,
	pub graph_height: f64,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			nodes_url: "assets/GlobalValueInvestors-nodes.csv",
			edges_url: "assets/GlobalValueInvestors-edges.csv",
			graph_width: DEFAULT_GRAPH_WIDTH,
			graph_height: DEFAULT_GRAPH_HEIGHT,
		}
	}
}
