use std::collections::{HashMap, HashSet};

use log::debug;

use super::simulation::{ForceParameters, Simulation};
use super::types::{Category, GraphData};
use crate::theme::ALWAYS_LABELED;

pub const MIN_NODE_RADIUS: f64 = 5.0;
pub const MAX_NODE_RADIUS: f64 = 15.0;
pub const RADIUS_PER_LINK: f64 = 0.8;
/// Nodes with more links than this get a label.
pub const LABEL_MIN_DEGREE: usize = 3;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 4.0;

pub const DIMMED_NODE_OPACITY: f64 = 0.3;
pub const DIMMED_EDGE_OPACITY: f64 = 0.1;
pub const EDGE_OPACITY: f64 = 0.6;

/// Pointer travel (screen px) below which a press on a node counts as a click.
pub const CLICK_TOLERANCE: f64 = 3.0;

pub fn node_radius(degree: usize) -> f64 {
	(MIN_NODE_RADIUS + degree as f64 * RADIUS_PER_LINK).clamp(MIN_NODE_RADIUS, MAX_NODE_RADIUS)
}

/// Last whitespace separated token, e.g. the surname.
pub fn short_label(label: &str) -> &str {
	label.split_whitespace().last().unwrap_or("")
}

/// What the tooltip and the detail panel show for a node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDetails {
	pub label: String,
	pub primary_firm: Option<String>,
	pub role: String,
	pub category: Category,
	pub geography: String,
}

#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub id: String,
	pub details: NodeDetails,
	pub degree: usize,
	pub radius: f64,
	/// Visible text, only for well connected or always-labelled nodes.
	pub caption: Option<String>,
}

#[derive(Clone, Debug)]
pub struct EdgeInfo {
	pub source: usize,
	pub target: usize,
	pub width: f64,
}

impl EdgeInfo {
	pub fn touches(&self, idx: usize) -> bool {
		self.source == idx || self.target == idx
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
}

/// Everything the canvas needs for one dataset: layout, draw data and interaction state.
///
/// Built from scratch for each dataset and dropped with it.
pub struct ForceGraphState {
	pub simulation: Simulation,
	pub nodes: Vec<NodeInfo>,
	pub edges: Vec<EdgeInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub selected: Option<usize>,
	pub width: f64,
	pub height: f64,
	/// Set by anything that changes the picture while the layout is idle.
	pub needs_redraw: bool,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		Self::with_parameters(data, width, height, ForceParameters::default())
	}

	pub fn with_parameters(
		data: &GraphData,
		width: f64,
		height: f64,
		params: ForceParameters,
	) -> Self {
		// Later duplicates win, so the lookup points at the last record per id.
		let mut id_to_idx: HashMap<&str, usize> = HashMap::new();
		let mut unique = Vec::new();
		for node in &data.nodes {
			match id_to_idx.get(node.id.as_str()) {
				Some(&idx) => unique[idx] = node,
				None => {
					id_to_idx.insert(node.id.as_str(), unique.len());
					unique.push(node);
				}
			}
		}

		let mut edges = Vec::new();
		for link in &data.links {
			let (Some(&source), Some(&target)) = (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) else {
				debug!(
					"dropping edge {} -> {}: unknown endpoint",
					link.source, link.target
				);
				continue;
			};
			edges.push(EdgeInfo {
				source,
				target,
				width: link.weight(),
			});
		}

		// Degree counts incident edges, so a self-loop counts once.
		let mut degree = vec![0usize; unique.len()];
		for edge in &edges {
			degree[edge.source] += 1;
			if edge.target != edge.source {
				degree[edge.target] += 1;
			}
		}

		let nodes = unique
			.iter()
			.zip(&degree)
			.map(|(node, &degree)| {
				let labelled =
					degree > LABEL_MIN_DEGREE || ALWAYS_LABELED.contains(&node.label.as_str());
				NodeInfo {
					id: node.id.clone(),
					details: NodeDetails {
						label: node.label.clone(),
						primary_firm: node.primary_firm.clone(),
						role: node.role.clone(),
						category: node.category,
						geography: node.geography.clone(),
					},
					degree,
					radius: node_radius(degree),
					caption: labelled.then(|| short_label(&node.label).to_string()),
				}
			})
			.collect::<Vec<_>>();

		let simulation = Simulation::new(
			nodes.len(),
			edges
				.iter()
				.map(|edge| (edge.source, edge.target, edge.width)),
			(width / 2.0, height / 2.0),
			params,
		);

		Self {
			simulation,
			nodes,
			edges,
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			selected: None,
			width,
			height,
			needs_redraw: true,
		}
	}

	/// Throws away layout, pins, view and interaction state and starts over on `data`.
	pub fn reset(&mut self, data: &GraphData, width: f64, height: f64) {
		debug!("rebuilding graph at {width}x{height}");
		*self = Self::new(data, width, height);
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn details(&self, idx: usize) -> Option<&NodeDetails> {
		self.nodes.get(idx).map(|node| &node.details)
	}

	/// Advances the layout one step while it is still hot.
	pub fn tick(&mut self) -> bool {
		self.simulation.step()
	}

	/// One animation frame of work. Returns whether the canvas has to be repainted.
	pub fn advance(&mut self) -> bool {
		let ticked = self.tick();
		ticked | std::mem::take(&mut self.needs_redraw)
	}

	/// Whether the animation loop has anything left to do.
	pub fn is_animating(&self) -> bool {
		self.needs_redraw || self.simulation.is_running()
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen point. Later nodes are drawn over earlier ones.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.nodes
			.iter()
			.enumerate()
			.rev()
			.find(|(idx, node)| {
				let (x, y) = self.simulation.position(*idx);
				let (dx, dy) = (x - gx, y - gy);
				(dx * dx + dy * dy).sqrt() <= node.radius
			})
			.map(|(idx, _)| idx)
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, node: Option<usize>) -> bool {
		if self.hover.node == node {
			return false;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		self.needs_redraw = true;

		if let Some(idx) = node {
			for edge in &self.edges {
				if edge.source == idx {
					self.hover.neighbors.insert(edge.target);
				} else if edge.target == idx {
					self.hover.neighbors.insert(edge.source);
				}
			}
		}
		true
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn node_opacity(&self, idx: usize) -> f64 {
		match self.hover.node {
			Some(_) if !self.is_highlighted(idx) => DIMMED_NODE_OPACITY,
			_ => 1.0,
		}
	}

	pub fn edge_opacity(&self, edge_idx: usize) -> f64 {
		match self.hover.node {
			None => EDGE_OPACITY,
			Some(hovered) if self.edges[edge_idx].touches(hovered) => 1.0,
			Some(_) => DIMMED_EDGE_OPACITY,
		}
	}

	/// Makes `idx` the single selected node and returns what the panel should show.
	pub fn select(&mut self, idx: usize) -> Option<&NodeDetails> {
		if idx >= self.nodes.len() {
			return None;
		}
		self.selected = Some(idx);
		self.needs_redraw = true;
		self.details(idx)
	}

	pub fn clear_selection(&mut self) {
		self.selected = None;
		self.needs_redraw = true;
	}

	/// Grabs a node: pins it where it is and reheats the layout.
	pub fn begin_drag(&mut self, idx: usize, sx: f64, sy: f64) {
		if idx >= self.nodes.len() {
			return;
		}
		let (x, y) = self.simulation.position(idx);
		self.simulation.pin(idx, x, y);
		self.simulation.set_alpha_target(0.3);
		self.simulation.restart();
		self.drag = DragState {
			active: true,
			node_idx: Some(idx),
			start_x: sx,
			start_y: sy,
			moved: false,
		};
	}

	/// Pins the dragged node under the pointer.
	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(idx) = self.drag.node_idx.filter(|_| self.drag.active) else {
			return;
		};
		if (sx - self.drag.start_x).hypot(sy - self.drag.start_y) > CLICK_TOLERANCE {
			self.drag.moved = true;
		}
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.simulation.pin(idx, gx, gy);
		self.needs_redraw = true;
	}

	/// Releases the dragged node back into the layout.
	///
	/// Returns the node if the pointer never left it, i.e. the press was a click.
	pub fn end_drag(&mut self) -> Option<usize> {
		let drag = std::mem::take(&mut self.drag);
		let idx = drag.node_idx.filter(|_| drag.active)?;
		self.simulation.set_alpha_target(0.0);
		self.simulation.unpin(idx);
		(!drag.moved).then_some(idx)
	}

	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if !self.pan.active {
			return;
		}
		self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
		self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		self.needs_redraw = true;
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	/// Scales by `factor` around a screen point, keeping that point fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
		self.needs_redraw = true;
	}

	/// Drops any in-flight gesture and hover, e.g. when the pointer leaves the canvas.
	pub fn cancel_gestures(&mut self) {
		if self.drag.active {
			self.end_drag();
		}
		self.end_pan();
		self.set_hover(None);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn node(id: &str, label: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: label.into(),
			category: Category::Other,
			geography: "USA".into(),
			role: "Investor".into(),
			primary_firm: None,
		}
	}

	fn link(source: &str, target: &str, strength: u8) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
			relationship: "Mentor of".into(),
			strength: Some(strength),
		}
	}

	fn index_of(state: &ForceGraphState, id: &str) -> usize {
		state.nodes.iter().position(|node| node.id == id).unwrap()
	}

	fn abc() -> ForceGraphState {
		let data = GraphData {
			nodes: vec![node("A", "Alice Able"), node("B", "Bob Baker"), node("C", "Cy Cole")],
			links: vec![link("A", "B", 3), link("B", "C", 1), link("C", "D", 2)],
		};
		ForceGraphState::new(&data, 800.0, 600.0)
	}

	/// Screen coordinates of a node under the current transform.
	fn screen_pos(state: &ForceGraphState, idx: usize) -> (f64, f64) {
		let (x, y) = state.simulation.position(idx);
		(
			x * state.transform.k + state.transform.x,
			y * state.transform.k + state.transform.y,
		)
	}

	#[test]
	fn dangling_edges_are_dropped_and_degrees_counted() {
		let state = abc();
		assert_eq!(state.nodes.len(), 3);
		assert_eq!(state.edges.len(), 2);

		let degree = |id: &str| state.nodes[index_of(&state, id)].degree;
		assert_eq!(degree("A"), 1);
		assert_eq!(degree("B"), 2);
		assert_eq!(degree("C"), 1);
	}

	#[test]
	fn radius_grows_with_degree_and_is_clamped() {
		assert_eq!(node_radius(0), 5.0);
		assert!((node_radius(2) - 6.6).abs() < 1e-12);
		assert!((node_radius(12) - 14.6).abs() < 1e-9);
		assert_eq!(node_radius(13), 15.0);
		assert_eq!(node_radius(100), 15.0);

		let state = abc();
		let b = index_of(&state, "B");
		assert!((state.nodes[b].radius - 6.6).abs() < 1e-12);
	}

	#[test]
	fn edge_width_follows_strength_with_missing_strength_as_one() {
		let mut data = GraphData {
			nodes: vec![node("A", "A"), node("B", "B")],
			links: vec![link("A", "B", 3)],
		};
		data.links.push(GraphLink {
			strength: None,
			..link("B", "A", 1)
		});
		let state = ForceGraphState::new(&data, 800.0, 600.0);
		assert_eq!(state.edges[0].width, 3.0);
		assert_eq!(state.edges[1].width, 1.0);
	}

	#[test]
	fn captions_only_for_hubs_and_named_investors() {
		let mut nodes = vec![
			node("hub", "Hub Person"),
			node("wb", "Warren Buffett"),
			node("bg", "Benjamin Graham"),
		];
		let mut links = Vec::new();
		for i in 0..4 {
			let id = format!("n{i}");
			nodes.push(node(&id, &format!("Leaf Number{i}")));
			links.push(link("hub", &id, 1));
		}
		let state = ForceGraphState::new(&GraphData { nodes, links }, 800.0, 600.0);

		let caption = |id: &str| state.nodes[index_of(&state, id)].caption.clone();
		assert_eq!(caption("hub").as_deref(), Some("Person"));
		assert_eq!(caption("wb").as_deref(), Some("Buffett"));
		assert_eq!(caption("bg").as_deref(), Some("Graham"));
		assert_eq!(caption("n0"), None);
	}

	#[test]
	fn self_loop_counts_once_toward_degree() {
		let data = GraphData {
			nodes: vec![node("A", "A")],
			links: vec![link("A", "A", 1)],
		};
		let state = ForceGraphState::new(&data, 800.0, 600.0);
		assert_eq!(state.nodes[0].degree, 1);
		assert_eq!(state.edges.len(), 1);
	}

	#[test]
	fn short_label_takes_last_token() {
		assert_eq!(short_label("John Maynard Keynes"), "Keynes");
		assert_eq!(short_label("Munger"), "Munger");
		assert_eq!(short_label("  "), "");
	}

	#[test]
	fn duplicate_ids_keep_the_last_record() {
		let data = GraphData {
			nodes: vec![node("A", "First"), node("A", "Second"), node("B", "B")],
			links: vec![link("A", "B", 2)],
		};
		let state = ForceGraphState::new(&data, 800.0, 600.0);
		assert_eq!(state.nodes.len(), 2);
		assert_eq!(state.nodes[0].details.label, "Second");
		assert_eq!(state.nodes[0].degree, 1);
	}

	#[test]
	fn empty_dataset_builds_an_idle_state() {
		let mut state = ForceGraphState::new(&GraphData::default(), 800.0, 600.0);
		assert!(state.is_empty());
		assert_eq!(state.node_at_position(400.0, 300.0), None);
		state.tick();
	}

	#[test]
	fn hover_dims_everything_but_the_neighbourhood() {
		let mut state = abc();
		let (a, b, c) = (0, 1, 2);

		assert!(state.set_hover(Some(a)));
		assert_eq!(state.node_opacity(a), 1.0);
		assert_eq!(state.node_opacity(b), 1.0);
		assert_eq!(state.node_opacity(c), DIMMED_NODE_OPACITY);
		assert_eq!(state.edge_opacity(0), 1.0);
		assert_eq!(state.edge_opacity(1), DIMMED_EDGE_OPACITY);

		assert!(!state.set_hover(Some(a)));

		state.set_hover(Some(b));
		assert!([a, b, c].iter().all(|&i| state.node_opacity(i) == 1.0));
		assert_eq!(state.edge_opacity(0), 1.0);
		assert_eq!(state.edge_opacity(1), 1.0);

		state.set_hover(None);
		assert!([a, b, c].iter().all(|&i| state.node_opacity(i) == 1.0));
		assert_eq!(state.edge_opacity(0), EDGE_OPACITY);
		assert_eq!(state.edge_opacity(1), EDGE_OPACITY);
	}

	#[test]
	fn isolated_hovered_node_stays_opaque() {
		let data = GraphData {
			nodes: vec![node("A", "A"), node("B", "B")],
			links: vec![],
		};
		let mut state = ForceGraphState::new(&data, 800.0, 600.0);
		state.set_hover(Some(0));
		assert_eq!(state.node_opacity(0), 1.0);
		assert_eq!(state.node_opacity(1), DIMMED_NODE_OPACITY);
	}

	#[test]
	fn selection_replaces_and_clears() {
		let mut state = abc();
		assert_eq!(state.select(0).map(|d| d.label.clone()).as_deref(), Some("Alice Able"));
		assert_eq!(state.select(2).map(|d| d.label.clone()).as_deref(), Some("Cy Cole"));
		assert_eq!(state.selected, Some(2));
		assert_eq!(state.details(2).unwrap().role, "Investor");

		state.clear_selection();
		assert_eq!(state.selected, None);
		assert!(state.select(99).is_none());
		assert_eq!(state.selected, None);
	}

	#[test]
	fn hit_testing_respects_the_view_transform() {
		let mut state = abc();
		state.zoom_at(0.0, 0.0, 2.0);
		state.transform.x += 40.0;

		let (sx, sy) = screen_pos(&state, 1);
		assert_eq!(state.node_at_position(sx, sy), Some(1));
		assert_eq!(state.node_at_position(sx + 1000.0, sy), None);
	}

	#[test]
	fn drag_pins_to_pointer_and_releases() {
		let mut state = abc();
		state.zoom_at(0.0, 0.0, 2.0);
		let (sx, sy) = screen_pos(&state, 0);
		state.begin_drag(0, sx, sy);
		assert!(state.simulation.is_running());

		for (px, py) in [(100.0, 80.0), (140.0, 90.0), (300.0, 200.0)] {
			state.drag_to(px, py);
			let (gx, gy) = state.screen_to_graph(px, py);
			let pinned = state.simulation.nodes()[0];
			assert_eq!((pinned.fx, pinned.fy), (Some(gx), Some(gy)));
			state.tick();
			assert_eq!(state.simulation.position(0), (gx, gy));
		}
		assert!(state.simulation.nodes()[1..].iter().all(|n| n.fx.is_none() && n.fy.is_none()));

		assert_eq!(state.end_drag(), None);
		assert!(!state.drag.active);
		assert_eq!(state.simulation.nodes()[0].fx, None);
		assert_eq!(state.simulation.nodes()[0].fy, None);
	}

	#[test]
	fn drag_leaves_other_pins_alone() {
		let mut state = abc();
		state.simulation.pin(2, 1.0, 2.0);
		let (sx, sy) = screen_pos(&state, 0);
		state.begin_drag(0, sx, sy);
		state.drag_to(sx + 50.0, sy);
		state.end_drag();
		assert_eq!(state.simulation.nodes()[2].fx, Some(1.0));
		assert_eq!(state.simulation.nodes()[2].fy, Some(2.0));
	}

	#[test]
	fn press_without_motion_is_a_click() {
		let mut state = abc();
		let (sx, sy) = screen_pos(&state, 1);
		state.begin_drag(1, sx, sy);
		state.drag_to(sx + 1.0, sy);
		assert_eq!(state.end_drag(), Some(1));
		assert_eq!(state.end_drag(), None);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut state = abc();
		state.zoom_at(10.0, 10.0, 1000.0);
		assert_eq!(state.transform.k, MAX_ZOOM);
		state.zoom_at(10.0, 10.0, 1e-6);
		assert_eq!(state.transform.k, MIN_ZOOM);
		for _ in 0..200 {
			state.zoom_at(5.0, 5.0, 1.1);
		}
		assert_eq!(state.transform.k, MAX_ZOOM);
	}

	#[test]
	fn zoom_keeps_the_anchor_point_fixed() {
		let mut state = abc();
		let before = state.screen_to_graph(200.0, 150.0);
		state.zoom_at(200.0, 150.0, 1.1);
		let after = state.screen_to_graph(200.0, 150.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
	}

	#[test]
	fn pan_moves_the_view_not_the_layout() {
		let mut state = abc();
		let layout_before = state.simulation.position(0);
		state.begin_pan(10.0, 10.0);
		state.pan_to(60.0, 30.0);
		state.end_pan();
		state.pan_to(500.0, 500.0);
		assert_eq!(state.transform, ViewTransform { x: 50.0, y: 20.0, k: 1.0 });
		assert_eq!(state.simulation.position(0), layout_before);
	}

	#[test]
	fn settled_layout_only_repaints_on_interaction() {
		let mut state = abc();
		assert!(state.advance());
		while state.simulation.is_running() {
			assert!(state.advance());
		}
		assert!(!state.advance());
		assert!(!state.is_animating());

		state.set_hover(Some(0));
		assert!(state.is_animating());
		assert!(state.advance());
		assert!(!state.advance());

		state.set_hover(Some(0));
		assert!(!state.is_animating());

		state.zoom_at(10.0, 10.0, 1.1);
		assert!(state.advance());
		state.begin_pan(0.0, 0.0);
		state.pan_to(5.0, 5.0);
		assert!(state.advance());
		state.select(1);
		assert!(state.advance());
		state.clear_selection();
		assert!(state.advance());
		assert!(!state.advance());
	}

	#[test]
	fn empty_dataset_paints_once_then_idles() {
		let mut state = ForceGraphState::new(&GraphData::default(), 800.0, 600.0);
		assert!(state.advance());
		assert!(!state.advance());
	}

	#[test]
	fn reset_discards_all_interaction_and_layout_state() {
		let mut state = abc();
		for _ in 0..50 {
			state.tick();
		}
		state.simulation.pin(2, 1.0, 2.0);
		state.set_hover(Some(1));
		state.select(0);
		state.zoom_at(100.0, 100.0, 2.0);
		let (sx, sy) = screen_pos(&state, 1);
		state.begin_drag(1, sx, sy);
		state.begin_pan(0.0, 0.0);

		let data = GraphData {
			nodes: vec![node("X", "Xavier"), node("Y", "Yvonne"), node("Z", "Zed")],
			links: vec![link("X", "Y", 2)],
		};
		state.reset(&data, 400.0, 300.0);
		let fresh = ForceGraphState::new(&data, 400.0, 300.0);

		assert_eq!((state.width, state.height), (400.0, 300.0));
		assert_eq!(state.edges.len(), 1);
		assert_eq!(state.selected, None);
		assert_eq!(state.hover.node, None);
		assert!(state.hover.neighbors.is_empty());
		assert!(!state.drag.active && !state.pan.active);
		assert_eq!(state.transform, ViewTransform::default());
		assert!(state.simulation.nodes().iter().all(|n| n.fx.is_none() && n.fy.is_none()));
		assert!(state.simulation.is_running());
		assert!(state.needs_redraw);

		let positions = |s: &ForceGraphState| {
			(0..3).map(|i| s.simulation.position(i)).collect::<Vec<_>>()
		};
		assert_eq!(positions(&state), positions(&fresh));
		state.tick();
		let mut fresh = fresh;
		fresh.tick();
		assert_eq!(positions(&state), positions(&fresh));
	}

	#[test]
	fn leaving_the_canvas_cancels_gestures() {
		let mut state = abc();
		state.set_hover(Some(0));
		let (sx, sy) = screen_pos(&state, 0);
		state.begin_drag(0, sx, sy);
		state.cancel_gestures();
		assert!(!state.drag.active);
		assert_eq!(state.hover.node, None);
		assert_eq!(state.simulation.nodes()[0].fx, None);
	}
}
