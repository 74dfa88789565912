//! Counts and ratios shown on the dashboard cards.
//!
//! Everything here works on the raw rows, before the graph drops dangling edges.

use std::collections::HashMap;
use std::hash::Hash;

use crate::components::force_graph::{Category, GraphData};

const STRONG_TIE: u8 = 3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkStats {
	pub total_investors: usize,
	pub total_connections: usize,
	pub strong_connections: usize,
	/// In order of first appearance.
	pub categories: Vec<(Category, usize)>,
	/// Most common first; ties keep order of first appearance.
	pub geographies: Vec<(String, usize)>,
	/// In order of first appearance.
	pub relationships: Vec<(String, usize)>,
}

impl NetworkStats {
	pub fn from_data(data: &GraphData) -> Self {
		let mut geographies = tally(data.nodes.iter().map(|n| n.geography.clone()));
		geographies.sort_by(|a, b| b.1.cmp(&a.1));

		Self {
			total_investors: data.nodes.len(),
			total_connections: data.links.len(),
			strong_connections: data
				.links
				.iter()
				.filter(|link| link.strength == Some(STRONG_TIE))
				.count(),
			categories: tally(data.nodes.iter().map(|n| n.category)),
			geographies,
			relationships: tally(data.links.iter().map(|l| l.relationship.clone())),
		}
	}

	/// Undirected average degree: every connection counts for both of its ends.
	pub fn avg_connections(&self) -> f64 {
		if self.total_investors == 0 {
			return 0.0;
		}
		2.0 * self.total_connections as f64 / self.total_investors as f64
	}

	pub fn category_count(&self, category: Category) -> usize {
		self.categories
			.iter()
			.find(|(c, _)| *c == category)
			.map_or(0, |(_, count)| *count)
	}

	pub fn top_geographies(&self, n: usize) -> &[(String, usize)] {
		&self.geographies[..n.min(self.geographies.len())]
	}
}

/// `part` as a percentage of `whole`, 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> f64 {
	if whole == 0 {
		return 0.0;
	}
	part as f64 * 100.0 / whole as f64
}

fn tally<K: Eq + Hash + Clone>(keys: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
	let mut index: HashMap<K, usize> = HashMap::new();
	let mut counts: Vec<(K, usize)> = Vec::new();
	for key in keys {
		match index.get(&key) {
			Some(&i) => counts[i].1 += 1,
			None => {
				index.insert(key.clone(), counts.len());
				counts.push((key, 1));
			}
		}
	}
	counts
}
