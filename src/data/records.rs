//! Row types for the two CSV files and their conversion into graph input.

use serde::Deserialize;

use crate::components::force_graph::{Category, GraphLink, GraphNode};

#[derive(Debug, Deserialize)]
struct NodeRecord {
	#[serde(rename = "ID")]
	id: String,
	#[serde(rename = "Label", default)]
	label: String,
	#[serde(rename = "Category", default)]
	category: String,
	#[serde(rename = "Geography", default)]
	geography: String,
	#[serde(rename = "Role", default)]
	role: String,
	#[serde(rename = "Primary Firm", default)]
	primary_firm: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
	#[serde(rename = "Source")]
	source: String,
	#[serde(rename = "Target")]
	target: String,
	#[serde(rename = "Relationship", default)]
	relationship: String,
	#[serde(rename = "Strength", default)]
	strength: Option<String>,
}

impl From<NodeRecord> for GraphNode {
	fn from(record: NodeRecord) -> Self {
		GraphNode {
			category: Category::from_label(&record.category),
			id: record.id,
			label: record.label,
			geography: record.geography,
			role: record.role,
			primary_firm: record.primary_firm.filter(|firm| !firm.is_empty()),
		}
	}
}

impl From<EdgeRecord> for GraphLink {
	fn from(record: EdgeRecord) -> Self {
		GraphLink {
			strength: coerce_strength(record.strength.as_deref()),
			source: record.source,
			target: record.target,
			relationship: record.relationship,
		}
	}
}

/// Positive integer strength, or `None` for anything else.
pub fn coerce_strength(raw: Option<&str>) -> Option<u8> {
	raw?.trim().parse::<u8>().ok().filter(|strength| *strength > 0)
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
	csv::ReaderBuilder::new()
		.trim(csv::Trim::All)
		.flexible(true)
		.from_reader(text.as_bytes())
}

pub fn parse_nodes(text: &str) -> Result<Vec<GraphNode>, csv::Error> {
	reader(text)
		.deserialize::<NodeRecord>()
		.map(|record| record.map(GraphNode::from))
		.collect()
}

pub fn parse_edges(text: &str) -> Result<Vec<GraphLink>, csv::Error> {
	reader(text)
		.deserialize::<EdgeRecord>()
		.map(|record| record.map(GraphLink::from))
		.collect()
}
