//! Colours and legend entries shared by the legend and the graph renderer.

use crate::components::force_graph::Category;

pub const EDGE_COLOR: &str = "#999";
pub const NODE_OUTLINE_COLOR: &str = "#fff";
pub const LABEL_COLOR: &str = "#374151";
pub const BACKGROUND_COLOR: &str = "#ffffff";

/// Nodes that always carry a label regardless of degree.
pub const ALWAYS_LABELED: [&str; 2] = ["Warren Buffett", "Benjamin Graham"];

pub fn category_color(category: Category) -> &'static str {
	match category {
		Category::AcademicLineage => "#3b82f6",
		Category::GrahamDoddDisciples => "#10b981",
		Category::ModernFundManagers => "#8b5cf6",
		Category::GlobalValueInvestors => "#f59e0b",
		Category::PhilanthropyOther => "#ef4444",
		Category::Other => "#6b7280",
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelationshipKind {
	pub label: &'static str,
	pub strength: u8,
	pub description: &'static str,
}

pub const RELATIONSHIP_KINDS: [RelationshipKind; 4] = [
	RelationshipKind {
		label: "Mentor of",
		strength: 3,
		description: "Strong mentorship relationship",
	},
	RelationshipKind {
		label: "Partner of",
		strength: 3,
		description: "Business partnership",
	},
	RelationshipKind {
		label: "Colleague at",
		strength: 2,
		description: "Professional colleagues",
	},
	RelationshipKind {
		label: "Influenced",
		strength: 1,
		description: "Intellectual influence",
	},
];

/// Brightens a `#rrggbb` colour by `k` steps, each step scaling channels by 1/0.7.
///
/// Returns the input unchanged if it is not a six digit hex colour.
pub fn brighten(hex: &str, k: f64) -> String {
	let Some(digits) = hex.strip_prefix('#').filter(|d| d.len() == 6 && d.is_ascii()) else {
		return hex.to_string();
	};
	let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
	let (Some(r), Some(g), Some(b)) = (channel(0), channel(2), channel(4)) else {
		return hex.to_string();
	};
	let factor = (1.0 / 0.7_f64).powf(k);
	let scale = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
	format!("rgb({}, {}, {})", scale(r), scale(g), scale(b))
}
