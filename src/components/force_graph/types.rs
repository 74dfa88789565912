/// Investor grouping used for node colour and the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	AcademicLineage,
	GrahamDoddDisciples,
	ModernFundManagers,
	GlobalValueInvestors,
	PhilanthropyOther,
	Other,
}

impl Category {
	pub const ALL: [Category; 6] = [
		Category::AcademicLineage,
		Category::GrahamDoddDisciples,
		Category::ModernFundManagers,
		Category::GlobalValueInvestors,
		Category::PhilanthropyOther,
		Category::Other,
	];

	/// Parses the category column; anything unrecognised is `Other`.
	pub fn from_label(label: &str) -> Self {
		match label.trim() {
			"Academic Lineage" => Category::AcademicLineage,
			"Graham-Dodd Disciples" => Category::GrahamDoddDisciples,
			"Modern Fund Managers" => Category::ModernFundManagers,
			"Global Value Investors" => Category::GlobalValueInvestors,
			"Philanthropy/Other" => Category::PhilanthropyOther,
			_ => Category::Other,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Category::AcademicLineage => "Academic Lineage",
			Category::GrahamDoddDisciples => "Graham-Dodd Disciples",
			Category::ModernFundManagers => "Modern Fund Managers",
			Category::GlobalValueInvestors => "Global Value Investors",
			Category::PhilanthropyOther => "Philanthropy/Other",
			Category::Other => "Other",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub category: Category,
	pub geography: String,
	pub role: String,
	pub primary_firm: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub relationship: String,
	/// `None` when the source text was not a positive integer.
	pub strength: Option<u8>,
}

impl GraphLink {
	/// Strength used as a layout and stroke multiplier. Missing values count as the weakest tie.
	pub fn weight(&self) -> f64 {
		self.strength.map_or(1.0, f64::from)
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn category_labels_round_trip_and_unknowns_fall_back() {
		for category in Category::ALL {
			assert_eq!(Category::from_label(category.label()), category);
		}
		assert_eq!(Category::from_label(" Modern Fund Managers "), Category::ModernFundManagers);
		assert_eq!(Category::from_label("Hedge Funds"), Category::Other);
		assert_eq!(Category::from_label(""), Category::Other);
	}

	#[test]
	fn missing_strength_weighs_as_weakest_tie() {
		let link = GraphLink {
			source: "A".into(),
			target: "B".into(),
			relationship: "Influenced".into(),
			strength: None,
		};
		assert_eq!(link.weight(), 1.0);
		assert_eq!(GraphLink { strength: Some(3), ..link }.weight(), 3.0);
	}
}
