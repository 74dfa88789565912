use leptos::prelude::*;

use crate::components::force_graph::Category;
use crate::data::NetworkStats;
use crate::theme::{RELATIONSHIP_KINDS, category_color};

#[component]
pub fn Legend(stats: NetworkStats) -> impl IntoView {
	let categories = Category::ALL
		.iter()
		.map(|&category| {
			let count = stats.category_count(category);
			view! {
				<div class="legend-row">
					<div
						class="legend-swatch"
						style:background-color=category_color(category)
					/>
					<span class="legend-label">{category.label()}</span>
					<span class="legend-count">{format!("({count})")}</span>
				</div>
			}
		})
		.collect_view();

	let relationships = RELATIONSHIP_KINDS
		.iter()
		.map(|kind| {
			view! {
				<div class="legend-row">
					<div class="legend-stroke" style:height=format!("{}px", kind.strength) />
					<div class="legend-label">
						<div class="legend-title">{kind.label}</div>
						<div class="legend-description">{kind.description}</div>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="chart-card">
			<h3 class="section-title mb-4">"Legend"</h3>
			<div class="legend-section">
				<h4 class="legend-heading">"Investor Categories"</h4>
				{categories}
			</div>
			<div class="legend-section">
				<h4 class="legend-heading">"Relationship Strength"</h4>
				{relationships}
			</div>
			<div class="legend-section legend-help">
				<h4 class="legend-heading">"Interactions"</h4>
				<p>"• Hover over nodes to see connections"</p>
				<p>"• Click nodes for detailed information"</p>
				<p>"• Drag nodes to reposition"</p>
				<p>"• Zoom and pan to explore"</p>
			</div>
		</div>
	}
}
