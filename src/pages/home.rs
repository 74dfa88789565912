use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::components::legend::Legend;
use crate::components::stat_card::StatCard;
use crate::config::DashboardConfig;
use crate::data::{NetworkStats, load_dataset, percent};

const TOP_GEOGRAPHIES: usize = 8;

/// Loads the dataset and shows the dashboard, a spinner, or the load error.
#[component]
pub fn Home() -> impl IntoView {
	let config = DashboardConfig::default();
	let dataset = LocalResource::new(move || load_dataset(config.nodes_url, config.edges_url));

	view! {
		<Suspense fallback=|| view! { <Loading /> }>
			{move || Suspend::new(async move {
				match dataset.await {
					Ok(data) => view! { <Dashboard data=data config=config /> }.into_any(),
					Err(err) => view! { <LoadFailed message=err.to_string() /> }.into_any(),
				}
			})}
		</Suspense>
	}
}

#[component]
fn Loading() -> impl IntoView {
	view! {
		<div class="status-screen">
			<div class="spinner"></div>
			<p class="text-muted-foreground">"Loading investor network data..."</p>
		</div>
	}
}

#[component]
fn LoadFailed(message: String) -> impl IntoView {
	view! {
		<div class="status-screen">
			<p class="text-destructive mb-2">"Error loading data:"</p>
			<p class="text-muted-foreground">{message}</p>
		</div>
	}
}

#[component]
fn Dashboard(data: GraphData, config: DashboardConfig) -> impl IntoView {
	let stats = NetworkStats::from_data(&data);
	let graph_data = Signal::derive(move || data.clone());
	let today: String = js_sys::Date::new_0()
		.to_locale_date_string("default", &JsValue::UNDEFINED)
		.into();

	view! {
		<div class="dashboard-grid">
			<header class="col-span-12 chart-card fade-in">
				<div class="header-row">
					<div>
						<h1 class="dashboard-title mb-2">"Global Value Investors Network"</h1>
						<p class="text-muted-foreground">
							{format!(
								"Interactive visualization of relationships among {} prominent value investors",
								stats.total_investors,
							)}
						</p>
					</div>
					<div class="text-right">
						<div class="text-sm text-muted-foreground">"Last Updated"</div>
						<div class="text-sm font-medium">{today}</div>
					</div>
				</div>
			</header>

			<StatCard
				class="col-span-3 slide-up"
				title="Total Investors"
				value=stats.total_investors.to_string()
				description="Prominent value investors worldwide"
			/>
			<StatCard
				class="col-span-3 slide-up"
				title="Connections"
				value=stats.total_connections.to_string()
				description="Professional relationships mapped"
			/>
			<StatCard
				class="col-span-3 slide-up"
				title="Strong Bonds"
				value=stats.strong_connections.to_string()
				description="Mentorship & partnership ties"
			/>
			<StatCard
				class="col-span-3 slide-up"
				title="Avg Connections"
				value=format!("{:.1}", stats.avg_connections())
				description="Per investor in the network"
			/>

			<div class="col-span-9 chart-card fade-in">
				<div class="mb-4">
					<h2 class="section-title">"Network Visualization"</h2>
					<p class="text-sm text-muted-foreground">
						"Interactive force-directed graph showing investor relationships. Node size reflects connection count."
					</p>
				</div>
				<ForceGraphCanvas
					data=graph_data
					width=config.graph_width
					height=config.graph_height
				/>
			</div>

			<div class="col-span-3 fade-in">
				<Legend stats=stats.clone() />
			</div>

			<div class="col-span-6 chart-card fade-in">
				<h3 class="section-title mb-4">"Investor Categories"</h3>
				<Breakdown
					rows=stats
						.categories
						.iter()
						.map(|(category, count)| (category.label().to_string(), *count))
						.collect()
					total=stats.total_investors
					bar_class="bar-primary"
				/>
			</div>

			<div class="col-span-6 chart-card fade-in">
				<h3 class="section-title mb-4">"Geographic Distribution"</h3>
				<Breakdown
					rows=stats.top_geographies(TOP_GEOGRAPHIES).to_vec()
					total=stats.total_investors
					bar_class="bar-secondary"
				/>
			</div>

			<div class="col-span-12 chart-card fade-in">
				<h3 class="section-title mb-4">"Relationship Types"</h3>
				<div class="relationship-grid">
					{stats
						.relationships
						.iter()
						.map(|(relationship, count)| {
							let share = percent(*count, stats.total_connections);
							view! {
								<div class="relationship-tile">
									<div class="metric-value">{*count}</div>
									<div class="text-sm font-medium">{relationship.clone()}</div>
									<div class="text-xs text-muted-foreground">
										{format!("{share:.1}% of connections")}
									</div>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>

			<footer class="col-span-12 chart-card fade-in">
				<p class="mb-2">
					"This network visualization maps the professional relationships among prominent global value investors, highlighting the interconnected nature of the investment community."
				</p>
				<p>
					"Data includes mentorship relationships, business partnerships, academic collaborations, and professional influences."
				</p>
			</footer>
		</div>
	}
}

/// Labelled bars, each showing count and share of `total`.
#[component]
fn Breakdown(rows: Vec<(String, usize)>, total: usize, bar_class: &'static str) -> impl IntoView {
	rows.into_iter()
		.map(|(label, count)| {
			let share = percent(count, total);
			view! {
				<div class="breakdown-row">
					<span class="text-sm font-medium">{label}</span>
					<div class="breakdown-value">
						<div class="bar-track">
							<div class=format!("bar-fill {bar_class}") style:width=format!("{share:.1}%") />
						</div>
						<span class="text-sm text-muted-foreground">
							{format!("{count} ({share:.1}%)")}
						</span>
					</div>
				</div>
			}
		})
		.collect_view()
}
