use leptos::prelude::*;

/// Headline number with a title and a one-line description.
#[component]
pub fn StatCard(
	#[prop(into)] title: String,
	#[prop(into)] value: String,
	#[prop(into, optional)] description: Option<String>,
	#[prop(into, default = String::new())] class: String,
) -> impl IntoView {
	view! {
		<div class=format!("chart-card {class}")>
			<h3 class="section-title mb-2">{title}</h3>
			<div class="metric-value mb-1">{value}</div>
			{description.map(|d| view! { <p class="text-sm text-muted-foreground">{d}</p> })}
		</div>
	}
}
