use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="status-screen">
			<h1>"Page not found"</h1>
			<a href="/">"Back to the network"</a>
		</div>
	}
}
