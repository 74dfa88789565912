use log::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::error::LoadError;
use super::records::{parse_edges, parse_nodes};
use crate::components::force_graph::GraphData;

/// Fetches and parses the node and edge CSVs.
///
/// Both requests are issued before either is awaited. There is no retry; a
/// failure of either resource fails the whole load.
pub async fn load_dataset(nodes_url: &str, edges_url: &str) -> Result<GraphData, LoadError> {
	info!("loading {nodes_url} and {edges_url}");
	let result = fetch_both(nodes_url, edges_url).await;
	match &result {
		Ok(data) => info!(
			"loaded {} investors and {} connections",
			data.nodes.len(),
			data.links.len()
		),
		Err(err) => error!("Error loading CSV data: {err}"),
	}
	result
}

async fn fetch_both(nodes_url: &str, edges_url: &str) -> Result<GraphData, LoadError> {
	let window = web_sys::window().ok_or_else(|| LoadError::Fetch {
		url: nodes_url.to_string(),
		reason: "no window".to_string(),
	})?;
	let pending_nodes = JsFuture::from(window.fetch_with_str(nodes_url));
	let pending_edges = JsFuture::from(window.fetch_with_str(edges_url));

	let nodes_text = read_text(nodes_url, pending_nodes).await?;
	let edges_text = read_text(edges_url, pending_edges).await?;

	Ok(GraphData {
		nodes: parse_nodes(&nodes_text).map_err(|err| LoadError::parse(nodes_url, &err))?,
		links: parse_edges(&edges_text).map_err(|err| LoadError::parse(edges_url, &err))?,
	})
}

async fn read_text(url: &str, pending: JsFuture) -> Result<String, LoadError> {
	let response: Response = pending
		.await
		.map_err(|err| LoadError::fetch(url, &err))?
		.dyn_into()
		.map_err(|err| LoadError::fetch(url, &err))?;
	if !response.ok() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}
	let body = response.text().map_err(|err| LoadError::fetch(url, &err))?;
	JsFuture::from(body)
		.await
		.map_err(|err| LoadError::fetch(url, &err))?
		.as_string()
		.ok_or_else(|| LoadError::Fetch {
			url: url.to_string(),
			reason: "response body is not text".to_string(),
		})
}
