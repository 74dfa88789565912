use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a dataset could not be loaded. Any of these ends the load attempt.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LoadError {
	#[error("failed to fetch {url}: {reason}")]
	Fetch { url: String, reason: String },
	#[error("failed to fetch {url}: HTTP {status}")]
	Status { url: String, status: u16 },
	#[error("failed to parse {url}: {reason}")]
	Parse { url: String, reason: String },
}

impl LoadError {
	pub(crate) fn fetch(url: &str, err: &JsValue) -> Self {
		LoadError::Fetch {
			url: url.to_string(),
			reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
		}
	}

	pub(crate) fn parse(url: &str, err: &csv::Error) -> Self {
		LoadError::Parse {
			url: url.to_string(),
			reason: err.to_string(),
		}
	}
}
