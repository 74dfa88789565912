use leptos::html::Canvas;
use leptos::leptos_dom::helpers::{AnimationFrameRequestHandle, request_animation_frame_with_handle};
use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::{ForceGraphState, NodeDetails};
use super::types::GraphData;
use crate::config::{DEFAULT_GRAPH_HEIGHT, DEFAULT_GRAPH_WIDTH};

const TOOLTIP_OFFSET_X: f64 = 10.0;
const TOOLTIP_OFFSET_Y: f64 = -10.0;
const ZOOM_IN: f64 = 1.1;
const ZOOM_OUT: f64 = 0.9;

#[derive(Clone, Debug, PartialEq)]
struct Tooltip {
	details: NodeDetails,
	x: f64,
	y: f64,
}

type GraphStore = StoredValue<Option<ForceGraphState>>;
type FrameStore = StoredValue<Option<AnimationFrameRequestHandle>>;

/// Interactive force-directed network on a canvas.
///
/// Any change to `data`, `width` or `height` discards the running layout and
/// builds a fresh one. Unmounting cancels the animation loop.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into, default = DEFAULT_GRAPH_WIDTH.into())] width: Signal<f64>,
	#[prop(into, default = DEFAULT_GRAPH_HEIGHT.into())] height: Signal<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<Canvas>::new();
	let graph: GraphStore = StoredValue::new(None);
	let frame: FrameStore = StoredValue::new(None);
	let tooltip = RwSignal::new(None::<Tooltip>);
	let selected = RwSignal::new(None::<NodeDetails>);

	Effect::new(move |_| {
		let data = data.get();
		let (w, h) = (width.get(), height.get());
		let Some(canvas) = canvas_ref.get() else {
			return;
		};

		cancel_frame(frame);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		graph.update_value(|g| {
			match g.as_mut() {
				Some(state) => state.reset(&data, w, h),
				None => *g = Some(ForceGraphState::new(&data, w, h)),
			}
			let Some(state) = g.as_ref() else { return };
			info!(
				"building graph: {} nodes, {} of {} edges",
				state.nodes.len(),
				state.edges.len(),
				data.links.len()
			);
		});
		tooltip.set(None);
		selected.set(None);
		wake(graph, frame, canvas_ref);
	});

	on_cleanup(move || {
		cancel_frame(frame);
		let _ = graph.try_set_value(None);
		debug!("graph unmounted");
	});

	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		graph.update_value(|g| {
			let Some(s) = g else { return };
			match s.node_at_position(x, y) {
				Some(idx) => s.begin_drag(idx, x, y),
				None => s.begin_pan(x, y),
			}
		});
		wake(graph, frame, canvas_ref);
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let anchor = tooltip_anchor(ev.client_x() as f64, ev.client_y() as f64);
		let hover_change = graph.try_update_value(|g| {
			let s = g.as_mut()?;
			if s.drag.active {
				s.drag_to(x, y);
				return None;
			}
			if s.pan.active {
				s.pan_to(x, y);
				return None;
			}
			let hovered = s.node_at_position(x, y);
			if !s.set_hover(hovered) {
				return None;
			}
			Some(hovered.and_then(|idx| s.details(idx).cloned()))
		});
		wake(graph, frame, canvas_ref);
		if let Some(Some(details)) = hover_change {
			tooltip.set(details.map(|details| Tooltip {
				details,
				x: anchor.0,
				y: anchor.1,
			}));
		}
	};

	let on_mouseup = move |_: MouseEvent| {
		let clicked = graph.try_update_value(|g| {
			let s = g.as_mut()?;
			s.end_pan();
			let idx = s.end_drag()?;
			let details = s.select(idx).cloned()?;
			debug!("selected {}", s.nodes[idx].id);
			Some(details)
		});
		wake(graph, frame, canvas_ref);
		if let Some(Some(details)) = clicked {
			selected.set(Some(details));
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		graph.update_value(|g| {
			if let Some(s) = g {
				s.cancel_gestures();
			}
		});
		wake(graph, frame, canvas_ref);
		tooltip.set(None);
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let Some(factor) = wheel_zoom_factor(ev.delta_y()) else {
			return;
		};
		graph.update_value(|g| {
			if let Some(s) = g {
				s.zoom_at(x, y, factor);
			}
		});
		wake(graph, frame, canvas_ref);
	};

	let on_close = move |_: MouseEvent| {
		graph.update_value(|g| {
			if let Some(s) = g {
				s.clear_selection();
			}
		});
		wake(graph, frame, canvas_ref);
		selected.set(None);
	};

	view! {
		<div class="network-container">
			<canvas
				node_ref=canvas_ref
				class="network-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab; border: 1px solid var(--border);"
			/>

			{move || {
				tooltip
					.get()
					.map(|t| {
						view! {
							<div
								class="tooltip visible"
								style:left=format!("{}px", t.x)
								style:top=format!("{}px", t.y)
							>
								<strong>{t.details.label}</strong>
								<br />
								{t.details.primary_firm.map(|firm| view! { {firm} <br /> })}
								{t.details.role}
								<br />
								<em>{t.details.category.label()}</em>
								<br />
								{t.details.geography}
							</div>
						}
					})
			}}

			{move || {
				selected
					.get()
					.map(|d| {
						view! {
							<div class="detail-panel">
								<h3 class="detail-title">{d.label}</h3>
								<div class="detail-body">
									{d
										.primary_firm
										.map(|firm| {
											view! {
												<p>
													<span class="detail-key">"Firm:"</span>
													" "
													{firm}
												</p>
											}
										})}
									<p>
										<span class="detail-key">"Role:"</span>
										" "
										{d.role}
									</p>
									<p>
										<span class="detail-key">"Category:"</span>
										" "
										{d.category.label()}
									</p>
									<p>
										<span class="detail-key">"Geography:"</span>
										" "
										{d.geography}
									</p>
								</div>
								<button class="detail-close" on:click=on_close>
									"Close"
								</button>
							</div>
						}
					})
			}}
		</div>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn pointer_position(canvas_ref: NodeRef<Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let rect = canvas_ref.get_untracked()?.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Tooltip position for a pointer at viewport coordinates. The tooltip is
/// `position: fixed`, so it lives in the same space.
fn tooltip_anchor(client_x: f64, client_y: f64) -> (f64, f64) {
	(client_x + TOOLTIP_OFFSET_X, client_y + TOOLTIP_OFFSET_Y)
}

/// Zoom step for a wheel event; purely horizontal scrolling does not zoom.
fn wheel_zoom_factor(delta_y: f64) -> Option<f64> {
	if delta_y > 0.0 {
		Some(ZOOM_OUT)
	} else if delta_y < 0.0 {
		Some(ZOOM_IN)
	} else {
		None
	}
}

fn cancel_frame(frame: FrameStore) {
	if let Some(Some(handle)) = frame.try_update_value(Option::take) {
		handle.cancel();
	}
}

/// Restarts the animation loop if it is idle and the graph has something to show.
fn wake(graph: GraphStore, frame: FrameStore, canvas_ref: NodeRef<Canvas>) {
	let idle = frame.try_with_value(Option::is_none).unwrap_or(false);
	let pending = graph
		.try_with_value(|g| g.as_ref().is_some_and(ForceGraphState::is_animating))
		.unwrap_or(false);
	if !idle || !pending {
		return;
	}
	let Some(canvas) = canvas_ref.get_untracked() else {
		return;
	};
	match context_2d(&canvas) {
		Some(ctx) => schedule_frame(graph, frame, ctx),
		None => error!("canvas has no 2d context"),
	}
}

/// One animation frame: advance the layout, repaint if anything changed, and
/// queue the next frame while there is more to do.
///
/// The loop parks once the layout has settled and nothing is dirty, and ends
/// for good when the graph store is disposed or emptied.
fn schedule_frame(graph: GraphStore, frame: FrameStore, ctx: CanvasRenderingContext2d) {
	let request = request_animation_frame_with_handle(move || {
		let more = graph
			.try_update_value(|g| {
				let s = g.as_mut()?;
				let was_running = s.simulation.is_running();
				if s.advance() {
					render::render(s, &ctx);
				}
				if was_running && !s.simulation.is_running() {
					debug!("layout settled");
				}
				Some(s.is_animating())
			})
			.flatten()
			.unwrap_or(false);
		if more {
			schedule_frame(graph, frame, ctx);
		} else {
			let _ = frame.try_set_value(None);
		}
	});
	match request {
		Ok(handle) => {
			let _ = frame.try_set_value(Some(handle));
		}
		Err(err) => error!("failed to schedule animation frame: {err:?}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tooltip_follows_the_viewport_pointer() {
		assert_eq!(tooltip_anchor(300.0, 300.0), (310.0, 290.0));
		assert_eq!(tooltip_anchor(0.0, 5.0), (10.0, -5.0));
	}

	#[test]
	fn only_vertical_wheel_motion_zooms() {
		assert_eq!(wheel_zoom_factor(120.0), Some(ZOOM_OUT));
		assert_eq!(wheel_zoom_factor(-3.0), Some(ZOOM_IN));
		assert_eq!(wheel_zoom_factor(0.0), None);
		assert_eq!(wheel_zoom_factor(-0.0), None);
	}
}
