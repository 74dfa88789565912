use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ForceGraphState;
use crate::theme::{
	BACKGROUND_COLOR, EDGE_COLOR, LABEL_COLOR, NODE_OUTLINE_COLOR, brighten, category_color,
};

const NODE_OUTLINE_WIDTH: f64 = 2.0;
const SELECTED_RING_GAP: f64 = 3.0;
const LABEL_OFFSET: f64 = 20.0;
const LABEL_FONT: &str = "500 10px sans-serif";

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND_COLOR);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	if state.is_empty() {
		return;
	}
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_labels(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(EDGE_COLOR);
	for (i, edge) in state.edges.iter().enumerate() {
		let (x1, y1) = state.simulation.position(edge.source);
		let (x2, y2) = state.simulation.position(edge.target);

		ctx.set_global_alpha(state.edge_opacity(i));
		ctx.set_line_width(edge.width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	for (idx, (node, pos)) in state
		.nodes
		.iter()
		.zip(state.simulation.nodes())
		.enumerate()
	{
		let (x, y, radius) = (pos.x, pos.y, node.radius);
		let base = category_color(node.details.category);

		ctx.set_global_alpha(state.node_opacity(idx));
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);

		// Light source up and to the left.
		let (gx, gy) = (x - radius * 0.4, y - radius * 0.4);
		match ctx.create_radial_gradient(gx, gy, 0.0, gx, gy, radius) {
			Ok(gradient) => {
				let _ = gradient.add_color_stop(0.0, &brighten(base, 0.3));
				let _ = gradient.add_color_stop(1.0, base);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
			}
			Err(_) => ctx.set_fill_style_str(base),
		}
		ctx.fill();

		ctx.set_stroke_style_str(NODE_OUTLINE_COLOR);
		ctx.set_line_width(NODE_OUTLINE_WIDTH);
		ctx.stroke();

		if state.selected == Some(idx) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + SELECTED_RING_GAP, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(base);
			ctx.set_line_width(1.5);
			ctx.stroke();
		}
	}
	ctx.set_global_alpha(1.0);
}

fn draw_labels(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_font(LABEL_FONT);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(LABEL_COLOR);
	for (node, pos) in state.nodes.iter().zip(state.simulation.nodes()) {
		if let Some(caption) = &node.caption {
			let _ = ctx.fill_text(caption, pos.x, pos.y - LABEL_OFFSET);
		}
	}
}
