use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{
	CHECK_HALF, CHECK_SLOTS, SURFACE_SIZE, SecurityMesh, USER_RADIUS, USER_SLOTS,
	adjacent_checks,
};

const BACKGROUND: &str = "#F5F4F0";
const THREAT_FILL: &str = "#ef4444";
const THREAT_STROKE: &str = "#dc2626";
const SAFE_STROKE: &str = "#d6d3d1";
const ACTIVE_FILL: &str = "#2563eb";
const IDLE_FILL: &str = "rgba(214, 211, 209, 0.4)";

pub fn render(mesh: &SecurityMesh, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, SURFACE_SIZE, SURFACE_SIZE);
	draw_grid(ctx);
	draw_links(mesh, ctx);
	draw_checks(mesh, ctx);
	draw_users(mesh, ctx);
}

fn draw_grid(ctx: &CanvasRenderingContext2d) {
	let (s, inset) = (SURFACE_SIZE, SURFACE_SIZE / 6.0);
	ctx.set_stroke_style_str("rgba(168, 162, 158, 0.2)");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(inset, inset, s - 2.0 * inset, s - 2.0 * inset);
	ctx.begin_path();
	ctx.move_to(0.0, s / 2.0);
	ctx.line_to(s, s / 2.0);
	ctx.move_to(s / 2.0, 0.0);
	ctx.line_to(s / 2.0, s);
	ctx.stroke();
}

fn draw_links(mesh: &SecurityMesh, ctx: &CanvasRenderingContext2d) {
	let s = SURFACE_SIZE;
	for user in &USER_SLOTS {
		let threatened = mesh.is_threatened(user.id);
		let (color, dash) = if threatened {
			("rgba(239, 68, 68, 0.6)", 0.0)
		} else {
			("rgba(168, 162, 158, 0.25)", 4.0)
		};
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(if threatened { 1.5 } else { 1.0 });
		let pattern = if dash > 0.0 {
			js_sys::Array::of2(&JsValue::from_f64(dash), &JsValue::from_f64(dash))
		} else {
			js_sys::Array::new()
		};
		let _ = ctx.set_line_dash(&pattern);

		for &check_id in adjacent_checks(user.id) {
			let Some(check) = CHECK_SLOTS.iter().find(|c| c.id == check_id) else {
				continue;
			};
			ctx.begin_path();
			ctx.move_to(user.x * s, user.y * s);
			ctx.line_to(check.x * s, check.y * s);
			ctx.stroke();
		}
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_checks(mesh: &SecurityMesh, ctx: &CanvasRenderingContext2d) {
	let s = SURFACE_SIZE;
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for check in &CHECK_SLOTS {
		let (x, y) = (check.x * s, check.y * s);
		let active = mesh.is_check_active(check.id);
		let half = if active { CHECK_HALF * 1.1 } else { CHECK_HALF };

		if active {
			// Halo in place of the ring around an engaged check.
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, half * 0.5, x, y, half * 1.8) {
				let _ = gradient.add_color_stop(0.0, "rgba(37, 99, 235, 0.35)");
				let _ = gradient.add_color_stop(1.0, "rgba(37, 99, 235, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, half * 1.8, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.set_fill_style_str(if active { ACTIVE_FILL } else { IDLE_FILL });
		ctx.fill_rect(x - half, y - half, 2.0 * half, 2.0 * half);

		ctx.set_fill_style_str("white");
		ctx.set_font("bold 11px sans-serif");
		let _ = ctx.fill_text(if active { "\u{2713}" } else { check.label }, x, y);
	}
}

fn draw_users(mesh: &SecurityMesh, ctx: &CanvasRenderingContext2d) {
	let s = SURFACE_SIZE;
	for user in &USER_SLOTS {
		let (x, y) = (user.x * s, user.y * s);
		let threatened = mesh.is_threatened(user.id);

		ctx.begin_path();
		let _ = ctx.arc(x, y, USER_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if threatened { THREAT_FILL } else { "white" });
		ctx.fill();
		ctx.set_stroke_style_str(if threatened { THREAT_STROKE } else { SAFE_STROKE });
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str(if threatened { "white" } else { "#a8a29e" });
		ctx.set_font("bold 12px sans-serif");
		let _ = ctx.fill_text(if threatened { "!" } else { "\u{263A}" }, x, y);
	}
}
