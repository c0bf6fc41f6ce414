use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::{SURFACE_SIZE, SecurityMesh, node_at, to_surface};

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Clickable user nodes wired to security checks; a check lights up while
/// any node it guards is flagged.
#[component]
pub fn SecurityMeshDiagram() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mesh = RwSignal::new(SecurityMesh::default());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(SURFACE_SIZE as u32);
		canvas.set_height(SURFACE_SIZE as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("security mesh: 2d context unavailable");
			return;
		};
		mesh.with(|m| render::render(m, &ctx));
	});

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		// Bounding rect includes the border; the drawing starts inside it.
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = to_surface(
			(ev.client_x() as f64, ev.client_y() as f64),
			(rect.left(), rect.top()),
			(canvas.client_left() as f64, canvas.client_top() as f64),
		);

		if let Some(node) = node_at(x, y, canvas.client_width() as f64) {
			mesh.update(|m| m.toggle_threat(node));
			debug!(
				"security mesh: toggled node {}, active checks {:?}",
				node,
				mesh.with_untracked(|m| m.active_checks())
			);
		}
	};

	view! {
		<div class="diagram diagram-mesh">
			<h3 class="diagram-title">"互動演示：資安防護網"</h3>
			<p class="diagram-lede">
				"點擊圓形用戶節點模擬「社交工程攻擊」。觀察方形安全節點 (2FA/Passkey) 如何偵測異常並啟動防護。"
			</p>
			<canvas
				node_ref=canvas_ref
				class="mesh-canvas"
				on:click=on_click
				style="display: block; cursor: pointer;"
			/>
			<div class="mesh-legend">
				<span class="legend-item"><i class="swatch swatch-threat"></i>"遭受攻擊"</span>
				<span class="legend-item"><i class="swatch swatch-active"></i>"安全攔截"</span>
				<span class="legend-item"><i class="swatch swatch-idle"></i>"正常監控"</span>
			</div>
			<div class="mesh-status">{move || mesh.with(|m| m.status_line())}</div>
		</div>
	}
}
