use leptos::prelude::*;
use log::warn;

use super::state::{PipelineCycle, STEP_PERIOD, Stage};
use super::timer::{BrowserScheduler, RepeatingTimer, Scheduler};

fn stage_glyph(stage: Stage, active: bool) -> &'static str {
	match stage {
		Stage::Question => "\u{1F464}",
		Stage::Retrieval => "\u{1F5C4}",
		Stage::Generation => "\u{2699}",
		Stage::Answer if active => "\u{1F4C4}",
		Stage::Answer => "...",
	}
}

/// Advances `cycle` every [`STEP_PERIOD`] until the current owner is cleaned
/// up. Returns whether the scheduler accepted the timer.
fn drive_cycle<S>(scheduler: S, cycle: RwSignal<PipelineCycle>) -> bool
where
	S: Scheduler + 'static,
	S::Handle: 'static,
{
	// `try_update` so a tick racing disposal of the signal is ignored.
	let timer = RepeatingTimer::start(scheduler, STEP_PERIOD, move || {
		cycle.try_update(|c| c.advance());
	});
	let running = timer.is_running();

	// Disposing the owner drops the stored timer, which cancels it.
	let timer = StoredValue::new_local(Some(timer));
	on_cleanup(move || {
		timer.try_update_value(|t| t.take());
	});
	running
}

/// Four-stage retrieval-augmented answer loop, advanced by a timer that
/// lives exactly as long as the component.
#[component]
pub fn RagPipelineDiagram() -> impl IntoView {
	let cycle = RwSignal::new(PipelineCycle::default());

	if !drive_cycle(BrowserScheduler, cycle) {
		warn!("rag pipeline: interval refused, diagram stays on the first stage");
	}

	let stages = Stage::ALL
		.iter()
		.map(|&stage| {
			let connector = (stage.index() > 0).then(|| {
				view! {
					<div
						class="stage-connector"
						class:lit=move || cycle.with(|c| c.connector_lit(stage))
					>
						"→"
					</div>
				}
			});
			let box_class = move || {
				cycle.with(|c| {
					format!("stage-box {} {}", stage.accent(), c.stage_state(stage).class())
				})
			};
			let glyph = move || cycle.with(|c| stage_glyph(stage, c.current() == stage));

			view! {
				{connector}
				<div class="stage">
					<div class=box_class>{glyph}</div>
					<span class="stage-caption">{stage.caption()}</span>
				</div>
			}
		})
		.collect_view();

	let dots = Stage::ALL
		.iter()
		.map(|&stage| {
			view! {
				<div
					class="progress-dot"
					class:current=move || cycle.with(|c| c.step() == stage.index())
				></div>
			}
		})
		.collect_view();

	view! {
		<div class="diagram diagram-rag">
			<h3 class="diagram-title">"RAG 運作流程模擬"</h3>
			<p class="diagram-lede">
				"機器人接收 Teams 提問，檢索 ISO 內部文件庫，並透過 LLM 生成準確回答。"
			</p>
			<div class="rag-track">{stages}</div>
			<div class="rag-progress">{dots}</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::super::timer::manual::ManualScheduler;
	use super::*;

	fn step(cycle: RwSignal<PipelineCycle>) -> Option<usize> {
		cycle.try_get_untracked().map(|c| c.step())
	}

	#[test]
	fn ticks_advance_the_signal() {
		let scheduler = ManualScheduler::default();
		let owner = Owner::new();
		let cycle = owner.with(|| {
			let cycle = RwSignal::new(PipelineCycle::default());
			assert!(drive_cycle(scheduler.clone(), cycle));
			cycle
		});

		let mut steps = vec![step(cycle)];
		for _ in 0..4 {
			scheduler.fire();
			steps.push(step(cycle));
		}
		assert_eq!(steps, vec![Some(0), Some(1), Some(2), Some(3), Some(0)]);
	}

	#[test]
	fn disposing_the_owner_cancels_the_timer() {
		let scheduler = ManualScheduler::default();
		let owner = Owner::new();
		let cycle = owner.with(|| {
			let cycle = RwSignal::new(PipelineCycle::default());
			drive_cycle(scheduler.clone(), cycle);
			cycle
		});

		scheduler.fire();
		assert_eq!(step(cycle), Some(1));

		drop(owner);
		assert_eq!(scheduler.live_count(), 0);

		// A tick the host queued before teardown must not panic or write.
		scheduler.fire_stale();
		scheduler.fire();
		assert_eq!(step(cycle), None);
	}
}
