use leptos::prelude::*;
use log::debug;

use super::state::{EfficiencyChart, Role, format_minutes};

/// Paper vs digital time spent, per role. Lower is better.
#[component]
pub fn WorkflowEfficiencyChart() -> impl IntoView {
	let chart = RwSignal::new(EfficiencyChart::default());

	let role_buttons = Role::ALL
		.iter()
		.map(|&role| {
			view! {
				<button
					class="role-button"
					class:selected=move || chart.with(|c| c.role() == role)
					on:click=move |_| {
						chart.update(|c| c.select_role(role));
						debug!("efficiency chart: selected {:?}", role);
					}
				>
					{role.button_label()}
				</button>
			}
		})
		.collect_view();

	let before_height = move || format!("height: {}%;", chart.with(|c| c.bar_heights().0));
	let after_height = move || format!("height: {}%;", chart.with(|c| c.bar_heights().1));

	view! {
		<div class="diagram diagram-chart">
			<div class="chart-copy">
				<h3 class="diagram-title">"數位化效益分析"</h3>
				<p class="diagram-lede">
					"系統上線後，"
					{move || chart.with(|c| c.current().label)}
					"顯著下降，每次節省 "
					{move || chart.with(|c| format_minutes(c.minutes_saved()))}
					"。全公司每日總計節省約 84 分鐘工時。"
				</p>
				<div class="role-buttons">{role_buttons}</div>
				<div class="chart-note">"LOWER IS BETTER (TIME SPENT)"</div>
			</div>

			<div class="chart-plot">
				<div class="bar-column">
					<div class="bar-slot">
						<div class="bar-value">
							{move || chart.with(|c| format_minutes(c.current().before))}
						</div>
						<div class="bar bar-before" style=before_height></div>
					</div>
					<div class="bar-caption">"紙本作業"</div>
				</div>
				<div class="bar-column">
					<div class="bar-slot">
						<div class="bar-value bar-value-after">
							{move || chart.with(|c| format_minutes(c.current().after))}
						</div>
						<div class="bar bar-after" style=after_height></div>
					</div>
					<div class="bar-caption bar-caption-after">"數位系統"</div>
				</div>
			</div>
		</div>
	}
}
