use leptos::prelude::*;

use crate::components::efficiency_chart::WorkflowEfficiencyChart;
use crate::components::rag_pipeline::RagPipelineDiagram;
use crate::components::security_mesh::SecurityMeshDiagram;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="projects">
				<section id="security" class="project">
					<h2>"資安意識與雙因子驗證"</h2>
					<SecurityMeshDiagram />
				</section>
				<section id="rag" class="project">
					<h2>"ISO 文件問答機器人"</h2>
					<RagPipelineDiagram />
				</section>
				<section id="workflow" class="project">
					<h2>"表單數位化"</h2>
					<WorkflowEfficiencyChart />
				</section>
			</main>
		</ErrorBoundary>
	}
}
