use leptos::prelude::*;

use crate::components::command_palette::CommandPalette;
use crate::components::footer::Footer;
use crate::components::load_balancer::LoadBalancerViz;
use crate::components::nav_bar::NavBar;
use crate::components::runtime_history::RuntimeHistory;
use crate::components::service_mesh::ServiceMesh;
use crate::components::tech_stack::TechStack;
use crate::components::terminal_hero::TerminalHero;

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
			<div class="min-h-screen bg-void text-gray-200 font-mono noise scanline-overlay">
				<NavBar />
				<TerminalHero />
				<LoadBalancerViz />
				<ServiceMesh />
				<RuntimeHistory />
				<TechStack />
				<Footer />
				<CommandPalette />
			</div>
		</ErrorBoundary>
	}
}
