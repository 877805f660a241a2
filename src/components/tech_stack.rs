use leptos::prelude::*;

use crate::profile::{DEPENDENCIES, glyph};

const ACCENTS: &[&str] = &["neon-green", "neon-blue", "neon-amber", "neon-purple", "neon-green"];

/// Skills grouped as "dependencies" of the stack.
#[component]
pub fn TechStack() -> impl IntoView {
	let cards = DEPENDENCIES
		.iter()
		.enumerate()
		.map(|(i, dep)| {
			let accent = ACCENTS[i % ACCENTS.len()];
			let tag_class = format!(
				"px-2.5 py-1 text-[11px] bg-void border border-border rounded cursor-default text-gray-400 hover:border-{accent}/40 hover:text-{accent} hover:scale-110 transition-all duration-200"
			);
			view! {
				<div class="panel p-0 overflow-hidden card-in hover:scale-[1.03] transition-transform duration-200">
					<div class="flex items-center gap-3 px-4 py-3 border-b border-border bg-surface/50">
						<span class=format!("text-{}", accent)>{glyph(dep.icon)}</span>
						<h3 class="text-xs font-bold text-gray-300 uppercase tracking-wider">{dep.category}</h3>
						<span class="ml-auto text-[10px] text-muted">{format!("{} pkgs", dep.items.len())}</span>
					</div>
					<div class="p-4">
						<div class="flex flex-wrap gap-2">
							{dep
								.items
								.iter()
								.map(|item| view! { <span class=tag_class.clone()>{*item}</span> })
								.collect_view()}
						</div>
						<div class="mt-4 pt-3 border-t border-border/50">
							<code class="text-[10px] text-muted">
								<span class="text-neon-green">"$"</span>
								" install "
								<span class="text-gray-500">{dep.install_line()}</span>
							</code>
						</div>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="dependencies" class="relative py-20 px-4">
			<div class="max-w-5xl mx-auto">
				<div class="mb-10">
					<h2 class="text-2xl font-bold text-neon-green text-glow-green mb-2">"// dependencies"</h2>
					<p class="text-sm text-muted">"Core packages and runtime dependencies powering the stack."</p>
				</div>
				<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">{cards}</div>
			</div>
		</section>
	}
}
