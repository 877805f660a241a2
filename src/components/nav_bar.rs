use leptos::prelude::*;

use crate::profile::PROFILE;

const NAV_ITEMS: &[(&str, &str, &str)] = &[
	("services", "#services", "▤"),
	("concurrency", "#loadbalancer", "∿"),
	("runtime", "#runtime", ">_"),
	("deps", "#dependencies", "◍"),
];

#[component]
pub fn NavBar() -> impl IntoView {
	view! {
		<nav class="fixed top-0 left-0 right-0 z-40 bg-void/80 backdrop-blur-md border-b border-border/50 nav-in">
			<div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between">
				<a href="#" class="flex items-center gap-2 text-neon-green hover:text-neon-green/80 transition-colors">
					<span>"▦"</span>
					<span class="text-xs font-bold tracking-wider">{PROFILE.brand()}</span>
				</a>

				<div class="hidden sm:flex items-center gap-1">
					{NAV_ITEMS
						.iter()
						.map(|&(label, href, icon)| {
							view! {
								<a
									href=href
									class="flex items-center gap-1.5 px-3 py-1.5 text-[11px] text-muted hover:text-neon-green rounded transition-all duration-200 hover:bg-neon-green/5"
								>
									<span>{icon}</span>
									<span class="uppercase tracking-wider">{label}</span>
								</a>
							}
						})
						.collect_view()}
				</div>

				<div class="flex items-center gap-2 text-[10px] text-muted">
					<span class="text-neon-green">"⌔"</span>
					<span class="hidden sm:inline">"all systems nominal"</span>
					<div class="status-online" />
				</div>
			</div>
		</nav>
	}
}
