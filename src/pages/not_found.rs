use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="min-h-screen flex flex-col items-center justify-center bg-void text-gray-200 font-mono grid-bg">
			<p class="text-neon-red text-sm mb-2">"bash: route: command not found"</p>
			<h1 class="text-4xl font-bold text-neon-green text-glow-green mb-6">"404"</h1>
			<a href="/" class="px-4 py-2 text-xs border border-neon-green text-neon-green rounded hover:bg-neon-green hover:text-void transition-all duration-200">
				"$ cd ~"
			</a>
		</div>
	}
}
