use leptos::prelude::*;

use crate::profile::{PROFILE, glyph};

#[component]
pub fn Footer() -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();
	let links = [
		(PROFILE.links.github.to_string(), "GitHub", glyph("github"), "neon-green"),
		(PROFILE.links.linkedin.to_string(), "LinkedIn", glyph("linkedin"), "neon-blue"),
		(PROFILE.links.leetcode.to_string(), "LeetCode", glyph("code-2"), "neon-amber"),
		(PROFILE.mailto(), "Email", glyph("mail"), "neon-purple"),
	];

	view! {
		<footer class="relative border-t border-border bg-panel/50">
			<div class="max-w-5xl mx-auto px-4 py-10">
				<div class="flex flex-col md:flex-row items-center justify-between gap-6">
					<div class="flex items-center gap-3">
						<span class="text-neon-green">">_"</span>
						<div>
							<p class="text-sm font-bold text-gray-300">{PROFILE.name}</p>
							<p class="text-[10px] text-muted">{PROFILE.title}</p>
						</div>
					</div>

					<div class="flex items-center gap-4">
						{links
							.into_iter()
							.map(|(href, label, icon, accent)| {
								let external = !href.starts_with("mailto:");
								view! {
									<a
										href=href
										target=external.then_some("_blank")
										rel=external.then_some("noopener noreferrer")
										aria-label=label
										class=format!(
											"p-2 rounded-lg bg-surface border border-border text-muted text-xs hover:border-{accent}/40 hover:text-{accent} transition-all duration-200",
										)
									>
										{icon}
									</a>
								}
							})
							.collect_view()}
					</div>

					<div class="text-center md:text-right">
						<p class="text-[10px] text-muted">
							"Built with " <span class="text-neon-red">"♥"</span> " Rust + Leptos + WebAssembly"
						</p>
						<p class="text-[10px] text-muted/60 mt-1">
							{format!("© {} {} — All systems operational", year, PROFILE.name)}
						</p>
					</div>
				</div>
			</div>
		</footer>
	}
}
