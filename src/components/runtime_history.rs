use leptos::prelude::*;

use crate::profile::{CERTIFICATIONS, RUNTIME_HISTORY, RunStatus};

fn badge_class(status: RunStatus) -> &'static str {
	match status {
		RunStatus::Completed => "text-neon-blue border-neon-blue/30 bg-neon-blue/5",
	}
}

/// Experience timeline followed by certifications.
#[component]
pub fn RuntimeHistory() -> impl IntoView {
	let entries = RUNTIME_HISTORY
		.iter()
		.map(|entry| {
			view! {
				<div class="relative pl-12 pb-10 last:pb-0 group card-in">
					<div class="absolute left-[11px] top-1 w-[10px] h-[10px] rounded-full bg-surface border-2 border-neon-green group-hover:bg-neon-green transition-colors duration-300" />
					<div class="panel p-4 hover:border-neon-green/30 transition-all duration-300">
						<div class="flex flex-wrap items-center gap-3 mb-3">
							<span class="text-neon-green opacity-60">">_"</span>
							<h3 class="text-sm font-bold text-gray-200">{entry.role}</h3>
							<span class=format!(
								"px-2 py-0.5 text-[10px] border rounded uppercase tracking-wider {}",
								badge_class(entry.status),
							)>{entry.status.label()}</span>
						</div>
						<div class="flex flex-wrap items-center gap-4 mb-3 text-[11px] text-muted">
							<span>{format!("⌖ {} — {}", entry.org, entry.location)}</span>
							<span>{format!("◷ {}", entry.period)}</span>
						</div>
						<ul class="space-y-1.5">
							{entry
								.highlights
								.iter()
								.map(|h| {
									view! {
										<li class="flex items-start gap-2 text-xs text-gray-400">
											<span class="text-neon-green/50 flex-shrink-0">"›"</span>
											{*h}
										</li>
									}
								})
								.collect_view()}
						</ul>
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="runtime" class="relative py-20 px-4">
			<div class="max-w-4xl mx-auto">
				<div class="mb-10">
					<h2 class="text-2xl font-bold text-neon-green text-glow-green mb-2">"// runtime_history"</h2>
					<p class="text-sm text-muted">
						"Process execution logs — professional runtime entries with timestamps and status codes."
					</p>
				</div>

				<div class="relative">
					<div class="absolute left-4 top-0 bottom-0 w-px bg-border" />
					{entries}
				</div>

				<div class="mt-16">
					<h3 class="text-lg font-bold text-neon-amber text-glow-amber mb-4">"// verified_certificates"</h3>
					<div class="flex flex-wrap gap-2">
						{CERTIFICATIONS
							.iter()
							.map(|cert| {
								view! {
									<span class="px-3 py-1.5 text-[11px] bg-surface border border-border rounded text-gray-400 hover:border-neon-amber/40 hover:text-neon-amber transition-all duration-200">
										{*cert}
									</span>
								}
							})
							.collect_view()}
					</div>
				</div>
			</div>
		</section>
	}
}
