use leptos::prelude::*;

use super::boot::{BootSequence, LineKind, command_text};
use crate::profile::PROFILE;

/// Type one more character, then schedule the next one. Stops on its own once
/// the script is done or the component has been disposed.
fn tick(boot: RwSignal<BootSequence>) {
	let Some(Some(delay)) = boot.try_update(|b| b.advance()) else {
		return;
	};
	set_timeout(move || tick(boot), delay);
}

fn render_line(line: &str) -> AnyView {
	match LineKind::classify(line) {
		LineKind::Command => view! {
			<span>
				<span class="text-neon-green">"❯"</span>
				" "
				<span class="text-neon-blue">{command_text(line).to_string()}</span>
			</span>
		}
		.into_any(),
		LineKind::Notice => view! { <span class="text-neon-amber">{line.to_string()}</span> }.into_any(),
		LineKind::Check => view! {
			<span>
				{line.replacen('✓', "", 1)}
				<span class="text-neon-green">"✓"</span>
			</span>
		}
		.into_any(),
		LineKind::Banner => {
			view! { <span class="text-neon-green text-glow-green">{line.to_string()}</span> }.into_any()
		}
		LineKind::Plain => view! { <span class="text-gray-400">{line.to_string()}</span> }.into_any(),
	}
}

#[component]
pub fn TerminalHero() -> impl IntoView {
	let boot = RwSignal::new(BootSequence::new(PROFILE.boot_intro));
	let terminal_ref = NodeRef::<leptos::html::Div>::new();
	let typing = move || boot.with(BootSequence::is_typing);

	Effect::new(move |_| tick(boot));

	// Keep the newest line in view.
	Effect::new(move |_| {
		boot.track();
		if let Some(el) = terminal_ref.get() {
			el.set_scroll_top(el.scroll_height());
		}
	});

	view! {
		<section
			class="relative min-h-screen flex items-center justify-center px-4 py-20 grid-bg"
			aria-label="Introduction"
		>
			<h1 class="sr-only">
				{format!("{} — {}", PROFILE.name, PROFILE.title)}
			</h1>
			<div class="absolute inset-0 bg-gradient-to-b from-void via-transparent to-void pointer-events-none" />

			<div class="relative w-full max-w-3xl fade-in">
				<div class="panel overflow-hidden">
					<div class="flex items-center gap-2 px-4 py-3 bg-surface border-b border-border">
						<div class="flex gap-2">
							<div class="w-3 h-3 rounded-full bg-neon-red opacity-80" />
							<div class="w-3 h-3 rounded-full bg-neon-amber opacity-80" />
							<div class="w-3 h-3 rounded-full bg-neon-green opacity-80" />
						</div>
						<span class="ml-3 text-xs text-muted font-mono">
							"ahmed@portfolio ~ /home/ahmed"
						</span>
						<div class="ml-auto flex items-center gap-2">
							<span class="text-[10px] text-muted">"zsh"</span>
							<div class="status-online" />
						</div>
					</div>

					<div
						node_ref=terminal_ref
						class="p-6 min-h-[380px] max-h-[500px] overflow-y-auto font-mono text-sm leading-relaxed"
					>
						{move || {
							boot.with(|b| {
								b.lines()
									.iter()
									.map(|line| view! { <div class="whitespace-pre">{render_line(line)}</div> })
									.collect_view()
							})
						}}
						<Show when=typing>
							<span class="inline-block w-2 h-4 bg-neon-green animate-blink ml-0.5" />
						</Show>
						<Show when=move || !typing()>
							<div class="mt-6 flex flex-wrap gap-3 fade-in">
								<a
									href=PROFILE.links.github
									target="_blank"
									rel="noopener noreferrer"
									class="px-4 py-2 text-xs border border-neon-green text-neon-green rounded hover:bg-neon-green hover:text-void transition-all duration-200 glow-green"
								>
									"$ open github"
								</a>
								<a
									href=PROFILE.links.linkedin
									target="_blank"
									rel="noopener noreferrer"
									class="px-4 py-2 text-xs border border-neon-blue text-neon-blue rounded hover:bg-neon-blue hover:text-void transition-all duration-200 glow-blue"
								>
									"$ open linkedin"
								</a>
								<a
									href=PROFILE.mailto()
									class="px-4 py-2 text-xs border border-neon-amber text-neon-amber rounded hover:bg-neon-amber hover:text-void transition-all duration-200 glow-amber"
								>
									"$ send mail"
								</a>
							</div>
						</Show>
					</div>
				</div>

				<Show when=move || !typing()>
					<div class="mt-8 text-center fade-in">
						<div class="text-muted text-xs animate-float">"↓ scroll to explore system ↓"</div>
					</div>
				</Show>
			</div>
		</section>
	}
}
