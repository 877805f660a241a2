use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};
use web_sys::{KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};

use super::palette::{CommandAction, PaletteState};
use crate::profile::{COMMANDS, CommandItem, glyph};

fn execute(cmd: &CommandItem) {
	debug!("command palette: {}", cmd.label);
	let Some(window) = web_sys::window() else {
		return;
	};
	match CommandAction::from_target(cmd.target) {
		CommandAction::Section(selector) => {
			let target = window
				.document()
				.and_then(|doc| doc.query_selector(selector).ok().flatten());
			let Some(el) = target else {
				warn!("no section matches {}", selector);
				return;
			};
			let options = ScrollIntoViewOptions::new();
			options.set_behavior(ScrollBehavior::Smooth);
			el.scroll_into_view_with_scroll_into_view_options(&options);
		}
		CommandAction::External(url) => {
			if let Err(err) = window.open_with_url_and_target(url, "_blank") {
				warn!("could not open {}: {:?}", url, err);
			}
		}
	}
}

/// Ctrl/⌘+P palette of shortcuts to sections and profile links.
#[component]
pub fn CommandPalette() -> impl IntoView {
	let state = RwSignal::new(PaletteState::default());
	let input_ref = NodeRef::<leptos::html::Input>::new();
	let is_open = Memo::new(move |_| state.with(|s| s.open));
	let query = Memo::new(move |_| state.with(|s| s.query.clone()));
	let selected = Memo::new(move |_| state.with(|s| s.selected));

	let handle = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
		if (ev.meta_key() || ev.ctrl_key()) && ev.key().eq_ignore_ascii_case("p") {
			ev.prevent_default();
			state.update(PaletteState::toggle);
		}
		if ev.key() == "Escape" {
			state.update(PaletteState::close);
		}
	});
	on_cleanup(move || handle.remove());

	Effect::new(move |_| {
		if is_open.get() {
			set_timeout(
				move || {
					if let Some(input) = input_ref.get_untracked() {
						let _ = input.focus();
					}
				},
				Duration::from_millis(100),
			);
		}
	});

	let run = move |cmd: &CommandItem| {
		execute(cmd);
		state.update(PaletteState::close);
	};

	let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
		"ArrowDown" => {
			ev.prevent_default();
			state.update(|s| {
				let n = s.filtered(COMMANDS).len();
				s.select_next(n);
			});
		}
		"ArrowUp" => {
			ev.prevent_default();
			state.update(PaletteState::select_prev);
		}
		"Enter" => {
			ev.prevent_default();
			if let Some(cmd) = state.with_untracked(|s| s.selected(COMMANDS)) {
				run(cmd);
			}
		}
		_ => {}
	};

	let results = move || {
		query.track();
		let matches = state.with_untracked(|s| s.filtered(COMMANDS));
		if matches.is_empty() {
			return view! {
				<div class="px-4 py-8 text-center text-muted text-xs">
					{format!("No commands match \"{}\"", query.get_untracked())}
				</div>
			}
			.into_any();
		}
		matches
			.into_iter()
			.enumerate()
			.map(|(i, cmd)| {
				let active = move || selected.get() == i;
				view! {
					<button
						on:click=move |_| run(cmd)
						on:mouseenter=move |_| state.update(|s| s.hover(i))
						class=move || {
							if active() {
								"w-full flex items-center gap-3 px-4 py-2.5 text-left transition-colors duration-100 bg-neon-green/5 text-neon-green"
							} else {
								"w-full flex items-center gap-3 px-4 py-2.5 text-left transition-colors duration-100 text-gray-400 hover:bg-surface"
							}
						}
					>
						<span class=move || if active() { "w-5 text-neon-green" } else { "w-5 text-muted" }>
							{glyph(cmd.icon)}
						</span>
						<span class="flex-1 text-xs font-mono">{cmd.label}</span>
						<kbd class="text-[10px] text-muted px-1.5 py-0.5 bg-void rounded border border-border">
							{cmd.shortcut}
						</kbd>
					</button>
				}
			})
			.collect_view()
			.into_any()
	};

	view! {
		<button
			on:click=move |_| state.update(PaletteState::show)
			class="fixed bottom-6 right-6 z-40 flex items-center gap-2 px-4 py-2 bg-surface border border-border rounded-lg text-xs text-muted hover:border-neon-green/40 hover:text-neon-green transition-all duration-200 group fade-in-late"
		>
			<span>"⌕"</span>
			<span class="hidden sm:inline">"Command Palette"</span>
			<kbd class="hidden sm:inline-flex items-center gap-0.5 px-1.5 py-0.5 bg-void rounded text-[10px] border border-border group-hover:border-neon-green/30">
				"Ctrl+P"
			</kbd>
		</button>

		<Show when=move || is_open.get()>
			<div
				class="fixed inset-0 z-50 bg-black/60 backdrop-blur-sm fade-in"
				on:click=move |_| state.update(PaletteState::close)
			/>
			<div class="fixed top-[20%] left-1/2 -translate-x-1/2 z-50 w-[90%] max-w-lg palette-in">
				<div class="bg-panel border border-border rounded-xl overflow-hidden shadow-2xl shadow-black/50">
					<div class="flex items-center gap-3 px-4 py-3 border-b border-border">
						<span class="text-muted flex-shrink-0">"⌕"</span>
						<input
							node_ref=input_ref
							prop:value=move || query.get()
							on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
							on:keydown=on_keydown
							placeholder="Type a command..."
							class="flex-1 bg-transparent text-sm text-gray-200 outline-none placeholder:text-muted font-mono"
						/>
						<button
							on:click=move |_| state.update(PaletteState::close)
							class="text-muted hover:text-gray-300 transition-colors"
						>
							"✕"
						</button>
					</div>

					<div class="max-h-64 overflow-y-auto py-2">{results}</div>

					<div class="px-4 py-2 border-t border-border flex items-center gap-4 text-[10px] text-muted">
						<span>"↑↓ navigate"</span>
						<span>"↵ select"</span>
						<span>"esc close"</span>
					</div>
				</div>
			</div>
		</Show>
	}
}
