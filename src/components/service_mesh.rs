use leptos::prelude::*;

use crate::profile::{SERVICES, Service, ServiceCategory, ServiceStatus, glyph};

/// Category tab of the service registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
	#[default]
	All,
	Only(ServiceCategory),
}

impl Filter {
	pub fn tabs() -> impl Iterator<Item = Filter> {
		std::iter::once(Filter::All).chain(ServiceCategory::ALL.into_iter().map(Filter::Only))
	}

	pub fn label(self) -> &'static str {
		match self {
			Filter::All => "all",
			Filter::Only(category) => category.as_str(),
		}
	}

	pub fn matches(self, service: &Service) -> bool {
		match self {
			Filter::All => true,
			Filter::Only(category) => service.category == category,
		}
	}

	pub fn apply(self, services: &'static [Service]) -> Vec<(usize, &'static Service)> {
		services
			.iter()
			.filter(|s| self.matches(s))
			.enumerate()
			.collect()
	}
}

/// Fake process id shown on each card.
pub fn pid(index: usize) -> usize {
	1000 + index * 137
}

fn status_badge(status: ServiceStatus) -> (&'static str, &'static str, &'static str) {
	match status {
		ServiceStatus::Online => ("status-online", "text-neon-green", "ONLINE"),
		ServiceStatus::Archived => ("status-archived", "text-muted", "ARCHIVED"),
	}
}

fn category_icon(category: ServiceCategory) -> &'static str {
	match category {
		ServiceCategory::Backend => glyph("server"),
		ServiceCategory::Fullstack => "∿",
		ServiceCategory::Systems => glyph("database"),
		ServiceCategory::Tools => glyph("package"),
	}
}

#[component]
fn ServiceCard(service: &'static Service, index: usize) -> impl IntoView {
	let expanded = RwSignal::new(false);
	let (dot, text, label) = status_badge(service.status);

	view! {
		<div class="panel p-0 overflow-hidden group card-in hover:scale-[1.02] transition-transform duration-200">
			<div class="flex items-center gap-2 px-4 py-3 border-b border-border bg-surface/50">
				<span class="text-neon-green opacity-60">{category_icon(service.category)}</span>
				<span class="text-[11px] font-bold text-gray-300 tracking-wide uppercase truncate">
					{service.name}
				</span>
				<div class="ml-auto flex items-center gap-2">
					<div class=dot />
					<span class=format!("text-[10px] {}", text)>{label}</span>
				</div>
			</div>

			<div class="px-4 py-3">
				<div class="flex items-center gap-4 mb-3 text-[10px] text-muted">
					<span>"PID: " <span class="text-gray-400">{pid(index)}</span></span>
					{(service.uptime != "N/A")
						.then(|| {
							view! {
								<span>"Uptime: " <span class="text-neon-green">{service.uptime}</span></span>
							}
						})}
					<span>"Type: " <span class="text-neon-blue">{service.category.as_str()}</span></span>
				</div>

				<p class="text-xs text-gray-400 leading-relaxed mb-3 line-clamp-2">{service.description}</p>

				<div class="flex flex-wrap gap-1.5 mb-3">
					{service
						.tech
						.iter()
						.map(|t| {
							view! {
								<span class="px-2 py-0.5 text-[10px] bg-void border border-border rounded text-gray-400 hover:border-neon-green/40 hover:text-neon-green transition-colors duration-200">
									{*t}
								</span>
							}
						})
						.collect_view()}
				</div>

				<Show when=move || expanded.get()>
					<div class="bg-void rounded p-3 mb-3 text-[10px] font-mono text-gray-500 border border-border fade-in">
						<div class="text-muted mb-1">"[LOG] Service started at container init"</div>
						<div>
							<span class="text-neon-green">"INFO"</span>
							" "
							{service.description}
						</div>
						<div class="mt-1">
							<span class="text-neon-blue">"DEPS"</span>
							" "
							{service.tech.join(" → ")}
						</div>
						<div class="mt-1">
							<span class="text-neon-amber">"STATUS"</span>
							" "
							{format!("{} | Uptime {}", label, service.uptime)}
						</div>
					</div>
				</Show>

				<div class="flex items-center gap-2">
					<button
						on:click=move |_| expanded.update(|e| *e = !*e)
						class="flex items-center gap-1 px-3 py-1.5 text-[10px] border border-border rounded text-muted hover:border-neon-green/40 hover:text-neon-green transition-all duration-200"
					>
						{move || if expanded.get() { "▴ Hide Logs" } else { "▾ View Logs" }}
					</button>
					{service
						.repo
						.map(|repo| {
							view! {
								<a
									href=repo
									target="_blank"
									rel="noopener noreferrer"
									class="flex items-center gap-1 px-3 py-1.5 text-[10px] border border-border rounded text-muted hover:border-neon-blue/40 hover:text-neon-blue transition-all duration-200"
								>
									"↗ Inspect Source"
								</a>
							}
						})}
				</div>
			</div>
		</div>
	}
}

/// Project registry with category tabs.
#[component]
pub fn ServiceMesh() -> impl IntoView {
	let filter = RwSignal::new(Filter::All);

	view! {
		<section id="services" class="relative py-20 px-4">
			<div class="max-w-6xl mx-auto">
				<div class="mb-8">
					<h2 class="text-2xl font-bold text-neon-green text-glow-green mb-2">"// service_registry"</h2>
					<p class="text-sm text-muted">
						"Deployed microservices and engineering projects. Status monitored in real time."
					</p>
				</div>

				<div class="flex flex-wrap gap-2 mb-8">
					{Filter::tabs()
						.map(|tab| {
							view! {
								<button
									on:click=move |_| filter.set(tab)
									class=move || {
										if filter.get() == tab {
											"px-3 py-1.5 text-[11px] rounded border transition-all duration-200 uppercase tracking-wider border-neon-green text-neon-green bg-neon-green/5 glow-green"
										} else {
											"px-3 py-1.5 text-[11px] rounded border transition-all duration-200 uppercase tracking-wider border-border text-muted hover:border-gray-500"
										}
									}
								>
									{tab.label()}
								</button>
							}
						})
						.collect_view()}
				</div>

				<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
					<For
						each=move || filter.get().apply(SERVICES)
						key=|(i, service)| (*i, service.name)
						children=|(i, service)| view! { <ServiceCard service=service index=i /> }
					/>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tabs_start_with_all() {
		let labels: Vec<_> = Filter::tabs().map(Filter::label).collect();
		assert_eq!(labels, ["all", "backend", "fullstack", "systems", "tools"]);
	}

	#[test]
	fn filter_keeps_matching_services_in_order() {
		assert_eq!(Filter::All.apply(SERVICES).len(), SERVICES.len());

		let systems = Filter::Only(ServiceCategory::Systems).apply(SERVICES);
		let names: Vec<_> = systems.iter().map(|(_, s)| s.name).collect();
		assert_eq!(names, ["Computational Wave Lab", "Redis Clone", "Smart Home Controller"]);
		// Cards are numbered within the filtered view.
		let indices: Vec<_> = systems.iter().map(|(i, _)| *i).collect();
		assert_eq!(indices, [0, 1, 2]);
	}

	#[test]
	fn registry_shows_online_and_archived_badges() {
		let labels: Vec<_> = SERVICES.iter().map(|s| status_badge(s.status).2).collect();
		assert!(labels.iter().all(|l| *l == "ONLINE" || *l == "ARCHIVED"));
		assert_eq!(labels.last(), Some(&"ARCHIVED"));
		assert_eq!(status_badge(ServiceStatus::Online).0, "status-online");
	}

	#[test]
	fn pids_step_by_137() {
		assert_eq!(pid(0), 1000);
		assert_eq!(pid(3), 1411);
	}
}
