use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, Window,
};

use super::render;
use super::state::{LoadBalancerSim, Surface};
use super::types::SimParams;

/// Share of the panel that must be on screen before frames are scheduled.
const VISIBILITY_THRESHOLD: f64 = 0.3;

type SharedSim = Rc<RefCell<Option<LoadBalancerSim>>>;

/// Handle over the `requestAnimationFrame` chain. At most one frame is pending.
#[derive(Clone, Default)]
struct AnimationLoop {
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
	fn start(&self) {
		if self.pending.get().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *self.callback.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => self.pending.set(Some(id)),
				Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
			}
		}
	}

	fn stop(&self) {
		if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
	}
}

/// Everything that must be released when the panel unmounts.
struct Mounted {
	window: Window,
	animation: AnimationLoop,
	observer: Option<IntersectionObserver>,
	_on_visibility: Closure<dyn FnMut(js_sys::Array)>,
	on_resize: Closure<dyn FnMut()>,
}

impl Mounted {
	fn teardown(self) {
		self.animation.stop();
		self.animation.callback.borrow_mut().take();
		if let Some(observer) = &self.observer {
			observer.disconnect();
		}
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		info!("load balancer viz unmounted");
	}
}

fn measure(window: &Window, frame: &HtmlElement, height: f64) -> Surface {
	let width = frame.client_width() as f64;
	let dpr = window.device_pixel_ratio();
	Surface {
		width: if width > 0.0 { width } else { 800.0 },
		height,
		dpr: if dpr > 0.0 { dpr } else { 1.0 },
	}
}

/// Backing store size in device pixels.
fn backing_size(surface: Surface) -> (u32, u32) {
	(
		(surface.width * surface.dpr).round() as u32,
		(surface.height * surface.dpr).round() as u32,
	)
}

/// Inline CSS size. The width is left to the wrapping frame so later resizes
/// can be measured from it.
fn css_size(surface: Surface) -> [(&'static str, String); 2] {
	[
		("width", "100%".to_string()),
		("height", format!("{}px", surface.height)),
	]
}

fn apply_surface(canvas: &HtmlCanvasElement, surface: Surface) {
	let (width, height) = backing_size(surface);
	canvas.set_width(width);
	canvas.set_height(height);
	let style = HtmlElement::style(canvas);
	for (property, value) in css_size(surface) {
		let _ = style.set_property(property, &value);
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

fn in_view(entry: &IntersectionObserverEntry) -> bool {
	entry.is_intersecting() && entry.intersection_ratio() >= VISIBILITY_THRESHOLD
}

/// Live canvas of requests fanning out from a balancer to a row of workers.
#[component]
pub fn LoadBalancerViz(
	#[prop(optional)] params: Option<SimParams>,
	#[prop(default = 400.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let frame_ref = NodeRef::<leptos::html::Div>::new();
	let live = RwSignal::new(false);
	let params = params.unwrap_or_default();

	Effect::new(move |_| {
		let (Some(canvas), Some(container), Some(frame)) =
			(canvas_ref.get(), container_ref.get(), frame_ref.get())
		else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};

		let surface = measure(&window, &frame, height);
		apply_surface(&canvas, surface);
		let Some(ctx) = context_2d(&canvas) else {
			warn!("2d context unavailable, load balancer viz disabled");
			return;
		};

		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let sim = LoadBalancerSim::new(params.clone(), surface, SmallRng::seed_from_u64(seed));
		render::render(&sim, &ctx);
		let state: SharedSim = Rc::new(RefCell::new(Some(sim)));
		info!(
			"load balancer viz mounted at {}x{} (dpr {})",
			surface.width, surface.height, surface.dpr
		);

		let animation = AnimationLoop::default();
		let (state_anim, animation_inner, ctx_anim) = (state.clone(), animation.clone(), ctx.clone());
		*animation.callback.borrow_mut() = Some(Closure::new(move || {
			animation_inner.pending.set(None);
			let keep_going = match *state_anim.borrow_mut() {
				Some(ref mut s) => {
					if s.frame() {
						render::render(s, &ctx_anim);
					} else {
						debug!("frame skipped while hidden");
					}
					s.is_visible()
				}
				None => false,
			};
			if keep_going {
				animation_inner.start();
			}
		}));

		let (state_resize, canvas_resize, ctx_resize) = (state.clone(), canvas.clone(), ctx.clone());
		let frame_resize = frame.clone();
		let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let surface = measure(&win, &frame_resize, height);
			apply_surface(&canvas_resize, surface);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(surface);
				render::render(s, &ctx_resize);
			}
			debug!("load balancer viz resized to {}x{}", surface.width, surface.height);
		});
		let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

		let (state_vis, animation_vis) = (state.clone(), animation.clone());
		let on_visibility: Closure<dyn FnMut(js_sys::Array)> =
			Closure::new(move |entries: js_sys::Array| {
				let Some(visible) = entries
					.iter()
					.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
					.last()
					.map(|entry| in_view(&entry))
				else {
					return;
				};
				if let Some(ref mut s) = *state_vis.borrow_mut() {
					if s.is_visible() == visible {
						return;
					}
					s.set_visible(visible);
				}
				info!("load balancer viz {}", if visible { "in view" } else { "out of view" });
				live.set(visible);
				if visible {
					animation_vis.start();
				} else {
					animation_vis.stop();
				}
			});

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
		let observer = match IntersectionObserver::new_with_options(
			on_visibility.as_ref().unchecked_ref(),
			&options,
		) {
			Ok(observer) => {
				observer.observe(&container);
				Some(observer)
			}
			Err(err) => {
				warn!("IntersectionObserver unavailable ({:?}), animating unconditionally", err);
				if let Some(ref mut s) = *state.borrow_mut() {
					s.set_visible(true);
				}
				live.set(true);
				animation.start();
				None
			}
		};

		let mounted = SendWrapper::new(Mounted {
			window,
			animation,
			observer,
			_on_visibility: on_visibility,
			on_resize,
		});
		on_cleanup(move || mounted.take().teardown());
	});

	view! {
		<section id="loadbalancer" class="relative py-20 px-4">
			<div class="max-w-5xl mx-auto">
				<div class="mb-8 text-center">
					<h2 class="text-2xl font-bold text-neon-green text-glow-green mb-2">
						"// concurrency_visualizer"
					</h2>
					<p class="text-sm text-muted max-w-lg mx-auto">
						"Live simulation of a load balancer distributing incoming requests
						across server nodes. Round-robin with load-aware routing."
					</p>
				</div>

				<div node_ref=container_ref class="panel p-1 overflow-hidden">
					<div class="flex items-center gap-2 px-4 py-2 border-b border-border">
						<div class="status-online" />
						<span class="text-[10px] text-muted">"NETWORK TOPOLOGY — LIVE"</span>
						<span class="ml-auto text-[10px] text-neon-green animate-pulse-glow">
							{move || if live.get() { "● streaming" } else { "○ paused" }}
						</span>
					</div>
					<div node_ref=frame_ref class="w-full">
						<canvas
							node_ref=canvas_ref
							class="w-full block"
							style=format!("height: {}px;", height)
						/>
					</div>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn surface(width: f64, dpr: f64) -> Surface {
		Surface {
			width,
			height: 400.0,
			dpr,
		}
	}

	#[test]
	fn backing_store_scales_by_device_pixel_ratio() {
		assert_eq!(backing_size(surface(1200.0, 1.0)), (1200, 400));
		assert_eq!(backing_size(surface(600.0, 2.0)), (1200, 800));
		assert_eq!(backing_size(surface(333.0, 1.5)), (500, 600));
	}

	#[test]
	fn css_width_never_pins_pixels() {
		// A pinned width would stop the frame from shrinking on later resizes.
		for width in [1200.0, 600.0, 320.0] {
			let css = css_size(surface(width, 2.0));
			assert_eq!(css[0], ("width", "100%".to_string()));
			assert_eq!(css[1], ("height", "400px".to_string()));
		}
	}
}
