use std::f64::consts::PI;

use rand::RngCore;
use web_sys::CanvasRenderingContext2d;

use super::state::LoadBalancerSim;
use super::types::{Phase, Point, WorkerNode};
use crate::theme::{BORDER, MONO_FONT, MUTED, NEON_AMBER, NEON_BLUE, NEON_GREEN, NEON_RED, PANEL, VOID, with_alpha};

const BALANCER_SIZE: f64 = 28.0;
const WORKER_HALF: f64 = 20.0;
const BAR_W: f64 = 36.0;
const BAR_H: f64 = 4.0;

/// Bar colour for a worker at the given load fraction.
pub fn load_color(fraction: f64, base: &'static str) -> &'static str {
	if fraction > 0.8 {
		NEON_RED
	} else if fraction > 0.5 {
		NEON_AMBER
	} else {
		base
	}
}

fn worker_color<R: RngCore>(sim: &LoadBalancerSim<R>, idx: usize) -> &'static str {
	sim.workers.get(idx).map(|w| w.color).unwrap_or(NEON_GREEN)
}

/// Draw one frame, background to foreground.
pub fn render<R: RngCore>(sim: &LoadBalancerSim<R>, ctx: &CanvasRenderingContext2d) {
	let (w, h, dpr) = (sim.surface.width, sim.surface.height, sim.surface.dpr);
	ctx.save();
	let _ = ctx.scale(dpr, dpr);
	ctx.set_fill_style_str(VOID);
	ctx.fill_rect(0.0, 0.0, w, h);

	draw_links(sim, ctx);
	draw_balancer(sim.balancer(), ctx);
	for worker in &sim.workers {
		draw_worker(worker, ctx);
	}
	draw_particles(sim, ctx);
	ctx.restore();
}

fn line(ctx: &CanvasRenderingContext2d, from: Point, to: Point) {
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.stroke();
}

fn draw_links<R: RngCore>(sim: &LoadBalancerSim<R>, ctx: &CanvasRenderingContext2d) {
	let balancer = sim.balancer();
	ctx.set_line_width(1.0);
	ctx.set_stroke_style_str("rgba(57, 255, 20, 0.06)");
	for worker in &sim.workers {
		line(ctx, balancer, worker.pos);
	}
	ctx.set_stroke_style_str("rgba(0, 212, 255, 0.08)");
	line(ctx, Point::new(balancer.x, 0.0), balancer);
}

fn draw_balancer(at: Point, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(PANEL);
	ctx.set_stroke_style_str(NEON_GREEN);
	ctx.set_line_width(1.5);
	ctx.begin_path();
	for i in 0..6 {
		let angle = PI / 3.0 * i as f64 - PI / 6.0;
		let (px, py) = (at.x + BALANCER_SIZE * angle.cos(), at.y + BALANCER_SIZE * angle.sin());
		if i == 0 {
			ctx.move_to(px, py);
		} else {
			ctx.line_to(px, py);
		}
	}
	ctx.close_path();
	ctx.fill();
	ctx.stroke();

	ctx.set_shadow_color(NEON_GREEN);
	ctx.set_shadow_blur(15.0);
	ctx.stroke();
	ctx.set_shadow_blur(0.0);

	ctx.set_text_align("center");
	ctx.set_fill_style_str(NEON_GREEN);
	ctx.set_font(&format!("10px {}", MONO_FONT));
	let _ = ctx.fill_text("LB", at.x, at.y + 4.0);
	ctx.set_fill_style_str(MUTED);
	ctx.set_font(&format!("9px {}", MONO_FONT));
	let _ = ctx.fill_text("load-balancer", at.x, at.y - BALANCER_SIZE - 8.0);
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	ctx.line_to(x + w - r, y);
	ctx.quadratic_curve_to(x + w, y, x + w, y + r);
	ctx.line_to(x + w, y + h - r);
	ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
	ctx.line_to(x + r, y + h);
	ctx.quadratic_curve_to(x, y + h, x, y + h - r);
	ctx.line_to(x, y + r);
	ctx.quadratic_curve_to(x, y, x + r, y);
	ctx.close_path();
}

fn draw_worker(worker: &WorkerNode, ctx: &CanvasRenderingContext2d) {
	let Point { x, y } = worker.pos;
	let fraction = worker.load_fraction();

	ctx.set_fill_style_str(PANEL);
	ctx.set_stroke_style_str(worker.color);
	ctx.set_line_width(1.0);
	rounded_rect(ctx, x - WORKER_HALF, y - WORKER_HALF, WORKER_HALF * 2.0, WORKER_HALF * 2.0, 4.0);
	ctx.fill();
	ctx.stroke();

	if worker.load > 30.0 {
		ctx.set_shadow_color(worker.color);
		ctx.set_shadow_blur(worker.load / 5.0);
		ctx.stroke();
		ctx.set_shadow_blur(0.0);
	}

	ctx.set_text_align("center");
	ctx.set_fill_style_str(worker.color);
	ctx.set_font(&format!("9px {}", MONO_FONT));
	let _ = ctx.fill_text(&worker.label, x, y + 3.0);

	let (bar_x, bar_y) = (x - BAR_W / 2.0, y + WORKER_HALF + 8.0);
	ctx.set_fill_style_str(BORDER);
	ctx.fill_rect(bar_x, bar_y, BAR_W, BAR_H);
	ctx.set_fill_style_str(load_color(fraction, worker.color));
	ctx.fill_rect(bar_x, bar_y, BAR_W * fraction, BAR_H);

	ctx.set_fill_style_str(MUTED);
	ctx.set_font(&format!("8px {}", MONO_FONT));
	let _ = ctx.fill_text(&format!("{}%", worker.load.round()), x, bar_y + 14.0);
}

fn draw_particles<R: RngCore>(sim: &LoadBalancerSim<R>, ctx: &CanvasRenderingContext2d) {
	for p in &sim.particles {
		let color = match p.phase {
			Phase::ToBalancer => NEON_BLUE,
			Phase::ToServer | Phase::Done => worker_color(sim, p.worker),
		};

		let len = p.trail.len() as f64;
		for (i, t) in p.trail.iter().enumerate() {
			let alpha = i as f64 / len * 0.3 * p.opacity;
			ctx.set_fill_style_str(&with_alpha(color, alpha));
			ctx.begin_path();
			let _ = ctx.arc(t.x, t.y, p.radius * 0.6, 0.0, 2.0 * PI);
			ctx.fill();
		}

		ctx.set_global_alpha(p.opacity.clamp(0.0, 1.0));
		ctx.set_fill_style_str(color);
		ctx.set_shadow_color(color);
		ctx.set_shadow_blur(8.0);
		ctx.begin_path();
		let _ = ctx.arc(p.pos.x, p.pos.y, p.radius, 0.0, 2.0 * PI);
		ctx.fill();
		ctx.set_shadow_blur(0.0);
		ctx.set_global_alpha(1.0);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn load_bar_turns_amber_then_red() {
		assert_eq!(load_color(0.2, NEON_BLUE), NEON_BLUE);
		assert_eq!(load_color(0.5, NEON_BLUE), NEON_BLUE);
		assert_eq!(load_color(0.51, NEON_BLUE), NEON_AMBER);
		assert_eq!(load_color(0.81, NEON_BLUE), NEON_RED);
	}
}
