//! Colour palette shared by the canvas renderers. Mirrors `tailwind.config.js`.

pub const VOID: &str = "#0a0a0a";
pub const PANEL: &str = "#111111";
pub const BORDER: &str = "#2a2a2a";
pub const MUTED: &str = "#6b7280";

pub const NEON_GREEN: &str = "#39ff14";
pub const NEON_BLUE: &str = "#00d4ff";
pub const NEON_AMBER: &str = "#ffb300";
pub const NEON_RED: &str = "#ff3e3e";
pub const NEON_PURPLE: &str = "#a855f7";

pub const MONO_FONT: &str = "JetBrains Mono, monospace";

/// Convert `#rrggbb` into an `rgba(...)` string with the given alpha.
///
/// Anything that is not a six digit hex colour is returned unchanged.
pub fn with_alpha(hex: &str, alpha: f64) -> String {
	let Some(digits) = hex.strip_prefix('#').filter(|d| d.len() == 6 && d.is_ascii()) else {
		return hex.to_string();
	};
	let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
	match (channel(0), channel(2), channel(4)) {
		(Some(r), Some(g), Some(b)) => {
			format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
		}
		_ => hex.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_colours_gain_alpha() {
		assert_eq!(with_alpha(NEON_GREEN, 0.5), "rgba(57, 255, 20, 0.5)");
		assert_eq!(with_alpha(NEON_BLUE, 2.0), "rgba(0, 212, 255, 1)");
	}

	#[test]
	fn non_hex_input_passes_through() {
		assert_eq!(with_alpha("white", 0.3), "white");
		assert_eq!(with_alpha("#zzzzzz", 0.3), "#zzzzzz");
		assert_eq!(with_alpha("#fff", 0.3), "#fff");
		assert_eq!(with_alpha("#€€", 0.3), "#€€");
	}
}
