use std::time::Duration;

/// How a boot line is styled once typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
	/// `$ ...`, shown behind a prompt.
	Command,
	/// `→ ...`
	Notice,
	/// Contains a `✓` that gets highlighted.
	Check,
	/// Box drawing around the banner.
	Banner,
	Plain,
}

impl LineKind {
	pub fn classify(line: &str) -> Self {
		if line.starts_with('$') {
			LineKind::Command
		} else if line.starts_with('→') {
			LineKind::Notice
		} else if line.contains('✓') {
			LineKind::Check
		} else if line.starts_with(['┌', '│', '└']) {
			LineKind::Banner
		} else {
			LineKind::Plain
		}
	}
}

/// Text of a command line without its `$ ` prefix.
pub fn command_text(line: &str) -> &str {
	match line.strip_prefix('$') {
		Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
		None => line,
	}
}

fn char_delay(line: &str) -> Duration {
	let ms = if line.starts_with('$') {
		40
	} else if line.starts_with(['│', '┌', '└', '→']) {
		8
	} else {
		25
	};
	Duration::from_millis(ms)
}

fn line_pause(line: &str) -> Duration {
	Duration::from_millis(if line.starts_with('$') { 400 } else { 80 })
}

/// Typewriter over a fixed script, one character per `advance`.
#[derive(Clone, Debug)]
pub struct BootSequence {
	script: &'static [&'static str],
	lines: Vec<String>,
	line: usize,
	chars: usize,
}

impl BootSequence {
	pub fn new(script: &'static [&'static str]) -> Self {
		Self {
			script,
			lines: Vec::with_capacity(script.len()),
			line: 0,
			chars: 0,
		}
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn is_typing(&self) -> bool {
		self.line < self.script.len()
	}

	/// Type the next character (or finish the current line) and return how
	/// long to wait before calling again. `None` once the script is exhausted.
	pub fn advance(&mut self) -> Option<Duration> {
		let text = *self.script.get(self.line)?;

		if text.is_empty() {
			self.lines.push(String::new());
			self.line += 1;
			self.chars = 0;
			return Some(Duration::ZERO);
		}

		match text.chars().nth(self.chars) {
			Some(c) => {
				if self.lines.len() <= self.line {
					self.lines.push(String::new());
				}
				self.lines[self.line].push(c);
				self.chars += 1;
				Some(char_delay(text))
			}
			None => {
				self.line += 1;
				self.chars = 0;
				Some(line_pause(text))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SCRIPT: &[&str] = &["$ ls", "", "ok ✓", "│box│"];

	fn run(seq: &mut BootSequence) -> Vec<Duration> {
		std::iter::from_fn(|| seq.advance()).collect()
	}

	#[test]
	fn classifies_lines() {
		assert_eq!(LineKind::classify("$ cat /etc/motd"), LineKind::Command);
		assert_eq!(LineKind::classify("→ Type 'help'"), LineKind::Notice);
		assert_eq!(LineKind::classify("Authenticating... ✓"), LineKind::Check);
		assert_eq!(LineKind::classify("┌───┐"), LineKind::Banner);
		assert_eq!(LineKind::classify("└───┘"), LineKind::Banner);
		assert_eq!(LineKind::classify("Loading profile..."), LineKind::Plain);
	}

	#[test]
	fn command_text_strips_prompt() {
		assert_eq!(command_text("$ ssh ahmed@portfolio.sys"), "ssh ahmed@portfolio.sys");
		assert_eq!(command_text("$"), "");
		assert_eq!(command_text("plain"), "plain");
	}

	#[test]
	fn types_the_whole_script() {
		let mut seq = BootSequence::new(SCRIPT);
		assert!(seq.is_typing());
		run(&mut seq);
		assert!(!seq.is_typing());
		assert_eq!(seq.lines(), SCRIPT);
		assert_eq!(seq.advance(), None);
	}

	#[test]
	fn lines_appear_one_character_at_a_time() {
		let mut seq = BootSequence::new(SCRIPT);
		seq.advance();
		assert_eq!(seq.lines(), ["$"]);
		seq.advance();
		assert_eq!(seq.lines(), ["$ "]);
	}

	#[test]
	fn delays_depend_on_line_kind() {
		let mut seq = BootSequence::new(SCRIPT);
		let delays = run(&mut seq);
		let ms: Vec<u64> = delays.iter().map(|d| d.as_millis() as u64).collect();

		// "$ ls": four characters at 40ms, then the command pause.
		assert_eq!(&ms[..5], &[40, 40, 40, 40, 400]);
		// Empty line is instant.
		assert_eq!(ms[5], 0);
		// "ok ✓": plain speed, short pause.
		assert_eq!(&ms[6..11], &[25, 25, 25, 25, 80]);
		// Box drawing types fast.
		assert_eq!(&ms[11..16], &[8, 8, 8, 8, 8]);
		assert_eq!(ms[16], 80);
		assert_eq!(ms.len(), 17);
	}

	#[test]
	fn multibyte_characters_are_typed_whole() {
		let mut seq = BootSequence::new(&["→✓"]);
		seq.advance();
		assert_eq!(seq.lines(), ["→"]);
		seq.advance();
		assert_eq!(seq.lines(), ["→✓"]);
	}
}
