use crate::profile::CommandItem;

/// What running a command does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandAction<'a> {
	/// Scroll to an in-page section, selector included (`#services`).
	Section(&'a str),
	/// Open in a new tab.
	External(&'a str),
}

impl<'a> CommandAction<'a> {
	pub fn from_target(target: &'a str) -> Self {
		if target.starts_with('#') {
			CommandAction::Section(target)
		} else {
			CommandAction::External(target)
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaletteState {
	pub open: bool,
	pub query: String,
	pub selected: usize,
}

impl PaletteState {
	fn reset(&mut self) {
		self.query.clear();
		self.selected = 0;
	}

	pub fn show(&mut self) {
		self.open = true;
		self.reset();
	}

	pub fn toggle(&mut self) {
		if self.open {
			self.close();
		} else {
			self.show();
		}
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
		self.selected = 0;
	}

	/// Commands whose label contains the query, ignoring case.
	pub fn filtered<'c>(&self, commands: &'c [CommandItem]) -> Vec<&'c CommandItem> {
		let needle = self.query.to_lowercase();
		commands
			.iter()
			.filter(|cmd| cmd.label.to_lowercase().contains(&needle))
			.collect()
	}

	pub fn select_next(&mut self, matches: usize) {
		self.selected = (self.selected + 1).min(matches.saturating_sub(1));
	}

	pub fn select_prev(&mut self) {
		self.selected = self.selected.saturating_sub(1);
	}

	pub fn hover(&mut self, index: usize) {
		self.selected = index;
	}

	pub fn selected<'c>(&self, commands: &'c [CommandItem]) -> Option<&'c CommandItem> {
		self.filtered(commands).get(self.selected).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::profile::COMMANDS;

	#[test]
	fn sections_and_links_are_told_apart() {
		assert_eq!(
			CommandAction::from_target("#services"),
			CommandAction::Section("#services")
		);
		assert_eq!(
			CommandAction::from_target("mailto:a@b.c"),
			CommandAction::External("mailto:a@b.c")
		);
		assert_eq!(
			CommandAction::from_target("https://github.com"),
			CommandAction::External("https://github.com")
		);
	}

	#[test]
	fn filter_is_case_insensitive_substring() {
		let mut state = PaletteState::default();
		assert_eq!(state.filtered(COMMANDS).len(), COMMANDS.len());

		state.set_query("JUMP");
		let labels: Vec<_> = state.filtered(COMMANDS).iter().map(|c| c.label).collect();
		assert_eq!(
			labels,
			["Jump to Services", "Jump to Runtime History", "Jump to Dependencies"]
		);

		state.set_query("nothing like this");
		assert!(state.filtered(COMMANDS).is_empty());
		assert!(state.selected(COMMANDS).is_none());
	}

	#[test]
	fn selection_is_clamped_to_matches() {
		let mut state = PaletteState::default();
		state.set_query("go to");
		let n = state.filtered(COMMANDS).len();
		assert_eq!(n, 3);

		for _ in 0..10 {
			state.select_next(n);
		}
		assert_eq!(state.selected, 2);
		assert_eq!(state.selected(COMMANDS).unwrap().label, "Go to LeetCode");

		for _ in 0..10 {
			state.select_prev();
		}
		assert_eq!(state.selected, 0);

		state.select_next(0);
		assert_eq!(state.selected, 0);
	}

	#[test]
	fn typing_resets_selection() {
		let mut state = PaletteState::default();
		state.hover(4);
		state.set_query("s");
		assert_eq!(state.selected, 0);
	}

	#[test]
	fn opening_starts_fresh() {
		let mut state = PaletteState::default();
		state.toggle();
		state.set_query("mail");
		state.hover(1);
		state.close();
		assert!(!state.open);

		state.toggle();
		assert!(state.open);
		assert!(state.query.is_empty());
		assert_eq!(state.selected, 0);

		state.toggle();
		assert!(!state.open);
	}
}
