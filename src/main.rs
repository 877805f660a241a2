use leptos::prelude::*;
use portfolio_sys::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
