//! Browser entry point: sets up logging and mounts the portfolio app.

// Dependencies are consumed by the library target.
#![allow(unused_crate_dependencies)]

use portfolio_diagrams::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
