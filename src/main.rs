use leptos::prelude::*;
use synapse_graph::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
