//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use folio_fx::{enhance_page, init_logging};

fn main() {
	init_logging();
	enhance_page();
}
