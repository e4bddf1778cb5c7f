// SPDX-License-Identifier: MIT
// Project: rimtool
// File: main.rs

use rimtool::rim::app;

fn main() {
	std::process::exit(app::run());
}
