// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents = r#"
/// Environment variable: input file path when `--in` is not given.
pub const INCLUDE_TO_IGNORE_IN: &str = "INCLUDE_TO_IGNORE_IN";
/// Environment variable: output file path when `--out` is not given.
pub const INCLUDE_TO_IGNORE_OUT: &str = "INCLUDE_TO_IGNORE_OUT";
/// Environment variable: configures tracing log filter.
pub const INCLUDE_TO_IGNORE_LOG: &str = "INCLUDE_TO_IGNORE_LOG";
"#;

    fs::write(dest, contents).expect("failed to write env_names.rs");
}
