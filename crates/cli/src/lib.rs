//! Converts include patterns into gitignore-style ignore rules.
//!
//! ```
//! use include_to_ignore::{generate, parse};
//!
//! let patterns = parse("+ src/lib/core.ts\n");
//! let rules: Vec<String> = generate(&patterns).iter().map(|r| r.to_string()).collect();
//! assert_eq!(rules, ["*", "!**/src", "src/*", "!src/lib", "src/lib/*", "!src/lib/core.ts"]);
//! ```

pub mod cli;
pub mod convert;
pub mod env;
pub mod error;
pub mod output;
pub mod parser;
pub mod rules;

pub use cli::Cli;
pub use convert::{ConvertOptions, Outcome, convert};
pub use error::{Error, ExitCode, Result};
pub use output::render;
pub use parser::{IncludePattern, PathSegments, parse, parse_lines};
pub use rules::{Rule, RuleSet, generate, generate_strict};
