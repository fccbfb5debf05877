//! Integration tests for scripny.
//!
//! - `fixtures` - Test helpers for creating temporary script trees
//! - `cli_tests` - CLI interface tests
//! - `config_tests` - Configuration loading and merging tests
//! - `flow_tests` - Discover, search and run a script end to end
//! - `snapshot_tests` - Output snapshot tests using insta

pub mod cli_tests;
pub mod config_tests;
pub mod fixtures;
pub mod flow_tests;
pub mod snapshot_tests;
