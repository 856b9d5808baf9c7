//! CLI domain: parse, route, output, and presentation only.
//! No merge logic here; the route hands off to the merge orchestrator.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::format_merge_report;
pub use route::RunContext;
