// Sun Oct 18 2026 - Alex

pub mod cli;
pub mod report;

pub use cli::{Args, CommandHandler};
pub use report::ReportPrinter;
