// Sun Oct 18 2026 - Alex

use colored::Colorize;

fn main() {
    if let Err(e) = fanout_fetch::ui::cli::run() {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}
