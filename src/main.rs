use clap::Parser;
use cluebot::cli::Args;
use cluebot::cli::Assistant;
use colored::Colorize;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cluebot::log();
    println!("{}", "-".repeat(41).magenta());
    println!("{}", "| Welcome to the Clue Solving Assistant |".magenta().bold());
    println!("{}", "-".repeat(41).magenta());
    Assistant::new(&args)?.run()
}
