use anyhow::Result;
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    day3::init_tracing();
    let args = CLIArgs::parse();
    let sum = day3::part1(&args.input_path)?;
    println!("Part 1: {}", sum);

    Ok(())
}
