use anyhow::Result;
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    day3::init_tracing();
    let args = CLIArgs::parse();
    let sum = day3::part2(&args.input_path)?;
    println!("Part 2: {}", sum);

    Ok(())
}
