use anyhow::{Context, Result};
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    day3::init_tracing();
    let args = CLIArgs::parse();
    let part1_sum = day3::part1(&args.input_path).with_context(|| {
        format!(
            "Failed to solve part 1 with given file({}).",
            args.input_path.display()
        )
    })?;
    let part2_sum = day3::part2(&args.input_path).with_context(|| {
        format!(
            "Failed to solve part 2 with given file({}).",
            args.input_path.display()
        )
    })?;
    println!("Part 1: {}", part1_sum);
    println!("Part 2: {}", part2_sum);

    Ok(())
}
