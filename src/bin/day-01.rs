extern crate advent_of_code_2025 as aoc;
#[macro_use]
extern crate failure;

use aoc::zero_crossings;
use failure::Error;

fn main() -> Result<(), Error> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.txt".to_string());
    let input = std::fs::read_to_string(&path)
        .map_err(|err| format_err!("can't read {}: {}", path, err))?;

    println!("Answer: {}", zero_crossings(&input)?);

    Ok(())
}
