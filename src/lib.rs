#[macro_use]
extern crate failure;
extern crate itertools;

use failure::Error;
use itertools::Itertools;
use std::str::FromStr;

pub mod dial;

use dial::Dial;

/// Which way a command rotates the dial.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The signed change one unit step makes to the dial position.
    pub fn delta(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// One line of input: a direction and a number of unit steps.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Command {
    pub direction: Direction,
    pub magnitude: usize,
}

impl FromStr for Command {
    type Err = Error;
    fn from_str(s: &str) -> Result<Command, Error> {
        let mut chars = s.chars();
        let marker = chars
            .next()
            .ok_or_else(|| format_err!("empty command line"))?;
        // Only 'L' turns left; any other marker turns right.
        let direction = if marker == 'L' {
            Direction::Left
        } else {
            Direction::Right
        };
        let magnitude = usize::from_str(chars.as_str())
            .map_err(|_| format_err!("bad magnitude in command: {:?}", s))?;
        Ok(Command {
            direction,
            magnitude,
        })
    }
}

/// Run every command in `input` over a fresh dial and return how many unit
/// steps land the dial exactly on position 0.
pub fn zero_crossings(input: &str) -> Result<usize, Error> {
    let mut dial = Dial::new();
    input
        .trim()
        .split('\n')
        .map(Command::from_str)
        .fold_results(0, |zeroes, command| {
            zeroes + dial.turn(command.direction.delta(), command.magnitude)
        })
}

#[test]
fn test_parse_command() {
    fn parse(s: &str) -> Command {
        Command::from_str(s).unwrap()
    }
    assert_eq!(
        parse("L15"),
        Command {
            direction: Direction::Left,
            magnitude: 15
        }
    );
    assert_eq!(
        parse("R42"),
        Command {
            direction: Direction::Right,
            magnitude: 42
        }
    );
    // Any marker other than 'L' turns right.
    assert_eq!(parse("X15").direction, Direction::Right);
    assert_eq!(parse("R0").magnitude, 0);

    assert!(Command::from_str("").is_err());
    assert!(Command::from_str("L").is_err());
    assert!(Command::from_str("Lfifteen").is_err());
    assert!(Command::from_str("L-5").is_err());
}

#[test]
fn test_zero_crossings() {
    // L50 reaches 0 on its 50th step; R100 comes all the way back around.
    assert_eq!(zero_crossings("L50\nR100").unwrap(), 2);
    assert_eq!(zero_crossings("R25").unwrap(), 0);
    // Passing 0 counts even when the command doesn't end there.
    assert_eq!(zero_crossings("L60").unwrap(), 1);
    // Magnitude 0 takes no steps.
    assert_eq!(zero_crossings("L0\nR0").unwrap(), 0);
    // Trailing newline from the input file is tolerated.
    assert_eq!(zero_crossings("L50\nR100\n").unwrap(), 2);

    assert!(zero_crossings("L50\n\nR100").is_err());
    assert!(zero_crossings("").is_err());
}

#[test]
fn test_zero_crossings_is_idempotent() {
    let input = "L50\nR100\nX3";
    assert_eq!(
        zero_crossings(input).unwrap(),
        zero_crossings(input).unwrap()
    );
}
