//! A `Dial` is a circular counter with 100 positions, numbered 0 through 99.

/// Number of positions on the dial.
pub const POSITIONS: i32 = 100;

/// The position the dial points at before any command is applied.
const START: i32 = 50;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dial {
    position: i32,
}

impl Dial {
    pub fn new() -> Dial {
        Dial { position: START }
    }

    /// The position the dial currently points at.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Rotate the dial one position; `delta` must be `1` or `-1`. Return
    /// true if the dial lands exactly on 0.
    pub fn step(&mut self, delta: i32) -> bool {
        // The offset keeps the operand non-negative when delta is -1.
        self.position = (self.position + delta + POSITIONS) % POSITIONS;
        self.position == 0
    }

    /// Rotate the dial `steps` positions one at a time, and return how many
    /// of those steps land on 0. The answer depends on every position
    /// visited, not just the net displacement, so each step is taken
    /// individually.
    pub fn turn(&mut self, delta: i32, steps: usize) -> usize {
        (0..steps).filter(|_| self.step(delta)).count()
    }
}

#[test]
fn test_step() {
    let mut dial = Dial::new();
    assert_eq!(dial.position(), 50);
    assert!(!dial.step(1));
    assert_eq!(dial.position(), 51);
    assert!(!dial.step(-1));
    assert_eq!(dial.position(), 50);
}

#[test]
fn test_step_wraps_through_zero() {
    let mut dial = Dial::new();
    // The 50th step left from 50 lands on 0; the next wraps to 99.
    assert_eq!(dial.turn(-1, 50), 1);
    assert_eq!(dial.position(), 0);
    assert!(!dial.step(-1));
    assert_eq!(dial.position(), 99);
}

#[test]
fn test_turn_counts_every_visit() {
    let mut dial = Dial::new();
    // Two full revolutions pass 0 twice and end back at 50.
    assert_eq!(dial.turn(1, 200), 2);
    assert_eq!(dial.position(), 50);
    // A turn of zero steps goes nowhere.
    assert_eq!(dial.turn(-1, 0), 0);
    assert_eq!(dial.position(), 50);
}
