// tests/rover_explore.rs
use glam::IVec2;
use mars_rover::{
    Direction, MovementError, Position, Rover, UnknownDirection, UnknownInstruction,
};

fn rover(bx: i32, by: i32, start: Position, commands: &str) -> Rover {
    Rover::new(IVec2::new(bx, by), start, commands)
}

#[test]
fn test_first_example_rover() {
    let mut r = rover(5, 5, Position::new(1, 2, Direction::North), "LMLMLMLMM");
    assert_eq!(r.explore(), Ok(()));
    assert_eq!(r.position, Position::new(1, 3, Direction::North));
}

#[test]
fn test_second_example_rover() {
    let mut r = rover(5, 5, Position::new(3, 3, Direction::East), "MMRMMRMRRM");
    assert_eq!(r.explore(), Ok(()));
    assert_eq!(r.position, Position::new(5, 1, Direction::East));
}

#[test]
fn test_diagonal_to_far_corner() {
    let mut r = rover(2, 2, Position::new(0, 0, Direction::North), "RMLMRMLMR");
    assert_eq!(r.explore(), Ok(()));
    assert_eq!(r.position, Position::new(2, 2, Direction::East));
}

#[test]
fn test_sweep_entire_perimeter() {
    let mut r = rover(
        5,
        5,
        Position::new(0, 5, Direction::South),
        "MMMMMLMMMMMLMMMMMLMMMMM",
    );
    assert_eq!(r.explore(), Ok(()));
    assert_eq!(r.position, Position::new(0, 5, Direction::West));
}

#[test]
fn test_turning_in_place() {
    let mut right = rover(2, 2, Position::new(0, 0, Direction::North), "RRRRR");
    assert_eq!(right.explore(), Ok(()));
    assert_eq!(right.position, Position::new(0, 0, Direction::East));

    let mut left = rover(2, 2, Position::new(0, 0, Direction::South), "LLLLL");
    assert_eq!(left.explore(), Ok(()));
    assert_eq!(left.position, Position::new(0, 0, Direction::East));
}

#[test]
fn test_boundary_errors_keep_last_valid_position() {
    let cases = [
        (Direction::North, MovementError::BoundaryNorth { x: 0, y: 1 }, (0, 1)),
        (Direction::East, MovementError::BoundaryEast { x: 1, y: 0 }, (1, 0)),
        (Direction::South, MovementError::BoundarySouth { x: 0, y: 0 }, (0, 0)),
        (Direction::West, MovementError::BoundaryWest { x: 0, y: 0 }, (0, 0)),
    ];

    for (direction, expected, (x, y)) in cases {
        let mut r = rover(1, 1, Position::new(0, 0, direction), "MM");
        assert_eq!(r.explore(), Err(expected), "facing {direction}");
        assert_eq!(r.position, Position::new(x, y, direction), "facing {direction}");
    }
}

#[test]
fn test_commands_after_failure_are_not_applied() {
    let mut r = rover(1, 1, Position::new(0, 0, Direction::North), "MMRM");
    assert!(r.explore().is_err());
    // The trailing "RM" never ran.
    assert_eq!(r.position, Position::new(0, 1, Direction::North));
}

#[test]
fn test_unknown_instruction_halts_after_prior_commands() {
    let mut r = rover(1, 1, Position::new(0, 0, Direction::East), "MX");
    assert_eq!(
        r.explore(),
        Err(MovementError::Instruction(UnknownInstruction {
            code: 'X' as u32
        }))
    );
    assert_eq!(r.position, Position::new(1, 0, Direction::East));
}

#[test]
fn test_unknown_direction_does_not_move() {
    for ordinal in [0u8, 255] {
        let start = Position::new(0, 0, Direction::from_ordinal(ordinal));
        for commands in ["MM", "LM", "RM"] {
            let mut r = rover(1, 1, start, commands);
            assert_eq!(
                r.explore(),
                Err(MovementError::Direction(UnknownDirection { ordinal })),
                "{commands} with ordinal {ordinal}"
            );
            assert_eq!(r.position, start);
        }
    }
}

#[test]
fn test_move_at_extreme_boundary_does_not_overflow() {
    let mut r = rover(
        i32::MAX,
        i32::MAX,
        Position::new(i32::MAX, i32::MAX, Direction::North),
        "M",
    );
    assert_eq!(
        r.explore(),
        Err(MovementError::BoundaryNorth {
            x: i32::MAX,
            y: i32::MAX
        })
    );
}
