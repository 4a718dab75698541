// tests/parser.rs
use glam::IVec2;
use mars_rover::{Direction, ParseError, Position, Rover, parse_instructions};
use pretty_assertions::assert_eq;

#[test]
fn test_single_rover() {
    let rovers = parse_instructions("1 1\n0 0 South\nM").unwrap();
    assert_eq!(
        rovers,
        vec![Rover::new(
            IVec2::new(1, 1),
            Position::new(0, 0, Direction::South),
            "M"
        )]
    );
}

#[test]
fn test_multiple_rovers_share_boundary() {
    let input = "5 5
1 2 North
LMLMLMLMM
3 3 West
LLLLRRRR";
    let rovers = parse_instructions(input).unwrap();
    assert_eq!(
        rovers,
        vec![
            Rover::new(
                IVec2::new(5, 5),
                Position::new(1, 2, Direction::North),
                "LMLMLMLMM"
            ),
            Rover::new(
                IVec2::new(5, 5),
                Position::new(3, 3, Direction::West),
                "LLLLRRRR"
            ),
        ]
    );
}

#[test]
fn test_crlf_and_trailing_newlines() {
    let rovers = parse_instructions("5 5\r\n1 2 North\r\nLM\r\n\n\n").unwrap();
    assert_eq!(rovers.len(), 1);
    assert_eq!(rovers[0].commands, "LM");
}

#[test]
fn test_boundary_only_yields_no_rovers() {
    assert!(parse_instructions("5 5").unwrap().is_empty());
}

#[test]
fn test_empty_input() {
    assert_eq!(parse_instructions(""), Err(ParseError::EmptyInput));
    assert_eq!(parse_instructions("\n\n"), Err(ParseError::EmptyInput));
}

#[test]
fn test_structural_errors() {
    assert_eq!(
        parse_instructions("5\n1 2 North\nM"),
        Err(ParseError::MissingBoundary("5".into()))
    );
    assert_eq!(
        parse_instructions("5 x\n1 2 North\nM"),
        Err(ParseError::InvalidBoundary("x".into()))
    );
    assert_eq!(
        parse_instructions("5 5\n1 North\nM"),
        Err(ParseError::MalformedRoverInit {
            line: 2,
            content: "1 North".into()
        })
    );
    assert_eq!(
        parse_instructions("1 1\n0 0 South"),
        Err(ParseError::MissingCommands { line: 3 })
    );
    assert_eq!(
        parse_instructions("1 1\n1 1 Northeasterly\nLLLMMMRRR"),
        Err(ParseError::UnknownDirectionString("Northeasterly".into()))
    );
}

#[test]
fn test_fields_are_separated_by_single_spaces() {
    assert_eq!(
        parse_instructions("5  5\n1 2 North\nM"),
        Err(ParseError::MissingBoundary("5  5".into()))
    );
    assert_eq!(
        parse_instructions("5 5\n1 2 North \nM"),
        Err(ParseError::MalformedRoverInit {
            line: 2,
            content: "1 2 North ".into()
        })
    );
}

#[test]
fn test_second_rover_missing_commands_aborts_batch() {
    assert_eq!(
        parse_instructions("5 5\n1 2 North\nM\n3 3 East"),
        Err(ParseError::MissingCommands { line: 5 })
    );
}

#[test]
fn test_out_of_range_values_are_left_to_validation() {
    // Structurally fine, so parsing succeeds; validation rejects it later.
    let rovers = parse_instructions("1 1\n2 1 North\nLLLMMMRRR").unwrap();
    assert!(rovers[0].valid().is_err());

    let rovers = parse_instructions("1 1\n0 0 South\nLRMX").unwrap();
    assert!(rovers[0].valid().is_err());
}
