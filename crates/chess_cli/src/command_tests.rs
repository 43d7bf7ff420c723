use super::*;

#[test]
fn test_parse_move() {
    let cmd = parse_command("move e2 e4").unwrap().unwrap();
    assert_eq!(
        cmd,
        Command::Move {
            from: Coordinate::new(4, 6).unwrap(),
            to: Coordinate::new(4, 4).unwrap(),
        }
    );
    assert_eq!(
        parse_command("  MOVE b8 c6 ").unwrap(),
        Some(Command::Move {
            from: "b8".parse().unwrap(),
            to: "c6".parse().unwrap(),
        })
    );
}

#[test]
fn test_parse_simple_commands() {
    assert_eq!(parse_command("start").unwrap(), Some(Command::Start));
    assert_eq!(parse_command("load 12").unwrap(), Some(Command::Load("12".into())));
    assert_eq!(parse_command("delete 3").unwrap(), Some(Command::Delete("3".into())));
    assert_eq!(parse_command("quit").unwrap(), Some(Command::End));
    assert_eq!(parse_command("   ").unwrap(), None);
}

#[test]
fn test_parse_errors() {
    assert!(parse_command("move e2").is_err());
    assert!(parse_command("move e2 z9").is_err());
    assert!(parse_command("load").is_err());
    assert!(parse_command("start now").is_err());
    assert!(parse_command("castle").is_err());
}
