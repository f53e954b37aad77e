use rusers_domain::machine::{parse_machines, Machine};

#[test]
fn test_display_without_room() {
    let machine = Machine::named("zeus");
    assert_eq!(machine.to_string(), "zeus");
}

#[test]
fn test_display_with_room() {
    let machine = Machine {
        name: "zeus".to_string(),
        room: Some("lab2".to_string()),
        ..Default::default()
    };
    assert_eq!(machine.to_string(), "zeus@lab2");
}

#[test]
fn test_equality_is_by_name_only() {
    let a = Machine {
        name: "zeus".to_string(),
        room: Some("lab2".to_string()),
        ..Default::default()
    };
    let b = Machine::named("zeus");

    assert_eq!(a, b);
}

#[test]
fn test_ordering_is_by_name() {
    let mut machines = vec![
        Machine::named("zeus"),
        Machine::named("apollo"),
        Machine::named("hermes"),
    ];
    machines.sort();

    let names: Vec<&str> = machines.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["apollo", "hermes", "zeus"]);
}

#[test]
fn test_parse_machines_file() {
    let contents = "\
# lab machines
zeus lab2 linux shared
apollo

hermes lab1
";
    let machines = parse_machines(contents);

    assert_eq!(machines.len(), 3);
    assert_eq!(machines[0].name, "zeus");
    assert_eq!(machines[0].room.as_deref(), Some("lab2"));
    assert_eq!(machines[0].os.as_deref(), Some("linux"));
    assert_eq!(machines[0].usage.as_deref(), Some("shared"));
    assert_eq!(machines[1].name, "apollo");
    assert_eq!(machines[1].room, None);
    assert_eq!(machines[2].name, "hermes");
    assert_eq!(machines[2].room.as_deref(), Some("lab1"));
}

#[test]
fn test_parse_skips_comments_and_blanks() {
    assert!(parse_machines("# only a comment\n\n   \n").is_empty());
}
