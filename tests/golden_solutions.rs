use die_puzzle::{format_moves, Die, Error, Level, SolveOptions};

fn solve(text: &str) -> Vec<String> {
    Level::read(text)
        .unwrap()
        .solve()
        .iter()
        .map(|s| format_moves(s))
        .collect()
}

#[test]
fn one_step_to_the_exit() {
    assert_eq!(solve("be"), vec!["E"]);
}

#[test]
fn corridor_to_a_gate_needs_the_right_face_down() {
    // Canonical bottom is 6; rolling north shows 3 then 1.
    assert_eq!(solve("e\n1\n3\nb"), vec!["NNN"]);
    assert!(solve("e\n2\n3\nb").is_empty());
}

#[test]
fn exit_walled_in_by_closed_gates() {
    assert!(solve("b..\n.\\.\n\\e\\\n.\\.").is_empty());
}

#[test]
fn search_reports_statistics() {
    let level = Level::read("b.o\n\\ .\ne  ").unwrap();
    let report = level.solve_with(&SolveOptions::default());
    assert_eq!(report.shortest_length(), Some(6));
    assert!(report.states_explored > 6);
    assert!(!report.hit_ceiling);
}

#[test]
fn parse_errors_surface() {
    assert_eq!(Level::read("...").unwrap_err(), Error::MissingEntrance);
    assert!(matches!(
        Level::read("b?e").unwrap_err(),
        Error::UnknownTile { symbol: '?', .. }
    ));
    assert_eq!(Die::oriented(9, 0).unwrap_err(), Error::InvalidFace(9));
}
