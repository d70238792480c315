use serde::Deserialize;

use mailbox_chess::{best_move, Board, Color, SearchConfig};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    placement: String,
    side: String,
}

fn side_to_move(side: &str) -> Color {
    match side {
        "white" => Color::White,
        "black" => Color::Black,
        other => panic!("unknown side {other:?}"),
    }
}

#[test]
fn mate_in_one_suite() {
    let data = include_str!("data/problems.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid problems.json");

    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let board: Board = problem
            .placement
            .parse()
            .unwrap_or_else(|e| panic!("bad placement in {}: {e}", problem.name));
        let mover = side_to_move(&problem.side);
        let defender = mover.opponent();

        let config = SearchConfig::depth(3);
        let next = best_move(&board, mover, &config)
            .unwrap_or_else(|| panic!("no move found for {}", problem.name));

        assert!(
            next.in_check(defender),
            "{}: chosen move does not give check\n{}",
            problem.name,
            next
        );
        assert!(
            next.legal_moves(defender).is_empty(),
            "{}: defender still has a reply\n{}",
            problem.name,
            next
        );
    }
}

#[test]
fn fixtures_are_well_formed() {
    let data = include_str!("data/problems.json");
    let set: ProblemSet = serde_json::from_str(data).expect("invalid problems.json");
    assert!(!set.problems.is_empty());
    for problem in &set.problems {
        let board: Board = problem.placement.parse().expect("placement parses");
        let mover = side_to_move(&problem.side);
        // The side to move must actually have options to solve with.
        assert!(!board.legal_moves(mover).is_empty(), "{}", problem.name);
    }
}
