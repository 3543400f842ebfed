//! End-to-end rounds over in-memory console I/O.

use std::io::Cursor;

use rps_commit::game::session::{SessionEnd, EXIT_MESSAGE};
use rps_commit::game::table::CORNER_LABEL;
use rps_commit::{GameRng, GameSession, MoveCycle, MoveSet, Reveal, RoundResult};

fn play(moves: &[&str], seed: u8, script: &str) -> (rps_commit::game::SessionSummary, String) {
    let set = MoveSet::new(moves.iter().copied()).unwrap();
    let mut session = GameSession::new(set, GameRng::from_seed([seed; 32]));
    let mut out = Vec::new();
    let summary = session.run(Cursor::new(script), &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

fn field<'a>(text: &'a str, prefix: &str) -> Vec<&'a str> {
    text.lines()
        .filter_map(|l| l.split(prefix).nth(1))
        .collect()
}

#[test]
fn test_every_round_is_verifiable_and_correct() {
    let moves = ["Rock", "Paper", "Scissors", "Lizard", "Spock"];
    let script = "1\n2\n3\n4\n5\n3\n0\n";
    let (summary, text) = play(&moves, 77, script);

    assert_eq!(summary.rounds_played(), 6);
    assert_eq!(summary.end, SessionEnd::Exit);

    let digests = field(&text, "HMAC: ");
    let keys = field(&text, "Key: ");
    let players = field(&text, "Your move: ");
    let computers = field(&text, "Computer move: ");
    assert_eq!(keys.len(), 6);

    let cycle = MoveCycle::new(MoveSet::new(moves).unwrap());
    let results: Vec<&str> = text
        .lines()
        .filter(|l| {
            [
                RoundResult::ComputerWins.message(),
                RoundResult::PlayerWins.message(),
                RoundResult::Draw.message(),
            ]
            .contains(l)
        })
        .collect();
    assert_eq!(results.len(), 6);

    for round in 0..6 {
        let reveal = Reveal::from_base64(keys[round], computers[round]).unwrap();
        assert!(reveal.verify(digests[round]).is_ok());

        let expected = cycle.resolve(players[round], computers[round]).unwrap();
        assert_eq!(results[round], expected.message());
    }
}

#[test]
fn test_tampered_move_fails_verification() {
    let (_, text) = play(&["Rock", "Paper", "Scissors"], 5, "2\n0\n");

    let digest = field(&text, "HMAC: ")[0];
    let key = field(&text, "Key: ")[0];
    let computer = field(&text, "Computer move: ")[0];

    let other = ["Rock", "Paper", "Scissors"]
        .into_iter()
        .find(|m| *m != computer)
        .unwrap();

    assert!(Reveal::from_base64(key, computer).unwrap().verify(digest).is_ok());
    assert!(Reveal::from_base64(key, other).unwrap().verify(digest).is_err());
}

#[test]
fn test_help_then_play_uses_same_commitment() {
    let (summary, text) = play(&["a", "b", "c"], 9, "?\nnonsense\n2\n0\n");

    assert_eq!(summary.rounds_played(), 1);
    assert_eq!(text.matches(CORNER_LABEL).count(), 1);

    let digests = field(&text, "HMAC: ");
    // help, invalid, play all share the first round's commitment
    assert_eq!(digests.len(), 4);
    assert_eq!(digests[0], digests[1]);
    assert_eq!(digests[1], digests[2]);
    assert_ne!(digests[2], digests[3]);

    let key = field(&text, "Key: ")[0];
    let computer = field(&text, "Computer move: ")[0];
    assert!(Reveal::from_base64(key, computer).unwrap().verify(digests[0]).is_ok());
}

#[test]
fn test_input_closed_mid_game() {
    let (summary, text) = play(&["x", "y", "z"], 1, "1\n");

    assert_eq!(summary.rounds_played(), 1);
    assert_eq!(summary.end, SessionEnd::EndOfInput);
    assert!(text.trim_end().ends_with(EXIT_MESSAGE));
}
