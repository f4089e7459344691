#![no_main]

use arbitrary::Arbitrary;
use draughts::{Diagram, Game, Move};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data<'a> {
    candidate: Move,
    diagram: &'a [u8],
}

fuzz_target!(|data: Data<'_>| {
    let Ok(diagram) = Diagram::from_ascii(data.diagram) else {
        return;
    };
    let Ok(game) = Game::from_diagram(&diagram) else {
        return;
    };

    let legals = game.legal_moves();
    assert_eq!(
        legals.contains(&data.candidate),
        game.is_legal(data.candidate)
    );
    assert!(legals.iter().all(|&m| game.is_legal(m)));
});
