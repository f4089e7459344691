#![no_main]

use arbitrary::Arbitrary;
use draughts::{Game, Square};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    size: f64,
    touches: Vec<Square>,
}

fuzz_target!(|data: Data| {
    let mut game = Game::start(data.size);
    let size = game.board().size();
    assert!((4..=16).contains(&size));

    for sq in data.touches {
        let before = game.board().count();
        game.touch(sq);

        let after = game.board().count();
        assert!(after.white <= before.white && after.black <= before.black);
        assert!(before.sum() - after.sum() <= 1);
        assert!(game.board().pieces().all(|(sq, _)| sq.is_dark()));
        assert_eq!(game.winner().is_some(), game.is_game_over());
    }
});
