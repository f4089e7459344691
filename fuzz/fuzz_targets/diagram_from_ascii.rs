#![no_main]

use draughts::{Diagram, Game};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(diagram) = Diagram::from_ascii(data) else {
        return;
    };
    let roundtripped = Diagram::from_ascii(diagram.to_string().as_bytes()).expect("roundtrip");
    assert_eq!(diagram, roundtripped);

    if let Ok(game) = Game::from_diagram(&diagram) {
        assert_eq!(game.diagram(), diagram);
    }
});
