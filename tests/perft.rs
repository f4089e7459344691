use std::{
    fs::File,
    io::{prelude::*, BufReader},
};

use draughts::{perft, Diagram, Game};

fn test_perft_file(path: &str, node_limit: u64) {
    let file = File::open(path).expect("failed to open test suite");
    let reader = BufReader::new(file);

    let mut game = Game::start(8.0);

    for line in reader.lines().map(|l| l.unwrap()) {
        println!("{}", line);

        let trimmed = line.trim();
        let mut slices = trimmed.splitn(2, ' ');

        match slices.next() {
            Some("diagram") => {
                let diagram: Diagram = slices
                    .next()
                    .expect("missing diagram")
                    .parse()
                    .expect("invalid diagram");
                game = Game::from_diagram(&diagram).expect("illegal diagram");
            }
            Some("perft") => {
                let mut params = slices.next().expect("missing perft params").splitn(2, ' ');

                let depth = params
                    .next()
                    .expect("missing perft depth")
                    .parse()
                    .expect("depth not an integer");

                let nodes = params
                    .next()
                    .expect("missing perft nodes")
                    .parse()
                    .expect("nodes not an integer");

                if nodes <= node_limit {
                    assert_eq!(perft(&game, depth), nodes);
                }
            }
            _ => {}
        }
    }
}

// macro for generating tests
macro_rules! gen_tests {
    ($($fn_name:ident, $path:tt, $num:expr,)+) => {
        $(
            #[test]
            #[cfg_attr(miri, ignore)]
            fn $fn_name() {
                test_perft_file($path, $num);
            }
        )+
    }
}

gen_tests! {
    test_start,   "tests/start.perft",   1_000_000,
    test_midgame, "tests/midgame.perft",   500_000,
}

#[test]
fn test_start_matches_diagram() {
    for size in 4..=16 {
        let game = Game::start(f64::from(size));
        let diagram: Diagram = game.diagram().to_string().parse().expect("valid diagram");
        let restored = Game::from_diagram(&diagram).expect("legal diagram");
        assert_eq!(restored, game, "size {size}");
        assert_eq!(perft(&restored, 3), perft(&game, 3));
    }
}
