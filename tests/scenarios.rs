use draughts::{Board, ByColor, Color, Config, Game, Outcome, PlayError, Reason, Square};

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col)
}

#[test]
fn test_size_is_normalized() {
    for (input, size) in [(3.0, 4), (20.0, 16), (f64::NAN, 8), (9.6, 10), (-1.0, 4)] {
        let game = Game::start(input);
        assert_eq!(game.config().size(), size);
        assert_eq!(game.board().size(), size);
    }

    assert_eq!(Game::start_ascii(b"abc").board().size(), 8);
    assert_eq!(Game::start_ascii(b"14").board().size(), 14);
    assert_eq!(Game::start_ascii(b"12.4").board().size(), 12);
    assert_eq!(Game::start_ascii(b"1e1").board().size(), 10);
    assert_eq!(Game::start_ascii(b"99999999999999999999999").board().size(), 16);
}

#[test]
fn test_generated_piece_count() {
    for size in (4..=16).step_by(2) {
        let config = Config::with_size(f64::from(size));
        let mut board = Board::new(&config);
        board.generate();

        let per_side = usize::from(config.piece_rows()) * usize::from(config.size()) / 2;
        assert_eq!(board.count(), ByColor { white: per_side, black: per_side });
        assert_eq!(board.count().sum(), 2 * per_side);
        assert!(board.pieces().all(|(sq, _)| sq.is_dark()));
    }
}

#[test]
fn test_default_opening_move() {
    let mut game = Game::start(8.0);
    assert_eq!(game.board().count(), ByColor { white: 12, black: 12 });

    for row in 0..8 {
        for col in 0..8 {
            let expected = if (row + col) % 2 == 0 {
                None
            } else if row < 3 {
                Some(Color::Black.man())
            } else if row >= 5 {
                Some(Color::White.man())
            } else {
                None
            };
            assert_eq!(game.board().piece_at(sq(row, col)), expected, "{row},{col}");
        }
    }

    assert!(game.move_piece(sq(5, 0), sq(4, 1)));
    assert_eq!(game.board().piece_at(sq(4, 1)), Some(Color::White.man()));
    assert_eq!(game.board().piece_at(sq(5, 0)), None);

    let after = game.clone();
    assert!(!game.move_piece(sq(5, 0), sq(4, 1)));
    assert_eq!(game, after);
}

#[test]
fn test_rejected_moves_are_idempotent() {
    let mut game = Game::start(8.0);
    let before = game.clone();

    let rejected = [
        (sq(4, 1), sq(3, 2)),  // empty source
        (sq(2, 1), sq(3, 2)),  // not this side's turn
        (sq(6, 1), sq(5, 2)),  // occupied destination
        (sq(5, 0), sq(4, -1)), // off the board
        (sq(5, 2), sq(4, 2)),  // light square
        (sq(5, 2), sq(3, 4)),  // neither step nor capture
        (sq(5, 2), sq(6, 3)),  // backwards onto own piece
    ];

    for (from, to) in rejected {
        assert!(!game.move_piece(from, to), "{from} to {to}");
        assert!(!game.move_piece(from, to), "{from} to {to} again");
        assert_eq!(game, before);
        assert_eq!(game.turn(), Color::White);
    }
}

#[test]
fn test_capture_into_promotion_row() {
    let mut game: Game = Game::from_diagram(
        &"8/2b5/1w6/8/8/8/8/4B3 w".parse().expect("valid diagram"),
    )
    .expect("legal diagram");
    assert!(game.is_valid_capture(sq(2, 1), sq(0, 3)));

    assert!(game.move_piece(sq(2, 1), sq(0, 3)));
    assert_eq!(game.board().piece_at(sq(1, 2)), None);
    assert_eq!(game.board().piece_at(sq(2, 1)), None);
    assert_eq!(game.board().piece_at(sq(0, 3)), Some(Color::White.king()));
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn test_promotion_happens_once() {
    let mut game: Game = Game::from_diagram(
        &"8/2w5/8/8/8/8/5b2/8 w".parse().expect("valid diagram"),
    )
    .expect("legal diagram");

    let played = game.play("1,2-0,3".parse().expect("valid move")).expect("legal");
    assert!(played.promoted);
    let played = game.play("6,5-7,6".parse().expect("valid move")).expect("legal");
    assert!(played.promoted);

    let played = game.play("0,3-1,4".parse().expect("valid move")).expect("legal");
    assert!(!played.promoted);
    game.play("7,6-6,5".parse().expect("valid move")).expect("legal");
    let played = game.play("1,4-0,5".parse().expect("valid move")).expect("legal");
    assert!(!played.promoted);
    assert_eq!(game.board().piece_at(sq(0, 5)), Some(Color::White.king()));
}

#[test]
fn test_elimination_ends_game() {
    let mut game: Game = Game::from_diagram(
        &"6/6/3b2/6/1B4/w5 b".parse().expect("valid diagram"),
    )
    .expect("legal diagram");
    assert!(!game.is_game_over());

    assert!(!game.move_piece(sq(4, 1), sq(6, -1)));
    assert!(game.move_piece(sq(4, 1), sq(3, 0)));
    assert!(game.move_piece(sq(5, 0), sq(4, 1)));
    assert!(game.move_piece(sq(3, 0), sq(5, 2)));

    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Color::Black));
    assert_eq!(
        game.outcome(),
        Some(Outcome {
            winner: Color::Black,
            reason: Reason::Eliminated
        })
    );
    assert_eq!(
        game.play("2,3-3,2".parse().expect("valid move")),
        Err(PlayError::GameOver)
    );
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::start(10.0);
    let mut turn = game.turn();
    for _ in 0..20 {
        let Some(&m) = game.legal_moves().first() else {
            break;
        };
        assert!(!game.move_piece(sq(-1, -1), sq(0, 0)));
        assert_eq!(game.turn(), turn);
        assert!(game.move_piece(m.from, m.to));
        assert_eq!(game.turn(), !turn);
        turn = game.turn();
    }
}
