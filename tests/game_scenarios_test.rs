//! Game session scenarios: spawning, gravity, settling, clearing, game over.

use std::collections::HashMap;
use std::convert::Infallible;

use tui_blockfall::core::{
    can_move, Board, CommandQueue, GameLoop, GameSession, ManualTicker, Outcome, Phase,
    RandomShapes, Renderer, ShapeSource, SimpleRng, Ticker,
};
use tui_blockfall::types::{Color, Command, PieceId, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

/// Mirrors every draw/clear call so tests can compare it with the board.
#[derive(Debug, Default)]
struct RecordingRenderer {
    cells: HashMap<(u8, u8), Color>,
    announced: Vec<u32>,
    presents: usize,
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn draw_cell(&mut self, col: u8, row: u8, color: Color) {
        assert!(col < BOARD_WIDTH && row < BOARD_HEIGHT);
        self.cells.insert((col, row), color);
    }

    fn clear_cell(&mut self, col: u8, row: u8) {
        assert!(col < BOARD_WIDTH && row < BOARD_HEIGHT);
        self.cells.remove(&(col, row));
    }

    fn announce_game_over(&mut self, final_score: u32) {
        self.announced.push(final_score);
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.presents += 1;
        Ok(())
    }
}

fn shape(n: u8) -> ShapeId {
    ShapeId::try_from(n).unwrap()
}

fn fill_row(board: &mut Board, row: i8) {
    for col in 0..BOARD_WIDTH as i8 {
        board.occupy(col, row, Color::Orange, PieceId(1000 + col as u32));
    }
}

/// Visible settled cells plus the falling piece, as the renderer should show them.
fn expected_picture(session: &GameSession) -> HashMap<(u8, u8), Color> {
    let mut picture: HashMap<(u8, u8), Color> = session
        .board()
        .occupied()
        .filter(|&(_, row, _)| row >= 0)
        .filter_map(|(col, row, cell)| cell.color().map(|c| ((col as u8, row as u8), c)))
        .collect();
    if let Some(piece) = session.active() {
        for (col, row) in piece.cells() {
            if row >= 0 {
                picture.insert((col as u8, row as u8), piece.color());
            }
        }
    }
    picture
}

#[test]
fn scenario_a_single_full_row_clears_and_drops_cells_above() {
    let mut board = Board::new();
    fill_row(&mut board, 5);
    board.occupy(3, 2, Color::Red, PieceId(1));
    board.occupy(1, 3, Color::Red, PieceId(2));
    board.occupy(0, 10, Color::Red, PieceId(3));

    let mut session = GameSession::with_board(board);
    let mut r = RecordingRenderer::default();
    let cleared = session.clear_lines(&mut r);

    assert_eq!(cleared.as_slice(), &[5]);
    assert_eq!(session.score(), 1);
    assert_eq!(session.board().cell_count_in_row(5), 0);
    assert!(session.board().is_occupied(3, 3));
    assert!(session.board().is_occupied(1, 4));
    assert!(!session.board().is_occupied(3, 2));
    assert!(session.board().is_occupied(0, 10));
    assert_eq!(session.phase(), Phase::Spawning);
    assert_eq!(r.cells, expected_picture(&session));
}

#[test]
fn scenario_b_bar_falls_to_bottom_row() {
    let mut session = GameSession::new();
    let mut r = RecordingRenderer::default();

    assert!(session.spawn(shape(4), &mut r));
    let spawned = session.active().unwrap();
    assert_eq!((spawned.col, spawned.row), (4, -1));

    let mut steps = 0;
    while session.gravity_step(&mut r) {
        steps += 1;
        assert_eq!(r.cells, expected_picture(&session));
    }

    let piece = session.active().unwrap();
    assert_eq!(piece.row, BOARD_HEIGHT as i8 - 1);
    assert_eq!(steps, 20);
    assert_eq!(session.phase(), Phase::Settling);

    session.settle();
    for col in 3..=6 {
        assert_eq!(session.board().get(col, 19).and_then(|c| c.piece_id()), Some(piece.id));
    }
}

#[test]
fn scenario_c_blocked_spawn_ends_game_with_score_unchanged() {
    let mut board = Board::new();
    board.occupy(4, 0, Color::Red, PieceId(77));
    let mut session = GameSession::with_board(board);
    let mut r = RecordingRenderer::default();

    assert!(!session.spawn(shape(5), &mut r));

    assert!(session.is_game_over());
    assert_eq!(session.score(), 0);
    assert_eq!(session.active(), None);
    assert_eq!(r.announced, vec![0]);

    // Nothing moves after game over.
    assert!(!session.spawn(shape(4), &mut r));
    assert!(!session.gravity_step(&mut r));
    assert_eq!(r.announced, vec![0]);
}

#[test]
fn scenario_d_move_left_at_wall_is_rejected() {
    let mut session = GameSession::new();
    let mut r = RecordingRenderer::default();
    session.spawn(shape(5), &mut r);
    session.gravity_step(&mut r);

    for _ in 0..4 {
        assert!(session.apply(Command::MoveLeft, &mut r));
    }
    let at_wall = session.active().unwrap();
    assert_eq!(at_wall.cells().iter().map(|&(c, _)| c).min(), Some(0));

    assert!(!session.apply(Command::MoveLeft, &mut r));
    assert_eq!(session.active(), Some(at_wall));
    assert_eq!(r.cells, expected_picture(&session));
}

#[test]
fn scenario_e_two_separated_full_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 3);
    fill_row(&mut board, 7);
    board.occupy(0, 2, Color::Red, PieceId(1));
    board.occupy(5, 5, Color::Red, PieceId(2));
    board.occupy(9, 12, Color::Red, PieceId(3));

    let mut session = GameSession::with_board(board);
    let cleared = session.clear_lines(&mut RecordingRenderer::default());

    assert_eq!(cleared.as_slice(), &[3, 7]);
    assert_eq!(session.score(), 2);
    // Above both cleared rows: down two.
    assert!(session.board().is_occupied(0, 4));
    // Between them: down one.
    assert!(session.board().is_occupied(5, 6));
    // Below: untouched.
    assert!(session.board().is_occupied(9, 12));
    assert_eq!(session.board().occupied().count(), 3);
}

#[test]
fn clearing_zero_rows_leaves_score() {
    let mut board = Board::new();
    board.occupy(0, 19, Color::Red, PieceId(1));
    let mut session = GameSession::with_board(board);

    assert!(session.clear_lines(&mut RecordingRenderer::default()).is_empty());
    assert_eq!(session.score(), 0);
}

#[test]
fn rejected_moves_never_change_position() {
    let mut rng = SimpleRng::new(99);
    for _ in 0..100 {
        let mut board = Board::new();
        for _ in 0..60 {
            let col = rng.next_range(BOARD_WIDTH as u32) as i8;
            let row = 2 + rng.next_range(BOARD_HEIGHT as u32 - 2) as i8;
            if !board.is_occupied(col, row) {
                board.occupy(col, row, Color::Red, PieceId(500));
            }
        }
        let mut session = GameSession::with_board(board);
        let mut r = RecordingRenderer::default();
        session.repaint(&mut r);
        let id = ShapeId::ALL[rng.next_range(7) as usize];
        if !session.spawn(id, &mut r) {
            continue;
        }

        for _ in 0..40 {
            let command = [Command::MoveLeft, Command::MoveRight, Command::SoftDrop]
                [rng.next_range(3) as usize];
            let (dcol, drow) = command.offset().unwrap();
            let before = session.active().unwrap();
            let legal = can_move(session.board(), &before, dcol, drow);

            let moved = session.apply(command, &mut r);

            assert_eq!(moved, legal);
            if !legal {
                assert_eq!(session.active(), Some(before));
            }
        }
        assert_eq!(r.cells, expected_picture(&session));
    }
}

/// Step a loop until the current piece has been spawned.
fn step_until_falling<S, T>(game: &mut GameLoop<S, T>, r: &mut RecordingRenderer, q: &CommandQueue)
where
    S: ShapeSource,
    T: Ticker,
{
    while game.session().phase() != Phase::Falling {
        assert_eq!(game.step(r, q).unwrap(), None);
    }
}

/// Step a loop until the falling piece has settled and rows were processed.
fn step_until_spawning<S, T>(game: &mut GameLoop<S, T>, r: &mut RecordingRenderer, q: &CommandQueue)
where
    S: ShapeSource,
    T: Ticker,
{
    while !matches!(game.session().phase(), Phase::Spawning | Phase::GameOver) {
        game.step(r, q).unwrap();
    }
}

#[test]
fn commands_are_applied_in_arrival_order_before_gravity() {
    let mut game = GameLoop::new(|| shape(4), ManualTicker::new());
    let queue = CommandQueue::new();
    let mut r = RecordingRenderer::default();

    step_until_falling(&mut game, &mut r, &queue);
    queue.push(Command::MoveLeft);
    queue.push(Command::MoveLeft);
    queue.push(Command::MoveRight);
    queue.push(Command::MoveLeft);
    queue.push(Command::MoveLeft);

    assert_eq!(game.step(&mut r, &queue).unwrap(), None);

    let piece = game.session().active().unwrap();
    // Three net lefts, then one gravity row.
    assert_eq!((piece.col, piece.row), (1, 0));
    assert_eq!(game.ticker().ticks(), 1);
    assert!(queue.is_empty());
}

#[test]
fn scripted_pieces_complete_and_clear_the_bottom_row() {
    let mut script = [shape(4), shape(4), shape(5)].into_iter().cycle();
    let mut game = GameLoop::new(move || script.next().unwrap(), ManualTicker::new());
    let queue = CommandQueue::new();
    let mut r = RecordingRenderer::default();

    // Bar to columns 0-3.
    step_until_falling(&mut game, &mut r, &queue);
    for _ in 0..3 {
        queue.push(Command::MoveLeft);
    }
    step_until_spawning(&mut game, &mut r, &queue);

    // Bar to columns 6-9.
    step_until_falling(&mut game, &mut r, &queue);
    for _ in 0..3 {
        queue.push(Command::MoveRight);
    }
    step_until_spawning(&mut game, &mut r, &queue);
    assert_eq!(game.session().score(), 0);

    // Square soft-dropped into columns 4-5.
    step_until_falling(&mut game, &mut r, &queue);
    queue.push(Command::SoftDrop);
    queue.push(Command::SoftDrop);
    step_until_spawning(&mut game, &mut r, &queue);

    assert_eq!(game.session().score(), 1);
    let board = game.session().board();
    assert_eq!(board.cell_count_in_row(19), 2);
    assert!(board.is_occupied(4, 19) && board.is_occupied(5, 19));
    assert_eq!(board.cell_count_in_row(18), 0);
    assert_eq!(r.cells, expected_picture(game.session()));
}

#[test]
fn quit_ends_the_session_immediately() {
    let mut game = GameLoop::new(|| shape(3), ManualTicker::new());
    let queue = CommandQueue::new();
    let mut r = RecordingRenderer::default();

    step_until_falling(&mut game, &mut r, &queue);
    queue.push(Command::MoveLeft);
    queue.push(Command::Quit);

    let summary = game.run(&mut r, &queue).unwrap();

    assert_eq!(summary.outcome, Outcome::Quit);
    assert_eq!(summary.pieces_spawned, 1);
    assert!(r.announced.is_empty());
}

#[test]
fn repaint_shows_a_prepared_board() {
    let mut board = Board::new();
    board.occupy(0, 19, Color::Red, PieceId(1));
    board.occupy(9, 4, Color::Green, PieceId(2));
    board.occupy(8, -1, Color::Green, PieceId(2));
    let mut session = GameSession::with_board(board);
    let mut r = RecordingRenderer::default();
    session.spawn(shape(5), &mut r);
    r.cells.clear();

    session.repaint(&mut r);

    assert_eq!(r.cells.get(&(0, 19)), Some(&Color::Red));
    assert_eq!(r.cells.get(&(9, 4)), Some(&Color::Green));
    assert_eq!(r.cells, expected_picture(&session));
}

#[test]
fn loop_on_a_prepared_session_paints_it_first() {
    let mut board = Board::new();
    board.occupy(3, 15, Color::Purple, PieceId(40));
    let session = GameSession::with_board(board);
    let mut game = GameLoop::with_session(session, || shape(2), ManualTicker::new());
    let queue = CommandQueue::new();
    queue.push(Command::Quit);
    let mut r = RecordingRenderer::default();

    let summary = game.run(&mut r, &queue).unwrap();

    assert_eq!(summary.outcome, Outcome::Quit);
    assert_eq!(r.cells.get(&(3, 15)), Some(&Color::Purple));
    assert_eq!(r.cells.len(), 1);
}

#[test]
fn full_game_ends_with_announcement() {
    let mut game = GameLoop::new(RandomShapes::new(31337), ManualTicker::new());
    let queue = CommandQueue::new();
    let mut r = RecordingRenderer::default();

    let summary = game.run(&mut r, &queue).unwrap();

    assert_eq!(summary.outcome, Outcome::GameOver);
    assert_eq!(r.announced, vec![summary.score]);
    assert!(game.session().is_game_over());
    assert!(game.session().stack_reaches_top() || game.session().active().is_none());
    assert!(r.presents > 0);
    assert_eq!(r.cells, expected_picture(game.session()));
}
