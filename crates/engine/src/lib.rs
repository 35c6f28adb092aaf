pub mod config;
pub mod constants;
pub mod drag;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod legal;
pub mod move_gen;
pub mod r#move;
pub mod piece;
pub mod squarelist;
pub mod turn;

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::config::Config;
    use super::constants::Color;
    use super::game::Game;
    use super::geometry::{position_of, Square};
    use super::input::MouseSample;

    #[test]
    fn test_make_move() {
        let now = Instant::now();
        let mut game = Game::new(Config::default(), now).unwrap();
        let board = *game.board();
        let from = board.square_center(Square::new(6, 7));
        let to = board.square_center(Square::new(5, 5));

        game.update(&MouseSample::press(from), now);
        game.update(&MouseSample::hold(to), now);
        let outcome = game.update(&MouseSample::release(to), now).unwrap();

        assert!(outcome.is_move());
        let knight = game.pieces().get(outcome.piece()).unwrap();
        assert_eq!(knight.position, position_of(Square::new(5, 5), &board));
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn test_reset_restores_start() {
        let now = Instant::now();
        let mut game = Game::new(Config::default(), now).unwrap();
        let board = *game.board();
        let from = board.square_center(Square::new(0, 6));
        let to = board.square_center(Square::new(0, 5));
        game.update(&MouseSample::press(from), now);
        game.update(&MouseSample::hold(to), now);
        game.update(&MouseSample::release(to), now);
        assert_eq!(game.side_to_move(), Color::Black);

        game.reset(now);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.pieces().piece_at(Square::new(0, 6), &board).is_some());
        assert!(game.pieces().piece_at(Square::new(0, 5), &board).is_none());
    }
}
