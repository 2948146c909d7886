//! Knight-move isolation on a rectangular board.
//!
//! Two players share a board of open squares. The opening move places a
//! player on any open square; afterwards each move is a knight's jump to an
//! open square. Every square a player lands on is blocked for the rest of
//! the game. The first player left without a legal move loses.
//!
//! `KnightBoard` is the crate's reference `GameState` implementation, used
//! by the integration tests and benchmarks. The blocked-square set is an
//! `im::Vector`, so `forecast_move` clones the board cheaply even though
//! search forecasts thousands of positions per call.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::GameState;
use crate::core::{GameRng, Move, MoveList, PlayerId};

/// Knight jump offsets, in fixed enumeration order.
///
/// This order is part of the board's contract: legal moves are enumerated
/// by walking this table, and searchers break ties by first encounter.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Default board edge length, matching the classic 7x7 game.
const DEFAULT_SIZE: i32 = 7;

/// Knight-move isolation board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KnightBoard {
    width: i32,
    height: i32,
    /// Blocked squares in row-major order; landing on a square blocks it.
    blocked: Vector<bool>,
    /// Current square per player, `None` before the opening move.
    locations: [Option<(i32, i32)>; 2],
    active: PlayerId,
    move_count: u32,
}

impl Default for KnightBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl KnightBoard {
    /// Create an empty 7x7 board with player 0 to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE, DEFAULT_SIZE)
    }

    /// Create an empty board with the given dimensions.
    #[must_use]
    pub fn with_size(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "Board dimensions must be positive");
        Self {
            width,
            height,
            blocked: Vector::from(vec![false; (width * height) as usize]),
            locations: [None, None],
            active: PlayerId::new(0),
            move_count: 0,
        }
    }

    /// Generate a reproducible mid-game position by playing `plies` random
    /// legal moves from the initial position.
    ///
    /// Stops early if the game ends first. The same seed always produces
    /// the same position.
    #[must_use]
    pub fn random_position(seed: u64, plies: u32) -> Self {
        let mut rng = GameRng::new(seed);
        let mut board = Self::new();
        for _ in 0..plies {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range_usize(0..moves.len())];
            board = board.forecast_move(mv);
        }
        board
    }

    /// Whether a square is on the board and not yet blocked.
    #[must_use]
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        row >= 0
            && row < self.height
            && col >= 0
            && col < self.width
            && !self.blocked[self.index(row, col)]
    }

    /// Number of open squares remaining.
    #[must_use]
    pub fn open_squares(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    // === Position construction (tests, scenarios) ===

    /// Block a square without placing a player on it.
    pub fn block(&mut self, row: i32, col: i32) {
        assert!(self.in_bounds(row, col), "Square out of bounds");
        let idx = self.index(row, col);
        self.blocked.set(idx, true);
    }

    /// Place a player on a square, blocking it.
    ///
    /// Counts as one applied move, like an opening placement.
    pub fn place(&mut self, player: PlayerId, row: i32, col: i32) {
        assert!(self.is_open(row, col), "Square must be open");
        let idx = self.index(row, col);
        self.blocked.set(idx, true);
        self.locations[player.index()] = Some((row, col));
        self.move_count += 1;
    }

    /// Set which player moves next.
    pub fn set_active(&mut self, player: PlayerId) {
        self.active = player;
    }

    fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.height && col >= 0 && col < self.width
    }

    fn index(&self, row: i32, col: i32) -> usize {
        (row * self.width + col) as usize
    }
}

impl GameState for KnightBoard {
    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn get_opponent(&self, player: PlayerId) -> PlayerId {
        player.other()
    }

    fn get_legal_moves(&self, player: PlayerId) -> MoveList {
        match self.locations[player.index()] {
            // Opening move: any open square, scanned row-major.
            None => {
                let mut moves = MoveList::new();
                for row in 0..self.height {
                    for col in 0..self.width {
                        if self.is_open(row, col) {
                            moves.push(Move::new(row, col));
                        }
                    }
                }
                moves
            }
            Some((row, col)) => KNIGHT_OFFSETS
                .iter()
                .map(|&(dr, dc)| Move::new(row + dr, col + dc))
                .filter(|mv| self.is_open(mv.row, mv.col))
                .collect(),
        }
    }

    fn forecast_move(&self, mv: Move) -> Self {
        debug_assert!(self.is_open(mv.row, mv.col), "Forecast of illegal move");
        let mut next = self.clone();
        let idx = next.index(mv.row, mv.col);
        next.blocked.set(idx, true);
        next.locations[self.active.index()] = Some((mv.row, mv.col));
        next.active = self.get_opponent(self.active);
        next.move_count += 1;
        next
    }

    fn is_winner(&self, player: PlayerId) -> bool {
        let opponent = self.get_opponent(player);
        opponent == self.active && self.get_legal_moves(opponent).is_empty()
    }

    fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active && self.get_legal_moves(player).is_empty()
    }

    fn get_player_location(&self, player: PlayerId) -> Option<(i32, i32)> {
        self.locations[player.index()]
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn move_count(&self) -> u32 {
        self.move_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves_cover_board() {
        let board = KnightBoard::new();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 49);
        // Row-major scan starts at the origin
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[48], Move::new(6, 6));
    }

    #[test]
    fn test_knight_mobility_from_center() {
        let mut board = KnightBoard::new();
        board.place(PlayerId::new(0), 3, 3);
        board.place(PlayerId::new(1), 0, 0);
        assert_eq!(board.get_legal_moves(PlayerId::new(0)).len(), 8);
        assert_eq!(board.get_legal_moves(PlayerId::new(1)).len(), 2);
    }

    #[test]
    fn test_blocked_squares_are_excluded() {
        let mut board = KnightBoard::new();
        board.place(PlayerId::new(0), 3, 3);
        board.place(PlayerId::new(1), 0, 0);
        board.block(1, 2);
        board.block(1, 4);
        assert_eq!(board.get_legal_moves(PlayerId::new(0)).len(), 6);
    }

    #[test]
    fn test_forecast_does_not_mutate() {
        let board = KnightBoard::new();
        let next = board.forecast_move(Move::new(3, 3));

        assert_eq!(board.move_count(), 0);
        assert!(board.is_open(3, 3));
        assert_eq!(board.get_player_location(PlayerId::new(0)), None);

        assert_eq!(next.move_count(), 1);
        assert!(!next.is_open(3, 3));
        assert_eq!(next.get_player_location(PlayerId::new(0)), Some((3, 3)));
        assert_eq!(next.active_player(), PlayerId::new(1));
    }

    #[test]
    fn test_stable_enumeration_order() {
        let board = KnightBoard::random_position(42, 10);
        let first = board.legal_moves();
        let second = board.legal_moves();
        assert_eq!(first, second);
    }

    #[test]
    fn test_loser_and_winner() {
        // Corner the active player with no knight moves left
        let mut board = KnightBoard::with_size(3, 3);
        board.place(PlayerId::new(0), 0, 0);
        board.place(PlayerId::new(1), 2, 2);
        board.block(1, 2);
        board.block(2, 1);
        board.set_active(PlayerId::new(0));

        assert!(board.is_loser(PlayerId::new(0)));
        assert!(board.is_winner(PlayerId::new(1)));
        assert!(!board.is_loser(PlayerId::new(1)));
        assert!(!board.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_no_loser_before_placement() {
        let board = KnightBoard::new();
        assert!(!board.is_loser(PlayerId::new(0)));
        assert!(!board.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_random_position_is_deterministic() {
        let a = KnightBoard::random_position(7, 12);
        let b = KnightBoard::random_position(7, 12);
        assert_eq!(a.legal_moves(), b.legal_moves());
        assert_eq!(a.move_count(), b.move_count());
        assert_eq!(
            a.get_player_location(PlayerId::new(0)),
            b.get_player_location(PlayerId::new(0))
        );
    }

    #[test]
    fn test_game_plays_to_completion() {
        let mut board = KnightBoard::with_size(5, 5);
        let mut plies = 0;
        while !board.legal_moves().is_empty() {
            let mv = board.legal_moves()[0];
            board = board.forecast_move(mv);
            plies += 1;
            assert!(plies <= 25, "Game must end before the board fills");
        }
        assert!(board.is_loser(board.active_player()));
    }

    #[test]
    fn test_serialization_round_trip() {
        let board = KnightBoard::random_position(3, 6);
        let json = serde_json::to_string(&board).unwrap();
        let restored: KnightBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(board.legal_moves(), restored.legal_moves());
        assert_eq!(board.move_count(), restored.move_count());
    }
}
