// src/board.rs
use std::fmt;

use log::{debug, trace};

pub const BOARD_SIZE: usize = 8;

/// Row-major 8x8 grid, row 0 at the top (dark back rank), col 0 on the left.
pub type Grid = [[Option<Token>; BOARD_SIZE]; BOARD_SIZE];

// --- Tokens ---
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side { Light, Dark }

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind { King, Queen, Rook, Bishop, Knight, Pawn }

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King, PieceKind::Queen, PieceKind::Rook,
        PieceKind::Bishop, PieceKind::Knight, PieceKind::Pawn,
    ];

    fn letter(&self) -> char {
        match self {
            PieceKind::King => 'k', PieceKind::Queen => 'q', PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b', PieceKind::Knight => 'n', PieceKind::Pawn => 'p',
        }
    }
}

/// A labelled piece sitting on a square. Carries no rules of its own.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: PieceKind,
    pub side: Side,
}

impl Token {
    pub const fn new(kind: PieceKind, side: Side) -> Self { Token { kind, side } }

    pub fn from_char(c: char) -> Option<Self> {
        let side = if c.is_uppercase() { Side::Light } else { Side::Dark };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King, 'q' => PieceKind::Queen, 'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop, 'n' => PieceKind::Knight, 'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some(Token::new(kind, side))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.letter();
        let symbol = match self.side {
            Side::Light => symbol.to_ascii_uppercase(),
            Side::Dark => symbol,
        };
        write!(f, "{}", symbol)
    }
}

// --- Squares ---

/// A coordinate that is always on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize { self.row as usize }
    pub fn col(&self) -> usize { self.col as usize }

    /// Parses "e2"-style notation. Row 0 is rank 8, col 0 is file a.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?.to_ascii_lowercase();
        let rank_char = chars.next()?;
        if chars.next().is_some() { return None; }
        let col = match file_char { 'a'..='h' => file_char as usize - 'a' as usize, _ => return None };
        let rank = match rank_char { '1'..='8' => rank_char as usize - '1' as usize, _ => return None };
        Square::new(BOARD_SIZE - 1 - rank, col)
    }

    pub fn to_algebraic(&self) -> String {
        let file_char = (b'a' + self.col) as char;
        let rank_char = (b'8' - self.row) as char;
        format!("{}{}", file_char, rank_char)
    }

    /// Light squares are the ones where row + col is even, matching a1 being dark.
    pub fn is_light(&self) -> bool { (self.row + self.col) % 2 == 0 }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row: row as u8, col: col as u8 }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

// --- Selection state machine ---

/// The square picked as the source of the next relocation, if any.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(Square),
}

impl Selection {
    pub fn square(&self) -> Option<Square> {
        match self { Selection::None => None, Selection::Selected(sq) => Some(*sq) }
    }
}

/// What a single click did to the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Empty square clicked with nothing selected.
    Ignored,
    Selected(Square),
    /// The selected token now sits on `to`; `from` is empty unless `from == to`.
    Relocated { from: Square, to: Square },
}

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
    PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Grid,
    selection: Selection,
}

impl Default for Board {
    fn default() -> Self { Board::initial() }
}

impl Board {
    /// The standard starting arrangement with nothing selected.
    pub fn initial() -> Self {
        let mut squares: Grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (col, kind) in BACK_RANK.iter().enumerate() {
            squares[0][col] = Some(Token::new(*kind, Side::Dark));
            squares[1][col] = Some(Token::new(PieceKind::Pawn, Side::Dark));
            squares[6][col] = Some(Token::new(PieceKind::Pawn, Side::Light));
            squares[7][col] = Some(Token::new(*kind, Side::Light));
        }
        Board { squares, selection: Selection::None }
    }

    pub fn empty() -> Self {
        Board { squares: [[None; BOARD_SIZE]; BOARD_SIZE], selection: Selection::None }
    }

    /// Builds a board from eight rows of piece letters, '.' for empty squares.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Option<Self> {
        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != BOARD_SIZE { return None; }
            for (col, c) in chars.into_iter().enumerate() {
                board.squares[row][col] = match c {
                    '.' => None,
                    other => Some(Token::from_char(other)?),
                };
            }
        }
        Some(board)
    }

    pub fn grid(&self) -> &Grid { &self.squares }

    pub fn token_at(&self, sq: Square) -> Option<Token> {
        self.squares[sq.row()][sq.col()]
    }

    pub fn selection(&self) -> Selection { self.selection }

    pub fn is_selected(&self, sq: Square) -> bool {
        self.selection == Selection::Selected(sq)
    }

    /// Click handler for raw grid coordinates.
    ///
    /// Panics if `row` or `col` is outside `0..8`; callers derive coordinates
    /// from the board layout so this never happens in practice.
    pub fn select_or_move(&mut self, row: usize, col: usize) -> Interaction {
        let sq = Square::new(row, col)
            .unwrap_or_else(|| panic!("square ({}, {}) is off the board", row, col));
        self.select_or_move_at(sq)
    }

    /// With nothing selected, picks up an occupied square. With a selection,
    /// moves that token onto `target`, replacing whatever was there, and
    /// clears the selection. Clicking the selected square again is a move
    /// onto itself.
    pub fn select_or_move_at(&mut self, target: Square) -> Interaction {
        match self.selection {
            Selection::None => {
                if self.token_at(target).is_some() {
                    self.selection = Selection::Selected(target);
                    debug!("selected {}", target);
                    Interaction::Selected(target)
                } else {
                    trace!("ignored click on empty {}", target);
                    Interaction::Ignored
                }
            }
            Selection::Selected(from) => {
                let moving = self.squares[from.row()][from.col()].take();
                self.squares[target.row()][target.col()] = moving;
                self.selection = Selection::None;
                debug!("relocated {} -> {}", from, target);
                Interaction::Relocated { from, to: target }
            }
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.squares.iter().flatten().filter(|sq| sq.is_some()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.iter() {
            for token in row.iter() {
                match token {
                    Some(token) => write!(f, "{}", token)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn initial_position_matches_standard_setup() {
        let board = Board::initial();
        assert_eq!(board.token_at(sq(0, 0)), Some(Token::new(PieceKind::Rook, Side::Dark)));
        assert_eq!(board.token_at(sq(0, 3)), Some(Token::new(PieceKind::Queen, Side::Dark)));
        assert_eq!(board.token_at(sq(0, 4)), Some(Token::new(PieceKind::King, Side::Dark)));
        assert_eq!(board.token_at(sq(7, 4)), Some(Token::new(PieceKind::King, Side::Light)));
        assert_eq!(board.token_at(sq(7, 6)), Some(Token::new(PieceKind::Knight, Side::Light)));
        for col in 0..BOARD_SIZE {
            assert_eq!(board.token_at(sq(1, col)), Some(Token::new(PieceKind::Pawn, Side::Dark)));
            assert_eq!(board.token_at(sq(6, col)), Some(Token::new(PieceKind::Pawn, Side::Light)));
            for row in 2..6 {
                assert_eq!(board.token_at(sq(row, col)), None);
            }
        }
        assert_eq!(board.selection(), Selection::None);
        assert_eq!(board.occupied_count(), 32);
    }

    #[test]
    fn display_lists_rows_top_down() {
        let text = Board::initial().to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "rnbqkbnr");
        assert_eq!(rows[1], "pppppppp");
        assert_eq!(rows[4], "........");
        assert_eq!(rows[7], "RNBQKBNR");
    }

    #[test]
    fn select_then_move_relocates_pawn() {
        let mut board = Board::initial();
        assert_eq!(board.select_or_move(6, 0), Interaction::Selected(sq(6, 0)));
        assert_eq!(board.selection(), Selection::Selected(sq(6, 0)));
        assert_eq!(board.grid(), Board::initial().grid());

        assert_eq!(board.select_or_move(4, 0), Interaction::Relocated { from: sq(6, 0), to: sq(4, 0) });
        assert_eq!(board.token_at(sq(4, 0)), Some(Token::new(PieceKind::Pawn, Side::Light)));
        assert_eq!(board.token_at(sq(6, 0)), None);
        assert_eq!(board.selection(), Selection::None);
    }

    #[test]
    fn clicking_selected_square_again_keeps_grid_and_clears_selection() {
        let mut board = Board::initial();
        board.select_or_move(7, 3);
        assert_eq!(board.select_or_move(7, 3), Interaction::Relocated { from: sq(7, 3), to: sq(7, 3) });
        assert_eq!(board.grid(), Board::initial().grid());
        assert_eq!(board.selection(), Selection::None);
    }

    #[test]
    fn moving_onto_occupied_square_replaces_occupant() {
        let mut board = Board::initial();
        // onto an opposing piece
        board.select_or_move(7, 3);
        board.select_or_move(1, 3);
        assert_eq!(board.token_at(sq(1, 3)), Some(Token::new(PieceKind::Queen, Side::Light)));
        assert_eq!(board.token_at(sq(7, 3)), None);
        assert_eq!(board.occupied_count(), 31);

        // onto a piece of the same side
        board.select_or_move(7, 0);
        board.select_or_move(7, 1);
        assert_eq!(board.token_at(sq(7, 1)), Some(Token::new(PieceKind::Rook, Side::Light)));
        assert_eq!(board.token_at(sq(7, 0)), None);
        assert_eq!(board.occupied_count(), 30);
    }

    #[test]
    fn empty_square_with_no_selection_is_a_no_op() {
        let mut board = Board::initial();
        assert_eq!(board.select_or_move(3, 3), Interaction::Ignored);
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn any_click_while_selected_consumes_the_selection() {
        let mut board = Board::initial();
        board.select_or_move(6, 4);
        // target is occupied by another piece; it is replaced, not selected
        assert!(matches!(board.select_or_move(6, 5), Interaction::Relocated { .. }));
        assert_eq!(board.selection(), Selection::None);

        board.select_or_move(6, 5);
        board.select_or_move(3, 3);
        assert_eq!(board.selection(), Selection::None);
        assert_eq!(board.token_at(sq(3, 3)), Some(Token::new(PieceKind::Pawn, Side::Light)));
    }

    #[test]
    fn moving_into_empty_area_and_back() {
        let mut board = Board::from_rows([
            "....k...", "........", "........", "........",
            "........", "........", "........", "....K...",
        ]).unwrap();
        board.select_or_move(7, 4);
        board.select_or_move(3, 3);
        board.select_or_move(3, 3);
        board.select_or_move(7, 4);
        assert_eq!(board.token_at(sq(7, 4)), Some(Token::new(PieceKind::King, Side::Light)));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn out_of_range_coordinates_panic() {
        Board::initial().select_or_move(8, 0);
    }

    #[test]
    fn algebraic_notation_maps_rank_eight_to_row_zero() {
        assert_eq!(Square::from_algebraic("a8"), Some(sq(0, 0)));
        assert_eq!(Square::from_algebraic("e1"), Some(sq(7, 4)));
        assert_eq!(Square::from_algebraic("H1"), Some(sq(7, 7)));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a10"), None);
        assert_eq!(sq(6, 4).to_algebraic(), "e2");
    }

    #[test]
    fn square_shading_alternates() {
        assert!(sq(0, 0).is_light());
        assert!(!sq(0, 1).is_light());
        assert!(sq(7, 7).is_light());
        assert_eq!(Square::all().filter(|s| s.is_light()).count(), 32);
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert!(Board::from_rows(["x.......", "", "", "", "", "", "", ""]).is_none());
        assert!(Board::from_rows(["........"; 8]).is_some());
        assert!(Board::from_rows(["......."; 8]).is_none());
    }
}
