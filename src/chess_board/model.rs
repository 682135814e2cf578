use std::fmt;

use crate::error::{ParseError, RuleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction in which this color's pawns advance.
    pub fn forward(&self) -> Direction {
        match self {
            Color::White => Direction::North,
            Color::Black => Direction::South,
        }
    }

    /// Rank on which this color's pieces start (rank index 0 is rank "1").
    pub fn back_rank(&self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The pawn rank sits one step in front of the back rank.
    pub fn pawn_start_rank(&self) -> u8 {
        let (_, d_rank) = self.forward().delta();
        (self.back_rank() as i8 + d_rank) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    pub fn is_slider(&self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Self { color, kind }
    }

    /// FEN letter: upper case for White, lower case for Black.
    pub fn to_char(&self) -> char {
        let letter = match self.kind {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        if self.color == Color::White {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Self { color, kind })
    }

    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceType::Pawn) => '♙',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::King) => '♔',
            (Color::Black, PieceType::Pawn) => '♟',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::King) => '♚',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Occupied(Piece),
    Empty,
}

impl Square {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Occupied(piece) => Some(*piece),
            Square::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// `(d_file, d_rank)` of one step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// A square of the board. Both coordinates are always within `0..8`; every
/// constructor and shift is checked.
///
/// Ordering is rank-major (a1, b1, .., h1, a2, ..).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct ChessField {
    rank: u8,
    file: u8,
}

impl ChessField {
    pub const BOARD_SIZE: u8 = 8;

    pub fn new(file: u8, rank: u8) -> Result<Self, RuleError> {
        Self::checked(file as i16, rank as i16)
    }

    fn checked(file: i16, rank: i16) -> Result<Self, RuleError> {
        let size = Self::BOARD_SIZE as i16;
        if (0..size).contains(&file) && (0..size).contains(&rank) {
            Ok(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            Err(RuleError::OutOfBounds { file, rank })
        }
    }

    /// `index` counts rank-major from a1 = 0 to h8 = 63.
    pub fn from_index(index: u8) -> Result<Self, RuleError> {
        Self::checked((index % Self::BOARD_SIZE) as i16, (index / Self::BOARD_SIZE) as i16)
    }

    pub fn index(&self) -> usize {
        self.rank as usize * Self::BOARD_SIZE as usize + self.file as usize
    }

    pub fn all() -> impl Iterator<Item = ChessField> {
        (0..Self::BOARD_SIZE).flat_map(|rank| (0..Self::BOARD_SIZE).map(move |file| ChessField { rank, file }))
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, ParseError> {
        let mut chars = algebraic.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => Ok(Self {
                rank: rank as u8 - b'1',
                file: file as u8 - b'a',
            }),
            _ => Err(ParseError::InvalidSquare(algebraic.to_string())),
        }
    }

    pub fn as_algebraic(&self) -> String {
        self.to_string()
    }

    /// Returns the field `d_file` files and `d_rank` ranks away, or
    /// `OutOfBounds` if that leaves the board.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Result<Self, RuleError> {
        Self::checked(self.file as i16 + d_file as i16, self.rank as i16 + d_rank as i16)
    }

    pub fn step(self, direction: Direction) -> Result<Self, RuleError> {
        let (d_file, d_rank) = direction.delta();
        self.offset(d_file, d_rank)
    }

    pub fn north(self) -> Result<Self, RuleError> {
        self.step(Direction::North)
    }

    pub fn south(self) -> Result<Self, RuleError> {
        self.step(Direction::South)
    }

    pub fn east(self) -> Result<Self, RuleError> {
        self.step(Direction::East)
    }

    pub fn west(self) -> Result<Self, RuleError> {
        self.step(Direction::West)
    }
}

impl fmt::Display for ChessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Move {
    pub from: ChessField,
    pub to: ChessField,
}

impl Move {
    pub fn new(from: ChessField, to: ChessField) -> Self {
        Self { from, to }
    }

    /// Parses long algebraic notation such as `e2e4`.
    pub fn from_algebraic(algebraic: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidMove(algebraic.to_string());
        if !algebraic.is_ascii() || algebraic.len() != 4 {
            return Err(invalid());
        }
        let from = ChessField::from_algebraic(&algebraic[0..2]).map_err(|_| invalid())?;
        let to = ChessField::from_algebraic(&algebraic[2..4]).map_err(|_| invalid())?;
        Ok(Self { from, to })
    }

    pub fn as_algebraic(&self) -> String {
        self.to_string()
    }

    pub fn delta(&self) -> MoveDelta {
        MoveDelta {
            d_file: self.to.file as i8 - self.from.file as i8,
            d_rank: self.to.rank as i8 - self.from.rank as i8,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Displacement of a move. The shape tests here look only at geometry, never
/// at occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDelta {
    pub d_file: i8,
    pub d_rank: i8,
}

impl MoveDelta {
    pub fn is_degenerate(&self) -> bool {
        self.d_file == 0 && self.d_rank == 0
    }

    /// Exactly one component is zero.
    pub fn is_orthogonal(&self) -> bool {
        (self.d_file == 0) != (self.d_rank == 0)
    }

    pub fn is_diagonal(&self) -> bool {
        self.d_file != 0 && self.d_file.abs() == self.d_rank.abs()
    }

    pub fn is_knight_jump(&self) -> bool {
        let (files, ranks) = (self.d_file.abs(), self.d_rank.abs());
        files + ranks == 3 && files <= 2 && ranks <= 2
    }

    pub fn is_king_step(&self) -> bool {
        self.distance() == 1
    }

    /// Chebyshev distance.
    pub fn distance(&self) -> i8 {
        self.d_file.abs().max(self.d_rank.abs())
    }

    pub fn unit(&self) -> (i8, i8) {
        (self.d_file.signum(), self.d_rank.signum())
    }
}
