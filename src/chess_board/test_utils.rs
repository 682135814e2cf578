use rand::Rng;
use rand_pcg::Pcg64;

use super::{ChessBoard, ChessField, Color, Move, Piece, PieceType, Square};

pub fn field(algebraic: &str) -> ChessField {
    ChessField::from_algebraic(algebraic).unwrap()
}

pub fn mv(algebraic: &str) -> Move {
    Move::from_algebraic(algebraic).unwrap()
}

pub fn white(kind: PieceType) -> Piece {
    Piece::new(Color::White, kind)
}

pub fn black(kind: PieceType) -> Piece {
    Piece::new(Color::Black, kind)
}

pub fn board_with(pieces: &[(&str, Piece)]) -> ChessBoard {
    let mut board = ChessBoard::new();
    for (square, piece) in pieces {
        board.put_piece(field(square), *piece);
    }
    board
}

pub fn assert_targets<I: IntoIterator<Item = ChessField>>(generated: I, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.into_iter().map(|f| f.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}

/// Fills each square with a random piece with probability `density`.
pub fn random_board(rng: &mut Pcg64, density: f64) -> ChessBoard {
    let mut board = ChessBoard::new();
    for field in ChessField::all() {
        if rng.gen_bool(density) {
            let color = if rng.gen_bool(0.5) { Color::White } else { Color::Black };
            let kind = PieceType::ALL[rng.gen_range(0..PieceType::ALL.len())];
            board.put_piece(field, Piece::new(color, kind));
        }
    }
    board
}

pub fn random_field(rng: &mut Pcg64) -> ChessField {
    ChessField::from_index(rng.gen_range(0..64)).unwrap()
}

/// Destinations of the piece on `from`, generated by walking directions
/// outward instead of testing every square. Used to cross-check the predicates.
pub fn reference_targets(board: &ChessBoard, from: ChessField) -> Vec<ChessField> {
    const KNIGHT_MOVES: [(i8, i8); 8] = [(-2, -1), (-1, -2), (1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1)];
    const KING_MOVES: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
    const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
    const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

    let piece = match board.square(from) {
        Square::Occupied(p) => p,
        Square::Empty => return Vec::new(),
    };
    let lands = |to: ChessField| match board.square(to) {
        Square::Empty => true,
        Square::Occupied(p) => p.color != piece.color,
    };

    let mut targets = Vec::new();
    let jumps = |offsets: &[(i8, i8)], targets: &mut Vec<ChessField>| {
        for &(df, dr) in offsets {
            if let Ok(to) = from.offset(df, dr) {
                if lands(to) {
                    targets.push(to);
                }
            }
        }
    };
    let slides = |directions: &[(i8, i8)], targets: &mut Vec<ChessField>| {
        for &(df, dr) in directions {
            let mut current = from;
            while let Ok(to) = current.offset(df, dr) {
                match board.square(to) {
                    Square::Empty => targets.push(to),
                    Square::Occupied(p) => {
                        if p.color != piece.color {
                            targets.push(to);
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    };

    match piece.kind {
        PieceType::Pawn => {
            let (_, forward) = piece.color.forward().delta();
            if let Ok(one) = from.offset(0, forward) {
                if board.square(one).is_empty() {
                    targets.push(one);
                    if from.rank() == piece.color.pawn_start_rank() {
                        if let Ok(two) = from.offset(0, 2 * forward) {
                            if board.square(two).is_empty() {
                                targets.push(two);
                            }
                        }
                    }
                }
            }
            for side in [-1, 1] {
                if let Ok(to) = from.offset(side, forward) {
                    if let Square::Occupied(p) = board.square(to) {
                        if p.color != piece.color {
                            targets.push(to);
                        }
                    }
                }
            }
        }
        PieceType::Knight => jumps(&KNIGHT_MOVES, &mut targets),
        PieceType::King => jumps(&KING_MOVES, &mut targets),
        PieceType::Bishop => slides(&BISHOP_DIRECTIONS, &mut targets),
        PieceType::Rook => slides(&ROOK_DIRECTIONS, &mut targets),
        PieceType::Queen => {
            slides(&BISHOP_DIRECTIONS, &mut targets);
            slides(&ROOK_DIRECTIONS, &mut targets);
        }
    }
    targets.sort();
    targets
}
