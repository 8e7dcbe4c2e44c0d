//! Attack sets: precomputed leaper tables and ray-walked slider attacks.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::square::Square;

/// Walk every (file, rank) delta once from each square and collect the landing squares.
const fn leaper_table(deltas: [(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < deltas.len() {
            let f = file + deltas[d].0;
            let r = rank + deltas[d].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << (r * 8 + f);
            }
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

const fn pawn_table(color: Color) -> [Bitboard; 64] {
    let dr: i8 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    // Repeat the two captures to fill the fixed-size delta array; duplicates are harmless.
    leaper_table([(-1, dr), (1, dr), (-1, dr), (1, dr), (-1, dr), (1, dr), (-1, dr), (1, dr)])
}

static KNIGHT: [Bitboard; 64] = leaper_table([
    (1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2),
]);

static KING: [Bitboard; 64] = leaper_table([
    (0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1),
]);

static PAWN: [[Bitboard; 64]; 2] = [pawn_table(Color::White), pawn_table(Color::Black)];

/// Slider directions as (file delta, rank delta). The first four increase the square index.
const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),   // north
    (1, 0),   // east
    (1, 1),   // north-east
    (-1, 1),  // north-west
    (0, -1),  // south
    (-1, 0),  // west
    (-1, -1), // south-west
    (1, -1),  // south-east
];

const ORTHOGONAL: [usize; 4] = [0, 1, 4, 5];
const DIAGONAL: [usize; 4] = [2, 3, 6, 7];

/// Empty-board rays, indexed by direction then origin square (origin excluded).
static RAYS: [[Bitboard; 64]; 8] = {
    let mut table = [[Bitboard::EMPTY; 64]; 8];
    let mut dir = 0;
    while dir < 8 {
        let (df, dr) = DIRECTIONS[dir];
        let mut sq = 0;
        while sq < 64 {
            let mut f = (sq % 8) as i8 + df;
            let mut r = (sq / 8) as i8 + dr;
            let mut bits = 0u64;
            while f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << (r * 8 + f);
                f += df;
                r += dr;
            }
            table[dir][sq] = Bitboard::new(bits);
            sq += 1;
        }
        dir += 1;
    }
    table
};

/// Squares a ray from `sq` reaches, stopping at (and including) the first blocker.
#[inline]
fn ray_attacks(dir: usize, sq: Square, occupied: Bitboard) -> Bitboard {
    let ray = RAYS[dir][sq.index()];
    let blockers = (ray & occupied).bits();
    if blockers == 0 {
        return ray;
    }
    let nearest = if dir < 4 {
        blockers.trailing_zeros()
    } else {
        63 - blockers.leading_zeros()
    };
    ray ^ RAYS[dir][nearest as usize]
}

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING[sq.index()]
}

/// Squares a pawn of `color` standing on `sq` captures on.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN[color.index()][sq.index()]
}

pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ORTHOGONAL
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(dir, sq, occupied))
}

pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    DIAGONAL
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(dir, sq, occupied))
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}
