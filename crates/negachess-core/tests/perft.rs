//! Published perft counts for the standard test positions.
//!
//! Shallow depths run by default; the deeper ones are ignored and can be run
//! with `cargo test --release -- --ignored`.

use negachess_core::{Board, divide, perft};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

fn count(fen: &str, depth: u32) -> u64 {
    let board: Board = fen.parse().unwrap();
    perft(&board, depth)
}

// ── Starting position ────────────────────────────────────────────────────────

#[test]
fn startpos_depth_4() {
    assert_eq!(perft(&Board::starting_position(), 4), 197_281);
}

#[test]
#[ignore] // slow
fn startpos_depth_5() {
    assert_eq!(perft(&Board::starting_position(), 5), 4_865_609);
}

// ── Kiwipete: castling, en passant, promotions, pins ─────────────────────────

#[test]
fn kiwipete_depth_3() {
    assert_eq!(count(KIWIPETE, 3), 97_862);
}

#[test]
#[ignore] // slow
fn kiwipete_depth_4() {
    assert_eq!(count(KIWIPETE, 4), 4_085_603);
}

// ── Position 3: rook endgame with en passant discovered checks ──────────────

#[test]
fn position_3_shallow() {
    assert_eq!(count(POSITION_3, 1), 14);
    assert_eq!(count(POSITION_3, 2), 191);
    assert_eq!(count(POSITION_3, 3), 2_812);
}

#[test]
fn position_3_depth_4() {
    assert_eq!(count(POSITION_3, 4), 43_238);
}

// ── Position 4: promotions and castling out of check ────────────────────────

#[test]
fn position_4_shallow() {
    assert_eq!(count(POSITION_4, 1), 6);
    assert_eq!(count(POSITION_4, 2), 264);
    assert_eq!(count(POSITION_4, 3), 9_467);
}

#[test]
#[ignore] // slow
fn position_4_depth_4() {
    assert_eq!(count(POSITION_4, 4), 422_333);
}

// ── Position 5 ───────────────────────────────────────────────────────────────

#[test]
fn position_5_shallow() {
    assert_eq!(count(POSITION_5, 1), 44);
    assert_eq!(count(POSITION_5, 2), 1_486);
    assert_eq!(count(POSITION_5, 3), 62_379);
}

#[test]
#[ignore] // slow
fn position_5_depth_4() {
    assert_eq!(count(POSITION_5, 4), 2_103_487);
}

// ── divide ───────────────────────────────────────────────────────────────────

#[test]
fn divide_matches_known_split() {
    let board = Board::starting_position();
    let split = divide(&board, 3);
    assert_eq!(split.len(), 20);
    let e2e4 = split.iter().find(|(mv, _)| mv == "e2e4").map(|(_, n)| *n);
    assert_eq!(e2e4, Some(600));
    let g1f3 = split.iter().find(|(mv, _)| mv == "g1f3").map(|(_, n)| *n);
    assert_eq!(g1f3, Some(440));
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8_902);
}
