//! Leaf counting for move generator verification.

use tracing::debug;

use crate::board::Board;

/// Number of leaf positions `depth` plies below `board`.
///
/// Walks pseudo-legal moves with the same save, apply, restore cycle the
/// search uses; moves `make_move` rejects contribute nothing.
pub fn perft(board: &Board, depth: u32) -> u64 {
    let mut scratch = *board;
    count_leaves(&mut scratch, depth)
}

fn count_leaves(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for &mv in &board.generate_moves() {
        let saved = *board;
        if board.make_move(mv) {
            nodes += count_leaves(board, depth - 1);
        }
        *board = saved;
    }
    nodes
}

/// Per-root-move breakdown of [`perft`], sorted by move text.
///
/// `depth` is measured from `board`, so each entry counts `depth - 1` plies
/// below its move. A depth of 0 is treated as 1.
pub fn divide(board: &Board, depth: u32) -> Vec<(String, u64)> {
    let mut scratch = *board;
    let mut results = Vec::new();
    for &mv in &board.generate_moves() {
        let saved = scratch;
        if scratch.make_move(mv) {
            let nodes = count_leaves(&mut scratch, depth.saturating_sub(1));
            debug!(%mv, nodes, "divide");
            results.push((mv.to_string(), nodes));
        }
        scratch = saved;
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::{divide, perft};
    use crate::board::Board;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn depth_zero_is_one() {
        assert_eq!(perft(&Board::starting_position(), 0), 1);
    }

    #[test]
    fn startpos_shallow() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, 1), 20);
        assert_eq!(perft(&board, 2), 400);
        assert_eq!(perft(&board, 3), 8_902);
    }

    #[test]
    fn kiwipete_shallow() {
        let board: Board = KIWIPETE.parse().unwrap();
        assert_eq!(perft(&board, 1), 48);
        assert_eq!(perft(&board, 2), 2_039);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board: Board = KIWIPETE.parse().unwrap();
        let split = divide(&board, 2);
        assert_eq!(split.len(), 48);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), perft(&board, 2));
        assert!(split.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(split.iter().any(|(mv, _)| mv == "e1g1"));
    }

    #[test]
    fn perft_leaves_input_untouched() {
        let board = Board::starting_position();
        let copy = board;
        perft(&board, 2);
        assert_eq!(board, copy);
    }
}
