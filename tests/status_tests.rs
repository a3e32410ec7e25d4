//! Terminal-state detection tests

use tui_2048::core::{BoardEngine, Grid};
use tui_2048::types::{Direction, TerminalState};

const STUCK: [[u32; 4]; 4] = [[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]];

fn state_of(rows: [[u32; 4]; 4]) -> TerminalState {
    BoardEngine::from_grid(Grid::from_rows(rows).unwrap(), 0).is_terminal()
}

#[test]
fn test_fresh_engine_in_progress() {
    assert_eq!(BoardEngine::default().is_terminal(), TerminalState::InProgress);
}

#[test]
fn test_win_anywhere() {
    for idx in 0..16 {
        let mut rows = [[0; 4]; 4];
        rows[idx / 4][idx % 4] = 2048;
        assert_eq!(state_of(rows), TerminalState::Won, "2048 at {idx}");
    }
}

#[test]
fn test_win_regardless_of_other_cells() {
    let mut rows = STUCK;
    rows[2][1] = 2048;
    assert_eq!(state_of(rows), TerminalState::Won);
}

#[test]
fn test_loss_detection() {
    assert_eq!(state_of(STUCK), TerminalState::Lost);
}

#[test]
fn test_any_single_pair_flips_loss() {
    // Copy each cell onto each of its right and lower neighbours in turn.
    for r in 0..4 {
        for c in 0..4 {
            for (dr, dc) in [(0, 1), (1, 0)] {
                let (nr, nc) = (r + dr, c + dc);
                if nr >= 4 || nc >= 4 {
                    continue;
                }
                let mut rows = STUCK;
                rows[nr][nc] = rows[r][c];
                assert_eq!(
                    state_of(rows),
                    TerminalState::InProgress,
                    "pair at ({r},{c})-({nr},{nc})"
                );
            }
        }
    }
}

#[test]
fn test_single_empty_cell_is_in_progress() {
    let mut rows = STUCK;
    rows[3][3] = 0;
    assert_eq!(state_of(rows), TerminalState::InProgress);
}

#[test]
fn test_lost_board_has_no_moves() {
    let engine = BoardEngine::from_grid(Grid::from_rows(STUCK).unwrap(), 0);
    assert!(!engine.has_any_move());
    for dir in Direction::ALL {
        let mut probe = engine.clone();
        assert!(!probe.apply_move(dir).changed);
    }
}

#[test]
fn test_merge_reaching_2048_wins() {
    let mut engine = BoardEngine::from_grid(
        Grid::from_rows([[0; 4], [0, 1024, 0, 0], [0, 1024, 0, 0], [0; 4]]).unwrap(),
        0,
    );
    assert_eq!(engine.is_terminal(), TerminalState::InProgress);
    let result = engine.apply_move(Direction::Down);
    assert_eq!(result.score_delta, 2048);
    assert_eq!(engine.is_terminal(), TerminalState::Won);
}

#[test]
fn test_adjacent_max_tiles_do_not_keep_game_alive() {
    let max = 1 << 31;
    let mut rows = STUCK;
    rows[0][0] = max;
    rows[0][1] = max;
    assert_eq!(state_of(rows), TerminalState::Lost);

    let engine = BoardEngine::from_grid(Grid::from_rows(rows).unwrap(), 0);
    assert!(!engine.has_any_move());
}
