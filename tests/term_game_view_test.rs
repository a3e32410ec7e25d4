use tui_2048::core::{BoardEngine, GameSnapshot, Grid};
use tui_2048::term::{tile_color, GameView, SlideAnimation, Viewport};
use tui_2048::types::{Direction, TerminalState};

/// Characters `from..` of row `y` (rows contain multi-byte border glyphs).
fn cols_from(fb: &tui_2048::term::FrameBuffer, y: u16, from: usize) -> String {
    fb.row_text(y).chars().skip(from).collect()
}

fn all_text(fb: &tui_2048::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // 4 tiles of 7x3 plus the border => 30x14
    assert_eq!(view.frame_size(), (30, 14));
    let fb = view.render(&snap, Viewport::new(30, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(29, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_labels_tiles_in_place() {
    let mut snap = GameSnapshot::default();
    snap.grid[0][0] = 2048;
    snap.grid[3][3] = 8;

    let fb = GameView::default().render(&snap, Viewport::new(30, 14));

    // Tile (r, c) occupies columns 1 + 7c.. and rows 1 + 3r..; the label sits on the middle row.
    let top: String = fb.row_text(2).chars().take(10).collect();
    assert!(top.contains("2048"), "{top:?}");
    let bottom = fb.row_text(11);
    assert!(bottom.trim_end_matches(['│', ' ']).ends_with('8'), "{bottom:?}");

    let tile = fb.get(1, 1).unwrap();
    assert_eq!(tile.style.bg, tile_color(2048));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameSnapshot::default();
    snap.score = 1234;
    snap.moves = 56;
    snap.best_tile = 128;

    let view = GameView::default();
    let narrow = all_text(&view.render(&snap, Viewport::new(30, 14)));
    assert!(!narrow.contains("SCORE"));

    let wide = all_text(&view.render(&snap, Viewport::new(60, 14)));
    assert!(wide.contains("SCORE"));
    assert!(wide.contains("1234"));
    assert!(wide.contains("MOVES"));
    assert!(wide.contains("56"));
}

#[test]
fn term_view_overlays_terminal_states() {
    let view = GameView::default();
    let vp = Viewport::new(40, 16);

    let mut snap = GameSnapshot::default();
    assert!(!all_text(&view.render(&snap, vp)).contains("GAME OVER"));

    snap.state = TerminalState::Won;
    let won = all_text(&view.render(&snap, vp));
    assert!(won.contains("YOU WIN!"));
    assert!(won.contains("r: new game"));

    snap.state = TerminalState::Lost;
    let lost = all_text(&view.render(&snap, vp));
    assert!(lost.contains("GAME OVER"));
    assert!(!lost.contains("YOU WIN!"));
}

#[test]
fn term_view_animates_then_settles() {
    let grid = Grid::from_rows([[2, 0, 0, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut engine = BoardEngine::from_grid(grid, 0);
    let before = engine.snapshot();
    let result = engine.apply_move(Direction::Left);
    let after = engine.snapshot();

    let mut anim = SlideAnimation::from_movements(&before, &result.movements);
    let view = GameView::default();
    let vp = Viewport::new(30, 14);
    let mut fb = tui_2048::term::FrameBuffer::new(30, 14);

    // First frame: nothing has moved yet, so the right-hand 2 is still drawn at column 3.
    view.render_animated_into(&after, &anim, vp, &mut fb);
    assert!(cols_from(&fb, 2, 20).contains('2'));

    while !anim.advance() {}
    assert!(anim.is_finished());

    view.render_into(&after, vp, &mut fb);
    assert!(fb.row_text(2).contains('4'));
    assert!(!cols_from(&fb, 2, 10).contains('2'));
}
