//! GameView rendering of live game snapshots

use termtris::core::GameState;
use termtris::term::{GameView, Viewport};
use termtris::types::GameAction;

fn contains_text(fb: &termtris::term::FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn renders_a_fresh_game() {
    let state = GameState::new(12345);
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));

    assert!(contains_text(&fb, "SCORE"));
    assert!(contains_text(&fb, "NEXT"));
    assert!(!contains_text(&fb, "PAUSED"));

    // Active piece plus its ghost: 4 blocks of 2 columns each, plus 4 ghost cells.
    let blocks = fb.glyphs().iter().filter(|g| g.ch == '█').count();
    let ghosts = fb.glyphs().iter().filter(|g| g.ch == '░').count();
    assert!(blocks >= 8, "expected the active piece, got {} block glyphs", blocks);
    assert_eq!(ghosts, 8);
}

#[test]
fn score_updates_after_hard_drop() {
    let mut state = GameState::new(12345);
    state.apply_action(GameAction::HardDrop);
    let score = state.score().to_string();

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
    assert!(contains_text(&fb, &score));
}

#[test]
fn render_into_reuses_framebuffer_across_sizes() {
    let state = GameState::new(1);
    let view = GameView::default();
    let mut fb = termtris::term::FrameBuffer::new(0, 0);

    view.render_into(&state.snapshot(), Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    view.render_into(&state.snapshot(), Viewport::new(40, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 30));
    assert!(contains_text(&fb, "SCORE"));
}

#[test]
fn paused_and_game_over_overlays() {
    let mut state = GameState::new(7);
    state.apply_action(GameAction::Pause);
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
    assert!(contains_text(&fb, "PAUSED"));

    state.apply_action(GameAction::Pause);
    while !state.game_over() {
        state.apply_action(GameAction::HardDrop);
    }
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(80, 24));
    assert!(contains_text(&fb, "GAME OVER"));
}
