use blackboard::board::Board;
use blackboard::input::surface_local;
use egui::{pos2, Pos2};

// Helper to draw one full gesture through the given points
fn draw_stroke(board: &mut Board, points: &[Pos2]) {
    let (first, rest) = points.split_first().expect("stroke needs a point");
    board.begin(*first);
    for point in rest {
        board.extend(*point);
    }
    board.end();
}

#[test]
fn test_gesture_commits_recorded_points_in_order() {
    let mut board = Board::new();

    board.begin(pos2(10.0, 10.0));
    board.extend(pos2(20.0, 20.0));
    board.extend(pos2(30.0, 10.0));
    assert!(board.is_drawing());
    assert_eq!(board.strokes().len(), 0);

    board.end();
    assert!(!board.is_drawing());
    assert_eq!(board.strokes().len(), 1);
    assert_eq!(
        board.strokes()[0].points(),
        &[pos2(10.0, 10.0), pos2(20.0, 20.0), pos2(30.0, 10.0)]
    );

    // And the spec scenario finishes with a clear
    board.clear();
    assert!(board.strokes().is_empty());
}

#[test]
fn test_each_gesture_commits_exactly_one_stroke() {
    let mut board = Board::new();

    draw_stroke(&mut board, &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    assert_eq!(board.strokes().len(), 1);

    draw_stroke(&mut board, &[pos2(5.0, 5.0)]);
    assert_eq!(board.strokes().len(), 2);

    // A tap with no movement is retained even though it renders invisibly
    assert_eq!(board.strokes()[1].points(), &[pos2(5.0, 5.0)]);
}

#[test]
fn test_extend_without_gesture_is_noop() {
    let mut board = Board::new();

    board.extend(pos2(10.0, 10.0));
    board.end();
    assert!(board.strokes().is_empty());
    assert!(!board.is_drawing());
}

#[test]
fn test_end_without_points_is_noop() {
    let mut board = Board::new();

    board.end();
    board.end();
    assert!(board.strokes().is_empty());
}

#[test]
fn test_begin_replaces_previous_in_progress_stroke() {
    let mut board = Board::new();

    board.begin(pos2(1.0, 1.0));
    board.extend(pos2(2.0, 2.0));
    // A new begin without an end discards the earlier points
    board.begin(pos2(9.0, 9.0));
    board.end();

    assert_eq!(board.strokes().len(), 1);
    assert_eq!(board.strokes()[0].points(), &[pos2(9.0, 9.0)]);
}

#[test]
fn test_undo_is_strictly_lifo() {
    let mut board = Board::new();

    let a = [pos2(1.0, 1.0), pos2(2.0, 2.0)];
    let b = [pos2(3.0, 3.0), pos2(4.0, 4.0)];
    let c = [pos2(5.0, 5.0), pos2(6.0, 6.0)];
    draw_stroke(&mut board, &a);
    draw_stroke(&mut board, &b);
    draw_stroke(&mut board, &c);

    board.undo();
    assert_eq!(board.strokes().len(), 2);
    assert_eq!(board.strokes()[1].points(), &b);

    board.undo();
    assert_eq!(board.strokes().len(), 1);
    assert_eq!(board.strokes()[0].points(), &a);
}

#[test]
fn test_undo_on_empty_board_is_noop() {
    let mut board = Board::new();

    board.undo();
    assert!(board.strokes().is_empty());
}

#[test]
fn test_undo_does_not_touch_in_progress_stroke() {
    let mut board = Board::new();

    draw_stroke(&mut board, &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    board.begin(pos2(7.0, 7.0));
    board.extend(pos2(8.0, 8.0));

    board.undo();
    assert!(board.strokes().is_empty());
    assert_eq!(board.current_points(), &[pos2(7.0, 7.0), pos2(8.0, 8.0)]);

    // The surviving gesture still commits normally
    board.end();
    assert_eq!(board.strokes().len(), 1);
}

#[test]
fn test_clear_empties_committed_strokes_unconditionally() {
    let mut board = Board::new();

    board.clear(); // no-op on an empty board

    for i in 0..5 {
        let base = i as f32 * 10.0;
        draw_stroke(&mut board, &[pos2(base, base), pos2(base + 1.0, base)]);
    }
    assert_eq!(board.strokes().len(), 5);

    // Clear works mid-gesture and leaves the gesture alone
    board.begin(pos2(50.0, 50.0));
    board.clear();
    assert!(board.strokes().is_empty());
    assert!(board.is_drawing());
}

#[test]
fn test_mouse_and_touch_paths_yield_identical_strokes() {
    // Both input sources reduce to the same normalization function, so
    // identical client coordinates must produce identical strokes.
    let origin = pos2(50.0, 40.0);
    let client_points = [pos2(60.0, 50.0), pos2(70.0, 60.0), pos2(80.0, 50.0)];

    let mut from_mouse = Board::new();
    let mut from_touch = Board::new();
    for board in [&mut from_mouse, &mut from_touch] {
        let local: Vec<Pos2> = client_points
            .iter()
            .map(|p| surface_local(origin, *p))
            .collect();
        draw_stroke(board, &local);
    }

    assert_eq!(from_mouse.strokes().len(), from_touch.strokes().len());
    assert_eq!(
        from_mouse.strokes()[0].points(),
        from_touch.strokes()[0].points()
    );
    assert_eq!(
        from_mouse.strokes()[0].points(),
        &[pos2(10.0, 10.0), pos2(20.0, 20.0), pos2(30.0, 10.0)]
    );
}
