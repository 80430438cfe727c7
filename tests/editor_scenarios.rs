use eframe_whiteboard::config::parse_color;
use eframe_whiteboard::{Editor, EditorState, InputEvent, Renderer, WhiteboardConfig};
use egui::{Color32, PointerButton, Pos2, Rect, Shape};

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        pos: Pos2::new(x, y),
        button: PointerButton::Primary,
    }
}

fn drag(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove { pos: Pos2::new(x, y) }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp {
        pos: Pos2::new(x, y),
        button: PointerButton::Primary,
    }
}

fn draw_line(editor: &mut Editor, from: Pos2, to: Pos2) {
    editor.handle_event(down(from.x, from.y));
    editor.handle_event(drag((from.x + to.x) / 2.0, (from.y + to.y) / 2.0));
    editor.handle_event(drag(to.x, to.y));
    editor.handle_event(up(to.x, to.y));
}

#[test]
fn test_basic_stroke() {
    let mut editor = Editor::default();
    let past_before = editor.history().past_len();

    editor
        .begin_stroke_with(Pos2::new(100.0, 100.0), parse_color("#000000").unwrap(), 5.0)
        .unwrap();
    editor.extend_stroke(Pos2::new(110.0, 100.0)).unwrap();
    editor.extend_stroke(Pos2::new(120.0, 100.0)).unwrap();
    editor.commit_stroke().unwrap();

    let strokes = editor.document().strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].color(), Color32::BLACK);
    assert_eq!(strokes[0].width(), 5.0);
    assert_eq!(
        strokes[0].points(),
        &[Pos2::new(100.0, 100.0), Pos2::new(110.0, 100.0), Pos2::new(120.0, 100.0)]
    );
    assert_eq!(editor.history().past_len(), past_before + 1);
    assert_eq!(editor.history().future_len(), 0);
    assert!(editor.state().is_idle());
}

#[test]
fn test_stroke_through_events() {
    let mut editor = Editor::default();
    assert!(editor.handle_event(down(10.0, 10.0)));
    assert!(matches!(editor.state(), EditorState::Drawing(_)));
    // Nothing is committed mid-gesture.
    assert!(editor.document().is_empty());
    assert_eq!(editor.history().past_len(), 1);

    editor.handle_event(drag(20.0, 10.0));
    editor.handle_event(drag(30.0, 15.0));
    assert!(editor.handle_event(up(30.0, 15.0)));

    assert_eq!(editor.document().strokes()[0].points().len(), 3);
    assert_eq!(editor.history().past_len(), 2);
}

#[test]
fn test_strokes_are_stored_in_logical_space() {
    let mut editor = Editor::default();
    editor.handle_event(InputEvent::PointerDown {
        pos: Pos2::new(0.0, 0.0),
        button: PointerButton::Middle,
    });
    editor.handle_event(drag(100.0, 50.0));
    editor.handle_event(InputEvent::PointerUp {
        pos: Pos2::new(100.0, 50.0),
        button: PointerButton::Middle,
    });
    assert!(editor.state().is_idle());

    editor.handle_event(down(100.0, 50.0));
    editor.handle_event(up(100.0, 50.0));

    let stroke = &editor.document().strokes()[0];
    assert_eq!(stroke.points(), &[Pos2::new(0.0, 0.0)]);
}

#[test]
fn test_clear_then_undo() {
    let mut editor = Editor::default();
    draw_line(&mut editor, Pos2::new(0.0, 0.0), Pos2::new(50.0, 50.0));
    draw_line(&mut editor, Pos2::new(0.0, 50.0), Pos2::new(50.0, 0.0));
    assert_eq!(editor.history().past_len(), 3);
    let two_strokes = editor.document().clone();

    assert!(editor.handle_event(InputEvent::Clear));
    assert_eq!(editor.history().past_len(), 4);
    assert!(editor.document().is_empty());

    assert!(editor.handle_event(InputEvent::Undo));
    assert_eq!(editor.document(), &two_strokes);
}

#[test]
fn test_clear_empty_board_is_recorded() {
    let mut editor = Editor::default();
    editor.clear();
    assert_eq!(editor.history().past_len(), 2);
    assert!(editor.undo());
    assert!(!editor.undo());
}

#[test]
fn test_eraser_paints_over_earlier_strokes() {
    let config = WhiteboardConfig::default();
    let mut editor = Editor::from_config(&config).unwrap();
    let background = parse_color(&config.background_color).unwrap();

    draw_line(&mut editor, Pos2::new(10.0, 10.0), Pos2::new(90.0, 10.0));
    editor.tools_mut().toggle_eraser();
    draw_line(&mut editor, Pos2::new(50.0, 0.0), Pos2::new(50.0, 20.0));

    let strokes = editor.document().strokes();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[1].color(), background);
    assert_eq!(strokes[1].width(), config.eraser_width);
    assert_eq!(editor.history().past_len(), 3);

    // The eraser line is painted after the pen line, so it covers it.
    let renderer = Renderer::new(background);
    let viewport = Rect::from_min_size(Pos2::ZERO, egui::vec2(200.0, 200.0));
    let shapes = renderer.frame_shapes(editor.document(), None, editor.view(), viewport);
    let mut colors: Vec<Color32> = shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::Circle(cap) => Some(cap.fill),
            _ => None,
        })
        .collect();
    colors.dedup();
    assert_eq!(colors, vec![Color32::BLACK, background]);

    // Undo removes the eraser stroke like any other.
    assert!(editor.undo());
    assert_eq!(editor.document().len(), 1);
}

#[test]
fn test_undo_during_stroke_keeps_gesture() {
    let mut editor = Editor::default();
    draw_line(&mut editor, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));

    editor.handle_event(down(5.0, 5.0));
    editor.handle_event(InputEvent::Undo);
    assert!(editor.document().is_empty());
    editor.handle_event(up(5.0, 5.0));

    assert_eq!(editor.document().len(), 1);
    assert_eq!(editor.history().current(), Some(&editor.document().snapshot()));
}

#[test]
fn test_zoom_does_not_touch_history() {
    let mut editor = Editor::default();
    draw_line(&mut editor, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));
    for _ in 0..5 {
        editor.handle_event(InputEvent::Wheel {
            pos: Pos2::new(40.0, 40.0),
            delta_y: 1.0,
        });
    }
    assert_eq!(editor.history().past_len(), 2);
    assert!(editor.view().scale() > 1.5);
}
