use arbor_term::{
    convert_event, Event, Key, KeyEvent, Modifiers, MouseAction, MouseActionKind, MouseButton,
    Rect,
};
use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent as CtKeyEvent, KeyEventKind, KeyEventState,
    KeyModifiers, MouseEvent, MouseEventKind,
};

fn ct_key(code: KeyCode, modifiers: KeyModifiers) -> CtEvent {
    CtEvent::Key(CtKeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn ct_mouse(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Key conversion
// ============================================================================

#[test]
fn test_key_press_converts_with_modifiers() {
    let event = convert_event(ct_key(KeyCode::Down, KeyModifiers::SHIFT));

    assert_eq!(
        event,
        Some(Event::Key(KeyEvent::new(Key::Down, Modifiers::shift())))
    );
}

#[test]
fn test_key_release_is_dropped() {
    let event = CtEvent::Key(CtKeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });

    assert_eq!(convert_event(event), None);
}

#[test]
fn test_unsupported_key_is_dropped() {
    assert_eq!(convert_event(ct_key(KeyCode::CapsLock, KeyModifiers::NONE)), None);
}

#[test]
fn test_modifiers_none() {
    assert!(Modifiers::new().none());
    assert!(!Modifiers::ctrl().none());
    assert!(!Modifiers::alt().none());
    assert_eq!(KeyEvent::from(Key::Tab), KeyEvent::plain(Key::Tab));
}

// ============================================================================
// Mouse conversion
// ============================================================================

#[test]
fn test_mouse_down_converts_to_click() {
    let event = convert_event(ct_mouse(
        MouseEventKind::Down(crossterm::event::MouseButton::Left),
        3,
        7,
    ));

    assert_eq!(
        event,
        Some(Event::Mouse(MouseAction::new(
            MouseActionKind::ClickDown(MouseButton::Left),
            3,
            7
        )))
    );
}

#[test]
fn test_mouse_scroll_converts() {
    let up = convert_event(ct_mouse(MouseEventKind::ScrollUp, 0, 0));
    let down = convert_event(ct_mouse(MouseEventKind::ScrollDown, 0, 0));

    assert!(matches!(
        up,
        Some(Event::Mouse(MouseAction { kind: MouseActionKind::ScrollUp, .. }))
    ));
    assert!(matches!(
        down,
        Some(Event::Mouse(MouseAction { kind: MouseActionKind::ScrollDown, .. }))
    ));
}

#[test]
fn test_resize_converts() {
    assert_eq!(
        convert_event(CtEvent::Resize(80, 24)),
        Some(Event::Resize { width: 80, height: 24 })
    );
}

#[test]
fn test_mouse_relative_to_area() {
    let action = MouseAction::new(MouseActionKind::ScrollUp, 12, 6);
    let area = Rect::new(10, 4, 5, 5);

    let relative = action.relative_to(area).unwrap();
    assert_eq!((relative.x, relative.y), (2, 2));

    let outside = MouseAction::new(MouseActionKind::ScrollUp, 9, 6);
    assert_eq!(outside.relative_to(area), None);
}
