// End-to-end behaviour of the projects section state machine.

use floor_core::presence::PresenceEvent;
use floor_core::{ClickTarget, HoverState, LayoutKind, ProjectId, Section, SectionEvent};

const DT: f32 = 1.0 / 60.0;

fn run(section: &mut Section, seconds: f32) -> Vec<SectionEvent> {
    let mut events = Vec::new();
    for _ in 0..(seconds / DT).ceil() as usize {
        events.extend(section.tick(DT).events);
    }
    events
}

#[test]
fn builtin_section_renders_eight_hidden_cards() {
    let mut s = Section::default();
    let frame = s.tick(DT);
    assert_eq!(frame.cards.len(), 8);
    assert!(frame.cards.iter().all(|c| c.visual.opacity == 0.0));
    assert!(frame.preview.is_none());
    assert!(frame.modal.is_none());
    assert!(frame.events.is_empty());
    assert!((frame.stage.rotate_x_deg - 40.0).abs() < 1e-4);
}

#[test]
fn revealed_cards_slide_in() {
    let mut s = Section::default();
    assert!(s.reveal_card(0));
    assert!(!s.reveal_card(0));
    assert!(!s.reveal_card(42));
    run(&mut s, 5.0);
    let frame = s.tick(DT);
    assert!((frame.cards[0].visual.opacity - 1.0).abs() < 0.01);
    assert_eq!(frame.cards[1].visual.opacity, 0.0);
}

#[test]
fn scroll_moves_floor() {
    let mut s = Section::default();
    let p = s.on_scroll(-2250.0, 5500.0, 1000.0);
    assert!((p - 0.5).abs() < 1e-6);
    let frame = s.tick(DT);
    assert!((frame.scroll.floor_y_pct + 145.0).abs() < 1e-3);
    assert_eq!(s.scroll_progress(), p);
}

#[test]
fn pointer_tilts_stage() {
    let mut s = Section::default();
    s.on_pointer_move(0.0, 0.0, 1000.0, 800.0);
    run(&mut s, 10.0);
    let frame = s.tick(DT);
    assert!((frame.stage.rotate_x_deg - 45.0).abs() < 0.01);
    assert!((frame.stage.rotate_y_deg + 5.0).abs() < 0.01);
}

#[test]
fn hover_mounts_preview_for_hovered_card() {
    let mut s = Section::default();
    assert!(s.on_card_enter(ProjectId(2)));
    let frame = s.tick(DT);
    assert_eq!(
        frame.events.as_slice(),
        &[SectionEvent::Preview(PresenceEvent::Mounted(ProjectId(2)))]
    );
    let preview = frame.preview.expect("preview");
    assert_eq!(preview.project, ProjectId(2));
    assert!(preview.interactive);
}

#[test]
fn unknown_card_is_ignored() {
    let mut s = Section::default();
    assert!(!s.on_card_enter(ProjectId(99)));
    assert!(!s.on_click(ProjectId(99)));
    assert_eq!(s.hover(), HoverState::Idle);
    assert_eq!(s.selected(), None);
}

#[test]
fn rapid_hover_then_leave_never_mounts() {
    let mut s = Section::default();
    s.on_card_enter(ProjectId(1));
    s.on_card_enter(ProjectId(2));
    s.on_card_leave();
    let frame = s.tick(DT);
    assert_eq!(s.hover(), HoverState::Idle);
    assert!(frame.preview.is_none());
    assert!(frame.events.is_empty());
}

#[test]
fn switching_cards_swaps_preview_after_exit() {
    let mut s = Section::default();
    s.on_card_enter(ProjectId(1));
    run(&mut s, 0.5);
    s.on_card_enter(ProjectId(2));
    let frame = s.tick(DT);
    assert_eq!(
        frame.events.as_slice(),
        &[SectionEvent::Preview(PresenceEvent::ExitStarted(ProjectId(1)))]
    );
    let exiting = frame.preview.expect("exiting preview");
    assert_eq!(exiting.project, ProjectId(1));
    assert!(!exiting.interactive);

    let events = run(&mut s, 0.3);
    assert_eq!(
        events,
        vec![
            SectionEvent::Preview(PresenceEvent::Unmounted(ProjectId(1))),
            SectionEvent::Preview(PresenceEvent::Mounted(ProjectId(2))),
        ]
    );
    assert_eq!(s.preview_mounted(), Some(ProjectId(2)));
}

#[test]
fn moving_onto_preview_keeps_it_open() {
    let mut s = Section::default();
    s.on_card_enter(ProjectId(5));
    s.tick(DT);
    s.on_card_leave();
    assert!(s.on_preview_enter(ProjectId(5)));
    let events = run(&mut s, 1.0);
    assert!(events.is_empty());
    assert_eq!(s.preview_mounted(), Some(ProjectId(5)));

    assert!(s.on_preview_leave(ProjectId(5)));
    let events = run(&mut s, 0.5);
    assert_eq!(
        events,
        vec![
            SectionEvent::Preview(PresenceEvent::ExitStarted(ProjectId(5))),
            SectionEvent::Preview(PresenceEvent::Unmounted(ProjectId(5))),
        ]
    );
}

#[test]
fn exiting_preview_ignores_pointer() {
    let mut s = Section::default();
    s.on_card_enter(ProjectId(6));
    s.tick(DT);
    s.on_card_leave();
    s.tick(DT);
    assert!(!s.on_preview_enter(ProjectId(6)));
    assert!(!s.on_preview_leave(ProjectId(6)));
    assert_eq!(s.hover(), HoverState::Idle);
}

#[test]
fn click_opens_modal_with_layout_renderer() {
    for (id, kind) in [
        (3, LayoutKind::Default),
        (1, LayoutKind::Gallery),
        (7, LayoutKind::ThreeD),
    ] {
        let mut s = Section::default();
        assert!(s.on_click(ProjectId(id)));
        let frame = s.tick(DT);
        assert_eq!(
            frame.events.as_slice(),
            &[SectionEvent::Modal(PresenceEvent::Mounted(ProjectId(id)))]
        );
        assert_eq!(frame.modal.expect("modal").project, ProjectId(id));
        let layout = s.catalog().get(ProjectId(id)).expect("builtin").layout.kind();
        assert_eq!(layout, kind);
        assert_eq!(s.gallery().is_some(), kind == LayoutKind::Gallery);
        assert_eq!(s.carousel().is_some(), kind == LayoutKind::ThreeD);
        assert_eq!(frame.carousel.is_some(), kind == LayoutKind::ThreeD);
    }
}

#[test]
fn clicking_live_preview_opens_its_modal() {
    let mut s = Section::default();
    s.on_card_enter(ProjectId(2));
    s.tick(DT);
    s.on_card_leave();
    assert!(s.on_preview_enter(ProjectId(2)));
    assert!(s.on_preview_click(ProjectId(2)));
    assert_eq!(s.selected(), Some(ProjectId(2)));
    let frame = s.tick(DT);
    assert!(frame
        .events
        .contains(&SectionEvent::Modal(PresenceEvent::Mounted(ProjectId(2)))));
    assert_eq!(s.modal_mounted(), Some(ProjectId(2)));
}

#[test]
fn clicking_exiting_or_foreign_preview_is_ignored() {
    let mut s = Section::default();
    s.on_card_enter(ProjectId(3));
    s.tick(DT);
    assert!(!s.on_preview_click(ProjectId(4)));

    s.on_card_leave();
    s.tick(DT);
    assert_eq!(s.preview_mounted(), Some(ProjectId(3)));
    assert!(!s.on_preview_click(ProjectId(3)));
    assert_eq!(s.selected(), None);
    s.tick(DT);
    assert_eq!(s.modal_mounted(), None);
}

#[test]
fn selecting_keeps_hover_and_ignores_it() {
    let mut s = Section::default();
    s.on_card_enter(ProjectId(4));
    s.tick(DT);
    assert!(s.on_click(ProjectId(4)));
    s.tick(DT);
    assert_eq!(s.hover(), HoverState::Hovering(ProjectId(4)));
    assert_eq!(s.selected(), Some(ProjectId(4)));
    assert_eq!(s.modal_mounted(), Some(ProjectId(4)));

    assert!(s.on_click(ProjectId(2)));
    s.tick(DT);
    assert_eq!(s.hover(), HoverState::Hovering(ProjectId(4)));
    assert_eq!(s.selected(), Some(ProjectId(2)));
}

#[test]
fn closing_modal_drops_session_after_exit() {
    let mut s = Section::default();
    s.on_click(ProjectId(7));
    run(&mut s, 1.0);
    assert_eq!(s.on_wheel(250.0), Some(250.0));
    run(&mut s, 2.0);
    assert!(s.carousel().expect("carousel").camera_x() > 0.9);

    assert!(s.on_modal_click(ClickTarget::Backdrop));
    let frame = s.tick(DT);
    assert!(!frame.modal.expect("still mounted").interactive);
    assert!(s.carousel().is_some());

    let events = run(&mut s, 3.0);
    assert!(events.contains(&SectionEvent::Modal(PresenceEvent::Unmounted(ProjectId(7)))));
    assert_eq!(s.modal_mounted(), None);
    assert!(s.carousel().is_none());
    assert_eq!(s.on_wheel(10.0), None);
}

#[test]
fn gallery_session_follows_modal_scroll() {
    let mut s = Section::default();
    s.on_click(ProjectId(1));
    s.tick(DT);
    let started = s.on_gallery_scroll(2500.0, 1920.0, 1000.0);
    assert_eq!(started.as_slice(), &[0, 1, 2]);
    s.on_gallery_pointer(300.0);
    let frame = s.tick(DT);
    let readout = frame.readout.expect("gallery readout");
    assert_eq!(readout.scroll_y, 2500);
    assert_eq!(readout.mouse_x, 300);
    assert_eq!(frame.overlays.len(), 15);

    assert!(s.close().is_some());
    run(&mut s, 3.0);
    assert!(s.gallery().is_none());
    assert!(s.on_gallery_scroll(2500.0, 1920.0, 1000.0).is_empty());
}

#[test]
fn escape_style_close_without_selection_is_noop() {
    let mut s = Section::default();
    assert_eq!(s.close(), None);
    assert!(!s.on_modal_click(ClickTarget::CloseButton));
    assert!(run(&mut s, 0.1).is_empty());
}

#[test]
fn long_or_bad_frames_are_clamped() {
    let mut s = Section::default();
    s.on_card_enter(ProjectId(1));
    s.tick(DT);
    s.on_card_leave();
    s.tick(f32::NAN);
    s.tick(-5.0);
    let frame = s.tick(60.0);
    assert!(frame.preview.is_some(), "one long frame must not finish the exit");
    let events = run(&mut s, 0.3);
    assert!(events.contains(&SectionEvent::Preview(PresenceEvent::Unmounted(ProjectId(1)))));
}
