// Selection, close paths and renderer dispatch of the detail modal.

use floor_core::modal::{client_label, content_for, CloseButtonTheme, ModalAnimator};
use floor_core::{Catalog, ClickTarget, LayoutKind, ModalContent, ModalController, PresenceEvent, ProjectId};

fn run_until_unmounted(m: &mut ModalController) -> Vec<PresenceEvent<ProjectId>> {
    let mut seen = Vec::new();
    for _ in 0..300 {
        seen.extend(m.tick(1.0 / 60.0));
        if m.mounted().is_none() {
            break;
        }
    }
    seen
}

#[test]
fn select_mounts_on_next_tick() {
    let mut m = ModalController::default();
    m.select(ProjectId(3));
    assert_eq!(m.selected(), Some(ProjectId(3)));
    assert_eq!(m.mounted(), None);
    let ev = m.tick(1.0 / 60.0);
    assert_eq!(ev.as_slice(), &[PresenceEvent::Mounted(ProjectId(3))]);
    let v = m.visual().expect("animating");
    assert!(v.translate_y_pct > 0.0);
}

#[test]
fn content_click_never_closes() {
    let mut m = ModalController::default();
    m.select(ProjectId(1));
    m.tick(0.016);
    assert!(!m.handle_click(ClickTarget::Content));
    assert_eq!(m.selected(), Some(ProjectId(1)));
}

#[test]
fn backdrop_and_close_button_close() {
    for target in [ClickTarget::Backdrop, ClickTarget::CloseButton] {
        let mut m = ModalController::default();
        m.select(ProjectId(1));
        m.tick(0.016);
        assert!(m.handle_click(target));
        assert_eq!(m.selected(), None);
        assert!(!m.handle_click(target));
    }
}

#[test]
fn close_plays_exit_before_unmount() {
    let mut m = ModalController::default();
    m.select(ProjectId(2));
    for _ in 0..120 {
        m.tick(1.0 / 60.0);
    }
    let open = m.visual().expect("open");
    assert!(open.translate_y_pct.abs() < 0.05);
    assert!((open.backdrop_opacity - 1.0).abs() < 1e-6);

    assert_eq!(m.close(), Some(ProjectId(2)));
    let ev = m.tick(1.0 / 60.0);
    assert_eq!(ev.as_slice(), &[PresenceEvent::ExitStarted(ProjectId(2))]);
    assert_eq!(m.mounted(), Some(ProjectId(2)));

    let seen = run_until_unmounted(&mut m);
    assert_eq!(seen.last(), Some(&PresenceEvent::Unmounted(ProjectId(2))));
    assert!(m.visual().is_none());
    assert!(m.close().is_none());
}

#[test]
fn reselect_during_exit_reopens() {
    let mut m = ModalController::default();
    m.select(ProjectId(4));
    m.tick(0.1);
    m.close();
    m.tick(0.1);
    m.select(ProjectId(4));
    let ev = m.tick(0.1);
    assert_eq!(ev.as_slice(), &[PresenceEvent::Reentered(ProjectId(4))]);
}

#[test]
fn different_project_waits_for_exit() {
    let mut m = ModalController::default();
    m.select(ProjectId(1));
    m.tick(0.1);
    m.select(ProjectId(7));
    let ev = m.tick(0.1);
    assert_eq!(ev.as_slice(), &[PresenceEvent::ExitStarted(ProjectId(1))]);
    let seen = run_until_unmounted_or_switched(&mut m);
    assert!(seen.contains(&PresenceEvent::Unmounted(ProjectId(1))));
    assert_eq!(m.mounted(), Some(ProjectId(7)));
}

fn run_until_unmounted_or_switched(m: &mut ModalController) -> Vec<PresenceEvent<ProjectId>> {
    let mut seen = Vec::new();
    for _ in 0..300 {
        seen.extend(m.tick(1.0 / 60.0));
        if m.mounted() != Some(ProjectId(1)) {
            break;
        }
    }
    seen
}

#[test]
fn animator_exit_needs_backdrop_and_springs() {
    let mut a = ModalAnimator::opening();
    assert!(!a.is_exit_complete());
    a.close();
    assert!(a.is_closing());
    a.step(0.1);
    assert!(!a.is_exit_complete());
    for _ in 0..300 {
        a.step(1.0 / 60.0);
    }
    assert!(a.is_exit_complete());
    let v = a.visual();
    assert_eq!(v.backdrop_opacity, 0.0);
    assert_eq!(v.backdrop_rgba, [1.0, 1.0, 1.0, 0.0]);
}

#[test]
fn renderer_follows_layout() {
    let catalog = Catalog::builtin();
    let get = |id| catalog.get(ProjectId(id)).expect("builtin");

    assert!(matches!(content_for(get(3)), ModalContent::Default(p) if p.id == ProjectId(3)));
    match content_for(get(1)) {
        ModalContent::Gallery { images, overlays, .. } => {
            assert_eq!(images.len(), 2);
            assert_eq!(overlays.len(), 15);
        }
        other => panic!("expected gallery, got {other:?}"),
    }
    match content_for(get(2)) {
        ModalContent::Gallery { images, overlays, .. } => {
            assert_eq!(images.len(), 1);
            assert!(overlays.is_empty());
        }
        other => panic!("expected gallery, got {other:?}"),
    }
    match content_for(get(7)) {
        ModalContent::ThreeD { models, .. } => assert_eq!(models.len(), 3),
        other => panic!("expected 3d, got {other:?}"),
    }
}

#[test]
fn close_button_theme_and_client_label() {
    assert_eq!(CloseButtonTheme::for_layout(LayoutKind::Default), CloseButtonTheme::Light);
    assert_eq!(CloseButtonTheme::for_layout(LayoutKind::Gallery), CloseButtonTheme::Dark);
    assert_eq!(CloseButtonTheme::for_layout(LayoutKind::ThreeD), CloseButtonTheme::Dark);

    let catalog = Catalog::builtin();
    assert_eq!(client_label(catalog.get(ProjectId(1)).expect("1")), "DELI");
    assert_eq!(client_label(catalog.get(ProjectId(3)).expect("3")), "Client");
}
