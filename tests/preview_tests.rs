// Hover preview panel entrance, exit and tool icons.

use floor_core::preview::{tool_icon_slot, PreviewAnimator, PreviewEntrance};
use floor_core::{Catalog, ProjectId};

fn settle(anim: &mut PreviewAnimator) {
    for _ in 0..300 {
        anim.step(1.0 / 60.0);
    }
}

#[test]
fn entrance_pose_is_stable_per_project() {
    let a = PreviewEntrance::for_project(ProjectId(3));
    assert_eq!(a, PreviewEntrance::for_project(ProjectId(3)));
    assert_eq!(a.x_px, 651.0);
    assert_eq!(a.y_px, -9.0);
    assert_ne!(a, PreviewEntrance::for_project(ProjectId(4)));
    for id in 1..=8 {
        let e = PreviewEntrance::for_project(ProjectId(id));
        assert!((600.0..900.0).contains(&e.x_px));
        assert!((-120.0..120.0).contains(&e.y_px));
        assert!((-5.0..5.0).contains(&e.rotate_z_rest_deg));
    }
}

#[test]
fn tool_icons_alternate_and_step_down() {
    assert_eq!(tool_icon_slot(0), (80.0, 10.0));
    assert_eq!(tool_icon_slot(1), (100.0, 25.0));
    assert_eq!(tool_icon_slot(2), (80.0, 40.0));
}

#[test]
fn preview_springs_into_place() {
    let catalog = Catalog::builtin();
    let project = catalog.get(ProjectId(1)).expect("builtin");
    let mut anim = PreviewAnimator::enter(project);
    let start = anim.visual();
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.scale, 0.85);
    assert_eq!(anim.tool_icons().len(), project.tools.len());
    assert!(anim.tool_icons().iter().all(|t| t.scale == 0.0));

    settle(&mut anim);
    let rest = anim.visual();
    assert!(rest.x_px.abs() < 0.05);
    assert!((rest.opacity - 1.0).abs() < 0.01);
    assert_eq!(rest.blur_px, 0.0);
    let rest_z = PreviewEntrance::for_project(ProjectId(1)).rotate_z_rest_deg;
    assert!((rest.rotate_z_deg - rest_z).abs() < 0.05);
    assert!(anim.tool_icons().iter().all(|t| (t.scale - 1.0).abs() < 0.01));
}

#[test]
fn tool_icons_are_staggered() {
    let catalog = Catalog::builtin();
    let mut anim = PreviewAnimator::enter(catalog.get(ProjectId(1)).expect("builtin"));
    anim.step(0.15);
    let icons = anim.tool_icons();
    assert!(icons[0].scale > 0.0);
    assert_eq!(icons[1].scale, 0.0);
}

#[test]
fn exit_blurs_out_and_reenter_recovers() {
    let catalog = Catalog::builtin();
    let mut anim = PreviewAnimator::enter(catalog.get(ProjectId(4)).expect("builtin"));
    settle(&mut anim);

    anim.exit();
    assert!(anim.is_exiting());
    anim.step(0.25);
    let gone = anim.visual();
    assert!(gone.opacity.abs() < 1e-6);
    assert!((gone.blur_px - 10.0).abs() < 1e-4);
    assert!((gone.x_px - 150.0).abs() < 1e-3);
    assert!((gone.scale - 0.95).abs() < 1e-5);

    anim.reenter();
    assert!(!anim.is_exiting());
    assert_eq!(anim.visual().blur_px, 0.0);
    settle(&mut anim);
    assert!((anim.visual().opacity - 1.0).abs() < 0.01);
}
