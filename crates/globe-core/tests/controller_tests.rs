// Host-side tests for the scroll / hover region controller.

use globe_core::*;

fn make_controller() -> RegionHighlightController {
    RegionHighlightController::new(RegionCatalog::default(), &ControllerConfig::default())
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// Scroll forward until the wheel is handed back to the page.
fn scroll_to_end(c: &mut RegionHighlightController, delta: f64) -> Vec<WheelOutcome> {
    let mut outcomes = Vec::new();
    for _ in 0..100 {
        let out = c.on_wheel(delta);
        outcomes.push(out);
        if matches!(out, WheelOutcome::PassThrough { .. }) {
            break;
        }
    }
    outcomes
}

#[test]
fn starts_on_india_at_mount_orientation() {
    let c = make_controller();
    assert_eq!(c.selection().region, RegionId::India);
    assert_eq!(c.rotation(), RotationState::new(-1.35, 0.3));
    assert!(!c.has_pending_refresh());
}

#[test]
fn first_forward_scroll_moves_into_africa() {
    let mut c = make_controller();
    let out = c.on_wheel(20.0);
    assert_eq!(
        out,
        WheelOutcome::Rotated {
            region: RegionId::Africa,
            refresh: false
        }
    );
    assert_eq!(c.active_set().id(), RegionId::Africa);
    assert!(approx(c.rotation().yaw, -1.2));
    assert!(approx(c.rotation().pitch, 0.25));
}

#[test]
fn dead_zone_leaves_state_untouched() {
    let mut c = make_controller();
    // Move somewhere off the initial state first.
    c.on_wheel(40.0);
    c.on_wheel(40.0);
    let before = c.frame_state();
    for dy in [-10.0, -9.5, -1.0, -0.0, 0.0, 0.5, 5.0, 10.0] {
        assert_eq!(c.on_wheel(dy), WheelOutcome::Ignored, "dy={dy}");
        assert_eq!(c.frame_state(), before, "dy={dy}");
    }
    assert_eq!(c.on_wheel(f64::NAN), WheelOutcome::Ignored);
    assert_eq!(c.frame_state(), before);
}

#[test]
fn small_wheel_is_a_no_op_from_any_state() {
    let mut c = make_controller();
    for id in [2, 0, 1] {
        c.on_hover_select(id).unwrap();
        c.take_pending_refresh();
        let before = c.frame_state();
        assert_eq!(c.on_wheel(5.0), WheelOutcome::Ignored);
        assert_eq!(c.frame_state(), before);
        assert!(!c.has_pending_refresh());
    }
}

#[test]
fn forward_scroll_is_monotonic_until_pass_through() {
    let mut c = make_controller();
    let mut prev_yaw = c.rotation().yaw;
    let outcomes = scroll_to_end(&mut c, 30.0);
    let (last, steps) = outcomes.split_last().unwrap();
    assert!(matches!(last, WheelOutcome::PassThrough { delta_y } if *delta_y == 30.0));
    assert!(steps.len() > 4);

    let mut c2 = make_controller();
    for _ in steps {
        c2.on_wheel(30.0);
        let yaw = c2.rotation().yaw;
        assert!(yaw > prev_yaw, "yaw did not increase: {prev_yaw} -> {yaw}");
        prev_yaw = yaw;
    }
    assert!(c2.rotation().yaw >= 1.09);
    assert_eq!(c2.selection().region, RegionId::Westerns);

    let end = c2.frame_state();
    for _ in 0..5 {
        assert!(matches!(c2.on_wheel(30.0), WheelOutcome::PassThrough { .. }));
        assert_eq!(c2.frame_state(), end);
    }
}

#[test]
fn forward_region_cycle_is_africa_then_westerns() {
    let mut c = make_controller();
    let regions: Vec<RegionId> = scroll_to_end(&mut c, 15.0)
        .into_iter()
        .filter_map(|o| match o {
            WheelOutcome::Rotated { region, .. } => Some(region),
            _ => None,
        })
        .collect();
    let first_westerns = regions
        .iter()
        .position(|r| *r == RegionId::Westerns)
        .unwrap();
    assert!(first_westerns > 0);
    assert!(regions[..first_westerns].iter().all(|r| *r == RegionId::Africa));
    assert!(regions[first_westerns..].iter().all(|r| *r == RegionId::Westerns));
}

#[test]
fn backward_scroll_mirrors_forward_table() {
    let mut c = make_controller();
    scroll_to_end(&mut c, 30.0);

    let mut regions = Vec::new();
    loop {
        let before = c.rotation();
        match c.on_wheel(-30.0) {
            WheelOutcome::Rotated { region, refresh } => {
                assert!(!refresh);
                let after = c.rotation();
                let (d_yaw, d_pitch) = (after.yaw - before.yaw, after.pitch - before.pitch);
                // Each backward step undoes the matching forward step.
                match region {
                    RegionId::Africa => {
                        assert!(approx(d_yaw, -0.2) && approx(d_pitch, 0.03));
                    }
                    RegionId::India => {
                        assert!(approx(d_yaw, -0.15) && approx(d_pitch, 0.05));
                    }
                    RegionId::Westerns => panic!("backward scroll selected westerns"),
                }
                regions.push(region);
            }
            WheelOutcome::PassThrough { delta_y } => {
                assert_eq!(delta_y, -30.0);
                break;
            }
            WheelOutcome::Ignored => panic!("large delta ignored"),
        }
    }
    let first_india = regions.iter().position(|r| *r == RegionId::India).unwrap();
    assert!(regions[..first_india].iter().all(|r| *r == RegionId::Africa));
    assert!(regions[first_india..].iter().all(|r| *r == RegionId::India));
    assert!(c.rotation().yaw < -1.3);
}

#[test]
fn backward_scroll_at_mount_passes_through() {
    let mut c = make_controller();
    let before = c.frame_state();
    assert_eq!(
        c.on_wheel(-50.0),
        WheelOutcome::PassThrough { delta_y: -50.0 }
    );
    assert_eq!(c.frame_state(), before);
}

#[test]
fn hover_selects_region_and_exact_preset() {
    let mut c = make_controller();
    let presets = [
        (RegionId::India, RotationState::new(-1.5, 0.3)),
        (RegionId::Africa, RotationState::new(-0.5, 0.1)),
        (RegionId::Westerns, RotationState::new(1.0, 0.0)),
    ];
    for id in [1, 0, 2, 2, 1, 0, 1] {
        c.on_wheel(25.0);
        assert_eq!(c.on_hover_select(id), Ok(presets[id as usize].0));
        assert_eq!(c.selection().region, presets[id as usize].0);
        assert_eq!(c.selection().id(), id);
        assert_eq!(c.rotation(), presets[id as usize].1);
        assert!(c.take_pending_refresh());
    }
}

#[test]
fn hover_out_of_range_is_rejected_without_change() {
    let mut c = make_controller();
    c.on_wheel(20.0);
    let before = c.frame_state();
    assert_eq!(
        c.on_hover_select(3),
        Err(ControllerError::InvalidSelection(3))
    );
    assert_eq!(c.frame_state(), before);
    assert!(!c.has_pending_refresh());
}

#[test]
fn westerns_refresh_fires_once_per_entry() {
    let mut c = make_controller();
    let refreshes = scroll_to_end(&mut c, 30.0)
        .into_iter()
        .filter(|o| matches!(o, WheelOutcome::Rotated { refresh: true, .. }))
        .count();
    assert_eq!(refreshes, 1);
    assert!(c.take_pending_refresh());
    assert!(!c.take_pending_refresh());

    // Leave the band and come back: a new entry, a new refresh.
    c.on_wheel(-30.0);
    c.on_wheel(-30.0);
    assert_eq!(c.selection().region, RegionId::Africa);
    assert_eq!(
        c.on_wheel(30.0),
        WheelOutcome::Rotated {
            region: RegionId::Westerns,
            refresh: true
        }
    );
    assert_eq!(
        c.on_wheel(30.0),
        WheelOutcome::Rotated {
            region: RegionId::Westerns,
            refresh: false
        }
    );
}

#[test]
fn hover_into_westerns_counts_as_the_refresh_for_that_entry() {
    let mut c = make_controller();
    c.on_hover_select(2).unwrap();
    assert!(c.take_pending_refresh());
    assert_eq!(
        c.on_wheel(30.0),
        WheelOutcome::Rotated {
            region: RegionId::Westerns,
            refresh: false
        }
    );
    assert!(!c.has_pending_refresh());
}
