// "Searching for surfaces" latch.

mod common;

use common::*;
use placement_core::*;

fn surface(state: TrackingState) -> FakeSurface {
    FakeSurface {
        state,
        in_polygon: true,
    }
}

#[test]
fn latch_fires_exactly_once() {
    let mut notifier = SurfaceStatusNotifier::new();
    notifier.show_finding_message();
    assert!(notifier.is_message_visible());

    let surfaces = vec![
        surface(TrackingState::NotTracking),
        surface(TrackingState::Tracking),
    ];
    assert!(notifier.on_update(TrackingState::Tracking, &surfaces));
    assert!(!notifier.is_message_visible());
    assert_eq!(notifier.status(), SurfaceStatus::Found);

    for _ in 0..5 {
        assert!(!notifier.on_update(TrackingState::Tracking, &surfaces));
    }
}

#[test]
fn waits_for_camera_and_a_tracking_surface() {
    let mut notifier = SurfaceStatusNotifier::new();
    notifier.show_finding_message();

    let tracking = vec![surface(TrackingState::Tracking)];
    assert!(!notifier.on_update(TrackingState::NotTracking, &tracking));
    assert!(!notifier.on_update(TrackingState::Stopped, &tracking));

    let idle = vec![
        surface(TrackingState::NotTracking),
        surface(TrackingState::Stopped),
    ];
    assert!(!notifier.on_update(TrackingState::Tracking, &idle));
    assert!(!notifier.on_update::<FakeSurface>(TrackingState::Tracking, &[]));
    assert!(notifier.is_message_visible());

    assert!(notifier.on_update(TrackingState::Tracking, &tracking));
}

#[test]
fn hidden_message_never_fires() {
    let mut notifier = SurfaceStatusNotifier::new();
    let tracking = vec![surface(TrackingState::Tracking)];
    assert!(!notifier.on_update(TrackingState::Tracking, &tracking));
    assert_eq!(notifier.status(), SurfaceStatus::Hidden);
}

#[test]
fn showing_twice_is_idempotent() {
    let mut notifier = SurfaceStatusNotifier::new();
    notifier.show_finding_message();
    notifier.show_finding_message();
    assert_eq!(notifier.status(), SurfaceStatus::Searching);
}
