//! Orbit placement and keyboard orbit control.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;
use rstest::rstest;
use scene_demos::input::{InputEvent, Key};
use scene_demos::scene::{
    project, AxisConvention, Camera, CameraController, OrbitState, PolledOrbitController,
    SteppedOrbitController, VerticalControl,
};

const EPS: f32 = 1e-4;

#[rstest]
#[case::cos_sin(AxisConvention::CosSin)]
#[case::sin_cos(AxisConvention::SinCos)]
fn projection_stays_on_the_circle(#[case] convention: AxisConvention) {
    for radius in [0.0, 0.5, 2.0, 11.0, 15.0, 200.0] {
        for i in -40..=40 {
            let angle = i as f32 * 0.37;
            let p = project(radius, angle, convention);
            assert!((p.length() - radius).abs() <= EPS * radius.max(1.0));
        }
    }
}

#[rstest]
#[case::cos_sin(AxisConvention::CosSin)]
#[case::sin_cos(AxisConvention::SinCos)]
fn projection_is_periodic(#[case] convention: AxisConvention) {
    for i in 0..24 {
        let angle = i as f32 * PI / 12.0;
        let a = project(5.0, angle, convention);
        let b = project(5.0, angle + TAU, convention);
        assert!(a.abs_diff_eq(b, EPS));
    }
}

#[test]
fn ten_left_steps_from_quarter_turn() {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    let mut controller = SteppedOrbitController::new(OrbitState::new(5.0, FRAC_PI_2, 0.04));

    for _ in 0..10 {
        assert!(controller.handle_event(&mut camera, &InputEvent::key_down(Key::ArrowLeft)));
    }

    let angle = FRAC_PI_2 + 0.4;
    assert!((controller.orbit.angle - angle).abs() < 1e-5);
    assert!((camera.position.x - 5.0 * angle.cos()).abs() < EPS);
    assert!((camera.position.z - 5.0 * angle.sin()).abs() < EPS);
    assert_eq!(camera.target, Vec3::ZERO);
}

#[test]
fn auto_repeat_can_be_ignored() {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    let mut controller =
        SteppedOrbitController::new(OrbitState::new(5.0, 0.0, 0.04)).with_repeat(false);

    let repeat = InputEvent::KeyDown {
        key: Key::ArrowLeft,
        repeat: true,
    };
    assert!(!controller.handle_event(&mut camera, &repeat));
    assert_eq!(controller.orbit.angle, 0.0);
}

#[rstest]
#[case::up(Key::ArrowUp, 4.0)]
#[case::down(Key::ArrowDown, -4.0)]
fn vertical_shift_is_clamped(#[case] key: Key, #[case] limit: f32) {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 11.0), Vec3::ZERO);
    let orbit = OrbitState::new(11.0, FRAC_PI_2, 0.04)
        .with_vertical(VerticalControl::new(0.1, -4.0, 4.0));
    let mut controller = SteppedOrbitController::new(orbit);

    for _ in 0..200 {
        controller.handle_event(&mut camera, &InputEvent::key_down(key));
        assert!(camera.position.y >= -4.0 && camera.position.y <= 4.0);
    }
    assert_eq!(camera.position.y, limit);
}

#[rstest]
#[case::left_beats_right(&[Key::ArrowLeft, Key::ArrowRight], 1.0, 0.0)]
#[case::right_beats_up(&[Key::ArrowUp, Key::ArrowRight], -1.0, 0.0)]
#[case::up_beats_down(&[Key::ArrowDown, Key::ArrowUp], 0.0, 0.04)]
#[case::down_alone(&[Key::ArrowDown], 0.0, -0.04)]
fn polled_priority(#[case] held: &[Key], #[case] angle_steps: f32, #[case] height: f32) {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 15.0), Vec3::ZERO);
    let orbit = OrbitState::new(15.0, FRAC_PI_2, 0.004)
        .with_vertical(VerticalControl::new(0.04, -4.0, 4.0));
    let mut controller = PolledOrbitController::new(orbit);

    for &key in held {
        controller.handle_event(&mut camera, &InputEvent::key_down(key));
    }
    assert!(controller.update(&mut camera));

    assert!((controller.orbit.angle - (FRAC_PI_2 + angle_steps * 0.004)).abs() < 1e-6);
    assert!((camera.position.y - height).abs() < 1e-6);
}

#[test]
fn polled_idle_tick_changes_nothing() {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 15.0), Vec3::ZERO);
    let mut controller = PolledOrbitController::new(OrbitState::new(15.0, FRAC_PI_2, 0.004));

    assert!(!controller.update(&mut camera));
    assert_eq!(camera.position, Vec3::new(0.0, 0.0, 15.0));

    controller.handle_event(&mut camera, &InputEvent::key_down(Key::ArrowLeft));
    controller.handle_event(&mut camera, &InputEvent::FocusLost);
    assert!(!controller.update(&mut camera));
}
