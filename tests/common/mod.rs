//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use dsvis_rs::VisualizerSession;

/// Frame time used when settling animations
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Tick at 60 fps until nothing moves. Returns the number of frames taken.
pub fn settle(session: &mut VisualizerSession) -> usize {
    let mut frames = 0;
    while session.tick(FRAME_DT) {
        frames += 1;
        assert!(frames < 10_000, "animation never settled");
    }
    frames
}
