//! Drives a wave and a tint through an interval-paced render loop

use ll_engine::{
    Color, ColorBuffer, ColorGenerator, Interval, Pattern, SolidPattern, WavePattern, render,
};
use ll_model::PackFormat;

const STRIP_LENGTH: usize = 16;
const TINT: Color = Color::new(0, 0, 16);

fn setup_patterns() -> (WavePattern, SolidPattern) {
    let generator = ColorGenerator::new(STRIP_LENGTH).unwrap();
    (WavePattern::new(generator), SolidPattern::new(TINT))
}

#[test_log::test]
fn test_interval_paced_render_loop() {
    let (mut wave, mut tint) = setup_patterns();
    let mut buffer = ColorBuffer::new(STRIP_LENGTH);
    let mut interval = Interval::new(20, 0);

    let mut frames = Vec::new();
    for now_ms in (0..=200).step_by(5) {
        if interval.update(now_ms) {
            interval.clear_expired();
            wave.advance();
        }
        if render(&mut [&mut wave, &mut tint], &mut buffer) {
            frames.push(PackFormat::Half.pack(&buffer));
        }
    }

    // The initial frame, then one per expiry at 25, 45, ..., 185
    assert_eq!(frames.len(), 10);
    assert!(
        frames
            .iter()
            .all(|f| f.len() == PackFormat::Half.encoded_len(STRIP_LENGTH))
    );

    // The tint stays on LEDs the wave hasn't reached
    assert_eq!(buffer.get(STRIP_LENGTH - 1), Some(TINT));
    assert_ne!(buffer.get(0), Some(TINT));
    assert_eq!(wave.generator().color_bytes().get(9), Some(Color::BLACK));
}

#[test]
fn test_unchanged_patterns_do_not_render() {
    let (mut wave, mut tint) = setup_patterns();
    let mut buffer = ColorBuffer::new(STRIP_LENGTH);

    assert!(render(&mut [&mut wave, &mut tint], &mut buffer));
    for _ in 0..10 {
        assert!(!render(&mut [&mut wave, &mut tint], &mut buffer));
    }
    assert!(!wave.is_changed());
    assert!(!tint.is_changed());

    tint.set_color(Color::WHITE);
    assert!(render(&mut [&mut wave, &mut tint], &mut buffer));
    assert_eq!(buffer.get(STRIP_LENGTH - 1), Some(Color::WHITE));
}
