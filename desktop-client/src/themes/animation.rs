/// Pick the animation frame shown at a wall-clock offset: frames advance
/// every `frame_duration_ms` and wrap around. Degenerate inputs (no
/// frames, zero duration) pin to frame 0.
pub fn frame_index(elapsed_ms: u64, frame_duration_ms: u64, frame_count: usize) -> usize {
    if frame_count == 0 || frame_duration_ms == 0 {
        return 0;
    }
    ((elapsed_ms / frame_duration_ms) % frame_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_advance_with_elapsed_time() {
        assert_eq!(frame_index(0, 80, 4), 0);
        assert_eq!(frame_index(79, 80, 4), 0);
        assert_eq!(frame_index(80, 80, 4), 1);
        assert_eq!(frame_index(250, 80, 4), 3);
    }

    #[test]
    fn test_frames_wrap_around() {
        assert_eq!(frame_index(320, 80, 4), 0);
        assert_eq!(frame_index(400, 80, 4), 1);
        assert_eq!(frame_index(8_000_000, 80, 4), (8_000_000 / 80) % 4);
    }

    #[test]
    fn test_degenerate_inputs_pin_to_first_frame() {
        assert_eq!(frame_index(1234, 0, 4), 0);
        assert_eq!(frame_index(1234, 80, 0), 0);
    }

    #[test]
    fn test_single_frame_never_advances() {
        for elapsed in [0, 80, 12345] {
            assert_eq!(frame_index(elapsed, 80, 1), 0);
        }
    }
}
