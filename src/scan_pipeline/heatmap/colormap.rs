/// Maps a normalized intensity onto the jet color ramp
/// (blue, cyan, green, yellow, red), piecewise-linear over five segments.
pub fn jet(v: f32) -> [u8; 3] {
    let v = v.clamp(0.0, 1.0);
    let (r, g, b) = if v < 0.125 {
        (0.0, 0.0, 128.0 + 4.0 * v * 255.0)
    } else if v < 0.375 {
        (0.0, 255.0 * (v - 0.125) * 4.0, 255.0)
    } else if v < 0.625 {
        (255.0 * (v - 0.375) * 4.0, 255.0, 255.0 - 255.0 * (v - 0.375) * 4.0)
    } else if v < 0.875 {
        (255.0, 255.0 - 255.0 * (v - 0.625) * 4.0, 0.0)
    } else {
        (255.0 - 128.0 * (v - 0.875) * 8.0, 0.0, 0.0)
    };
    [channel(r), channel(g), channel(b)]
}

fn channel(c: f32) -> u8 {
    c.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_end_is_dark_blue() {
        assert_eq!(jet(0.0), [0, 0, 128]);
    }

    #[test]
    fn test_hot_end_is_pure_red() {
        // red channel tapers from 255 at 0.875 down to the dark-red tail
        assert_eq!(jet(0.875), [255, 0, 0]);
        assert_eq!(jet(1.0), [127, 0, 0]);
    }

    #[test]
    fn test_segment_landmarks() {
        assert_eq!(jet(0.25), [0, 128, 255]);
        assert_eq!(jet(0.5), [128, 255, 128]);
        assert_eq!(jet(0.75), [255, 128, 0]);
    }

    #[test]
    fn test_continuity_at_breakpoints() {
        const EPS: f32 = 1e-4;
        for breakpoint in [0.125f32, 0.375, 0.625, 0.875] {
            let below = jet(breakpoint - EPS);
            let above = jet(breakpoint);
            for c in 0..3 {
                let delta = (below[c] as i32 - above[c] as i32).abs();
                assert!(
                    delta <= 1,
                    "discontinuity at {}: {:?} vs {:?}",
                    breakpoint,
                    below,
                    above
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_inputs_clamp() {
        assert_eq!(jet(-0.5), jet(0.0));
        assert_eq!(jet(1.5), jet(1.0));
    }
}
