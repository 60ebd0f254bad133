/// Magma continuous color scale, as linear interpolation between key colors.
/// Key colors are the standard Magma anchors; interpolation is plenty smooth
/// for a handful of markers and a colorbar.

const MAGMA_KEYS: &[(f64, [u8; 3])] = &[
    (0.00, [0, 0, 4]),
    (0.25, [81, 18, 124]),
    (0.50, [183, 55, 121]),
    (0.75, [252, 137, 97]),
    (1.00, [252, 253, 191]),
];

/// Map a value in [0, 1] (clamped) to a Magma RGB color.
pub fn magma(value: f64) -> [u8; 3] {
    let v = value.clamp(0.0, 1.0);

    let mut lower_idx = 0;
    for (i, &(t, _)) in MAGMA_KEYS.iter().enumerate() {
        if t <= v {
            lower_idx = i;
        } else {
            break;
        }
    }
    let upper_idx = (lower_idx + 1).min(MAGMA_KEYS.len() - 1);
    if lower_idx == upper_idx {
        return MAGMA_KEYS[lower_idx].1;
    }

    let (t0, c0) = MAGMA_KEYS[lower_idx];
    let (t1, c1) = MAGMA_KEYS[upper_idx];
    let t = (v - t0) / (t1 - t0);

    [
        (c0[0] as f64 + t * (c1[0] as f64 - c0[0] as f64)) as u8,
        (c0[1] as f64 + t * (c1[1] as f64 - c0[1] as f64)) as u8,
        (c0[2] as f64 + t * (c1[2] as f64 - c0[2] as f64)) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        // Near-black at the bottom, pale yellow at the top.
        let low = magma(0.0);
        let high = magma(1.0);
        assert!(low[0] < 10 && low[1] < 10);
        assert!(high[0] > 240 && high[1] > 240);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(magma(-2.0), magma(0.0));
        assert_eq!(magma(5.0), magma(1.0));
    }

    #[test]
    fn test_midpoint_is_magenta_ish() {
        let [r, g, b] = magma(0.5);
        assert!(r > g && b > g);
    }

    #[test]
    fn test_red_channel_monotonic() {
        let mut prev = 0u8;
        for i in 0..=20 {
            let [r, _, _] = magma(i as f64 / 20.0);
            assert!(r >= prev);
            prev = r;
        }
    }
}
