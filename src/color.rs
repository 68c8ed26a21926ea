//! Hex color shading
//!
//! Used to build the darker gradient partner for each balloon color.

/// Lighten (positive percent) or darken (negative percent) a `#rrggbb` color.
///
/// Each channel is shifted by `round(2.55 * percent)` and clamped to
/// [0, 255]. Output is lowercase `#rrggbb`. An unparsable input is returned
/// unchanged; callers pass palette constants, so this path never fires in
/// practice.
pub fn shade(hex: &str, percent: f32) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return hex.to_owned();
    };
    let amt = (2.55 * percent).round() as i32;
    let shift = |c: u8| (c as i32 + amt).clamp(0, 255) as u8;
    format!("#{:02x}{:02x}{:02x}", shift(r), shift(g), shift(b))
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let num = u32::from_str_radix(digits, 16).ok()?;
    Some(((num >> 16) as u8, (num >> 8) as u8, num as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shade_zero_is_identity() {
        assert_eq!(shade("#f43f5e", 0.0), "#f43f5e");
        assert_eq!(shade("#000000", 0.0), "#000000");
        assert_eq!(shade("#ffffff", 0.0), "#ffffff");
    }

    #[test]
    fn test_shade_darken() {
        // -25% -> each channel drops by round(2.55 * 25) = 64, low clamps at 0
        assert_eq!(shade("#f43f5e", -25.0), "#b4001e");
    }

    #[test]
    fn test_shade_lighten_clamps_high() {
        assert_eq!(shade("#f0f0f0", 50.0), "#ffffff");
    }

    #[test]
    fn test_shade_invalid_passthrough() {
        assert_eq!(shade("not-a-color", 10.0), "not-a-color");
        assert_eq!(shade("#fff", 10.0), "#fff");
    }

    proptest! {
        #[test]
        fn prop_shade_channels_stay_in_range(
            r in 0u8..=255, g in 0u8..=255, b in 0u8..=255,
            p in -100.0f32..=100.0,
        ) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let out = shade(&hex, p);
            prop_assert_eq!(out.len(), 7);
            prop_assert!(out.starts_with('#'));
            prop_assert!(u32::from_str_radix(&out[1..], 16).is_ok());
        }

        #[test]
        fn prop_shade_zero_roundtrips(
            r in 0u8..=255, g in 0u8..=255, b in 0u8..=255,
        ) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            prop_assert_eq!(shade(&hex, 0.0), hex);
        }

        #[test]
        fn prop_shade_monotonic_extremes(
            r in 0u8..=255, g in 0u8..=255, b in 0u8..=255,
        ) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            prop_assert_eq!(shade(&hex, 100.0), "#ffffff");
            prop_assert_eq!(shade(&hex, -100.0), "#000000");
        }
    }
}
