/// Ten fixed `RRGGBB` fill colors, one per density band.
pub const COLOR_CLASS: [&str; 10] = [
    "ff0000", "ff8800", "ffff00", "88ff00", "00ff00", "00ff88", "00ffff", "0088ff", "0000ff",
    "8800ff",
];

/// `colorclass[k-1]` indexes into [`COLOR_CLASS`] for band `k`: the
/// identity permutation when `COLOR=0`, or a single constant entry when
/// `1 <= COLOR <= 10`.
pub fn colorclass(color: i32) -> [usize; 10] {
    let mut map = [0usize; 10];
    if color == 0 {
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i;
        }
    } else {
        map = [(color - 1) as usize; 10];
    }
    map
}

/// `<color>` text for band `k` (1-indexed): two-hex-digit opacity followed
/// by the band's `RRGGBB` entry.
pub fn style_color(opacity: u8, colorclass: &[usize; 10], band: usize) -> String {
    format!("{:02x}{}", opacity, COLOR_CLASS[colorclass[band - 1]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_mapping_when_color_is_zero() {
        let map = colorclass(0);
        assert_eq!(map, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn constant_mapping_when_color_is_set() {
        let map = colorclass(4);
        assert_eq!(map, [3; 10]);
    }

    #[test]
    fn style_color_prefixes_opacity_byte() {
        let map = colorclass(0);
        assert_eq!(style_color(0x88, &map, 1), "88ff0000");
    }
}
