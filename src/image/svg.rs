// article-generation-service/src/image/svg.rs
//
// Palette table and SVG fragment builders for the synthesized header
// image. Option counts are fixed: 8 palettes of 6 colors, 8 backgrounds,
// 6 decorative-shape styles, 5 icon styles, 5 subtitles, 3 bottom
// decorations. Fragment indices are always reduced modulo these counts.

/// 8 palettes of 6 colors each. The palette is seed-selected; the two
/// accent colors are then drawn at random within it.
pub const PALETTES: &[&[&str]] = &[
    &["#1a535c", "#4ecdc4", "#f7fff7", "#ff6b6b", "#ffe66d", "#2b7a78"],
    &["#2d3142", "#4f5d75", "#bfc0c0", "#ef8354", "#ffffff", "#726a95"],
    &["#05668d", "#028090", "#00a896", "#02c39a", "#f0f3bd", "#027353"],
    &["#3d5a80", "#98c1d9", "#e0fbfc", "#ee6c4d", "#293241", "#5c7aa3"],
    &["#6b2d5c", "#f0386b", "#ff5376", "#f8c0c8", "#e2c290", "#8e4a8b"],
    &["#272932", "#4d7ea8", "#828489", "#9e90a2", "#b6c2d9", "#6290c3"],
    &["#0b3954", "#087e8b", "#bfd7ea", "#ff5a5f", "#c81d25", "#1b6b93"],
    &["#14213d", "#fca311", "#e5e5e5", "#8d99ae", "#2b2d42", "#457b9d"],
];

pub const BACKGROUND_COUNT: u64 = 8;
pub const SHAPE_COUNT: u64 = 6;
pub const ICON_COUNT: u64 = 5;
pub const BOTTOM_COUNT: u64 = 3;

pub const SUBTITLE_OPTIONS: &[&str] = &[
    "Expertise et accompagnement",
    "Des solutions à votre mesure",
    "L'essentiel, simplement",
    "Votre partenaire de confiance",
    "Avançons ensemble",
];

/// Background layer, 800×400.
pub fn background(index: u64, c1: &str, c2: &str) -> String {
    match index % BACKGROUND_COUNT {
        0 => format!(r##"<rect width="800" height="400" fill="{c1}"/>"##),
        1 => format!(
            r##"<defs><linearGradient id="bg" x1="0" y1="0" x2="1" y2="0"><stop offset="0%" stop-color="{c1}"/><stop offset="100%" stop-color="{c2}"/></linearGradient></defs><rect width="800" height="400" fill="url(#bg)"/>"##
        ),
        2 => format!(
            r##"<defs><radialGradient id="bg" cx="0.5" cy="0.4" r="0.8"><stop offset="0%" stop-color="{c2}"/><stop offset="100%" stop-color="{c1}"/></radialGradient></defs><rect width="800" height="400" fill="url(#bg)"/>"##
        ),
        3 => format!(
            r##"<defs><linearGradient id="bg" x1="0" y1="0" x2="1" y2="1"><stop offset="0%" stop-color="{c1}"/><stop offset="100%" stop-color="{c2}"/></linearGradient></defs><rect width="800" height="400" fill="url(#bg)"/>"##
        ),
        4 => format!(
            r##"<rect width="800" height="400" fill="{c1}"/><circle cx="650" cy="80" r="180" fill="{c2}" opacity="0.35"/>"##
        ),
        5 => format!(
            r##"<rect width="400" height="400" fill="{c1}"/><rect x="400" width="400" height="400" fill="{c2}"/>"##
        ),
        6 => format!(
            r##"<rect width="800" height="400" fill="{c1}"/><rect y="100" width="800" height="66" fill="{c2}" opacity="0.25"/><rect y="233" width="800" height="66" fill="{c2}" opacity="0.25"/>"##
        ),
        _ => format!(
            r##"<rect width="800" height="400" fill="{c2}"/><rect x="12" y="12" width="776" height="376" fill="none" stroke="{c1}" stroke-width="4"/>"##
        ),
    }
}

/// Decorative shape layer.
pub fn shapes(index: u64, c1: &str, c2: &str) -> String {
    match index % SHAPE_COUNT {
        0 => format!(
            r##"<circle cx="100" cy="330" r="26" fill="{c2}" opacity="0.5"/><circle cx="160" cy="350" r="16" fill="{c1}" opacity="0.5"/><circle cx="700" cy="60" r="22" fill="{c2}" opacity="0.5"/>"##
        ),
        1 => format!(
            r##"<polygon points="60,80 100,20 140,80" fill="{c2}" opacity="0.45"/><polygon points="680,360 720,300 760,360" fill="{c1}" opacity="0.45"/>"##
        ),
        2 => format!(
            r##"<rect x="70" y="40" width="44" height="44" fill="{c2}" opacity="0.4" transform="rotate(15 92 62)"/><rect x="690" y="310" width="36" height="36" fill="{c1}" opacity="0.4" transform="rotate(-12 708 328)"/>"##
        ),
        3 => format!(
            r##"<circle cx="110" cy="70" r="34" fill="none" stroke="{c2}" stroke-width="5" opacity="0.55"/><circle cx="690" cy="330" r="26" fill="none" stroke="{c1}" stroke-width="5" opacity="0.55"/>"##
        ),
        4 => format!(
            r##"<circle cx="60" cy="60" r="5" fill="{c2}"/><circle cx="90" cy="60" r="5" fill="{c2}"/><circle cx="120" cy="60" r="5" fill="{c2}"/><circle cx="60" cy="90" r="5" fill="{c1}"/><circle cx="90" cy="90" r="5" fill="{c1}"/><circle cx="120" cy="90" r="5" fill="{c1}"/>"##
        ),
        _ => format!(
            r##"<path d="M0,370 Q200,340 400,370 T800,370" fill="none" stroke="{c2}" stroke-width="4" opacity="0.5"/><path d="M0,30 Q200,60 400,30 T800,30" fill="none" stroke="{c1}" stroke-width="4" opacity="0.5"/>"##
        ),
    }
}

/// Icon badge centered near the top, showing the keyword's initial.
pub fn icon(index: u64, c1: &str, initial: &str) -> String {
    let badge = match index % ICON_COUNT {
        0 => format!(r##"<circle cx="400" cy="140" r="52" fill="{c1}"/>"##),
        1 => format!(r##"<rect x="348" y="88" width="104" height="104" rx="18" fill="{c1}"/>"##),
        2 => format!(
            r##"<polygon points="400,84 448,112 448,168 400,196 352,168 352,112" fill="{c1}"/>"##
        ),
        3 => format!(r##"<polygon points="400,84 456,140 400,196 344,140" fill="{c1}"/>"##),
        _ => format!(
            r##"<path d="M400,84 L452,104 L452,150 Q452,184 400,200 Q348,184 348,150 L348,104 Z" fill="{c1}"/>"##
        ),
    };
    format!(
        r##"{badge}<text x="400" y="158" text-anchor="middle" font-family="Arial, sans-serif" font-size="52" font-weight="bold" fill="#ffffff">{initial}</text>"##
    )
}

/// Bottom decoration strip.
pub fn bottom(index: u64, c1: &str, c2: &str) -> String {
    match index % BOTTOM_COUNT {
        0 => format!(r##"<rect x="300" y="372" width="200" height="4" rx="2" fill="{c2}"/>"##),
        1 => format!(
            r##"<circle cx="370" cy="374" r="6" fill="{c2}"/><circle cx="400" cy="374" r="6" fill="{c1}"/><circle cx="430" cy="374" r="6" fill="{c2}"/>"##
        ),
        _ => format!(r##"<rect y="388" width="800" height="12" fill="{c1}" opacity="0.7"/>"##),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_table_shape_is_fixed() {
        assert_eq!(PALETTES.len(), 8);
        for palette in PALETTES {
            assert_eq!(palette.len(), 6);
            for color in *palette {
                assert!(color.starts_with('#') && color.len() == 7);
            }
        }
    }

    #[test]
    fn every_fragment_index_wraps() {
        for i in 0..20 {
            assert!(!background(i, "#111111", "#222222").is_empty());
            assert!(!shapes(i, "#111111", "#222222").is_empty());
            assert!(icon(i, "#111111", "C").contains(">C</text>"));
            assert!(!bottom(i, "#111111", "#222222").is_empty());
        }
    }
}
