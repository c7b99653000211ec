use crate::encoder::bch::{format_bits, version_bits};
use crate::models::{ECLevel, Grid, MaskPattern, PatternKind, Version};

/// Draw every function pattern for `version` onto `grid`.
///
/// Later patterns overwrite earlier ones where they overlap (finders over
/// timing, for instance). Format information is drawn blank; the real field
/// is written once a mask is known.
pub fn draw_function_patterns(grid: &mut Grid, version: Version, ec_level: ECLevel) {
    let size = grid.size();

    // Timing patterns (row 6 and column 6)
    for i in 0..size {
        grid.set_function(6, i, PatternKind::Timing, i % 2 == 0);
        grid.set_function(i, 6, PatternKind::Timing, i % 2 == 0);
    }

    // Finder patterns + separators
    draw_finder_pattern(grid, 3, 3);
    draw_finder_pattern(grid, size - 4, 3);
    draw_finder_pattern(grid, 3, size - 4);

    // Alignment patterns, skipping the three finder corners
    let align = alignment_pattern_positions(version);
    let last = align.len().saturating_sub(1);
    for (i, &cx) in align.iter().enumerate() {
        for (j, &cy) in align.iter().enumerate() {
            let corner = (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0);
            if !corner {
                draw_alignment_pattern(grid, cx, cy);
            }
        }
    }

    draw_format_bits(grid, ec_level, None);
    draw_version_bits(grid, version);
}

/// 9x9 finder centered at (cx, cy), clipped to the grid; the outer ring is the separator
fn draw_finder_pattern(grid: &mut Grid, cx: usize, cy: usize) {
    let size = grid.size() as isize;
    for dy in -4isize..=4 {
        for dx in -4isize..=4 {
            let x = cx as isize + dx;
            let y = cy as isize + dy;
            if !(0..size).contains(&x) || !(0..size).contains(&y) {
                continue;
            }
            let dist = dx.abs().max(dy.abs());
            let kind = if dist == 4 {
                PatternKind::Separator
            } else {
                PatternKind::Finder
            };
            grid.set_function(x as usize, y as usize, kind, dist != 2 && dist != 4);
        }
    }
}

/// 5x5 alignment pattern centered at (cx, cy)
fn draw_alignment_pattern(grid: &mut Grid, cx: usize, cy: usize) {
    for dy in 0..5usize {
        for dx in 0..5usize {
            let dist = dx.abs_diff(2).max(dy.abs_diff(2));
            grid.set_function(cx + dx - 2, cy + dy - 2, PatternKind::Alignment, dist != 1);
        }
    }
}

/// Draw both copies of the 15-bit format field plus the fixed dark module.
///
/// Bit 14 lands at (0, 8) and bit 0 at (8, 0), so reading along the strip is MSB first.
pub fn draw_format_bits(grid: &mut Grid, ec_level: ECLevel, mask: Option<MaskPattern>) {
    let size = grid.size();
    let bits = format_bits(ec_level, mask);
    let bit = |i: usize| (bits >> i) & 1 == 1;
    let kind = PatternKind::FormatInfo;

    // First copy, around the top-left finder
    for i in 0..6 {
        grid.set_function(8, i, kind, bit(i));
    }
    grid.set_function(8, 7, kind, bit(6));
    grid.set_function(8, 8, kind, bit(7));
    grid.set_function(7, 8, kind, bit(8));
    for i in 9..15 {
        grid.set_function(14 - i, 8, kind, bit(i));
    }

    // Second copy, split between the top-right and bottom-left finders
    for i in 0..8 {
        grid.set_function(size - 1 - i, 8, kind, bit(i));
    }
    for i in 8..15 {
        grid.set_function(8, size - 15 + i, kind, bit(i));
    }

    grid.set_function(8, size - 8, PatternKind::DarkModule, true);
}

/// Draw the two 3x6 version blocks (versions 7+)
fn draw_version_bits(grid: &mut Grid, version: Version) {
    if version.number() < 7 {
        return;
    }
    let size = grid.size();
    let bits = version_bits(version);
    for i in 0..18 {
        let dark = (bits >> i) & 1 == 1;
        let a = size - 11 + i % 3;
        let b = i / 3;
        grid.set_function(a, b, PatternKind::VersionInfo, dark);
        grid.set_function(b, a, PatternKind::VersionInfo, dark);
    }
}

/// Alignment pattern centers for a given version.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let ver = version.number() as usize;
    if ver == 1 {
        return Vec::new();
    }
    let num_align = ver / 7 + 2;
    let size = version.size();
    let step = if ver == 32 {
        26
    } else {
        (size - 13).div_ceil(num_align * 2 - 2) * 2
    };

    // The last anchor sits at size - 7; the others step back from it
    let last = size - 7;
    std::iter::once(6)
        .chain((1..num_align).map(|i| last - (num_align - 1 - i) * step))
        .collect()
}
