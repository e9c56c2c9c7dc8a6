//! Static 5x7 bitmap font.
//!
//! Each glyph is stored bit-packed, one `u8` per row, with bit 4 holding the
//! leftmost column. The table covers `A`-`Z` and space. The glyphs used by the
//! default word keep the blocky shapes the contribution art was designed with.

use crate::error::{PlanError, PlanResult};

/// Glyph width in columns.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in rows.
pub const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between consecutive glyphs.
pub const GLYPH_GAP: u32 = 1;

/// A single 5x7 glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    ch: char,
    rows: [u8; GLYPH_HEIGHT as usize],
}

impl Glyph {
    /// The character this glyph draws.
    pub fn char(&self) -> char {
        self.ch
    }

    /// Bit-packed rows, top to bottom.
    pub fn rows(&self) -> &[u8; GLYPH_HEIGHT as usize] {
        &self.rows
    }

    /// Returns whether the pixel at local column `x`, row `y` is on.
    ///
    /// Coordinates outside the 5x7 cell are always off.
    pub fn is_on(&self, x: u32, y: u32) -> bool {
        if x >= GLYPH_WIDTH || y >= GLYPH_HEIGHT {
            return false;
        }
        let row = self.rows[y as usize];
        row & (1 << (GLYPH_WIDTH - 1 - x)) != 0
    }

    /// Iterates over the lit pixels as `(x, y)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..GLYPH_HEIGHT).flat_map(move |y| {
            (0..GLYPH_WIDTH).filter_map(move |x| self.is_on(x, y).then_some((x, y)))
        })
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }
}

/// Looks up the glyph for `ch`.
///
/// Lookup is case-sensitive; callers that accept free text should uppercase
/// it first.
pub fn glyph_for(ch: char) -> PlanResult<Glyph> {
    pattern(ch)
        .map(|rows| Glyph { ch, rows })
        .ok_or(PlanError::UnsupportedCharacter(ch))
}

/// Returns whether the font table has a glyph for `ch`.
pub fn is_supported(ch: char) -> bool {
    pattern(ch).is_some()
}

/// All characters covered by the font table, in ascending order.
pub fn supported_chars() -> impl Iterator<Item = char> {
    std::iter::once(' ').chain('A'..='Z')
}

fn pattern(ch: char) -> Option<[u8; GLYPH_HEIGHT as usize]> {
    let rows = match ch {
        ' ' => [0b00000; 7],
        'A' => [
            0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
        ],
        'B' => [
            0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110,
        ],
        'C' => [
            0b11111, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111,
        ],
        'D' => [
            0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110,
        ],
        'E' => [
            0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111,
        ],
        'F' => [
            0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000,
        ],
        'G' => [
            0b11111, 0b10000, 0b10000, 0b10111, 0b10001, 0b10001, 0b11111,
        ],
        'H' => [
            0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
        ],
        'I' => [
            0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111,
        ],
        'J' => [
            0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100,
        ],
        'K' => [
            0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001,
        ],
        'L' => [
            0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111,
        ],
        'M' => [
            0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001,
        ],
        'N' => [
            0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001,
        ],
        'O' => [
            0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
        ],
        'P' => [
            0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000,
        ],
        'Q' => [
            0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101,
        ],
        'R' => [
            0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001,
        ],
        'S' => [
            0b11111, 0b10000, 0b10000, 0b11111, 0b00001, 0b00001, 0b11111,
        ],
        'T' => [
            0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100,
        ],
        'U' => [
            0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
        ],
        'V' => [
            0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100,
        ],
        'W' => [
            0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b10001,
        ],
        'X' => [
            0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001,
        ],
        'Y' => [
            0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100,
        ],
        'Z' => [
            0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111,
        ],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(glyph: &Glyph) -> Vec<String> {
        (0..GLYPH_HEIGHT)
            .map(|y| {
                (0..GLYPH_WIDTH)
                    .map(|x| if glyph.is_on(x, y) { '1' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_default_word_glyph_shapes() {
        let s = glyph_for('S').unwrap();
        assert_eq!(
            render(&s),
            vec!["11111", "1....", "1....", "11111", "....1", "....1", "11111"]
        );

        let k = glyph_for('K').unwrap();
        assert_eq!(
            render(&k),
            vec!["1...1", "1..1.", "1.1..", "11...", "1.1..", "1..1.", "1...1"]
        );

        let a = glyph_for('A').unwrap();
        assert_eq!(
            render(&a),
            vec![".111.", "1...1", "1...1", "11111", "1...1", "1...1", "1...1"]
        );
    }

    #[test]
    fn test_every_default_word_char_is_supported() {
        for ch in "SHOWKAT".chars() {
            assert!(is_supported(ch), "missing glyph for {ch}");
        }
    }

    #[test]
    fn test_unsupported_character() {
        assert_eq!(glyph_for('!'), Err(PlanError::UnsupportedCharacter('!')));
        assert_eq!(glyph_for('s'), Err(PlanError::UnsupportedCharacter('s')));
        assert!(!is_supported('7'));
    }

    #[test]
    fn test_pixels_row_major() {
        let t = glyph_for('T').unwrap();
        let pixels: Vec<_> = t.pixels().collect();
        assert_eq!(pixels.len(), 11);
        assert_eq!(&pixels[..5], &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        assert!(pixels[5..].iter().all(|&(x, _)| x == 2));
        assert_eq!(t.lit_count(), 11);
    }

    #[test]
    fn test_out_of_cell_is_off() {
        let o = glyph_for('O').unwrap();
        assert!(o.is_on(0, 0));
        assert!(!o.is_on(5, 0));
        assert!(!o.is_on(0, 7));
    }

    #[test]
    fn test_space_is_blank() {
        let space = glyph_for(' ').unwrap();
        assert_eq!(space.pixels().count(), 0);
    }

    #[test]
    fn test_supported_chars_match_table() {
        let chars: Vec<char> = supported_chars().collect();
        assert_eq!(chars.len(), 27);
        assert!(chars.iter().all(|&c| is_supported(c)));
        for row in supported_chars().flat_map(|c| *glyph_for(c).unwrap().rows()) {
            assert!(row < 1 << GLYPH_WIDTH);
        }
    }
}
