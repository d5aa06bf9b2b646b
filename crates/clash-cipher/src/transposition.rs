//! Columnar Transposition
//!
//! ```text
//! "HELLOWORLD", 3 columns
//!
//!   H E L
//!   L O W        read column by column
//!   O R L   -->  "HLOD" + "EOR " + "LWL "
//!   D _ _
//! ```
//!
//! Whitespace is stripped before the grid is filled and the last row is
//! padded with spaces; decoding trims that padding again.

use clash_core::TRANSPOSITION_PAD;

/// Input with all whitespace removed, i.e. what a round trip yields
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Write row-major into `columns` columns, read column-major
pub fn encode(text: &str, columns: usize) -> String {
    let chars: Vec<char> = normalize(text).chars().collect();
    let rows = chars.len().div_ceil(columns);

    let mut out = String::with_capacity(rows * columns);
    for col in 0..columns {
        for row in 0..rows {
            out.push(chars.get(row * columns + col).copied().unwrap_or(TRANSPOSITION_PAD));
        }
    }
    out
}

/// Refill the grid column-major from `text`, read row-major
///
/// Column heights come from the ciphertext length: when it is not a
/// multiple of `columns`, the first `len % columns` columns hold one extra
/// row.
pub fn decode(text: &str, columns: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let rows = len.div_ceil(columns);
    let full_columns = match len % columns {
        0 => columns,
        r => r,
    };

    let mut grid = vec![None; rows * columns];
    let mut pos = 0;
    for col in 0..columns {
        let height = if col < full_columns { rows } else { rows - 1 };
        for row in 0..height {
            grid[row * columns + col] = Some(chars[pos]);
            pos += 1;
        }
    }

    let out: String = grid.into_iter().flatten().collect();
    out.trim_end_matches(TRANSPOSITION_PAD).to_string()
}

/// Hint naming the column count
pub fn hint(columns: usize) -> String {
    format!(
        "Columnar transposition: written in rows of {} and read down each column",
        columns
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference construction: explicit grid of rows, then read columns
    fn reference_encode(text: &str, columns: usize) -> String {
        let stripped: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        let rows: Vec<Vec<char>> = stripped
            .chunks(columns)
            .map(|chunk| {
                let mut row = chunk.to_vec();
                row.resize(columns, ' ');
                row
            })
            .collect();
        (0..columns)
            .flat_map(|c| rows.iter().map(move |r| r[c]))
            .collect()
    }

    #[test]
    fn test_hello_world_three_columns() {
        let expected = reference_encode("HELLOWORLD", 3);
        assert_eq!(expected, "HLODEOR LWL ");
        assert_eq!(encode("HELLOWORLD", 3), expected);
    }

    #[test]
    fn test_spaces_are_stripped() {
        assert_eq!(encode("HELLO WORLD", 3), encode("HELLOWORLD", 3));
        assert_eq!(decode(&encode("HELLO WORLD", 3), 3), "HELLOWORLD");
    }

    #[test]
    fn test_matches_reference_for_many_widths() {
        let text = "Columnar transposition keeps every letter";
        for columns in 2..12 {
            assert_eq!(encode(text, columns), reference_encode(text, columns));
        }
    }

    #[test]
    fn test_round_trip() {
        let text = "WE ARE DISCOVERED, FLEE AT ONCE!";
        for columns in 2..=10 {
            assert_eq!(decode(&encode(text, columns), columns), normalize(text));
        }
    }

    #[test]
    fn test_columns_wider_than_text() {
        let encoded = encode("HI", 5);
        assert_eq!(encoded, "HI   ");
        assert_eq!(decode(&encoded, 5), "HI");
    }

    #[test]
    fn test_decode_short_final_columns() {
        // Unpadded ciphertext of "ABCDEFG" over 3 columns: ADG BE CF
        assert_eq!(decode("ADGBECF", 3), "ABCDEFG");
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode("", 4), "");
        assert_eq!(decode("", 4), "");
    }
}
