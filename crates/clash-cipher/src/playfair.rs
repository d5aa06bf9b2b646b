//! Playfair Cipher
//!
//! Digraph substitution over a 5x5 key square with I and J merged.
//!
//! ## Key Square (key "PLAYFAIR")
//!
//! ```text
//! P L A Y F
//! I R B C D
//! E G H K M
//! N O Q S T
//! U V W X Z
//! ```
//!
//! ## Rules
//!
//! - same row: each letter takes its right neighbour (wrapping)
//! - same column: each letter takes the one below (wrapping)
//! - rectangle: each letter takes the column of the other
//!
//! Decoding strips one trailing filler `X` only. Fillers inserted between
//! doubled letters stay in the output, since nothing distinguishes them
//! from a genuine `X`.

use clash_core::{letter_index, PLAYFAIR_ALPHABET, PLAYFAIR_FILLER, PLAYFAIR_SIZE};
use tracing::debug;

const SIZE: usize = PLAYFAIR_SIZE;

/// 5x5 key square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairMatrix {
    grid: [[char; SIZE]; SIZE],
    /// (row, col) of each letter A..Z; J shares I's cell
    positions: [(usize, usize); 26],
}

impl PlayfairMatrix {
    /// Build the square from a keyword
    ///
    /// Key letters fill the grid row-major (uppercased, J folded to I,
    /// first occurrence wins), followed by the rest of the alphabet.
    pub fn from_key(key: &str) -> Self {
        let mut seen = [false; 26];
        let mut order = Vec::with_capacity(SIZE * SIZE);

        let key_letters = key.chars().filter_map(fold_letter);
        for c in key_letters.chain(PLAYFAIR_ALPHABET.chars()) {
            let idx = (c as u8 - b'A') as usize;
            if !seen[idx] {
                seen[idx] = true;
                order.push(c);
            }
        }

        let mut grid = [[' '; SIZE]; SIZE];
        let mut positions = [(0, 0); 26];
        for (i, &c) in order.iter().enumerate() {
            let (row, col) = (i / SIZE, i % SIZE);
            grid[row][col] = c;
            positions[(c as u8 - b'A') as usize] = (row, col);
        }
        positions[(b'J' - b'A') as usize] = positions[(b'I' - b'A') as usize];

        debug!("Built Playfair square, first row {:?}", grid[0]);
        Self { grid, positions }
    }

    /// One row of the square
    pub fn row(&self, row: usize) -> [char; SIZE] {
        self.grid[row]
    }

    /// Letter at (row, col)
    pub fn at(&self, row: usize, col: usize) -> char {
        self.grid[row % SIZE][col % SIZE]
    }

    /// (row, col) of a letter; J resolves to I's cell
    pub fn position(&self, c: char) -> Option<(usize, usize)> {
        letter_index(c).map(|i| self.positions[i as usize])
    }

    /// Encrypt one digraph
    pub fn encode_pair(&self, a: char, b: char) -> (char, char) {
        self.shift_pair(a, b, 1)
    }

    /// Decrypt one digraph
    pub fn decode_pair(&self, a: char, b: char) -> (char, char) {
        self.shift_pair(a, b, SIZE - 1)
    }

    fn shift_pair(&self, a: char, b: char, step: usize) -> (char, char) {
        let (Some((ar, ac)), Some((br, bc))) = (self.position(a), self.position(b)) else {
            return (a, b);
        };

        if ar == br {
            (self.at(ar, ac + step), self.at(br, bc + step))
        } else if ac == bc {
            (self.at(ar + step, ac), self.at(br + step, bc))
        } else {
            (self.at(ar, bc), self.at(br, ac))
        }
    }
}

/// Uppercase, fold J to I, drop non-letters
pub fn normalize(text: &str) -> String {
    text.chars().filter_map(fold_letter).collect()
}

/// Split normalised text into digraphs
///
/// A doubled pair gets a filler `X` and the second letter starts the next
/// pair; an odd tail is padded with `X`.
pub fn digraphs(text: &str) -> Vec<(char, char)> {
    let letters: Vec<char> = normalize(text).chars().collect();
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;

    while i < letters.len() {
        let a = letters[i];
        match letters.get(i + 1) {
            Some(&b) if b != a => {
                pairs.push((a, b));
                i += 2;
            }
            _ => {
                pairs.push((a, PLAYFAIR_FILLER));
                i += 1;
            }
        }
    }
    pairs
}

/// Encrypt `text` under `matrix`
pub fn encode(text: &str, matrix: &PlayfairMatrix) -> String {
    digraphs(text)
        .into_iter()
        .flat_map(|(a, b)| {
            let (x, y) = matrix.encode_pair(a, b);
            [x, y]
        })
        .collect()
}

/// Decrypt `text` under `matrix`
///
/// Non-letters in the ciphertext are ignored, as is a dangling single
/// letter.
pub fn decode(text: &str, matrix: &PlayfairMatrix) -> String {
    let letters: Vec<char> = normalize(text).chars().collect();
    let mut out: String = letters
        .chunks_exact(2)
        .flat_map(|pair| {
            let (x, y) = matrix.decode_pair(pair[0], pair[1]);
            [x, y]
        })
        .collect();

    if out.ends_with(PLAYFAIR_FILLER) {
        out.pop();
    }
    out
}

/// Hint revealing the keyword
pub fn hint(key: &str) -> String {
    format!("Playfair key: {} (5x5 square, I and J share a cell)", key.to_ascii_uppercase())
}

fn fold_letter(c: char) -> Option<char> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    match c.to_ascii_uppercase() {
        'J' => Some('I'),
        upper => Some(upper),
    }
}
