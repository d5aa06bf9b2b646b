//! Morse Code
//!
//! Table-driven encoding. Letters are separated by a space and words by
//! `" / "`. Characters with no Morse symbol are dropped.
//!
//! ```text
//! "SOS HELP"  -->  "... --- ... / .... . .-.. .--."
//! ```

/// Word separator token
pub const WORD_SEPARATOR: &str = "/";

/// Character ↔ symbol table
pub const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

/// Morse symbol for a character (case-insensitive)
pub fn symbol_for(c: char) -> Option<&'static str> {
    let upper = c.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|(ch, _)| *ch == upper)
        .map(|(_, sym)| *sym)
}

/// Character for a Morse symbol
pub fn char_for(symbol: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|(_, sym)| *sym == symbol)
        .map(|(ch, _)| *ch)
}

/// Uppercased words restricted to the table, single-space separated
pub fn normalize(text: &str) -> String {
    words(text)
        .map(|word| word.into_iter().map(|(c, _)| c).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encode text as Morse
pub fn encode(text: &str) -> String {
    words(text)
        .map(|word| {
            word.into_iter()
                .map(|(_, sym)| sym)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Decode Morse; unknown symbols are dropped
pub fn decode(text: &str) -> String {
    text.split(WORD_SEPARATOR)
        .map(|word| {
            word.split_whitespace()
                .filter_map(char_for)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed hint text
pub fn hint() -> String {
    "Morse code: dots and dashes, letters split by spaces, words by /".to_string()
}

/// Whitespace-separated words as (char, symbol) lists, empty words skipped
fn words(text: &str) -> impl Iterator<Item = Vec<(char, &'static str)>> + '_ {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter_map(|c| symbol_for(c).map(|sym| (c.to_ascii_uppercase(), sym)))
                .collect::<Vec<_>>()
        })
        .filter(|word| !word.is_empty())
}
