//! English phrasing helpers for violation messages

const NUMBERS: [&str; 12] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven",
];

/// `1` → `"1st"`, `2` → `"2nd"`, `11` → `"11th"`, `23` → `"23rd"`
#[must_use]
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Spell out small counts; larger ones stay as digits
#[must_use]
pub fn english_number(n: usize) -> String {
    NUMBERS
        .get(n)
        .map_or_else(|| n.to_string(), |word| (*word).to_string())
}

/// Uppercase letter as shown to the player
#[must_use]
pub fn glyph(letter: u8) -> char {
    letter.to_ascii_uppercase() as char
}

/// `"E"` for one copy, `"Es"` otherwise
#[must_use]
pub fn glyphs(letter: u8, count: usize) -> String {
    if count == 1 {
        glyph(letter).to_string()
    } else {
        format!("{}s", glyph(letter))
    }
}
