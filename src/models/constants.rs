pub const SECRET_WORD: &str = "HANGMAN";
pub const WRONG_GUESS_LIMIT: u32 = 5;
pub const PLACEHOLDER: char = '_';

pub const ALPHABET_SIZE: usize = 26;

/// Letters the player may guess, in display order.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
