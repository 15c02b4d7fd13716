/// Writes `letter` into every position of `pattern` where `secret` has it.
///
/// Returns how many positions matched. `pattern` must be as long as `secret`
/// in chars.
pub fn reveal_letter(secret: &str, pattern: &mut [char], letter: char) -> usize {
    let mut found = 0;
    for (slot, c) in pattern.iter_mut().zip(secret.chars()) {
        if c == letter {
            *slot = letter;
            found += 1;
        }
    }
    found
}
