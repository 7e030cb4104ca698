use std::io::{self, Write};

use crate::warning;

// Returns None on EOF so callers can unwind their flow.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

// Loops until the validator accepts, echoing its rejection message
// otherwise. With allow_back, entering 'back' cancels like EOF does.
pub fn read_until<T>(
    prompt: &str,
    allow_back: bool,
    validate: impl Fn(&str) -> Result<T, String>,
) -> Option<T> {
    loop {
        let line = read_line(prompt)?;
        if allow_back && line.eq_ignore_ascii_case("back") {
            return None;
        }
        match validate(&line) {
            Ok(value) => return Some(value),
            Err(message) => warning!("{}", message),
        }
    }
}
