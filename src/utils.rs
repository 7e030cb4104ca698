use chrono::{Datelike, Local};

use crate::types::Movie;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;
pub const FIRST_FILM_YEAR: i32 = 1888;

pub fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn parse_year(input: &str) -> Option<i32> {
    let year: i32 = input.trim().parse().ok()?;
    if (FIRST_FILM_YEAR..=current_year()).contains(&year) {
        Some(year)
    } else {
        None
    }
}

pub fn parse_rating(input: &str) -> Option<u8> {
    let rating: u8 = input.trim().parse().ok()?;
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Some(rating)
    } else {
        None
    }
}

pub fn validate_new_title(movies: &[Movie], raw: &str) -> Result<String, String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err("Please enter a valid title".to_string());
    }
    let lowered = title.to_lowercase();
    if movies.iter().any(|m| m.title.to_lowercase() == lowered) {
        return Err("This movie is already in your collection".to_string());
    }
    Ok(title.to_string())
}

pub fn or_unknown(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        "Unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
