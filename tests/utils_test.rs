use chrono::NaiveDateTime;
use cinelog::types::Movie;
use cinelog::utils::*;

// Helper function to create a test movie
fn create_test_movie(title: &str, genre: &str, year: i32, rating: u8) -> Movie {
    Movie {
        title: title.to_string(),
        genre: genre.to_string(),
        year,
        rating,
        director: "Test Director".to_string(),
        review: String::new(),
        added_date: "2024-01-01 12:00:00".to_string(),
    }
}

#[test]
fn test_parse_year_valid_inputs() {
    // First film year is the lower boundary
    assert_eq!(parse_year("1888"), Some(1888));

    // Current year is the upper boundary
    let this_year = current_year();
    assert_eq!(parse_year(&this_year.to_string()), Some(this_year));

    // Ordinary year
    assert_eq!(parse_year("1999"), Some(1999));

    // Surrounding whitespace is ignored
    assert_eq!(parse_year("  2005  "), Some(2005));
}

#[test]
fn test_parse_year_invalid_inputs() {
    // One below the lower boundary
    assert_eq!(parse_year("1887"), None);

    // One past the current year
    let next_year = current_year() + 1;
    assert_eq!(parse_year(&next_year.to_string()), None);

    // Not a number at all
    assert_eq!(parse_year("nineteen99"), None);
    assert_eq!(parse_year(""), None);
    assert_eq!(parse_year("19.99"), None);
    assert_eq!(parse_year("-1999"), None);
}

#[test]
fn test_parse_rating_valid_inputs() {
    // Both boundaries are inclusive
    assert_eq!(parse_rating("1"), Some(1));
    assert_eq!(parse_rating("10"), Some(10));

    assert_eq!(parse_rating("7"), Some(7));
    assert_eq!(parse_rating(" 5 "), Some(5));
}

#[test]
fn test_parse_rating_invalid_inputs() {
    // Outside the 1-10 domain
    assert_eq!(parse_rating("0"), None);
    assert_eq!(parse_rating("11"), None);

    assert_eq!(parse_rating("ten"), None);
    assert_eq!(parse_rating(""), None);
    assert_eq!(parse_rating("-3"), None);
    assert_eq!(parse_rating("7.5"), None);
}

#[test]
fn test_validate_new_title_accepts_new_titles() {
    let movies = vec![create_test_movie("Alien", "Sci-Fi", 1979, 9)];

    // New title passes and comes back trimmed
    let result = validate_new_title(&movies, "  Blade Runner  ");
    assert_eq!(result.unwrap(), "Blade Runner");
}

#[test]
fn test_validate_new_title_rejects_duplicates_case_insensitively() {
    let movies = vec![create_test_movie("Alien", "Sci-Fi", 1979, 9)];

    // Exact duplicate
    assert!(validate_new_title(&movies, "Alien").is_err());

    // Different casing is still the same movie
    assert!(validate_new_title(&movies, "ALIEN").is_err());
    assert!(validate_new_title(&movies, "alien").is_err());
}

#[test]
fn test_validate_new_title_rejects_empty_input() {
    let movies: Vec<Movie> = Vec::new();

    assert!(validate_new_title(&movies, "").is_err());
    assert!(validate_new_title(&movies, "   ").is_err());
}

#[test]
fn test_or_unknown() {
    // Empty or whitespace-only input falls back to the default
    assert_eq!(or_unknown(""), "Unknown");
    assert_eq!(or_unknown("   "), "Unknown");

    // Real input is kept, trimmed
    assert_eq!(or_unknown("Ridley Scott"), "Ridley Scott");
    assert_eq!(or_unknown("  Drama  "), "Drama");
}

#[test]
fn test_truncate() {
    // Short text is untouched
    assert_eq!(truncate("short", 10), "short");

    // Text at the limit is untouched
    assert_eq!(truncate("exactly ten", 11), "exactly ten");

    // Longer text is cut with an ellipsis inside the limit
    assert_eq!(truncate("abcdefghijklmno", 10), "abcdefg...");
    assert_eq!(truncate("abcdefghijklmno", 10).chars().count(), 10);

    // Multi-byte characters count as single characters
    assert_eq!(truncate("日本語の映画レビュー", 20), "日本語の映画レビュー");
}

#[test]
fn test_now_stamp_format() {
    let stamp = now_stamp();

    // Round-trips through the storage timestamp format
    assert!(NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn test_current_year_is_plausible() {
    let year = current_year();
    assert!(year >= 2024);
}
