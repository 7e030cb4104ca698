use cinelog::query::*;
use cinelog::types::Movie;

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

// Helper function to create a movie with a named director
fn create_test_movie_by(title: &str, director: &str) -> Movie {
    Movie {
        title: title.to_string(),
        genre: "Drama".to_string(),
        year: 2000,
        rating: 5,
        director: director.to_string(),
        review: String::new(),
        added_date: "2024-01-01 12:00:00".to_string(),
    }
}

#[test]
fn test_filter_by_field_title_is_case_insensitive_substring() {
    let movies = vec![
        create_test_movie("The Godfather", "Crime", 1972, 10),
        create_test_movie("Goodfellas", "Crime", 1990, 9),
        create_test_movie("Heat", "Crime", 1995, 8),
    ];

    let results = filter_by_field(&movies, SearchField::Title, "GOOD");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Goodfellas");

    // Substring in the middle of the title
    let results = filter_by_field(&movies, SearchField::Title, "father");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "The Godfather");
}

#[test]
fn test_filter_by_field_genre_and_director() {
    let movies = vec![
        create_test_movie("Alien", "Sci-Fi", 1979, 9),
        create_test_movie("Amelie", "Romance", 2001, 8),
        create_test_movie_by("Blade Runner", "Ridley Scott"),
    ];

    let results = filter_by_field(&movies, SearchField::Genre, "sci");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Alien");

    let results = filter_by_field(&movies, SearchField::Director, "ridley");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Blade Runner");
}

#[test]
fn test_filter_by_field_empty_term_matches_everything() {
    let movies = vec![
        create_test_movie("A", "Drama", 2000, 5),
        create_test_movie("B", "Comedy", 2001, 6),
    ];

    let results = filter_by_field(&movies, SearchField::Title, "");
    assert_eq!(results.len(), 2);
}

#[test]
fn test_filter_by_field_preserves_original_order() {
    let movies = vec![
        create_test_movie("Zodiac", "Thriller", 2007, 8),
        create_test_movie("Arrival", "Sci-Fi", 2016, 8),
        create_test_movie("Zoolander", "Comedy", 2001, 6),
    ];

    let results = filter_by_field(&movies, SearchField::Title, "zo");
    let titles: Vec<&str> = results.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Zodiac", "Zoolander"]);
}

#[test]
fn test_filter_by_year_range_boundaries_are_inclusive() {
    let movies = vec![
        create_test_movie("Before", "Drama", 1999, 5),
        create_test_movie("Exact", "Drama", 2000, 5),
        create_test_movie("After", "Drama", 2001, 5),
    ];

    // A single-year range keeps exactly that year
    let results = filter_by_year_range(&movies, 2000, 2000);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Exact");

    // Both endpoints included
    let results = filter_by_year_range(&movies, 1999, 2001);
    assert_eq!(results.len(), 3);
}

#[test]
fn test_filter_by_year_range_inverted_bounds_yield_nothing() {
    let movies = vec![create_test_movie("Exact", "Drama", 2000, 5)];

    let results = filter_by_year_range(&movies, 2001, 1999);
    assert!(results.is_empty());
}

#[test]
fn test_filter_by_min_rating_threshold_is_inclusive() {
    let movies = vec![
        create_test_movie("Low", "Drama", 2000, 3),
        create_test_movie("Mid", "Drama", 2000, 7),
        create_test_movie("High", "Drama", 2000, 10),
    ];

    let results = filter_by_min_rating(&movies, 7);
    let titles: Vec<&str> = results.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Mid", "High"]);
}

#[test]
fn test_sort_movies_by_rating_is_stable() {
    let mut movies = vec![
        create_test_movie("A", "Drama", 2000, 5),
        create_test_movie("B", "Drama", 2000, 3),
        create_test_movie("C", "Drama", 2000, 5),
    ];

    sort_movies(&mut movies, SortKey::Rating, false);

    // Equal ratings keep their original relative order
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "A", "C"]);
}

#[test]
fn test_sort_movies_descending_keeps_tie_order() {
    let mut movies = vec![
        create_test_movie("A", "Drama", 2000, 5),
        create_test_movie("B", "Drama", 2000, 3),
        create_test_movie("C", "Drama", 2000, 5),
    ];

    sort_movies(&mut movies, SortKey::Rating, true);

    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C", "B"]);
}

#[test]
fn test_sort_movies_by_title_and_year() {
    let mut movies = vec![
        create_test_movie("Casablanca", "Romance", 1942, 9),
        create_test_movie("Alien", "Sci-Fi", 1979, 9),
        create_test_movie("Blade Runner", "Sci-Fi", 1982, 8),
    ];

    sort_movies(&mut movies, SortKey::Title, false);
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Alien", "Blade Runner", "Casablanca"]);

    sort_movies(&mut movies, SortKey::Year, true);
    let years: Vec<i32> = movies.iter().map(|m| m.year).collect();
    assert_eq!(years, vec![1982, 1979, 1942]);
}

#[test]
fn test_sort_key_from_menu_choice() {
    assert_eq!(SortKey::from_menu_choice("1"), Some((SortKey::Title, false)));
    assert_eq!(SortKey::from_menu_choice("2"), Some((SortKey::Title, true)));
    assert_eq!(SortKey::from_menu_choice("3"), Some((SortKey::Year, false)));
    assert_eq!(SortKey::from_menu_choice("4"), Some((SortKey::Year, true)));
    assert_eq!(
        SortKey::from_menu_choice("5"),
        Some((SortKey::Rating, false))
    );
    assert_eq!(SortKey::from_menu_choice("6"), Some((SortKey::Rating, true)));
    assert_eq!(SortKey::from_menu_choice("7"), Some((SortKey::Genre, false)));

    assert_eq!(SortKey::from_menu_choice("8"), None);
    assert_eq!(SortKey::from_menu_choice("title"), None);
}

#[test]
fn test_search_field_from_menu_choice() {
    assert_eq!(SearchField::from_menu_choice("1"), Some(SearchField::Title));
    assert_eq!(SearchField::from_menu_choice("2"), Some(SearchField::Genre));
    assert_eq!(
        SearchField::from_menu_choice("3"),
        Some(SearchField::Director)
    );

    // Year range and minimum rating are not substring fields
    assert_eq!(SearchField::from_menu_choice("4"), None);
    assert_eq!(SearchField::from_menu_choice("5"), None);
}

#[test]
fn test_collect_statistics_empty_collection() {
    let movies: Vec<Movie> = Vec::new();
    assert!(collect_statistics(&movies).is_none());
}

#[test]
fn test_collect_statistics_aggregates() {
    let movies = vec![
        create_test_movie("Worst One", "Drama", 1990, 3),
        create_test_movie("Mid One", "Comedy", 2000, 7),
        create_test_movie("Mid Two", "Comedy", 2010, 7),
        create_test_movie("Best One", "Drama", 2020, 10),
    ];

    let stats = collect_statistics(&movies).unwrap();

    assert_eq!(stats.total, 4);

    // (3 + 7 + 7 + 10) / 4
    assert_eq!(stats.average_rating, 6.75);
    assert_eq!(format!("{:.1}", stats.average_rating), "6.8");

    assert_eq!(stats.oldest_year, 1990);
    assert_eq!(stats.newest_year, 2020);

    assert_eq!(stats.best.title, "Best One");
    assert_eq!(stats.worst.title, "Worst One");

    // Only ratings that occur show up in the distribution
    let buckets: Vec<(u8, usize)> = stats
        .rating_distribution
        .iter()
        .map(|(r, c)| (*r, *c))
        .collect();
    assert_eq!(buckets, vec![(3, 1), (7, 2), (10, 1)]);
}

#[test]
fn test_collect_statistics_top_genre_counts() {
    let movies = vec![
        create_test_movie("A", "Drama", 2000, 5),
        create_test_movie("B", "Comedy", 2001, 6),
        create_test_movie("C", "Comedy", 2002, 7),
    ];

    let stats = collect_statistics(&movies).unwrap();
    assert_eq!(stats.top_genre, "Comedy");
}

#[test]
fn test_collect_statistics_top_genre_tie_goes_to_first_seen() {
    let movies = vec![
        create_test_movie("A", "Drama", 2000, 5),
        create_test_movie("B", "Comedy", 2001, 6),
        create_test_movie("C", "Drama", 2002, 7),
        create_test_movie("D", "Comedy", 2003, 8),
    ];

    let stats = collect_statistics(&movies).unwrap();
    assert_eq!(stats.top_genre, "Drama");
}

#[test]
fn test_collect_statistics_best_and_worst_prefer_first_occurrence() {
    let movies = vec![
        create_test_movie("First Great", "Drama", 2000, 10),
        create_test_movie("First Bad", "Drama", 2001, 2),
        create_test_movie("Second Great", "Drama", 2002, 10),
        create_test_movie("Second Bad", "Drama", 2003, 2),
    ];

    let stats = collect_statistics(&movies).unwrap();
    assert_eq!(stats.best.title, "First Great");
    assert_eq!(stats.worst.title, "First Bad");
}

#[test]
fn test_collect_statistics_out_of_domain_ratings_skip_distribution() {
    // Ratings outside 1-10 can enter through the direct insertion path;
    // they count toward the average but not the distribution buckets
    let movies = vec![
        create_test_movie("Zero", "Drama", 2000, 0),
        create_test_movie("Normal", "Drama", 2001, 8),
    ];

    let stats = collect_statistics(&movies).unwrap();
    assert_eq!(stats.average_rating, 4.0);

    let buckets: Vec<(u8, usize)> = stats
        .rating_distribution
        .iter()
        .map(|(r, c)| (*r, *c))
        .collect();
    assert_eq!(buckets, vec![(8, 1)]);
}

#[test]
fn test_collect_statistics_single_movie() {
    let movies = vec![create_test_movie("Only", "Drama", 1950, 6)];

    let stats = collect_statistics(&movies).unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.average_rating, 6.0);
    assert_eq!(stats.best.title, "Only");
    assert_eq!(stats.worst.title, "Only");
    assert_eq!(stats.oldest_year, 1950);
    assert_eq!(stats.newest_year, 1950);
}
