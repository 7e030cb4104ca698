use std::collections::BTreeMap;

use crate::{
    types::{Movie, Statistics},
    utils::{MAX_RATING, MIN_RATING},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Genre,
    Director,
}

impl SearchField {
    pub fn from_menu_choice(choice: &str) -> Option<SearchField> {
        match choice {
            "1" => Some(SearchField::Title),
            "2" => Some(SearchField::Genre),
            "3" => Some(SearchField::Director),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Title => "Title",
            SearchField::Genre => "Genre",
            SearchField::Director => "Director",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Year,
    Rating,
    Genre,
}

impl SortKey {
    pub fn from_menu_choice(choice: &str) -> Option<(SortKey, bool)> {
        match choice {
            "1" => Some((SortKey::Title, false)),
            "2" => Some((SortKey::Title, true)),
            "3" => Some((SortKey::Year, false)),
            "4" => Some((SortKey::Year, true)),
            "5" => Some((SortKey::Rating, false)),
            "6" => Some((SortKey::Rating, true)),
            "7" => Some((SortKey::Genre, false)),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Year => "year",
            SortKey::Rating => "rating",
            SortKey::Genre => "genre",
        }
    }
}

pub fn filter_by_field(movies: &[Movie], field: SearchField, term: &str) -> Vec<Movie> {
    let term = term.to_lowercase();
    movies
        .iter()
        .filter(|m| {
            let haystack = match field {
                SearchField::Title => &m.title,
                SearchField::Genre => &m.genre,
                SearchField::Director => &m.director,
            };
            haystack.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

pub fn filter_by_year_range(movies: &[Movie], start: i32, end: i32) -> Vec<Movie> {
    movies
        .iter()
        .filter(|m| start <= m.year && m.year <= end)
        .cloned()
        .collect()
}

pub fn filter_by_min_rating(movies: &[Movie], min_rating: u8) -> Vec<Movie> {
    movies
        .iter()
        .filter(|m| m.rating >= min_rating)
        .cloned()
        .collect()
}

pub fn sort_movies(movies: &mut [Movie], key: SortKey, descending: bool) {
    movies.sort_by(|a, b| {
        let ord = match key {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Year => a.year.cmp(&b.year),
            SortKey::Rating => a.rating.cmp(&b.rating),
            SortKey::Genre => a.genre.cmp(&b.genre),
        };
        if descending { ord.reverse() } else { ord }
    });
}

pub fn collect_statistics(movies: &[Movie]) -> Option<Statistics> {
    if movies.is_empty() {
        return None;
    }

    let total = movies.len();
    let rating_sum: u32 = movies.iter().map(|m| m.rating as u32).sum();
    let average_rating = rating_sum as f64 / total as f64;

    let oldest_year = movies.iter().map(|m| m.year).min()?;
    let newest_year = movies.iter().map(|m| m.year).max()?;

    // strict comparisons, so the first occurrence wins ties
    let mut best = &movies[0];
    let mut worst = &movies[0];
    for movie in &movies[1..] {
        if movie.rating > best.rating {
            best = movie;
        }
        if movie.rating < worst.rating {
            worst = movie;
        }
    }

    let mut rating_distribution: BTreeMap<u8, usize> = BTreeMap::new();
    for movie in movies {
        if (MIN_RATING..=MAX_RATING).contains(&movie.rating) {
            *rating_distribution.entry(movie.rating).or_insert(0) += 1;
        }
    }

    Some(Statistics {
        total,
        average_rating,
        top_genre: top_genre(movies),
        oldest_year,
        newest_year,
        best: best.clone(),
        worst: worst.clone(),
        rating_distribution,
    })
}

fn top_genre(movies: &[Movie]) -> String {
    // counts keep first-encounter order, so ties resolve to the genre
    // seen earliest in the collection
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for movie in movies {
        match counts.iter_mut().find(|(genre, _)| *genre == movie.genre) {
            Some((_, count)) => *count += 1,
            None => counts.push((movie.genre.as_str(), 1)),
        }
    }

    let mut top: (&str, usize) = ("", 0);
    for (genre, count) in counts {
        if count > top.1 {
            top = (genre, count);
        }
    }
    top.0.to_string()
}
