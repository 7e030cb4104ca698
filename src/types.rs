use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub rating: u8,
    pub director: String,
    pub review: String,
    pub added_date: String,
}

#[derive(Debug, Clone)]
pub struct MovieDraft {
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub rating: u8,
    pub director: String,
    pub review: String,
}

impl MovieDraft {
    pub fn stamp(self, added_date: String) -> Movie {
        Movie {
            title: self.title,
            genre: self.genre,
            year: self.year,
            rating: self.rating,
            director: self.director,
            review: self.review,
            added_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Statistics {
    pub total: usize,
    pub average_rating: f64,
    pub top_genre: String,
    pub oldest_year: i32,
    pub newest_year: i32,
    pub best: Movie,
    pub worst: Movie,
    pub rating_distribution: BTreeMap<u8, usize>,
}

#[derive(Tabled)]
pub struct MovieTableRow {
    pub pos: String,
    pub title: String,
    pub year: String,
    pub genre: String,
    pub rating: String,
    pub director: String,
    pub review: String,
    pub added: String,
}
