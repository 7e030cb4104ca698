use tabled::Table;

use crate::{
    info,
    types::{Movie, MovieTableRow},
    utils,
};

pub fn show_collection(movies: &[Movie]) {
    if movies.is_empty() {
        info!("Your collection is empty. Add some movies!");
        return;
    }
    print_table(movies);
}

pub fn print_table(movies: &[Movie]) {
    // convert movies to table rows, positions are 1-based
    let table_rows: Vec<MovieTableRow> = movies
        .iter()
        .enumerate()
        .map(|(i, m)| MovieTableRow {
            pos: (i + 1).to_string(),
            title: m.title.clone(),
            year: m.year.to_string(),
            genre: m.genre.clone(),
            rating: format!("{}/{}", m.rating, utils::MAX_RATING),
            director: m.director.clone(),
            review: utils::truncate(&m.review, 40),
            added: m.added_date.clone(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
