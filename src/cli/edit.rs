use crate::{info, management::CollectionManager, success, utils, warning};

use super::{prompt, view};

pub async fn edit_movie(collection: &mut CollectionManager) {
    if collection.is_empty() {
        info!("No movies to edit");
        return;
    }

    view::show_collection(collection.get_movies());

    let Some(line) = prompt::read_line("\nEnter movie number to edit (0 to cancel): ") else {
        return;
    };
    let Ok(position) = line.parse::<usize>() else {
        warning!("Please enter a valid number");
        return;
    };
    if position == 0 {
        return;
    }
    if position > collection.get_count() {
        warning!("Invalid movie number");
        return;
    }

    let mut movie = collection.get_movies()[position - 1].clone();
    info!("Editing: {}", movie.title);
    println!("(Press Enter to keep current value)");

    let Some(input) = prompt::read_line(&format!("Title [{}]: ", movie.title)) else {
        return;
    };
    if !input.is_empty() {
        movie.title = input;
    }

    let Some(input) = prompt::read_line(&format!("Genre [{}]: ", movie.genre)) else {
        return;
    };
    if !input.is_empty() {
        movie.genre = input;
    }

    let Some(input) = prompt::read_line(&format!("Year [{}]: ", movie.year)) else {
        return;
    };
    if !input.is_empty() {
        match utils::parse_year(&input) {
            Some(year) => movie.year = year,
            None => warning!("Invalid year, keeping {}", movie.year),
        }
    }

    let Some(input) = prompt::read_line(&format!("Rating [{}]: ", movie.rating)) else {
        return;
    };
    if !input.is_empty() {
        match utils::parse_rating(&input) {
            Some(rating) => movie.rating = rating,
            None => warning!("Invalid rating, keeping {}", movie.rating),
        }
    }

    let Some(input) = prompt::read_line(&format!("Director [{}]: ", movie.director)) else {
        return;
    };
    if !input.is_empty() {
        movie.director = input;
    }

    let Some(input) = prompt::read_line(&format!("Review [{}]: ", movie.review)) else {
        return;
    };
    if !input.is_empty() {
        movie.review = input;
    }

    let updated_title = movie.title.clone();
    match collection.replace_at(position, movie).await {
        Ok(()) => success!("Movie '{}' updated successfully!", updated_title),
        Err(e) => warning!("Failed to save changes. Err: {}", e),
    }
}
