use crate::{info, management::CollectionManager, success, types::MovieDraft, utils, warning};

use super::prompt;

pub async fn add_movie(collection: &mut CollectionManager) {
    info!("Add a new movie");

    let Some(title) = prompt::read_until("Movie title (or 'back' to return): ", true, |line| {
        utils::validate_new_title(collection.get_movies(), line)
    }) else {
        return;
    };

    let Some(genre) = prompt::read_line("Genre: ") else {
        return;
    };
    let genre = utils::or_unknown(&genre);

    let year_error = format!(
        "Please enter a valid year ({}-{})",
        utils::FIRST_FILM_YEAR,
        utils::current_year()
    );
    let Some(year) = prompt::read_until("Release year: ", false, |line| {
        utils::parse_year(line).ok_or_else(|| year_error.clone())
    }) else {
        return;
    };

    let rating_prompt = format!("Your rating ({}-{}): ", utils::MIN_RATING, utils::MAX_RATING);
    let rating_error = format!(
        "Please enter a number between {}-{}",
        utils::MIN_RATING,
        utils::MAX_RATING
    );
    let Some(rating) = prompt::read_until(&rating_prompt, false, |line| {
        utils::parse_rating(line).ok_or_else(|| rating_error.clone())
    }) else {
        return;
    };

    let Some(director) = prompt::read_line("Director (optional): ") else {
        return;
    };
    let director = utils::or_unknown(&director);

    let Some(review) = prompt::read_line("Your review (optional): ") else {
        return;
    };

    let draft = MovieDraft {
        title: title.clone(),
        genre,
        year,
        rating,
        director,
        review,
    };

    match collection.append(draft).await {
        Ok(()) => success!("Movie '{}' added successfully!", title),
        Err(e) => warning!("Failed to save movie to collection. Err: {}", e),
    }
}
