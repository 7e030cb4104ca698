use crate::{
    info,
    management::{CollectionError, CollectionManager},
    success, warning,
};

use super::{prompt, view};

pub async fn delete_movie(collection: &mut CollectionManager) {
    if collection.is_empty() {
        info!("No movies to delete");
        return;
    }

    view::show_collection(collection.get_movies());

    let Some(line) = prompt::read_line("\nEnter movie number to delete (0 to cancel): ") else {
        return;
    };
    let Ok(position) = line.parse::<usize>() else {
        warning!("Please enter a valid number");
        return;
    };
    if position == 0 {
        return;
    }

    match collection.remove_at(position).await {
        Ok(movie) => success!("Deleted: {}", movie.title),
        Err(CollectionError::InvalidPosition(_)) => warning!("Invalid movie number"),
        Err(e) => warning!("Failed to save collection. Err: {}", e),
    }
}
