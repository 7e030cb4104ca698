use crate::{info, management::CollectionManager, success, warning};

use super::{add, delete, edit, prompt, search, sort, stats, view};

pub async fn run(collection: &mut CollectionManager) {
    info!("Movie Collection Manager");

    if let Some(reason) = collection.load_error() {
        warning!("Could not load collection: {}", reason);
        warning!("Starting with empty collection.");
    }
    if collection.skipped_on_load() > 0 {
        warning!("{} invalid movie(s) skipped", collection.skipped_on_load());
    }

    info!(
        "Loaded {} movies from {}",
        collection.get_count(),
        collection.get_path().display()
    );

    loop {
        println!();
        println!("1. Add new movie");
        println!("2. View collection");
        println!("3. Statistics");
        println!("4. Search movies");
        println!("5. Edit movie");
        println!("6. Sort collection");
        println!("7. Delete movie");
        println!("8. Exit");

        // EOF exits like option 8
        let Some(choice) = prompt::read_line("\nChoose option (1-8): ") else {
            break;
        };

        match choice.as_str() {
            "1" => add::add_movie(collection).await,
            "2" => view::show_collection(collection.get_movies()),
            "3" => stats::show_statistics(collection),
            "4" => search::search_movies(collection),
            "5" => edit::edit_movie(collection).await,
            "6" => sort::sort_collection(collection).await,
            "7" => delete::delete_movie(collection).await,
            "8" => break,
            _ => warning!("Please choose a valid option (1-8)"),
        }
    }

    success!("Thank you for using cinelog. Goodbye!");
}
