use crate::{
    info,
    management::CollectionManager,
    query::{self, SearchField},
    types::Movie,
    utils, warning,
};

use super::{prompt, view};

pub fn search_movies(collection: &CollectionManager) {
    if collection.is_empty() {
        info!("No movies to search");
        return;
    }

    println!();
    println!("Search by:");
    println!("1. Title");
    println!("2. Genre");
    println!("3. Director");
    println!("4. Year range");
    println!("5. Minimum rating");

    let Some(choice) = prompt::read_line("\nChoose search type (1-5): ") else {
        return;
    };

    if let Some(field) = SearchField::from_menu_choice(&choice) {
        search_by_field(collection, field);
        return;
    }

    match choice.as_str() {
        "4" => search_by_year_range(collection),
        "5" => search_by_min_rating(collection),
        _ => warning!("Invalid choice"),
    }
}

fn search_by_field(collection: &CollectionManager, field: SearchField) {
    let field_prompt = format!("Enter {} to search: ", field.label().to_lowercase());
    let Some(term) = prompt::read_line(&field_prompt) else {
        return;
    };

    let results = query::filter_by_field(collection.get_movies(), field, &term);
    let description = format!("{} containing '{}'", field.label(), term.to_lowercase());
    display_results(&results, &description);
}

fn search_by_year_range(collection: &CollectionManager) {
    let Some(start_line) = prompt::read_line("Start year: ") else {
        return;
    };
    let Ok(start) = start_line.parse::<i32>() else {
        warning!("Please enter valid years");
        return;
    };

    let Some(end_line) = prompt::read_line("End year: ") else {
        return;
    };
    let Ok(end) = end_line.parse::<i32>() else {
        warning!("Please enter valid years");
        return;
    };

    let results = query::filter_by_year_range(collection.get_movies(), start, end);
    display_results(&results, &format!("Years {}-{}", start, end));
}

fn search_by_min_rating(collection: &CollectionManager) {
    let rating_prompt = format!("Minimum rating ({}-{}): ", utils::MIN_RATING, utils::MAX_RATING);
    let Some(line) = prompt::read_line(&rating_prompt) else {
        return;
    };
    let Some(min_rating) = utils::parse_rating(&line) else {
        warning!(
            "Rating must be between {}-{}",
            utils::MIN_RATING,
            utils::MAX_RATING
        );
        return;
    };

    let results = query::filter_by_min_rating(collection.get_movies(), min_rating);
    display_results(&results, &format!("Rating >= {}", min_rating));
}

fn display_results(results: &[Movie], description: &str) {
    if results.is_empty() {
        info!("No movies found for {}", description);
        return;
    }

    info!("Found {} movie(s) for {}:", results.len(), description);
    view::print_table(results);
}
