use crate::{info, management::CollectionManager, query, utils};

pub fn show_statistics(collection: &CollectionManager) {
    let Some(stats) = query::collect_statistics(collection.get_movies()) else {
        info!("No statistics available - collection is empty");
        return;
    };

    println!();
    info!("Total movies: {}", stats.total);
    info!(
        "Average rating: {:.1}/{}",
        stats.average_rating,
        utils::MAX_RATING
    );
    info!("Most common genre: {}", stats.top_genre);
    info!("Year range: {} - {}", stats.oldest_year, stats.newest_year);
    info!(
        "Best rated: {} ({}/{})",
        stats.best.title,
        stats.best.rating,
        utils::MAX_RATING
    );
    info!(
        "Worst rated: {} ({}/{})",
        stats.worst.title,
        stats.worst.rating,
        utils::MAX_RATING
    );

    println!();
    info!("Rating distribution:");
    for (rating, count) in &stats.rating_distribution {
        println!("   {}/{}: {} movie(s)", rating, utils::MAX_RATING, count);
    }
}
