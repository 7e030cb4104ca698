use crate::{info, management::CollectionManager, query::SortKey, success, warning};

use super::{prompt, view};

pub async fn sort_collection(collection: &mut CollectionManager) {
    if collection.is_empty() {
        info!("No movies to sort");
        return;
    }

    println!();
    println!("Sort by:");
    println!("1. Title (A-Z)");
    println!("2. Title (Z-A)");
    println!("3. Year (Oldest first)");
    println!("4. Year (Newest first)");
    println!("5. Rating (Lowest first)");
    println!("6. Rating (Highest first)");
    println!("7. Genre (A-Z)");

    let Some(choice) = prompt::read_line("\nChoose sort option (1-7): ") else {
        return;
    };

    let Some((key, descending)) = SortKey::from_menu_choice(&choice) else {
        warning!("Invalid choice");
        return;
    };

    match collection.sort(key, descending).await {
        Ok(()) => {
            success!("Collection sorted by {}", key.label());
            view::show_collection(collection.get_movies());
        }
        Err(e) => warning!("Failed to save sorted collection. Err: {}", e),
    }
}
