mod collection;

pub use collection::CollectionError;
pub use collection::CollectionManager;
pub use collection::REQUIRED_FIELDS;
