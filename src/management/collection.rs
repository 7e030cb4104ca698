use std::{
    fmt,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    query::{self, SortKey},
    types::{Movie, MovieDraft},
    utils,
};

pub const REQUIRED_FIELDS: [&str; 7] = [
    "title",
    "genre",
    "year",
    "rating",
    "director",
    "review",
    "added_date",
];

#[derive(Debug)]
pub enum CollectionError {
    IoError(Error),
    SerdeError(serde_json::Error),
    InvalidPosition(usize),
}

impl From<Error> for CollectionError {
    fn from(err: Error) -> Self {
        CollectionError::IoError(err)
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::IoError(e) => write!(f, "file access failed: {}", e),
            CollectionError::SerdeError(e) => write!(f, "serialization failed: {}", e),
            CollectionError::InvalidPosition(position) => {
                write!(f, "no movie at position {}", position)
            }
        }
    }
}

impl std::error::Error for CollectionError {}

pub struct CollectionManager {
    path: PathBuf,
    movies: Vec<Movie>,
    skipped_on_load: usize,
    load_error: Option<String>,
}

impl CollectionManager {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            movies: Vec::new(),
            skipped_on_load: 0,
            load_error: None,
        }
    }

    // Loading never fails: a missing file yields an empty collection, a
    // corrupt file yields an empty collection with the reason retained,
    // and entries missing required fields are skipped and counted.
    pub async fn load(&self) -> Self {
        let mut loaded = Self::new(self.path.clone());

        let content = match async_fs::read_to_string(&loaded.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return loaded,
            Err(e) => {
                loaded.load_error = Some(e.to_string());
                return loaded;
            }
        };

        let entries: Vec<Value> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                loaded.load_error = Some(e.to_string());
                return loaded;
            }
        };

        for entry in entries {
            match Self::parse_movie(entry) {
                Some(movie) => loaded.movies.push(movie),
                None => loaded.skipped_on_load += 1,
            }
        }
        loaded
    }

    fn parse_movie(entry: Value) -> Option<Movie> {
        let fields = entry.as_object()?;
        if !REQUIRED_FIELDS.iter().all(|field| fields.contains_key(*field)) {
            return None;
        }
        serde_json::from_value(entry).ok()
    }

    // Rotates the previous file to <name>.bak before writing. The rotation
    // plus write is not crash-atomic; one generation of rollback only.
    pub async fn save(&self) -> Result<(), CollectionError> {
        let json =
            serde_json::to_string_pretty(&self.movies).map_err(|e| CollectionError::SerdeError(e))?;

        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| CollectionError::IoError(e))?;
        }

        if async_fs::metadata(&self.path).await.is_ok() {
            let backup = self.backup_path();
            // rename onto an existing path fails on some platforms
            let _ = async_fs::remove_file(&backup).await;
            async_fs::rename(&self.path, &backup)
                .await
                .map_err(|e| CollectionError::IoError(e))?;
        }

        async_fs::write(&self.path, json)
            .await
            .map_err(|e| CollectionError::IoError(e))
    }

    pub async fn append(&mut self, draft: MovieDraft) -> Result<(), CollectionError> {
        let movie = draft.stamp(utils::now_stamp());
        self.movies.push(movie);
        self.save().await
    }

    // Programmatic path: field presence is guaranteed by the type, entry
    // rules (unique title, year and rating domains) are not applied.
    pub async fn insert_direct(&mut self, movie: Movie) -> Result<(), CollectionError> {
        self.movies.push(movie);
        self.save().await
    }

    pub async fn replace_at(
        &mut self,
        position: usize,
        movie: Movie,
    ) -> Result<(), CollectionError> {
        if position == 0 || position > self.movies.len() {
            return Err(CollectionError::InvalidPosition(position));
        }
        self.movies[position - 1] = movie;
        self.save().await
    }

    pub async fn remove_at(&mut self, position: usize) -> Result<Movie, CollectionError> {
        if position == 0 || position > self.movies.len() {
            return Err(CollectionError::InvalidPosition(position));
        }
        let movie = self.movies.remove(position - 1);
        self.save().await?;
        Ok(movie)
    }

    pub async fn sort(&mut self, key: SortKey, descending: bool) -> Result<(), CollectionError> {
        query::sort_movies(&mut self.movies, key, descending);
        self.save().await
    }

    pub async fn clear(&mut self) -> Result<(), CollectionError> {
        self.movies.clear();
        self.save().await
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        let lowered = title.to_lowercase();
        self.movies.iter().find(|m| m.title.to_lowercase() == lowered)
    }

    pub fn get_movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get_count(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn skipped_on_load(&self) -> usize {
        self.skipped_on_load
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".bak");
        self.path.with_file_name(name)
    }
}
