use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Movie {
    pub title: String,
    pub genre: String,
}

impl Movie {
    pub fn new(title: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            genre: genre.to_string(),
        }
    }
}

/// In-memory credential table, movie catalog, and per-user watch history.
/// Everything lives for the process lifetime; nothing is written to disk.
pub struct Store {
    credentials: HashMap<String, String>,
    catalog: Vec<Movie>,
    history: HashMap<String, Vec<String>>,
}

impl Store {
    /// Builds a store from seed data. A watch-history list is created empty
    /// for every credential up front.
    pub fn new(credentials: &[(&str, &str)], catalog: Vec<Movie>) -> Self {
        let credentials: HashMap<String, String> = credentials
            .iter()
            .map(|(user, pass)| (user.to_string(), pass.to_string()))
            .collect();
        let history = credentials
            .keys()
            .map(|user| (user.clone(), Vec::new()))
            .collect();
        Self {
            credentials,
            catalog,
            history,
        }
    }

    /// The stock accounts and nine-movie catalog the app ships with.
    pub fn seeded() -> Self {
        Self::new(
            &[("user1", "password1"), ("user2", "password2")],
            vec![
                Movie::new("Kathi", "Action"),
                Movie::new("Sura", "Action"),
                Movie::new("Amaran", "Drama"),
                Movie::new("Kanguva", "Sci-Fi"),
                Movie::new("Inception", "Sci-Fi"),
                Movie::new("Interstellar", "Sci-Fi"),
                Movie::new("Titanic", "Romance"),
                Movie::new("Parasite", "Drama"),
                Movie::new("The Shawshank Redemption", "Drama"),
            ],
        )
    }

    /// Exact match after trimming surrounding whitespace from both inputs.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.credentials
            .get(username.trim())
            .is_some_and(|stored| stored == password.trim())
    }

    /// Titles matching the genre (case-insensitive), in catalog order.
    pub fn recommend_by_genre(&self, genre: &str) -> Vec<String> {
        self.catalog
            .iter()
            .filter(|movie| movie.genre.eq_ignore_ascii_case(genre))
            .map(|movie| movie.title.clone())
            .collect()
    }

    /// Appends a title to the user's history. Duplicates are kept; unknown
    /// usernames are ignored (only the active session's name reaches here).
    pub fn append_to_history(&mut self, username: &str, title: &str) {
        if let Some(list) = self.history.get_mut(username) {
            list.push(title.to_string());
        }
    }

    pub fn history(&self, username: &str) -> &[String] {
        self.history.get(username).map(Vec::as_slice).unwrap_or(&[])
    }
}
