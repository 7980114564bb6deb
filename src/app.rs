use crossterm::event::KeyCode;

use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Login,
    Recommend,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Genre {
    Action,
    SciFi,
    Drama,
    Romance,
}

impl Genre {
    pub const ALL: &'static [Genre] = &[
        Genre::Action,
        Genre::SciFi,
        Genre::Drama,
        Genre::Romance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::SciFi => "Sci-Fi",
            Genre::Drama => "Drama",
            Genre::Romance => "Romance",
        }
    }
}

/// Focus ring on the recommendation screen, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecommendItem {
    UserId,
    Genre,
    Recommend,
    AddToHistory,
    ViewHistory,
    Logout,
}

impl RecommendItem {
    pub const ALL: &'static [RecommendItem] = &[
        RecommendItem::UserId,
        RecommendItem::Genre,
        RecommendItem::Recommend,
        RecommendItem::AddToHistory,
        RecommendItem::ViewHistory,
        RecommendItem::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecommendItem::UserId => "Enter User ID",
            RecommendItem::Genre => "Select Genre",
            RecommendItem::Recommend => "Recommend",
            RecommendItem::AddToHistory => "Add to Watch History",
            RecommendItem::ViewHistory => "View Watch History",
            RecommendItem::Logout => "Logout",
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,

    // Login screen
    pub username_input: String,
    pub password_input: String,
    pub login_field: LoginField,
    pub login_message: String,

    // Recommendation screen
    pub user_id_input: String,
    pub genre_selected: usize,
    pub recommend_focus: usize,
    pub result: String,
    pub result_scroll: u16,

    // Active session + backing store
    pub session: Option<String>,
    pub store: Store,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self {
            screen: Screen::Login,
            should_quit: false,
            username_input: String::new(),
            password_input: String::new(),
            login_field: LoginField::Username,
            login_message: String::new(),
            user_id_input: String::new(),
            genre_selected: 0,
            recommend_focus: 0,
            result: String::new(),
            result_scroll: 0,
            session: None,
            store,
        }
    }

    pub fn genre(&self) -> Genre {
        Genre::ALL[self.genre_selected]
    }

    pub fn focused_item(&self) -> RecommendItem {
        RecommendItem::ALL[self.recommend_focus]
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match self.screen {
            Screen::Login => self.handle_login(key),
            Screen::Recommend => self.handle_recommend(key),
        }
    }

    fn handle_login(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.login_field = match self.login_field {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            KeyCode::Enter => self.submit_login(),
            KeyCode::Char(c) => match self.login_field {
                LoginField::Username => self.username_input.push(c),
                LoginField::Password => self.password_input.push(c),
            },
            KeyCode::Backspace => {
                match self.login_field {
                    LoginField::Username => self.username_input.pop(),
                    LoginField::Password => self.password_input.pop(),
                };
            }
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_recommend(&mut self, key: KeyCode) {
        let items = RecommendItem::ALL;
        match key {
            KeyCode::Tab | KeyCode::Down => {
                self.recommend_focus = (self.recommend_focus + 1) % items.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.recommend_focus = if self.recommend_focus == 0 {
                    items.len() - 1
                } else {
                    self.recommend_focus - 1
                };
            }
            KeyCode::Left if self.focused_item() == RecommendItem::Genre => {
                self.genre_selected = if self.genre_selected == 0 {
                    Genre::ALL.len() - 1
                } else {
                    self.genre_selected - 1
                };
            }
            KeyCode::Right if self.focused_item() == RecommendItem::Genre => {
                self.genre_selected = (self.genre_selected + 1) % Genre::ALL.len();
            }
            KeyCode::Char(c) if self.focused_item() == RecommendItem::UserId => {
                self.user_id_input.push(c);
            }
            KeyCode::Backspace if self.focused_item() == RecommendItem::UserId => {
                self.user_id_input.pop();
            }
            KeyCode::Enter => match self.focused_item() {
                RecommendItem::UserId | RecommendItem::Recommend => {
                    self.request_recommendation();
                }
                RecommendItem::Genre => {
                    self.recommend_focus = (self.recommend_focus + 1) % items.len();
                }
                RecommendItem::AddToHistory => self.add_to_history(),
                RecommendItem::ViewHistory => self.view_history(),
                RecommendItem::Logout => self.logout(),
            },
            KeyCode::PageUp => {
                self.result_scroll = self.result_scroll.saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.result_scroll = self.result_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Login submit: on a credential match the session opens and the view
    /// switches; otherwise an inline error is shown and nothing else changes.
    pub fn submit_login(&mut self) {
        let username = self.username_input.trim().to_string();
        let password = self.password_input.trim().to_string();
        if self.store.authenticate(&username, &password) {
            self.session = Some(username);
            self.login_message.clear();
            self.recommend_focus = 0;
            self.screen = Screen::Recommend;
        } else {
            self.login_message = "Invalid username or password.".to_string();
        }
    }

    /// The entered user id must be non-empty and match the active session;
    /// a mismatch is reported without touching the store.
    pub fn request_recommendation(&mut self) {
        let Some(active) = self.session.clone() else {
            return;
        };
        let user_id = self.user_id_input.trim().to_string();
        if user_id.is_empty() || user_id != active {
            self.show("Invalid User ID. Please enter the correct User ID.".to_string());
            return;
        }
        let genre = self.genre().label();
        let mut text = format!("User ID: {}\n", user_id);
        text.push_str(&format!("Recommended Movies ({}):\n", genre));
        for title in self.store.recommend_by_genre(genre) {
            text.push_str(&format!("- {}\n", title));
        }
        self.show(text);
    }

    /// Appends the first recommendation for the selected genre to the active
    /// user's history. An empty recommendation list mutates nothing.
    pub fn add_to_history(&mut self) {
        let Some(active) = self.session.clone() else {
            return;
        };
        let recommendations = self.store.recommend_by_genre(self.genre().label());
        match recommendations.first() {
            Some(title) => {
                self.store.append_to_history(&active, title);
                self.show(format!("Movie added to Watch History: {}", title));
            }
            None => self.show("No movies available to add.".to_string()),
        }
    }

    pub fn view_history(&mut self) {
        let Some(active) = self.session.clone() else {
            return;
        };
        let mut text = format!("Watch History for {}:\n", active);
        for title in self.store.history(&active) {
            text.push_str(&format!("- {}\n", title));
        }
        self.show(text);
    }

    /// Clears the session, every input field, and the result area, then
    /// returns to the login screen.
    pub fn logout(&mut self) {
        self.session = None;
        self.username_input.clear();
        self.password_input.clear();
        self.user_id_input.clear();
        self.result.clear();
        self.result_scroll = 0;
        self.login_field = LoginField::Username;
        self.login_message.clear();
        self.screen = Screen::Login;
    }

    fn show(&mut self, text: String) {
        self.result = text;
        self.result_scroll = 0;
    }
}
