//! End-to-end screen-flow scenarios driven through the named transitions
//! (no terminal required for the logic).

use pretty_assertions::assert_eq;
use reelpick::app::{App, Genre, Screen};
use reelpick::store::Store;

fn login(app: &mut App, username: &str, password: &str) {
    app.username_input = username.to_string();
    app.password_input = password.to_string();
    app.submit_login();
}

fn select_genre(app: &mut App, genre: Genre) {
    app.genre_selected = Genre::ALL.iter().position(|g| *g == genre).unwrap();
}

#[test]
fn drama_recommendation_for_user2() {
    let mut app = App::new(Store::seeded());
    login(&mut app, "user2", "password2");
    assert_eq!(app.screen, Screen::Recommend);

    app.user_id_input = "user2".to_string();
    select_genre(&mut app, Genre::Drama);
    app.request_recommendation();

    assert_eq!(
        app.result,
        "User ID: user2\n\
         Recommended Movies (Drama):\n\
         - Amaran\n\
         - Parasite\n\
         - The Shawshank Redemption\n"
    );
}

#[test]
fn mismatched_user_id_is_rejected_without_store_access() {
    let mut app = App::new(Store::seeded());
    login(&mut app, "user1", "password1");

    app.user_id_input = "user2".to_string();
    app.request_recommendation();

    assert_eq!(app.result, "Invalid User ID. Please enter the correct User ID.");
    assert!(app.store.history("user1").is_empty());
    assert_eq!(app.screen, Screen::Recommend);
}

#[test]
fn empty_user_id_is_rejected() {
    let mut app = App::new(Store::seeded());
    login(&mut app, "user1", "password1");

    app.request_recommendation();

    assert_eq!(app.result, "Invalid User ID. Please enter the correct User ID.");
}

#[test]
fn add_to_history_takes_the_first_recommendation() {
    let mut app = App::new(Store::seeded());
    login(&mut app, "user1", "password1");

    select_genre(&mut app, Genre::Action);
    app.add_to_history();
    assert_eq!(app.result, "Movie added to Watch History: Kathi");
    assert_eq!(app.store.history("user1"), ["Kathi"]);

    // A second identical add keeps the duplicate
    app.add_to_history();
    assert_eq!(app.store.history("user1"), ["Kathi", "Kathi"]);
}

#[test]
fn add_with_no_matching_movies_mutates_nothing() {
    let mut app = App::new(Store::new(
        &[("user1", "password1")],
        vec![], // empty catalog: every genre recommends nothing
    ));
    login(&mut app, "user1", "password1");

    select_genre(&mut app, Genre::Romance);
    app.add_to_history();

    assert_eq!(app.result, "No movies available to add.");
    assert!(app.store.history("user1").is_empty());
}

#[test]
fn view_history_lists_entries_under_a_header() {
    let mut app = App::new(Store::seeded());
    login(&mut app, "user1", "password1");

    select_genre(&mut app, Genre::SciFi);
    app.add_to_history();
    app.view_history();

    assert_eq!(app.result, "Watch History for user1:\n- Kanguva\n");
}

#[test]
fn view_history_is_idempotent() {
    let mut app = App::new(Store::seeded());
    login(&mut app, "user2", "password2");

    select_genre(&mut app, Genre::Romance);
    app.add_to_history();

    app.view_history();
    let first = app.result.clone();
    app.view_history();
    assert_eq!(app.result, first);
}

#[test]
fn history_survives_logout_within_the_process() {
    let mut app = App::new(Store::seeded());
    login(&mut app, "user1", "password1");
    select_genre(&mut app, Genre::Action);
    app.add_to_history();
    app.logout();

    // No session: transitions are gated until the next successful login
    app.view_history();
    assert!(app.result.is_empty());

    login(&mut app, "user1", "password1");
    app.view_history();
    assert_eq!(app.result, "Watch History for user1:\n- Kathi\n");
}

#[test]
fn histories_are_per_user() {
    let mut app = App::new(Store::seeded());
    login(&mut app, "user1", "password1");
    select_genre(&mut app, Genre::Action);
    app.add_to_history();
    app.logout();

    login(&mut app, "user2", "password2");
    app.view_history();
    assert_eq!(app.result, "Watch History for user2:\n");
}

#[test]
fn full_session_round_trip() {
    let mut app = App::new(Store::seeded());

    login(&mut app, "user1", "badpass");
    assert_eq!(app.screen, Screen::Login);
    assert_eq!(app.login_message, "Invalid username or password.");

    login(&mut app, "user1", "password1");
    assert_eq!(app.screen, Screen::Recommend);
    assert!(app.login_message.is_empty());

    app.user_id_input = "user1".to_string();
    select_genre(&mut app, Genre::SciFi);
    app.request_recommendation();
    assert_eq!(
        app.result,
        "User ID: user1\n\
         Recommended Movies (Sci-Fi):\n\
         - Kanguva\n\
         - Inception\n\
         - Interstellar\n"
    );

    app.add_to_history();
    app.view_history();
    assert_eq!(app.result, "Watch History for user1:\n- Kanguva\n");

    app.logout();
    assert_eq!(app.screen, Screen::Login);
    assert!(app.session.is_none());
    assert!(app.result.is_empty());
}
