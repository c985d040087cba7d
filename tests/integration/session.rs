//! Session persistence across process restarts

use std::sync::Arc;

use library_admin::{
    cli::Command,
    guard::{Access, Route, RouteGuard},
    models::User,
    repository::{FileSessionRepository, SessionRepository, SESSION_KEY},
    App, AppConfig,
};
use serde_json::json;

fn librarian() -> User {
    serde_json::from_value(json!({
        "id_user": 4,
        "login": "librarian",
        "profil_id": 2,
        "profil": { "id_profil": 2, "nom_p": "LIBRARIAN" }
    }))
    .unwrap()
}

#[test]
fn test_session_survives_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();

    FileSessionRepository::new(dir.path()).set(&librarian()).unwrap();

    // A fresh instance stands for the next launch
    let sessions = FileSessionRepository::new(dir.path());
    assert_eq!(sessions.path(), dir.path().join(format!("{}.json", SESSION_KEY)));

    let user = sessions.get().unwrap();
    assert_eq!(user.login, "librarian");
    assert_eq!(user.badge(), "librarian • LIBRARIAN");
}

#[test]
fn test_guard_follows_the_stored_file() {
    let dir = tempfile::tempdir().unwrap();
    let sessions = Arc::new(FileSessionRepository::new(dir.path()));
    let guard = RouteGuard::new(sessions.clone());

    assert_eq!(guard.authorize(Route::Members), Access::Redirect(Route::Login));

    sessions.set(&librarian()).unwrap();
    assert!(matches!(guard.authorize(Route::Members), Access::Render { .. }));

    // Hand-edited garbage reads as logged out
    std::fs::write(sessions.path(), "{ not json").unwrap();
    assert_eq!(guard.authorize(Route::Members), Access::Redirect(Route::Login));
}

#[tokio::test]
async fn test_logout_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.session.dir = Some(dir.path().to_path_buf());
    // Nothing listens on the discard port; logout never calls the API
    config.api.base_url = "http://127.0.0.1:9".to_string();

    let sessions = FileSessionRepository::new(config.session_dir());
    sessions.set(&librarian()).unwrap();

    let app = App::from_config(&config);
    let outcome = app.execute(Command::Logout).await;

    assert!(outcome.success);
    assert!(!sessions.path().exists());

    let outcome = app.execute(Command::Show(Route::Dashboard)).await;
    assert!(!outcome.success);
}
