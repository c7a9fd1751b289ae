use clean_core_api::UserRequestDto;
use clean_core_db::models::user::UserModel;

/// A valid, live user whose email is `<username>@example.com`.
pub fn create_test_user(username: &str) -> UserModel {
    UserModel::from_request(&UserRequestDto {
        first_name: format!("Test {username}"),
        last_name: Some("User".to_string()),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        ..UserRequestDto::default()
    })
    .expect("test user must be valid")
}
