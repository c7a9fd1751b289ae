use clean_core_api::UserRequestDto;

use crate::memory::InMemoryUserGateway;
use crate::models::UserModel;

pub fn request(username: &str) -> UserRequestDto {
    UserRequestDto {
        first_name: format!("{username} first"),
        last_name: Some(format!("{username} last")),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        ..UserRequestDto::default()
    }
}

pub fn gateway_with(usernames: &[&str]) -> InMemoryUserGateway {
    InMemoryUserGateway::with_users(
        usernames
            .iter()
            .map(|username| UserModel::from_request(&request(username)).unwrap())
            .collect(),
    )
}
