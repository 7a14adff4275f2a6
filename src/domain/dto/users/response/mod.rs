pub mod user_response;

pub use user_response::{CreateUserResponse, LoginResponse, RegisteredUser, UserRef, UserResponse, rfc3339};
