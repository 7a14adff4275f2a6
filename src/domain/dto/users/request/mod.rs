pub mod auth_request;
pub mod profile_request;

pub use auth_request::{INVALID_CREDENTIALS, LoginRequest, RegisterRequest, Registration};
pub use profile_request::{ONE_PROFILE_IMAGE, ProfileChanges, ProfileQuery};
