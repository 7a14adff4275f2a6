//! # User Data Transfer Objects Module
//!
//! 인증/프로필 API의 요청/응답 계약입니다.
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |------------|------|------|
//! | `POST /api/auth/register` | `RegisterRequest` (JSON) | `CreateUserResponse` |
//! | `POST /api/auth/login` | `LoginRequest` (JSON) | `LoginResponse` |
//! | `GET /api/auth/me` | Bearer 토큰 | `{ user: UserResponse }` |
//! | `GET /api/users/profile` | `ProfileQuery` | `{ user: UserResponse }` |
//! | `PUT /api/users/profile` | multipart → `ProfileChanges` | `{ message, user }` |
//! | `DELETE /api/users/profile` | `ProfileQuery` | `{ message }` |
//!
//! ## 보안
//!
//! 어떤 응답 DTO에도 비밀번호 해시는 포함되지 않습니다.
//!
//! ```json
//! {
//!   "_id": "64b7f0c2a1b2c3d4e5f60718",
//!   "name": "Ayşe",
//!   "email": "ayse@example.com",
//!   "profileImage": "https://res.cloudinary.com/demo/image/upload/v1/profile_images/abc.jpg",
//!   "createdAt": "2024-01-01T00:00:00Z",
//!   "updatedAt": "2024-01-15T10:30:00Z"
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
