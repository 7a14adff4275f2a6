//! # Domain Layer Module
//!
//! 도메인 계층입니다. Spring의 Domain Layer처럼 영속 객체와 API 계약을 분리합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - MongoDB 문서 (User, Recipe + 임베드된 Comment/Reply/Like)
//! └── dto        - 요청/응답 계약 (multipart 폼 해석, 사용자 참조 채우기)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching, media)
//! ```
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@Entity` / `@Document` | [`entities`] |
//! | `@RequestBody` / `@ResponseBody` | [`dto`] |
//! | `@Valid` | `validator` + `into_*`/`from_form` 검증 메서드 |

pub mod dto;
pub mod entities;
