//! # Core Framework Module
//!
//! 백엔드 전역에서 사용하는 핵심 기능입니다.
//!
//! - [`registry`] - 싱글톤 의존성 주입 컨테이너 (`ServiceLocator`, `register_component!`)
//! - [`errors`] - 통합 에러 타입 (`AppError`)과 HTTP 응답 변환
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프로젝트 |
//! |--------|-------------|
//! | `@Component` / `@Service` | `register_component!(T, Service, ...)` |
//! | `@Repository` | `register_component!(T, Repository, ...)` |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | 생성자 클로저 안의 `ServiceLocator::get::<T>()` |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! ServiceLocator::set(database);
//! ServiceLocator::set(redis);
//! ServiceLocator::set(image_host);
//!
//! ServiceLocator::initialize_all().await?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
