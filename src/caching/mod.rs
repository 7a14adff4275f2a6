//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 읽기 캐시입니다. 현재는 사용자 문서를 ID 기준으로
//! 10분간 캐싱하며, 수정/삭제 시 무효화합니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
