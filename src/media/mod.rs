//! 외부 이미지 호스팅 연동
//!
//! [`ImageHostClient`]는 기동 시 한 번 만들어 `ServiceLocator::set`으로 등록하고,
//! 서비스는 `ServiceLocator::get::<ImageHostClient>()`로 공유합니다.

pub mod cloudinary;

pub use cloudinary::{HostedImage, ImageHostClient};
