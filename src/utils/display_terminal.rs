//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 컴포넌트 초기화 진행 상황을 보기 좋게 출력합니다.
//! 로그 레벨과 관계없이 항상 표준 출력으로 나갑니다.

const BOX_WIDTH: usize = 50;

/// 박스로 둘러싼 제목
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🔄 INITIALIZING SERVICE REGISTRY         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = BOX_WIDTH - 1);
    println!("╚{}╝", border);
}

/// `→ Step 1: Creating Repository instances`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: Repository instances created (2 items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// `   ├─ recipe_repository: ✓ Created`
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화가 끝난 뒤 컴포넌트 수 요약
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

/// HTTP 서버 바인딩 정보
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             🍲 RECIPE SHARE BACKEND              ║
/// ╚══════════════════════════════════════════════════╝
///    🌐 Listening: http://127.0.0.1:8080
///    👷 Workers: 4
///    🌱 Environment: development
/// ```
pub fn print_server_banner(bind_address: &str, workers: usize, environment: &str) {
    print_boxed_title("🍲 RECIPE SHARE BACKEND");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   👷 Workers: {}", workers);
    println!("   🌱 Environment: {}", environment);
    println!();
}
