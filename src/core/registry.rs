//! # Component Registry - 싱글톤 의존성 주입 시스템
//!
//! 리포지토리와 서비스를 싱글톤으로 관리하는 경량 DI 컨테이너입니다.
//! Spring의 ApplicationContext처럼 동작하며, 타입(`TypeId`)을 키로
//! 인스턴스를 보관합니다.
//!
//! ## 등록 방식
//!
//! | 종류 | 등록 방법 | 예시 |
//! |------|-----------|------|
//! | 인프라 | `ServiceLocator::set(Arc<T>)` | `Database`, `RedisClient`, `ImageHostClient` |
//! | 리포지토리 | `register_component!` 매크로 | `UserRepository`, `RecipeRepository` |
//! | 서비스 | `register_component!` 매크로 | `RecipeService`, `TokenService` |
//!
//! 매크로로 등록된 컴포넌트는 `inventory`를 통해 링크 타임에 수집되고,
//! 처음 조회될 때(또는 [`ServiceLocator::initialize_all`] 호출 시) 생성됩니다.
//!
//! ## 동작 순서
//!
//! ```text
//! main()
//!  ├─ ServiceLocator::set(database)          인프라 등록
//!  ├─ ServiceLocator::set(redis)
//!  ├─ ServiceLocator::set(image_host)
//!  └─ ServiceLocator::initialize_all()
//!      ├─ Step 1: 리포지토리 생성 + init() (인덱스 생성)
//!      └─ Step 2: 서비스 생성 + init()
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! pub struct RecipeService {
//!     recipe_repo: Arc<RecipeRepository>,
//! }
//!
//! register_component!(RecipeService, Service, "recipe_service", || RecipeService {
//!     recipe_repo: ServiceLocator::get::<RecipeRepository>(),
//! });
//!
//! let service = RecipeService::instance();
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use once_cell::sync::Lazy;

use crate::core::errors::{AppError, AppResult};
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 컨테이너가 관리하는 컴포넌트 공통 트레이트
///
/// `init`은 [`ServiceLocator::initialize_all`]에서 한 번 호출되며,
/// 리포지토리는 여기서 인덱스를 생성합니다.
#[async_trait]
pub trait Component: Send + Sync + 'static {
    fn name(&self) -> &str;

    async fn init(&self) -> AppResult<()> {
        Ok(())
    }
}

/// MongoDB 컬렉션을 다루는 컴포넌트
pub trait Repository: Component {
    fn collection_name(&self) -> &str;
}

/// 컴포넌트 종류 (초기화 순서 결정에 사용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Repository,
    Service,
}

type SharedInstance = Arc<dyn Any + Send + Sync>;

/// `inventory`로 수집되는 컴포넌트 등록 정보
pub struct ComponentRegistration {
    pub name: &'static str,
    pub kind: ComponentKind,
    pub type_id: fn() -> TypeId,
    pub constructor: fn() -> SharedInstance,
    pub init: for<'a> fn(&'a (dyn Any + Send + Sync)) -> BoxFuture<'a, AppResult<()>>,
}

inventory::collect!(ComponentRegistration);

/// 등록 정보에 넣을 `init` 함수를 타입별로 만들어 줍니다.
pub fn init_component<T: Component>(instance: &(dyn Any + Send + Sync)) -> BoxFuture<'_, AppResult<()>> {
    Box::pin(async move {
        match instance.downcast_ref::<T>() {
            Some(component) => component.init().await,
            None => Err(AppError::InternalError(format!(
                "Type mismatch while initializing {}",
                std::any::type_name::<T>()
            ))),
        }
    })
}

/// 컴포넌트를 컨테이너에 등록하고 `instance()` 접근자를 생성합니다.
#[macro_export]
macro_rules! register_component {
    ($ty:ty, $kind:ident, $name:literal, $ctor:expr) => {
        impl $ty {
            pub fn instance() -> std::sync::Arc<$ty> {
                $crate::core::registry::ServiceLocator::get::<$ty>()
            }
        }

        inventory::submit! {
            $crate::core::registry::ComponentRegistration {
                name: $name,
                kind: $crate::core::registry::ComponentKind::$kind,
                type_id: std::any::TypeId::of::<$ty>,
                constructor: || {
                    let build: fn() -> $ty = $ctor;
                    std::sync::Arc::new(build()) as std::sync::Arc<dyn std::any::Any + Send + Sync>
                },
                init: $crate::core::registry::init_component::<$ty>,
            }
        }
    };
}

static REGISTRATIONS: Lazy<HashMap<TypeId, &'static ComponentRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();
    for registration in inventory::iter::<ComponentRegistration>() {
        cache.insert((registration.type_id)(), registration);
    }

    print_cache_initialized("Component", cache.len());
    cache
});

/// 전역 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, SharedInstance>>,
    initializing: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 타입에 해당하는 싱글톤 인스턴스를 반환합니다.
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입이거나 순환 의존성이 있으면 패닉이 발생합니다.
    /// 모든 컴포넌트는 서버 시작 시 `initialize_all`에서 생성되므로
    /// 설정 오류는 기동 단계에서 드러납니다.
    pub fn get<T: Any + Send + Sync>() -> Arc<T> {
        match Self::try_get::<T>() {
            Ok(instance) => instance,
            Err(e) => panic!("{}", e),
        }
    }

    /// 패닉 대신 에러를 반환하는 [`get`](Self::get)
    pub fn try_get<T: Any + Send + Sync>() -> AppResult<Arc<T>> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = LOCATOR.lookup(type_id) {
            return Self::downcast::<T>(instance);
        }

        let registration = REGISTRATIONS.get(&type_id).ok_or_else(|| {
            AppError::InternalError(format!(
                "Component not found: {}. Register it with register_component! or ServiceLocator::set()",
                type_name
            ))
        })?;

        {
            let mut initializing = LOCATOR
                .initializing
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if !initializing.insert(type_id) {
                log::error!("❌ 순환 의존성 감지: {}", type_name);
                return Err(AppError::InternalError(format!(
                    "Circular dependency detected: {} is already being initialized",
                    type_name
                )));
            }
        }

        // 락을 잡지 않은 상태에서 생성해야 생성자가 의존성을 조회할 수 있다
        let built = std::panic::catch_unwind(registration.constructor);

        LOCATOR
            .initializing
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&type_id);

        let built = built.map_err(|_| {
            AppError::InternalError(format!("Failed to create instance for {}", type_name))
        })?;

        let instance = {
            let mut instances = LOCATOR
                .instances
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            instances.entry(type_id).or_insert(built).clone()
        };

        Self::downcast::<T>(instance)
    }

    /// 인프라 컴포넌트를 직접 등록합니다.
    pub fn set<T: Any + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", clean_name);

        LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), instance as SharedInstance);
    }

    /// 등록된 모든 리포지토리와 서비스를 생성하고 `init`을 실행합니다.
    pub async fn initialize_all() -> AppResult<()> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_count = Self::initialize_kind(1, ComponentKind::Repository, "Repository").await?;
        let service_count = Self::initialize_kind(2, ComponentKind::Service, "Service").await?;

        print_final_summary(repo_count, service_count);
        Ok(())
    }

    async fn initialize_kind(step: u8, kind: ComponentKind, label: &str) -> AppResult<usize> {
        let mut registrations: Vec<&'static ComponentRegistration> = REGISTRATIONS
            .values()
            .copied()
            .filter(|registration| registration.kind == kind)
            .collect();
        registrations.sort_by_key(|registration| registration.name);

        if registrations.is_empty() {
            return Ok(0);
        }

        print_step_start(step, &format!("Creating {} instances", label));

        for registration in &registrations {
            print_sub_task(registration.name, "Creating...");
            let instance = Self::resolve(registration)?;
            (registration.init)(instance.as_ref()).await?;
            print_sub_task(registration.name, "✓ Created");
        }

        print_step_complete(step, &format!("{} instances created", label), registrations.len());
        Ok(registrations.len())
    }

    fn resolve(registration: &'static ComponentRegistration) -> AppResult<SharedInstance> {
        let type_id = (registration.type_id)();
        if let Some(instance) = LOCATOR.lookup(type_id) {
            return Ok(instance);
        }

        let built = std::panic::catch_unwind(registration.constructor).map_err(|_| {
            AppError::InternalError(format!("Failed to create instance for {}", registration.name))
        })?;

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(instances.entry(type_id).or_insert(built).clone())
    }

    fn lookup(&self, type_id: TypeId) -> Option<SharedInstance> {
        self.instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    fn downcast<T: Any + Send + Sync>(instance: SharedInstance) -> AppResult<Arc<T>> {
        instance.downcast::<T>().map_err(|_| {
            AppError::InternalError(format!(
                "Type mismatch in ServiceLocator: {}",
                std::any::type_name::<T>()
            ))
        })
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Greeting(String);

    struct GreeterService {
        greeting: Arc<Greeting>,
    }

    impl GreeterService {
        fn greet(&self, name: &str) -> String {
            format!("{}, {}", self.greeting.0, name)
        }
    }

    static GREETER_INITS: AtomicUsize = AtomicUsize::new(0);

    #[async_trait]
    impl Component for GreeterService {
        fn name(&self) -> &str {
            "greeter_service"
        }

        async fn init(&self) -> AppResult<()> {
            GREETER_INITS.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    crate::register_component!(GreeterService, Service, "greeter_service", || GreeterService {
        greeting: ServiceLocator::get::<Greeting>(),
    });

    #[test]
    fn test_set_and_get_infrastructure() {
        struct Marker(u32);

        ServiceLocator::set(Arc::new(Marker(7)));
        let first = ServiceLocator::get::<Marker>();
        let second = ServiceLocator::get::<Marker>();

        assert_eq!(first.0, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_unregistered_type_returns_error() {
        struct Unknown;

        let result = ServiceLocator::try_get::<Unknown>();
        assert!(matches!(result, Err(AppError::InternalError(msg)) if msg.contains("Component not found")));
    }

    #[actix_web::test]
    async fn test_registered_component_resolves_dependencies() {
        ServiceLocator::set(Arc::new(Greeting("Hello".to_string())));

        let service = GreeterService::instance();
        assert_eq!(service.greet("chef"), "Hello, chef");
        assert!(Arc::ptr_eq(&service, &GreeterService::instance()));

        let registration = REGISTRATIONS
            .get(&TypeId::of::<GreeterService>())
            .expect("greeter registered");
        assert_eq!(registration.kind, ComponentKind::Service);

        let before = GREETER_INITS.load(Ordering::SeqCst);
        (registration.init)(service.as_ref()).await.unwrap();
        assert_eq!(GREETER_INITS.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("recipe_share_backend::db::Database"),
            "Database"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Database"), "Database");
    }
}
