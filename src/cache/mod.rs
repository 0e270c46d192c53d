//! 缓存层
//!
//! 提供可插拔的对象缓存后端（Moka 内存缓存 / Redis），
//! 后端通过 `declare_object_cache_plugin!` 宏在启动时注册。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个对象缓存插件
///
/// 在模块顶部调用，进程启动时通过 ctor 自动注册构造函数：
/// ```rust,ignore
/// declare_object_cache_plugin!("moka", MokaCacheWrapper);
/// ```
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $plugin:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $plugin:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let cache = $plugin::new().map_err(
                                $crate::errors::SchoolAdminError::cache_connection,
                            )?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
