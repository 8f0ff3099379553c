/// Development-build console logging.
///
/// `log!` writes through `web_sys::console::log_1` when building in debug
/// mode (`cfg(debug_assertions)`) or with the `console_logging` feature
/// enabled, and compiles to nothing otherwise. Errors and warnings bypass
/// this and go to `web_sys::console::error_*` / `leptos::logging::warn!`
/// directly so they survive release builds.
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
    };
}

pub use log;
