//! Small crate-wide convenience macros.

/// `format!`-style trace line on the browser console. Compiled out of
/// release builds and of native (test) builds, which have no console.
///
/// ```rust,ignore
/// debug_log!("dispatch {:?}", msg);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if cfg!(all(debug_assertions, target_arch = "wasm32")) {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    }};
}
