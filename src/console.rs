//! Browser console logging.
//!
//! On wasm32 the macros forward to `console.log` / `console.warn` /
//! `console.debug`. Native builds (tests, tooling) drop the messages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Log,
    Warn,
}

#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, message: &str) {
    let value = wasm_bindgen::JsValue::from_str(message);
    match level {
        Level::Debug => web_sys::console::debug_1(&value),
        Level::Log => web_sys::console::log_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit(_level: Level, _message: &str) {}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::console::emit($crate::console::Level::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::console::emit($crate::console::Level::Log, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console::emit($crate::console::Level::Warn, &format!($($arg)*))
    };
}
