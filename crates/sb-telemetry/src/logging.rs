//! Structured logging helpers.
//!
//! Every module-related log line carries a `module` field so output can be
//! filtered per module regardless of the formatter in use.

/// Log with a `module` field at the given level.
#[macro_export]
macro_rules! log_event {
    // Info level with module
    (info, $module:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            module = $module,
            $($($field)*,)?
            $msg
        )
    };

    // Warn level with module
    (warn, $module:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            module = $module,
            $($($field)*,)?
            $msg
        )
    };

    // Error level with module
    (error, $module:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            module = $module,
            $($($field)*,)?
            $msg
        )
    };

    // Debug level with module
    (debug, $module:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            module = $module,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a bus message with standard fields.
#[macro_export]
macro_rules! log_module_event {
    ($level:ident, $module:expr, $msg:expr, $message_type:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            module = $module,
            message_type = %$message_type,
            $($($field)*,)?
            $msg
        )
    };
}
