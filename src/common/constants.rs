//! Константы для RustSQL

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Допустимые уровни логирования
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Префикс переменных окружения
pub const ENV_PREFIX: &str = "RUSTSQL_";
