//! Инициализация логирования для RustSQL

use crate::common::ParserConfig;

/// Устанавливает `env_logger` с уровнем из конфигурации.
///
/// Переменная `RUST_LOG`, если задана, имеет приоритет. Возвращает `false`,
/// если логгер уже был установлен ранее.
pub fn init_logging(config: &ParserConfig) -> bool {
    let env = env_logger::Env::default().default_filter_or(config.log_level.to_lowercase());
    env_logger::Builder::from_env(env).try_init().is_ok()
}
