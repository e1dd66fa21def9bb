//! Конфигурация для RustSQL
//!
//! Настройки парсера загружаются из TOML файла или переменных окружения

use crate::common::constants::{DEFAULT_LOG_LEVEL, ENV_PREFIX, LOG_LEVELS};
use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Конфигурация парсера
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Максимальный размер входного текста в байтах.
    /// `None` снимает ограничение; так настроено по умолчанию.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_input_size: Option<usize>,
    /// После оператора допускаются только пробельные символы
    pub strict_termination: bool,
    /// Логировать каждый прочитанный токен
    pub trace_tokens: bool,
    /// Уровень логирования
    pub log_level: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_size: None,
            strict_termination: false,
            trace_tokens: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ParserConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Разбирает конфигурацию из TOML строки
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let mut config = ParserConfig::default();

        if let Some(size) = env_var("MAX_INPUT_SIZE") {
            let size = size.parse().map_err(|e| {
                Error::configuration(format!("invalid {}MAX_INPUT_SIZE: {}", ENV_PREFIX, e))
            })?;
            config.max_input_size = Some(size);
        }

        if let Some(strict) = env_var("STRICT_TERMINATION") {
            config.strict_termination = parse_flag("STRICT_TERMINATION", &strict)?;
        }

        if let Some(trace) = env_var("TRACE_TOKENS") {
            config.trace_tokens = parse_flag("TRACE_TOKENS", &trace)?;
        }

        if let Some(level) = env_var("LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_input_size.is_some() {
            self.max_input_size = other.max_input_size;
        }
        if other.strict_termination {
            self.strict_termination = true;
        }
        if other.trace_tokens {
            self.trace_tokens = true;
        }
        if other.log_level != DEFAULT_LOG_LEVEL {
            self.log_level = other.log_level;
        }
        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.max_input_size == Some(0) {
            return Err(Error::configuration(
                "max_input_size must be greater than 0",
            ));
        }

        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }

        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(format!("{}{}", ENV_PREFIX, name)).ok()
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::configuration(format!(
            "invalid {}{}: '{}'",
            ENV_PREFIX, name, value
        ))),
    }
}
