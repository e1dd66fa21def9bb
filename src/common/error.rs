//! Обработка ошибок для RustSQL

use crate::parser::token::Position;
use std::fmt;
use thiserror::Error;

/// Основной тип ошибки для RustSQL
#[derive(Error, Debug)]
pub enum Error {
    /// Синтаксическая ошибка: найден неожиданный токен
    #[error("found {found:?}, {expected}")]
    Syntax {
        found: String,
        expected: Expected,
        position: Position,
    },

    /// Нарушение протокола возврата токена (unscan)
    #[error("Pushback error: {message}")]
    Pushback { message: String },

    /// Входной текст превышает допустимый размер
    #[error("input of {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для RustSQL
pub type Result<T> = std::result::Result<T, Error>;

/// Что парсер ожидал увидеть на месте неожиданного токена
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Начало оператора
    Statement,
    Select,
    From,
    Insert,
    Into,
    Values,
    /// Имя поля или `*`
    Field,
    /// Имя таблицы в SELECT
    TableName,
    /// Имя таблицы в INSERT, где ключевое слово недопустимо
    NonKeywordTableName,
    /// Конец ввода (строгий режим)
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // CREATE здесь исторически, разбор CREATE не поддерживается
            Expected::Statement => "expected SELECT/INSERT/CREATE",
            Expected::Select => "expected SELECT",
            Expected::From => "expected FROM",
            Expected::Insert => "expected INSERT",
            Expected::Into => "expected INTO",
            Expected::Values => "expected VALUES",
            Expected::Field => "expected field",
            Expected::TableName => "expected table name",
            Expected::NonKeywordTableName => "table name cannot be a keyword",
            Expected::EndOfInput => "expected end of input",
        };
        write!(f, "{}", text)
    }
}

impl Error {
    /// Создает синтаксическую ошибку
    pub fn syntax(found: impl Into<String>, expected: Expected, position: Position) -> Self {
        Self::Syntax {
            found: found.into(),
            expected,
            position,
        }
    }

    /// Создает ошибку возврата токена
    pub fn pushback(message: impl Into<String>) -> Self {
        Self::Pushback {
            message: message.into(),
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Проверяет, является ли ошибка синтаксической
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }

    /// Возвращает ожидаемую категорию для синтаксической ошибки
    pub fn expected(&self) -> Option<Expected> {
        match self {
            Error::Syntax { expected, .. } => Some(*expected),
            _ => None,
        }
    }

    /// Возвращает литерал найденного токена для синтаксической ошибки
    pub fn found(&self) -> Option<&str> {
        match self {
            Error::Syntax { found, .. } => Some(found),
            _ => None,
        }
    }
}
