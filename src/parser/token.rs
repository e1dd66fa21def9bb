//! Токены для SQL сканера RustSQL
//!
//! Определяет типы токенов, которые распознает сканер, и таблицу
//! зарезервированных слов.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Токен с позицией и значением
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    /// Литерал в исходном написании
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn new(token_type: TokenType, value: String, position: Position) -> Self {
        Self {
            token_type,
            value,
            position,
        }
    }

    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) at {}", self.token_type, self.value, self.position)
    }
}

/// Типы токенов SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // === Ключевые слова ===
    Select,
    From,
    Insert,
    Into,
    Values,

    /// Идентификатор (имя таблицы или колонки)
    Identifier,

    // === Символы ===
    Asterisk, // *
    Comma,    // ,

    // === Специальные токены ===
    /// Непрерывная последовательность пробельных символов
    Whitespace,

    /// Конец ввода
    Eof,

    /// Нераспознанный символ
    Illegal,
}

impl TokenType {
    /// Проверяет, является ли токен ключевым словом
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::Select
                | TokenType::From
                | TokenType::Insert
                | TokenType::Into
                | TokenType::Values
        )
    }

    /// Проверяет, следует ли пропустить токен при парсинге
    pub fn should_skip(&self) -> bool {
        *self == TokenType::Whitespace
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Select => "SELECT",
            TokenType::From => "FROM",
            TokenType::Insert => "INSERT",
            TokenType::Into => "INTO",
            TokenType::Values => "VALUES",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::Asterisk => "*",
            TokenType::Comma => ",",
            TokenType::Whitespace => "WHITESPACE",
            TokenType::Eof => "EOF",
            TokenType::Illegal => "ILLEGAL",
        };
        write!(f, "{}", name)
    }
}

lazy_static! {
    /// Зарезервированные слова в верхнем регистре
    static ref KEYWORDS: HashMap<&'static str, TokenType> = {
        let mut map = HashMap::new();
        map.insert("SELECT", TokenType::Select);
        map.insert("FROM", TokenType::From);
        map.insert("INSERT", TokenType::Insert);
        map.insert("INTO", TokenType::Into);
        map.insert("VALUES", TokenType::Values);
        map
    };
}

/// Ищет ключевое слово без учета регистра
pub fn lookup_keyword(word: &str) -> Option<TokenType> {
    KEYWORDS.get(word.to_ascii_uppercase().as_str()).copied()
}
