//! Лексический анализатор SQL для RustSQL
//!
//! Преобразует входной текст в последовательность токенов. Ошибок сканер не
//! возвращает: нераспознанные символы превращаются в токен `Illegal`, а
//! решение об ошибке принимает парсер.

use crate::common::{Error, Result};
use crate::parser::token::{lookup_keyword, Position, Token, TokenType};
use std::io::{self, Read};

/// Лексический анализатор SQL
pub struct Scanner {
    /// Исходный текст
    input: Vec<char>,
    /// Текущая позиция в тексте
    position: usize,
    /// Текущая позиция для отображения ошибок
    current_position: Position,
}

impl Scanner {
    /// Создает новый сканер
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            current_position: Position::start(),
        }
    }

    /// Создает сканер, прочитав источник целиком.
    ///
    /// При `limit = Some(n)` из источника читается не больше `n + 1` байт;
    /// более длинный ввод отклоняется с `Error::InputTooLarge`. При `None`
    /// источник читается без ограничения.
    pub fn from_reader<R: Read>(reader: R, limit: Option<usize>) -> Result<Self> {
        let input = read_source(reader, limit)?;
        Ok(Self::new(&input))
    }

    /// Возвращает следующий токен
    pub fn scan(&mut self) -> Token {
        let start_position = self.current_position.clone();

        let current_char = match self.peek() {
            Some(ch) => ch,
            None => return Token::new(TokenType::Eof, String::new(), start_position),
        };

        match current_char {
            ch if is_whitespace(ch) => self.read_whitespace(),
            ch if ch.is_ascii_alphabetic() => self.read_identifier_or_keyword(),
            '*' => self.read_single_char_token(TokenType::Asterisk),
            ',' => self.read_single_char_token(TokenType::Comma),
            _ => self.read_single_char_token(TokenType::Illegal),
        }
    }

    /// Возвращает все токены, включая завершающий `Eof`
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.scan();
            let is_eof = token.is(TokenType::Eof);
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        tokens
    }

    // === Вспомогательные методы ===

    fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;

        if ch == '\n' {
            self.current_position.line += 1;
            self.current_position.column = 1;
        } else {
            self.current_position.column += 1;
        }
        self.current_position.offset += 1;

        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Читает символы, пока выполняется условие
    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut value = String::new();
        while let Some(ch) = self.peek() {
            if !accept(ch) {
                break;
            }
            self.advance();
            value.push(ch);
        }
        value
    }

    fn read_whitespace(&mut self) -> Token {
        let start_position = self.current_position.clone();
        let value = self.read_while(is_whitespace);
        Token::new(TokenType::Whitespace, value, start_position)
    }

    /// Читает идентификатор или ключевое слово
    fn read_identifier_or_keyword(&mut self) -> Token {
        let start_position = self.current_position.clone();
        let value = self.read_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        let token_type = lookup_keyword(&value).unwrap_or(TokenType::Identifier);
        Token::new(token_type, value, start_position)
    }

    fn read_single_char_token(&mut self, token_type: TokenType) -> Token {
        let start_position = self.current_position.clone();
        let value = self.advance().map(String::from).unwrap_or_default();
        Token::new(token_type, value, start_position)
    }
}

/// Читает источник в строку, не буферизуя больше `limit + 1` байт.
///
/// Для отклоненного источника `size` равен числу прочитанных байт, то есть
/// `limit + 1`: остаток потока не читается.
pub(crate) fn read_source<R: Read>(mut reader: R, limit: Option<usize>) -> Result<String> {
    let mut bytes = Vec::new();

    match limit {
        Some(limit) => {
            let cap = (limit as u64).saturating_add(1);
            reader.by_ref().take(cap).read_to_end(&mut bytes)?;
            if bytes.len() > limit {
                return Err(Error::InputTooLarge {
                    size: bytes.len(),
                    limit,
                });
            }
        }
        None => {
            reader.read_to_end(&mut bytes)?;
        }
    }

    String::from_utf8(bytes)
        .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}
