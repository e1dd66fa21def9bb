//! Парсер SQL для RustSQL
//!
//! Рекурсивный спуск с одним токеном просмотра вперед и возможностью вернуть
//! последний прочитанный токен обратно (unscan).

use crate::common::{Error, Expected, ParserConfig, Result};
use crate::parser::ast::{InsertStatement, SelectStatement, Statement};
use crate::parser::scanner::{read_source, Scanner};
use crate::parser::token::{Token, TokenType};
use std::io::Read;

/// Рекурсивный парсер SQL
pub struct SqlParser {
    scanner: Scanner,
    /// Последний прочитанный токен, кандидат на возврат
    last_token: Option<Token>,
    /// Возвращенный токен; следующее чтение отдаст его
    pending_token: Option<Token>,
    config: ParserConfig,
}

impl SqlParser {
    /// Создает новый парсер SQL
    pub fn new(input: &str) -> Result<Self> {
        Self::with_config(input, ParserConfig::default())
    }

    /// Создает парсер с настройками
    pub fn with_config(input: &str, config: ParserConfig) -> Result<Self> {
        config.validate()?;

        if let Some(limit) = config.max_input_size {
            if input.len() > limit {
                return Err(Error::InputTooLarge {
                    size: input.len(),
                    limit,
                });
            }
        }

        Ok(Self {
            scanner: Scanner::new(input),
            last_token: None,
            pending_token: None,
            config,
        })
    }

    /// Создает парсер, прочитав источник целиком.
    /// Заданный `max_input_size` ограничивает и объем чтения из источника.
    pub fn from_reader<R: Read>(reader: R, config: ParserConfig) -> Result<Self> {
        config.validate()?;
        let input = read_source(reader, config.max_input_size)?;
        Self::with_config(&input, config)
    }

    /// Получает настройки парсера
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Парсит SQL оператор. Парсер используется один раз.
    pub fn parse(mut self) -> Result<Statement> {
        match self.parse_statement() {
            Ok(statement) => {
                log::debug!(
                    "Parsed {} statement on table '{}'",
                    statement.kind(),
                    statement.table_name()
                );
                Ok(statement)
            }
            Err(err) => {
                log::debug!("Rejected statement: {}", err);
                Err(err)
            }
        }
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        let token = self.scan_ignore_whitespace();

        let statement = match token.token_type {
            TokenType::Select => {
                self.unscan()?;
                Statement::Select(self.parse_select()?)
            }
            TokenType::Insert => {
                self.unscan()?;
                Statement::Insert(self.parse_insert()?)
            }
            _ => return Err(unexpected(token, Expected::Statement)),
        };

        if self.config.strict_termination {
            let token = self.scan_ignore_whitespace();
            if !token.is(TokenType::Eof) {
                return Err(unexpected(token, Expected::EndOfInput));
            }
        }

        Ok(statement)
    }

    /// Парсит `SELECT <поля> FROM <таблица>`
    pub fn parse_select(&mut self) -> Result<SelectStatement> {
        let mut statement = SelectStatement::default();

        self.expect(TokenType::Select, Expected::Select)?;

        // Поля через запятую; после запятой поле обязательно
        loop {
            let token = self.scan_ignore_whitespace();
            if !token.is(TokenType::Identifier) && !token.is(TokenType::Asterisk) {
                return Err(unexpected(token, Expected::Field));
            }
            statement.fields.push(token.value);

            if !self.scan_ignore_whitespace().is(TokenType::Comma) {
                self.unscan()?;
                break;
            }
        }

        self.expect(TokenType::From, Expected::From)?;
        statement.table_name = self.expect(TokenType::Identifier, Expected::TableName)?.value;

        Ok(statement)
    }

    /// Парсит `INSERT INTO <таблица> VALUES`; список значений не читается
    pub fn parse_insert(&mut self) -> Result<InsertStatement> {
        let mut statement = InsertStatement::default();

        self.expect(TokenType::Insert, Expected::Insert)?;
        self.expect(TokenType::Into, Expected::Into)?;
        statement.table_name = self
            .expect(TokenType::Identifier, Expected::NonKeywordTableName)?
            .value;
        self.expect(TokenType::Values, Expected::Values)?;

        Ok(statement)
    }
}

impl SqlParser {
    /// Читает следующий токен, отдавая возвращенный токен в первую очередь
    pub(crate) fn scan(&mut self) -> Token {
        let token = match self.pending_token.take() {
            Some(token) => token,
            None => {
                let token = self.scanner.scan();
                if self.config.trace_tokens {
                    log::trace!("Scanned {}", token);
                }
                token
            }
        };

        self.last_token = Some(token.clone());
        token
    }

    /// Читает следующий значимый токен.
    ///
    /// Пробелы сканер объединяет в один токен, поэтому пропускается не
    /// больше одного.
    pub(crate) fn scan_ignore_whitespace(&mut self) -> Token {
        let token = self.scan();
        if token.is(TokenType::Whitespace) {
            return self.scan();
        }
        token
    }

    /// Возвращает последний прочитанный токен обратно
    pub(crate) fn unscan(&mut self) -> Result<()> {
        if let Some(pending) = &self.pending_token {
            log::warn!("Unscan rejected, {} is still pending", pending);
            return Err(Error::pushback(format!(
                "slot already holds {:?}",
                pending.value
            )));
        }

        match self.last_token.take() {
            Some(token) => {
                self.pending_token = Some(token);
                Ok(())
            }
            None => Err(Error::pushback("no token to unscan")),
        }
    }

    /// Ожидает токен заданного типа
    fn expect(&mut self, token_type: TokenType, expected: Expected) -> Result<Token> {
        let token = self.scan_ignore_whitespace();
        if token.is(token_type) {
            Ok(token)
        } else {
            Err(unexpected(token, expected))
        }
    }
}

fn unexpected(token: Token, expected: Expected) -> Error {
    Error::syntax(token.value, expected, token.position)
}
