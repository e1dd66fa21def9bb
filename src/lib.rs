//! rustsql - сканер и парсер минимального диалекта SQL
//!
//! Поддерживаются два вида операторов: `SELECT <поля> FROM <таблица>` и
//! начало `INSERT INTO <таблица> VALUES`. Выполнение запросов и хранение
//! данных лежат за пределами этой библиотеки.

pub mod common;
pub mod parser;

pub use common::error::{Error, Expected, Result};
pub use common::ParserConfig;
pub use parser::{InsertStatement, SelectStatement, SqlParser, Statement, StatementKind};

use std::io::Read;

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Разбирает один SQL оператор с настройками по умолчанию
pub fn parse_sql(sql: &str) -> Result<Statement> {
    SqlParser::new(sql)?.parse()
}

/// Разбирает один SQL оператор с заданными настройками
pub fn parse_sql_with_config(sql: &str, config: ParserConfig) -> Result<Statement> {
    SqlParser::with_config(sql, config)?.parse()
}

/// Разбирает один SQL оператор, прочитанный из источника
pub fn parse_reader<R: Read>(reader: R) -> Result<Statement> {
    SqlParser::from_reader(reader, ParserConfig::default())?.parse()
}
