//! Парсер SQL для RustSQL

pub mod ast;
pub mod parser;
pub mod scanner;
pub mod token;


// Переэкспортируем основные типы
pub use ast::*;
pub use parser::SqlParser;
pub use scanner::Scanner;
pub use token::{Position, Token, TokenType};
