//! Абстрактное синтаксическое дерево SQL для RustSQL

use crate::common::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Разобранный SQL оператор
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// SELECT запрос
    Select(SelectStatement),
    /// INSERT операция
    Insert(InsertStatement),
}

/// Вид оператора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    Select,
    Insert,
}

/// SELECT запрос
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectStatement {
    /// Имена полей в порядке следования, может содержать `*`
    pub fields: Vec<String>,
    pub table_name: String,
}

/// INSERT операция.
///
/// Хранит только имя таблицы. Полей для значений (ни списка значений, ни
/// отображения колонок на значения) структура не содержит: список после
/// `VALUES` грамматикой не разбирается.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertStatement {
    pub table_name: String,
}

impl Statement {
    /// Возвращает вид оператора
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Select(_) => StatementKind::Select,
            Statement::Insert(_) => StatementKind::Insert,
        }
    }

    /// Возвращает имя таблицы
    pub fn table_name(&self) -> &str {
        match self {
            Statement::Select(select) => &select.table_name,
            Statement::Insert(insert) => &insert.table_name,
        }
    }

    /// Сериализует оператор в JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Восстанавливает оператор из JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select(select) => write!(f, "{}", select),
            Statement::Insert(insert) => write!(f, "{}", insert),
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::Select => write!(f, "SELECT"),
            StatementKind::Insert => write!(f, "INSERT"),
        }
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} FROM {}", self.fields.join(", "), self.table_name)
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INSERT INTO {} VALUES", self.table_name)
    }
}

impl From<SelectStatement> for Statement {
    fn from(select: SelectStatement) -> Self {
        Statement::Select(select)
    }
}

impl From<InsertStatement> for Statement {
    fn from(insert: InsertStatement) -> Self {
        Statement::Insert(insert)
    }
}
