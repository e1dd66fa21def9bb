//! Общие утилиты для тестирования

use std::sync::atomic::{AtomicU64, Ordering};

/// Включает логирование в тестах (вывод перехватывается тестовым раннером)
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

/// Генератор тестовых данных
pub struct TestDataGenerator {
    counter: AtomicU64,
}

impl TestDataGenerator {
    /// Создаёт новый генератор
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Генерирует уникальный ID
    pub fn next_id(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Генерирует тестовое имя таблицы
    pub fn table_name(&self) -> String {
        format!("test_table_{}", self.next_id())
    }

    /// Генерирует тестовое имя колонки
    pub fn column_name(&self) -> String {
        format!("test_column_{}", self.next_id())
    }

    /// Генерирует SELECT с заданным количеством колонок
    pub fn select_sql(&self, columns: usize) -> (String, Vec<String>, String) {
        let fields: Vec<String> = (0..columns).map(|_| self.column_name()).collect();
        let table = self.table_name();
        let sql = format!("SELECT {} FROM {}", fields.join(", "), table);
        (sql, fields, table)
    }
}

impl Default for TestDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}
