//! Реестр арифметических операций.
//!
//! Фиксированный упорядоченный набор: `+`, `-`, `*`, `/`.
//! Порядок регистрации виден в списке операций.
//!
//! # Пример
//!
//! ```
//! use interactive_calculator::operation;
//!
//! let add = operation::find("+").unwrap();
//! assert_eq!(add.description, "addition");
//! assert_eq!(add.execute(3.0, 4.0), 7.0);
//! assert!(operation::find("%").is_none());
//! ```

use std::fmt::Display;
use std::io::{self, Write};

/// Именованная бинарная операция над `f64`.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Символ операции, уникальный в реестре.
    pub symbol: &'static str,
    /// Человекочитаемое описание.
    pub description: &'static str,
    /// Чистая функция двух аргументов.
    pub apply: fn(f64, f64) -> f64,
}

impl Operation {
    /// Точное, регистрозависимое сравнение с символом.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        self.symbol == token
    }

    /// Применить операцию к операндам.
    ///
    /// Деление на ноль не ошибка: результат `inf` или `NaN` по IEEE-754.
    #[must_use]
    pub fn execute(&self, left: f64, right: f64) -> f64 {
        (self.apply)(left, right)
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.description == other.description
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description, self.symbol)
    }
}

/// Все операции в порядке регистрации.
pub static OPERATIONS: [Operation; 4] = [
    Operation {
        symbol: "+",
        description: "addition",
        apply: |a, b| a + b,
    },
    Operation {
        symbol: "-",
        description: "subtraction",
        apply: |a, b| a - b,
    },
    Operation {
        symbol: "*",
        description: "multiplication",
        apply: |a, b| a * b,
    },
    Operation {
        symbol: "/",
        description: "division",
        apply: |a, b| a / b,
    },
];

/// Возвращает все операции в порядке регистрации.
#[must_use]
pub fn list() -> &'static [Operation] {
    &OPERATIONS
}

/// Ищет операцию по символу. Возвращает первое совпадение.
#[must_use]
pub fn find(token: &str) -> Option<&'static Operation> {
    list().iter().find(|op| op.matches(token))
}

/// Выводит заголовок и по строке на каждую операцию.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибке записи.
pub fn write_listing(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Available operations:")?;
    for op in list() {
        writeln!(out, "\t{op}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> String {
        let mut out = Vec::new();
        write_listing(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn list_keeps_registration_order() {
        let symbols: Vec<_> = list().iter().map(|op| op.symbol).collect();
        assert_eq!(symbols, ["+", "-", "*", "/"]);
    }

    #[test]
    fn find_every_registered_symbol() {
        for op in list() {
            assert_eq!(find(op.symbol), Some(op));
        }
    }

    #[test]
    fn find_is_exact() {
        assert!(find("").is_none());
        assert!(find(" +").is_none());
        assert!(find("++").is_none());
        assert!(find("add").is_none());
        assert!(find("x").is_none());
    }

    #[test]
    fn execute_arithmetic() {
        assert_eq!(find("+").unwrap().execute(3.0, 4.0), 7.0);
        assert_eq!(find("-").unwrap().execute(3.0, 4.0), -1.0);
        assert_eq!(find("*").unwrap().execute(3.0, 4.0), 12.0);
        assert_eq!(find("/").unwrap().execute(3.0, 4.0), 0.75);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let div = find("/").unwrap();
        assert_eq!(div.execute(1.0, 0.0), f64::INFINITY);
        assert_eq!(div.execute(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(div.execute(0.0, 0.0).is_nan());
    }

    #[test]
    fn listing_format() {
        assert_eq!(
            listing(),
            "Available operations:\n\
             \taddition (+)\n\
             \tsubtraction (-)\n\
             \tmultiplication (*)\n\
             \tdivision (/)\n"
        );
    }

    #[test]
    fn listing_is_stable() {
        assert_eq!(listing(), listing());
    }
}
