//! # interactive_calculator
//!
//! Интерактивный консольный калькулятор двух операндов.
//!
//! Поддерживает:
//! - Операнды `f64`, включая экспоненциальную запись
//! - Операции: `+`, `-`, `*`, `/`
//! - Повтор расчёта до ответа `no`
//!
//! # Пример использования
//!
//! ```
//! use interactive_calculator::{CalcError, session::Session};
//!
//! let mut out = Vec::new();
//! Session::from_text("1 / 4 no", &mut out).run().unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("The result is: 0.25"));
//!
//! let err = Session::from_text("1 /", Vec::new()).run().unwrap_err();
//! assert!(matches!(err, CalcError::NoMoreInput));
//! ```

pub mod operation;
pub mod session;
pub mod token;

use std::io;

use session::Session;

/// Общий тип ошибки калькулятора.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Ввод закончился, а очередной токен ещё нужен.
    #[error("ввод исчерпан")]
    NoMoreInput,

    /// Ошибка чтения ввода или записи вывода.
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),
}

/// Запускает калькулятор на stdin/stdout.
///
/// # Ошибки
///
/// Возвращает [`CalcError`], если ввод закончился до ответа `no`
/// или произошла ошибка ввода-вывода.
pub fn run() -> Result<(), CalcError> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    Session::new(stdin.lock(), stdout.lock()).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let err: CalcError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, CalcError::Io(_)));
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn no_more_input_message() {
        assert_eq!(CalcError::NoMoreInput.to_string(), "ввод исчерпан");
    }
}
