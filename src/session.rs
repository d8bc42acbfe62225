//! Интерактивная сессия калькулятора.
//!
//! Цикл: первый операнд, операция, второй операнд, результат,
//! вопрос о повторе. Ответ `no` (в любом регистре) завершает сессию.
//!
//! # Пример
//!
//! ```
//! use interactive_calculator::session::Session;
//!
//! let mut out = Vec::new();
//! Session::from_text("3\n+\n4\nno", &mut out).run().unwrap();
//!
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("The result is: 7.00"));
//! ```

use std::io::{BufRead, Write};
use std::num::ParseFloatError;

use thiserror::Error;
use tracing::{debug, info};

use crate::CalcError;
use crate::operation::{self, Operation};
use crate::token::TokenReader;

const FIRST_OPERAND_PROMPT: &str = "Please enter the first operand";
const OPERATION_PROMPT: &str = "Please enter the operation";
const SECOND_OPERAND_PROMPT: &str = "Please enter the second operand";
const AGAIN_PROMPT: &str = "Wanna make it again? (no): ";
const NUMERIC_HINT: &str = "Please enter numeric value!";
const STOP_ANSWER: &str = "no";

/// Токен не является числом.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("некорректное число '{token}'")]
pub struct InvalidNumberFormat {
    /// Исходный токен.
    pub token: String,
    /// Причина от разбора `f64`, если до него дошло.
    #[source]
    pub source: Option<ParseFloatError>,
}

/// Разбирает операнд.
///
/// Принимает десятичную и экспоненциальную запись со знаком,
/// необязательный суффикс `d`/`D`/`f`/`F`, а также ровно `Infinity`
/// и `NaN`. Прочие буквенные формы (`inf`, `nan`, `infinity`) отвергаются.
///
/// # Ошибки
///
/// Возвращает [`InvalidNumberFormat`], если токен не число.
pub fn parse_operand(token: &str) -> Result<f64, InvalidNumberFormat> {
    let invalid = |source| InvalidNumberFormat {
        token: token.to_owned(),
        source,
    };

    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let literal = if matches!(unsigned, "Infinity" | "NaN") {
        token
    } else {
        let body = token.strip_suffix(['d', 'D', 'f', 'F']).unwrap_or(token);
        let decimal = body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
        if !decimal {
            return Err(invalid(None));
        }
        body
    };

    literal.parse().map_err(|err| invalid(Some(err)))
}

/// Форматирует результат с двумя знаками после запятой.
///
/// Половинные значения округляются по точному двоичному значению
/// к чётному: `0.125` даёт `0.12`. Бесконечность выводится как
/// `Infinity`/`-Infinity`.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    format!("{value:.2}")
}

/// Ответ, завершающий сессию.
#[must_use]
pub fn is_stop_answer(token: &str) -> bool {
    token.eq_ignore_ascii_case(STOP_ANSWER)
}

/// Одна сессия: владеет вводом и выводом.
pub struct Session<R, W> {
    input: TokenReader<R>,
    output: W,
}

impl<'a, W: Write> Session<&'a [u8], W> {
    /// Сессия поверх строки в памяти.
    pub const fn from_text(input: &'a str, output: W) -> Self {
        Self::new(input.as_bytes(), output)
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Создаёт сессию из источника и приёмника.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
        }
    }

    /// Запускает основной цикл до ответа `no`.
    ///
    /// Сессия поглощается: ввод освобождается при любом выходе,
    /// в том числе при ошибке.
    ///
    /// # Ошибки
    ///
    /// [`CalcError::NoMoreInput`], если ввод закончился посреди цикла,
    /// [`CalcError::Io`] при ошибке ввода-вывода.
    pub fn run(mut self) -> Result<(), CalcError> {
        loop {
            let left = self.read_number(FIRST_OPERAND_PROMPT)?;
            let op = self.read_operation(OPERATION_PROMPT)?;
            let right = self.read_number(SECOND_OPERAND_PROMPT)?;

            let result = op.execute(left, right);
            debug!(left, symbol = op.symbol, right, result, "computed");
            write!(self.output, "The result is: {}\n\n", format_result(result))?;

            self.prompt(AGAIN_PROMPT)?;
            let answer = self.next_token()?;
            if is_stop_answer(&answer) {
                info!("session stopped by user");
                return Ok(());
            }
        }
    }

    /// Запрашивает число, повторяя запрос до корректного ввода.
    ///
    /// # Ошибки
    ///
    /// [`CalcError::NoMoreInput`], если токены закончились.
    pub fn read_number(&mut self, prompt: &str) -> Result<f64, CalcError> {
        loop {
            self.prompt(&format!("{prompt}: "))?;

            match parse_operand(&self.next_token()?) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(%err, "rejected operand");
                    writeln!(self.output, "{NUMERIC_HINT}")?;
                }
            }
        }
    }

    /// Запрашивает операцию. На неизвестный символ выводит список
    /// операций; сам запрос повторно не выводится.
    ///
    /// # Ошибки
    ///
    /// [`CalcError::NoMoreInput`], если токены закончились.
    pub fn read_operation(&mut self, prompt: &str) -> Result<&'static Operation, CalcError> {
        self.prompt(&format!("{prompt}: "))?;

        loop {
            let token = self.next_token()?;
            if let Some(op) = operation::find(&token) {
                return Ok(op);
            }

            debug!(%token, "unknown operation");
            operation::write_listing(&mut self.output)?;
            self.output.flush()?;
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), CalcError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<String, CalcError> {
        self.input.next_token()?.ok_or_else(|| {
            debug!("input exhausted");
            CalcError::NoMoreInput
        })
    }
}
