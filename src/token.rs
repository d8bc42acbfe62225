//! Блокирующий токенизатор ввода.
//!
//! Токен: непрерывная последовательность непробельных символов.
//! Неразрывные пробелы (U+00A0, U+2007, U+202F) и U+0085 разделителями
//! не считаются, управляющие U+001C..U+001F считаются.
//! Источник читается построчно и только по мере необходимости,
//! поэтому интерактивный ввод не блокируется раньше времени.
//!
//! # Пример
//!
//! ```
//! use interactive_calculator::token::TokenReader;
//!
//! let tokens: Vec<String> = TokenReader::new("3 +\n\n  4".as_bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(tokens, ["3", "+", "4"]);
//! ```

use std::io::{self, BufRead};

/// Читает токены из произвольного [`BufRead`].
pub struct TokenReader<R> {
    source: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Создаёт токенизатор поверх источника.
    pub const fn new(source: R) -> Self {
        Self {
            source,
            line: String::new(),
            pos: 0,
        }
    }

    /// Возвращает следующий токен или `None`, если поток исчерпан.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`io::Error`] при ошибке чтения источника.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            self.skip_whitespace();

            if self.pos < self.line.len() {
                let token = self.advance_while(|c| !is_separator(c));
                return Ok(Some(token.to_owned()));
            }

            if !self.fill_line()? {
                return Ok(None);
            }
        }
    }

    /// Загружает следующую строку. `false` на конце потока.
    fn fill_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        self.pos = 0;
        Ok(self.source.read_line(&mut self.line)? > 0)
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &str {
        let rest = &self.line[self.pos..];
        let byte_len: usize = rest
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum();

        let start = self.pos;
        self.pos += byte_len;
        &self.line[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(is_separator);
    }
}

/// Пробельный ли символ с точки зрения разбиения на токены.
fn is_separator(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        _ => c.is_whitespace(),
    }
}

impl<R: BufRead> Iterator for TokenReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
