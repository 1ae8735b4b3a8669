//! Line and token cursors for whitespace-delimited problem text.
//!
//! Every testcase and submission format is line oriented: each line carries
//! a fixed or declared number of numbers separated by whitespace. [`TextLines`]
//! walks a document line by line and hands out [`LineTokens`], which convert
//! individual tokens while remembering the line and column they came from so
//! that failures become precise [`ParseError`]s.
//!
//! # Examples
//!
//! ```
//! use judge_core::{Document, TextLines};
//!
//! # fn main() -> Result<(), judge_core::ParseError> {
//! let mut lines = TextLines::new(Document::Testcase, "3 10\n10 5\n");
//! let header = lines.next_line()?;
//! header.expect_count(2)?;
//! let count: usize = header.integer_at(0)?;
//! let capacity: u64 = header.integer_at(1)?;
//! assert_eq!((count, capacity), (3, 10));
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;

use crate::{Document, ParseError, ParseErrorReason};

/// Cursor over the lines of one input document.
#[derive(Debug, Clone)]
pub struct TextLines<'a> {
    document: Document,
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> TextLines<'a> {
    /// Start reading `text` as `document`.
    #[must_use]
    pub fn new(document: Document, text: &'a str) -> Self {
        Self {
            document,
            lines: text.lines(),
            line: 0,
        }
    }

    /// Document being read.
    #[must_use]
    pub const fn document(&self) -> Document {
        self.document
    }

    /// Return the next line, which the format requires to exist.
    ///
    /// # Errors
    /// Returns [`ParseErrorReason::MissingLine`] when the text is exhausted.
    pub fn next_line(&mut self) -> Result<LineTokens<'a>, ParseError> {
        let document = self.document;
        let missing = self.line.saturating_add(1);
        self.next()
            .ok_or_else(|| ParseError::new(document, missing, ParseErrorReason::MissingLine))
    }

    /// Return the next line, or an empty one when the text is exhausted.
    ///
    /// Used for trailing lists that may be left out altogether.
    pub fn next_line_or_blank(&mut self) -> LineTokens<'a> {
        let document = self.document;
        let line = self.line.saturating_add(1);
        self.next()
            .unwrap_or_else(|| LineTokens::new(document, line, ""))
    }
}

impl<'a> Iterator for TextLines<'a> {
    type Item = LineTokens<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.next()?;
        self.line = self.line.saturating_add(1);
        Some(LineTokens::new(self.document, self.line, text))
    }
}

/// Whitespace-separated tokens of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens<'a> {
    document: Document,
    line: usize,
    tokens: Vec<&'a str>,
}

impl<'a> LineTokens<'a> {
    /// Split `text`, which is line `line` of `document`.
    #[must_use]
    pub fn new(document: Document, line: usize, text: &'a str) -> Self {
        Self {
            document,
            line,
            tokens: text.split_whitespace().collect(),
        }
    }

    /// 1-based line number.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Number of tokens on the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Report whether the line is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Build a [`ParseError`] located on this line.
    #[must_use]
    pub const fn error(&self, reason: ParseErrorReason) -> ParseError {
        ParseError::new(self.document, self.line, reason)
    }

    /// Require exactly `expected` tokens.
    ///
    /// # Errors
    /// Returns [`ParseErrorReason::TokenCount`] on any other count.
    pub fn expect_count(&self, expected: usize) -> Result<(), ParseError> {
        if self.tokens.len() == expected {
            Ok(())
        } else {
            Err(self.error(ParseErrorReason::TokenCount {
                expected,
                found: self.tokens.len(),
            }))
        }
    }

    /// Parse the token at 0-based `index` as an integer type.
    ///
    /// # Errors
    /// Returns [`ParseErrorReason::TokenCount`] when the token is absent and
    /// [`ParseErrorReason::InvalidInteger`] when it does not parse.
    pub fn integer_at<T: FromStr>(&self, index: usize) -> Result<T, ParseError> {
        let token = self.token(index)?;
        token.parse().map_err(|_| {
            self.error(ParseErrorReason::InvalidInteger {
                column: index.saturating_add(1),
                token: token.to_owned(),
            })
        })
    }

    /// Parse the token at 0-based `index` as `f64`.
    ///
    /// # Errors
    /// Returns [`ParseErrorReason::TokenCount`] when the token is absent and
    /// [`ParseErrorReason::InvalidFloat`] when it does not parse.
    pub fn float_at(&self, index: usize) -> Result<f64, ParseError> {
        let token = self.token(index)?;
        token.parse().map_err(|_| {
            self.error(ParseErrorReason::InvalidFloat {
                column: index.saturating_add(1),
                token: token.to_owned(),
            })
        })
    }

    /// Parse the token at 0-based `index` as a finite, non-negative `f64`.
    ///
    /// # Errors
    /// As [`LineTokens::float_at`], plus [`ParseErrorReason::InvalidValue`]
    /// for negative, infinite or NaN values.
    pub fn non_negative_float_at(&self, index: usize) -> Result<f64, ParseError> {
        let value = self.float_at(index)?;
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(self.invalid_value(index, "a finite non-negative number"))
        }
    }

    /// Parse the token at 0-based `index` as a finite `f64`.
    ///
    /// # Errors
    /// As [`LineTokens::float_at`], plus [`ParseErrorReason::InvalidValue`]
    /// for infinite or NaN values.
    pub fn finite_float_at(&self, index: usize) -> Result<f64, ParseError> {
        let value = self.float_at(index)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.invalid_value(index, "a finite number"))
        }
    }

    /// Parse every token as an integer type.
    ///
    /// # Errors
    /// Returns the first [`ParseErrorReason::InvalidInteger`].
    pub fn integers<T: FromStr>(&self) -> Result<Vec<T>, ParseError> {
        (0..self.tokens.len())
            .map(|index| self.integer_at(index))
            .collect()
    }

    /// Parse every token as `f64`.
    ///
    /// # Errors
    /// Returns the first [`ParseErrorReason::InvalidFloat`].
    pub fn floats(&self) -> Result<Vec<f64>, ParseError> {
        (0..self.tokens.len())
            .map(|index| self.float_at(index))
            .collect()
    }

    /// Require exactly `expected` tokens and parse them as integers.
    ///
    /// # Errors
    /// See [`LineTokens::expect_count`] and [`LineTokens::integers`].
    pub fn exact_integers<T: FromStr>(&self, expected: usize) -> Result<Vec<T>, ParseError> {
        self.expect_count(expected)?;
        self.integers()
    }

    /// Require exactly `expected` tokens and parse them as finite,
    /// non-negative floats.
    ///
    /// # Errors
    /// See [`LineTokens::expect_count`] and
    /// [`LineTokens::non_negative_float_at`].
    pub fn exact_non_negative_floats(&self, expected: usize) -> Result<Vec<f64>, ParseError> {
        self.expect_count(expected)?;
        (0..expected)
            .map(|index| self.non_negative_float_at(index))
            .collect()
    }

    /// Build an [`ParseErrorReason::InvalidValue`] error for the token at
    /// 0-based `index`.
    #[must_use]
    pub fn invalid_value(&self, index: usize, expected: &'static str) -> ParseError {
        self.error(ParseErrorReason::InvalidValue {
            column: index.saturating_add(1),
            token: self.tokens.get(index).copied().unwrap_or_default().to_owned(),
            expected,
        })
    }

    fn token(&self, index: usize) -> Result<&'a str, ParseError> {
        self.tokens.get(index).copied().ok_or_else(|| {
            self.error(ParseErrorReason::TokenCount {
                expected: index.saturating_add(1),
                found: self.tokens.len(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn numbers_lines_from_one() {
        let mut lines = TextLines::new(Document::Testcase, "1\n2 3\n");
        let first = lines.next_line().expect("first line");
        let second = lines.next_line().expect("second line");
        assert_eq!((first.line(), second.line()), (1, 2));
        let err = lines.next_line().expect_err("no third line");
        assert_eq!(
            err,
            ParseError::new(Document::Testcase, 3, ParseErrorReason::MissingLine)
        );
    }

    #[rstest]
    fn exhausted_optional_lines_are_blank() {
        let mut lines = TextLines::new(Document::Submission, "30\n");
        lines.next_line().expect("header");
        let blank = lines.next_line_or_blank();
        assert!(blank.is_empty());
        assert_eq!(blank.line(), 2);
    }

    #[rstest]
    fn accepts_crlf_and_repeated_whitespace() {
        let mut lines = TextLines::new(Document::Submission, "  4\t 5 \r\n6\r\n");
        let first = lines.next_line().expect("first line");
        assert_eq!(first.exact_integers::<u32>(2).expect("two ints"), vec![4, 5]);
        let second = lines.next_line().expect("second line");
        assert_eq!(second.integers::<u32>().expect("one int"), vec![6]);
    }

    #[rstest]
    #[case("1 2 3", 2)]
    #[case("1", 2)]
    fn reports_wrong_token_counts(#[case] text: &str, #[case] expected: usize) {
        let tokens = LineTokens::new(Document::Testcase, 4, text);
        let err = tokens.expect_count(expected).expect_err("count mismatch");
        assert!(matches!(
            err.reason,
            ParseErrorReason::TokenCount { expected: e, .. } if e == expected
        ));
        assert_eq!(err.line, 4);
    }

    #[rstest]
    fn reports_offending_integer_column() {
        let tokens = LineTokens::new(Document::Submission, 2, "1 two 3");
        let err = tokens.integers::<i64>().expect_err("bad token");
        assert_eq!(
            err.reason,
            ParseErrorReason::InvalidInteger {
                column: 2,
                token: "two".into(),
            }
        );
    }

    #[rstest]
    fn negative_tokens_fail_unsigned_parsing() {
        let tokens = LineTokens::new(Document::Submission, 1, "-5");
        assert!(tokens.integer_at::<u64>(0).is_err());
        assert_eq!(tokens.integer_at::<i64>(0), Ok(-5));
    }

    #[rstest]
    #[case("-1.5", "a finite non-negative number")]
    #[case("inf", "a finite non-negative number")]
    #[case("NaN", "a finite non-negative number")]
    fn rejects_negative_or_non_finite_floats(#[case] text: &str, #[case] expected: &'static str) {
        let tokens = LineTokens::new(Document::Testcase, 1, text);
        let err = tokens.non_negative_float_at(0).expect_err("rejected");
        assert_eq!(
            err.reason,
            ParseErrorReason::InvalidValue {
                column: 1,
                token: text.to_owned(),
                expected,
            }
        );
    }

    #[rstest]
    fn parses_float_forms() {
        let tokens = LineTokens::new(Document::Testcase, 1, "0 -3.5 1e3");
        assert_eq!(tokens.floats().expect("floats"), vec![0.0, -3.5, 1000.0]);
        assert_eq!(tokens.finite_float_at(1), Ok(-3.5));
    }

    #[rstest]
    fn missing_token_is_a_count_error() {
        let tokens = LineTokens::new(Document::Testcase, 1, "7");
        let err = tokens.float_at(1).expect_err("no second token");
        assert_eq!(
            err.reason,
            ParseErrorReason::TokenCount {
                expected: 2,
                found: 1,
            }
        );
    }
}
