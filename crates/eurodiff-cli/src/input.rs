//! Reader for the case text format.
//!
//! Input is a sequence of cases. Each case is a line holding the country
//! count `n`, then `n` lines of `name xl yl xh yh`. A count of `0`, or
//! end of input where a count is expected, ends the sequence. Blank lines
//! between records are skipped.

use std::io::{self, BufRead, Lines};

use eurodiff_core::{CountryDescriptor, MAX_COUNTRIES};
use thiserror::Error;

/// Errors that stop reading.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("line {line}: read failed")]
    Io {
        /// Line being read.
        line: usize,
        /// The I/O error.
        #[source]
        source: io::Error,
    },
    /// The count line is not a non-negative integer.
    #[error("line {line}: expected a country count, got '{text}'")]
    BadCount {
        /// Offending line.
        line: usize,
        /// Its contents.
        text: String,
    },
    /// The count exceeds the supported number of countries.
    #[error("line {line}: {count} countries requested (max {max})")]
    TooManyCountries {
        /// Offending line.
        line: usize,
        /// Requested count.
        count: usize,
        /// The limit.
        max: usize,
    },
    /// Input ended in the middle of a case.
    #[error("line {line}: input ended after {got} of {expected} countries")]
    UnexpectedEof {
        /// Last line read.
        line: usize,
        /// Countries announced by the count line.
        expected: usize,
        /// Countries read before input ended.
        got: usize,
    },
    /// A country line does not have the `name xl yl xh yh` shape.
    #[error("line {line}: expected 'name xl yl xh yh', got '{text}'")]
    MalformedCountry {
        /// Offending line.
        line: usize,
        /// Its contents.
        text: String,
    },
    /// A coordinate field is not an integer.
    #[error("line {line}: '{field}' is not an integer coordinate")]
    BadCoordinate {
        /// Offending line.
        line: usize,
        /// The field that failed to parse.
        field: String,
    },
}

/// Iterator over the cases of a text input.
///
/// Yields one descriptor list per case. After the terminating `0`, end
/// of input or the first error, it yields nothing more.
///
/// # Examples
///
/// ```
/// use eurodiff_cli::input::CaseReader;
///
/// let text = "1\nLuxembourg 1 1 1 1\n0\n";
/// let cases: Vec<_> = CaseReader::new(text.as_bytes()).collect::<Result<_, _>>().unwrap();
/// assert_eq!(cases.len(), 1);
/// assert_eq!(cases[0][0].name, "Luxembourg");
/// ```
pub struct CaseReader<R> {
    lines: Lines<R>,
    line: usize,
    finished: bool,
}

impl<R: BufRead> CaseReader<R> {
    /// Read cases from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            finished: false,
        }
    }

    /// Next non-blank line, trimmed, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        for next in self.lines.by_ref() {
            self.line += 1;
            let text = next.map_err(|source| ParseError::Io {
                line: self.line,
                source,
            })?;
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
        Ok(None)
    }

    fn read_case(&mut self) -> Result<Option<Vec<CountryDescriptor>>, ParseError> {
        let Some(text) = self.next_line()? else {
            return Ok(None);
        };
        let count: usize = text.parse().map_err(|_| ParseError::BadCount {
            line: self.line,
            text: text.clone(),
        })?;
        if count == 0 {
            return Ok(None);
        }
        if count > MAX_COUNTRIES {
            return Err(ParseError::TooManyCountries {
                line: self.line,
                count,
                max: MAX_COUNTRIES,
            });
        }

        let mut case = Vec::with_capacity(count);
        while case.len() < count {
            let Some(text) = self.next_line()? else {
                return Err(ParseError::UnexpectedEof {
                    line: self.line,
                    expected: count,
                    got: case.len(),
                });
            };
            case.push(parse_country(&text, self.line)?);
        }
        Ok(Some(case))
    }
}

impl<R: BufRead> Iterator for CaseReader<R> {
    type Item = Result<Vec<CountryDescriptor>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_case() {
            Ok(Some(case)) => Some(Ok(case)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Parse one `name xl yl xh yh` line.
pub fn parse_country(text: &str, line: usize) -> Result<CountryDescriptor, ParseError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [name, xl, yl, xh, yh] = fields[..] else {
        return Err(ParseError::MalformedCountry {
            line,
            text: text.to_string(),
        });
    };
    let coord = |field: &str| {
        field.parse::<i32>().map_err(|_| ParseError::BadCoordinate {
            line,
            field: field.to_string(),
        })
    };
    Ok(CountryDescriptor::new(
        name,
        coord(xl)?,
        coord(yl)?,
        coord(xh)?,
        coord(yh)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(text: &str) -> Vec<Result<Vec<CountryDescriptor>, ParseError>> {
        CaseReader::new(text.as_bytes()).collect()
    }

    #[test]
    fn reads_cases_until_zero() {
        let cases = read_all("2\nA 0 0 0 0\nB 1 0 1 0\n1\nC 5 5 6 6\n0\n1\nIgnored 0 0 0 0\n");
        assert_eq!(cases.len(), 2);
        let first = cases[0].as_ref().unwrap();
        assert_eq!(first[1], CountryDescriptor::new("B", 1, 0, 1, 0));
        assert_eq!(cases[1].as_ref().unwrap()[0].name, "C");
    }

    #[test]
    fn end_of_input_ends_cases() {
        let cases = read_all("1\nA 0 0 0 0\n");
        assert_eq!(cases.len(), 1);
        assert!(read_all("").is_empty());
    }

    #[test]
    fn blank_lines_and_extra_spacing_tolerated() {
        let cases = read_all("\n1\n\n  Spain   3 1  6 3 \n\n0\n");
        assert_eq!(
            cases[0].as_ref().unwrap()[0],
            CountryDescriptor::new("Spain", 3, 1, 6, 3)
        );
    }

    #[test]
    fn count_above_limit_stops_reading() {
        let cases = read_all("21\n");
        assert_eq!(cases.len(), 1);
        assert!(matches!(
            cases[0],
            Err(ParseError::TooManyCountries { line: 1, count: 21, max: 20 })
        ));
    }

    #[test]
    fn non_numeric_count_rejected() {
        let cases = read_all("three\n");
        assert!(matches!(&cases[0], Err(ParseError::BadCount { text, .. }) if text == "three"));
    }

    #[test]
    fn negative_count_rejected() {
        assert!(matches!(read_all("-1\n")[0], Err(ParseError::BadCount { .. })));
    }

    #[test]
    fn truncated_case_reported() {
        let cases = read_all("3\nA 0 0 0 0\n");
        assert!(matches!(
            cases[0],
            Err(ParseError::UnexpectedEof { expected: 3, got: 1, .. })
        ));
    }

    #[test]
    fn error_fuses_reader() {
        let cases = read_all("1\nA 0 0\n1\nB 0 0 0 0\n");
        assert_eq!(cases.len(), 1);
        assert!(matches!(cases[0], Err(ParseError::MalformedCountry { line: 2, .. })));
    }

    #[test]
    fn country_line_shapes() {
        assert!(matches!(
            parse_country("A 0 0 0", 4),
            Err(ParseError::MalformedCountry { line: 4, .. })
        ));
        assert!(matches!(
            parse_country("A 0 0 0 0 0", 4),
            Err(ParseError::MalformedCountry { .. })
        ));
        assert!(matches!(
            parse_country("A 0 x 0 0", 4),
            Err(ParseError::BadCoordinate { field, .. }) if field == "x"
        ));
        // Range checks belong to country construction, not parsing.
        assert_eq!(
            parse_country("Far 20 20 30 30", 1).unwrap(),
            CountryDescriptor::new("Far", 20, 20, 30, 30)
        );
    }
}
