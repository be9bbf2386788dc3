//! Plain-text point sets and face lists.
//!
//! # Formats
//!
//! A *point batch* starts with the number of point sets `M` on its own line.
//! Each set follows as a line holding its size `N` and then `N` lines of
//! `x y z`. A *site list* is one `x y` pair per line until the end of the
//! input. Blank lines are ignored everywhere.
//!
//! Faces are written as a count line followed by one `3 a b c` line per face.
//!
//! # Example
//!
//! ```
//! use kinetic_hull::io::{parse_point_sets, format_faces};
//! use kinetic_hull::hull::convex_hull_3d;
//!
//! let input = "1\n4\n0 0 0\n1 0.2 0.1\n0.3 1.1 0.2\n0.4 0.3 1.3\n";
//! let sets = parse_point_sets::<f64>(input).unwrap();
//!
//! let faces = convex_hull_3d(&sets[0]);
//! assert_eq!(format_faces(&faces), "4\n3 0 1 3\n3 0 2 1\n3 0 3 2\n3 1 2 3\n");
//! ```

use crate::error::HullError;
use crate::hull::Face;
use crate::primitives::{Point2, Point3};
use num_traits::Float;
use std::fmt::Write as _;
use std::io::{self, Read, Write};
use std::str::FromStr;

/// Upper bound on capacity reserved from a count read off the input.
const MAX_RESERVE: usize = 4096;

/// Non-blank lines with their 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.lines().enumerate(),
        }
    }

    /// Next non-blank line, split into tokens.
    fn next_record(&mut self) -> Option<(usize, Vec<&'a str>)> {
        self.inner.find_map(|(i, line)| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            (!tokens.is_empty()).then_some((i + 1, tokens))
        })
    }

    /// Reads a line holding exactly `N` values.
    fn values<T: FromStr, const N: usize>(&mut self, remaining: usize) -> Result<[T; N], HullError> {
        let (line, tokens) = self
            .next_record()
            .ok_or(HullError::UnexpectedEnd { expected: remaining })?;

        if tokens.len() < N {
            return Err(HullError::MissingValue {
                line,
                expected: N,
                found: tokens.len(),
            });
        }
        if tokens.len() > N {
            return Err(HullError::TrailingInput { line });
        }

        let mut parsed = Vec::with_capacity(N);
        for token in tokens {
            parsed.push(parse_token(token, line)?);
        }
        parsed
            .try_into()
            .map_err(|_| HullError::MissingValue { line, expected: N, found: 0 })
    }

    /// Fails if any non-blank line is left.
    fn finish(mut self) -> Result<(), HullError> {
        match self.next_record() {
            Some((line, _)) => Err(HullError::TrailingInput { line }),
            None => Ok(()),
        }
    }
}

fn parse_token<T: FromStr>(token: &str, line: usize) -> Result<T, HullError> {
    token.parse().map_err(|_| HullError::InvalidNumber {
        token: token.to_string(),
        line,
    })
}

/// Parses a batch of 3D point sets.
///
/// # Example
///
/// ```
/// use kinetic_hull::io::parse_point_sets;
///
/// let sets = parse_point_sets::<f64>("2\n1\n0 0 0\n\n2\n1 2 3\n4 5 6\n").unwrap();
/// assert_eq!(sets.len(), 2);
/// assert_eq!(sets[1][1].z, 6.0);
/// ```
pub fn parse_point_sets<F: Float + FromStr>(input: &str) -> Result<Vec<Vec<Point3<F>>>, HullError> {
    let mut lines = Lines::new(input);
    let [count] = lines.values::<usize, 1>(1)?;

    let mut sets = Vec::with_capacity(count.min(MAX_RESERVE));
    for set in 0..count {
        let [size] = lines.values::<usize, 1>(count - set)?;

        let mut points = Vec::with_capacity(size.min(MAX_RESERVE));
        for i in 0..size {
            let [x, y, z] = lines.values::<F, 3>(size - i)?;
            points.push(Point3::new(x, y, z));
        }
        sets.push(points);
    }

    lines.finish()?;
    Ok(sets)
}

/// Parses 2D sites, one `x y` pair per line.
///
/// # Example
///
/// ```
/// use kinetic_hull::io::parse_sites;
///
/// let sites = parse_sites::<f64>("0 0\n1 0.5\n\n2 -1\n").unwrap();
/// assert_eq!(sites.len(), 3);
/// assert_eq!(sites[2].y, -1.0);
/// ```
pub fn parse_sites<F: Float + FromStr>(input: &str) -> Result<Vec<Point2<F>>, HullError> {
    let mut lines = Lines::new(input);
    let mut sites = Vec::new();

    while let Some((line, tokens)) = lines.next_record() {
        match tokens.as_slice() {
            [x, y] => sites.push(Point2::new(parse_token(x, line)?, parse_token(y, line)?)),
            [_] => {
                return Err(HullError::MissingValue {
                    line,
                    expected: 2,
                    found: 1,
                })
            }
            _ => return Err(HullError::TrailingInput { line }),
        }
    }

    Ok(sites)
}

/// Reads all of `reader` and parses it with [`parse_point_sets`].
pub fn read_point_sets<F: Float + FromStr, R: Read>(
    mut reader: R,
) -> Result<Vec<Vec<Point3<F>>>, HullError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_point_sets(&input)
}

/// Reads all of `reader` and parses it with [`parse_sites`].
pub fn read_sites<F: Float + FromStr, R: Read>(mut reader: R) -> Result<Vec<Point2<F>>, HullError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_sites(&input)
}

/// Renders faces as a count line followed by one `3 a b c` line each.
pub fn format_faces(faces: &[Face]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", faces.len());
    for face in faces {
        let _ = writeln!(out, "{face}");
    }
    out
}

/// Writes [`format_faces`] output to `writer`.
pub fn write_faces<W: Write>(mut writer: W, faces: &[Face]) -> io::Result<()> {
    writeln!(writer, "{}", faces.len())?;
    for face in faces {
        writeln!(writer, "{face}")?;
    }
    Ok(())
}

/// Formats `value` with at most `digits` significant digits, dropping
/// trailing zeros, in the style of C's `%g`.
///
/// # Example
///
/// ```
/// use kinetic_hull::io::format_significant;
///
/// assert_eq!(format_significant(14.0 / 3.0, 7), "4.666667");
/// assert_eq!(format_significant(3.0, 7), "3");
/// assert_eq!(format_significant(0.0, 7), "0");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
