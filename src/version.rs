use nom::{
    bytes::complete::{is_not, tag},
    character::complete::{char, digit1, space1},
    combinator::{all_consuming, map_res, opt},
    error::{ErrorKind, ParseError},
    sequence::{preceded, separated_pair, terminated},
    IResult,
};

use std::fmt;

/// Interpreter release as reported by the interpreter itself.
///
/// Ordering is lexicographic on `(major, minor)`, so `3.9 < 3.10 < 4.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parses the answer of an interpreter version query.
    ///
    /// Accepts the bare `3.10` form, full releases like `3.10.12` or
    /// `3.13.0rc1`, and the `Python 3.10.12` banner printed by `--version`.
    /// Surrounding whitespace is ignored.
    pub fn parse(output: &str) -> Option<Self> {
        all_consuming(version::<(&str, ErrorKind)>)(output.trim())
            .ok()
            .map(|(_, version)| version)
    }

    /// Returns whether this release is at least `minimum` (inclusive).
    pub fn satisfies(&self, minimum: Version) -> bool {
        *self >= minimum
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

fn number<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, u32, E> {
    map_res(digit1, |s: &str| s.parse::<u32>())(i)
}

fn banner<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    terminated(tag("Python"), space1)(i)
}

// Patch level and pre-release tags, e.g. `.12` or `.0rc1`.
fn release_suffix<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, &'a str, E> {
    preceded(char('.'), is_not(" \t\r\n"))(i)
}

fn version<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, Version, E> {
    let (i, _) = opt(banner)(i)?;
    let (i, (major, minor)) = separated_pair(number, char('.'), number)(i)?;
    let (i, _) = opt(release_suffix)(i)?;
    Ok((i, Version::new(major, minor)))
}
