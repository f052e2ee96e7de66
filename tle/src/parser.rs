//! A strict fixed-column parser for the standard two-line element set format

use crate::TLE_LINE_LEN;
use chrono::prelude::*;
use nom::{
    bytes::complete::{tag, take},
    character::complete::{line_ending, not_line_ending, one_of},
    combinator::{opt, verify},
    error::ErrorKind,
    multi::fold_many0,
    Err::Error,
};
use orbital_types::prelude::*;
use tracing::debug;

pub type Result<I, O, E = ParseError> = std::result::Result<(I, O), nom::Err<E>>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Line {line} is {len} characters, expected {TLE_LINE_LEN}")]
    LineLength { line: u8, len: usize },
    #[error("Line {line} carries the wrong line number")]
    LineNumber { line: u8 },
    #[error("Line {line} checksum mismatch: computed {computed}, stored '{stored}'")]
    Checksum { line: u8, computed: u8, stored: char },
    #[error("Catalog numbers disagree between lines: {line1} vs {line2}")]
    CatalogMismatch { line1: u32, line2: u32 },
    #[error("Invalid epoch field")]
    Epoch,
    #[error("Non-numeric field {0:?}")]
    Field(String),
    #[error("Element invariant violated: {0}")]
    Element(&'static str),
    #[error("Parse error")]
    Nom(String, ErrorKind),
}

/// Parse and validate a complete element set from its two text lines.
///
/// Both lines must be exactly [`TLE_LINE_LEN`] columns, carry their line
/// number in column 1 and a valid modulo-10 checksum in column 69, and agree
/// on the catalog number. Numeric fields follow the fixed-column semantics of
/// the format: implied leading `0.` on the eccentricity and implied-decimal
/// exponent notation (`±ddddd±d`) on the second derivative and B* fields.
pub fn parse_element_set(
    line1: &str,
    line2: &str,
) -> std::result::Result<OrbitalElementSet, ParseError> {
    checked_line(1, line1)?;
    checked_line(2, line2)?;

    let (_, l1) = line1_fields(line1).map_err(into_parse_error)?;
    let (_, l2) = line2_fields(line2).map_err(into_parse_error)?;

    if l1.catalog_number != l2.catalog_number {
        return Err(ParseError::CatalogMismatch {
            line1: l1.catalog_number,
            line2: l2.catalog_number,
        });
    }
    if !(0.0..=180.0).contains(&l2.inclination) {
        return Err(ParseError::Element("inclination outside [0, 180] degrees"));
    }
    if l2.mean_motion <= 0.0 {
        return Err(ParseError::Element("mean motion must be positive"));
    }

    Ok(OrbitalElementSet {
        catalog_number: l1.catalog_number,
        classification: l1.classification,
        epoch: l1.epoch,
        mean_motion_dot: l1.mean_motion_dot,
        mean_motion_ddot: l1.mean_motion_ddot,
        bstar: l1.bstar,
        element_set_number: l1.element_set_number,
        inclination: l2.inclination,
        raan: l2.raan,
        eccentricity: l2.eccentricity,
        argument_of_perigee: l2.argument_of_perigee,
        mean_anomaly: l2.mean_anomaly,
        mean_motion: l2.mean_motion,
        revolution_number: l2.revolution_number,
    })
}

/// Split a name + line1 + line2 catalog feed into unstructured TLEs.
///
/// Entries keep their raw text; feed them to [`parse_element_set`] for
/// structured elements. A trailing fragment that doesn't form a complete
/// entry is skipped.
pub fn parse_tle_set(set: &str) -> std::result::Result<Vec<UnstructuredTle>, ParseError> {
    let (rest, tles) = fold_many0(tle, Vec::new, |mut tles: Vec<UnstructuredTle>, tle| {
        tles.push(tle);
        tles
    })(set)
    .map_err(into_parse_error)?;
    if !rest.trim().is_empty() {
        debug!(rest = rest, "Trailing content after TLE set");
    }
    Ok(tles)
}

fn tle(s: &str) -> Result<&str, UnstructuredTle> {
    let (s, name) = verify(not_line_ending, |l: &str| !l.trim().is_empty())(s)?;
    let (s, _) = line_ending(s)?;
    let (s, line1) = not_line_ending(s)?;
    let (s, _) = line_ending(s)?;
    let (s, line2) = not_line_ending(s)?;
    let (s, _) = opt(line_ending)(s)?;
    let (s, _) = opt(line_ending)(s)?;
    Ok((
        s,
        UnstructuredTle {
            satellite_name: name.trim().to_string(),
            line1: line1.to_string(),
            line2: line2.to_string(),
        },
    ))
}

/// Line length, line number tag, and checksum; the field parsers below can
/// then assume a well-formed 69-column line.
fn checked_line(line: u8, s: &str) -> std::result::Result<(), ParseError> {
    if s.chars().count() != TLE_LINE_LEN {
        return Err(ParseError::LineLength {
            line,
            len: s.chars().count(),
        });
    }
    if !s.starts_with(char::from_digit(line.into(), 10).unwrap_or('?')) {
        return Err(ParseError::LineNumber { line });
    }

    let computed = checksum(s);
    let stored = s.chars().nth(TLE_LINE_LEN - 1).unwrap_or('?');
    if stored.to_digit(10) != Some(computed.into()) {
        return Err(ParseError::Checksum {
            line,
            computed,
            stored,
        });
    }
    Ok(())
}

/// Modulo-10 sum of digit values over the first 68 columns, minus signs
/// counting as 1.
fn checksum(s: &str) -> u8 {
    let sum: u32 = s
        .chars()
        .take(TLE_LINE_LEN - 1)
        .map(|c| match c {
            '-' => 1,
            _ => c.to_digit(10).unwrap_or(0),
        })
        .sum();
    (sum % 10) as u8
}

struct Line1 {
    catalog_number: CatalogNumber,
    classification: char,
    epoch: UtcTimestamp,
    mean_motion_dot: f64,
    mean_motion_ddot: f64,
    bstar: f64,
    element_set_number: u32,
}

struct Line2 {
    catalog_number: CatalogNumber,
    inclination: f64,
    raan: f64,
    eccentricity: f64,
    argument_of_perigee: f64,
    mean_anomaly: f64,
    mean_motion: f64,
    revolution_number: u32,
}

fn line1_fields(s: &str) -> Result<&str, Line1> {
    let (s, _) = tag("1 ")(s)?;
    let (s, catalog_number) = u32_field(5)(s)?;
    let (s, classification) = one_of("UCS")(s)?;
    let (s, _) = tag(" ")(s)?;
    // International designator, unused downstream
    let (s, _) = take(8usize)(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, epoch) = epoch(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, mean_motion_dot) = f64_field(10)(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, mean_motion_ddot) = exponent_field(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, bstar) = exponent_field(s)?;
    let (s, _) = tag(" ")(s)?;
    // Ephemeris type
    let (s, _) = take(1usize)(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, element_set_number) = u32_field(4)(s)?;
    let (s, _) = take(1usize)(s)?;
    Ok((
        s,
        Line1 {
            catalog_number,
            classification,
            epoch,
            mean_motion_dot,
            mean_motion_ddot,
            bstar,
            element_set_number,
        },
    ))
}

fn line2_fields(s: &str) -> Result<&str, Line2> {
    let (s, _) = tag("2 ")(s)?;
    let (s, catalog_number) = u32_field(5)(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, inclination) = f64_field(8)(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, raan) = f64_field(8)(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, eccentricity) = eccentricity(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, argument_of_perigee) = f64_field(8)(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, mean_anomaly) = f64_field(8)(s)?;
    let (s, _) = tag(" ")(s)?;
    let (s, mean_motion) = f64_field(11)(s)?;
    let (s, revolution_number) = u32_field(5)(s)?;
    let (s, _) = take(1usize)(s)?;
    Ok((
        s,
        Line2 {
            catalog_number,
            inclination,
            raan,
            eccentricity,
            argument_of_perigee,
            mean_anomaly,
            mean_motion,
            revolution_number,
        },
    ))
}

fn f64_field(width: usize) -> impl FnMut(&str) -> Result<&str, f64> {
    move |s| {
        let (s, field) = take(width)(s)?;
        let value = field
            .trim()
            .parse::<f64>()
            .map_err(|_| Error(ParseError::Field(field.to_string())))?;
        Ok((s, value))
    }
}

fn u32_field(width: usize) -> impl FnMut(&str) -> Result<&str, u32> {
    move |s| {
        let (s, field) = take(width)(s)?;
        let value = field
            .trim()
            .parse::<u32>()
            .map_err(|_| Error(ParseError::Field(field.to_string())))?;
        Ok((s, value))
    }
}

/// Two-digit year (pivot 57: `<57` is 2000s) followed by the fractional
/// day-of-year, day 1 being January 1st
fn epoch(s: &str) -> Result<&str, UtcTimestamp> {
    let (s, yy) = u32_field(2)(s)?;
    let (s, day) = f64_field(12)(s)?;
    let year = if yy < 57 { 2000 + yy as i32 } else { 1900 + yy as i32 };
    let epoch = epoch_timestamp(year, day).ok_or(Error(ParseError::Epoch))?;
    Ok((s, epoch))
}

fn epoch_timestamp(year: i32, day_of_year: f64) -> Option<UtcTimestamp> {
    if !(1.0..367.0).contains(&day_of_year) {
        return None;
    }
    let jan1 = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
    let nanos = ((day_of_year - 1.0) * 86_400.0 * 1e9).round() as i64;
    Some(jan1 + chrono::Duration::nanoseconds(nanos))
}

/// Implied leading `0.`: seven digits scaled by 1e-7
fn eccentricity(s: &str) -> Result<&str, f64> {
    let (s, digits) = u32_field(7)(s)?;
    Ok((s, f64::from(digits) * 1e-7))
}

/// `±ddddd±d` means `±0.ddddd × 10^±d`
fn exponent_field(s: &str) -> Result<&str, f64> {
    let (s, mantissa_sign) = sign(s)?;
    let (s, mantissa) = u32_field(5)(s)?;
    let (s, exp_sign) = sign(s)?;
    let (s, exp) = u32_field(1)(s)?;
    let value = mantissa_sign * f64::from(mantissa) * 1e-5 * 10f64.powi(exp_sign as i32 * exp as i32);
    Ok((s, value))
}

fn sign(s: &str) -> Result<&str, f64> {
    let (s, c) = one_of(" +-")(s)?;
    Ok((s, if c == '-' { -1.0 } else { 1.0 }))
}

fn into_parse_error(e: nom::Err<ParseError>) -> ParseError {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        nom::Err::Incomplete(_) => ParseError::Nom(String::new(), ErrorKind::Complete),
    }
}

impl<'a> nom::error::ParseError<&'a str> for ParseError {
    fn from_error_kind(s: &'a str, kind: ErrorKind) -> Self {
        ParseError::Nom(s.to_string(), kind)
    }

    fn append(_: &'a str, _: ErrorKind, other: Self) -> Self {
        other
    }
}
