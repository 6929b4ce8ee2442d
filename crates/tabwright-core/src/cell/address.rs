//! Cell references, ranges and the A1 address codec
//!
//! Column letters map to 1-based indices (`A` = 1, `XFD` = 16384) through a
//! base-26 numbering without a zero digit. [`CellReference`] stores zero-based
//! coordinates internally and prints the 1-based A1 form.

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Maximum number of column letters in a reference (`XFD`)
const MAX_COLUMN_LETTERS: usize = 3;

/// Convert column letters to a 1-based column index (`A` = 1, `AA` = 27)
///
/// Only uppercase `A`-`Z` are accepted.
///
/// # Examples
/// ```
/// use tabwright_core::column_to_index;
///
/// assert_eq!(column_to_index("A").unwrap(), 1);
/// assert_eq!(column_to_index("XFD").unwrap(), 16384);
/// assert!(column_to_index("XFE").is_err());
/// assert!(column_to_index("a").is_err());
/// ```
pub fn column_to_index(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }
    if letters.len() > MAX_COLUMN_LETTERS {
        return Err(Error::InvalidAddress(format!(
            "column '{}' is longer than 3 letters, maximum column is 'XFD'",
            letters
        )));
    }
    if !letters.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(Error::InvalidAddress(format!(
            "column '{}' must contain only uppercase letters A-Z",
            letters
        )));
    }

    let index = letters_value(letters);
    if index > MAX_COLS {
        return Err(Error::InvalidAddress(format!(
            "column '{}' is beyond 'XFD'",
            letters
        )));
    }
    Ok(index)
}

/// Like [`column_to_index`], but letters past `XFD` are [`Error::OutOfRange`]
pub fn locate_column(letters: &str) -> Result<u32> {
    let well_formed = !letters.is_empty()
        && letters.len() <= MAX_COLUMN_LETTERS
        && letters.bytes().all(|b| b.is_ascii_uppercase());
    if well_formed && letters_value(letters) > MAX_COLS {
        return Err(Error::column_out_of_range(letters_value(letters) as u64));
    }
    column_to_index(letters)
}

/// A column given by letters (`"C"`) or by 1-based index (`3`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKey {
    Letters(String),
    Index(u32),
}

impl ColumnKey {
    /// Resolve to a 1-based index in `1..=16384`
    pub fn index(&self) -> Result<u32> {
        match self {
            ColumnKey::Letters(letters) => locate_column(letters),
            ColumnKey::Index(index) => {
                if *index == 0 || *index > MAX_COLS {
                    return Err(Error::column_out_of_range(*index as u64));
                }
                Ok(*index)
            }
        }
    }
}

impl From<&str> for ColumnKey {
    fn from(s: &str) -> Self {
        ColumnKey::Letters(s.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(s: String) -> Self {
        ColumnKey::Letters(s)
    }
}

impl From<u32> for ColumnKey {
    fn from(index: u32) -> Self {
        ColumnKey::Index(index)
    }
}

/// Convert a 1-based column index to its letters (`1` = `A`, `27` = `AA`)
pub fn index_to_column(index: u32) -> Result<String> {
    if index == 0 || index > MAX_COLS {
        return Err(Error::InvalidAddress(format!(
            "column index {} outside 1..={}",
            index, MAX_COLS
        )));
    }

    let mut letters = Vec::with_capacity(MAX_COLUMN_LETTERS);
    let mut n = index;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    Ok(String::from_utf8_lossy(&letters).into_owned())
}

/// Convert an A1 reference to zero-based `(row, col)`
///
/// Every failure, including out-of-range parts, is reported as
/// [`Error::InvalidAddress`].
///
/// # Examples
/// ```
/// use tabwright_core::reference_to_rowcol;
///
/// assert_eq!(reference_to_rowcol("A1").unwrap(), (0, 0));
/// assert_eq!(reference_to_rowcol("B7").unwrap(), (6, 1));
/// assert!(reference_to_rowcol("A0").is_err());
/// ```
pub fn reference_to_rowcol(reference: &str) -> Result<(u32, u32)> {
    let addr = CellReference::parse(reference)?;
    Ok((addr.row, addr.col))
}

/// Convert zero-based `(row, col)` to an A1 reference
pub fn rowcol_to_reference(row: u32, col: u32) -> Result<String> {
    if row >= MAX_ROWS {
        return Err(Error::InvalidAddress(format!(
            "row index {} outside 0..{}",
            row, MAX_ROWS
        )));
    }
    Ok(format!("{}{}", index_to_column(col + 1)?, row + 1))
}

/// Split `"AB12"` into `("AB", "12")`, rejecting anything else
fn split_reference(s: &str) -> Result<(&str, &str)> {
    let bytes = s.as_bytes();
    let letters_end = bytes
        .iter()
        .position(|b| !b.is_ascii_alphabetic())
        .unwrap_or(bytes.len());

    if letters_end == 0 {
        return Err(Error::InvalidAddress(format!(
            "no column letters in '{}'",
            s
        )));
    }
    if letters_end > MAX_COLUMN_LETTERS {
        return Err(Error::InvalidAddress(format!(
            "column part of '{}' is longer than 3 letters",
            s
        )));
    }

    let digits = &s[letters_end..];
    if digits.is_empty() {
        return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidAddress(format!(
            "unexpected characters in '{}'",
            s
        )));
    }

    Ok((&s[..letters_end], digits))
}

/// Base-26 value of 1-3 ASCII letters, case-insensitive
fn letters_value(letters: &str) -> u32 {
    letters.bytes().fold(0u32, |acc, b| {
        acc * 26 + (b.to_ascii_uppercase() - b'A') as u32 + 1
    })
}

/// A single cell reference (e.g., "B7")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellReference {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, XFD=16383)
    pub col: u32,
}

impl CellReference {
    /// Create a reference from zero-based indices without bounds checks
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Create a reference from zero-based indices, rejecting anything outside the sheet
    pub fn checked(row: u32, col: u32) -> Result<Self> {
        if row >= MAX_ROWS {
            return Err(Error::row_out_of_range(row as u64 + 1));
        }
        if col >= MAX_COLS {
            return Err(Error::column_out_of_range(col as u64 + 1));
        }
        Ok(Self { row, col })
    }

    /// Parse an A1 reference; any failure is an [`Error::InvalidAddress`]
    ///
    /// Lowercase column letters are accepted and normalized.
    pub fn parse(s: &str) -> Result<Self> {
        Self::locate(s).map_err(|e| match e {
            Error::OutOfRange { .. } => Error::InvalidAddress(format!("'{}': {}", s, e)),
            other => other,
        })
    }

    /// Parse an A1 reference, separating syntax errors from bound errors
    ///
    /// Malformed text is an [`Error::InvalidAddress`]; a well-formed reference
    /// outside `A1:XFD1048576` is an [`Error::OutOfRange`].
    pub fn locate(s: &str) -> Result<Self> {
        let (letters, digits) = split_reference(s.trim())?;

        let row: u64 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;
        if row == 0 || row > MAX_ROWS as u64 {
            return Err(Error::row_out_of_range(row));
        }

        let col = letters_value(letters);
        if col > MAX_COLS {
            return Err(Error::column_out_of_range(col as u64));
        }

        Ok(Self {
            row: row as u32 - 1,
            col: col - 1,
        })
    }

    /// Column letters of this reference
    pub fn column_letters(&self) -> String {
        index_to_column(self.col + 1).unwrap_or_default()
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", self.column_letters(), self.row + 1)
    }

    /// Create a range from this reference to another
    pub fn to(&self, other: CellReference) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range given by two corners (e.g., "A1:C3")
///
/// The corners are kept as written so validators can detect inverted ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// First corner (normally top-left)
    pub start: CellReference,
    /// Second corner (normally bottom-right)
    pub end: CellReference,
}

impl CellRange {
    /// Create a new cell range
    pub const fn new(start: CellReference, end: CellReference) -> Self {
        Self { start, end }
    }

    /// Parse `"A1:B2"`; a range needs exactly one `:` and two valid endpoints
    pub fn parse(s: &str) -> Result<Self> {
        let (start, end) = Self::split(s)?;
        Ok(Self::new(
            CellReference::parse(start)?,
            CellReference::parse(end)?,
        ))
    }

    /// Like [`CellRange::parse`], but out-of-bounds endpoints are [`Error::OutOfRange`]
    pub fn locate(s: &str) -> Result<Self> {
        let (start, end) = Self::split(s)?;
        Ok(Self::new(
            CellReference::locate(start)?,
            CellReference::locate(end)?,
        ))
    }

    fn split(s: &str) -> Result<(&str, &str)> {
        let mut parts = s.trim().split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => Ok((start, end)),
            _ => Err(Error::InvalidAddress(format!(
                "range '{}' must have the form 'A1:B2'",
                s
            ))),
        }
    }

    /// Whether the start corner is above-left of (or equal to) the end corner
    pub fn is_ordered(&self) -> bool {
        self.start.row <= self.end.row && self.start.col <= self.end.col
    }

    /// Whether both corners sit on the same row
    pub fn is_single_row(&self) -> bool {
        self.start.row == self.end.row
    }

    /// Whether both corners are the same cell
    pub fn is_single_cell(&self) -> bool {
        self.start == self.end
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellReference) -> bool {
        let (top, bottom) = (
            self.start.row.min(self.end.row),
            self.start.row.max(self.end.row),
        );
        let (left, right) = (
            self.start.col.min(self.end.col),
            self.start.col.max(self.end.col),
        );
        (top..=bottom).contains(&addr.row) && (left..=right).contains(&addr.col)
    }

    /// Format as `A1:B2`
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start, self.end)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A range argument: either two corner references or one `"A1:B2"` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSpec {
    /// Top-left and bottom-right references given separately
    Pair(String, String),
    /// A combined range string
    Text(String),
}

impl RangeSpec {
    /// Normalize to a [`CellRange`]; bound errors are [`Error::OutOfRange`]
    pub fn to_range(&self) -> Result<CellRange> {
        match self {
            RangeSpec::Pair(start, end) => Ok(CellRange::new(
                CellReference::locate(start)?,
                CellReference::locate(end)?,
            )),
            RangeSpec::Text(text) => CellRange::locate(text),
        }
    }

    /// The two corner strings as given
    pub fn corners(&self) -> Result<(String, String)> {
        match self {
            RangeSpec::Pair(start, end) => Ok((start.clone(), end.clone())),
            RangeSpec::Text(text) => {
                let (start, end) = CellRange::split(text)?;
                Ok((start.to_string(), end.to_string()))
            }
        }
    }
}

impl From<&str> for RangeSpec {
    fn from(s: &str) -> Self {
        RangeSpec::Text(s.to_string())
    }
}

impl From<String> for RangeSpec {
    fn from(s: String) -> Self {
        RangeSpec::Text(s)
    }
}

impl From<(&str, &str)> for RangeSpec {
    fn from((start, end): (&str, &str)) -> Self {
        RangeSpec::Pair(start.to_string(), end.to_string())
    }
}

impl From<CellRange> for RangeSpec {
    fn from(range: CellRange) -> Self {
        RangeSpec::Pair(range.start.to_a1_string(), range.end.to_a1_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_column() {
        assert_eq!(index_to_column(1).unwrap(), "A");
        assert_eq!(index_to_column(26).unwrap(), "Z");
        assert_eq!(index_to_column(27).unwrap(), "AA");
        assert_eq!(index_to_column(702).unwrap(), "ZZ");
        assert_eq!(index_to_column(703).unwrap(), "AAA");
        assert_eq!(index_to_column(16384).unwrap(), "XFD");

        assert!(index_to_column(0).is_err());
        assert!(index_to_column(16385).is_err());
    }

    #[test]
    fn test_column_to_index() {
        assert_eq!(column_to_index("A").unwrap(), 1);
        assert_eq!(column_to_index("Z").unwrap(), 26);
        assert_eq!(column_to_index("AA").unwrap(), 27);
        assert_eq!(column_to_index("AAA").unwrap(), 703);
        assert_eq!(column_to_index("XFD").unwrap(), 16384);

        assert!(matches!(column_to_index(""), Err(Error::InvalidAddress(_))));
        assert!(matches!(column_to_index("AAAA"), Err(Error::InvalidAddress(_))));
        assert!(matches!(column_to_index("A1"), Err(Error::InvalidAddress(_))));
        assert!(matches!(column_to_index("ab"), Err(Error::InvalidAddress(_))));
        assert!(matches!(column_to_index("XFE"), Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn test_reference_parse() {
        assert_eq!(reference_to_rowcol("A1").unwrap(), (0, 0));
        assert_eq!(reference_to_rowcol("C100").unwrap(), (99, 2));
        assert_eq!(reference_to_rowcol("XFD1048576").unwrap(), (1_048_575, 16_383));
        assert_eq!(reference_to_rowcol("b2").unwrap(), (1, 1));
    }

    #[test]
    fn test_reference_parse_errors() {
        for bad in ["", "A", "1", "A0", "1A", "A1B", "A-1", "AAAA1", "A1048577", "XFE1"] {
            assert!(
                matches!(reference_to_rowcol(bad), Err(Error::InvalidAddress(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_locate_separates_bounds_from_syntax() {
        assert!(matches!(
            CellReference::locate("XFE1"),
            Err(Error::OutOfRange { what: "Column", value: 16385, .. })
        ));
        assert!(matches!(
            CellReference::locate("A1048577"),
            Err(Error::OutOfRange { what: "Row", .. })
        ));
        assert!(matches!(
            CellReference::locate("A0"),
            Err(Error::OutOfRange { what: "Row", value: 0, .. })
        ));
        assert!(matches!(
            CellReference::locate("1A"),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_column_key() {
        assert_eq!(ColumnKey::from("C").index().unwrap(), 3);
        assert_eq!(ColumnKey::from(16384).index().unwrap(), 16384);
        assert!(matches!(
            ColumnKey::from("XFE").index(),
            Err(Error::OutOfRange { what: "Column", value: 16385, .. })
        ));
        assert!(matches!(
            ColumnKey::from(0).index(),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            ColumnKey::from("c").index(),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_rowcol_to_reference() {
        assert_eq!(rowcol_to_reference(0, 0).unwrap(), "A1");
        assert_eq!(rowcol_to_reference(6, 1).unwrap(), "B7");
        assert!(rowcol_to_reference(MAX_ROWS, 0).is_err());
        assert!(rowcol_to_reference(0, MAX_COLS).is_err());
    }

    #[test]
    fn test_range_parse() {
        let range = CellRange::parse("A1:C3").unwrap();
        assert_eq!(range.start, CellReference::new(0, 0));
        assert_eq!(range.end, CellReference::new(2, 2));
        assert!(range.is_ordered());

        let inverted = CellRange::parse("C1:A1").unwrap();
        assert!(!inverted.is_ordered());
        assert!(inverted.is_single_row());

        assert!(CellRange::parse("A1").is_err());
        assert!(CellRange::parse("A1:B2:C3").is_err());
        assert!(CellRange::parse("A1:").is_err());
    }

    #[test]
    fn test_range_spec_normalizes() {
        let pair = RangeSpec::from(("A1", "B2")).to_range().unwrap();
        let text = RangeSpec::from("A1:B2").to_range().unwrap();
        assert_eq!(pair, text);
        assert_eq!(text.to_string(), "A1:B2");
    }

    #[test]
    fn test_range_contains() {
        let range = CellRange::parse("B2:D4").unwrap();
        assert!(range.contains(&CellReference::new(1, 1)));
        assert!(range.contains(&CellReference::new(3, 3)));
        assert!(!range.contains(&CellReference::new(0, 0)));
        assert!(!range.contains(&CellReference::new(4, 1)));
    }
}
