//! A1-style cell addresses and rectangular ranges

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A single cell position such as "A1" or "C42"
///
/// Both axes are 1-based: row 1 is the first row and column 1 is "A".
/// Columns run A-XFD (1-16384), rows 1-1048576. Absolute markers ("$A$1")
/// are not part of the address language and fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1, B=2, ..., XFD=16384)
    pub col: u16,
}

impl CellAddress {
    /// Build an address from 1-based row and column numbers
    ///
    /// The numbers are not range-checked here; worksheet accessors reject
    /// positions outside the sheet limits.
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse A1 notation into an address
    ///
    /// # Examples
    /// ```
    /// use quill_sheets_core::CellAddress;
    ///
    /// let d7 = CellAddress::parse("D7").unwrap();
    /// assert_eq!((d7.row, d7.col), (7, 4));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty cell address".into()));
        }

        // Leading alphabetic run is the column; everything after is the row.
        // The counted prefix is pure ASCII, so the byte split is safe.
        let letter_count = s.chars().take_while(char::is_ascii_alphabetic).count();
        let (letters, digits) = s.split_at(letter_count);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!("no column letters in '{s}'")));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{s}'")));
        }

        let col = Self::letters_to_column(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{s}'")))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!("row must be >= 1 in '{s}'")));
        }
        if row > MAX_ROWS {
            return Err(Error::InvalidAddress(format!(
                "row {row} is past the last row {MAX_ROWS}"
            )));
        }

        Ok(Self { row, col })
    }

    /// Spell a 1-based column number in letters (1 = A, 26 = Z, 27 = AA, ...)
    pub fn column_to_letters(col: u16) -> String {
        let mut letters = String::new();
        let mut n = u32::from(col);

        // Bijective base 26
        while n > 0 {
            n -= 1;
            letters.insert(0, char::from(b'A' + (n % 26) as u8));
            n /= 26;
        }

        letters
    }

    /// Read column letters back into a 1-based number (A = 1, Z = 26, AA = 27, ...)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("column letters are empty".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            let digit = match c {
                'A'..='Z' => c as u32 - 'A' as u32 + 1,
                'a'..='z' => c as u32 - 'a' as u32 + 1,
                _ => {
                    return Err(Error::InvalidAddress(format!("invalid column letter '{c}'")));
                }
            };
            col = col * 26 + digit;
            if col > u32::from(MAX_COLS) {
                return Err(Error::InvalidAddress(format!(
                    "column '{letters}' is past the last column {}",
                    Self::column_to_letters(MAX_COLS)
                )));
            }
        }

        Ok(col as u16)
    }

    /// Render the address in A1 notation
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row)
    }

    /// Span a range between this address and another corner
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular block of cells such as "A1:B10"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Top-left corner
    pub start: CellAddress,
    /// Bottom-right corner
    pub end: CellAddress,
}

impl CellRange {
    /// Build a range from two corner addresses
    ///
    /// The corners may be given in any order; each axis is normalized
    /// independently so that `start` is the top-left corner and `end` the
    /// bottom-right.
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Build a range straight from 1-based row/column numbers
    pub fn from_indices(start_row: u32, start_col: u16, end_row: u32, end_col: u16) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Wrap one address as a range covering only that cell
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse "A1:B10" notation; a lone "C3" becomes a single-cell range
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once(':') {
            Some((a, b)) => Ok(Self::new(CellAddress::parse(a)?, CellAddress::parse(b)?)),
            None => Ok(Self::single(CellAddress::parse(s)?)),
        }
    }

    /// Whether the given address falls inside this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        (self.start.row..=self.end.row).contains(&addr.row)
            && (self.start.col..=self.end.col).contains(&addr.col)
    }

    /// Height of the range in rows
    pub fn row_count(&self) -> u32 {
        self.end.row + 1 - self.start.row
    }

    /// Width of the range in columns
    pub fn col_count(&self) -> u16 {
        self.end.col + 1 - self.start.col
    }

    /// Total number of cells covered
    pub fn cell_count(&self) -> u64 {
        u64::from(self.row_count()) * u64::from(self.col_count())
    }

    /// Visit every address in the range, row by row
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            next_row: self.start.row,
            next_col: self.start.col,
        }
    }

    /// Render as "A1:B10"; a single-cell range renders without a colon
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            return self.start.to_a1_string();
        }
        format!("{}:{}", self.start, self.end)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Row-major iterator over the addresses of a range
pub struct CellRangeIterator {
    range: CellRange,
    next_row: u32,
    next_col: u16,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row > self.range.end.row {
            return None;
        }

        let addr = CellAddress::new(self.next_row, self.next_col);

        // Advance within the row, wrapping to the next row at the right edge
        if self.next_col < self.range.end.col {
            self.next_col += 1;
        } else {
            self.next_col = self.range.start.col;
            self.next_row += 1;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next_row > self.range.end.row {
            return (0, Some(0));
        }
        let full_rows_left = u64::from(self.range.end.row - self.next_row);
        let in_current_row = u64::from(self.range.end.col - self.next_col + 1);
        let left = (full_rows_left * u64::from(self.range.col_count()) + in_current_row) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CellRangeIterator {}
