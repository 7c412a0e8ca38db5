//! Workbook: worksheets plus their shared style registry

use crate::error::{Error, Result};
use crate::resolver::FormatResolver;
use crate::style::Styles;
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A spreadsheet document in memory
///
/// Owns the worksheet list and the one style registry every sheet's format
/// indices point into. There is always at least one worksheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workbook {
    worksheets: Vec<Worksheet>,
    styles: Styles,
}

impl Workbook {
    /// Create a new workbook with one worksheet named "Sheet1"
    pub fn new() -> Self {
        Self {
            worksheets: vec![Worksheet::new("Sheet1")],
            styles: Styles::new(),
        }
    }

    /// Number of sheets in the workbook
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Get a worksheet by 0-based index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a worksheet by 0-based index for mutation
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Look up a worksheet by exact name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.get(self.sheet_index(name)?)
    }

    /// Look up a worksheet by exact name for mutation
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        let index = self.sheet_index(name)?;
        self.worksheets.get_mut(index)
    }

    /// Get the 0-based index of the worksheet with the given name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Iterate over the worksheets in order
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Iterate over the worksheets in order, mutably
    pub fn worksheets_mut(&mut self) -> impl Iterator<Item = &mut Worksheet> {
        self.worksheets.iter_mut()
    }

    /// Add a worksheet with a generated name ("Sheet2", "Sheet3", ...)
    ///
    /// Returns the new sheet's index.
    pub fn add_worksheet(&mut self) -> Result<usize> {
        let fresh = self.generate_sheet_name();
        self.add_worksheet_with_name(&fresh)
    }

    /// Add a worksheet with the given name, returning its index
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.validate_sheet_name(name, None)?;
        self.worksheets.push(Worksheet::new(name));
        Ok(self.worksheets.len() - 1)
    }

    /// Rename the worksheet at `index`
    ///
    /// The new name is validated like any other; renaming a sheet to its own
    /// name (in any casing) is allowed.
    pub fn rename_worksheet(&mut self, index: usize, new_name: &str) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(self.bad_sheet_index(index));
        }
        self.validate_sheet_name(new_name, Some(index))?;
        self.worksheets[index].set_name(new_name);
        Ok(())
    }

    /// Get the style registry
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Get the style registry for mutation
    pub fn styles_mut(&mut self) -> &mut Styles {
        &mut self.styles
    }

    /// Get a format resolver for the worksheet at a 0-based index
    pub fn resolver(&self, index: usize) -> Result<FormatResolver<'_>> {
        match self.worksheets.get(index) {
            Some(worksheet) => Ok(FormatResolver::new(worksheet, &self.styles)),
            None => Err(self.bad_sheet_index(index)),
        }
    }

    /// Get a format resolver for the worksheet with the given name
    pub fn resolver_by_name(&self, name: &str) -> Result<FormatResolver<'_>> {
        let worksheet = self
            .worksheet_by_name(name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))?;
        Ok(FormatResolver::new(worksheet, &self.styles))
    }

    fn bad_sheet_index(&self, index: usize) -> Error {
        Error::SheetIndexOutOfBounds {
            index,
            count: self.worksheets.len(),
        }
    }

    /// Validate a sheet name; `exclude` skips one sheet in the duplicate scan
    fn validate_sheet_name(&self, name: &str, exclude: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("sheet name is empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "sheet name is longer than {MAX_SHEET_NAME_LEN} characters"
            )));
        }
        if let Some(c) = name.chars().find(|c| ":\\/?*[]".contains(*c)) {
            return Err(Error::InvalidSheetName(format!(
                "sheet name contains forbidden character '{c}'"
            )));
        }

        // Names are unique ignoring case
        let lowered = name.to_lowercase();
        let taken = self
            .worksheets
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != exclude)
            .any(|(_, ws)| ws.name().to_lowercase() == lowered);
        if taken {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }

    /// Generate the first free "SheetN" name
    fn generate_sheet_name(&self) -> String {
        let mut n = self.worksheets.len();
        loop {
            n += 1;
            let candidate = format!("Sheet{n}");
            if self.validate_sheet_name(&candidate, None).is_ok() {
                return candidate;
            }
        }
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
