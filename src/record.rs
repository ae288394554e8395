// src/record.rs
//
// Typed rows of the cutoff sheet.
//
// - Record: one (year, program) row. Every cell stays a String: years and
//           program codes carry leading zeros that must survive.
// - Columns: which optional display columns the sheet actually has.
// - Dataset: the loaded sheet, in sheet order. Built by `loader::build_dataset`.

use crate::config::consts::*;
use crate::core::sanitize::{clean_cell, clean_header};
use crate::error::LoadError;

/// Number of selection-criteria columns (篩選一 … 篩選五).
pub const CRITERIA: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub year: String,
    /// Program code (系校代碼). Never empty.
    pub code: String,
    pub school: String,
    pub program: String,
    pub quota: Option<String>,
    pub criteria: [Option<String>; CRITERIA],
}

impl Record {
    /// Search corpus: school and program separated by one space.
    pub fn full_text(&self) -> String {
        join!(&self.school, " ", &self.program)
    }
}

/// Presence of the optional columns in the sheet header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Columns {
    pub quota: bool,
    pub criteria: [bool; CRITERIA],
}

impl Columns {
    pub fn all() -> Self {
        Self { quota: true, criteria: [true; CRITERIA] }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub columns: Columns,
    pub records: Vec<Record>,
    /// Cached `full_text` per record, same order as `records`.
    corpus: Vec<String>,
}

impl Dataset {
    pub fn new(columns: Columns, records: Vec<Record>) -> Self {
        let corpus = records.iter().map(Record::full_text).collect();
        Self { columns, records, corpus }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// `full_text` of row `i`.
    pub fn text(&self, i: usize) -> &str {
        &self.corpus[i]
    }

    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }
}

/// Column positions resolved from the header row.
pub(crate) struct Binding {
    year: usize,
    code: usize,
    school: usize,
    program: usize,
    quota: Option<usize>,
    criteria: [Option<usize>; CRITERIA],
}

impl Binding {
    pub(crate) fn from_headers(headers: &[String]) -> Result<Self, LoadError> {
        let cleaned: Vec<String> = headers.iter().map(|h| clean_header(h)).collect();
        let find = |label: &str| cleaned.iter().position(|h| h == label);
        let need = |label: &'static str| find(label).ok_or(LoadError::MissingColumn(label));

        Ok(Self {
            year: need(COL_YEAR)?,
            code: need(COL_CODE)?,
            school: need(COL_SCHOOL)?,
            program: need(COL_PROGRAM)?,
            quota: find(COL_QUOTA),
            criteria: COL_CRITERIA.map(find),
        })
    }

    pub(crate) fn columns(&self) -> Columns {
        Columns {
            quota: self.quota.is_some(),
            criteria: self.criteria.map(|c| c.is_some()),
        }
    }

    /// Build a record from one data row. `None` when the code cell is blank.
    pub(crate) fn record(&self, row: &[String]) -> Option<Record> {
        let cell = |ix: usize| row.get(ix).map(|c| clean_cell(c)).unwrap_or_default();
        let optional = |ix: Option<usize>| ix.map(cell);

        let code = cell(self.code);
        if code.is_empty() { return None; }

        Some(Record {
            year: cell(self.year),
            code,
            school: cell(self.school),
            program: cell(self.program),
            quota: optional(self.quota),
            criteria: self.criteria.map(optional),
        })
    }
}
