// src/view.rs
//
// What a result group looks like on screen, independent of the frontend.
// GUI and CLI both draw from these helpers so the two never disagree on
// column order or wording.

use crate::config::consts::*;
use crate::matcher::ProgramGroup;
use crate::record::{Columns, Record, CRITERIA};

/// Preferred table columns, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayColumn {
    Year,
    Program,
    Quota,
    Criteria(usize),
}

impl DisplayColumn {
    pub fn label(self) -> &'static str {
        match self {
            DisplayColumn::Year => COL_YEAR,
            DisplayColumn::Program => COL_PROGRAM,
            DisplayColumn::Quota => COL_QUOTA,
            DisplayColumn::Criteria(i) => COL_CRITERIA[i],
        }
    }

    /// Cell text; absent optional values render empty.
    pub fn cell(self, r: &Record) -> &str {
        match self {
            DisplayColumn::Year => &r.year,
            DisplayColumn::Program => &r.program,
            DisplayColumn::Quota => r.quota.as_deref().unwrap_or(""),
            DisplayColumn::Criteria(i) => r.criteria[i].as_deref().unwrap_or(""),
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, DisplayColumn::Year | DisplayColumn::Quota)
    }
}

/// The preferred columns the sheet actually has.
pub fn display_columns(cols: &Columns) -> Vec<DisplayColumn> {
    let mut out = vec![DisplayColumn::Year, DisplayColumn::Program];
    if cols.quota { out.push(DisplayColumn::Quota); }
    for i in 0..CRITERIA {
        if cols.criteria[i] { out.push(DisplayColumn::Criteria(i)); }
    }
    out
}

pub fn header_row(cols: &[DisplayColumn]) -> Vec<&'static str> {
    cols.iter().map(|c| c.label()).collect()
}

pub fn record_row<'r>(cols: &[DisplayColumn], r: &'r Record) -> Vec<&'r str> {
    cols.iter().map(|c| c.cell(r)).collect()
}

/// 【school】
pub fn heading(g: &ProgramGroup) -> String {
    join!("【", g.school, "】")
}

/// Program names across years plus the code.
pub fn caption(g: &ProgramGroup) -> String {
    format!("系名紀錄：{} (代碼：{})", g.programs_display(), g.code)
}

pub fn found_message(groups: usize) -> String {
    format!("找到 {} 個相關科系！", groups)
}

pub fn no_results_message(query: &str) -> String {
    format!("找不到包含「{}」的科系，請嘗試更換或縮短關鍵字。", query)
}
