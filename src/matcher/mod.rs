// src/matcher/mod.rs
//! # Query matching
//!
//! Turns a free-text query into program groups:
//!
//! ```text
//! raw ─ normalize (台→臺) ─ aliases (longest first) ─ split ─ AND-substring match
//!                                                               │ empty?
//! raw ───────────────────────────────────────────── split ─ AND-substring match
//!                                                               │
//!                                              group by 系校代碼, year desc
//! ```
//!
//! Matching is literal and case-sensitive against `school + " " + program`.
//! There is no ranking: groups come out in the order their code is first
//! matched in the sheet.
//!
//! The matcher owns no data and keeps no state between calls; the caller hands
//! it whatever `Dataset` snapshot is current.

pub mod alias;

use std::collections::HashMap;

use crate::record::{Dataset, Record};

pub use alias::AliasTable;

/// Informal variant → formal character, applied to the whole query.
const CHAR_NORMALIZATION: &[(char, char)] = &[('台', '臺')];

/// Which pass produced the matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPass {
    /// Normalized + alias-expanded keywords.
    Primary,
    /// Raw keywords, tried only when the primary pass found nothing.
    Fallback,
}

/// Rows hit by a query, already grouped.
///
/// Holds indices only, so it can outlive a borrow of the dataset. Must be
/// resolved against the same dataset it was found in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matches {
    pub pass: MatchPass,
    /// Matched rows, in sheet order.
    pub rows: Vec<usize>,
    /// Row indices per code, as returned by `group_rows`.
    pub groups: Vec<Vec<usize>>,
}

impl Matches {
    /// Borrow the stored groups out of `ds`. No regrouping happens here.
    pub fn resolve<'a>(&self, ds: &'a Dataset) -> Search<'a> {
        if self.groups.is_empty() {
            Search::NoResults
        } else {
            Search::Found {
                pass: self.pass,
                groups: self.groups.iter().map(|rows| program_group(ds, rows)).collect(),
            }
        }
    }
}

/// All rows of one program code, latest year first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramGroup<'a> {
    pub code: &'a str,
    /// School name from the latest year.
    pub school: &'a str,
    /// Distinct program names across years, latest first.
    pub programs: Vec<&'a str>,
    pub records: Vec<&'a Record>,
}

impl ProgramGroup<'_> {
    /// Program names joined for display.
    pub fn programs_display(&self) -> String {
        self.programs.join(" / ")
    }
}

/// Outcome of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Search<'a> {
    /// Empty or whitespace-only query; nothing was matched and nothing to report.
    Idle,
    NoResults,
    Found { pass: MatchPass, groups: Vec<ProgramGroup<'a>> },
}

impl<'a> Search<'a> {
    pub fn groups(&self) -> &[ProgramGroup<'a>] {
        match self {
            Search::Found { groups, .. } => groups,
            _ => &[],
        }
    }

    pub fn pass(&self) -> Option<MatchPass> {
        match self {
            Search::Found { pass, .. } => Some(*pass),
            _ => None,
        }
    }
}

/// Search `ds` with the built-in alias table.
pub fn search<'a>(raw: &str, ds: &'a Dataset) -> Search<'a> {
    QueryMatcher::new(AliasTable::builtin()).search(raw, ds)
}

/// Match rows with the built-in alias table.
pub fn find(raw: &str, ds: &Dataset) -> Option<Matches> {
    QueryMatcher::new(AliasTable::builtin()).find(raw, ds)
}

#[derive(Clone, Copy, Debug)]
pub struct QueryMatcher<'t> {
    aliases: &'t AliasTable,
}

impl Default for QueryMatcher<'static> {
    fn default() -> Self {
        Self::new(AliasTable::builtin())
    }
}

impl<'t> QueryMatcher<'t> {
    pub fn new(aliases: &'t AliasTable) -> Self {
        Self { aliases }
    }

    pub fn search<'a>(&self, raw: &str, ds: &'a Dataset) -> Search<'a> {
        match self.find(raw, ds) {
            None => Search::Idle,
            Some(m) => m.resolve(ds),
        }
    }

    /// Matching rows without grouping. `None` for an idle (blank) query.
    ///
    /// The raw-keyword pass runs only when the primary pass finds nothing.
    pub fn find(&self, raw: &str, ds: &Dataset) -> Option<Matches> {
        let keywords = self.keywords(raw);
        if keywords.is_empty() {
            return None;
        }

        let mut pass = MatchPass::Primary;
        let mut rows = match_rows(ds, &keywords);

        if rows.is_empty() {
            let raw_keywords = split_keywords(raw);
            logd!("Match: no primary hits for {:?}, retrying raw {:?}", keywords, raw_keywords);
            pass = MatchPass::Fallback;
            rows = match_rows(ds, &raw_keywords);
        }

        let groups = group_rows(ds, &rows);
        logf!("Match: {:?} → {} rows, {} groups ({:?})", raw, rows.len(), groups.len(), pass);
        Some(Matches { pass, rows, groups })
    }

    /// Character normalization only.
    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw)
    }

    /// Normalization followed by alias expansion.
    pub fn expand(&self, raw: &str) -> String {
        self.aliases.expand(&normalize(raw))
    }

    /// Primary-pass keywords for `raw`.
    pub fn keywords(&self, raw: &str) -> Vec<String> {
        split_keywords(&self.expand(raw))
    }
}

pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            CHAR_NORMALIZATION
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect()
}

/// Whitespace split, empties dropped.
pub fn split_keywords(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_owned).collect()
}

/// Indices of rows whose `full_text` contains every keyword.
/// No keywords matches nothing; callers treat that as an idle query.
pub fn match_rows<S: AsRef<str>>(ds: &Dataset, keywords: &[S]) -> Vec<usize> {
    if keywords.is_empty() {
        return Vec::new();
    }
    ds.corpus()
        .iter()
        .enumerate()
        .filter(|(_, text)| keywords.iter().all(|k| text.contains(k.as_ref())))
        .map(|(i, _)| i)
        .collect()
}

/// Group matched rows by program code.
pub fn group<'a>(ds: &'a Dataset, hits: &[usize]) -> Vec<ProgramGroup<'a>> {
    group_rows(ds, hits).iter().map(|rows| program_group(ds, rows)).collect()
}

/// Row indices of each group, without borrowing record data.
///
/// Groups follow the first appearance of each code in `hits`. A group holds
/// every row with that code, matched or not, sorted by year descending.
/// One pass over the dataset buckets rows by code.
pub fn group_rows(ds: &Dataset, hits: &[usize]) -> Vec<Vec<usize>> {
    if hits.is_empty() {
        return Vec::new();
    }

    let mut by_code: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, r) in ds.records.iter().enumerate() {
        by_code.entry(r.code.as_str()).or_default().push(i);
    }

    let mut out = Vec::new();
    for &ix in hits {
        // taken on first hit, so later hits of the same code find nothing
        let Some(mut rows) = by_code.remove(ds.records[ix].code.as_str()) else { continue };
        // stable: same-year rows keep sheet order
        rows.sort_by(|&a, &b| ds.records[b].year.cmp(&ds.records[a].year));
        out.push(rows);
    }
    out
}

/// Materialize one group. `rows` is non-empty and latest first.
fn program_group<'a>(ds: &'a Dataset, rows: &[usize]) -> ProgramGroup<'a> {
    let records: Vec<&'a Record> = rows.iter().map(|&i| &ds.records[i]).collect();

    let mut programs: Vec<&'a str> = Vec::new();
    for r in records.iter().copied() {
        if !programs.contains(&r.program.as_str()) {
            programs.push(&r.program);
        }
    }

    let latest: &'a Record = records[0];
    ProgramGroup {
        code: &latest.code,
        school: &latest.school,
        programs,
        records,
    }
}
