// src/matcher/alias.rs
//! Abbreviations people actually type, mapped to the substring the sheet uses.
//!
//! Keys are stored in the formal `臺` form because queries are normalized
//! (`台` → `臺`) before expansion; a `台大` key could never match.
//!
//! Expansion walks keys longest-first. `高師大` has to become `高雄師範大學`
//! before `師大` gets a chance to turn it into `高師範大學`. Equal-length keys
//! keep table order.

use std::sync::OnceLock;

/// (abbreviation, canonical substring), in table order.
static BUILTIN: &[(&str, &str)] = &[
    ("臺大", "臺灣大學"),
    ("政大", "政治大學"),
    ("清大", "清華大學"),
    ("交大", "交通大學"),
    ("陽交大", "陽明交通大學"),
    ("成大", "成功大學"),
    ("師大", "師範大學"),
    ("臺師大", "臺灣師範大學"),
    ("彰師大", "彰化師範大學"),
    ("高師大", "高雄師範大學"),
    ("國北教", "臺北教育大學"),
    ("國北護", "臺北護理健康大學"),
    ("市北教", "臺北市立大學"),
    ("中教大", "臺中教育大學"),
    ("北大", "臺北大學"),
    ("海大", "海洋大學"),
    ("臺科大", "臺灣科技大學"),
    ("北科大", "臺北科技大學"),
    ("暨大", "暨南國際大學"),
    ("東華", "東華大學"),
    ("高大", "高雄大學"),
    ("中山", "中山大學"),
    ("中央", "中央大學"),
    ("中正", "中正大學"),
    ("中興", "中興大學"),
    ("長庚", "長庚大學"),
    ("高醫", "高雄醫學大學"),
    ("中國醫", "中國醫藥大學"),
    ("中山醫", "中山醫學大學"),
    ("北醫", "臺北醫學大學"),
];

static BUILTIN_TABLE: OnceLock<AliasTable> = OnceLock::new();

/// Immutable alias map with a precomputed longest-first key order.
#[derive(Clone, Debug)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
    /// Indices into `entries`, longest key first (stable on ties).
    by_len: Vec<usize>,
}

impl AliasTable {
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();

        let mut by_len: Vec<usize> = (0..entries.len()).collect();
        by_len.sort_by_key(|&i| std::cmp::Reverse(entries[i].0.chars().count()));

        Self { entries, by_len }
    }

    /// The shared built-in table.
    pub fn builtin() -> &'static AliasTable {
        BUILTIN_TABLE.get_or_init(|| AliasTable::new(BUILTIN.iter().copied()))
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries in expansion order: longest key first.
    pub fn longest_first(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_len.iter().map(|&i| {
            let (k, v) = &self.entries[i];
            (k.as_str(), v.as_str())
        })
    }

    /// Rewrite every key occurrence with its expansion, longest key first.
    /// Each replacement runs on the output of the previous ones.
    pub fn expand(&self, query: &str) -> String {
        let mut out = s!(query);
        for (short, full) in self.longest_first() {
            if out.contains(short) {
                out = out.replace(short, full);
            }
        }
        out
    }
}
