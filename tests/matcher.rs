// tests/matcher.rs
//
// Query matching against the fixture sheet.

mod common;

use cutoff_lookup::matcher::{self, group, group_rows, match_rows, AliasTable, MatchPass, QueryMatcher, Search};
use common::{dataset, fixture, rec};

fn codes<'a>(res: &'a Search) -> Vec<&'a str> {
    res.groups().iter().map(|g| g.code).collect()
}

#[test]
fn alias_then_keyword_conjunction() {
    let ds = fixture();
    let res = matcher::search("政大 心理", &ds);

    assert_eq!(res.pass(), Some(MatchPass::Primary));
    assert_eq!(codes(&res), vec!["002152"]);
    for r in &res.groups()[0].records {
        assert!(r.school.contains("政治大學"));
        assert!(r.program.contains("心理"));
    }
}

#[test]
fn tai_variant_is_normalized_before_aliases() {
    let ds = fixture();
    let m = QueryMatcher::default();
    assert_eq!(m.normalize("台大 資工"), "臺大 資工");
    assert_eq!(m.keywords("台大 資工"), vec!["臺灣大學", "資工"]);

    let short = matcher::search("台大 資訊", &ds);
    let full = matcher::search("臺灣大學 資訊", &ds);
    assert_eq!(short, full);
    assert_eq!(codes(&short), vec!["001012", "001232"]);
}

#[test]
fn longer_alias_wins_over_contained_shorter_one() {
    let ds = fixture();
    let res = matcher::search("高師大 數學", &ds);
    assert_eq!(codes(&res), vec!["003052"]);
    assert_eq!(res.groups()[0].school, "國立高雄師範大學");
}

#[test]
fn raw_keywords_rescue_variant_spelled_names() {
    let ds = fixture();
    // 台北海洋 becomes 臺北海洋, which no row contains.
    let res = matcher::search("台北海洋", &ds);
    assert_eq!(res.pass(), Some(MatchPass::Fallback));
    assert_eq!(codes(&res), vec!["007112"]);
}

#[test]
fn raw_keywords_rescue_overlapping_alias_expansion() {
    let ds = fixture();
    let m = QueryMatcher::default();
    // 中山醫 expands, then 中山 fires inside the expansion.
    assert_eq!(m.expand("中山醫"), "中山大學醫學大學");

    let res = matcher::search("中山醫", &ds);
    assert_eq!(res.pass(), Some(MatchPass::Fallback));
    assert_eq!(codes(&res), vec!["004212"]);
}

#[test]
fn short_alias_still_matches_its_own_school() {
    let ds = fixture();
    let res = matcher::search("中山 醫學系", &ds);
    assert_eq!(res.pass(), Some(MatchPass::Primary));
    assert_eq!(codes(&res), vec!["005012"]);
}

#[test]
fn blank_queries_are_idle() {
    let ds = fixture();
    for q in ["", " ", "   ", "\t\n", "\u{3000}"] {
        assert_eq!(matcher::search(q, &ds), Search::Idle, "query {q:?}");
        assert!(matcher::find(q, &ds).is_none());
    }
}

#[test]
fn no_match_is_no_results_not_idle() {
    let ds = fixture();
    assert_eq!(matcher::search("獸醫", &ds), Search::NoResults);
    assert_eq!(matcher::search("臺大 資工", &ds), Search::NoResults);
}

#[test]
fn one_code_across_three_years_is_one_group() {
    let ds = fixture();
    let res = matcher::search("資訊工程", &ds);
    let groups = res.groups();
    assert_eq!(groups.len(), 1);

    let g = &groups[0];
    assert_eq!(g.code, "001012");
    let years: Vec<&str> = g.records.iter().map(|r| r.year.as_str()).collect();
    assert_eq!(years, vec!["114", "113", "112"]);
    assert_eq!(g.programs, vec!["資訊工程學系"]);
    assert_eq!(g.programs_display(), "資訊工程學系");
}

#[test]
fn group_holds_unmatched_rows_of_the_same_code() {
    let ds = fixture();
    // Only the 112 row carries the old name.
    let res = matcher::search("(舊)", &ds);
    let g = &res.groups()[0];

    assert_eq!(g.code, "001232");
    assert_eq!(g.records.len(), 3);
    assert_eq!(g.programs, vec!["資訊管理學系", "資訊管理學系(舊)"]);
    assert_eq!(g.programs_display(), "資訊管理學系 / 資訊管理學系(舊)");
}

#[test]
fn school_name_comes_from_latest_year() {
    let ds = fixture();
    let res = matcher::search("師大 心理", &ds);
    let g = &res.groups()[0];
    assert_eq!(g.code, "006072");
    assert_eq!(g.school, "國立臺灣師範大學");
    assert_eq!(g.records.last().map(|r| r.school.as_str()), Some("臺灣師範大學"));
}

#[test]
fn fallback_runs_iff_primary_is_empty() {
    let ds = fixture();
    let m = QueryMatcher::default();
    let queries = [
        "政大 心理", "台大 資訊", "台北海洋", "中山醫", "獸醫", "心理", "臺灣大學",
        "成大", "醫學系", "數學A",
    ];

    for q in queries {
        let primary = match_rows(&ds, &m.keywords(q));
        let found = m.find(q, &ds).expect("non-blank query");
        let expected = if primary.is_empty() { MatchPass::Fallback } else { MatchPass::Primary };
        assert_eq!(found.pass, expected, "query {q:?}");
        if !primary.is_empty() {
            assert_eq!(found.rows, primary);
        }
    }
}

#[test]
fn groups_share_one_code_and_sort_latest_first() {
    let ds = fixture();
    for q in ["大學", "心理", "醫學系", "台大", "師大"] {
        let res = matcher::search(q, &ds);
        for g in res.groups() {
            assert!(g.records.iter().all(|r| r.code == g.code), "query {q:?}");
            assert!(g.records.windows(2).all(|w| w[0].year >= w[1].year), "query {q:?}");
        }
    }
}

#[test]
fn groups_follow_first_matched_row_order() {
    let ds = fixture();
    let res = matcher::search("心理", &ds);
    assert_eq!(codes(&res), vec!["001052", "002152", "006072"]);
}

#[test]
fn same_query_same_output() {
    let ds = fixture();
    for q in ["政大 心理", "台北海洋", "大學", "獸醫"] {
        assert_eq!(matcher::search(q, &ds), matcher::search(q, &ds));
    }
}

#[test]
fn empty_dataset_reports_no_results() {
    let ds = dataset(Vec::new());
    assert_eq!(matcher::search("政大", &ds), Search::NoResults);
    assert_eq!(matcher::search("  ", &ds), Search::Idle);
}

#[test]
fn matching_is_case_sensitive_and_literal() {
    let ds = dataset(vec![
        rec("114", "1", "Test University", "Data Science"),
        rec("114", "2", "Test University", "Art.History"),
    ]);
    assert_eq!(matcher::search("data", &ds), Search::NoResults);
    assert_eq!(codes(&matcher::search("Data", &ds)), vec!["1"]);
    // '.' is a literal dot, not a wildcard
    assert_eq!(codes(&matcher::search("Art.", &ds)), vec!["2"]);
    assert_eq!(matcher::search("Science.", &ds), Search::NoResults);
}

#[test]
fn keywords_may_span_school_and_program() {
    let ds = dataset(vec![rec("114", "1", "北部大學", "物理系")]);
    // full_text is "北部大學 物理系"; the separating space is part of the corpus
    assert_eq!(codes(&matcher::search("大學 物理", &ds)), vec!["1"]);
    assert_eq!(matcher::search("大學物理", &ds), Search::NoResults);
}

#[test]
fn custom_alias_table() {
    let ds = dataset(vec![rec("114", "9", "範例科技大學", "電機系")]);
    let table = AliasTable::new([("範科", "範例科技大學")]);
    let m = QueryMatcher::new(&table);

    let res = m.search("範科 電機", &ds);
    assert_eq!(res.pass(), Some(MatchPass::Primary));
    assert_eq!(codes(&res), vec!["9"]);

    // The built-in table doesn't know this abbreviation.
    assert_eq!(matcher::search("範科 電機", &ds), Search::NoResults);
}

#[test]
fn builtin_table_has_no_duplicate_keys() {
    let t = AliasTable::builtin();
    let mut keys: Vec<&str> = t.iter().map(|(k, _)| k).collect();
    let n = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), n);
    assert_eq!(t.get("臺大"), Some("臺灣大學"));
    assert_eq!(t.get("台大"), None);
}

#[test]
fn found_matches_carry_their_groups() {
    let ds = fixture();

    let m = matcher::find("資訊工程", &ds).expect("non-blank query");
    assert_eq!(m.rows, vec![0, 1, 2]);
    assert_eq!(m.groups, vec![vec![0, 2, 1]]);

    let m = matcher::find("心理", &ds).expect("non-blank query");
    assert_eq!(m.groups, vec![vec![6], vec![7, 8, 9], vec![14, 15]]);
    assert_eq!(m.resolve(&ds), Search::Found { pass: MatchPass::Primary, groups: group(&ds, &m.rows) });
    assert_eq!(m.resolve(&ds), matcher::search("心理", &ds));
}

#[test]
fn interleaved_codes_bucket_once_each() {
    let ds = dataset(vec![
        rec("112", "A", "甲大學", "物理系"),
        rec("114", "B", "乙大學", "物理系"),
        rec("114", "A", "甲大學", "物理系"),
        rec("113", "B", "乙大學", "化學系"),
    ]);
    let hits = match_rows(&ds, &["物理"]);
    assert_eq!(hits, vec![0, 1, 2]);
    assert_eq!(group_rows(&ds, &hits), vec![vec![2, 0], vec![1, 3]]);
    assert!(group_rows(&ds, &[]).is_empty());

    let m = matcher::find("化學", &ds).expect("non-blank query");
    assert_eq!(m.groups, vec![vec![1, 3]]);
    let res = m.resolve(&ds);
    assert_eq!(res.groups()[0].programs, vec!["物理系", "化學系"]);
}
