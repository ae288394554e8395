// tests/common/mod.rs
#![allow(dead_code)]

use cutoff_lookup::loader::build_dataset;
use cutoff_lookup::record::{Columns, Dataset, Record};

pub const FIXTURE: &str = include_str!("../fixtures/cutoffs.csv");

pub fn fixture() -> Dataset {
    build_dataset(FIXTURE).expect("fixture parses")
}

pub fn rec(year: &str, code: &str, school: &str, program: &str) -> Record {
    Record {
        year: year.into(),
        code: code.into(),
        school: school.into(),
        program: program.into(),
        ..Record::default()
    }
}

pub fn dataset(records: Vec<Record>) -> Dataset {
    Dataset::new(Columns::default(), records)
}
