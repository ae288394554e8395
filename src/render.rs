// src/render.rs
//
// Plain-text rendering of search results for the terminal.

use std::io::{self, Write};

use crate::matcher::{MatchPass, ProgramGroup, Search};
use crate::record::Columns;
use crate::view::{self, DisplayColumn};

const RULE: &str = "────────────────────────────────────────";

/// Write the whole outcome. `Idle` writes nothing.
pub fn write_search<W: Write>(mut w: W, query: &str, res: &Search, cols: &Columns) -> io::Result<()> {
    match res {
        Search::Idle => Ok(()),
        Search::NoResults => writeln!(w, "{}", view::no_results_message(query)),
        Search::Found { pass, groups } => {
            writeln!(w, "{}", view::found_message(groups.len()))?;
            if *pass == MatchPass::Fallback {
                writeln!(w, "(以原始關鍵字比對)")?;
            }
            let display = view::display_columns(cols);
            for g in groups {
                writeln!(w)?;
                write_group(&mut w, g, &display)?;
            }
            Ok(())
        }
    }
}

/// Heading, caption, then one line per record, latest year first.
pub fn write_group<W: Write>(mut w: W, g: &ProgramGroup, cols: &[DisplayColumn]) -> io::Result<()> {
    writeln!(w, "{}", view::heading(g))?;
    writeln!(w, "{}", view::caption(g))?;
    write_row(&mut w, &view::header_row(cols))?;
    for r in &g.records {
        write_row(&mut w, &view::record_row(cols, r))?;
    }
    writeln!(w, "{RULE}")
}

fn write_row<W: Write>(mut w: W, cells: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in cells {
        if !first { write!(w, " | ")?; } else { first = false; }
        write!(w, "{}", cell)?;
    }
    writeln!(w)
}

/// Render into a String (tests, clipboard).
pub fn search_to_string(query: &str, res: &Search, cols: &Columns) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_search(&mut buf, query, res, cols);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
