// src/cli.rs
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::config::consts::LOAD_FAILED_MSG;
use crate::config::options::AppOptions;
use crate::loader::{self, SheetCache, Source};
use crate::matcher;
use crate::progress::Progress;
use crate::render;

pub struct CliArgs {
    pub options: AppOptions,
    pub query: Option<String>,
}

/// Status lines go to stderr so stdout stays just results.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, what: &str) { eprintln!("{what}"); }
    fn finish(&mut self, ok: bool) {
        if !ok { eprintln!("{LOAD_FAILED_MSG}"); }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.options.log {
        crate::log::enable();
    }
    logf!("CLI: source={} ttl={:?}", args.options.source.describe(), args.options.source.ttl);

    let src = loader::source_for(&args.options.source);
    let mut cache = SheetCache::new(args.options.source.ttl);
    let stdout = io::stdout();

    if let Some(q) = &args.query {
        return run_query(&mut cache, src.as_ref(), q, &mut stdout.lock());
    }

    // Interactive: one query per line. Data refreshes between queries once the TTL lapses.
    let stdin = io::stdin();
    let mut out = stdout.lock();
    write!(out, "> ")?;
    out.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        // A failed sync ends this query, not the session.
        if let Err(e) = run_query(&mut cache, src.as_ref(), &line, &mut out) {
            eprintln!("Error: {e}");
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

/// Empty queries are skipped before any fetch happens.
pub fn run_query<W: Write>(
    cache: &mut SheetCache,
    src: &dyn Source,
    query: &str,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    if query.trim().is_empty() {
        return Ok(());
    }
    let ds = cache.get(src, &mut StderrProgress)?;
    let res = matcher::search(query, &ds);
    render::write_search(&mut *out, query, &res, &ds.columns)?;
    out.flush()?;
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut query: Option<String> = None;
    let mut sheet: Option<String> = None;
    let mut url: Option<String> = None;
    let mut file: Option<String> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-q" | "--query" => query = Some(args.next().ok_or("Missing value for --query")?),
            "--sheet" => sheet = Some(args.next().ok_or("Missing value for --sheet")?),
            "--url" => url = Some(args.next().ok_or("Missing value for --url")?),
            "--file" => file = Some(args.next().ok_or("Missing value for --file")?),
            "--ttl" => {
                let v: u64 = args.next().ok_or("Missing value for --ttl")?.parse()?;
                options.source.ttl = Duration::from_secs(v);
            }
            "--log" => options.log = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    // Precedence is file > url > sheet, regardless of order.
    match (file, url, sheet) {
        (Some(f), _, _) => options.source.set_file(f),
        (None, Some(u), _) => options.source.set_url(&u),
        (None, None, Some(id)) => options.source.set_sheet_id(&id),
        (None, None, None) => {}
    }

    Ok(CliArgs { options, query })
}
