use std::{
    fs,
    io::{self, Read},
    path::Path,
    str::FromStr,
};

use anyhow::{Context, Result};
use miette::{GraphicalReportHandler, GraphicalTheme};
use nom::{
    character::complete::digit1,
    combinator::map_res,
    error::{FromExternalError, ParseError},
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};
use tracing::debug;

// Thanks to FasterThanLime! https://fasterthanli.me/series/advent-of-code-2022/part-11

pub type Span<'a> = LocatedSpan<&'a str>;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input")]
struct BadInput<'a> {
    #[source_code]
    src: &'a str,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: String,
}

/// Parses a run of decimal digits into any unsigned number type.
pub fn parse_unsigned<'a, T, E>(i: Span<'a>) -> IResult<Span<'a>, T, E>
where
    T: FromStr,
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, T::Err>,
{
    map_res(digit1, |i: Span<'a>| T::from_str(i.fragment()))(i)
}

/// Location and description of the error that got furthest into the input.
fn furthest_failure(err: &ErrorTree<Span<'_>>) -> Option<(usize, String)> {
    match err {
        GenericErrorTree::Base { location, kind } => {
            Some((location.location_offset(), kind.to_string()))
        }
        GenericErrorTree::Stack { base, .. } => furthest_failure(base),
        GenericErrorTree::Alt(siblings) => siblings
            .iter()
            .filter_map(|e| furthest_failure(e))
            .max_by_key(|(offset, _)| *offset),
    }
}

pub fn render_bad_input(src: &str, offset: usize, kind: &str) -> String {
    let err = BadInput {
        src,
        bad_bit: miette::SourceSpan::new(offset.into(), 0.into()),
        kind: kind.to_string(),
    };
    let mut s = String::new();
    match GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
        .render_report(&mut s, &err)
    {
        Ok(()) => s,
        Err(_) => format!("{kind} at column {offset}"),
    }
}

/// Runs `parse_fun` over the whole line. On failure the rendered report is
/// logged at debug level and `None` is returned.
pub fn parse_nice<'a, T, F>(l: &'a str, parse_fun: F) -> Option<T>
where
    F: FnMut(Span<'a>) -> IResult<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let line_span = Span::new(l);
    let line: Result<_, ErrorTree<Span>> = final_parser(parse_fun)(line_span);
    match line {
        Ok(line) => Some(line),
        Err(e) => {
            if let Some((offset, kind)) = furthest_failure(&e) {
                debug!("skipping line\n{}", render_bad_input(l, offset, &kind));
            }
            None
        }
    }
}

/// Reads the whole puzzle input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Unable to read input file {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut input)
                .context("Unable to read input from stdin")?;
            Ok(input)
        }
    }
}
