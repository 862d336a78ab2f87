use std::num::ParseIntError;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1},
    character::complete::{char, space1},
    combinator::map,
    error::{FromExternalError, ParseError},
    sequence::{preceded, separated_pair, tuple},
    IResult,
};
use util::{parse_nice, parse_unsigned, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdTarget {
    Root,
    Up,
    Into(String),
}

/// One line of a shell transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Cd(CdTarget),
    Ls,
    Dir(String),
    File { name: String, size: u64 },
}

impl Line {
    /// Returns `None` for blank lines and for anything the transcript grammar
    /// doesn't recognize.
    pub fn parse(l: &str) -> Option<Self> {
        let l = l.trim();
        if l.is_empty() {
            return None;
        }
        parse_nice(l, parse_line)
    }
}

fn parse_name<'a, E>(i: Span<'a>) -> IResult<Span<'a>, String, E>
where
    E: ParseError<Span<'a>>,
{
    map(take_till1(|c: char| c.is_whitespace()), |s: Span<'a>| {
        s.fragment().to_string()
    })(i)
}

fn parse_cd<'a, E>(i: Span<'a>) -> IResult<Span<'a>, CdTarget, E>
where
    E: ParseError<Span<'a>>,
{
    map(
        preceded(tuple((char('$'), space1, tag("cd"), space1)), parse_name),
        |name| match name.as_str() {
            "/" => CdTarget::Root,
            ".." => CdTarget::Up,
            _ => CdTarget::Into(name),
        },
    )(i)
}

fn parse_line<'a, E>(i: Span<'a>) -> IResult<Span<'a>, Line, E>
where
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, ParseIntError>,
{
    alt((
        map(parse_cd, Line::Cd),
        map(tuple((char('$'), space1, tag("ls"))), |_| Line::Ls),
        map(preceded(tuple((tag("dir"), space1)), parse_name), Line::Dir),
        map(
            separated_pair(parse_unsigned::<u64, _>, space1, parse_name),
            |(size, name)| Line::File { name, size },
        ),
    ))(i)
}
