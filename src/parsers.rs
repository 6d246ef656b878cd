use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, take_till, take_while_m_n},
    character::complete::{char, multispace0},
    combinator::all_consuming,
    multi::many0,
    sequence::{delimited, preceded, terminated},
};

/// Number of digits in a 64-bit Steam ID as it appears in `loginusers.vdf`
pub const STEAM_ID_LEN: usize = 17;

pub fn parse_between_double_quotes(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), is_not("\""), char('"')).parse(input)
}

/// Unlike `is_not`, this also succeeds when the input already starts with a double quote
pub fn parse_not_double_quote(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '"').parse(input)
}

/// Matches a line consisting only of a double quoted, 17 digit Steam ID, e.g. `"76561198000000000"`
pub fn parse_steam_id_line(line: &str) -> IResult<&str, &str> {
    all_consuming(delimited(
        char('"'),
        take_while_m_n(STEAM_ID_LEN, STEAM_ID_LEN, |c: char| c.is_ascii_digit()),
        char('"'),
    ))
    .parse(line)
}

/// Collects every non-empty, double quoted token of a line, in order
pub fn parse_quoted_tokens(line: &str) -> IResult<&str, Vec<&str>> {
    many0(preceded(parse_not_double_quote, parse_between_double_quotes)).parse(line)
}

/// Splits a launch options string into separate arguments.
///
/// Arguments are separated by whitespace, and double quotes group an argument containing spaces.
/// Fails on an unterminated quote.
pub fn parse_launch_arguments(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(terminated(
        many0(preceded(
            multispace0,
            alt((parse_between_double_quotes, is_not(" \t\r\n\""))),
        )),
        multispace0,
    ))
    .parse(input)
}
