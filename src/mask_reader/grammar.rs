use nom::{
    bytes::complete::tag,
    character::complete::{char, i32 as int32, i64 as int64, multispace0},
    combinator::map,
    number::complete::double,
    sequence::preceded,
    IResult, Parser,
};

use crate::constants::{PixelId, PolyId, Steradian};

/// Fields of a `polygon` line, before its caps are read.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PolygonLine {
    pub(crate) polyid: PolyId,
    pub(crate) ncap: i32,
    pub(crate) weight: f64,
    pub(crate) pixel: PixelId,
    pub(crate) area: Steradian,
}

/// `<N> polygons`; only the count is significant, whatever follows it is ignored.
pub(crate) fn parse_header_line(input: &str) -> IResult<&str, i64> {
    preceded(multispace0, int64).parse(input)
}

/// `polygon <id> ( <ncap> caps, <weight> weight, <pixel> pixel, <area>`; the rest of the
/// line (usually ` str):`) is ignored.
pub(crate) fn parse_polygon_line(input: &str) -> IResult<&str, PolygonLine> {
    map(
        (
            preceded((tag("polygon"), multispace0), int32),
            preceded((multispace0, char('('), multispace0), int32),
            preceded((multispace0, tag("caps,"), multispace0), double),
            preceded((multispace0, tag("weight,"), multispace0), int32),
            preceded((multispace0, tag("pixel,"), multispace0), double),
        ),
        |(polyid, ncap, weight, pixel, area)| PolygonLine {
            polyid,
            ncap,
            weight,
            pixel,
            area,
        },
    )
    .parse(input)
}

/// `<x0> <x1> <x2> <m>`: the cap axis followed by its signed threshold.
pub(crate) fn parse_cap_line(input: &str) -> IResult<&str, ([f64; 3], f64)> {
    map(
        (
            preceded(multispace0, double),
            preceded(multispace0, double),
            preceded(multispace0, double),
            preceded(multispace0, double),
        ),
        |(x0, x1, x2, m)| ([x0, x1, x2], m),
    )
    .parse(input)
}

/// `<ra> <dec>` in degrees; the rest of the line is left untouched.
pub(crate) fn parse_radec_line(input: &str) -> IResult<&str, (f64, f64)> {
    (preceded(multispace0, double), preceded(multispace0, double)).parse(input)
}

#[cfg(test)]
mod grammar_test {
    use super::*;

    #[test]
    fn test_header_line() {
        assert_eq!(parse_header_line("3 polygons").unwrap().1, 3);
        assert_eq!(parse_header_line("  12\tpolygons extra").unwrap().1, 12);
        assert_eq!(parse_header_line("0 polygons").unwrap().1, 0);
        assert_eq!(parse_header_line("-4 polygons").unwrap().1, -4);
        assert!(parse_header_line("polygons").is_err());
        assert!(parse_header_line("").is_err());
    }

    #[test]
    fn test_polygon_line() {
        let (rest, line) =
            parse_polygon_line("polygon 1234 ( 4 caps, 0.987 weight, 17 pixel, 2.5e-05 str):")
                .unwrap();
        assert_eq!(rest, " str):");
        assert_eq!(
            line,
            PolygonLine {
                polyid: 1234,
                ncap: 4,
                weight: 0.987,
                pixel: 17,
                area: 2.5e-05,
            }
        );

        let (_, line) =
            parse_polygon_line("polygon   7 (1 caps,   1 weight, 0 pixel, 0.1").unwrap();
        assert_eq!(line.polyid, 7);
        assert_eq!(line.ncap, 1);

        let (_, line) = parse_polygon_line("polygon 3 ( 0 caps, 1 weight, 0 pixel, 0.1 str):")
            .unwrap();
        assert_eq!(line.ncap, 0);
    }

    #[test]
    fn test_polygon_line_rejects() {
        assert!(parse_polygon_line("polygon x ( 1 caps, 1 weight, 0 pixel, 0.1").is_err());
        assert!(parse_polygon_line("polygon 1 ( 1 cap, 1 weight, 0 pixel, 0.1").is_err());
        assert!(parse_polygon_line("polygon 1 ( 1 caps, 1 weight, 0 pixel,").is_err());
        assert!(parse_polygon_line("polygon 1 1 caps, 1 weight, 0 pixel, 0.1").is_err());
        assert!(parse_polygon_line("polygon 1 ( 1 caps, heavy weight, 0 pixel, 0.1").is_err());
    }

    #[test]
    fn test_cap_line() {
        let (_, (x, m)) =
            parse_cap_line(" 0.0000000000 -0.7071067812 0.7071067812 -1.2e-3").unwrap();
        assert_eq!(x, [0.0, -0.7071067812, 0.7071067812]);
        assert_eq!(m, -1.2e-3);

        assert!(parse_cap_line("1.0 2.0 bogus 0.5").is_err());
        assert!(parse_cap_line("1.0 2.0 3.0").is_err());
    }

    #[test]
    fn test_radec_line() {
        let (rest, (ra, dec)) = parse_radec_line("185.25 -2.5   galaxy_17").unwrap();
        assert_eq!((ra, dec), (185.25, -2.5));
        assert_eq!(rest, "   galaxy_17");
        assert!(parse_radec_line("185.25").is_err());
    }
}
