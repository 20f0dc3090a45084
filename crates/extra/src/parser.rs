//! A small text format for polygons with holes.
//!
//! # Syntax
//!
//! A polygon is a sequence of rings separated by `;`. The first ring is the
//! outer contour, the other ones are holes. Each ring is a sequence of `x y`
//! coordinate pairs. Commas and whitespace (including new lines) are both
//! accepted as separators, and a trailing `;` is allowed.
//!
//! ```text
//! 0,0 10,0 10,10 0,10;
//! 2,4 2,6 4,6 4,4
//! ```

use crate::math::{point, Point};

use core::fmt;

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Ring #{ring} has an odd number of coordinates.")]
    MissingCoordinate { ring: usize, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Ring #{ring} is empty.")]
    EmptyRing { ring: usize, line: i32, column: i32 },
    #[error("Expected at least one ring.")]
    MissingContour,
}

/// The rings of a polygon with holes, as read by [`parse_polygon`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedPolygon {
    pub contour: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

impl ParsedPolygon {
    /// Total number of points, holes included.
    pub fn num_points(&self) -> usize {
        self.contour.len() + self.holes.iter().map(Vec::len).sum::<usize>()
    }

    /// All points in a single table: the contour first, then each hole.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.num_points());
        points.extend_from_slice(&self.contour);
        for hole in &self.holes {
            points.extend_from_slice(hole);
        }

        points
    }

    pub fn hole_lengths(&self) -> Vec<usize> {
        self.holes.iter().map(Vec::len).collect()
    }
}

/// Writes the polygon back in the syntax accepted by [`parse_polygon`].
impl fmt::Display for ParsedPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ring(f, &self.contour)?;
        for hole in &self.holes {
            f.write_str(";\n")?;
            write_ring(f, hole)?;
        }

        Ok(())
    }
}

fn write_ring(f: &mut fmt::Formatter<'_>, ring: &[Point]) -> fmt::Result {
    for (i, p) in ring.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{},{}", p.x, p.y)?;
    }

    Ok(())
}

// A buffered iterator of characters keeping track of line and column.
pub struct Source<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<Iter: Iterator<Item = char>> Source<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let line = if current == '\n' { 1 } else { 0 };

        Source {
            current,
            finished,
            src,
            line,
            col: 0,
        }
    }

    fn skip_separators(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }
}

/// A reusable parser for the polygon syntax.
#[derive(Debug, Default)]
pub struct PolygonParser {
    float_buffer: String,
    coordinates: Vec<f32>,
}

impl PolygonParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<Iter>(&mut self, src: &mut Source<Iter>) -> Result<ParsedPolygon, ParseError>
    where
        Iter: Iterator<Item = char>,
    {
        let mut rings: Vec<Vec<Point>> = Vec::new();

        loop {
            src.skip_separators();
            if src.finished {
                break;
            }

            let ring = rings.len();
            let (line, column) = (src.line, src.col);

            self.coordinates.clear();
            while !src.finished && src.current != ';' {
                let value = self.parse_number(src)?;
                self.coordinates.push(value);
                src.skip_separators();
            }

            if self.coordinates.is_empty() {
                return Err(ParseError::EmptyRing { ring, line, column });
            }
            if self.coordinates.len() % 2 != 0 {
                return Err(ParseError::MissingCoordinate {
                    ring,
                    line: src.line,
                    column: src.col,
                });
            }

            rings.push(
                self.coordinates
                    .chunks_exact(2)
                    .map(|xy| point(xy[0], xy[1]))
                    .collect(),
            );

            if src.current == ';' {
                src.advance_one();
            }
        }

        let mut rings = rings.into_iter();
        let contour = rings.next().ok_or(ParseError::MissingContour)?;

        Ok(ParsedPolygon {
            contour,
            holes: rings.collect(),
        })
    }

    fn parse_number(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<f32, ParseError> {
        self.float_buffer.clear();

        let line = src.line;
        let column = src.col;

        if src.current == '-' {
            self.float_buffer.push('-');
            src.advance_one();
        }

        while src.current.is_numeric() {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        if src.current == '.' {
            self.float_buffer.push('.');
            src.advance_one();

            while src.current.is_numeric() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        if src.current == 'e' || src.current == 'E' {
            self.float_buffer.push(src.current);
            src.advance_one();

            if src.current == '-' {
                self.float_buffer.push('-');
                src.advance_one();
            }

            while src.current.is_numeric() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        if self.float_buffer.is_empty() && !src.finished {
            // Report the offending character.
            self.float_buffer.push(src.current);
        }

        match self.float_buffer.parse::<f32>() {
            Ok(val) => Ok(val),
            Err(_) => Err(ParseError::Number {
                src: std::mem::take(&mut self.float_buffer),
                line,
                column,
            }),
        }
    }
}

/// Parses a polygon with holes from the syntax described in the module
/// documentation.
pub fn parse_polygon(src: &str) -> Result<ParsedPolygon, ParseError> {
    PolygonParser::new().parse(&mut Source::new(src.chars()))
}

#[test]
fn square_with_hole() {
    let polygon = parse_polygon("0,0 10,0 10,10 0,10;\n 2,4 2,6 4,6 4,4;").unwrap();

    assert_eq!(
        polygon.contour,
        vec![
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0)
        ]
    );
    assert_eq!(polygon.holes.len(), 1);
    assert_eq!(polygon.holes[0][3], point(4.0, 4.0));
    assert_eq!(polygon.num_points(), 8);
    assert_eq!(polygon.hole_lengths(), vec![4]);
    assert_eq!(polygon.points()[4], point(2.0, 4.0));
}

#[test]
fn separators_and_numbers() {
    let polygon = parse_polygon("  -1.5 2e1\n3.25,-4\t5 6  ").unwrap();
    assert_eq!(
        polygon.contour,
        vec![point(-1.5, 20.0), point(3.25, -4.0), point(5.0, 6.0)]
    );
    assert!(polygon.holes.is_empty());
}

#[test]
fn display_round_trip() {
    let src = "0,0 10,0 10,10 0,10;\n2,4 2,6 4,6 4,4;\n6.5,5 6.5,7 8,7";
    let polygon = parse_polygon(src).unwrap();
    assert_eq!(polygon.to_string(), src);
    assert_eq!(parse_polygon(&polygon.to_string()), Ok(polygon));
}

#[test]
fn errors() {
    assert_eq!(parse_polygon(""), Err(ParseError::MissingContour));
    assert_eq!(parse_polygon("  \n "), Err(ParseError::MissingContour));

    match parse_polygon("0 0 1 0 0 1;;") {
        Err(ParseError::EmptyRing { ring: 1, .. }) => {}
        other => panic!("{:?}", other),
    }

    match parse_polygon("0 0 1 0 0 1 3") {
        Err(ParseError::MissingCoordinate { ring: 0, .. }) => {}
        other => panic!("{:?}", other),
    }

    assert_eq!(
        parse_polygon("0 0 1 0\n0 x"),
        Err(ParseError::Number {
            src: "x".to_string(),
            line: 1,
            column: 2,
        })
    );
}
