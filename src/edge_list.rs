use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{digit1, line_ending, multispace0, space0, space1};
use nom::combinator::{eof, map_res};
use nom::sequence::{pair, preceded, separated_pair, terminated};

use crate::color::VertexId;
use crate::error::{InstanceError, Result};


/**
reads an instance from file, returns (n, starts, ends).

format:
 - first line: `nbNodes nbEdges`
 - then nbEdges lines: `node1 node2` (0-indexed)
*/
pub fn read_from_file(filename:&str) -> Result<(usize, Vec<VertexId>, Vec<VertexId>)> {
    let s = fs::read_to_string(filename)?;
    read_from_str(&s)
}

/// reads an instance from a string, returns (n, starts, ends)
pub fn read_from_str(s:&str) -> Result<(usize, Vec<VertexId>, Vec<VertexId>)> {
    let s1 = s.replace("\r", "");
    let (mut remaining, (n,m)) = read_line(s1.as_str())
        .map_err(|_| InstanceError::MalformedHeader)?;
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    for i in 0..m {
        match read_line(remaining) {
            Ok((tmp,(a,b))) => {
                remaining = tmp;
                starts.push(a);
                ends.push(b);
            },
            Err(_) if remaining.trim().is_empty() => {
                return Err(InstanceError::EdgeCountMismatch { expected:m, found:i });
            },
            Err(_) => return Err(InstanceError::MalformedEdge(i)),
        }
    }
    // only blank lines are allowed after the last edge
    let trailing = remaining.trim();
    if !trailing.is_empty() {
        return Err(InstanceError::EdgeCountMismatch {
            expected: m,
            found: m + trailing.lines().filter(|l| !l.trim().is_empty()).count(),
        });
    }
    Ok((n, starts, ends))
}

/// reads a number
fn read_usize(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads a line containing exactly two numbers separated by spaces (skips blank lines before it)
fn read_line(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(
        multispace0,
        terminated(
            separated_pair(read_usize, space1, read_usize),
            pair(space0, alt((line_ending, eof)))
        )
    )(s)
}

/**
writes a string encoding the coloring (use this to export the solution):
 - first line: `objective 0`
 - second line: color of each vertex
*/
pub fn solution_to_string(objective:usize, colors:&[usize]) -> String {
    let colors_str:Vec<String> = colors.iter().map(|c| c.to_string()).collect();
    format!("{} 0\n{}\n", objective, colors_str.join(" "))
}
