use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::str::FromStr;

use crate::error::InputError;
use crate::graph::Graph;
use crate::types::Vertex;

/// Reads a graph from a file.
///
/// One item per line:
/// - `u,v` adds the edge between `u` and `v` (creating them if needed),
/// - a single token adds an isolated vertex,
/// - blank lines and lines starting with `#` are skipped.
///
/// Items are applied in file order through the usual [`Graph`] operations, so duplicate edges
/// and self-loops are ignored rather than reported.
///
/// Example input:
/// ```text
/// # two routes from A to Z
/// A,B
/// B,C
/// C,Z
/// A,X
/// X,Z
/// lonely
/// ```
pub fn from_file<V, P>(path: P) -> Result<Graph<V>, InputError>
where
    V: Vertex + FromStr,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    parse_edge_list(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str<V: Vertex + FromStr>(input: &str) -> Result<Graph<V>, InputError> {
    parse_edge_list(BufReader::new(Cursor::new(input)))
}

fn parse_edge_list<V: Vertex + FromStr, R: BufRead>(reader: R) -> Result<Graph<V>, InputError> {
    let mut graph = Graph::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<_> = line.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [v] => {
                graph.add_vertex(parse_vertex(v, line_no)?);
            }
            [u, v] => {
                let u = parse_vertex(u, line_no)?;
                let v = parse_vertex(v, line_no)?;
                graph.add_edge(u, v);
            }
            _ => return Err(InputError::TooManyFields { line: line_no }),
        }
    }

    Ok(graph)
}

fn parse_vertex<V: FromStr>(token: &str, line: usize) -> Result<V, InputError> {
    if token.is_empty() {
        return Err(InputError::MissingEndpoint { line });
    }
    token.parse().map_err(|_| InputError::InvalidVertex {
        line,
        token: token.to_string(),
    })
}
