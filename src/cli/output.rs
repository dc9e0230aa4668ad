//! User-facing CLI output: inspection listings, check results and errors.

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::DotError;
use crate::graph::AttributedGraph;
use crate::value::AttributeMap;

/// Lists every vertex with its attributes, then every attributed edge.
/// Keys are sorted so the listing is stable.
pub fn write_inspection<W: WriteColor>(out: &mut W, graph: &AttributedGraph) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{} {}", graph.kind(), graph.name())?;
    out.reset()?;

    let vertices = graph.vertices();
    for vertex in &vertices {
        heading(out, &format!(" Vertex {}:", vertex))?;
        match graph.vertex_attributes(vertex) {
            Some(attributes) => write_attributes(out, attributes)?,
            None => writeln!(out, "\t<no attributes>")?,
        }
        writeln!(out)?;
    }

    for vertex in &vertices {
        let mut seen = HashSet::new();
        for target in graph.neighbors(vertex) {
            // duplicate edges share one attribute map
            if !seen.insert(target) {
                continue;
            }
            let Ok(attributes) = graph.get_edge_attributes(vertex, target) else {
                continue;
            };
            heading(out, &format!(" Edge {} -> {}:", vertex, target))?;
            write_attributes(out, attributes)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn heading<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    writeln!(out, "{}", text)?;
    out.reset()
}

fn write_attributes<W: WriteColor>(out: &mut W, attributes: &AttributeMap) -> io::Result<()> {
    let mut keys: Vec<&String> = attributes.keys().collect();
    keys.sort();
    for key in keys {
        writeln!(out, "\t{}: {}", key, attributes[key])?;
    }
    Ok(())
}

pub fn print_inspection(graph: &AttributedGraph) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    write_inspection(&mut stdout, graph)
}

pub fn print_json(graph: &AttributedGraph) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(graph)?);
    Ok(())
}

/// One status line per checked file.
pub fn print_check_result(path: &Path, result: &Result<AttributedGraph, DotError>) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let (color, status) = match result {
        Ok(_) => (Color::Green, "ok"),
        Err(_) => (Color::Red, "FAILED"),
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(stdout, "{:>6}", status);
    let _ = stdout.reset();
    let _ = match result {
        Ok(graph) => writeln!(
            stdout,
            "  {} ({} {}, {} vertices, {} edges)",
            path.display(),
            graph.kind(),
            graph.name(),
            graph.vertices().len(),
            graph.edge_count()
        ),
        Err(_) => writeln!(stdout, "  {}", path.display()),
    };
}

/// Renders a failure with miette's graphical report on stderr.
pub fn print_error(error: DotError) {
    eprintln!("{:?}", miette::Report::new(error));
}
