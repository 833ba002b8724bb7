//! Draw-script parsing and replay.
//!
//! Format: one command per line. Blank lines and `#` comments are skipped.
//!
//! ```text
//! add x1 y1 x2 y2   # draw a stroke between two snapped points
//! undo              # remove the most recent stroke piece
//! reset             # back to the bare square
//! ```

use anyhow::{bail, Context, Result};
use triarc::{ArrangementEngine, Point, Segment};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Add(Segment),
    Undo,
    Reset,
}

pub fn parse(text: &str) -> Result<Vec<Command>> {
    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = idx + 1;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("add") => {
                let x1 = coord(&mut parts, lineno)?;
                let y1 = coord(&mut parts, lineno)?;
                let x2 = coord(&mut parts, lineno)?;
                let y2 = coord(&mut parts, lineno)?;
                let seg = Segment::new(Point::new(x1, y1), Point::new(x2, y2));
                if seg.is_degenerate() {
                    bail!("line {lineno}: zero-length stroke");
                }
                out.push(Command::Add(seg));
            }
            Some("undo") => out.push(Command::Undo),
            Some("reset") => out.push(Command::Reset),
            Some(other) => bail!("line {lineno}: unknown command {other:?}"),
            None => unreachable!("blank lines are skipped"),
        }
    }
    Ok(out)
}

fn coord<'a>(parts: &mut impl Iterator<Item = &'a str>, lineno: usize) -> Result<i64> {
    let token = parts
        .next()
        .with_context(|| format!("line {lineno}: add needs four coordinates"))?;
    token
        .parse()
        .with_context(|| format!("line {lineno}: bad coordinate {token:?}"))
}

pub fn replay(engine: &mut ArrangementEngine, commands: &[Command]) {
    for c in commands {
        match c {
            Command::Add(seg) => engine.add_segment(*seg),
            Command::Undo => {
                engine.undo_last();
            }
            Command::Reset => engine.reset(),
        }
    }
}
