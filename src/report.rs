use std::io::{self, Write};

use crate::sat::SatResult;

/// Prints `sat` and one `<var>: true|false` line per variable in index
/// order, or a lone `unsat`.
pub fn write_result<W: Write>(mut out: W, result: &SatResult) -> io::Result<()> {
    match result {
        SatResult::Sat(model) => {
            writeln!(out, "sat")?;
            for (var, value) in model.iter() {
                writeln!(out, "{}: {}", var, value)?;
            }
        }
        SatResult::Unsat => writeln!(out, "unsat")?,
    }
    Ok(())
}

/// Printed when a step budget ran out before a verdict.
pub fn write_unknown<W: Write>(mut out: W) -> io::Result<()> {
    writeln!(out, "unknown")
}

pub fn render_result(result: &SatResult) -> String {
    let mut buf = Vec::new();
    // writes into a Vec cannot fail
    let _ = write_result(&mut buf, result);
    String::from_utf8_lossy(&buf).into_owned()
}
