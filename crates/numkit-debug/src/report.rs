//! Diagnostic output sink and the trap primitive.
//!
//! A diagnostic record carries the source location, the enclosing
//! function, a message kind tag and a free-text payload. Records are
//! written to stdout and flushed before the trap fires, so the message
//! survives even though the process dies immediately afterwards. Each
//! record is also mirrored through the [`log`] facade, the portable
//! counterpart of a debugger output channel; installing a logger is the
//! consumer's choice.

use std::io::{self, Write};

/// Formats one diagnostic record exactly as it appears on the sink.
pub fn render(file: &str, line: u32, function: &str, kind: &str, message: &str) -> String {
    format!("{file}({line}): in function \"{function}\":\n{kind}: {message}\n\n")
}

/// Writes a diagnostic record to stdout, flushes it, and mirrors it to
/// the `log` facade.
///
/// The stdout handle is locked for the whole write so records from
/// concurrent threads do not interleave.
#[cold]
pub fn emit(file: &str, line: u32, function: &str, kind: &str, message: &str) {
    let text = render(file, line, function, kind, message);
    let mut out = io::stdout().lock();
    let _ = out.write_all(text.as_bytes());
    let _ = out.flush();
    log::error!(
        target: "numkit-debug",
        "{file}({line}): in function \"{function}\": {kind}: {message}"
    );
}

/// Halts the process for debugger inspection.
///
/// Raises the abort signal, which debuggers break on. Intended only for
/// interactive debugging of failed checks, never as an error-handling
/// path; the diagnostic record must already be flushed when this runs.
#[cold]
pub fn trap() -> ! {
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use super::render;

    #[test]
    fn record_fields_keep_their_order() {
        let record = render("src/solver.rs", 17, "solver::relax", "assertion failed", "boom");
        assert_eq!(
            record,
            "src/solver.rs(17): in function \"solver::relax\":\nassertion failed: boom\n\n"
        );
    }
}
