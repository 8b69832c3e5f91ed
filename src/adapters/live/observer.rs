//! Live observer echoing ids to a writer.

use std::io::Write;

use crate::id::UniqueId;
use crate::ports::Observer;

/// Writes one `audit: <id>` line per generated id.
///
/// Stands in for a downstream audit-log publisher. Write failures are logged
/// and dropped so the caller still receives its id.
pub struct AuditLineObserver<W> {
    out: W,
}

impl<W: Write + Send> AuditLineObserver<W> {
    /// Creates an observer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the observer, returning the writer.
    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl AuditLineObserver<std::io::Stderr> {
    /// Creates an observer writing to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> Observer for AuditLineObserver<W> {
    fn id_generated(&mut self, id: &UniqueId) {
        if let Err(e) = writeln!(self.out, "audit: {id}") {
            tracing::warn!(error = %e, %id, "failed to write audit line");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_id() {
        let mut observer = AuditLineObserver::new(Vec::new());
        observer.id_generated(&UniqueId::new(1, 2, 3));
        observer.id_generated(&UniqueId::new(1, 2, 4));
        let text = String::from_utf8(observer.into_inner()).unwrap();
        assert_eq!(text, "audit: 1-2-3\naudit: 1-2-4\n");
    }
}
