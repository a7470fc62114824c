//! Terminal teardown for the dashboard.

use std::io::{self, Write};

use crossterm::{
    terminal::{disable_raw_mode, LeaveAlternateScreen},
    ExecutableCommand,
};

/// Leave raw mode and the alternate screen.
///
/// Both steps always run; the first failure is returned.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = out.execute(LeaveAlternateScreen).map(|_| ());
    raw.and(screen)
}
