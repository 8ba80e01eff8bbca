use std::hint::black_box;
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, trace};

use crate::command::{Command, USAGE};
use crate::fault;
use crate::options::Options;

/// How long `sleep` keeps the process suspended.
pub const SLEEP_DURATION: Duration = Duration::from_secs(5);

/// Run whatever `options` asks for, printing the usage line when it asks for
/// nothing we know about.
///
/// Returns only for `sleep`, `function` and usage. `loop` spins forever and
/// `crash` takes the process down.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<()> {
    match options.command() {
        Some(command) => dispatch(command, out),
        None => {
            debug!(arg = ?options.command, "no recognized command, printing usage");
            writeln!(out, "{}", USAGE.as_str())?;
            out.flush()?;
            Ok(())
        }
    }
}

pub fn dispatch<W: Write>(command: Command, out: &mut W) -> Result<()> {
    trace!(command = command.name(), "dispatching");

    // the marker has to be visible before we block or fault
    writeln!(out, "{}", command.marker())?;
    out.flush()?;

    match command {
        Command::Sleep => sleep(SLEEP_DURATION),
        Command::Loop => busy_loop(),
        Command::Function => test_function(out)?,
        Command::Crash => fault::null_dereference(),
    }

    Ok(())
}

pub fn sleep(duration: Duration) {
    debug!(?duration, "sleeping");
    std::thread::sleep(duration);
}

/// Spin until something outside kills us.
#[inline(never)]
pub fn busy_loop() -> ! {
    let mut c = 0u32;
    let mut d = 0u32;
    let mut e = 0u32;
    loop {
        c = black_box(c.wrapping_add(1));
        d = black_box(d.wrapping_add(2));
        e = black_box(e.wrapping_add(3));
    }
}

/// Breakpoint target. Exported unmangled so `break test_function` resolves.
#[unsafe(no_mangle)]
#[inline(never)]
pub fn test_function(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "*** test_function()")?;
    out.flush()?;
    Ok(())
}
