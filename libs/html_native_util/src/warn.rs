//! Printing diagnostics to stderr.

/// Print `W: <message> at "<file>" line <n>` to stderr.
#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "W: ");
        let _ = write!(&mut outp, $formatstr $(,$arg)*);
        let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
        let _ = outp.flush();
    } }
}

/// Compiled-out variant of `warn!`, for switching single call sites
/// off without deleting them.
#[macro_export]
macro_rules! nowarn {
    ($formatstr:expr $(,$arg:expr)*) => {
    }
}

/// Like `warn!`, but only prints if the given `AtomicBool` is set,
/// e.g. `warn_trace!(TRACE, "dropping {name:?}")`. The flag can be
/// changed at runtime via `TRACE.store(true, Ordering::Relaxed)`.
#[macro_export]
macro_rules! warn_trace {
    { $flag:expr, $fmt:expr $(,$arg:expr)* } => {
        if $flag.load(std::sync::atomic::Ordering::Relaxed) {
            $crate::warn!($fmt $(,$arg)*)
        }
    }
}

/// Compiled-out variant of `warn_trace!`.
#[macro_export]
macro_rules! nowarn_trace {
    { $flag:expr, $fmt:expr $(,$arg:expr)* } => {
    }
}
