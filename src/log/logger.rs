use std::{fmt, process, sync::Arc};

/// Exit status used by every fatal call.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Terminates the process with [`FATAL_EXIT_CODE`].
///
/// This is the second phase of a fatal call. Custom composition strategies
/// record through [`Logger::fatal_no_exit`] on all their members first and
/// call this once at the end.
pub fn terminate() -> ! {
    process::exit(FATAL_EXIT_CODE)
}

/// Capability shared by every logger, gated or composite.
///
/// Callers depend only on this trait. Each severity call either renders a
/// line or silently does nothing; none of them report failure.
///
/// # Fatal protocol
///
/// [`fatal`](Self::fatal) is split in two phases: [`fatal_no_exit`](Self::fatal_no_exit)
/// records the message (subject to the logger's own gate), then
/// [`terminate`] ends the process. Composites forward only the first phase
/// to their children, so every sink sees the fatal line before the single
/// exit at the outermost call.
pub trait Logger: Send + Sync {
    fn debug(&self, args: fmt::Arguments<'_>);
    fn info(&self, args: fmt::Arguments<'_>);
    fn warn(&self, args: fmt::Arguments<'_>);
    fn error(&self, args: fmt::Arguments<'_>);

    /// Records a fatal message without terminating.
    fn fatal_no_exit(&self, args: fmt::Arguments<'_>);

    /// Records a fatal message, then exits with status 1.
    ///
    /// The exit happens whatever the threshold is, `NoLog` included.
    fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal_no_exit(args);
        terminate()
    }
}

macro_rules! forward_logger {
    ($($ty:ty),*) => {$(
        impl<L: Logger + ?Sized> Logger for $ty {
            #[inline]
            fn debug(&self, args: fmt::Arguments<'_>) {
                (**self).debug(args)
            }
            #[inline]
            fn info(&self, args: fmt::Arguments<'_>) {
                (**self).info(args)
            }
            #[inline]
            fn warn(&self, args: fmt::Arguments<'_>) {
                (**self).warn(args)
            }
            #[inline]
            fn error(&self, args: fmt::Arguments<'_>) {
                (**self).error(args)
            }
            #[inline]
            fn fatal_no_exit(&self, args: fmt::Arguments<'_>) {
                (**self).fatal_no_exit(args)
            }
            fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
                (**self).fatal(args)
            }
        }
    )*};
}

forward_logger!(&L, Box<L>, Arc<L>);
