//! Process-wide trace instances.
//!
//! Init/teardown ordering: the embedder calls `TRACE.init()` once during
//! startup, before any task that logs is created, and `TRACE.deinit()` (if
//! ever) only after those tasks are gone. Logging entry points themselves
//! may be called from any task at any time.

use crate::channel::UpChannel;
use crate::trace::Trace;

/// Up channel 0: the trace facility's transport.
///
/// Reader side belongs to the debug probe or the UART drain task.
pub static CHANNEL0: UpChannel = UpChannel::new();

/// The process-wide trace facility, bound to [`CHANNEL0`].
pub static TRACE: Trace<'static> = Trace::new(&CHANNEL0);
