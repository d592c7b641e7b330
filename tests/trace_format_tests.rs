//! Scalar record format and filtering tests

use rtt_trace::{Level, Trace, UpChannel};

fn drain<const N: usize>(ch: &UpChannel<N>) -> String {
    let mut buf = [0u8; 256];
    let mut out = String::new();
    loop {
        let n = ch.read(&mut buf);
        if n == 0 {
            break;
        }
        out.push_str(core::str::from_utf8(&buf[..n]).unwrap());
    }
    out
}

#[test]
fn test_scalar_record_exact_shape() {
    let ch = UpChannel::<256>::new();
    let trace = Trace::new(&ch);
    trace.init();

    trace.log(Level::Info, format_args!("hello {}", 42));

    // Host port ticks stay at 0 unless a test advances them.
    assert_eq!(drain(&ch), "[00000000] [INFO] hello 42\n");
}

#[test]
fn test_every_level_name_appears_in_record() {
    let ch = UpChannel::<1024>::new();
    let trace = Trace::new(&ch);
    trace.init();

    for rank in 0..Level::COUNT as u8 {
        let level = Level::from_rank(rank);
        trace.log(level, format_args!("x"));
        let out = drain(&ch);
        assert_eq!(out, format!("[00000000] [{}] x\n", level.as_str()));
    }
}

#[test]
fn test_threshold_warning_filters_debug_and_info() {
    let ch = UpChannel::<512>::new();
    let trace = Trace::new(&ch);
    trace.init();
    trace.set_level(Level::Warning);

    trace.log(Level::Debug, format_args!("quiet"));
    trace.log(Level::Info, format_args!("quiet"));
    assert_eq!(ch.pending(), 0);

    trace.log(Level::Error, format_args!("loud"));
    assert_eq!(drain(&ch), "[00000000] [ERROR] loud\n");
}

#[test]
fn test_out_of_range_rank_behaves_as_critical() {
    let ch = UpChannel::<512>::new();
    let trace = Trace::new(&ch);
    trace.init();
    trace.set_level(Level::Critical);

    // Rank 9 does not exist; it clamps to CRITICAL and passes the filter.
    trace.log(Level::from_rank(9), format_args!("msg"));
    let clamped = drain(&ch);

    trace.log(Level::Critical, format_args!("msg"));
    let critical = drain(&ch);

    assert_eq!(clamped, critical);
    assert_eq!(critical, "[00000000] [CRITICAL] msg\n");
}

#[test]
fn test_macros_expand_to_records() {
    let ch = UpChannel::<1024>::new();
    let trace = Trace::new(&ch);
    trace.init();

    rtt_trace::trace_debug!(trace, "d{}", 0);
    rtt_trace::trace_info!(trace, "i{}", 1);
    rtt_trace::trace_warn!(trace, "w{}", 2);
    rtt_trace::trace_error!(trace, "e{}", 3);
    rtt_trace::trace_critical!(trace, "c{}", 4);

    let out = drain(&ch);
    assert_eq!(
        out,
        "[00000000] [DEBUG] d0\n\
         [00000000] [INFO] i1\n\
         [00000000] [WARNING] w2\n\
         [00000000] [ERROR] e3\n\
         [00000000] [CRITICAL] c4\n"
    );
}
