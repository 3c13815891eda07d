// Logging goes through `tracing` under the "axial_scroller" target and compiles away without the
// `tracing` feature.

#[cfg(feature = "tracing")]
macro_rules! log_event {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "axial_scroller", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_event {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! vtrace {
    ($($tt:tt)*) => { log_event!(trace, $($tt)*) };
}

macro_rules! vdebug {
    ($($tt:tt)*) => { log_event!(debug, $($tt)*) };
}

macro_rules! vwarn {
    ($($tt:tt)*) => { log_event!(warn, $($tt)*) };
}
