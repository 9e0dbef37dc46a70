//! Capture callback implementations and the factories sessions use to get them.
//!
//! ```text
//! create_no_op_callback()        ──► CaptureCallbackHandle::NoOp
//! create_combo_callback([a, b])  ──► CaptureCallbackHandle::Concrete(ComboCallback[a, b])
//! combo_callback![a, b]          ──► same as above
//! ```

pub mod combo;
pub mod handle;
pub mod logging;
pub mod noop;
pub mod recording;

use std::sync::Arc;

use combo::ComboCallback;
use handle::CaptureCallbackHandle;

/// Returns a callback that ignores every event.
pub fn create_no_op_callback() -> CaptureCallbackHandle {
    CaptureCallbackHandle::NoOp
}

/// Returns a callback that forwards each event to `callbacks`, in order.
///
/// No-op handles are dropped. The result is always a combo, even when nothing
/// is left to call; it then behaves like [`create_no_op_callback`].
pub fn create_combo_callback<I>(callbacks: I) -> CaptureCallbackHandle
where
    I: IntoIterator,
    I::Item: Into<CaptureCallbackHandle>,
{
    CaptureCallbackHandle::Concrete(Arc::new(ComboCallback::new(callbacks)))
}

/// Variadic form of [`create_combo_callback`].
///
/// ```
/// use capture_callback_core::{combo_callback, create_no_op_callback, LoggingCallback};
///
/// let logger = LoggingCallback::with_defaults();
/// let callback = combo_callback![create_no_op_callback(), logger.into_handle()];
/// assert!(!callback.is_no_op());
/// ```
#[macro_export]
macro_rules! combo_callback {
    () => {
        $crate::create_combo_callback(::std::iter::empty::<$crate::CaptureCallbackHandle>())
    };
    ($($callback:expr),+ $(,)?) => {
        $crate::create_combo_callback([$($crate::CaptureCallbackHandle::from($callback)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::events::{CaptureEvent, CaptureEventKind};
    use crate::test_support::{completed, every_event, started, CallLog, TracingCallback};
    use crate::traits::capture_callback::CaptureCallback;
    use crate::CallbackError;

    /// Dispatches every event kind and collects the call log after each one.
    fn trace_all(callback: &CaptureCallbackHandle, log: &CallLog) -> Vec<Vec<String>> {
        every_event()
            .iter()
            .map(|event: &CaptureEvent| {
                log.clear();
                event.dispatch_to(callback).unwrap();
                log.entries()
            })
            .collect()
    }

    #[test]
    fn no_op_factory_returns_no_op_variant() {
        let callback = create_no_op_callback();
        assert!(callback.is_no_op());
        for event in every_event() {
            assert_eq!(event.dispatch_to(&callback), Ok(()));
        }
    }

    #[test]
    fn combo_is_never_the_no_op_variant() {
        let empty = create_combo_callback(Vec::<CaptureCallbackHandle>::new());
        let all_no_op = create_combo_callback([create_no_op_callback(), create_no_op_callback()]);

        assert!(!empty.is_no_op());
        assert!(!all_no_op.is_no_op());
        for event in every_event() {
            assert_eq!(event.dispatch_to(&empty), Ok(()));
            assert_eq!(event.dispatch_to(&all_no_op), Ok(()));
        }
    }

    #[test]
    fn interleaved_no_ops_change_nothing() {
        let log = CallLog::default();
        let a = CaptureCallbackHandle::concrete(TracingCallback::new("a", &log));
        let b = CaptureCallbackHandle::concrete(TracingCallback::new("b", &log));

        let with_no_ops = create_combo_callback([
            create_no_op_callback(),
            a.clone(),
            create_no_op_callback(),
            b.clone(),
        ]);
        let plain = create_combo_callback([a, b]);

        assert_eq!(trace_all(&with_no_ops, &log), trace_all(&plain, &log));
    }

    #[test]
    fn registration_order_is_call_order() {
        let log = CallLog::default();
        let a = CaptureCallbackHandle::concrete(TracingCallback::new("a", &log));
        let b = CaptureCallbackHandle::concrete(TracingCallback::new("b", &log));

        create_combo_callback([a.clone(), b.clone()])
            .on_capture_started(&started(1))
            .unwrap();
        assert_eq!(log.entries(), vec!["a.started", "b.started"]);

        log.clear();
        create_combo_callback([b, a])
            .on_capture_started(&started(1))
            .unwrap();
        assert_eq!(log.entries(), vec!["b.started", "a.started"]);
    }

    #[test]
    fn failure_skips_later_callbacks() {
        let log = CallLog::default();
        let a = CaptureCallbackHandle::concrete(TracingCallback::new("a", &log));
        let b_fail = CaptureCallbackHandle::concrete(
            TracingCallback::new("b", &log).failing_on(CaptureEventKind::Completed),
        );
        let c = CaptureCallbackHandle::concrete(TracingCallback::new("c", &log));

        let result = create_combo_callback([a, b_fail, c]).on_capture_completed(&completed(3));

        assert_eq!(
            result,
            Err(CallbackError::handler_failed("b", "completed rejected"))
        );
        assert_eq!(log.entries(), vec!["a.completed", "b.completed"]);
    }

    #[test]
    fn duplicates_are_called_each_time() {
        let log = CallLog::default();
        let a = CaptureCallbackHandle::concrete(TracingCallback::new("a", &log));
        let combo = create_combo_callback([a.clone(), a]);

        for (event, calls) in every_event().iter().zip(trace_all(&combo, &log)) {
            let expected = format!("a.{}", event.kind().name());
            assert_eq!(calls, vec![expected.clone(), expected]);
        }
    }

    #[test]
    fn macro_matches_sequence_form() {
        let log = CallLog::default();
        let a = CaptureCallbackHandle::concrete(TracingCallback::new("a", &log));
        let b = CaptureCallbackHandle::concrete(TracingCallback::new("b", &log));

        let variadic = combo_callback![a.clone(), b.clone()];
        let sequence = create_combo_callback(vec![a, b]);

        assert_eq!(trace_all(&variadic, &log), trace_all(&sequence, &log));
    }

    #[test]
    fn macro_accepts_arcs_and_nothing() {
        let log = CallLog::default();
        let tracer = Arc::new(TracingCallback::new("a", &log));

        combo_callback![tracer, create_no_op_callback()]
            .on_capture_started(&started(5))
            .unwrap();
        assert_eq!(log.entries(), vec!["a.started"]);

        let empty = combo_callback![];
        assert_eq!(empty.on_capture_started(&started(5)), Ok(()));
    }
}
