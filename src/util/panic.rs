/// Runs a block, asserting that it panics. With `message = ...` the panic payload must also
/// contain the provided text, which checks that `throw` forwards the error's display message.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
    };
    ($run:block, message = $expected:literal, $msg:literal) => {{
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run))
            .expect_err($msg);
        let text = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(text.contains($expected), "unexpected panic message: {text:?}");
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
