//! Shell bodies standing in for the Node comparator, run with `--runtime sh`.
//!
//! The comparator's working directory is the test's work dir, so relative
//! paths such as `images/` match the default config.

/// Exit with `code` and print nothing.
pub(crate) fn exits(code: i32) -> String {
    format!("#!/bin/sh\nexit {}\n", code)
}

/// Write `names` into `images/` and exit 0.
pub(crate) fn writes(names: &[&str]) -> String {
    let mut body = String::from("#!/bin/sh\n");
    for name in names {
        body.push_str(&format!("printf png > \"images/{}\"\n", name));
    }
    body.push_str("exit 0\n");
    body
}

/// Print to both streams and exit with `code`.
pub(crate) fn noisy(stdout: &str, stderr: &str, code: i32) -> String {
    format!("#!/bin/sh\necho '{}'\necho '{}' >&2\nexit {}\n", stdout, stderr, code)
}

/// Leave a marker file in the working directory so tests can tell it ran.
pub(crate) fn marks_run() -> String {
    "#!/bin/sh\ntouch comparator-ran\nexit 0\n".to_string()
}
