// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Caller details captured once per log call.

use std::thread;

/// Label of the calling thread as rendered by `$T`.
///
/// The main thread renders as an empty string. Other threads use their name,
/// or their `ThreadId` when unnamed, which is stable for the thread's life.
pub fn thread_label() -> String {
    let current = thread::current();
    match current.name() {
        Some("main") => String::new(),
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{:?}", current.id()),
    }
}

/// Replaces a function's parameter list with `()`.
///
/// `foo(x:y:)` becomes `foo()` and a bare `foo` becomes `foo()`, so log
/// lines are not cluttered with argument labels.
pub fn strip_params(function: &str) -> String {
    let name = function
        .split_once('(')
        .map_or(function, |(name, _params)| name);
    format!("{}()", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_params() {
        assert_eq!(strip_params("foo(bar:baz:)"), "foo()");
        assert_eq!(strip_params("foo()"), "foo()");
        assert_eq!(strip_params("foo"), "foo()");
        assert_eq!(strip_params(""), "()");
        assert_eq!(strip_params("init(identifier:bundle:)"), "init()");
    }

    #[test]
    fn test_named_thread_label() {
        let label = thread::Builder::new()
            .name("payment-worker".to_string())
            .spawn(thread_label)
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(label, "payment-worker");
    }

    #[test]
    fn test_main_thread_label_is_empty() {
        let label = thread::Builder::new()
            .name("main".to_string())
            .spawn(thread_label)
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(label, "");
    }

    #[test]
    fn test_unnamed_thread_label_is_stable() {
        let (first, second) = thread::spawn(|| (thread_label(), thread_label()))
            .join()
            .unwrap();
        assert!(first.starts_with("ThreadId("));
        assert_eq!(first, second);
    }
}
