// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Call-site capture and lazy logging macros.
//!
//! The `log_*!` macros wrap their format arguments in a closure, so nothing
//! is formatted when the context is disabled.

/// Name of the enclosing function, without its module path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }};
}

/// [`Location`](crate::model::Location) of the macro invocation.
#[macro_export]
macro_rules! location {
    () => {
        $crate::model::Location::new(::std::file!(), $crate::function_name!(), ::std::line!())
    };
}

/// Logs at an explicit level: `log_custom!(logger, Level::Info, ctx, "x = {}", x)`.
#[macro_export]
macro_rules! log_custom {
    ($logger:expr, $level:expr, $context:expr, $($arg:tt)+) => {
        $logger.custom(
            $level,
            || ::std::format!($($arg)+),
            &$context,
            $crate::location!(),
        )
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $context:expr, $($arg:tt)+) => {
        $crate::log_custom!($logger, $crate::model::Level::Verbose, $context, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $context:expr, $($arg:tt)+) => {
        $crate::log_custom!($logger, $crate::model::Level::Debug, $context, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $context:expr, $($arg:tt)+) => {
        $crate::log_custom!($logger, $crate::model::Level::Info, $context, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $context:expr, $($arg:tt)+) => {
        $crate::log_custom!($logger, $crate::model::Level::Warning, $context, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $context:expr, $($arg:tt)+) => {
        $crate::log_custom!($logger, $crate::model::Level::Error, $context, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::destinations::MemoryDestination;
    use crate::engine::Logger;
    use crate::model::{Context, Level};
    use crate::traits::Destination;

    fn process_refund() -> crate::model::Location {
        crate::location!()
    }

    #[test]
    fn test_function_name() {
        fn authorize_card() -> &'static str {
            crate::function_name!()
        }
        assert_eq!(authorize_card(), "authorize_card");
    }

    #[test]
    fn test_function_name_inside_closure() {
        let name = (|| crate::function_name!())();
        assert_eq!(name, "test_function_name_inside_closure");
    }

    #[test]
    fn test_location() {
        let location = process_refund();
        assert_eq!(location.function, "process_refund");
        assert!(location.file.ends_with("macros.rs"));
        assert!(location.line > 0);
    }

    #[test]
    fn test_log_macros_render_call_site() {
        let logger = Logger::with_identifier("💸", "com.bunny.payment");
        let dest = MemoryDestination::new(logger.identification().clone(), Level::Verbose);
        let dest = Arc::new(dest.unwrap());
        dest.core().set_format("$L $F $N: $M");
        logger.add_destination(dest.clone());

        let ctx = Context::model();
        crate::log_verbose!(logger, ctx, "a");
        crate::log_debug!(logger, ctx, "b{}", 1);
        crate::log_info!(logger, ctx, "c");
        crate::log_warning!(logger, ctx, "d");
        crate::log_error!(&logger, &ctx, "e {:>3}", 7);
        crate::log_custom!(logger, Level::Info, ctx, "f");

        let fname = "test_log_macros_render_call_site()";
        assert_eq!(
            dest.lines(),
            vec![
                format!("VERBOSE {} macros: a", fname),
                format!("DEBUG {} macros: b1", fname),
                format!("INFO {} macros: c", fname),
                format!("WARNING {} macros: d", fname),
                format!("ERROR {} macros: e   7", fname),
                format!("INFO {} macros: f", fname),
            ]
        );
    }

    #[test]
    fn test_disabled_context_skips_formatting() {
        struct Loud;
        impl std::fmt::Display for Loud {
            fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted a disabled message");
            }
        }

        let logger = Logger::with_identifier("💸", "");
        let dest = MemoryDestination::new(logger.identification().clone(), Level::Verbose);
        let dest = Arc::new(dest.unwrap());
        logger.add_destination(dest.clone());

        let muted = Context::custom("muted", false);
        crate::log_error!(logger, muted, "{}", Loud);
        assert!(dest.lines().is_empty());
    }
}
