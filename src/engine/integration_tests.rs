// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Integration tests for the logger fanning out to real destinations
#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::thread;

    use crate::destinations::MemoryDestination;
    use crate::engine::Logger;
    use crate::model::{Context, Level, Location};
    use crate::traits::Destination;

    fn funnel_logger() -> Logger {
        Logger::with_identifier("💸", "com.bunny.payment")
    }

    fn capture(logger: &Logger, level: Level, format: &str) -> Arc<MemoryDestination> {
        let dest = Arc::new(
            MemoryDestination::new(logger.identification().clone(), level)
                .expect("Failed to create memory destination"),
        );
        dest.core().set_format(format);
        logger.add_destination(dest.clone());
        dest
    }

    #[test]
    fn test_payment_funnel_contexts() {
        let logger = funnel_logger();
        let all = capture(&logger, Level::Verbose, "$X $L $M");

        let payment = Context::custom("Payment 💸", true);
        let paypal = Context::custom("Paypal 💰", true);
        let card = Context::custom("CB 💳", false);

        log_info!(logger, payment, "start");
        log_warning!(logger, paypal, "slow gateway");
        log_error!(logger, card, "never seen");
        log_error!(logger, payment, "declined {}", 402);

        assert_eq!(
            all.lines(),
            vec![
                "Payment 💸 INFO start",
                "Paypal 💰 WARNING slow gateway",
                "Payment 💸 ERROR declined 402",
            ]
        );
    }

    #[test]
    fn test_mixed_sync_and_async_destinations() {
        let logger = funnel_logger();
        let sync_dest = capture(&logger, Level::Verbose, "$M");
        sync_dest.core().set_asynchronous(false);
        let async_dest = capture(&logger, Level::Info, "$L|$M");

        let ctx = Context::app();
        for i in 0..50 {
            let level = Level::ALL[i % Level::ALL.len()];
            logger.custom(level, || format!("line {}", i), &ctx, crate::location!());
        }
        logger.flush();

        let sync_lines = sync_dest.lines();
        assert_eq!(sync_lines.len(), 50);
        assert_eq!(sync_lines[0], "line 0");
        assert_eq!(sync_lines[49], "line 49");

        // Info, Warning and Error out of every five levels.
        let async_lines = async_dest.lines();
        assert_eq!(async_lines.len(), 30);
        assert_eq!(async_lines[0], "INFO|line 2");
    }

    #[test]
    fn test_concurrent_callers_never_interleave() {
        let logger = Arc::new(funnel_logger());
        let dest = capture(&logger, Level::Verbose, "$T:$M");

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let logger = Arc::clone(&logger);
                thread::Builder::new()
                    .name(format!("caller-{}", worker))
                    .spawn(move || {
                        let ctx = Context::service();
                        for i in 0..25 {
                            logger.info(|| format!("{}", i), &ctx, crate::location!());
                        }
                    })
                    .unwrap()
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = dest.lines();
        assert_eq!(lines.len(), 100);
        for worker in 0..4 {
            let prefix = format!("caller-{}:", worker);
            let own: Vec<u32> = lines
                .iter()
                .filter_map(|line| line.strip_prefix(&prefix))
                .map(|n| n.parse().unwrap())
                .collect();
            // Per-caller order is preserved.
            assert_eq!(own, (0..25).collect::<Vec<_>>());
        }
    }

    /// Writes one char at a time, yielding between chars, so any overlap
    /// between two emits would split a line.
    struct CharSink {
        core: crate::destinations::DestinationCore,
        buffer: Arc<Mutex<String>>,
    }

    impl Destination for CharSink {
        fn core(&self) -> &crate::destinations::DestinationCore {
            &self.core
        }

        fn emit(&self, line: &str, _event: &crate::model::LogEvent) {
            for ch in line.chars().chain(std::iter::once('\n')) {
                self.buffer.lock().unwrap().push(ch);
                thread::yield_now();
            }
        }

        fn name(&self) -> &'static str {
            "chars"
        }
    }

    #[test]
    fn test_concurrent_callers_on_sync_destination_emit_whole_lines() {
        let logger = Arc::new(funnel_logger());
        let buffer = Arc::new(Mutex::new(String::new()));
        let sink = Arc::new(CharSink {
            core: crate::destinations::DestinationCore::new(
                "chars",
                logger.identification().clone(),
                Level::Verbose,
            )
            .unwrap(),
            buffer: Arc::clone(&buffer),
        });
        sink.core().set_format("$T:msg-$M");
        sink.core().set_asynchronous(false);
        logger.add_destination(sink);

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let logger = Arc::clone(&logger);
                thread::Builder::new()
                    .name(format!("t{}", worker))
                    .spawn(move || {
                        let ctx = Context::custom("Payment 💸", true);
                        for i in 0..50 {
                            logger.info(|| format!("{:03}", i), &ctx, crate::location!());
                        }
                    })
                    .unwrap()
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Every call was synchronous, so nothing is left on the queue.
        let text = buffer.lock().unwrap().clone();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 200);

        for worker in 0..4 {
            let prefix = format!("t{}:msg-", worker);
            let own: Vec<u32> = lines
                .iter()
                .filter_map(|line| line.strip_prefix(&prefix))
                .map(|n| {
                    assert_eq!(n.len(), 3, "split line: {:?}", n);
                    n.parse().unwrap()
                })
                .collect();
            assert_eq!(own, (0..50).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_logging_from_inside_a_sink_does_not_deadlock() {
        struct Echo {
            core: crate::destinations::DestinationCore,
            logger: Arc<Logger>,
            seen: Arc<MemoryDestination>,
        }

        impl Destination for Echo {
            fn core(&self) -> &crate::destinations::DestinationCore {
                &self.core
            }

            fn emit(&self, line: &str, _event: &crate::model::LogEvent) {
                // Re-enters the logger while the dispatch is in flight.
                self.logger.debug(
                    || format!("echo {}", line),
                    &Context::app(),
                    Location::new("echo.rs", "emit", 1),
                );
            }

            fn name(&self) -> &'static str {
                "echo"
            }
        }

        let logger = Arc::new(funnel_logger());
        let seen = capture(&logger, Level::Debug, "$M");
        seen.core().set_min_level(Level::Debug);

        let echo = Arc::new(Echo {
            core: crate::destinations::DestinationCore::new(
                "echo",
                logger.identification().clone(),
                Level::Error,
            )
            .unwrap(),
            logger: Arc::clone(&logger),
            seen: Arc::clone(&seen),
        });
        echo.core().set_format("$M");
        echo.core().set_asynchronous(false);
        logger.add_destination(echo.clone());

        logger.error(|| "boom", &Context::app(), crate::location!());
        logger.flush();

        let mut lines = echo.seen.lines();
        lines.sort();
        assert_eq!(lines, vec!["boom", "echo boom"]);
    }

    #[test]
    fn test_removed_destination_stops_receiving() {
        let logger = funnel_logger();
        let kept = capture(&logger, Level::Verbose, "$M");
        let removed = capture(&logger, Level::Verbose, "$M");

        let ctx = Context::routing();
        logger.info(|| "before", &ctx, crate::location!());
        assert!(logger.remove_destination(&removed.id()));
        logger.info(|| "after", &ctx, crate::location!());

        assert_eq!(kept.lines(), vec!["before", "after"]);
        assert_eq!(removed.lines(), vec!["before"]);
    }
}
