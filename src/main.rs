// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{Context as _, Result};
use std::env;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use loghive::config::{load_config, LoggerBuilder};
use loghive::{log_custom, Context, Level, Logger};

const TICKS: usize = 10;
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Payment funnel steps, each logging under its own context.
struct PaymentFunnel {
    contexts: [Context; 3],
}

impl PaymentFunnel {
    fn new(lookup: impl Fn(&str) -> Context) -> Self {
        Self {
            contexts: [lookup("Payment 💸"), lookup("Paypal 💰"), lookup("CB 💳")],
        }
    }

    fn step(&self, logger: &Logger, tick: usize) {
        let level = Level::ALL[tick % Level::ALL.len()];
        let context = &self.contexts[tick % self.contexts.len()];
        log_custom!(logger, level, context, "Here a bunny 🐰 (step {})", tick);
    }
}

fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("loghive=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let args: Vec<String> = env::args().collect();
    let (logger, funnel) = match args.get(1) {
        Some(path) => {
            let config = load_config(path).with_context(|| format!("Failed to load {}", path))?;
            let logger = LoggerBuilder::from_config(&config)?;
            let funnel = PaymentFunnel::new(|name| config.context(name));
            (logger, funnel)
        }
        None => {
            let logger = Logger::with_identifier("💸", "com.bunny.payment");
            logger.set_console(true, Level::Verbose)?;
            logger.set_tracing(true, Level::Warning)?;
            (logger, PaymentFunnel::new(|name| Context::custom(name, true)))
        }
    };

    // Stand-in for a remote viewer: count what would have gone over the wire.
    let mut remote = logger
        .set_channel(true, Level::Error)?
        .context("Remote bridge was already configured")?;
    let viewer = tokio::spawn(async move {
        let mut received = 0usize;
        while let Some(record) = remote.recv().await {
            tracing::debug!(domain = %record.domain, "remote: {}", record.line_text);
            received += 1;
        }
        received
    });

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    for tick in 0..TICKS {
        interval.tick().await;
        funnel.step(&logger, tick);
    }

    logger.flush();
    logger.set_channel(false, Level::Error)?;
    drop(logger);

    let received = viewer.await?;
    tracing::info!(received, "Demo finished");
    Ok(())
}
