// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod caller;
pub mod logger;
pub mod queue;
#[cfg(test)]
mod integration_tests;

pub use caller::{strip_params, thread_label};
pub use logger::Logger;
pub use queue::SerialQueue;
