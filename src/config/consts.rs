// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default output pattern: local time, colored level, module identity and
/// context, source position, then the message.
pub const DEFAULT_FORMAT: &str = "$D%H:%M:%S%.3f$d $C$L [$i-$X]$c $N.$F:$l - $M";
/// Output pattern of the tracing bridge; the subscriber adds its own timestamp.
pub const TRACING_FORMAT: &str = "$C$L $c $N.$F:$l - $M";
/// Prefix of every destination queue worker thread name.
pub const WORKER_THREAD_PREFIX: &str = "loghive-";
