//! `envcron-runtime`: the timer-driven dispatch runtime.
//!
//! # Overview
//!
//! The [`Dispatcher`] owns the immutable task list and two kinds of timers:
//!
//! - one detached ticker per `@every` task, firing every interval;
//! - one shared ticker for all calendar tasks, firing 60 seconds after the
//!   runtime starts and every 60 seconds thereafter (not aligned to
//!   clock-minute boundaries).
//!
//! Every firing dispatches matching commands fire-and-forget: the runtime
//! keeps no handle to in-flight executions, enforces no ordering, and lets
//! executions of the same task overlap when they outlive their interval.
//! An optional `max_concurrent` bound can be opted into via config; the
//! default is unbounded.

pub mod engine;
pub mod tasks;

pub use engine::Dispatcher;
pub use tasks::load_tasks;
