//! # Design Pattern Lessons
//!
//! Runnable lessons for five classic patterns:
//!
//! ## Creational
//! - Abstract Factory (product families chosen by token)
//! - Builder (mutable and copy-on-write outputs from one builder)
//! - Factory (closed enum dispatch)
//! - Factory Method (creator trait, lookup table)
//!
//! ## Behavioral
//! - Observer (registration list, synchronous fan-out)
//!
//! The three factory lessons share [`resolver`]: a token either resolves to a
//! freshly built variant or fails with [`LessonError::UnknownVariant`].
//!
//! Run them with:
//! ```bash
//! cargo run --bin lessons
//! cargo run --bin lessons -- factory observer
//! ```

pub mod config;
pub mod error;
pub mod lessons;
pub mod logging;
pub mod resolver;
pub mod runner;

pub use config::CourseConfig;
pub use error::{LessonError, Result};
pub use lessons::{Lesson, LessonContext, LessonKind};
pub use resolver::{Discriminator, Resolver};
pub use runner::{run_lessons, RunSummary};
