//! Core of the post-build hook.
//!
//! [`ambient`] reads the working directory, the local clock, and the
//! invocation arguments behind the [`ambient::Environment`] and
//! [`ambient::Clock`] traits so tests can pin them. [`report`] turns that
//! snapshot into the four lines the hook prints.
//!
//! ```rust,no_run
//! use postbuild_core::ambient::{BuildContext, SystemClock, SystemEnvironment};
//! use postbuild_core::report::write_report;
//!
//! let ctx = BuildContext::capture(&SystemEnvironment, &SystemClock)?;
//! write_report(&ctx, std::io::stdout().lock())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod ambient;
pub mod report;
