//! # Lifo Core
//!
//! The integer stack behind the `lifo` CLI.
//!
//! Unlike `Vec`, which grows amortized and silently, [`DynamicStack`] keeps
//! its committed capacity under the caller's control:
//!
//! - the buffer is created lazily on the first push, at the capacity the
//!   stack was constructed with;
//! - a push against a full buffer fails with [`StackError::Overflow`]
//!   instead of reallocating;
//! - capacity changes only through an explicit [`DynamicStack::grow`] call
//!   with a strictly larger target, and never shrinks.
//!
//! All operations are non-interactive and report outcomes through
//! [`Result`]; the CLI layers the prompt/answer conversation on top.
//!
//! ```rust
//! use lifo_core::DynamicStack;
//!
//! let mut stack = DynamicStack::new(2);
//! stack.push(10)?;
//! stack.push(20)?;
//! assert!(stack.push(30).is_err()); // full: growth needs explicit approval
//! stack.grow(4)?;
//! stack.push(30)?;
//! assert_eq!(stack.pop()?.item, 30);
//! # Ok::<(), lifo_core::StackError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod error;
mod stack;

pub use error::{Result, StackError};
pub use stack::{DynamicStack, Popped};
