//! Tell whether every item of a sequence is the same as the first.
//!
//! ```
//! use allthesame::IsUniform;
//!
//! assert!("wwww".chars().is_uniform());
//! assert!(!"bad".chars().is_uniform());
//! ```

mod iter;

pub use iter::{all_the_same, try_all_the_same, IsUniform, TryIsUniform};
