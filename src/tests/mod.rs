//! Unit tests for the crate's modules.

use criterion as _;
use proptest as _;

mod term;
mod validate;
