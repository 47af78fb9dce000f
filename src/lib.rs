#![doc = pretty_readme::docify!("README.md", "https://docs.rs/kismet/latest/kismet/", "./")]
#![cfg_attr(not(any(doc, test)), no_std)]
#![expect(
	clippy::tabs_in_doc_comments,
	reason = "Consistency with source indentation"
)]
#![deny(macro_use_extern_crate, meta_variable_misuse, unit_bindings)]
#![warn(
	explicit_outlives_requirements,
	missing_docs,
	missing_debug_implementations,
	unreachable_pub,
	unused_crate_dependencies,
	unused_qualifications,
	clippy::pedantic,
	clippy::alloc_instead_of_core,
	clippy::allow_attributes_without_reason,
	clippy::dbg_macro,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::if_then_some_else_none,
	clippy::infinite_loop,
	clippy::missing_const_for_fn,
	clippy::missing_docs_in_private_items,
	clippy::panic_in_result_fn,
	clippy::print_stderr,
	clippy::print_stdout,
	clippy::self_named_module_files,
	clippy::semicolon_inside_block,
	clippy::std_instead_of_alloc,
	clippy::std_instead_of_core,
	clippy::str_to_string,
	clippy::unwrap_in_result,
	clippy::unwrap_used
)]

extern crate alloc;

pub mod eval;
pub mod expr;
pub mod quick;
pub mod session;
pub mod term;
pub mod validate;

pub use expr::ExpressionSet;
pub use quick::QuickRoll;
pub use session::BuilderSession;
pub use term::Term;

#[cfg(test)]
mod tests;
