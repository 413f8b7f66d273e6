//! A binary-search-tree backed catalog of difficulty-ranked recipes.
//!
//! This crate provides [`RecipeBook`], an in-memory catalog of [`Recipe`]
//! entries keyed and ordered by name, with:
//!
//! - [`add`](RecipeBook::add) / [`remove`](RecipeBook::remove) /
//!   [`find`](RecipeBook::find) - O(height) name-keyed operations
//! - [`mastery_points`](RecipeBook::mastery_points) - how many unmastered,
//!   strictly-easier recipes stand between the cook and mastering an entry
//! - [`balance`](RecipeBook::balance) - rebuild the tree into a
//!   minimal-height shape from its sorted traversal
//! - [`from_reader`](RecipeBook::from_reader) - bulk construction from a
//!   comma-separated row stream
//!
//! # Example
//!
//! ```
//! use recipe_tree::{Recipe, RecipeBook};
//!
//! let mut book = RecipeBook::new();
//! book.add(Recipe::new("Omelette", 2, "Eggs, butter, patience.", false));
//! book.add(Recipe::new("Toast", 1, "Bread, heat.", true));
//! book.add(Recipe::new("Consomme", 7, "Clarified stock.", false));
//!
//! // Names are the ordering key; a duplicate name is rejected.
//! assert!(!book.add(Recipe::new("Toast", 9, "Again?", false)));
//! assert_eq!(book.len(), 3);
//!
//! // One point for the omelette itself; toast is already mastered and
//! // the consomme is harder, so neither contributes.
//! assert_eq!(book.mastery_points("Omelette"), 1);
//!
//! book.balance();
//! let names: Vec<_> = book.iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(names, ["Consomme", "Omelette", "Toast"]);
//! ```
//!
//! # Implementation
//!
//! The catalog is a plain binary search tree whose nodes live in a slot
//! arena addressed by niche-optimized indices, so the tree is the single
//! exclusive owner of every node and teardown never walks pointer chains.
//! Ordinary inserts and removals do not keep the tree balanced; callers
//! that care about worst-case lookup cost invoke
//! [`balance`](RecipeBook::balance) explicitly. All steady-state
//! operations (lookup, insert, successor-promotion delete, traversal) are
//! iterative with explicit stacks, so tree height never translates into
//! call-stack depth.

#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod raw;

pub mod recipe;
pub mod recipe_book;

pub use recipe::Recipe;
pub use recipe_book::RecipeBook;
pub use recipe_book::load::LoadError;
