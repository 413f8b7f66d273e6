//! The recipe catalog built on the raw search tree.

use core::fmt;
use core::fmt::Write as _;

use crate::raw::{InOrder, PreOrder, RawBst};
use crate::recipe::Recipe;

pub mod load;

/// A catalog of uniquely-named recipes held in a binary search tree
/// ordered by name.
///
/// The book layers domain policy over the raw tree: it rejects duplicate
/// names before they reach the engine, answers mastery-progress queries,
/// and can rebuild itself into a minimal-height shape. See the
/// [crate docs](crate) for an overview and examples.
///
/// Lookups, insertions and removals cost O(height). The tree makes no
/// self-balancing effort, so heavy one-sided insertion degrades height
/// toward n until [`balance`](RecipeBook::balance) is called.
pub struct RecipeBook {
    tree: RawBst<Recipe>,
}

impl RecipeBook {
    /// Creates an empty book.
    #[must_use]
    pub const fn new() -> Self {
        Self { tree: RawBst::new() }
    }

    /// Builds a book from rows in input order. Rows whose name is already
    /// present are silently dropped: the first occurrence wins.
    pub fn from_rows(rows: impl IntoIterator<Item = Recipe>) -> Self {
        rows.into_iter().collect()
    }

    /// Number of recipes in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Height of the underlying tree; zero when empty. Mostly useful for
    /// judging how degraded the shape is before a `balance` call.
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Looks a recipe up by name. O(height).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.tree.find(name)
    }

    /// Adds a recipe, returning `true` on success. A recipe whose name is
    /// already present is rejected and the book is left untouched.
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if self.tree.find(recipe.name.as_str()).is_some() {
            return false;
        }
        self.tree.insert(recipe);
        true
    }

    /// Removes the recipe with the given name, returning whether one
    /// existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.tree.remove(name).is_some()
    }

    /// Empties the book by repeatedly removing whatever recipe currently
    /// sits at the root until none is left.
    pub fn clear(&mut self) {
        while let Some(name) = self.tree.root_item().map(|r| r.name.clone()) {
            self.tree.remove(name.as_str());
        }
    }

    /// Mastery points still needed for the named recipe.
    ///
    /// Returns `-1` if no such recipe exists and `0` if it is already
    /// mastered. Otherwise the answer is one point for the recipe itself
    /// plus one for every unmastered recipe in the book with strictly
    /// lower difficulty.
    ///
    /// The tree is ordered by name, so difficulty gives no pruning
    /// leverage: this visits every entry, O(n).
    #[must_use]
    pub fn mastery_points(&self, name: &str) -> i32 {
        let Some(target) = self.tree.find(name) else {
            return -1;
        };
        if target.mastered {
            return 0;
        }

        let mut points = 1;
        for recipe in self.tree.iter() {
            if !recipe.mastered && recipe.difficulty < target.difficulty {
                points += 1;
            }
        }
        points
    }

    /// Rebuilds the tree into a minimal-height shape.
    ///
    /// Captures the ascending-by-name traversal, discards the old shape
    /// and rebuilds by repeatedly rooting each subtree at the midpoint of
    /// its index range. Afterwards every node's subtree heights differ by
    /// at most one, and [`iter`](RecipeBook::iter) yields exactly the
    /// sequence it yielded before the call.
    pub fn balance(&mut self) {
        let sorted: Vec<Recipe> = self.tree.iter().cloned().collect();
        self.tree.rebuild_balanced(sorted);
    }

    /// Iterates over the recipes ascending by name.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.tree.iter() }
    }

    /// Iterates over the recipes in pre-order: each subtree's root before
    /// its left subtree, then its right subtree.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { inner: self.tree.preorder() }
    }

    /// Renders every recipe in pre-order, one block per recipe:
    ///
    /// ```text
    /// Name: <name>
    /// Difficulty Level: <difficulty>
    /// Description: <description>
    /// Mastered: Yes|No
    /// ```
    ///
    /// with a blank line after each block.
    #[must_use]
    pub fn preorder_display(&self) -> String {
        let mut out = String::new();
        for recipe in self.preorder() {
            let mastered = if recipe.mastered { "Yes" } else { "No" };
            // Writing into a String cannot fail.
            let _ = write!(
                out,
                "Name: {}\nDifficulty Level: {}\nDescription: {}\nMastered: {}\n\n",
                recipe.name, recipe.difficulty, recipe.description, mastered
            );
        }
        out
    }
}

impl fmt::Debug for RecipeBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|r| (&r.name, (r.difficulty, r.mastered))))
            .finish()
    }
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::new()
    }
}

/// First occurrence of each name wins; later duplicates are dropped.
impl FromIterator<Recipe> for RecipeBook {
    fn from_iter<I: IntoIterator<Item = Recipe>>(rows: I) -> Self {
        let mut book = Self::new();
        for recipe in rows {
            book.add(recipe);
        }
        book
    }
}

impl<'a> IntoIterator for &'a RecipeBook {
    type Item = &'a Recipe;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Ascending-by-name iterator over a book's recipes.
///
/// Created by [`RecipeBook::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a> {
    inner: InOrder<'a, Recipe>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Recipe;

    fn next(&mut self) -> Option<&'a Recipe> {
        self.inner.next()
    }
}

/// Pre-order iterator over a book's recipes.
///
/// Created by [`RecipeBook::preorder`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Preorder<'a> {
    inner: PreOrder<'a, Recipe>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Recipe;

    fn next(&mut self) -> Option<&'a Recipe> {
        self.inner.next()
    }
}
