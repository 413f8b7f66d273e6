//! The recipe record type.

use core::borrow::Borrow;
use core::cmp::Ordering;

/// One catalog entry: a named, difficulty-ranked, describable recipe that
/// a cook either has or has not mastered.
///
/// The **name** is both the identity key and the ordering key: two recipes
/// are equal iff their names are equal, and comparisons are lexicographic
/// on the name alone. `difficulty` never influences where a recipe sits in
/// the catalog's tree, which is why difficulty-based queries such as
/// [`mastery_points`](crate::RecipeBook::mastery_points) must visit every
/// entry instead of pruning by tree order.
///
/// Mutating the `name` of a recipe while it is stored in a
/// [`RecipeBook`](crate::RecipeBook) would break the catalog's ordering;
/// the book only ever hands out shared references, so this cannot happen
/// through its API.
#[derive(Clone, Debug)]
pub struct Recipe {
    /// Unique identity and ordering key. Expected non-empty.
    pub name: String,
    /// Difficulty rank. No range is enforced.
    pub difficulty: i32,
    /// Free-text description.
    pub description: String,
    /// Whether the cook has mastered this recipe.
    pub mastered: bool,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        difficulty: i32,
        description: impl Into<String>,
        mastered: bool,
    ) -> Self {
        Self {
            name: name.into(),
            difficulty,
            description: description.into(),
            mastered,
        }
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Recipe {}

impl PartialOrd for Recipe {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Recipe {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

// Lets the tree be searched by bare name. Consistent with `Eq`/`Ord`
// because both delegate to the name and nothing else.
impl Borrow<str> for Recipe {
    fn borrow(&self) -> &str {
        &self.name
    }
}
