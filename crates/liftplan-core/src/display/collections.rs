//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper is a newtype over a `Vec` of models that renders every item
//! through its own Display impl and handles the empty case with a short
//! message instead of silence.

use std::{fmt, ops::Index};

use crate::models::{Day, Exercise, PlanSummary, Set, Week};

macro_rules! display_collection {
    ($(#[$doc:meta])* $name:ident, $item:ty, $empty_message:expr) => {
        $(#[$doc])*
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Get the number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get a reference to the item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Get an iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty_message)
                } else {
                    for item in &self.0 {
                        write!(f, "{item}")?;
                    }
                    Ok(())
                }
            }
        }
    };
}

display_collection!(
    /// Newtype wrapper for displaying collections of plan summaries.
    PlanSummaries,
    PlanSummary,
    "No plans found."
);

display_collection!(
    /// Newtype wrapper for displaying the weeks of a plan.
    Weeks,
    Week,
    "No weeks found."
);

display_collection!(
    /// Newtype wrapper for displaying the days of a week.
    Days,
    Day,
    "No days found."
);

display_collection!(
    /// Newtype wrapper for displaying the exercises of a day.
    Exercises,
    Exercise,
    "No exercises found."
);

display_collection!(
    /// Newtype wrapper for displaying the sets of an exercise.
    Sets,
    Set,
    "No sets found."
);
