//! Compiled pattern table, one entry per [`Category`].

use std::{ops::Range, sync::LazyLock};

use regex::Regex;

use super::category::Category;
use crate::error::Result;

/// Textual shape of one category.
///
/// `shape` is matched unanchored during substring search and each candidate
/// must pass `guard`, so a shape never bites into a longer digit or letter
/// run. Anchored, it is also the whole-token rule for every category but
/// EMAIL.
struct Shape {
    shape: &'static str,
    guard: Guard,
}

/// Character class a search match may not extend into.
///
/// A match edge is rejected only when both the edge character and its
/// outside neighbour belong to the class, so `9(555)...` still starts a
/// phone number while `9555...` does not.
#[derive(Clone, Copy, Debug)]
enum Guard {
    /// No neighbour restriction; the shape delimits itself.
    Open,
    /// ASCII digits.
    Digits,
    /// ASCII letters and digits.
    Alphanumeric,
}

impl Guard {
    fn holds(self, c: char) -> bool {
        match self {
            Guard::Open => false,
            Guard::Digits => c.is_ascii_digit(),
            Guard::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }

    fn joins(self, a: Option<char>, b: Option<char>) -> bool {
        a.zip(b).is_some_and(|(a, b)| self.holds(a) && self.holds(b))
    }

    fn admits(self, text: &str, range: &Range<usize>) -> bool {
        let (head, tail) = (&text[..range.start], &text[range.end..]);
        let matched = &text[range.clone()];
        !self.joins(head.chars().next_back(), matched.chars().next())
            && !self.joins(matched.chars().next_back(), tail.chars().next())
    }
}

const fn shape_of(category: Category) -> Shape {
    match category {
        // 3-2-4, each gap a hyphen, a space or nothing.
        Category::Ssn => Shape {
            shape: r"[0-9]{3}[ -]?[0-9]{2}[ -]?[0-9]{4}",
            guard: Guard::Digits,
        },
        // Optional (area) then 3-4, each gap a hyphen, a space or nothing.
        Category::Phone => Shape {
            shape: r"(?:\([0-9]{3}\)[ -]?|[0-9]{3}[ -]?)[0-9]{3}[ -]?[0-9]{4}",
            guard: Guard::Digits,
        },
        Category::Date => Shape {
            shape: r"[0-9]{1,2}[/. ][0-9]{1,2}[/. ](?:[0-9]{4}|[0-9]{2})",
            guard: Guard::Digits,
        },
        // The search form of the local part also stops at common delimiters.
        Category::Email => Shape {
            shape: r#"[^\s@<>()\[\],;:"']+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}"#,
            guard: Guard::Open,
        },
        // 17 characters, no I, O or Q.
        Category::Vin => Shape {
            shape: r"[A-HJ-NPR-Z0-9]{17}",
            guard: Guard::Alphanumeric,
        },
    }
}

/// The matching rule for a single category.
#[derive(Debug)]
pub struct Pattern {
    category: Category,
    whole: Regex,
    search: Regex,
    guard: Guard,
}

impl Pattern {
    fn compile(category: Category) -> Self {
        let Shape { shape, guard } = shape_of(category);
        let whole = match category {
            Category::Email => r"[^\s@]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}",
            _ => shape,
        };
        Self {
            category,
            whole: Regex::new(&format!("^(?:{whole})$"))
                .expect("category shape is a valid regex"),
            search: Regex::new(shape).expect("category search pattern is a valid regex"),
            guard,
        }
    }

    /// The category this pattern recognizes.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns true if the entire `token` has this category's shape.
    pub fn is_match(&self, token: &str) -> bool {
        self.whole.is_match(token)
    }

    /// Byte ranges of every non-overlapping occurrence inside `text`, left to right.
    ///
    /// A candidate rejected by its neighbours is retried one character later,
    /// so a valid occurrence overlapping a rejected one is still found.
    pub fn find_iter(&self, text: &str) -> impl Iterator<Item = Range<usize>> {
        let mut at = 0;
        std::iter::from_fn(move || {
            while at <= text.len() {
                let range = self.search.find_at(text, at)?.range();
                if self.guard.admits(text, &range) {
                    at = range.end;
                    return Some(range);
                }
                at = range.start + text[range.start..].chars().next().map_or(1, char::len_utf8);
            }
            None
        })
    }
}

struct Registry {
    patterns: [Pattern; Category::ALL.len()],
}

// Indexed by `Category as usize`, which matches the order of `Category::ALL`.
static REGISTRY: LazyLock<Registry> = LazyLock::new(|| Registry {
    patterns: Category::ALL.map(Pattern::compile),
});

/// Returns the pattern registered for `category`.
pub fn pattern(category: Category) -> &'static Pattern {
    &REGISTRY.patterns[category as usize]
}

/// Looks up a pattern by its textual identifier.
///
/// # Errors
///
/// Returns [`Error::UnknownCategory`](crate::Error::UnknownCategory) if `name`
/// is not a registered category.
pub fn pattern_named(name: &str) -> Result<&'static Pattern> {
    Ok(pattern(name.parse()?))
}

/// Every registered category, in registry order.
pub fn categories() -> &'static [Category] {
    &Category::ALL
}

/// Iterates the registered patterns in registry order.
pub fn patterns() -> impl Iterator<Item = &'static Pattern> {
    REGISTRY.patterns.iter()
}
