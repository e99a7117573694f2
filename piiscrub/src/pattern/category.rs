//! The closed set of PII categories and a compact set type over it.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// A kind of personally identifiable information the registry can recognize.
///
/// The set is closed: categories are fixed at compile time and the registry
/// holds exactly one pattern for each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum Category {
    /// US Social Security Number.
    Ssn,
    /// Ten-digit North American phone number.
    Phone,
    /// Numeric month/day/year date.
    Date,
    /// Email address.
    Email,
    /// Vehicle identification number.
    Vin,
}

impl Category {
    /// All categories, in registry order.
    pub const ALL: [Category; 5] = [
        Category::Ssn,
        Category::Phone,
        Category::Date,
        Category::Email,
        Category::Vin,
    ];

    /// Canonical upper-case identifier (`"SSN"`, `"PHONE"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Ssn => "SSN",
            Category::Phone => "PHONE",
            Category::Date => "DATE",
            Category::Email => "EMAIL",
            Category::Vin => "VIN",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.as_str()
    }
}

impl TryFrom<String> for Category {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parses a canonical identifier, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownCategory(name.to_string()))
    }
}

/// A set of [`Category`] values.
///
/// Classification is inclusive, so a token can land in several categories at
/// once; this is the type that carries that result. Iteration follows
/// registry order regardless of insertion order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every registered category.
    #[must_use]
    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < Category::ALL.len() {
            bits |= Category::ALL[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Parses a list of textual identifiers.
    ///
    /// Fails on the first identifier that does not name a registered category.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        names
            .iter()
            .map(|name| name.as_ref().parse::<Category>())
            .collect()
    }

    /// Adds `category`, returning whether it was newly inserted.
    pub fn insert(&mut self, category: Category) -> bool {
        let fresh = !self.contains(category);
        self.0 |= category.bit();
        fresh
    }

    /// Removes `category`, returning whether it was present.
    pub fn remove(&mut self, category: Category) -> bool {
        let present = self.contains(category);
        self.0 &= !category.bit();
        present
    }

    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterates members in registry order.
    pub fn iter(self) -> Iter {
        Iter { set: self, next: 0 }
    }
}

/// Iterator over the members of a [`CategorySet`], in registry order.
#[derive(Clone, Debug)]
pub struct Iter {
    set: CategorySet,
    next: usize,
}

impl Iterator for Iter {
    type Item = Category;

    fn next(&mut self) -> Option<Category> {
        while let Some(&category) = Category::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(category) {
                return Some(category);
            }
        }
        None
    }
}

impl fmt::Debug for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, category) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(category.as_str())?;
        }
        Ok(())
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        Self(category.bit())
    }
}

impl<const N: usize> From<[Category; N]> for CategorySet {
    fn from(categories: [Category; N]) -> Self {
        categories.into_iter().collect()
    }
}

impl From<&[Category]> for CategorySet {
    fn from(categories: &[Category]) -> Self {
        categories.iter().copied().collect()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = Self::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl Extend<Category> for CategorySet {
    fn extend<I: IntoIterator<Item = Category>>(&mut self, iter: I) {
        for category in iter {
            self.insert(category);
        }
    }
}

impl IntoIterator for CategorySet {
    type Item = Category;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

// Serialized as a plain list of identifiers.
#[cfg(feature = "json")]
impl serde::Serialize for CategorySet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "json")]
impl<'de> serde::Deserialize<'de> for CategorySet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let categories = Vec::<Category>::deserialize(deserializer)?;
        Ok(categories.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_display_and_parse() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(" email ".parse::<Category>(), Ok(Category::Email));
        assert_eq!("Vin".parse::<Category>(), Ok(Category::Vin));
    }

    #[test]
    fn parse_rejects_unregistered_identifier() {
        assert_eq!(
            "PASSPORT".parse::<Category>(),
            Err(Error::UnknownCategory("PASSPORT".into()))
        );
    }

    #[test]
    fn set_insert_and_remove_report_membership_changes() {
        let mut set = CategorySet::empty();
        assert!(set.insert(Category::Phone));
        assert!(!set.insert(Category::Phone));
        assert_eq!(set.len(), 1);
        assert!(set.remove(Category::Phone));
        assert!(!set.remove(Category::Phone));
        assert!(set.is_empty());
    }

    #[test]
    fn set_iterates_in_registry_order() {
        let set = CategorySet::from([Category::Vin, Category::Ssn, Category::Email]);
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![Category::Ssn, Category::Email, Category::Vin]);
        assert_eq!(set.to_string(), "SSN, EMAIL, VIN");
    }

    #[test]
    fn union_keeps_members_of_both_sets() {
        let left = CategorySet::from([Category::Ssn, Category::Phone]);
        let right = CategorySet::from([Category::Phone, Category::Vin]);
        assert_eq!(
            left.union(right),
            CategorySet::from([Category::Ssn, Category::Phone, Category::Vin])
        );
        assert_eq!(left.union(CategorySet::empty()), left);
    }

    #[test]
    fn set_builds_from_slices_and_extends() {
        let names: &[Category] = &[Category::Date, Category::Date, Category::Email];
        let mut set = CategorySet::from(names);
        assert_eq!(set.len(), 2);

        set.extend([Category::Ssn, Category::Email]);
        assert_eq!(
            set,
            CategorySet::from([Category::Ssn, Category::Date, Category::Email])
        );
    }

    #[test]
    fn set_is_iterable_by_value() {
        let mut seen = Vec::new();
        for category in CategorySet::from([Category::Vin, Category::Phone]) {
            seen.push(category);
        }
        assert_eq!(seen, vec![Category::Phone, Category::Vin]);
        assert_eq!(CategorySet::empty().into_iter().next(), None);
    }

    #[test]
    fn all_contains_every_category() {
        let all = CategorySet::all();
        assert_eq!(all.len(), Category::ALL.len());
        assert!(Category::ALL.iter().all(|c| all.contains(*c)));
    }

    #[test]
    fn set_parse_fails_fast_on_unknown_name() {
        assert_eq!(
            CategorySet::parse(&["SSN", "phone"]),
            Ok(CategorySet::from([Category::Ssn, Category::Phone]))
        );
        assert_eq!(
            CategorySet::parse(&["SSN", "IBAN", "EMAIL"]),
            Err(Error::UnknownCategory("IBAN".into()))
        );
    }
}
