//! Identifiable objects and the list wrappers around them.
use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, IgnoredAny, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{BuildError, Buildable};

/// An object of the clusters-management API.
///
/// Objects are identified by `id` and `href`, and may be serialized as links:
/// values that carry only the identity and a `kind` with a `Link` suffix.
pub trait Object {
    /// Kind of the object when it is not a link
    const KIND: &'static str;

    /// Whether this value is only a reference to the object
    fn link(&self) -> bool;

    /// Identifier of the object
    fn id(&self) -> Option<&str>;

    /// Self link of the object
    fn href(&self) -> Option<&str>;
}

/// An immutable, ordered collection of objects nested in another value.
///
/// Serialized as `{"kind": "<Kind>List", "href": .., "items": [..]}`, or with a
/// `<Kind>ListLink` kind when the list is only a reference.
#[derive(Clone, Debug, PartialEq)]
pub struct List<T> {
    link: bool,
    href: Option<String>,
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            link: false,
            href: None,
            items: Vec::new(),
        }
    }
}

impl<T> List<T> {
    /// A list holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Whether the list is only a reference.
    pub fn link(&self) -> bool {
        self.link
    }

    /// Link to the collection, if present.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// An owned copy of the items.
    ///
    /// Consider [`iter`](Self::iter), [`each`](Self::each) or [`range`](Self::range) when a copy is not needed.
    pub fn slice(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Call `f` on each item in order, stopping at the first `false`.
    pub fn each(&self, mut f: impl FnMut(&T) -> bool) {
        for item in &self.items {
            if !f(item) {
                break;
            }
        }
    }

    /// Call `f` on each index and item in order, stopping at the first `false`.
    pub fn range(&self, mut f: impl FnMut(usize, &T) -> bool) {
        for (index, item) in self.items.iter().enumerate() {
            if !f(index, item) {
                break;
            }
        }
    }

    /// Iterate over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Object> List<T> {
    /// Serialized kind, which depends on the link flag.
    pub fn kind(&self) -> String {
        if self.link {
            format!("{}ListLink", T::KIND)
        } else {
            format!("{}List", T::KIND)
        }
    }
}

impl<T> IntoIterator for List<T> {
    type IntoIter = std::vec::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Serialize + Object> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind())?;
        if let Some(href) = &self.href {
            map.serialize_entry("href", href)?;
        }
        if !self.link || !self.items.is_empty() {
            map.serialize_entry("items", &self.items)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de> + Object> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de> + Object> Visitor<'de> for ListVisitor<T> {
            type Value = List<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a {}List object", T::KIND)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<List<T>, A::Error> {
                let mut list = List::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "kind" => {
                            let kind: String = map.next_value()?;
                            list.link = kind.ends_with("ListLink");
                        }
                        "href" => list.href = map.next_value()?,
                        "items" => {
                            list.items = map.next_value::<Option<Vec<T>>>()?.unwrap_or_default();
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(list)
            }

            // Some attributes hold bare arrays of objects.
            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<List<T>, A::Error> {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(List::new(items))
            }
        }

        deserializer.deserialize_any(ListVisitor(PhantomData))
    }
}

/// Mutable accumulator for a [`List`].
///
/// Building takes a snapshot: later changes to the builder do not affect lists built earlier.
pub struct ListBuilder<T: Buildable> {
    link: bool,
    href: Option<String>,
    items: Vec<T::Builder>,
}

impl<T: Buildable> Default for ListBuilder<T> {
    fn default() -> Self {
        Self {
            link: false,
            href: None,
            items: Vec::new(),
        }
    }
}

impl<T: Buildable> Clone for ListBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            link: self.link,
            href: self.href.clone(),
            items: self.items.clone(),
        }
    }
}

impl<T: Buildable> fmt::Debug for ListBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListBuilder")
            .field("link", &self.link)
            .field("href", &self.href)
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Buildable> ListBuilder<T> {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the list as a reference.
    pub fn link(mut self, value: bool) -> Self {
        self.link = value;
        self
    }

    /// Set the link to the collection.
    pub fn href(mut self, value: impl Into<String>) -> Self {
        self.href = Some(value.into());
        self
    }

    /// Replace the items.
    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T::Builder>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Append one item.
    pub fn push(&mut self, item: impl Into<T::Builder>) {
        self.items.push(item.into());
    }

    /// Number of items added so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no items were added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the state of this builder with that of an existing list.
    pub fn copy(self, list: &List<T>) -> Self {
        list.into()
    }

    /// Build every item and collect them into a [`List`].
    pub fn build(&self) -> Result<List<T>, BuildError> {
        Ok(List {
            link: self.link,
            href: self.href.clone(),
            items: self.items.iter().map(T::build_from).collect::<Result<_, _>>()?,
        })
    }
}

impl<T: Buildable> From<&List<T>> for ListBuilder<T> {
    fn from(list: &List<T>) -> Self {
        Self {
            link: list.link,
            href: list.href.clone(),
            items: list.items.iter().map(T::to_builder).collect(),
        }
    }
}

impl<T: Buildable, B: Into<T::Builder>> FromIterator<B> for ListBuilder<T> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        Self::default().items(iter)
    }
}

impl<T: Buildable, B: Into<T::Builder>> From<Vec<B>> for ListBuilder<T> {
    fn from(items: Vec<B>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Buildable> Buildable for List<T> {
    type Builder = ListBuilder<T>;

    fn build_from(builder: &ListBuilder<T>) -> Result<Self, BuildError> {
        builder.build()
    }

    fn to_builder(&self) -> ListBuilder<T> {
        self.into()
    }
}

/// One page of a collection, as returned by a list call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ObjectList<T> {
    /// Page number, starting at 1
    #[serde(default)]
    pub page: u32,

    /// Number of items in this page
    #[serde(default)]
    pub size: u32,

    /// Number of items in the whole collection
    #[serde(default)]
    pub total: u32,

    /// The items of this page
    #[serde(default = "Vec::new", bound(deserialize = "T: Deserialize<'de>"))]
    pub items: Vec<T>,
}

impl<T> ObjectList<T> {
    /// Iterate over the items of this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index` in this page.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Convert the page into a [`List`] of its items.
    pub fn into_list(self) -> List<T> {
        List::new(self.items)
    }
}

impl<T> IntoIterator for ObjectList<T> {
    type IntoIter = std::vec::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ObjectList<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
