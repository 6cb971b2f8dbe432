//! Ordered access to texture atlases.
//!
//! Atlas frames are usually named with numeric suffixes (`walk_1`, `walk_2`,
//! ..., `walk_10`). [`localized_compare`] orders such names the way a user
//! would expect: case-insensitively, with digit runs compared by value.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::iter::Peekable;
use std::str::Chars;

/// Host-provided texture atlas.
pub trait TextureAtlas {
    type Texture;

    fn texture_names(&self) -> Vec<String>;
    fn texture_named(&self, name: &str) -> Option<Self::Texture>;
}

/// In-memory atlas keyed by texture name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedAtlas<T> {
    textures: BTreeMap<String, T>,
}

impl<T> NamedAtlas<T> {
    pub fn new() -> Self {
        Self { textures: BTreeMap::new() }
    }

    pub fn insert(&mut self, name: impl Into<String>, texture: T) -> Option<T> {
        self.textures.insert(name.into(), texture)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl<T, S: Into<String>> FromIterator<(S, T)> for NamedAtlas<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self {
            textures: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<T: Clone> TextureAtlas for NamedAtlas<T> {
    type Texture = T;

    fn texture_names(&self) -> Vec<String> {
        self.textures.keys().cloned().collect()
    }

    fn texture_named(&self, name: &str) -> Option<T> {
        self.textures.get(name).cloned()
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Locale-style name comparison.
///
/// Letters compare case-insensitively, runs of ASCII digits compare by
/// numeric value (`tex2 < tex10`). Names that are equal under those rules
/// fall back to plain string order so the result is total.
pub fn localized_compare(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let ord = compare_digit_runs(&mut ai, &mut bi);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(ca), Some(cb)) => {
                let ord = ca.to_lowercase().cmp(cb.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                ai.next();
                bi.next();
            }
        }
    }
}

fn take_digits(it: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = it.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &mut Peekable<Chars<'_>>, b: &mut Peekable<Chars<'_>>) -> Ordering {
    let ra = take_digits(a);
    let rb = take_digits(b);
    let ta = ra.trim_start_matches('0');
    let tb = rb.trim_start_matches('0');

    // Without leading zeros, a longer run is a larger number.
    ta.len().cmp(&tb.len()).then_with(|| ta.cmp(tb))
}

/// Sorts texture names with [`localized_compare`].
pub fn sorted_texture_names<I, S>(names: I, order: SortOrder) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
    names.sort_by(|a, b| localized_compare(a, b));
    if order == SortOrder::Descending {
        names.reverse();
    }
    names
}

/// All textures of `atlas`, ordered by name.
pub fn ordered_textures<A: TextureAtlas + ?Sized>(atlas: &A, order: SortOrder) -> Vec<A::Texture> {
    sorted_texture_names(atlas.texture_names(), order)
        .iter()
        .filter_map(|name| {
            let texture = atlas.texture_named(name);
            if texture.is_none() {
                log::warn!("atlas listed texture {name:?} but could not provide it");
            }
            texture
        })
        .collect()
}
