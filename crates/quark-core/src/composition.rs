use crate::constants::{KEY_SEPARATOR, MAX_CONSTITUENTS};
use crate::error::LabelError;
use crate::label::Label;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Labels of one entity, kept in the order they were merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composition {
    labels: SmallVec<[Label; MAX_CONSTITUENTS]>,
}

/// Order-independent lookup form of a composition, e.g. `"Anti-Down+Up"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Sorts the given label texts and joins them with the key separator.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parts: SmallVec<[String; MAX_CONSTITUENTS]> =
            texts.into_iter().map(Into::into).collect();
        parts.sort_unstable();
        let mut key = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                key.push(KEY_SEPARATOR);
            }
            key.push_str(part);
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Composition {
    pub fn single(label: Label) -> Self {
        let mut labels = SmallVec::new();
        labels.push(label);
        Self { labels }
    }

    /// Builds a composition from 1..=`MAX_CONSTITUENTS` labels.
    pub fn from_labels<I: IntoIterator<Item = Label>>(labels: I) -> Result<Self, LabelError> {
        let labels: SmallVec<[Label; MAX_CONSTITUENTS]> = labels.into_iter().collect();
        if labels.is_empty() {
            return Err(LabelError::Empty);
        }
        if labels.len() > MAX_CONSTITUENTS {
            return Err(LabelError::TooLong {
                len: labels.len(),
                max: MAX_CONSTITUENTS,
            });
        }
        Ok(Self { labels })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    // always false for a constructed composition
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// A lone, never-merged constituent.
    #[inline]
    pub fn is_single(&self) -> bool {
        self.labels.len() == 1
    }

    pub fn antiquark_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_anti()).count()
    }

    /// `self` followed by `other`; fails past `MAX_CONSTITUENTS`.
    pub fn concat(&self, other: &Composition) -> Result<Composition, LabelError> {
        Composition::from_labels(self.labels.iter().chain(other.labels.iter()).copied())
    }

    pub fn canonical_key(&self) -> CanonicalKey {
        CanonicalKey::from_texts(self.labels.iter().map(|l| l.to_string()))
    }
}

impl From<Label> for Composition {
    fn from(label: Label) -> Self {
        Composition::single(label)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", KEY_SEPARATOR)?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

impl FromStr for Composition {
    type Err = LabelError;

    /// Parses the `+`-joined form stored on DOM elements, e.g. `"Up+Anti-Down"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(LabelError::Empty);
        }
        let labels = s
            .split(KEY_SEPARATOR)
            .map(str::parse::<Label>)
            .collect::<Result<SmallVec<[Label; MAX_CONSTITUENTS]>, _>>()?;
        Composition::from_labels(labels)
    }
}
