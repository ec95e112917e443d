// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Option values accepted by every public operation.

/// A single mapping value: a bare flag or a `--key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Emitted as `--key` when true, omitted when false.
    Flag(bool),
    /// Emitted as `--key=value`.
    Value(String),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Value(value.to_string())
    }
}

/// Insertion-ordered key/value options.
///
/// Re-inserting a key replaces its value in place, keeping the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    entries: Vec<(String, OptionValue)>,
}

impl OptionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn append_to(&self, args: &mut Vec<String>) {
        for (key, value) in &self.entries {
            if key.is_empty() {
                continue;
            }
            let flag = if key.starts_with('-') {
                key.clone()
            } else {
                format!("--{key}")
            };
            match value {
                OptionValue::Flag(true) => args.push(flag),
                OptionValue::Flag(false) => {}
                OptionValue::Value(v) => args.push(format!("{flag}={v}")),
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OptionMap
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Options value for an operation: nothing, a raw string, an ordered list, or a mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GitOptions {
    #[default]
    None,
    /// Split on whitespace, each piece passed verbatim (no shell interpretation).
    Raw(String),
    /// Passed through unchanged, order preserved.
    List(Vec<String>),
    /// Converted to `--key` / `--key=value` in insertion order.
    Map(OptionMap),
}

impl GitOptions {
    /// Returns true if the options contribute no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Raw(raw) => raw.trim().is_empty(),
            Self::List(list) => list.is_empty(),
            Self::Map(map) => map.is_empty(),
        }
    }

    pub(super) fn append_to(&self, args: &mut Vec<String>) {
        match self {
            Self::None => {}
            Self::Raw(raw) => args.extend(raw.split_whitespace().map(str::to_string)),
            Self::List(list) => args.extend(list.iter().cloned()),
            Self::Map(map) => map.append_to(args),
        }
    }
}

impl From<&str> for GitOptions {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for GitOptions {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<Vec<String>> for GitOptions {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

impl From<Vec<&str>> for GitOptions {
    fn from(list: Vec<&str>) -> Self {
        Self::List(list.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for GitOptions {
    fn from(list: [&str; N]) -> Self {
        Self::List(list.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for GitOptions {
    fn from(list: &[&str]) -> Self {
        Self::List(list.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<OptionMap> for GitOptions {
    fn from(map: OptionMap) -> Self {
        Self::Map(map)
    }
}

impl From<()> for GitOptions {
    fn from((): ()) -> Self {
        Self::None
    }
}
