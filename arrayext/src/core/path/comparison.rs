// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// How two strings are compared by the path and string helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Ordinal comparison of the chars.
    #[default]
    CaseSensitive,
    /// Both sides are lowercased (Unicode aware) before comparing.
    IgnoreCase,
}

impl Comparison {
    #[must_use]
    pub fn equals(self, lhs: &str, rhs: &str) -> bool {
        match self {
            Comparison::CaseSensitive => lhs == rhs,
            Comparison::IgnoreCase => lhs.to_lowercase() == rhs.to_lowercase(),
        }
    }

    #[must_use]
    pub fn starts_with(self, value: &str, prefix: &str) -> bool {
        match self {
            Comparison::CaseSensitive => value.starts_with(prefix),
            Comparison::IgnoreCase => {
                value.to_lowercase().starts_with(&prefix.to_lowercase())
            }
        }
    }
}
