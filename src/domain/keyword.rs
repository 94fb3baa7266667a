// Copyright (c) 2025 - Cowboy AI, Inc.
//! Protocol Enumerations and Keyword Tables
//!
//! Redfish enumerations travel as exact string literals ("wire keywords") such
//! as `BiosSetup` or `PoweringOn`. Each Rust enum implements [`ProtocolEnum`],
//! which gives every variant exactly one keyword and a human-readable
//! description. Looking a keyword up goes through a [`KeywordTable`] built once
//! and owned by a [`KeywordRegistry`] that decoders receive explicitly.
//!
//! Unrecognized keywords are not errors: BMC vendors extend enumerations, so a
//! lookup yields [`KeywordLookup::Unknown`] carrying the raw keyword and the
//! caller decides whether that is acceptable for the field.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

use super::enums::{
    BootSource, BootSourceOverrideEnabled, PowerLimitException, PowerState, SystemType,
};

/// A closed protocol enumeration with stable wire keywords
pub trait ProtocolEnum: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Type name used in diagnostics
    const NAME: &'static str;

    /// Every variant, in declaration order
    const VARIANTS: &'static [Self];

    /// Canonical wire keyword. Total: every variant has exactly one.
    fn keyword(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// The table for this enum inside a registry
    fn table(registry: &KeywordRegistry) -> &KeywordTable<Self>;
}

/// Keyword table construction error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeywordTableError {
    #[error("Duplicate keyword '{keyword}' in {enum_name}")]
    Duplicate {
        enum_name: &'static str,
        keyword: &'static str,
    },

    #[error("Keyword '{keyword}' in {enum_name} is empty or contains whitespace")]
    Malformed {
        enum_name: &'static str,
        keyword: &'static str,
    },
}

/// Result of looking up a wire keyword
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeywordLookup<E> {
    /// Keyword maps to a known variant
    Known(E),
    /// Keyword is not part of the enumeration (vendor extension or newer schema)
    Unknown(String),
}

impl<E: ProtocolEnum> KeywordLookup<E> {
    pub fn known(&self) -> Option<E> {
        match self {
            Self::Known(variant) => Some(*variant),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// The wire keyword, whether known or not
    pub fn keyword(&self) -> &str {
        match self {
            Self::Known(variant) => variant.keyword(),
            Self::Unknown(raw) => raw,
        }
    }
}

impl<E: ProtocolEnum> fmt::Display for KeywordLookup<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl<E: ProtocolEnum> Serialize for KeywordLookup<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.keyword())
    }
}

/// Keyword → variant mapping for one enumeration
#[derive(Debug, Clone)]
pub struct KeywordTable<E> {
    by_keyword: HashMap<&'static str, E>,
}

impl<E: ProtocolEnum> KeywordTable<E> {
    /// Build the table from `E::VARIANTS`
    ///
    /// # Invariants
    /// - Keywords are unique within the enumeration
    /// - Keywords are non-empty and contain no whitespace
    pub fn build() -> Result<Self, KeywordTableError> {
        let mut by_keyword = HashMap::with_capacity(E::VARIANTS.len());
        for variant in E::VARIANTS {
            let keyword = variant.keyword();
            if keyword.is_empty() || keyword.chars().any(char::is_whitespace) {
                return Err(KeywordTableError::Malformed {
                    enum_name: E::NAME,
                    keyword,
                });
            }
            if by_keyword.insert(keyword, *variant).is_some() {
                return Err(KeywordTableError::Duplicate {
                    enum_name: E::NAME,
                    keyword,
                });
            }
        }
        Ok(Self { by_keyword })
    }

    /// Look up a keyword. Matching is exact, as on the wire.
    pub fn lookup(&self, keyword: &str) -> KeywordLookup<E> {
        match self.by_keyword.get(keyword) {
            Some(variant) => KeywordLookup::Known(*variant),
            None => KeywordLookup::Unknown(keyword.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.by_keyword.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_keyword.is_empty()
    }
}

/// One keyword table per protocol enumeration
///
/// Constructed once (typically per reader) and shared by reference; there is
/// no process-wide instance.
#[derive(Debug, Clone)]
pub struct KeywordRegistry {
    pub(crate) boot_source: KeywordTable<BootSource>,
    pub(crate) boot_source_override_enabled: KeywordTable<BootSourceOverrideEnabled>,
    pub(crate) power_limit_exception: KeywordTable<PowerLimitException>,
    pub(crate) power_state: KeywordTable<PowerState>,
    pub(crate) system_type: KeywordTable<SystemType>,
}

impl KeywordRegistry {
    pub fn new() -> Result<Self, KeywordTableError> {
        Ok(Self {
            boot_source: KeywordTable::build()?,
            boot_source_override_enabled: KeywordTable::build()?,
            power_limit_exception: KeywordTable::build()?,
            power_state: KeywordTable::build()?,
            system_type: KeywordTable::build()?,
        })
    }

    /// Look up a keyword for any registered enumeration
    pub fn lookup<E: ProtocolEnum>(&self, keyword: &str) -> KeywordLookup<E> {
        E::table(self).lookup(keyword)
    }
}

/// Declare a [`ProtocolEnum`] with its keyword and description per variant
macro_rules! protocol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $table:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($keyword:literal, $description:literal),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::domain::keyword::ProtocolEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$(Self::$variant,)+];

            fn keyword(&self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }

            fn description(&self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)+
                }
            }

            fn table(
                registry: &$crate::domain::keyword::KeywordRegistry,
            ) -> &$crate::domain::keyword::KeywordTable<Self> {
                &registry.$table
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::domain::keyword::ProtocolEnum;
                write!(f, "{}", self.keyword())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use $crate::domain::keyword::ProtocolEnum;
                serializer.serialize_str(self.keyword())
            }
        }
    };
}

pub(crate) use protocol_enum;
