//! Identifier Table Generation Macro
//!
//! Provides the `define_node_ids!` macro that turns one declarative list of
//! `Symbol = number => "BrowseName"` lines into a category enum with its
//! local table, qualified table and lookup helpers.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! define_node_ids! {
//!     /// DataType identifiers
//!     DataTypeId(NodeCategory::DataType) {
//!         WindowModeType = 3001 => "WindowModeType",
//!         ApplyResult = 3004 => "ApplyResult",
//!     }
//! }
//! ```
//!
//! Duplicate numbers inside one category are rejected by the compiler
//! (`E0081`, discriminant assigned more than once). Duplicates across
//! categories are caught by [`registry::validate`](crate::model::registry::validate).

/// Generate a `#[repr(u32)]` identifier enum for one node category
///
/// Generated items:
/// - `ALL`, `CATEGORY`
/// - `value()`, `name()`, `browse_name()`, `expanded()`
/// - `from_name()`, `from_value()`, `local_table()`, `expanded_table()`
/// - `FromStr`, `Display`, `TryFrom<u32>` (num_enum), `From<_> for u32`,
///   `From<_> for ExpandedNodeId`
///
/// Variant names keep the model compiler's symbols, underscores included,
/// so `ApplyResult_Encoding_DefaultBinary` reads the same here as in every
/// other OPC UA stack.
#[macro_export]
macro_rules! define_node_ids {
    (
        $(#[$meta:meta])*
        $name:ident($category:expr) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $browse:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[repr(u32)]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::num_enum::TryFromPrimitive,
        )]
        #[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Category every identifier of this enum belongs to
            pub const CATEGORY: $crate::model::registry::NodeCategory = $category;

            /// Every identifier in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Local numeric identifier, unique within the FDI5 namespace
            pub const fn value(self) -> u32 {
                self as u32
            }

            /// Model compiler symbol
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            /// BrowseName shown when traversing the address space
            pub const fn browse_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $browse,)+
                }
            }

            /// Identifier qualified by the FDI5 namespace URI
            pub const fn expanded(self) -> $crate::model::node_id::ExpandedNodeId {
                $crate::model::node_id::ExpandedNodeId::new(
                    self as u32,
                    $crate::model::constants::MODEL_NAMESPACE,
                )
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|id| id.name() == name)
            }

            /// Symbol → local identifier table
            pub fn local_table() -> Vec<(&'static str, u32)> {
                Self::ALL.iter().map(|id| (id.name(), id.value())).collect()
            }

            /// Symbol → qualified identifier table
            pub fn expanded_table() -> Vec<(&'static str, $crate::model::node_id::ExpandedNodeId)> {
                Self::ALL.iter().map(|id| (id.name(), id.expanded())).collect()
            }

            /// Checked conversion from a raw identifier
            pub fn from_value(value: u32) -> ::std::result::Result<Self, $crate::common::errors::NodeIdError> {
                Self::try_from(value).map_err(|_| {
                    $crate::common::errors::NodeIdError::UnknownIdentifier {
                        category: Self::CATEGORY.name(),
                        value,
                    }
                })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::common::errors::NodeIdError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_name(s)
                    .ok_or_else(|| $crate::common::errors::NodeIdError::UnknownName(s.to_string()))
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id as u32
            }
        }

        impl From<$name> for $crate::model::node_id::ExpandedNodeId {
            fn from(id: $name) -> Self {
                id.expanded()
            }
        }
    };
}
