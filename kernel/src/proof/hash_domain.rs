//! Typed domain separators for canonical hashing.
//!
//! Every digest in the workspace selects a domain via [`HashDomain`], so a
//! grid snapshot and a search report can never hash to the same value even
//! over identical bytes.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// `GridWorld` snapshot hashing (room identity).
    GridSnapshot => b"VACUUM::GRID_SNAPSHOT::V1\0",

    /// Visited-key fingerprint: agent position + dirt configuration.
    VisitedKey => b"VACUUM::VISITED_KEY::V1\0",

    /// Canonical search report hashing.
    SearchReport => b"VACUUM::SEARCH_REPORT::V1\0",
}
