//! Typed domain separators for canonical hashing.
//!
//! Every digest selects a domain via [`HashDomain`], so a trace digest can
//! never collide with a solution-list digest over the same bytes. Adding a
//! domain is one line in the macro invocation below.

/// Declares `HashDomain`, `as_bytes()`, `ALL`, and `Display` from one list.
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
    /// `ElementSetV1` canonical bytes.
    ElementSet => b"SUBSUM::ELEMENT_SET::V1\0",

    /// `TracePolicyV1` canonical bytes.
    TracePolicy => b"SUBSUM::TRACE_POLICY::V1\0",

    /// Complete ordered trace of search steps.
    SearchTrace => b"SUBSUM::SEARCH_TRACE::V1\0",

    /// Ordered solution list.
    SolutionList => b"SUBSUM::SOLUTION_LIST::V1\0",

    /// Run binding: elements, target, policy, trace and solution digests.
    SearchRun => b"SUBSUM::SEARCH_RUN::V1\0",
}
