//! Identifier types used throughout the ShopSecure core.
//!
//! Rows are keyed by i64 ids (SQLite rowids), exposed as distinct newtypes
//! so a cart item id cannot be passed where a product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row id.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the underlying row id.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id! {
    /// Unique identifier for a product in the catalog.
    ProductId
}

define_id! {
    /// Unique identifier for a review row.
    ReviewId
}

define_id! {
    /// Unique identifier for a cart item row.
    CartItemId
}

define_id! {
    /// Identifier of an authenticated user.
    ///
    /// Issued by the identity collaborator; the core never mints these.
    UserId
}
