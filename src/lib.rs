//! Total ordering and equality derived from a declared attribute list.
//!
//! A type opts in by registering an ordered list of *selectors*: named
//! attribute accessors, optionally preceded by the type-identity
//! pseudo-selector. From that single declaration it receives a
//! three-way comparison and the whole family of relational operators,
//! reduced attribute by attribute in declaration order with a
//! short-circuit at the first pair that differs.
//!
//! The resulting order is total even when attributes are unset:
//!
//! * an absent value sorts strictly before any present value,
//! * two absent values are equal at their position,
//! * equality across *different* types is structural by design; nominal
//!   type identity participates only when the declaration includes
//!   [`Selector::TypeIdentity`](decl::selector::Selector).
//!
//! Mismatched declarations (different selector counts, or different
//! selectors at a position) are configuration defects and surface as
//! [`ConfigError`](decl::error::ConfigError), never as a silent default
//! ordering.
//!
//! ```
//! use attrord::{attr_ordered, AttrOrderedExt};
//!
//! struct Employee {
//!     last_name: Option<String>,
//!     first_name: Option<String>,
//! }
//!
//! attr_ordered! {
//!     impl Employee {
//!         type Key = String;
//!         order = [last_name, first_name];
//!     }
//! }
//!
//! let jones = Employee {
//!     last_name: Some("Jones".into()),
//!     first_name: None,
//! };
//! let kelley = Employee {
//!     last_name: Some("Kelley".into()),
//!     first_name: Some("C".into()),
//! };
//!
//! assert!(jones < kelley);
//! assert!(jones.attr_lt(&kelley).unwrap());
//! ```

pub mod decl;
pub mod order;

pub use crate::decl::error::ConfigError;
pub use crate::decl::extract::extract;
pub use crate::decl::ordered::{AttrOrdered, ReadAttr};
pub use crate::decl::selector::{Declaration, Selector};
pub use crate::order::compare::{compare, compare_keys, AttrOrderedExt};
pub use crate::order::sort::{par_sorted, sorted};
pub use crate::order::value::{AttrValue, TypeTag};
