//! Leaf specifications.
//!
//! Each leaf tests one field through a capability trait and captures its
//! comparison parameters at construction. A missing field never matches.
//!
//! | Field | Leaves |
//! |-------|--------|
//! | active | [`Active`], [`Inactive`] |
//! | id | [`IdEquals`], [`IdRange`], [`IdIn`] |
//! | name | [`NameEquals`], [`NameEqualsIgnoreCase`], [`NameContains`], [`NameStartsWith`], [`NameEndsWith`], [`NameMatchesRegex`], [`NameLengthBetween`], [`NameIn`] |
//! | price | [`PriceGreaterThan`], [`PriceLessThan`], [`PriceBetween`] |
//! | created | [`CreatedBefore`], [`CreatedAfter`], [`CreatedBetween`] |

mod active;
mod created;
mod id;
mod name;
mod price;

pub use active::{Active, Inactive};
pub use created::{CreatedAfter, CreatedBefore, CreatedBetween};
pub use id::{IdEquals, IdIn, IdRange};
pub use name::{
    NameContains, NameEndsWith, NameEquals, NameEqualsIgnoreCase, NameIn, NameLengthBetween,
    NameMatchesRegex, NameStartsWith,
};
pub use price::{PriceBetween, PriceGreaterThan, PriceLessThan};
