//! GenBank flat file (GBFF) parsing.
//!
//! A record is split off the input on `//` lines ([`split_records`]), its
//! FEATURES table is walked by [`FeatureScanner`], and every feature's location
//! and qualifiers are resolved with [`Location::parse`] and
//! [`extract_qualifiers`]. [`format_attributes`] turns the qualifiers into a
//! GFF3 attribute column.

mod attr;
mod location;
mod qualifier;
mod record;
mod scan;

pub use attr::*;
pub use location::*;
pub use qualifier::*;
pub use record::*;
pub use scan::*;
