//! Extractors Crate
//!
//! This crate turns third-party contact exports into structured contacts. It has
//! no knowledge of how those contacts are stored afterwards.
//!
//! # Architecture
//!
//! - **Types**: Shared request/response types live in the `shared-types` crate
//! - **Implementations**: Concrete parsers are implemented in this crate
//!
//! # Available Parsers
//!
//! - `VcardParser`: Parses vCard 2.1, 3.0 and 4.0 exports into `Contact`s
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::VcardParser;
//!
//! let parser = VcardParser::new();
//! let outcome = parser.parse(&text);
//! for contact in &outcome.contacts {
//!     println!("{}", contact.name());
//! }
//! ```

pub mod vcard;

// Re-export commonly used types
pub use vcard::{CardError, Contact, ParseOutcome, VcardParser};
