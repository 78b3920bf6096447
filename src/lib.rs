//! CCMM Harvester - Convert CCMM metadata XML to repository records.
//!
//! This crate converts dataset metadata documents following the CCMM
//! standard (the Czech national research-data metadata model) into the
//! nested records two downstream repositories ingest:
//!
//! - the **NMA** (National Metadata Aggregator) record, produced by a
//!   recursive-descent parse of the XML document, and
//! - the **production** (deposition repository) record, produced by a
//!   second-stage transform of the NMA dataset.
//!
//! # Example
//!
//! ```
//! use ccmm_harvester::{harvest_nma, MemoryResolver};
//!
//! let mut vocabularies = MemoryResolver::new();
//! vocabularies.insert(
//!     "languages",
//!     "http://publications.europa.eu/resource/authority/language/CES",
//!     "CES",
//! );
//!
//! let xml = r#"<dataset>
//!     <title>Kvalita ovzduší</title>
//!     <primary_language>
//!         <iri>http://publications.europa.eu/resource/authority/language/CES</iri>
//!     </primary_language>
//! </dataset>"#;
//!
//! let record = harvest_nma(xml, &vocabularies).unwrap();
//! assert_eq!(record["metadata"]["title"], "Kvalita ovzduší");
//! assert_eq!(record["metadata"]["primary_language"]["id"], "CES");
//! ```
//!
//! # Architecture
//!
//! - [`xml`]: consume-tracking scopes over the XML DOM
//! - [`vocabulary`]: controlled-vocabulary resolution capability
//! - [`affiliation`]: affiliation lookup capability
//! - [`model`]: typed NMA and production record models
//! - [`parser`]: the recursive-descent NMA parser
//! - [`transform`]: the NMA-to-production transform
//! - [`clean`]: final record cleaning
//! - [`langcodes`]: language code conversion and detection
//! - [`error`]: error types and Result alias
//! - [`harvester`]: top-level conversion entry points
//! - [`cli`]: command-line interface

pub mod affiliation;
pub mod clean;
pub mod cli;
pub mod error;
pub mod harvester;
pub mod langcodes;
pub mod model;
pub mod parser;
pub mod transform;
pub mod vocabulary;
pub mod xml;

// Re-export the main conversion functions
pub use harvester::{harvest_nma, harvest_production};

// Re-export commonly used items
pub use affiliation::{AffiliationResolver, NoAffiliations};
pub use error::{HarvestError, Result};
pub use parser::NmaParser;
pub use transform::to_production;
pub use vocabulary::{MemoryResolver, VocabularyError, VocabularyResolver};
