//! Affiliation lookup capability.
//!
//! The production repository keys known affiliations by their own vocabulary
//! ids. Matching an incoming affiliation or funder organization to such an id
//! goes through identifier lookup (ROR and friends). The lookup is injectable
//! so a deployment can plug in a real index; the default answers "not found"
//! for every query, which keeps affiliations as plain names.

use crate::model::nma::Identifier;

/// Capability mapping a set of identifiers to an affiliation vocabulary id.
pub trait AffiliationResolver {
    /// Return the affiliation id matching any of `identifiers`, if known.
    fn affiliation_id(&self, identifiers: &[Identifier]) -> Option<String>;
}

/// Default [`AffiliationResolver`] with no backing index.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAffiliations;

impl AffiliationResolver for NoAffiliations {
    fn affiliation_id(&self, _identifiers: &[Identifier]) -> Option<String> {
        tracing::debug!("affiliation lookup by identifiers is not available");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_affiliations_never_matches() {
        let identifiers = vec![Identifier {
            iri: Some("https://ror.org/01pv73b02".to_string()),
            value: Some("01pv73b02".to_string()),
            scheme: None,
        }];
        assert_eq!(NoAffiliations.affiliation_id(&identifiers), None);
        assert_eq!(NoAffiliations.affiliation_id(&[]), None);
    }
}
