//! Identities and claims attached to a request.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Well-known claim type URIs.
pub mod claim_types {
    pub const NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";
    pub const EMAIL: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";
    pub const NAME_IDENTIFIER: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
    pub const ROLE: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";
    pub const GIVEN_NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/givenname";
    pub const SURNAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/surname";
}

/// A single `(type, value)` assertion about a principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// A principal's identity: an ordered list of claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<String>,
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl ClaimsIdentity {
    pub fn new(claims: impl IntoIterator<Item = Claim>) -> Self {
        Self {
            authentication_type: None,
            claims: claims.into_iter().collect(),
        }
    }

    pub fn with_authentication_type(mut self, authentication_type: impl Into<String>) -> Self {
        self.authentication_type = Some(authentication_type.into());
        self
    }

    /// An identity counts as authenticated once it names an authentication type.
    pub fn is_authenticated(&self) -> bool {
        self.authentication_type
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }

    pub fn find_first(&self, claim_type: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_type == claim_type)
    }

    /// Value of the first name claim.
    pub fn name(&self) -> Option<&str> {
        self.find_first(claim_types::NAME).map(|c| c.value.as_str())
    }
}

/// Group claims across identities by type, joining values with `", "`.
///
/// Types keep the order in which they were first seen.
pub fn aggregate_claims(identities: &[ClaimsIdentity]) -> IndexMap<String, String> {
    let mut grouped: IndexMap<String, Vec<&str>> = IndexMap::new();
    for claim in identities.iter().flat_map(|identity| &identity.claims) {
        grouped
            .entry(claim.claim_type.clone())
            .or_default()
            .push(claim.value.as_str());
    }

    grouped
        .into_iter()
        .map(|(claim_type, values)| (claim_type, values.join(", ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_identity() -> ClaimsIdentity {
        ClaimsIdentity::new([
            Claim::new(claim_types::NAME, "ExampleName"),
            Claim::new(claim_types::EMAIL, "ExampleEmail"),
        ])
    }

    #[test]
    fn test_aggregate_single_identity() {
        let claims = aggregate_claims(&[example_identity()]);
        assert_eq!(claims[claim_types::NAME], "ExampleName");
        assert_eq!(claims[claim_types::EMAIL], "ExampleEmail");
    }

    #[test]
    fn test_aggregate_joins_across_identities_in_first_seen_order() {
        let second = ClaimsIdentity::new([
            Claim::new(claim_types::ROLE, "admin"),
            Claim::new(claim_types::NAME, "Alias"),
        ]);
        let claims = aggregate_claims(&[example_identity(), second]);

        assert_eq!(claims[claim_types::NAME], "ExampleName, Alias");
        let order: Vec<&str> = claims.keys().map(String::as_str).collect();
        assert_eq!(
            order,
            vec![claim_types::NAME, claim_types::EMAIL, claim_types::ROLE]
        );
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate_claims(&[]).is_empty());
    }

    #[test]
    fn test_identity_name_and_authentication() {
        let identity = example_identity();
        assert_eq!(identity.name(), Some("ExampleName"));
        assert!(!identity.is_authenticated());
        assert!(identity.with_authentication_type("Bearer").is_authenticated());
    }

    #[test]
    fn test_claim_deserializes_type_field() {
        let claim: Claim = serde_json::from_str(r#"{"type":"role","value":"reader"}"#).unwrap();
        assert_eq!(claim, Claim::new("role", "reader"));
    }
}
