//! Zone descriptors for the zones endpoints.

use serde::Serialize;
use strum_macros::IntoStaticStr;

/// SOA-EDIT-API metadata set on every zone this client creates, so the
/// server bumps the SOA serial when records change through the API.
pub const SOA_EDIT_API: &str = "INCEPTION-INCREMENT";

/// Replication kind of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
pub enum ZoneKind {
    Master,
    Native,
    Slave,
}

impl ZoneKind {
    /// Gets the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Body of a zone creation POST request.
///
/// Both list fields are always present in the serialized payload; the one
/// that does not apply to the kind is sent as `null`. The lists are passed
/// through unchecked.
#[derive(Debug, Serialize)]
pub(crate) struct ZoneCreate {
    pub(crate) kind: ZoneKind,
    pub(crate) soa_edit_api: &'static str,
    pub(crate) name: String,
    pub(crate) nameservers: Option<Vec<String>>,
    pub(crate) masters: Option<Vec<String>>,
}

impl ZoneCreate {
    pub(crate) fn new(
        kind: ZoneKind,
        name: &str,
        nameservers: Option<&[&str]>,
        masters: Option<&[&str]>,
    ) -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        Self {
            kind,
            soa_edit_api: SOA_EDIT_API,
            name: name.to_string(),
            nameservers: nameservers.map(owned),
            masters: masters.map(owned),
        }
    }
}
