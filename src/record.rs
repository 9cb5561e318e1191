//! Rrset payloads for the record endpoints.

use serde::Serialize;
use strum_macros::IntoStaticStr;

/// TTL in seconds applied to created records when the caller supplies none.
pub const DEFAULT_TTL: u32 = 86400;

/// Serial placed in SOA content when the caller supplies none.
///
/// This is a fixed value, not derived from the clock. A zone whose SOA is
/// replaced more than once should set [`Soa::serial`] to a monotonically
/// increasing value of its own, or rely on the server's SOA-EDIT-API
/// processing to bump it.
pub const DEFAULT_SOA_SERIAL: u32 = 2022020708;

/// Possible types a DNS record can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Type {
    A,
    Aaaa,
    Caa,
    Cname,
    Mx,
    Ns,
    Ptr,
    Soa,
    Srv,
    Txt,
}

impl Type {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Whether a submitted rrset replaces the records under its name and type,
/// or removes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ChangeType {
    Replace,
    Delete,
}

impl ChangeType {
    /// Gets the string representation of the changetype.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// A single record entry inside an rrset.
///
/// `content` is `null` for DELETE changes; the server ignores content when
/// removing an rrset.
#[derive(Debug, Serialize)]
pub(crate) struct Record {
    pub(crate) content: Option<String>,
    pub(crate) disabled: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct Rrset {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) rrtype: Type,
    pub(crate) ttl: Option<u32>,
    pub(crate) changetype: ChangeType,
    pub(crate) records: Vec<Record>,
}

/// Body of a record-edit PATCH request.
#[derive(Debug, Serialize)]
pub(crate) struct RrsetPatch {
    pub(crate) rrsets: Vec<Rrset>,
}

impl RrsetPatch {
    /// Builds a patch holding exactly one rrset with exactly one record
    /// entry, the only shape the client ever submits.
    pub(crate) fn single(
        name: String,
        rrtype: Type,
        ttl: Option<u32>,
        changetype: ChangeType,
        content: Option<&str>,
    ) -> Self {
        Self {
            rrsets: vec![Rrset {
                name,
                rrtype,
                ttl,
                changetype,
                records: vec![Record {
                    content: content.map(str::to_string),
                    disabled: false,
                }],
            }],
        }
    }
}

/// Start-of-authority data for a zone apex.
///
/// [`Soa::new`] fills in the usual timer defaults and [`DEFAULT_SOA_SERIAL`];
/// all fields are public and can be overwritten before sending.
///
/// # Examples
///
/// ```
/// use pdns_client::record::Soa;
///
/// let mut soa = Soa::new("ns1.example.com.", "hostmaster.example.com.");
/// soa.serial = 2024070101;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soa {
    pub primary: String,
    pub email: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub ttl: u32,
}

impl Soa {
    /// Creates an SOA with default serial and timers.
    pub fn new(primary: &str, email: &str) -> Self {
        Self {
            primary: primary.to_string(),
            email: email.to_string(),
            serial: DEFAULT_SOA_SERIAL,
            refresh: 3600,
            retry: 900,
            expire: 604800,
            ttl: DEFAULT_TTL,
        }
    }

    /// Renders the record content string:
    /// `<primary> <email> <serial> <refresh> <retry> <expire> <ttl>`.
    ///
    /// `primary` and `email` are taken verbatim; no hostmaster rewriting is
    /// applied to the email field.
    pub fn content(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            self.primary, self.email, self.serial, self.refresh, self.retry, self.expire, self.ttl
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn type_and_changetype_serialize_uppercase() {
        assert_eq!(Type::Aaaa.as_str(), "AAAA");
        assert_eq!(Type::Soa.as_str(), "SOA");
        assert_eq!(ChangeType::Replace.as_str(), "REPLACE");
        assert_eq!(ChangeType::Delete.as_str(), "DELETE");
    }

    #[test]
    fn replace_patch_holds_one_enabled_record() {
        let patch = RrsetPatch::single(
            "www.example.com.".to_string(),
            Type::A,
            Some(86400),
            ChangeType::Replace,
            Some("192.0.2.1"),
        );
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({
                "rrsets": [{
                    "name": "www.example.com.",
                    "type": "A",
                    "ttl": 86400,
                    "changetype": "REPLACE",
                    "records": [{"content": "192.0.2.1", "disabled": false}],
                }],
            })
        );
    }

    #[test]
    fn delete_patch_nulls_content_and_ttl() {
        let patch = RrsetPatch::single(
            "www.example.com.".to_string(),
            Type::Aaaa,
            None,
            ChangeType::Delete,
            None,
        );
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({
                "rrsets": [{
                    "name": "www.example.com.",
                    "type": "AAAA",
                    "ttl": null,
                    "changetype": "DELETE",
                    "records": [{"content": null, "disabled": false}],
                }],
            })
        );
    }

    #[test]
    fn soa_content_uses_defaults() {
        let soa = Soa::new("ns1.z.", "admin@z.");
        assert_eq!(
            soa.content(),
            "ns1.z. admin@z. 2022020708 3600 900 604800 86400"
        );
    }

    #[test]
    fn soa_serial_is_overridable() {
        let mut soa = Soa::new("ns1.z.", "admin@z.");
        soa.serial = 2024070101;
        assert_eq!(
            soa.content(),
            "ns1.z. admin@z. 2024070101 3600 900 604800 86400"
        );
    }
}
