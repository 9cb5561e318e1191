use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::debug;
use url::Url;

use crate::record::{ChangeType, DEFAULT_TTL, RrsetPatch, Soa, Type};
use crate::zone::{ZoneCreate, ZoneKind};
use crate::{ApiError, ClientBuilderError, ClientError};

/// Builds the fully-qualified name for a record inside a zone.
///
/// An empty record name addresses the zone apex. Anything else is joined to
/// the zone name with a single dot, verbatim; names are not normalized.
fn qualify(record_name: &str, zone: &str) -> String {
    if record_name.is_empty() {
        zone.to_string()
    } else {
        format!("{record_name}.{zone}")
    }
}

/// Decodes a response body according to the API's error convention.
///
/// Any body that parses as JSON is data, including 4xx/5xx error bodies. A
/// body that does not parse as JSON yields a status error for error codes,
/// and `Null` for success codes (the server answers zone deletion with an
/// empty `204 No Content`).
fn decode_body(status: StatusCode, body: &str) -> Result<JsonValue, ClientError> {
    match serde_json::from_str(body) {
        Ok(data) => Ok(data),
        Err(_) if status.is_client_error() || status.is_server_error() => {
            Err(ApiError::new(status, body).into())
        }
        Err(_) => Ok(JsonValue::Null),
    }
}

/// Extracts the `rrsets` field from a decoded zone object.
fn take_rrsets(mut zone: JsonValue) -> Result<JsonValue, ClientError> {
    match zone.get_mut("rrsets") {
        Some(rrsets) => Ok(rrsets.take()),
        None => Err(ClientError::MissingField("rrsets".to_string())),
    }
}

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    api_key: Option<String>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            api_key: None,
        }
    }

    /// Sets the API endpoint to the one given.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s join
    /// semantics; the relative API paths are appended to it.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// Sets the API key to the one given.
    ///
    /// The key is sent verbatim in the `X-API-Key` header of every request.
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, the default endpoint of
    /// `http://127.0.0.1:8081/api/v1/` is used. In the case that no API key
    /// is set, requests carry no `X-API-Key` header at all; a stock PowerDNS
    /// server will reject them.
    ///
    /// # Errors
    /// - `UrlParse` if the default API endpoint fails to parse. This
    ///   shouldn't happen.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => "http://127.0.0.1:8081/api/v1/".parse()?,
        };

        Ok(Client::new(&endpoint, self.api_key.as_deref()))
    }
}

/// Blocking client for the PowerDNS Authoritative Server HTTP API.
///
/// Holds only the endpoint, the optional API key, and one reusable HTTP
/// transport; nothing is cached across calls. Operations return the decoded
/// response JSON as-is, including JSON error bodies (see the crate docs).
pub struct Client {
    endpoint: Url,
    api_key: Option<String>,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Creates a new Client.
    pub fn new(endpoint: &Url, api_key: Option<&str>) -> Self {
        Self {
            endpoint: endpoint.clone(),
            api_key: api_key.map(str::to_string),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Sends a request to the given relative path and decodes the response.
    ///
    /// The payload travels as query parameters for GET and as a JSON body
    /// for every other method.
    fn send_request<P>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&P>,
    ) -> Result<JsonValue, ClientError>
    where
        P: Serialize + ?Sized,
    {
        let url = self.endpoint.join(path)?;
        let is_get = method == Method::GET;

        let mut req = self.http.request(method, url.clone());
        if let Some(api_key) = &self.api_key {
            req = req.header("X-API-Key", api_key);
        }
        if let Some(payload) = payload {
            req = if is_get {
                req.query(payload)
            } else {
                req.json(payload)
            };
        }

        let resp = req.send()?;
        let status = resp.status();
        debug!(%url, %status, "PowerDNS API response");

        decode_body(status, &resp.text()?)
    }

    fn get(&self, path: &str) -> Result<JsonValue, ClientError> {
        self.send_request::<()>(Method::GET, path, None)
    }

    fn post<P: Serialize>(&self, path: &str, payload: &P) -> Result<JsonValue, ClientError> {
        self.send_request(Method::POST, path, Some(payload))
    }

    fn patch<P: Serialize>(&self, path: &str, payload: &P) -> Result<JsonValue, ClientError> {
        self.send_request(Method::PATCH, path, Some(payload))
    }

    fn delete(&self, path: &str) -> Result<JsonValue, ClientError> {
        self.send_request::<()>(Method::DELETE, path, None)
    }

    /// Lists the servers known to the API.
    pub fn servers(&self) -> Result<JsonValue, ClientError> {
        self.get("servers")
    }

    /// Retrieves a single server, usually `"localhost"`.
    pub fn server(&self, server_id: &str) -> Result<JsonValue, ClientError> {
        self.get(&format!("servers/{server_id}"))
    }

    /// Lists the zones hosted on a server.
    pub fn zones(&self, server_id: &str) -> Result<JsonValue, ClientError> {
        self.get(&format!("servers/{server_id}/zones"))
    }

    /// Retrieves a full zone object, including its rrsets.
    pub fn zone(&self, server_id: &str, name: &str) -> Result<JsonValue, ClientError> {
        self.get(&format!("servers/{server_id}/zones/{name}"))
    }

    /// Retrieves only the rrsets of a zone.
    ///
    /// # Errors
    /// - `MissingField` if the zone response carries no `rrsets` field.
    pub fn zone_records(&self, server_id: &str, name: &str) -> Result<JsonValue, ClientError> {
        take_rrsets(self.zone(server_id, name)?)
    }

    fn create_zone(
        &self,
        kind: ZoneKind,
        server_id: &str,
        name: &str,
        nameservers: Option<&[&str]>,
        masters: Option<&[&str]>,
    ) -> Result<JsonValue, ClientError> {
        let body = ZoneCreate::new(kind, name, nameservers, masters);
        self.post(&format!("servers/{server_id}/zones"), &body)
    }

    /// Creates a Master zone serving the given nameservers.
    pub fn create_master_zone(
        &self,
        server_id: &str,
        name: &str,
        nameservers: &[&str],
    ) -> Result<JsonValue, ClientError> {
        self.create_zone(ZoneKind::Master, server_id, name, Some(nameservers), None)
    }

    /// Creates a Native zone serving the given nameservers.
    pub fn create_native_zone(
        &self,
        server_id: &str,
        name: &str,
        nameservers: &[&str],
    ) -> Result<JsonValue, ClientError> {
        self.create_zone(ZoneKind::Native, server_id, name, Some(nameservers), None)
    }

    /// Creates a Slave zone transferring from the given masters.
    pub fn create_slave_zone(
        &self,
        server_id: &str,
        name: &str,
        masters: &[&str],
    ) -> Result<JsonValue, ClientError> {
        self.create_zone(ZoneKind::Slave, server_id, name, None, Some(masters))
    }

    /// Deletes a zone.
    ///
    /// The response body is discarded; transport and HTTP failures still
    /// propagate.
    pub fn delete_zone(&self, server_id: &str, name: &str) -> Result<(), ClientError> {
        self.delete(&format!("servers/{server_id}/zones/{name}"))?;
        Ok(())
    }

    fn edit_rrset(
        &self,
        changetype: ChangeType,
        server_id: &str,
        zone: &str,
        rrtype: Type,
        content: Option<&str>,
        record_name: &str,
        ttl: Option<u32>,
    ) -> Result<JsonValue, ClientError> {
        let body = RrsetPatch::single(qualify(record_name, zone), rrtype, ttl, changetype, content);
        self.patch(&format!("servers/{server_id}/zones/{zone}"), &body)
    }

    /// Creates or replaces a record under the zone.
    ///
    /// An empty `record_name` addresses the zone apex; otherwise the record
    /// lives at `record_name` + `.` + `zone`. `ttl` defaults to
    /// [DEFAULT_TTL] seconds. REPLACE overwrites every record currently
    /// sharing the name and type.
    pub fn create_record(
        &self,
        server_id: &str,
        zone: &str,
        rrtype: Type,
        content: &str,
        record_name: &str,
        ttl: Option<u32>,
    ) -> Result<JsonValue, ClientError> {
        self.edit_rrset(
            ChangeType::Replace,
            server_id,
            zone,
            rrtype,
            Some(content),
            record_name,
            Some(ttl.unwrap_or(DEFAULT_TTL)),
        )
    }

    /// Alias of [Client::create_record]; the REPLACE changetype makes no
    /// distinction between creating and editing.
    pub fn edit_record(
        &self,
        server_id: &str,
        zone: &str,
        rrtype: Type,
        content: &str,
        record_name: &str,
        ttl: Option<u32>,
    ) -> Result<JsonValue, ClientError> {
        self.create_record(server_id, zone, rrtype, content, record_name, ttl)
    }

    /// Removes every record under the given name and type.
    ///
    /// Content and TTL are sent as `null`; deletion addresses the whole
    /// rrset, not individual record values.
    pub fn delete_record(
        &self,
        server_id: &str,
        zone: &str,
        record_name: &str,
        rrtype: Type,
    ) -> Result<JsonValue, ClientError> {
        self.edit_rrset(
            ChangeType::Delete,
            server_id,
            zone,
            rrtype,
            None,
            record_name,
            None,
        )
    }

    /// Replaces the SOA record at the zone apex.
    pub fn create_soa_record(
        &self,
        server_id: &str,
        zone: &str,
        soa: &Soa,
    ) -> Result<JsonValue, ClientError> {
        self.edit_rrset(
            ChangeType::Replace,
            server_id,
            zone,
            Type::Soa,
            Some(&soa.content()),
            "",
            Some(soa.ttl),
        )
    }
}

#[cfg(test)]
mod tests;
