//! Minimal AXL client for the UCM configuration API.
//!
//! Only the handful of requests the provisioning flow needs: partition and
//! route-list lookup, and list/add/remove of translation and route patterns.
//! Requests are plain SOAP envelopes over HTTPS; responses are picked apart
//! with regexes rather than a full XML stack.

use crate::config;
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::time::Duration;

/// AXL schema version spoken by this client.
const AXL_VERSION: &str = "10.0";

lazy_static! {
    static ref FAULT_RE: Regex =
        Regex::new(r"(?s)<faultstring>(.*?)</faultstring>").expect("Invalid Regex");
    static ref UUID_RE: Regex =
        Regex::new(r#"uuid="\{?([0-9a-fA-F-]+)\}?""#).expect("Invalid Regex");
    static ref ROW_RE: Regex = Regex::new(
        r#"(?s)<(transPattern|routePattern) uuid="\{?([0-9a-fA-F-]+)\}?">.*?<pattern>(.*?)</pattern>"#
    )
    .expect("Invalid Regex");
}

/// A pattern as it exists on the switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedPattern {
    pub uuid: String,
    pub pattern: String,
}

/// Whether the provisioning flow writes translation or route patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Translation,
    Route,
}

/// Connection to one UCM publisher.
pub struct AxlClient {
    http: reqwest::Client,
    url: String,
    user: String,
    password: String,
}

impl AxlClient {
    /// Create a client for the given publisher host.
    pub fn new(host: &str, user: &str, password: &str) -> Result<AxlClient, Box<dyn Error>> {
        // lab UCMs run with self-signed certificates
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(AxlClient {
            http,
            url: format!("https://{host}:8443/axl/"),
            user: user.to_string(),
            password: password.to_string(),
        })
    }

    /// Send one AXL request and return the raw response body.
    ///
    /// SOAP faults become errors; `not_found_ok` turns the "not found"
    /// fault of the get requests into an empty response instead.
    async fn request(
        &self,
        method: &str,
        body: &str,
        not_found_ok: bool,
    ) -> Result<Option<String>, Box<dyn Error>> {
        let envelope = format!(
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns="http://www.cisco.com/AXL/API/{AXL_VERSION}"><soapenv:Header/><soapenv:Body><ns:{method}>{body}</ns:{method}></soapenv:Body></soapenv:Envelope>"#
        );
        log::trace!("axl {method}: {body}");

        let response = self
            .http
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.password))
            .header(reqwest::header::CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"CUCM:DB ver={AXL_VERSION} {method}\""))
            .body(envelope)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if let Some(fault) = FAULT_RE.captures(&text) {
            let fault = fault[1].trim().to_string();
            if not_found_ok && fault.contains("was not found") {
                return Ok(None);
            }
            log::warn!("axl {method} fault: {fault}");
            return Err(format!("AXL {method} failed: {fault}").into());
        }
        if !status.is_success() {
            return Err(format!("AXL {method} failed with HTTP {status}").into());
        }
        Ok(Some(text))
    }

    /// UUID of a route partition, or None if it does not exist.
    pub async fn get_route_partition(&self, name: &str) -> Result<Option<String>, Box<dyn Error>> {
        let body = format!("<name>{name}</name><returnedTags><name/></returnedTags>");
        let response = self.request("getRoutePartition", &body, true).await?;
        Ok(response.and_then(|text| UUID_RE.captures(&text).map(|c| c[1].to_string())))
    }

    /// Create a route partition and return its UUID.
    pub async fn add_route_partition(&self, name: &str) -> Result<String, Box<dyn Error>> {
        let body = format!(
            "<routePartition><name>{name}</name><description>{name}</description></routePartition>"
        );
        let response = self
            .request("addRoutePartition", &body, false)
            .await?
            .unwrap_or_default();
        UUID_RE
            .captures(&response)
            .map(|c| c[1].to_string())
            .ok_or_else(|| format!("addRoutePartition {name} returned no uuid").into())
    }

    /// UUID of a route list, or None if it does not exist.
    pub async fn get_route_list(&self, name: &str) -> Result<Option<String>, Box<dyn Error>> {
        let body = format!("<name>{name}</name><returnedTags><name/></returnedTags>");
        let response = self.request("getRouteList", &body, true).await?;
        Ok(response.and_then(|text| UUID_RE.captures(&text).map(|c| c[1].to_string())))
    }

    /// All patterns of the given kind in a partition.
    pub async fn list_patterns(
        &self,
        kind: PatternKind,
        partition: &str,
    ) -> Result<Vec<ProvisionedPattern>, Box<dyn Error>> {
        let method = match kind {
            PatternKind::Translation => "listTransPattern",
            PatternKind::Route => "listRoutePattern",
        };
        let body = format!(
            "<searchCriteria><pattern>%</pattern><routePartitionName>{partition}</routePartitionName></searchCriteria><returnedTags><pattern/></returnedTags>"
        );
        let response = self.request(method, &body, false).await?.unwrap_or_default();
        Ok(parse_pattern_rows(&response))
    }

    /// Provision one blocking translation pattern.
    pub async fn add_translation_pattern(
        &self,
        pattern: &str,
        partition: &str,
    ) -> Result<(), Box<dyn Error>> {
        let body = format!(
            "<transPattern>\
             <pattern>{pattern}</pattern>\
             <routePartitionName>{partition}</routePartitionName>\
             <usage>Translation</usage>\
             <description>{description}</description>\
             <blockEnable>true</blockEnable>\
             <patternUrgency>true</patternUrgency>\
             </transPattern>",
            description = config::PARTITION_NAME,
        );
        self.request("addTransPattern", &body, false).await?;
        Ok(())
    }

    /// Provision one route pattern pointing at a route list.
    pub async fn add_route_pattern(
        &self,
        pattern: &str,
        partition: &str,
        route_list: &str,
    ) -> Result<(), Box<dyn Error>> {
        let body = format!(
            "<routePattern>\
             <pattern>{pattern}</pattern>\
             <routePartitionName>{partition}</routePartitionName>\
             <description>Mobile number</description>\
             <blockEnable>false</blockEnable>\
             <patternUrgency>true</patternUrgency>\
             <networkLocation>OffNet</networkLocation>\
             <digitDiscardInstructionName>PreDot</digitDiscardInstructionName>\
             <destination><routeListName>{route_list}</routeListName></destination>\
             </routePattern>"
        );
        self.request("addRoutePattern", &body, false).await?;
        Ok(())
    }

    /// Remove a provisioned pattern by UUID.
    pub async fn remove_pattern(
        &self,
        kind: PatternKind,
        uuid: &str,
    ) -> Result<(), Box<dyn Error>> {
        let method = match kind {
            PatternKind::Translation => "removeTransPattern",
            PatternKind::Route => "removeRoutePattern",
        };
        let body = format!("<uuid>{uuid}</uuid>");
        self.request(method, &body, false).await?;
        Ok(())
    }
}

/// Pull the (uuid, pattern) rows out of a list response.
fn parse_pattern_rows(response: &str) -> Vec<ProvisionedPattern> {
    ROW_RE
        .captures_iter(response)
        .map(|c| ProvisionedPattern {
            uuid: c[2].to_string(),
            pattern: c[3].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern_rows() {
        let response = r#"<return>
            <transPattern uuid="{1A2B3C4D-0000-0000-0000-000000000001}">
              <pattern>\+52555512XXXX</pattern>
            </transPattern>
            <transPattern uuid="{1A2B3C4D-0000-0000-0000-000000000002}">
              <pattern>\+52811234[01234]XXX</pattern>
            </transPattern>
          </return>"#;
        let rows = parse_pattern_rows(response);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].uuid, "1A2B3C4D-0000-0000-0000-000000000001");
        assert_eq!(rows[0].pattern, r"\+52555512XXXX");
        assert_eq!(rows[1].pattern, r"\+52811234[01234]XXX");
    }

    #[test]
    fn test_parse_pattern_rows_empty() {
        assert!(parse_pattern_rows("<return/>").is_empty());
    }

    #[test]
    fn test_fault_regex() {
        let fault = "<soapenv:Fault><faultcode>x</faultcode><faultstring>Item was not found</faultstring></soapenv:Fault>";
        assert_eq!(&FAULT_RE.captures(fault).unwrap()[1], "Item was not found");
    }
}
