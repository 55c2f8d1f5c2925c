//! Application Instance ID Information Element
//!
//! The Application Instance ID IE identifies a specific application instance
//! that provides application services for detected application traffic.
//! Per 3GPP TS 29.244 Section 8.2.60, this is an OctetString type IE.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Application Instance ID
///
/// Identifies a specific application instance in the data network for
/// detected application traffic. Used in conjunction with Application Detection
/// to route traffic to specific application server instances.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.60
///
/// # Structure
/// Variable-length OctetString containing the application instance identifier
///
/// # Examples
///
/// ```
/// use pfcp_engine::ie::application_instance_id::ApplicationInstanceId;
///
/// // Create application instance ID for a specific server
/// let app_id = ApplicationInstanceId::new("server-01.example.com");
/// assert_eq!(app_id.value(), "server-01.example.com");
///
/// // Marshal and unmarshal
/// let bytes = app_id.marshal();
/// let parsed = ApplicationInstanceId::unmarshal(&bytes).unwrap();
/// assert_eq!(app_id, parsed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationInstanceId {
    /// Application instance identifier
    instance_id: String,
}

impl ApplicationInstanceId {
    /// Create a new Application Instance ID
    ///
    /// # Arguments
    /// * `instance_id` - Application instance identifier string
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::application_instance_id::ApplicationInstanceId;
    ///
    /// let app_id = ApplicationInstanceId::new("cdn-server-1");
    /// assert_eq!(app_id.value(), "cdn-server-1");
    /// ```
    pub fn new(instance_id: &str) -> Self {
        ApplicationInstanceId {
            instance_id: instance_id.to_string(),
        }
    }

    /// Get the application instance identifier value
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::application_instance_id::ApplicationInstanceId;
    ///
    /// let app_id = ApplicationInstanceId::new("video-server-01");
    /// assert_eq!(app_id.value(), "video-server-01");
    /// ```
    pub fn value(&self) -> &str {
        &self.instance_id
    }

    /// Check if the application instance ID is empty
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::application_instance_id::ApplicationInstanceId;
    ///
    /// let app_id = ApplicationInstanceId::new("server-1");
    /// assert!(!app_id.is_empty());
    ///
    /// let empty_id = ApplicationInstanceId::new("");
    /// assert!(empty_id.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.instance_id.is_empty()
    }

    /// Marshal Application Instance ID to bytes
    ///
    /// # Returns
    /// Byte vector containing UTF-8 encoded instance identifier
    pub fn marshal(&self) -> Vec<u8> {
        self.instance_id.as_bytes().to_vec()
    }

    /// Unmarshal Application Instance ID from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing UTF-8 encoded instance identifier
    ///
    /// # Errors
    /// Returns error if data is not valid UTF-8
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::application_instance_id::ApplicationInstanceId;
    ///
    /// let app_id = ApplicationInstanceId::new("game-server-5");
    /// let bytes = app_id.marshal();
    /// let parsed = ApplicationInstanceId::unmarshal(&bytes).unwrap();
    /// assert_eq!(app_id, parsed);
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        let instance_id = String::from_utf8(data.to_vec()).map_err(|_| {
            PfcpError::invalid_value("Application Instance ID", "instance_id", "invalid UTF-8")
        })?;
        Ok(ApplicationInstanceId { instance_id })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::application_instance_id::ApplicationInstanceId;
    /// use pfcp_engine::ie::IeType;
    ///
    /// let app_id = ApplicationInstanceId::new("app-server-1");
    /// let ie = app_id.to_ie();
    /// assert_eq!(ie.ie_type, IeType::ApplicationInstanceId);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::ApplicationInstanceId, self.marshal())
    }
}
