//! Averaging Window Information Element
//!
//! The Averaging Window IE indicates the time window in milliseconds over which to average
//! QoS metrics for measurement and reporting purposes.
//! Per 3GPP TS 29.244 Section 8.2.115.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Averaging Window
///
/// Specifies the time window in milliseconds for averaging QoS measurements.
/// Used in quality of service monitoring and reporting to define the measurement period
/// over which QoS parameters are averaged before being reported.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.115
///
/// # Structure
/// - 4 bytes: Time window value in milliseconds (u32, big-endian)
///
/// # Examples
///
/// ```
/// use pfcp_engine::ie::averaging_window::AveragingWindow;
///
/// // Create a 60,000 millisecond (60 second) averaging window
/// let window = AveragingWindow::new(60000);
/// assert_eq!(window.milliseconds(), 60000);
///
/// // Marshal and unmarshal
/// let bytes = window.marshal();
/// let parsed = AveragingWindow::unmarshal(&bytes)?;
/// assert_eq!(window, parsed);
/// # Ok::<(), pfcp_engine::error::PfcpError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AveragingWindow {
    /// Time window in milliseconds
    milliseconds: u32,
}

impl AveragingWindow {
    /// Create a new Averaging Window
    ///
    /// # Arguments
    /// * `milliseconds` - Time window in milliseconds (0 to u32::MAX)
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::averaging_window::AveragingWindow;
    ///
    /// let window = AveragingWindow::new(300000); // 300 seconds
    /// assert_eq!(window.milliseconds(), 300000);
    /// ```
    pub fn new(milliseconds: u32) -> Self {
        AveragingWindow { milliseconds }
    }

    /// Get the averaging window in milliseconds
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::averaging_window::AveragingWindow;
    ///
    /// let window = AveragingWindow::new(120000); // 120 seconds
    /// assert_eq!(window.milliseconds(), 120000);
    /// ```
    pub fn milliseconds(&self) -> u32 {
        self.milliseconds
    }

    /// Marshal Averaging Window to bytes
    ///
    /// # Returns
    /// 4-byte vector containing window value in milliseconds (big-endian)
    pub fn marshal(&self) -> Vec<u8> {
        self.milliseconds.to_be_bytes().to_vec()
    }

    /// Marshal to a buffer
    pub fn marshal_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.milliseconds.to_be_bytes());
    }

    /// Unmarshal Averaging Window from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing averaging window data (must be at least 4 bytes)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::averaging_window::AveragingWindow;
    ///
    /// let window = AveragingWindow::new(1800000); // 1800 seconds = 30 minutes
    /// let bytes = window.marshal();
    /// let parsed = AveragingWindow::unmarshal(&bytes)?;
    /// assert_eq!(window, parsed);
    /// # Ok::<(), pfcp_engine::error::PfcpError>(())
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Averaging Window",
                IeType::AveragingWindow,
                4,
                data.len(),
            ));
        }

        let bytes: [u8; 4] = data[0..4].try_into().unwrap();
        let milliseconds = u32::from_be_bytes(bytes);

        Ok(AveragingWindow { milliseconds })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::averaging_window::AveragingWindow;
    /// use pfcp_engine::ie::IeType;
    ///
    /// let window = AveragingWindow::new(600000); // 600 seconds = 10 minutes
    /// let ie = window.to_ie();
    /// assert_eq!(ie.ie_type, IeType::AveragingWindow);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::AveragingWindow, self.marshal())
    }

    // Convenience constructors for common averaging windows

    /// Create a 10 millisecond averaging window
    pub fn ten_milliseconds() -> Self {
        AveragingWindow { milliseconds: 10 }
    }

    /// Create a 100 millisecond averaging window
    pub fn hundred_milliseconds() -> Self {
        AveragingWindow { milliseconds: 100 }
    }

    /// Create a 1-second (1000 millisecond) averaging window
    pub fn one_second() -> Self {
        AveragingWindow { milliseconds: 1000 }
    }

    /// Create a 10-second (10,000 millisecond) averaging window
    pub fn ten_seconds() -> Self {
        AveragingWindow {
            milliseconds: 10000,
        }
    }

    /// Create a 1-minute (60,000 millisecond) averaging window
    pub fn one_minute() -> Self {
        AveragingWindow {
            milliseconds: 60000,
        }
    }

    /// Create a 5-minute (300,000 millisecond) averaging window
    pub fn five_minutes() -> Self {
        AveragingWindow {
            milliseconds: 300000,
        }
    }

    /// Create a 10-minute (600,000 millisecond) averaging window
    pub fn ten_minutes() -> Self {
        AveragingWindow {
            milliseconds: 600000,
        }
    }

    /// Create a 30-minute (1,800,000 millisecond) averaging window
    pub fn thirty_minutes() -> Self {
        AveragingWindow {
            milliseconds: 1800000,
        }
    }

    /// Create a 1-hour (3,600,000 millisecond) averaging window
    pub fn one_hour() -> Self {
        AveragingWindow {
            milliseconds: 3600000,
        }
    }
}
