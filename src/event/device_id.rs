// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a bridged device.
///
/// Device ids are assigned by the vendor registry and arrive as opaque
/// strings; this wrapper gives them a distinct type so they cannot be
/// confused with display names or other strings.
///
/// # Examples
///
/// ```
/// use climabridge::event::DeviceId;
///
/// let id = DeviceId::new("14500xyz");
/// assert_eq!(id.as_str(), "14500xyz");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(String);

impl DeviceId {
    /// Creates a device identifier from a vendor-assigned id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceId({})", self.0)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_raw_string() {
        let id = DeviceId::new("abc123");
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(DeviceId::new("a"), DeviceId::from("a"));
        assert_ne!(DeviceId::new("a"), DeviceId::new("b"));
    }

    #[test]
    fn hashable() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(DeviceId::new("a"));
        assert!(set.contains(&DeviceId::new("a")));
        assert!(!set.contains(&DeviceId::new("b")));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", DeviceId::new("x1")), "DeviceId(x1)");
    }
}
