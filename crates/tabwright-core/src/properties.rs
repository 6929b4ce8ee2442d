//! Document properties and workbook protection

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Timestamp layout of `Created` / `Modified`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Name written as creator and last editor unless overridden
pub const DEFAULT_CREATOR: &str = "tabwright";

/// Document properties with a fixed key set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileProperties {
    pub category: String,
    pub content_status: String,
    pub created: String,
    pub creator: String,
    pub description: String,
    pub identifier: String,
    pub keywords: String,
    pub last_modified_by: String,
    pub modified: String,
    pub revision: String,
    pub subject: String,
    pub title: String,
    pub language: String,
    pub version: String,
}

impl FileProperties {
    /// Property keys, as the renderer spells them
    pub const KEYS: [&'static str; 14] = [
        "Category",
        "ContentStatus",
        "Created",
        "Creator",
        "Description",
        "Identifier",
        "Keywords",
        "LastModifiedBy",
        "Modified",
        "Revision",
        "Subject",
        "Title",
        "Language",
        "Version",
    ];

    /// Defaults with `Created` and `Modified` set to `at`
    pub fn stamped(at: DateTime<Utc>) -> Self {
        let now = at.format(TIMESTAMP_FORMAT).to_string();
        Self {
            created: now.clone(),
            modified: now,
            ..Self::default()
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        Some(match key {
            "Category" => &mut self.category,
            "ContentStatus" => &mut self.content_status,
            "Created" => &mut self.created,
            "Creator" => &mut self.creator,
            "Description" => &mut self.description,
            "Identifier" => &mut self.identifier,
            "Keywords" => &mut self.keywords,
            "LastModifiedBy" => &mut self.last_modified_by,
            "Modified" => &mut self.modified,
            "Revision" => &mut self.revision,
            "Subject" => &mut self.subject,
            "Title" => &mut self.title,
            "Language" => &mut self.language,
            "Version" => &mut self.version,
            _ => return None,
        })
    }

    /// Set a property by key; unknown keys are rejected
    pub fn set<V: Into<String>>(&mut self, key: &str, value: V) -> Result<()> {
        let slot = self
            .field_mut(key)
            .ok_or_else(|| Error::InvalidFileProperty(key.to_string()))?;
        *slot = value.into();
        Ok(())
    }

    /// Read a property by key
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "Category" => &self.category,
            "ContentStatus" => &self.content_status,
            "Created" => &self.created,
            "Creator" => &self.creator,
            "Description" => &self.description,
            "Identifier" => &self.identifier,
            "Keywords" => &self.keywords,
            "LastModifiedBy" => &self.last_modified_by,
            "Modified" => &self.modified,
            "Revision" => &self.revision,
            "Subject" => &self.subject,
            "Title" => &self.title,
            "Language" => &self.language,
            "Version" => &self.version,
            _ => return None,
        };
        Some(value.as_str())
    }
}

impl Default for FileProperties {
    fn default() -> Self {
        Self {
            category: String::new(),
            content_status: String::new(),
            created: String::new(),
            creator: DEFAULT_CREATOR.to_string(),
            description: String::new(),
            identifier: "xlsx".to_string(),
            keywords: "spreadsheet".to_string(),
            last_modified_by: DEFAULT_CREATOR.to_string(),
            modified: String::new(),
            revision: "0".to_string(),
            subject: String::new(),
            title: String::new(),
            language: "en-US".to_string(),
            version: String::new(),
        }
    }
}

/// Password hashing algorithm for workbook protection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtectionAlgorithm {
    Xor,
    Md4,
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl ProtectionAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtectionAlgorithm::Xor => "XOR",
            ProtectionAlgorithm::Md4 => "MD4",
            ProtectionAlgorithm::Md5 => "MD5",
            ProtectionAlgorithm::Sha1 => "SHA-1",
            ProtectionAlgorithm::Sha256 => "SHA-256",
            ProtectionAlgorithm::Sha384 => "SHA-384",
            ProtectionAlgorithm::Sha512 => "SHA-512",
        }
    }
}

impl FromStr for ProtectionAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "XOR" => Ok(ProtectionAlgorithm::Xor),
            "MD4" => Ok(ProtectionAlgorithm::Md4),
            "MD5" => Ok(ProtectionAlgorithm::Md5),
            "SHA-1" => Ok(ProtectionAlgorithm::Sha1),
            "SHA-256" => Ok(ProtectionAlgorithm::Sha256),
            "SHA-384" => Ok(ProtectionAlgorithm::Sha384),
            "SHA-512" => Ok(ProtectionAlgorithm::Sha512),
            other => Err(Error::InvalidProtection(other.to_string())),
        }
    }
}

impl fmt::Display for ProtectionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProtectionAlgorithm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Workbook-level protection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkbookProtection {
    pub algorithm: ProtectionAlgorithm,
    pub password: String,
    pub lock_structure: bool,
    pub lock_windows: bool,
}

impl WorkbookProtection {
    pub fn new<P: Into<String>>(algorithm: ProtectionAlgorithm, password: P) -> Self {
        Self {
            algorithm,
            password: password.into(),
            lock_structure: false,
            lock_windows: false,
        }
    }

    pub fn with_locks(mut self, lock_structure: bool, lock_windows: bool) -> Self {
        self.lock_structure = lock_structure;
        self.lock_windows = lock_windows;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let props = FileProperties::default();
        assert_eq!(props.get("Creator"), Some(DEFAULT_CREATOR));
        assert_eq!(props.get("Identifier"), Some("xlsx"));
        assert_eq!(props.get("Revision"), Some("0"));
        assert_eq!(props.get("Created"), Some(""));
    }

    #[test]
    fn test_stamped() {
        let at = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 5).unwrap();
        let props = FileProperties::stamped(at);
        assert_eq!(props.created, "2024-05-17T09:30:05Z");
        assert_eq!(props.modified, props.created);
    }

    #[test]
    fn test_set_known_and_unknown_keys() {
        let mut props = FileProperties::default();
        props.set("Title", "Quarterly report").unwrap();
        assert_eq!(props.title, "Quarterly report");
        assert!(matches!(
            props.set("Colour", "red"),
            Err(Error::InvalidFileProperty(key)) if key == "Colour"
        ));
    }

    #[test]
    fn test_every_key_is_serialized() {
        let json = serde_json::to_value(FileProperties::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), FileProperties::KEYS.len());
        for key in FileProperties::KEYS {
            assert!(object.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_protection() {
        assert_eq!("SHA-256".parse::<ProtectionAlgorithm>().unwrap(), ProtectionAlgorithm::Sha256);
        assert!(matches!(
            "SHA-3".parse::<ProtectionAlgorithm>(),
            Err(Error::InvalidProtection(_))
        ));
        let protection = WorkbookProtection::new(ProtectionAlgorithm::Xor, "pw").with_locks(true, false);
        assert_eq!(
            serde_json::to_value(&protection).unwrap(),
            json!({"algorithm": "XOR", "password": "pw", "lock_structure": true, "lock_windows": false})
        );
    }
}
