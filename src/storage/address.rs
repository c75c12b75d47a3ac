//! Blob address parsing
//!
//! Storage addresses arrive as a single URL of the form
//! `<scheme>://<account>.net/<container>/<folder...>`. The literal `.net/`
//! marker anchors the split into account URL, container, and path. This is a
//! structural assumption about Azure-style storage hosts, not a general URL
//! parse.

use super::error::StorageError;

/// A storage address split into its account, container, and path parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobAddress {
    /// Account URL including scheme and the `.net` suffix
    /// (e.g. `https://acct.blob.core.windows.net`)
    pub account_url: String,
    /// Container name (first path segment after the host)
    pub container: String,
    /// Remaining path within the container; may be empty
    pub path: String,
}

impl BlobAddress {
    /// Parse a full storage URL into account URL, container, and path.
    ///
    /// The container segment is dropped from the path by position, so folder
    /// names that merely contain the container name are left intact.
    ///
    /// Returns `MalformedAddress` if the `.net/` marker is absent.
    pub fn parse(input: &str) -> Result<Self, StorageError> {
        let (account_url, remainder) = split_on_marker(input)?;

        let (container, rest) = match remainder.split_once('/') {
            Some((container, rest)) => (container, rest),
            None => (remainder, ""),
        };

        if container.is_empty() {
            return Err(StorageError::MalformedAddress(input.to_string()));
        }

        Ok(Self {
            account_url: account_url.to_string(),
            container: container.to_string(),
            path: rest.to_string(),
        })
    }

    /// Parse with the legacy substring-strip behavior.
    ///
    /// The original implementation removed every occurrence of the container
    /// name from the remaining path and then dropped the leading character,
    /// which corrupts folder names containing the container name as a
    /// substring. Kept for compatibility with callers that depend on the old
    /// paths; prefer [`BlobAddress::parse`].
    pub fn parse_compat(input: &str) -> Result<Self, StorageError> {
        let (account_url, remainder) = split_on_marker(input)?;

        let container = remainder.split('/').next().unwrap_or("");
        if container.is_empty() {
            return Err(StorageError::MalformedAddress(input.to_string()));
        }

        let stripped = remainder.replace(container, "");
        let path = stripped.get(1..).unwrap_or("");

        Ok(Self {
            account_url: account_url.to_string(),
            container: container.to_string(),
            path: path.to_string(),
        })
    }

    /// Reassemble the address into a full URL
    pub fn display(&self) -> String {
        if self.path.is_empty() {
            format!("{}/{}", self.account_url, self.container)
        } else {
            format!("{}/{}/{}", self.account_url, self.container, self.path)
        }
    }
}

impl std::fmt::Display for BlobAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Split an address on the `.net/` anchor into account URL and remainder
fn split_on_marker(input: &str) -> Result<(&str, &str), StorageError> {
    let idx = input
        .find(".net/")
        .ok_or_else(|| StorageError::MalformedAddress(input.to_string()))?;

    let account_url = &input[..idx + ".net".len()];
    let remainder = &input[idx + ".net/".len()..];
    Ok((account_url, remainder))
}
