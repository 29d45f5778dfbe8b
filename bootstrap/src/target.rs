use snafu::ensure;
use std::fmt;

use crate::Result;
use crate::error::InvalidMountTargetSnafu;

/// Selector the application mounts to when nothing else is configured.
pub const DEFAULT_MOUNT_TARGET: &str = "#app";

/// Location in the host document where the root component is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountTarget {
    /// `#app` style selector, resolved by element id.
    Id(String),

    /// Any other selector, handed to the host document as-is.
    Query(String),
}

impl MountTarget {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        ensure!(
            !value.is_empty(),
            InvalidMountTargetSnafu {
                msg: "Mount target is required.".to_string()
            }
        );

        match value.strip_prefix('#') {
            Some(id) if is_identifier(id) => Ok(Self::Id(id.to_string())),
            Some(id) => {
                ensure!(
                    !id.is_empty(),
                    InvalidMountTargetSnafu {
                        msg: "Element id is required after '#'.".to_string()
                    }
                );
                Ok(Self::Query(value.to_string()))
            }
            None => Ok(Self::Query(value.to_string())),
        }
    }

    /// Element id for id selectors.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id.as_str()),
            Self::Query(_) => None,
        }
    }

    pub fn as_selector(&self) -> String {
        self.to_string()
    }
}

// Plain CSS identifier, e.g. `app` in `#app` but not `app>div`.
fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
}

impl Default for MountTarget {
    fn default() -> Self {
        Self::Id(DEFAULT_MOUNT_TARGET[1..].to_string())
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{}", id),
            Self::Query(query) => write!(f, "{}", query),
        }
    }
}
