use crate::Result;
use crate::error::ConfigSnafu;
use crate::target::MountTarget;

/// Host variable that overrides the default `#app` mount target.
pub const MOUNT_TARGET_VAR: &str = "APP_MOUNT_TARGET";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountConfig {
    pub target: MountTarget,
}

impl MountConfig {
    /// Builds the config from a host provided key lookup, e.g. window globals.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target = match lookup(MOUNT_TARGET_VAR) {
            Some(value) => match MountTarget::parse(&value) {
                Ok(target) => target,
                Err(e) => {
                    return ConfigSnafu {
                        msg: format!("{}: {}", MOUNT_TARGET_VAR, e),
                    }
                    .fail();
                }
            },
            None => MountTarget::default(),
        };

        Ok(Self { target })
    }
}
