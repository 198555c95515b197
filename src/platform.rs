use crate::collectors::glabel::{self, AliasMap, GPTID_PREFIX};
use crate::collectors::smart;
use crate::config::ToolsConfig;
use crate::error::LocateError;
use crate::exec::ToolRunner;
use crate::models::disk::DiskIdentity;
use std::fmt;
use tracing::{debug, info, warn};

/// Operating systems with a known alias and identity strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `zpool -L` prints real device nodes and smartctl accepts partitions.
    Linux,
    /// Pools usually reference `/dev/gptid/<uuid>` labels resolved via glabel;
    /// smartctl needs the whole-disk node.
    FreeBsd,
}

impl Platform {
    pub fn from_name(name: &str) -> Result<Self, LocateError> {
        match name.to_ascii_lowercase().as_str() {
            "linux"   => Ok(Platform::Linux),
            "freebsd" => Ok(Platform::FreeBsd),
            other     => Err(LocateError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Resolve a config/CLI setting; "auto" means the OS we were built for.
    pub fn select(setting: &str) -> Result<Self, LocateError> {
        if setting.eq_ignore_ascii_case("auto") {
            Self::from_name(std::env::consts::OS)
        } else {
            Self::from_name(setting)
        }
    }

    /// Path prefix of pool entries that must be reverse-looked-up.
    pub fn alias_prefix(&self) -> Option<&'static str> {
        match self {
            Platform::Linux   => None,
            Platform::FreeBsd => Some(GPTID_PREFIX),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Linux   => "linux",
            Platform::FreeBsd => "freebsd",
        })
    }
}

/// Per-run platform capabilities: alias resolution and identity lookup.
///
/// Built once at startup so the pipeline never branches on the OS itself.
pub struct Capabilities<'a> {
    platform: Platform,
    aliases:  AliasMap,
    runner:   &'a dyn ToolRunner,
    tools:    &'a ToolsConfig,
}

impl<'a> Capabilities<'a> {
    /// Select capabilities for `platform`, loading the alias map if it needs one.
    pub fn new(platform: Platform, runner: &'a dyn ToolRunner, tools: &'a ToolsConfig) -> Self {
        let aliases = match platform {
            Platform::Linux   => AliasMap::default(),
            Platform::FreeBsd => glabel::read_aliases(runner, &tools.glabel),
        };
        if platform == Platform::FreeBsd && aliases.is_empty() {
            warn!("glabel reported no gptid labels; gptid pool members cannot be located");
        }
        info!(%platform, aliases = aliases.len(), "platform selected");
        Self::with_aliases(platform, aliases, runner, tools)
    }

    pub fn with_aliases(
        platform: Platform,
        aliases:  AliasMap,
        runner:   &'a dyn ToolRunner,
        tools:    &'a ToolsConfig,
    ) -> Self {
        Self { platform, aliases, runner, tools }
    }

    pub fn runner(&self) -> &'a dyn ToolRunner { self.runner }

    pub fn tools(&self) -> &'a ToolsConfig { self.tools }

    pub fn is_alias(&self, path: &str) -> bool {
        self.platform.alias_prefix().is_some_and(|p| path.starts_with(p))
    }

    /// Whole-disk path to query for a pool entry.
    ///
    /// On FreeBSD, aliases go through glabel and direct partition nodes lose
    /// their `p<digits>` suffix, since CAM only answers on the whole disk. A
    /// direct path without a suffix is already a whole disk and is kept.
    pub fn resolve_alias(&self, path: &str) -> Result<String, LocateError> {
        if self.is_alias(path) {
            return self.aliases.resolve(path);
        }
        match self.platform {
            Platform::Linux   => Ok(path.to_string()),
            Platform::FreeBsd => match glabel::strip_partition_suffix(path) {
                Ok(disk) => Ok(disk),
                Err(_) => {
                    debug!(device = path, "no partition suffix, using path as whole disk");
                    Ok(path.to_string())
                }
            },
        }
    }

    pub fn read_identity(&self, device_path: &str) -> Result<DiskIdentity, LocateError> {
        smart::read_identity(self.runner, &self.tools.smartctl, device_path)
    }
}
