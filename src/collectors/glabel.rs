use crate::error::LocateError;
use crate::exec::ToolRunner;
use std::collections::HashMap;
use tracing::debug;

/// Device prefix FreeBSD uses for GPT partition UUID labels.
pub const GPTID_PREFIX: &str = "/dev/gptid/";

/// Label namespace for GPT UUID labels in `glabel status`.
const GPTID_NAMESPACE: &str = "gptid/";

/// GPT label UUID → underlying component, e.g. `"abcd-1234" → "da0p2"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    labels: HashMap<String, String>,
}

impl AliasMap {
    pub fn insert(&mut self, label: impl Into<String>, component: impl Into<String>) {
        self.labels.insert(label.into(), component.into());
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.labels.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.labels.len() }

    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Map a `/dev/gptid/<uuid>` path to the whole disk holding that partition.
    pub fn resolve(&self, alias_path: &str) -> Result<String, LocateError> {
        let label = alias_path
            .strip_prefix(GPTID_PREFIX)
            .ok_or_else(|| LocateError::gap(alias_path, "not a gptid alias"))?;

        let component = self
            .get(label)
            .ok_or_else(|| LocateError::gap(alias_path, format!("no glabel entry for {label}")))?;

        strip_partition_suffix(&format!("/dev/{component}"))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AliasMap::default();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Run `glabel status` and build the alias map for this run.
pub fn read_aliases(runner: &dyn ToolRunner, glabel: &str) -> AliasMap {
    let out = runner.run(glabel, &["status"]);
    let map = parse_glabel_status(&out.stdout);
    debug!(labels = map.len(), "loaded gptid labels");
    map
}

/// Parse `glabel status` output.
///
/// Each entry is `<name> <status> <component>` once repeated blanks are
/// collapsed. The header row and any line of another shape are skipped.
/// Only `gptid/` labels are kept, keyed without the namespace.
pub fn parse_glabel_status(text: &str) -> AliasMap {
    let mut map = AliasMap::default();
    for line in text.lines() {
        let f: Vec<&str> = line.split_whitespace().collect();
        if f.len() != 3 { continue; }
        let (name, component) = (f[0], f[2]);
        match name.strip_prefix(GPTID_NAMESPACE) {
            Some(uuid) if !uuid.is_empty() => map.insert(uuid, component),
            _ => debug!(label = name, "skipping non-gptid label"),
        }
    }
    map
}

/// Turn a partition path into its whole-disk path: `/dev/da0p2` → `/dev/da0`.
///
/// The final path component must end in `p<digits>` with a non-empty disk
/// token in front. Anything else (`/dev/da0`, `/dev/sdap`, `/dev/p1`) is a gap.
pub fn strip_partition_suffix(path: &str) -> Result<String, LocateError> {
    let (dir, name) = match path.rfind('/') {
        Some(i) => path.split_at(i + 1),
        None    => ("", path),
    };

    let (disk, index) = name
        .rsplit_once('p')
        .ok_or_else(|| LocateError::gap(path, "no partition suffix"))?;

    let numeric = !index.is_empty() && index.chars().all(|c| c.is_ascii_digit());
    if disk.is_empty() || !numeric {
        return Err(LocateError::gap(path, "no partition suffix"));
    }
    Ok(format!("{dir}{disk}"))
}
