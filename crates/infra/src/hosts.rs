//! Hosts-file text: host lines grouped into optional zone sections.
//!
//! ```text
//! 127.0.0.1 localhost
//! ##### BEGIN ZONE staging
//! 10.0.0.5 api.staging db.staging # primary
//! ##### END ZONE staging
//! ```
//!
//! Host lines outside any section are unmanaged; lines inside a section belong
//! to that zone and are managed.

const ZONE_BEGIN: &str = "##### BEGIN ZONE ";
const ZONE_END: &str = "##### END ZONE ";

/// One `address name... [# comment]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLine {
    pub address: String,
    pub names: Vec<String>,
    pub comment: String,
    /// Zone section the line appeared in, if any.
    pub zone: Option<String>,
}

impl HostLine {
    pub fn managed(&self) -> bool {
        self.zone.is_some()
    }
}

/// Parsed content of a backing file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostsDocument {
    /// Zone names in order of first appearance.
    pub zones: Vec<String>,
    pub lines: Vec<HostLine>,
}

/// Parse hosts text. Never fails: unrecognised lines are skipped.
///
/// A section left open at end of input still counts as a zone. An END marker
/// closes the current section regardless of the name it carries.
pub fn parse(text: &str) -> HostsDocument {
    let mut doc = HostsDocument::default();
    let mut current: Option<String> = None;

    for raw in text.lines() {
        let line = raw.trim();

        if let Some(name) = line.strip_prefix(ZONE_BEGIN) {
            let name = name.trim().to_string();
            if !name.is_empty() && !doc.zones.contains(&name) {
                doc.zones.push(name.clone());
            }
            current = Some(name).filter(|n| !n.is_empty());
            continue;
        }
        if line.starts_with(ZONE_END) {
            current = None;
            continue;
        }

        if let Some(host) = parse_host_line(line, current.as_deref()) {
            doc.lines.push(host);
        }
    }

    doc
}

fn parse_host_line(line: &str, zone: Option<&str>) -> Option<HostLine> {
    let (body, comment) = match line.split_once('#') {
        Some((body, comment)) => (body, comment.trim()),
        None => (line, ""),
    };

    let mut fields = body.split_whitespace();
    let address = fields.next()?;
    let names: Vec<String> = fields.map(str::to_string).collect();
    if names.is_empty() {
        return None;
    }

    Some(HostLine {
        address: address.to_string(),
        names,
        comment: comment.to_string(),
        zone: zone.map(str::to_string),
    })
}
