use super::{extension_of, is_archive, open_archive, read_entry};
use crate::license_compliance::domain::Manifest;
use crate::ports::outbound::ManifestLoader;
use crate::shared::{security, Result};
use std::collections::HashMap;
use std::path::Path;

const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

const NAME_ATTRIBUTES: [&str; 3] = ["Bundle-Name", "Implementation-Title", "Bundle-SymbolicName"];
const VERSION_ATTRIBUTES: [&str; 3] = [
    "Bundle-Version",
    "Implementation-Version",
    "Specification-Version",
];
const VENDOR_ATTRIBUTES: [&str; 2] = ["Bundle-Vendor", "Implementation-Vendor"];
const URL_ATTRIBUTES: [&str; 1] = ["Bundle-DocURL"];
const LICENSE_ATTRIBUTES: [&str; 1] = ["Bundle-License"];

/// JarManifestLoader adapter reading `META-INF/MANIFEST.MF`
///
/// `.mf` files are parsed as they are; `.zip`, `.jar`, `.war` and `.ear`
/// archives are searched for their manifest entry.
pub struct JarManifestLoader;

impl JarManifestLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parses the main section of a manifest into its attributes
    ///
    /// Attribute names are case-insensitive; lines starting with a space
    /// continue the previous value.
    fn parse_main_attributes(content: &str) -> HashMap<String, String> {
        let mut attributes = HashMap::new();
        let mut current: Option<(String, String)> = None;

        for line in content.lines() {
            if line.is_empty() {
                break;
            }
            if let Some(continuation) = line.strip_prefix(' ') {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(continuation);
                }
                continue;
            }
            if let Some((name, value)) = current.take() {
                attributes.entry(name).or_insert(value);
            }
            if let Some((name, value)) = line.split_once(':') {
                current = Some((name.trim().to_lowercase(), value.trim_start().to_string()));
            }
        }
        if let Some((name, value)) = current {
            attributes.entry(name).or_insert(value);
        }
        attributes
    }

    fn first_of(attributes: &HashMap<String, String>, names: &[&str]) -> Option<String> {
        names
            .iter()
            .filter_map(|name| attributes.get(&name.to_lowercase()))
            .find(|value| !value.trim().is_empty())
            .map(|value| value.trim().to_string())
    }

    fn to_manifest(content: &str) -> Manifest {
        let attributes = Self::parse_main_attributes(content);
        Manifest::new(
            Self::first_of(&attributes, &NAME_ATTRIBUTES),
            Self::first_of(&attributes, &VERSION_ATTRIBUTES),
            Self::first_of(&attributes, &VENDOR_ATTRIBUTES),
            Self::first_of(&attributes, &URL_ATTRIBUTES),
            Self::first_of(&attributes, &LICENSE_ATTRIBUTES),
        )
    }
}

impl Default for JarManifestLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestLoader for JarManifestLoader {
    fn load_manifest(&self, file: &Path) -> Result<Manifest> {
        if extension_of(file).as_deref() == Some("mf") {
            let content = security::read_text_file(file, "manifest")?;
            return Ok(Self::to_manifest(&content));
        }
        if !is_archive(file) {
            return Ok(Manifest::EMPTY);
        }

        let mut archive = open_archive(file)?;
        Ok(read_entry(&mut archive, file, MANIFEST_ENTRY)?
            .map(|content| Self::to_manifest(&content))
            .unwrap_or(Manifest::EMPTY))
    }
}
