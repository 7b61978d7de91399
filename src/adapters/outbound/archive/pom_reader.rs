use super::{extension_of, is_archive, open_archive, read_entry};
use crate::license_compliance::domain::{Gav, Pom, PomLicense};
use crate::ports::outbound::PomLoader;
use crate::shared::{security, Result};
use anyhow::Context;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::{Path, PathBuf};

/// EmbeddedPomLoader adapter reading the descriptor of a dependency
///
/// The descriptor is looked up, in order:
/// 1. in the artifact itself when it is a `.pom` file
/// 2. inside the archive at `META-INF/maven/<group>/<artifact>/pom.xml`
/// 3. next to the artifact as `<file stem>.pom`
///
/// When none exists an empty [`Pom`] is returned.
pub struct EmbeddedPomLoader;

impl EmbeddedPomLoader {
    pub fn new() -> Self {
        Self
    }

    fn sibling_pom(file: &Path) -> Option<PathBuf> {
        let stem = file.file_stem()?;
        let mut name = stem.to_os_string();
        name.push(".pom");
        let candidate = file.with_file_name(name);
        candidate.is_file().then_some(candidate)
    }

    fn find_descriptor(file: &Path, gav: &Gav) -> Result<Option<String>> {
        if extension_of(file).as_deref() == Some("pom") {
            return security::read_text_file(file, "descriptor").map(Some);
        }
        if is_archive(file) {
            let mut archive = open_archive(file)?;
            let entry = format!("META-INF/maven/{}/{}/pom.xml", gav.group(), gav.artifact());
            if let Some(content) = read_entry(&mut archive, file, &entry)? {
                return Ok(Some(content));
            }
        }
        match Self::sibling_pom(file) {
            Some(pom) => security::read_text_file(&pom, "descriptor").map(Some),
            None => Ok(None),
        }
    }

    /// Parses the project metadata and license entries of a POM
    fn parse(xml: &str) -> Result<Pom> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut pom = Pom::default();
        let mut path: Vec<String> = Vec::new();
        let mut text = String::new();
        let mut license: Option<PomLicense> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let tag = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
                    path.push(tag);
                    text.clear();
                    if Self::at(&path, &["project", "licenses", "license"]) {
                        license = Some(PomLicense::default());
                    }
                }
                Ok(Event::Text(e)) => {
                    let unescaped = e.unescape().context("Invalid text in descriptor")?;
                    text.push_str(&unescaped);
                }
                Ok(Event::CData(e)) => {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
                Ok(Event::End(_)) => {
                    let value = Some(text.trim().to_string()).filter(|v| !v.is_empty());
                    Self::assign(&path, value, &mut pom, &mut license);
                    if Self::at(&path, &["project", "licenses", "license"]) {
                        if let Some(entry) = license.take() {
                            pom.add_license(entry);
                        }
                    }
                    path.pop();
                    text.clear();
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(anyhow::anyhow!(
                        "Malformed descriptor at position {}: {}",
                        reader.buffer_position(),
                        e
                    ))
                }
                _ => {}
            }
        }
        Ok(pom)
    }

    fn at(path: &[String], expected: &[&str]) -> bool {
        path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a == b)
    }

    fn assign(
        path: &[String],
        value: Option<String>,
        pom: &mut Pom,
        license: &mut Option<PomLicense>,
    ) {
        let segments: Vec<&str> = path.iter().map(String::as_str).collect();
        match segments.as_slice() {
            ["project", "name"] => pom.name = value,
            ["project", "version"] => pom.version = value,
            ["project", "url"] => pom.url = value,
            ["project", "organization", "name"] => pom.organization = value,
            ["project", "organization", "url"] => pom.organization_url = value,
            ["project", "licenses", "license", field] => {
                if let Some(entry) = license.as_mut() {
                    match *field {
                        "name" => entry.name = value,
                        "url" => entry.url = value,
                        "distribution" => entry.distribution = value,
                        "comments" => entry.comments = value,
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
}

impl Default for EmbeddedPomLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PomLoader for EmbeddedPomLoader {
    fn load_pom(&self, file: &Path, gav: &Gav) -> Result<Pom> {
        let Some(xml) = Self::find_descriptor(file, gav)? else {
            return Ok(Pom::default());
        };
        let mut pom = Self::parse(&xml)
            .with_context(|| format!("Failed to parse descriptor of {}", gav))?;
        if pom.version.is_none() {
            pom.version = Some(gav.version().to_string());
        }
        Ok(pom)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::write_archive;
    use super::*;
    use crate::license_compliance::domain::License;
    use std::fs;
    use tempfile::TempDir;

    const WIDGET_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>org.acme</groupId>
    <artifactId>parent</artifactId>
    <version>7</version>
    <name>Parent name is ignored</name>
  </parent>
  <groupId>org.acme</groupId>
  <artifactId>widget</artifactId>
  <name>Acme Widget</name>
  <url>http://widget.acme.org</url>
  <organization>
    <name>Acme &amp; Sons</name>
    <url>http://acme.org</url>
  </organization>
  <licenses>
    <license>
      <name>Eclipse Public License - v 1.0</name>
      <url>http://www.eclipse.org/legal/epl-v10.html</url>
      <distribution>repo</distribution>
    </license>
    <license>
      <name><![CDATA[GNU Lesser General Public License]]></name>
      <comments>Dual licensed</comments>
    </license>
  </licenses>
  <dependencies>
    <dependency>
      <groupId>junit</groupId>
      <artifactId>junit</artifactId>
      <version>4.12</version>
    </dependency>
  </dependencies>
</project>
"#;

    fn widget_gav() -> Gav {
        Gav::new("org.acme", "widget", "2.0")
    }

    #[test]
    fn test_parse_pom() {
        let pom = EmbeddedPomLoader::parse(WIDGET_POM).unwrap();
        assert_eq!(pom.name.as_deref(), Some("Acme Widget"));
        assert_eq!(pom.url.as_deref(), Some("http://widget.acme.org"));
        assert_eq!(pom.organization.as_deref(), Some("Acme & Sons"));
        assert_eq!(pom.organization_url.as_deref(), Some("http://acme.org"));
        assert_eq!(pom.version, None);

        let licenses = pom.licenses();
        assert_eq!(licenses.len(), 2);
        assert_eq!(licenses[0].name.as_deref(), Some("Eclipse Public License - v 1.0"));
        assert_eq!(licenses[0].distribution.as_deref(), Some("repo"));
        assert_eq!(
            licenses[1].name.as_deref(),
            Some("GNU Lesser General Public License")
        );
        assert_eq!(licenses[1].url, None);
        assert_eq!(licenses[1].comments.as_deref(), Some("Dual licensed"));
    }

    #[test]
    fn test_load_embedded_pom() {
        let temp_dir = TempDir::new().unwrap();
        let jar = temp_dir.path().join("widget-2.0.jar");
        write_archive(&jar, &[("META-INF/maven/org.acme/widget/pom.xml", WIDGET_POM)]);

        let pom = EmbeddedPomLoader::new().load_pom(&jar, &widget_gav()).unwrap();
        assert_eq!(pom.name.as_deref(), Some("Acme Widget"));
        assert_eq!(pom.version.as_deref(), Some("2.0"));
        assert_eq!(
            License::resolve_by_url(pom.licenses()[0].url.as_deref().unwrap()),
            Some(License::Epl)
        );
    }

    #[test]
    fn test_load_sibling_pom() {
        let temp_dir = TempDir::new().unwrap();
        let jar = temp_dir.path().join("widget-2.0.jar");
        write_archive(&jar, &[("org/acme/Widget.class", "bytes")]);
        fs::write(temp_dir.path().join("widget-2.0.pom"), WIDGET_POM).unwrap();

        let pom = EmbeddedPomLoader::new().load_pom(&jar, &widget_gav()).unwrap();
        assert_eq!(pom.organization.as_deref(), Some("Acme & Sons"));
    }

    #[test]
    fn test_load_pom_artifact_directly() {
        let temp_dir = TempDir::new().unwrap();
        let pom_file = temp_dir.path().join("widget-2.0.pom");
        fs::write(&pom_file, WIDGET_POM).unwrap();

        let pom = EmbeddedPomLoader::new().load_pom(&pom_file, &widget_gav()).unwrap();
        assert_eq!(pom.licenses().len(), 2);
    }

    #[test]
    fn test_no_descriptor_is_empty_pom() {
        let temp_dir = TempDir::new().unwrap();
        let jar = temp_dir.path().join("plain.jar");
        write_archive(&jar, &[("Plain.class", "bytes")]);

        let pom = EmbeddedPomLoader::new().load_pom(&jar, &widget_gav()).unwrap();
        assert_eq!(pom, Pom::default());
    }

    #[test]
    fn test_malformed_descriptor_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let pom_file = temp_dir.path().join("broken.pom");
        fs::write(&pom_file, "<project><name>x</version></project>").unwrap();

        let err = EmbeddedPomLoader::new()
            .load_pom(&pom_file, &widget_gav())
            .unwrap_err();
        assert!(err.to_string().contains("org.acme:widget:2.0"));
    }
}
