//! On-disk sample projects built at test time
//!
//! Archives are written with `zip::ZipWriter` into a temporary directory so
//! no binary fixture has to be checked in.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// `honker-deps.toml` of the sample project
///
/// ```text
/// org.acme:app:1.0 (project)
/// ├── org.slf4j:slf4j-api:1.7.12      MIT, manifest
/// ├── org.eclipse.jetty:jetty-util:9.4.0   EPL, embedded pom + NOTICE
/// │   └── org.slf4j:slf4j-api:1.7.12  (already visited)
/// ├── org.gnu:readline:8.0            GPL, manifest
/// └── com.legacy:legacy:1.0           Apache 2, sibling pom
/// ```
pub const SAMPLE_DEPENDENCIES: &str = r#"roots = ["org.acme:app:1.0"]

[[dependency]]
group = "org.acme"
name = "app"
version = "1.0"
project = true
artifacts = [{ file = "target/app-1.0.jar" }]
dependencies = [
    "org.slf4j:slf4j-api:1.7.12",
    "org.eclipse.jetty:jetty-util:9.4.0",
    "org.gnu:readline:8.0",
    "com.legacy:legacy:1.0",
]

[[dependency]]
group = "org.slf4j"
name = "slf4j-api"
version = "1.7.12"
artifacts = [{ file = "libs/slf4j-api-1.7.12.jar" }]

[[dependency]]
group = "org.eclipse.jetty"
name = "jetty-util"
version = "9.4.0"
artifacts = [{ file = "libs/jetty-util-9.4.0.jar" }]
dependencies = ["org.slf4j:slf4j-api:1.7.12"]

[[dependency]]
group = "org.gnu"
name = "readline"
version = "8.0"
artifacts = [{ file = "libs/readline-8.0.jar" }]

[[dependency]]
group = "com.legacy"
name = "legacy"
version = "1.0"
artifacts = [{ file = "libs/legacy-1.0.jar" }]
"#;

pub const EPL_LICENSE_TEMPLATE: &str = "Eclipse Public License - v 1.0\n\nTHE ACCOMPANYING PROGRAM IS PROVIDED UNDER THE TERMS OF THIS ECLIPSE PUBLIC LICENSE.\n";

/// A project directory in a temporary location
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Project with the sample dependency tree and its archives, no config
    pub fn sample() -> Self {
        let project = Self::new();
        project.write_file("honker-deps.toml", SAMPLE_DEPENDENCIES);
        project.write_jar("target/app-1.0.jar", &[("org/acme/App.class", "")]);
        project.write_jar(
            "libs/slf4j-api-1.7.12.jar",
            &[(
                "META-INF/MANIFEST.MF",
                &manifest(&[
                    ("Bundle-Name", "slf4j-api"),
                    ("Bundle-Vendor", "SLF4J"),
                    ("Bundle-License", "MIT"),
                ]),
            )],
        );
        project.write_jar(
            "libs/jetty-util-9.4.0.jar",
            &[
                (
                    "META-INF/maven/org.eclipse.jetty/jetty-util/pom.xml",
                    &pom_xml(
                        "Jetty :: Utilities",
                        "Eclipse Foundation",
                        "Eclipse Public License - v 1.0",
                        "http://www.eclipse.org/legal/epl-v10.html",
                    ),
                ),
                ("META-INF/NOTICE.txt", "Jetty Web Container\nCopyright Mort Bay Consulting"),
                ("about.html", "<html/>"),
            ],
        );
        project.write_jar(
            "libs/readline-8.0.jar",
            &[(
                "META-INF/MANIFEST.MF",
                &manifest(&[("Implementation-Vendor", "GNU"), ("Bundle-License", "GPL")]),
            )],
        );
        project.write_jar("libs/legacy-1.0.jar", &[("legacy/Legacy.class", "")]);
        project.write_file(
            "libs/legacy-1.0.pom",
            &pom_xml(
                "Legacy",
                "Legacy Corp",
                "Apache License 2.0",
                "http://www.apache.org/licenses/LICENSE-2.0.txt",
            ),
        );
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn write_jar(&self, relative: &str, entries: &[(&str, &str)]) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut writer = ZipWriter::new(File::create(&path).unwrap());
        for (name, content) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        self.write_file(&format!("templates/{}", name), content)
    }
}

/// Manifest main section with the given attributes
pub fn manifest(attributes: &[(&str, &str)]) -> String {
    let mut content = String::from("Manifest-Version: 1.0\r\n");
    for (name, value) in attributes {
        content.push_str(&format!("{}: {}\r\n", name, value));
    }
    content.push_str("\r\n");
    content
}

/// Minimal POM declaring a name, an organization and one license
pub fn pom_xml(name: &str, organization: &str, license_name: &str, license_url: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <name>{}</name>
  <organization>
    <name>{}</name>
  </organization>
  <licenses>
    <license>
      <name>{}</name>
      <url>{}</url>
      <distribution>repo</distribution>
    </license>
  </licenses>
</project>
"#,
        name, organization, license_name, license_url
    )
}
