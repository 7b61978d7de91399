use super::relations::{self, Relation};
use crate::ports::outbound::TemplateStore;
use crate::shared::error::HonkerError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A license known to the catalog
///
/// The set is closed: every variant has a fixed list of name synonyms and
/// canonical URLs in [`CATALOG`]. Declared variant order is catalog order,
/// which is also the lookup order of [`License::resolve_by_name`] and
/// [`License::resolve_by_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum License {
    Apache2,
    Apache11,
    Php301,
    Bsd3Clauses,
    Bsd2Clauses,
    MitX11,
    Icu,
    UolNcsa,
    W3c,
    Zlib,
    Afl,
    MsPl,
    CcA,
    Python,
    Bsl,
    Edl,
    Epl,
    Wtfpl,
    Ruby,
    Mozilla,
    Cddl,
    Gpl,
    Lgpl,
    Agpl,
    Sleepycat,
    Cpl,
    Osgi,
    Json,
    PublicDomain,
}

/// Catalog entry describing one license
#[derive(Debug)]
pub struct LicenseRecord {
    pub license: License,
    /// Stable identifier used to address templates, e.g. `APACHE_2`
    pub identifier: &'static str,
    /// Name synonyms, the first one is the preferred name
    pub names: &'static [&'static str],
    /// Canonical URLs, the first one is the preferred URL
    pub urls: &'static [&'static str],
}

/// Kind of attribution template attached to a license
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    License,
    Notice,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::License => write!(f, "LICENSE"),
            TemplateKind::Notice => write!(f, "NOTICE"),
        }
    }
}

impl License {
    /// Every catalog license, in catalog order
    pub const ALL: [License; 29] = [
        License::Apache2,
        License::Apache11,
        License::Php301,
        License::Bsd3Clauses,
        License::Bsd2Clauses,
        License::MitX11,
        License::Icu,
        License::UolNcsa,
        License::W3c,
        License::Zlib,
        License::Afl,
        License::MsPl,
        License::CcA,
        License::Python,
        License::Bsl,
        License::Edl,
        License::Epl,
        License::Wtfpl,
        License::Ruby,
        License::Mozilla,
        License::Cddl,
        License::Gpl,
        License::Lgpl,
        License::Agpl,
        License::Sleepycat,
        License::Cpl,
        License::Osgi,
        License::Json,
        License::PublicDomain,
    ];

    /// Finds the license having `name` among its synonyms
    ///
    /// Matching is exact but case-insensitive; there is no substring or fuzzy
    /// matching. An empty input yields `None`.
    pub fn resolve_by_name(name: &str) -> Option<License> {
        if name.is_empty() {
            return None;
        }
        let normalized = name.to_lowercase();
        CATALOG
            .iter()
            .find(|record| {
                record
                    .names
                    .iter()
                    .any(|candidate| candidate.to_lowercase() == normalized)
            })
            .map(|record| record.license)
    }

    /// Finds the license having `url` among its canonical URLs
    ///
    /// Unlike name matching this is case-sensitive. An empty input yields `None`.
    pub fn resolve_by_url(url: &str) -> Option<License> {
        if url.is_empty() {
            return None;
        }
        CATALOG
            .iter()
            .find(|record| record.urls.contains(&url))
            .map(|record| record.license)
    }

    pub fn record(self) -> &'static LicenseRecord {
        &CATALOG[self as usize]
    }

    pub fn identifier(self) -> &'static str {
        self.record().identifier
    }

    pub fn names(self) -> &'static [&'static str] {
        self.record().names
    }

    pub fn urls(self) -> &'static [&'static str] {
        self.record().urls
    }

    pub fn preferred_name(self) -> &'static str {
        self.record().names[0]
    }

    pub fn preferred_url(self) -> &'static str {
        self.record().urls[0]
    }

    /// Whether using a dependency under `self` conflicts with a project under `reference`
    pub fn conflicts_with(self, reference: License) -> bool {
        relations::is_related(self, reference, Relation::Conflict)
    }

    /// Whether `self` must be mentioned in the LICENSE of a project under `reference`
    pub fn requires_mention_in_license_for(self, reference: License) -> bool {
        relations::is_related(self, reference, Relation::MentionInLicense)
    }

    /// Whether `self` must be mentioned in the NOTICE of a project under `reference`
    pub fn requires_mention_in_notice_for(self, reference: License) -> bool {
        relations::is_related(self, reference, Relation::MentionInNotice)
    }

    /// Whether any conflict or mention rule is defined with `self` as the project license
    pub fn has_compliance_rules(self) -> bool {
        [
            Relation::Conflict,
            Relation::MentionInLicense,
            Relation::MentionInNotice,
        ]
        .into_iter()
        .any(|relation| relations::has_rules_for(self, relation))
    }

    /// Resource name of the template of the given kind, e.g. `NOTICE_APACHE_2.template`
    pub fn template_name(self, kind: TemplateKind) -> String {
        format!("{}_{}.template", kind, self.identifier())
    }

    /// Loads the template of the given kind from `store`
    ///
    /// Returns `None` when the store has no such template.
    pub fn template_text<S: TemplateStore + ?Sized>(
        self,
        kind: TemplateKind,
        store: &S,
    ) -> Option<String> {
        store.template(&self.template_name(kind))
    }
}

impl Serialize for License {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.preferred_name())
    }
}

impl FromStr for License {
    type Err = HonkerError;

    /// Resolves by name first, then by URL
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        License::resolve_by_name(s)
            .or_else(|| License::resolve_by_url(s))
            .ok_or_else(|| HonkerError::UnknownLicense {
                license: s.to_string(),
            })
    }
}

/// The license catalog, indexed by `License as usize`
pub static CATALOG: [LicenseRecord; 29] = [
    LicenseRecord {
        license: License::Apache2,
        identifier: "APACHE_2",
        names: &[
            "The Apache Software License, Version 2.0",
            "Apache 2",
            "Apache Software License, Version 2.0",
            "Apache License, version 2.0.",
            "Apache License, version 2.0",
            "Apache Software License 2.0",
            "Apache License Version 2.0",
            "Apache License 2.0",
        ],
        urls: &[
            "http://www.apache.org/licenses/LICENSE-2.0",
            "http://www.apache.org/licenses/LICENSE-2.0.txt",
            "http://www.apache.org/licenses/LICENSE-2.0.html",
            "http://apache.org/licenses/LICENSE-2.0",
            "http://apache.org/licenses/LICENSE-2.0.txt",
            "http://apache.org/licenses/LICENSE-2.0.html",
            "http://www.opensource.org/licenses/Apache-2.0",
            "http://opensource.org/licenses/Apache-2.0",
            "http://opensource.org/licenses/apache2.0.php",
        ],
    },
    LicenseRecord {
        license: License::Apache11,
        identifier: "APACHE_1_1",
        names: &[
            "The Apache Software License, Version 1.1",
            "Apache 1.1",
            "Apache Software License, Version 1.1",
            "Apache Software License 1.1",
            "Apache License 1.1",
        ],
        urls: &[
            "http://www.apache.org/licenses/LICENSE-1.1",
            "http://www.apache.org/licenses/LICENSE-1.1.txt",
            "http://apache.org/licenses/LICENSE-1.1",
            "http://apache.org/licenses/LICENSE-1.1.txt",
            "http://www.opensource.org/licenses/Apache-1.1",
            "http://opensource.org/licenses/Apache-1.1",
        ],
    },
    LicenseRecord {
        license: License::Php301,
        identifier: "PHP_3_1",
        names: &[
            "The PHP License, version 3.01",
            "PHP License 3.01",
            "PHP License, version 3.01",
        ],
        urls: &["http://php.net/license/3_01.txt"],
    },
    LicenseRecord {
        license: License::Bsd3Clauses,
        identifier: "BSD_3_CLAUSES",
        names: &[
            "BSD 3-Clause License",
            "BSD",
            "BSD License",
            "New BSD License",
            "Revised BSD License",
            "BSD 3-Clause",
            "BSD 3-Clause \"New\" or \"Revised\" license",
        ],
        urls: &[
            "http://opensource.org/licenses/BSD-3-Clause",
            "http://asm.objectweb.org/license.html",
            "http://asm.ow2.org/license.html",
            "http://antlr.org/license.html",
        ],
    },
    LicenseRecord {
        license: License::Bsd2Clauses,
        identifier: "BSD_2_CLAUSES",
        names: &[
            "BSD 2-Clause \"Simplified\" or \"FreeBSD\" license",
            "FreeBSD",
            "FreeBSD License",
            "Simplified BSD License",
        ],
        urls: &["http://opensource.org/licenses/BSD-2-Clause"],
    },
    LicenseRecord {
        license: License::MitX11,
        identifier: "MIT_X11",
        names: &[
            "MIT License",
            "MIT",
            "X11",
            "X11 License",
            "MIT/X Consortium License",
            "Expat License",
        ],
        urls: &[
            "http://opensource.org/licenses/MIT",
            "http://www.opensource.org/licenses/MIT",
            "http://opensource.org/licenses/mit-license.php",
            "http://www.opensource.org/licenses/mit-license.php",
        ],
    },
    LicenseRecord {
        license: License::Icu,
        identifier: "ICU",
        names: &["ICU License", "ICU"],
        urls: &["http://source.icu-project.org/repos/icu/icu/trunk/license.html"],
    },
    LicenseRecord {
        license: License::UolNcsa,
        identifier: "UoL_NCSA",
        names: &[
            "The University of Illinois/NCSA Open Source License (NCSA)",
            "UoI-NCSA",
            "The University of Illinois/NCSA Open Source License",
            "University of Illinois/NCSA Open Source License (NCSA)",
            "University of Illinois/NCSA Open Source License",
        ],
        urls: &["http://opensource.org/licenses/UoI-NCSA.php"],
    },
    LicenseRecord {
        license: License::W3c,
        identifier: "W3C",
        names: &[
            "The W3C SOFTWARE NOTICE AND LICENSE (W3C)",
            "W3C",
            "The W3C SOFTWARE NOTICE AND LICENSE",
            "W3C SOFTWARE NOTICE AND LICENSE (W3C)",
            "W3C SOFTWARE NOTICE AND LICENSE",
            "W3C® SOFTWARE NOTICE AND LICENSE",
        ],
        urls: &["http://opensource.org/licenses/W3C.php"],
    },
    LicenseRecord {
        license: License::Zlib,
        identifier: "ZLIB",
        names: &["The zlib/libpng License (Zlib)", "Zlib", "The zlib/libpng License"],
        urls: &["http://opensource.org/licenses/zlib-license.php"],
    },
    LicenseRecord {
        license: License::Afl,
        identifier: "AFL",
        names: &[
            "Academic Free License (\"AFL\") v. 3.0",
            "AFL",
            "AFL 3.0",
            "Academic Free License 3.0",
        ],
        urls: &["http://opensource.org/licenses/afl-3.0.php"],
    },
    LicenseRecord {
        license: License::MsPl,
        identifier: "MS_PL",
        names: &["Microsoft Public License (MS-PL)", "MS-PL", "Microsoft Public License"],
        urls: &[
            "http://opensource.org/licenses/ms-pl.html",
            "http://opensource.org/licenses/MS-PL",
        ],
    },
    LicenseRecord {
        license: License::CcA,
        identifier: "CC_A",
        names: &[
            "Creative Commons Attribution (CC-A) 3.0",
            "CC-A",
            "CC-A 2.5",
            "CC-A 3.0",
            "Attribution 2.5 Generic (CC BY 2.5)",
            "Attribution 3.0 Unported (CC BY 3.0)",
            "Creative Commons Attribution (CC-A) 2.5",
        ],
        urls: &[
            "https://creativecommons.org/licenses/by/3.0/",
            "https://creativecommons.org/licenses/by/2.5/",
        ],
    },
    LicenseRecord {
        license: License::Python,
        identifier: "PYTHON",
        names: &[
            "Python License, Version 2 (Python-2.0)",
            "Python",
            "Python License",
            "Python License 2.0",
            "Python License (Python-2.0)",
            "Python Software Foundation License",
            "PYTHON SOFTWARE FOUNDATION LICENSE VERSION 2",
        ],
        urls: &[
            "http://www.opensource.org/licenses/PythonSoftFoundation.php",
            "http://www.opensource.org/licenses/PythonSoftFoundation",
            "http://opensource.org/licenses/PythonSoftFoundation.php",
            "http://opensource.org/licenses/PythonSoftFoundation",
        ],
    },
    LicenseRecord {
        license: License::Bsl,
        identifier: "BSL",
        names: &[
            "Boost Software License 1.0 (BSL-1.0)",
            "BSL",
            "BSL-1.0",
            "BSL 1.0",
            "Boost Software License Version 1.0",
            "Boost Software License 1.0",
        ],
        urls: &[
            "http://www.opensource.org/licenses/BSL-1.0.php",
            "http://www.opensource.org/licenses/BSL-1.0",
            "http://opensource.org/licenses/BSL-1.0.php",
            "http://opensource.org/licenses/BSL-1.0",
        ],
    },
    LicenseRecord {
        license: License::Edl,
        identifier: "EDL",
        names: &[
            "Eclipse Distribution License (EDL)",
            "EDL",
            "EDL 1.0",
            "Eclipse Distribution License",
            "Eclipse Distribution License - v 1.0",
        ],
        urls: &[
            "http://www.eclipse.org/org/documents/edl-v10.php",
            "http://www.eclipse.org/org/documents/edl-v10.html",
        ],
    },
    LicenseRecord {
        license: License::Epl,
        identifier: "EPL",
        names: &[
            "Eclipse Public License (EPL)",
            "EPL",
            "EPL 1.0",
            "Eclipse Public License",
            "Eclipse Public License - v 1.0",
        ],
        urls: &[
            "http://www.eclipse.org/legal/epl-v10.html",
            "http://opensource.org/licenses/EPL-1.0",
            "http://www.opensource.org/licenses/EPL-1.0",
        ],
    },
    LicenseRecord {
        license: License::Wtfpl,
        identifier: "WTFPL",
        names: &[
            "WTFPL – Do What the Fuck You Want to Public License",
            "WTFPL",
            "Do What the Fuck You Want to Public License",
        ],
        urls: &["http://www.wtfpl.net/", "http://www.wtfpl.net/txt/copying/"],
    },
    LicenseRecord {
        license: License::Ruby,
        identifier: "RUBY",
        names: &["Ruby License", "Ruby"],
        urls: &[
            "http://www.ruby-lang.org/en/LICENSE.txt",
            "https://www.ruby-lang.org/en/about/license.txt",
        ],
    },
    LicenseRecord {
        license: License::Mozilla,
        identifier: "MOZILLA",
        names: &["Mozilla Public License 2.0", "MPL"],
        urls: &["http://opensource.org/licenses/MPL-2.0"],
    },
    LicenseRecord {
        license: License::Cddl,
        identifier: "CDDL",
        names: &[
            "Common Development and Distribution License",
            "CDDL",
            "Common Development and Distribution License (CDDL)",
            "CDDL License",
            "COMMON DEVELOPMENT AND DISTRIBUTION LICENSE (CDDL) Version 1.0",
        ],
        urls: &[
            "http://opensource.org/licenses/CDDL-1.0",
            "http://www.opensource.org/licenses/cddl1.php",
            "https://glassfish.dev.java.net/public/CDDLv1.0.html",
        ],
    },
    LicenseRecord {
        license: License::Gpl,
        identifier: "GPL",
        names: &[
            "GNU General Public License",
            "GPL",
            "GNU General Public License (GPL)",
            "GNU General Public License, version 1",
            "GNU General Public License, version 2",
            "GNU General Public License, version 3",
            "The GNU General Public License, Version 1",
            "The GNU General Public License, Version 2",
            "The GNU General Public License, Version 3",
        ],
        urls: &[
            "http://www.gnu.org/licenses/gpl-3.0.html",
            "http://www.gnu.org/licenses/gpl-1.0.txt",
            "http://www.gnu.org/licenses/gpl-1.0.html",
            "http://www.gnu.org/licenses/gpl-2.0.txt",
            "http://www.gnu.org/licenses/gpl-2.0.html",
            "http://www.gnu.org/licenses/gpl-3.0.txt",
            "http://www.opensource.org/licenses/gpl-license",
            "http://www.opensource.org/licenses/GPL-1.0",
            "http://www.opensource.org/licenses/GPL-1.0.php",
            "http://www.opensource.org/licenses/GPL-2.0",
            "http://www.opensource.org/licenses/GPL-2.0.php",
            "http://www.opensource.org/licenses/GPL-3.0",
            "http://www.opensource.org/licenses/GPL-3.0.php",
            "http://opensource.org/licenses/gpl-license",
            "http://opensource.org/licenses/GPL-1.0",
            "http://opensource.org/licenses/GPL-1.0.php",
            "http://opensource.org/licenses/GPL-2.0",
            "http://opensource.org/licenses/GPL-2.0.php",
            "http://opensource.org/licenses/GPL-3.0",
            "http://opensource.org/licenses/GPL-3.0.php",
        ],
    },
    LicenseRecord {
        license: License::Lgpl,
        identifier: "LGPL",
        names: &[
            "GNU Lesser General Public License",
            "LGPL",
            "GNU Library General Public License",
            "GNU Library General Public License (LGPL)",
            "GNU Lesser General Public License (LGPL)",
            "GNU \"Lesser\" General Public License",
            "GNU \"Lesser\" General Public License (LGPL)",
            "GNU Library or \"Lesser\" General Public License",
            "GNU Library or \"Lesser\" General Public License (LGPL)",
            "GNU Lesser Public License",
        ],
        urls: &[
            "http://www.gnu.org/licenses/old-licenses/lgpl-2.1.html",
            "http://www.opensource.org/licenses/lgpl-license",
            "http://www.opensource.org/licenses/lgpl-license.php",
            "http://opensource.org/licenses/lgpl-license",
            "http://opensource.org/licenses/lgpl-license.php",
            "http://www.gnu.org/licenses/lgpl.html",
        ],
    },
    LicenseRecord {
        license: License::Agpl,
        identifier: "AGPL",
        names: &[
            "The Affero GPL License",
            "Affero GPL",
            "AGPL",
            "Affero GPL 3",
            "GNU AFFERO GENERAL PUBLIC LICENSE, Version 3 (AGPL-3.0)",
            "GNU AFFERO GENERAL PUBLIC LICENSE, Version 3",
            "GNU AFFERO GENERAL PUBLIC LICENSE (AGPL-3.0)",
            "GNU AFFERO GENERAL PUBLIC LICENSE",
        ],
        urls: &[
            "http://www.gnu.org/licenses/agpl.html",
            "http://www.gnu.org/licenses/agpl.txt",
            "http://www.opensource.org/licenses/agpl-v3.html",
            "http://www.opensource.org/licenses/agpl-v3",
            "http://opensource.org/licenses/agpl-v3.html",
            "http://opensource.org/licenses/agpl-v3",
        ],
    },
    LicenseRecord {
        license: License::Sleepycat,
        identifier: "SLEEPYCAT",
        names: &[
            "The Sleepycat License",
            "Sleepycat",
            "The Sleepycat License (Sleepycat)",
            "Sleepycat License",
            "The Sleepycat Public License",
            "Berkeley Database License",
            "The Berkeley Database License",
        ],
        urls: &[
            "http://opensource.org/licenses/sleepycat.php",
            "http://opensource.org/licenses/sleepycat",
        ],
    },
    LicenseRecord {
        license: License::Cpl,
        identifier: "CPL",
        names: &["Common Public License Version 1.0"],
        urls: &["http://www.opensource.org/licenses/cpl1.0.txt"],
    },
    LicenseRecord {
        license: License::Osgi,
        identifier: "OSGI",
        names: &["OSGi Specification License, Version 2.0"],
        urls: &["http://www.osgi.org/Specifications/Licensing"],
    },
    LicenseRecord {
        license: License::Json,
        identifier: "JSON",
        names: &["The JSON License"],
        urls: &["http://www.json.org/license.html"],
    },
    LicenseRecord {
        license: License::PublicDomain,
        identifier: "PUBLIC_DOMAIN",
        names: &["Public Domain"],
        urls: &["https://creativecommons.org/licenses/publicdomain/"],
    },
];
