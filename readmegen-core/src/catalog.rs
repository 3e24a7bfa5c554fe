//! Static lookup tables: technology catalog, status catalog, stack groups.
//!
//! All three are plain immutable values. The generator owns one of each;
//! callers that want extra technologies build a catalog with
//! [`TechCatalog::extend`] and hand it over at construction.

use serde::{Deserialize, Serialize};

/// A known technology with its badge color and logo identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechEntry {
    pub name: String,
    pub color: String,
    pub logo: String,
}

/// A named group of technologies, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechCategory {
    pub name: String,
    pub entries: Vec<TechEntry>,
}

/// Category name → ordered technology entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechCatalog {
    categories: Vec<TechCategory>,
}

impl TechCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        let categories = BUILTIN_TECHNOLOGIES
            .iter()
            .map(|(name, entries)| TechCategory {
                name: (*name).to_string(),
                entries: entries
                    .iter()
                    .map(|(name, color, logo)| TechEntry {
                        name: (*name).to_string(),
                        color: (*color).to_string(),
                        logo: (*logo).to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// An empty catalog. Every lookup falls back to the derived logo slug.
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = &TechCategory> {
        self.categories.iter()
    }

    pub fn category(&self, name: &str) -> Option<&TechCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Every entry across all categories, in category order.
    pub fn entries(&self) -> impl Iterator<Item = &TechEntry> {
        self.categories.iter().flat_map(|c| c.entries.iter())
    }

    /// Exact-match lookup by name. The first hit in category order wins.
    pub fn find(&self, name: &str) -> Option<&TechEntry> {
        self.entries().find(|e| e.name == name)
    }

    /// Logo identifier for a badge label: the catalog's logo, or the label
    /// lowercased with all whitespace removed.
    pub fn logo_for(&self, text: &str) -> String {
        match self.find(text) {
            Some(entry) => entry.logo.clone(),
            None => {
                tracing::debug!(text, "technology not in catalog; deriving logo slug");
                fallback_logo(text)
            }
        }
    }

    /// Case-insensitive substring search on names, optionally limited to one
    /// category. An empty term matches everything.
    pub fn search<'a>(&'a self, term: &str, category: Option<&str>) -> Vec<&'a TechEntry> {
        let needle = term.to_lowercase();
        self.categories
            .iter()
            .filter(|c| category.map_or(true, |wanted| c.name == wanted))
            .flat_map(|c| c.entries.iter())
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Append entries to `category`, creating it at the end when absent.
    pub fn extend(&mut self, category: &str, entries: impl IntoIterator<Item = TechEntry>) {
        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(existing) => existing.entries.extend(entries),
            None => self.categories.push(TechCategory {
                name: category.to_string(),
                entries: entries.into_iter().collect(),
            }),
        }
    }
}

impl Default for TechCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn fallback_logo(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !is_label_whitespace(*c))
        .collect()
}

/// Whitespace as badge labels and slugs see it: ASCII tab, line feed, vertical
/// tab, form feed, carriage return and space, the Unicode space separators,
/// the line/paragraph separators and U+FEFF. U+0085 is not whitespace here.
pub fn is_label_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// ---------------------------------------------------------------------------
// Status catalog
// ---------------------------------------------------------------------------

/// A quick-pick status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCatalog {
    entries: Vec<StatusEntry>,
}

impl StatusCatalog {
    pub fn builtin() -> Self {
        let entries = BUILTIN_STATUSES
            .iter()
            .map(|(name, color)| StatusEntry {
                name: (*name).to_string(),
                color: (*color).to_string(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn find(&self, name: &str) -> Option<&StatusEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

impl Default for StatusCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Stack groups
// ---------------------------------------------------------------------------

/// One line of the "Tech Stack" subsection: a label, the exact technology
/// names that belong to it, and the phrase used when none are selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackGroup {
    pub label: String,
    pub members: Vec<String>,
    pub fallback: String,
}

impl StackGroup {
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackGroups {
    groups: Vec<StackGroup>,
}

impl StackGroups {
    /// Frontend, Backend, Database, DevOps.
    pub fn builtin() -> Self {
        let groups = BUILTIN_STACK_GROUPS
            .iter()
            .map(|(label, members, fallback)| StackGroup {
                label: (*label).to_string(),
                members: members.iter().map(|m| (*m).to_string()).collect(),
                fallback: (*fallback).to_string(),
            })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[StackGroup] {
        &self.groups
    }
}

impl Default for StackGroups {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

const BUILTIN_STACK_GROUPS: &[(&str, &[&str], &str)] = &[
    (
        "Frontend",
        &["React", "Vue.js", "Angular", "Svelte", "Next.js", "Nuxt.js", "TypeScript", "JavaScript"],
        "Modern web technologies",
    ),
    (
        "Backend",
        &["Node.js", "Python", "Java", "Go", "Rust", "PHP", "C#", "Ruby"],
        "Server-side technologies",
    ),
    (
        "Database",
        &["MongoDB", "PostgreSQL", "MySQL", "Redis", "SQLite", "Firebase", "Supabase"],
        "Database solutions",
    ),
    (
        "DevOps",
        &["Docker", "Kubernetes", "AWS", "Google Cloud", "Azure", "Vercel", "Netlify"],
        "Cloud and deployment tools",
    ),
];

const BUILTIN_TECHNOLOGIES: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "Programming Languages",
        &[
            ("JavaScript", "F7DF1E", "javascript"),
            ("TypeScript", "007ACC", "typescript"),
            ("Python", "3776AB", "python"),
            ("Java", "ED8B00", "openjdk"),
            ("C++", "00599C", "cplusplus"),
            ("C#", "239120", "csharp"),
            ("C", "A8B9CC", "c"),
            ("Go", "00ADD8", "go"),
            ("Rust", "000000", "rust"),
            ("Swift", "FA7343", "swift"),
            ("Kotlin", "0095D5", "kotlin"),
            ("Dart", "0175C2", "dart"),
            ("PHP", "777BB4", "php"),
            ("Ruby", "CC342D", "ruby"),
            ("Scala", "DC322F", "scala"),
            ("R", "276DC3", "r"),
            ("MATLAB", "FF6600", "mathworks"),
            ("Perl", "39457E", "perl"),
            ("Haskell", "5D4F85", "haskell"),
            ("Clojure", "5881D8", "clojure"),
            ("Elixir", "4B275F", "elixir"),
            ("Erlang", "A90533", "erlang"),
            ("F#", "378BBA", "fsharp"),
            ("Lua", "2C2D72", "lua"),
            ("Groovy", "4298B8", "apachegroovy"),
            ("Julia", "9558B2", "julia"),
            ("Crystal", "000000", "crystal"),
            ("Nim", "FFE953", "nim"),
            ("Zig", "EC915C", "zig"),
            ("Assembly", "654FF0", "assemblyscript"),
            ("Solidity", "363636", "solidity"),
            ("COBOL", "005CA5", "gnucobol"),
            ("Fortran", "734F96", "fortran"),
        ],
    ),
    (
        "Frontend Frameworks",
        &[
            ("React", "61DAFB", "react"),
            ("Vue.js", "4FC08D", "vuedotjs"),
            ("Angular", "DD0031", "angular"),
            ("Svelte", "FF3E00", "svelte"),
            ("Next.js", "000000", "nextdotjs"),
            ("Nuxt.js", "00C58E", "nuxtdotjs"),
            ("Gatsby", "663399", "gatsby"),
            ("Remix", "000000", "remix"),
            ("SvelteKit", "FF3E00", "svelte"),
            ("Astro", "0C7377", "astro"),
            ("Solid", "2C4F7C", "solid"),
            ("Qwik", "AC7EF4", "builder.io"),
            ("Alpine.js", "8BC34A", "alpinedotjs"),
            ("Lit", "324FFF", "lit"),
            ("Stencil", "16161D", "stencil"),
            ("Ember.js", "E04E39", "emberdotjs"),
            ("Preact", "673AB8", "preact"),
        ],
    ),
    (
        "CSS & Styling",
        &[
            ("CSS3", "1572B6", "css3"),
            ("HTML5", "E34F26", "html5"),
            ("Sass", "CC6699", "sass"),
            ("SCSS", "CC6699", "sass"),
            ("Less", "1D365D", "less"),
            ("Stylus", "333333", "stylus"),
            ("Tailwind CSS", "06B6D4", "tailwindcss"),
            ("Bootstrap", "7952B3", "bootstrap"),
            ("Bulma", "00D1B2", "bulma"),
            ("Chakra UI", "319795", "chakraui"),
            ("Material-UI", "007FFF", "mui"),
            ("Ant Design", "0170FE", "antdesign"),
            ("Semantic UI", "35BDB2", "semanticui"),
            ("Styled Components", "DB7093", "styledcomponents"),
            ("Emotion", "D26AC2", "emotion"),
            ("PostCSS", "DD3A0A", "postcss"),
        ],
    ),
    (
        "Backend Frameworks",
        &[
            ("Node.js", "339933", "nodedotjs"),
            ("Express.js", "000000", "express"),
            ("Fastify", "000000", "fastify"),
            ("Koa.js", "33333D", "koa"),
            ("NestJS", "E0234E", "nestjs"),
            ("Django", "092E20", "django"),
            ("Flask", "000000", "flask"),
            ("FastAPI", "009688", "fastapi"),
            ("Spring Boot", "6DB33F", "springboot"),
            ("Spring", "6DB33F", "spring"),
            ("Laravel", "FF2D20", "laravel"),
            ("CodeIgniter", "EF4223", "codeigniter"),
            ("Symfony", "000000", "symfony"),
            ("CakePHP", "D33C43", "cakephp"),
            ("Ruby on Rails", "CC0000", "rubyonrails"),
            ("Sinatra", "000000", "ruby"),
            ("ASP.NET Core", "512BD4", "dotnet"),
            ("Gin", "00ADD8", "go"),
            ("Echo", "00ADD8", "go"),
            ("Fiber", "00ADD8", "go"),
            ("Actix Web", "000000", "rust"),
            ("Rocket", "000000", "rust"),
            ("Phoenix", "F16F00", "phoenixframework"),
            ("Vapor", "FA7343", "swift"),
        ],
    ),
    (
        "Databases",
        &[
            ("MySQL", "4479A1", "mysql"),
            ("PostgreSQL", "336791", "postgresql"),
            ("MongoDB", "47A248", "mongodb"),
            ("Redis", "DC382D", "redis"),
            ("SQLite", "003B57", "sqlite"),
            ("MariaDB", "003545", "mariadb"),
            ("Oracle", "F80000", "oracle"),
            ("Microsoft SQL Server", "CC2927", "microsoftsqlserver"),
            ("Cassandra", "1287B1", "apachecassandra"),
            ("CouchDB", "E42528", "couchdb"),
            ("InfluxDB", "22ADF6", "influxdb"),
            ("Neo4j", "4581C3", "neo4j"),
            ("ArangoDB", "DDE072", "arangodb"),
            ("DynamoDB", "4053D6", "amazondynamodb"),
            ("Firebase", "FFCA28", "firebase"),
            ("Supabase", "3ECF8E", "supabase"),
            ("PlanetScale", "000000", "planetscale"),
            ("CockroachDB", "6933FF", "cockroachlabs"),
            ("Elasticsearch", "005571", "elasticsearch"),
        ],
    ),
    (
        "Cloud & DevOps",
        &[
            ("AWS", "FF9900", "amazonaws"),
            ("Google Cloud", "4285F4", "googlecloud"),
            ("Microsoft Azure", "0078D4", "microsoftazure"),
            ("Docker", "2496ED", "docker"),
            ("Kubernetes", "326CE5", "kubernetes"),
            ("Jenkins", "D24939", "jenkins"),
            ("GitHub Actions", "2088FF", "githubactions"),
            ("GitLab CI", "FCA326", "gitlab"),
            ("CircleCI", "343434", "circleci"),
            ("Travis CI", "3EAAAF", "travisci"),
            ("Terraform", "7B42BC", "terraform"),
            ("Ansible", "EE0000", "ansible"),
            ("Vagrant", "1563FF", "vagrant"),
            ("Nginx", "009639", "nginx"),
            ("Apache", "D22128", "apache"),
            ("Vercel", "000000", "vercel"),
            ("Netlify", "00C7B7", "netlify"),
            ("Heroku", "430098", "heroku"),
            ("DigitalOcean", "0080FF", "digitalocean"),
        ],
    ),
    (
        "Mobile Development",
        &[
            ("React Native", "61DAFB", "react"),
            ("Flutter", "02569B", "flutter"),
            ("Xamarin", "3498DB", "xamarin"),
            ("Ionic", "3880FF", "ionic"),
            ("Cordova", "35434F", "apachecordova"),
            ("PhoneGap", "00ADEF", "adobephonegap"),
            ("NativeScript", "3655FF", "nativescript"),
            ("Expo", "000020", "expo"),
            ("Android", "3DDC84", "android"),
            ("iOS", "000000", "ios"),
        ],
    ),
    (
        "Testing Frameworks",
        &[
            ("Jest", "C21325", "jest"),
            ("Mocha", "8D6748", "mocha"),
            ("Jasmine", "8A4182", "jasmine"),
            ("Cypress", "17202C", "cypress"),
            ("Selenium", "43B02A", "selenium"),
            ("Playwright", "2EAD33", "playwright"),
            ("Puppeteer", "40B5A4", "puppeteer"),
            ("Testing Library", "E33332", "testinglibrary"),
            ("Vitest", "6E9F18", "vitest"),
            ("PyTest", "0A9EDC", "pytest"),
            ("JUnit", "25A162", "junit5"),
            ("PHPUnit", "366394", "php"),
        ],
    ),
    (
        "Build Tools",
        &[
            ("Webpack", "8DD6F9", "webpack"),
            ("Vite", "646CFF", "vite"),
            ("Rollup", "EC4A3F", "rollupdotjs"),
            ("Parcel", "E1A94A", "parcel"),
            ("Gulp", "CF4647", "gulp"),
            ("Grunt", "FAA918", "grunt"),
            ("Snowpack", "2E5E82", "snowpack"),
            ("ESBuild", "FFCF00", "esbuild"),
            ("Turbopack", "0C1419", "turbo"),
        ],
    ),
    (
        "Version Control",
        &[
            ("Git", "F05032", "git"),
            ("GitHub", "181717", "github"),
            ("GitLab", "FCA326", "gitlab"),
            ("Bitbucket", "0052CC", "bitbucket"),
            ("Subversion", "809CC9", "subversion"),
            ("Mercurial", "999999", "mercurial"),
        ],
    ),
    (
        "IDEs & Editors",
        &[
            ("VS Code", "007ACC", "visualstudiocode"),
            ("Visual Studio", "5C2D91", "visualstudio"),
            ("IntelliJ IDEA", "000000", "intellijidea"),
            ("WebStorm", "000000", "webstorm"),
            ("PyCharm", "000000", "pycharm"),
            ("Android Studio", "3DDC84", "androidstudio"),
            ("Xcode", "007ACC", "xcode"),
            ("Eclipse", "2C2255", "eclipse"),
            ("NetBeans", "1B6EC8", "apachenetbeanside"),
            ("Atom", "66595C", "atom"),
            ("Sublime Text", "FF9800", "sublimetext"),
            ("Vim", "019733", "vim"),
            ("Emacs", "7F5AB6", "gnuemacs"),
        ],
    ),
    (
        "Cybersecurity",
        &[
            ("Kali Linux", "557C94", "kalilinux"),
            ("Metasploit", "2596CD", "metasploit"),
            ("Wireshark", "1679A7", "wireshark"),
            ("Burp Suite", "FF6633", "portswigger"),
            ("Nmap", "4682B4", "nmap"),
            ("OWASP", "000000", "owasp"),
            ("Snyk", "4C4A73", "snyk"),
            ("SonarQube", "4E9BCD", "sonarqube"),
            ("Nessus", "00C176", "tenable"),
            ("Qualys", "ED2224", "qualys"),
            ("Splunk", "000000", "splunk"),
            ("Elastic Security", "005571", "elasticstack"),
            ("CrowdStrike", "E01F25", "crowdstrike"),
            ("Rapid7", "394EFF", "rapid7"),
            ("Hashcat", "000000", "hashcat"),
            ("John the Ripper", "8B0000", "gnupg"),
            ("Aircrack-ng", "00599C", "wifi"),
            ("Hydra", "2E8B57", "gnupg"),
            ("Nikto", "8B0000", "gnupg"),
            ("SQLmap", "CC2927", "postgresql"),
            ("Maltego", "1BA1E2", "maltego"),
            ("Autopsy", "000080", "autopsy"),
        ],
    ),
    (
        "APIs & GraphQL",
        &[
            ("GraphQL", "E434AA", "graphql"),
            ("Apollo GraphQL", "311C87", "apollographql"),
            ("REST API", "25D366", "openapiinitiative"),
            ("Postman", "FF6C37", "postman"),
            ("Insomnia", "4000BF", "insomnia"),
            ("Swagger", "85EA2D", "swagger"),
            ("tRPC", "398CCB", "trpc"),
        ],
    ),
    (
        "Package Managers",
        &[
            ("npm", "CB3837", "npm"),
            ("Yarn", "2C8EBB", "yarn"),
            ("pnpm", "F69220", "pnpm"),
            ("Composer", "885630", "composer"),
            ("pip", "3776AB", "pypi"),
            ("Maven", "C71A36", "apachemaven"),
            ("Gradle", "02303A", "gradle"),
            ("NuGet", "004880", "nuget"),
        ],
    ),
];

const BUILTIN_STATUSES: &[(&str, &str)] = &[
    ("Active", "brightgreen"),
    ("Maintained", "blue"),
    ("Stable", "green"),
    ("Beta", "orange"),
    ("Alpha", "red"),
    ("Deprecated", "lightgrey"),
    ("Under Development", "yellow"),
    ("Production Ready", "brightgreen"),
    ("Security Focused", "red"),
    ("Open Source", "blue"),
    ("MIT Licensed", "green"),
    ("GPL Licensed", "blue"),
    ("Apache Licensed", "green"),
    ("Commercial", "orange"),
    ("Enterprise", "purple"),
    ("Free", "brightgreen"),
    ("Premium", "gold"),
    ("SaaS", "blue"),
    ("Self-Hosted", "green"),
    ("Cloud Native", "blue"),
    ("Mobile First", "green"),
    ("Responsive", "blue"),
    ("PWA Ready", "purple"),
    ("TypeScript", "007ACC"),
    ("JavaScript", "F7DF1E"),
    ("Cross Platform", "blue"),
    ("Real Time", "green"),
    ("Offline First", "orange"),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_fourteen_categories() {
        let catalog = TechCatalog::builtin();
        assert_eq!(catalog.categories().count(), 14);
        assert_eq!(
            catalog.categories().next().map(|c| c.name.as_str()),
            Some("Programming Languages")
        );
    }

    #[test]
    fn find_is_exact_match() {
        let catalog = TechCatalog::builtin();
        assert_eq!(catalog.find("C++").map(|e| e.logo.as_str()), Some("cplusplus"));
        assert!(catalog.find("react").is_none());
    }

    #[test]
    fn first_category_wins_for_shared_names() {
        let mut catalog = TechCatalog::builtin();
        catalog.extend(
            "Internal",
            vec![TechEntry {
                name: "React".into(),
                color: "000000".into(),
                logo: "internal-react".into(),
            }],
        );
        assert_eq!(catalog.logo_for("React"), "react");
    }

    #[test]
    fn logo_falls_back_to_lowercased_label_without_whitespace() {
        let catalog = TechCatalog::builtin();
        assert_eq!(catalog.logo_for("Next.js"), "nextdotjs");
        assert_eq!(catalog.logo_for("My Internal  Tool"), "myinternaltool");
        assert_eq!(TechCatalog::empty().logo_for("Tab\tSeparated"), "tabseparated");
    }

    #[test]
    fn label_whitespace_includes_bom_but_not_next_line() {
        for c in ['\t', '\u{0B}', ' ', '\u{A0}', '\u{2003}', '\u{3000}', '\u{FEFF}'] {
            assert!(is_label_whitespace(c), "{c:?}");
        }
        for c in ['\u{85}', '\u{200B}', 'a', '-'] {
            assert!(!is_label_whitespace(c), "{c:?}");
        }
        let catalog = TechCatalog::empty();
        assert_eq!(catalog.logo_for("Zero\u{FEFF}Width"), "zerowidth");
        assert_eq!(catalog.logo_for("Next\u{85}Line"), "next\u{85}line");
    }

    #[test]
    fn search_filters_by_term_and_category() {
        let catalog = TechCatalog::builtin();
        let all_script: Vec<_> = catalog
            .search("script", None)
            .iter()
            .map(|e| e.name.clone())
            .collect();
        assert!(all_script.contains(&"JavaScript".to_string()));
        assert!(all_script.contains(&"TypeScript".to_string()));

        let only_db = catalog.search("", Some("Databases"));
        assert_eq!(only_db.len(), 19);
        assert!(catalog.search("sql", Some("Frontend Frameworks")).is_empty());
    }

    #[test]
    fn extend_appends_new_category_last() {
        let mut catalog = TechCatalog::builtin();
        catalog.extend(
            "Internal",
            vec![TechEntry {
                name: "Foo".into(),
                color: "123456".into(),
                logo: "foo".into(),
            }],
        );
        assert_eq!(catalog.categories().last().map(|c| c.name.as_str()), Some("Internal"));
        assert_eq!(catalog.logo_for("Foo"), "foo");

        catalog.extend(
            "Databases",
            vec![TechEntry {
                name: "DuckDB".into(),
                color: "FFF000".into(),
                logo: "duckdb".into(),
            }],
        );
        assert_eq!(catalog.category("Databases").map(|c| c.entries.len()), Some(20));
    }

    #[test]
    fn status_catalog_lookup() {
        let statuses = StatusCatalog::builtin();
        assert_eq!(statuses.entries().len(), 28);
        assert_eq!(statuses.find("Beta").map(|e| e.color.as_str()), Some("orange"));
        assert!(statuses.find("beta").is_none());
    }

    #[test]
    fn stack_groups_are_ordered() {
        let groups = StackGroups::builtin();
        let labels: Vec<_> = groups.groups().iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["Frontend", "Backend", "Database", "DevOps"]);
        assert!(groups.groups()[3].contains("Google Cloud"));
        assert!(!groups.groups()[3].contains("Microsoft Azure"));
    }
}
