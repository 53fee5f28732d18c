//! Static rule tables used by the classifiers.
//!
//! All entries are lowercase; comparisons lowercase the candidate name first.

/// Directory names whose whole subtree is skipped.
pub const IGNORE_DIRS: &[&str] = &[
    // dependencies and packages
    "node_modules",
    "bower_components",
    "jspm_packages",
    "venv",
    "env",
    ".env",
    "site-packages",
    "__pycache__",
    ".gradle",
    ".mvn",
    "target",
    "vendor",
    "packages",
    // build output and caches
    ".next",
    "dist",
    "build",
    "out",
    ".output",
    ".nuxt",
    ".cache",
    ".parcel-cache",
    ".sass-cache",
    ".webpack",
    ".turbo",
    ".swc",
    "coverage",
    ".nyc_output",
    // IDE and OS
    ".git",
    ".vscode",
    ".idea",
    ".ds_store",
    "thumbs.db",
    // temporary and logs
    "logs",
    "tmp",
    "temp",
    ".tmp",
    ".temp",
    // deployment
    ".serverless",
    ".vercel",
    ".netlify",
    // generated
    "_generated",
    "generated",
    "__generated__",
    "typings",
    ".docusaurus",
    "storybook-static",
];

/// Substrings that mark a directory name as build/cache output.
pub const IGNORE_DIR_PATTERNS: &[&str] = &[
    "cache",
    "temp",
    "tmp",
    "build",
    "dist",
    "generated",
    "node_modules",
];

/// Hidden directories that are still collected.
pub const HIDDEN_DIR_EXCEPTIONS: &[&str] = &[".github"];

/// Files that are never collected: secrets, lockfiles and OS artifacts.
pub const FORCE_EXCLUDE_FILES: &[&str] = &[
    ".env",
    ".env.local",
    ".env.development",
    ".env.production",
    ".env.staging",
    ".env.test",
    ".env.example",
    "pnpm-lock.yaml",
    "package-lock.json",
    "yarn.lock",
    ".ds_store",
    "thumbs.db",
];

/// Files that are always collected, whatever their extension.
pub const FORCE_INCLUDE_FILES: &[&str] = &[
    "readme.md",
    "license",
    "changelog.md",
    "contributing.md",
    ".gitignore",
    ".gitattributes",
    "dockerfile",
    "makefile",
    "docker-compose.yml",
    "docker-compose.yaml",
];

/// File name suffixes that are never collected.
pub const IGNORE_EXTENSIONS: &[&str] = &[
    // logs and temporary
    ".log",
    ".tmp",
    ".temp",
    ".cache",
    ".lock",
    ".lockb",
    // source maps and bundles
    ".map",
    ".min.js",
    ".min.css",
    ".bundle.js",
    ".bundle.css",
    ".chunk.js",
    ".chunk.css",
    ".d.ts.map",
    ".js.map",
    ".css.map",
    // media
    ".png",
    ".jpg",
    ".jpeg",
    ".gif",
    ".svg",
    ".ico",
    ".webp",
    ".avif",
    ".bmp",
    ".tiff",
    ".mp4",
    ".webm",
    ".mov",
    ".avi",
    ".mkv",
    ".mp3",
    ".wav",
    ".ogg",
    ".flac",
    ".aac",
    ".m4a",
    // documents and archives
    ".pdf",
    ".doc",
    ".docx",
    ".xls",
    ".xlsx",
    ".ppt",
    ".pptx",
    ".zip",
    ".tar",
    ".gz",
    ".rar",
    ".7z",
    ".bz2",
    ".xz",
    // fonts
    ".woff",
    ".woff2",
    ".ttf",
    ".eot",
    ".otf",
    // binaries
    ".exe",
    ".dll",
    ".so",
    ".dylib",
    ".class",
    ".jar",
    ".war",
    ".pyc",
    ".pyo",
    ".pyd",
    ".deb",
    ".rpm",
    ".dmg",
    ".msi",
    ".app",
    // databases
    ".db",
    ".sqlite",
    ".sqlite3",
    ".dump",
    // backups
    ".backup",
    ".bak",
    ".swp",
    ".swo",
    ".old",
];

/// Substrings that mark a file name as temporary or generated.
pub const IGNORE_FILE_PATTERNS: &[&str] = &[
    ".tmp",
    ".temp",
    ".cache",
    ".lock",
    "~",
    ".bak",
    ".old",
    "generated",
];

/// Extensionless file names that are collected without a shebang.
pub const EXTENSIONLESS_ALLOW: &[&str] = &["makefile", "dockerfile", "license", "readme", "changelog"];

/// Extensions recognised as project source code.
pub const CODE_EXTENSIONS: &[&str] = &[
    // web
    ".js", ".jsx", ".ts", ".tsx", ".mjs", ".cjs", ".html", ".htm", ".css", ".scss", ".sass", ".less",
    // configuration
    ".json", ".jsonc", ".json5", ".yaml", ".yml", ".toml", ".ini", ".cfg", ".conf", ".config",
    // markup and docs
    ".md", ".mdx", ".txt", ".rst",
    // scripts
    ".sh", ".bash", ".zsh", ".fish", ".ps1", ".bat", ".cmd",
    // server languages
    ".py", ".pyw", ".rb", ".php", ".go", ".rs", ".java", ".kt", ".c", ".cpp", ".h", ".hpp", ".cs",
    ".swift", ".dart",
    // specialised
    ".sql", ".graphql", ".gql", ".prisma", ".proto", ".dockerfile", ".tf", ".tfvars",
];

pub const SHEBANG: &str = "#!";
