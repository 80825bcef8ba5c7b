use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "contentdash",
    version,
    about = "content-governance dashboard for site pages and documents",
    long_about = "contentdash loads a pages dataset and a documents dataset, summarises them and renders filterable tables as a text, JSON or HTML report.\n\nExamples:\n  contentdash --pages pages.json --documents documents.json\n  contentdash --pages https://intranet.tld/pages.json --documents https://intranet.tld/documents.json --status Draft\n  contentdash --library Finance --teams true -o dashboard.html\n\nTip: Use --config to persist sources and filters and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the report to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Report format (text, json, html). Inferred from --output when omitted."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'p',
        long = "pg",
        visible_alias = "pages",
        value_name = "SRC",
        help_heading = "Input",
        help = "Pages dataset: a JSON file path or http(s) URL (default ./pages.json)."
    )]
    pub pages: Option<String>,

    #[arg(
        short = 'd',
        long = "dc",
        visible_alias = "documents",
        value_name = "SRC",
        help_heading = "Input",
        help = "Documents dataset: a JSON file path or http(s) URL (default ./documents.json)."
    )]
    pub documents: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        help_heading = "Input",
        help = "Write a commented default config to ~/.contentdash/config.yml and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 's',
        long = "q",
        visible_alias = "search",
        value_name = "TEXT",
        help_heading = "Pages Filters",
        help = "Case-insensitive substring matched against page title or URL."
    )]
    pub search: Option<String>,

    #[arg(
        short = 'S',
        long = "st",
        visible_alias = "status",
        value_name = "STATUS",
        help_heading = "Pages Filters",
        help = "Only pages with exactly this status."
    )]
    pub status: Option<String>,

    #[arg(
        short = 'm',
        long = "ma",
        visible_alias = "min-accessibility",
        value_name = "SCORE",
        help_heading = "Pages Filters",
        help = "Only pages with an accessibility score at or above SCORE (0-100)."
    )]
    pub min_accessibility: Option<String>,

    #[arg(
        short = 'l',
        long = "lib",
        visible_alias = "library",
        value_name = "LIBRARY",
        help_heading = "Documents Filters",
        help = "Only documents in this library."
    )]
    pub library: Option<String>,

    #[arg(
        short = 'y',
        long = "sens",
        visible_alias = "sensitivity",
        value_name = "LABEL",
        help_heading = "Documents Filters",
        help = "Only documents with exactly this sensitivity label."
    )]
    pub sensitivity: Option<String>,

    #[arg(
        short = 't',
        long = "tm",
        visible_alias = "teams",
        value_name = "true|false",
        help_heading = "Documents Filters",
        help = "Only documents whose Teams sync status matches."
    )]
    pub teams: Option<String>,

    #[arg(
        short = 'T',
        long = "to",
        visible_alias = "timeout",
        value_name = "SECONDS",
        help_heading = "Network",
        help = "Per-request timeout in seconds for URL sources."
    )]
    pub timeout: Option<u64>,
}
