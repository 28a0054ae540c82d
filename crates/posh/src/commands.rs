use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
pub use clap_complete::Shell;

const LONG_ABOUT: &str = r#"posh formats lists, ordinals, colors and dates, and extracts text with
single-group regular expressions.

DEFAULTS:
    POSH_CONJUNCTION      conjunction used by 'join' (default: and)
    POSH_OXFORD_COMMA     true/false, comma before the conjunction (default: true)
    POSH_QUEUE_CAPACITY   capacity used by 'queue' (default: 10)
    POSH_LOG_LEVEL        log level when RUST_LOG is unset (default: warn)
    POSH_LOG              append logs to this file instead of stderr

EXAMPLES:
    posh join red green blue              # red, green, and blue
    posh join --no-oxford-comma a b c     # a, b and c
    posh ordinal 1 12 23                  # 1st 12th 23rd
    posh extract '\$(\d*\.?\d*)' '$5.43'  # 5.43
    posh queue --capacity 2 a b c         # b c
    posh darken --amount 0.2 '#ff8040'"#;

#[derive(Parser)]
#[command(name = "posh")]
#[command(author, version)]
#[command(about = "Text, queue, color and date helpers")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the effective output format, considering --json shorthand.
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Join words into a phrase such as "a, b, and c"
    Join {
        /// Fragments to join; empty fragments are skipped
        fragments: Vec<String>,

        /// Word placed before the last fragment
        #[arg(short, long)]
        conjunction: Option<String>,

        /// Put a comma before the conjunction (overrides POSH_OXFORD_COMMA)
        #[arg(long, overrides_with = "no_oxford_comma")]
        oxford_comma: bool,

        /// Omit the comma before the conjunction
        #[arg(long, overrides_with = "oxford_comma")]
        no_oxford_comma: bool,
    },

    /// Print numbers with their English ordinal suffix
    Ordinal {
        #[arg(required = true)]
        numbers: Vec<u64>,
    },

    /// Print the single capture group of PATTERN when it matches all of TEXT
    #[command(long_about = r#"Print the single capture group of PATTERN when it matches all of TEXT.

The pattern must contain exactly one capture group and is matched against
the whole text. A non-matching text prints nothing (null with --json) and
still exits 0; an unusable pattern is an error.

EXAMPLES:
    posh extract '\$(\d*\.?\d*)%?' '$5.43'
    posh extract 'v(?P<major>\d+)\.\d+' v12.4"#)]
    Extract { pattern: String, text: String },

    /// Push elements through a bounded FIFO queue and print what remains
    Queue {
        /// Maximum number of elements kept (default: POSH_QUEUE_CAPACITY)
        #[arg(short, long, allow_negative_numbers = true)]
        capacity: Option<i64>,

        elements: Vec<String>,
    },

    /// Darken a hex color by a flat amount per channel
    Darken {
        /// Color as RRGGBB, #RRGGBB or 0xRRGGBB
        color: String,

        /// Amount subtracted from each channel (0.0 to 1.0)
        #[arg(short, long, default_value = "0.1")]
        amount: f64,

        /// Alpha to attach to the color
        #[arg(long, default_value = "1.0")]
        alpha: f64,
    },

    /// Format a date-time as a medium timestamp, optionally rounded to a day
    Timestamp {
        /// RFC 3339 date-time (default: now, local time)
        #[arg(long)]
        at: Option<String>,

        /// Round to the start of the day or of the next day
        #[arg(long, value_enum, default_value = "none")]
        round: RoundMode,
    },

    /// Trim text; blank text prints nothing
    Trim { text: String },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Resolves the `--oxford-comma` / `--no-oxford-comma` pair. `None` means
/// neither was given and the configured default applies.
pub fn oxford_comma_override(oxford_comma: bool, no_oxford_comma: bool) -> Option<bool> {
    match (oxford_comma, no_oxford_comma) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RoundMode {
    #[default]
    None,
    Down,
    Up,
}
