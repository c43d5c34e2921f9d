use clap::Parser;
use std::path::PathBuf;

/// Find sentences in the SAC yearbooks where a person climbs a mountain.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Year (YYYY) or inclusive range (YYYY-YYYY); every available year if omitted
    pub years: Option<String>,

    /// Directory holding the Text+Berg SAC XML files
    #[arg(long, default_value = "Text+Berg_Release_147_v03/XML/SAC")]
    pub xml_dir: PathBuf,

    /// Language of the articles that name a translation
    #[arg(short, long, default_value = "de")]
    pub source: String,

    /// Language of the translated articles
    #[arg(short, long, default_value = "fr")]
    pub target: String,

    /// YAML file replacing the built-in ascent vocabulary
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "output.json")]
    pub output_file: PathBuf,

    /// Do not print the article pair report or the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Log each processed yearbook
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bergbest"]);
        assert_eq!(cli.years, None);
        assert_eq!(cli.xml_dir, PathBuf::from("Text+Berg_Release_147_v03/XML/SAC"));
        assert_eq!(cli.source, "de");
        assert_eq!(cli.target, "fr");
        assert_eq!(cli.output_file, PathBuf::from("output.json"));
        assert!(!cli.quiet);
    }

    #[test]
    fn test_years_and_options() {
        let cli = Cli::parse_from([
            "bergbest",
            "1957-1960",
            "--xml-dir",
            "corpus",
            "-s",
            "fr",
            "-t",
            "de",
            "-o",
            "climbs.json",
            "--quiet",
        ]);
        assert_eq!(cli.years.as_deref(), Some("1957-1960"));
        assert_eq!(cli.xml_dir, PathBuf::from("corpus"));
        assert_eq!(cli.source, "fr");
        assert_eq!(cli.target, "de");
        assert_eq!(cli.output_file, PathBuf::from("climbs.json"));
        assert!(cli.quiet);
    }
}
