use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "migrate")]
#[command(about = "Copy per-locale posts and loose images into a site's content layout")]
pub struct Config {
    /// Source directory holding one subdirectory per locale plus loose images
    #[arg(long, default_value = "blocks")]
    pub source: PathBuf,

    /// Root of the target site
    #[arg(long, default_value = "apps/landing")]
    pub target: PathBuf,

    /// Posts directory, relative to the target
    #[arg(long, default_value = "app/blog/_posts")]
    pub posts_dir: PathBuf,

    /// Image directory, relative to the target
    #[arg(long, default_value = "public/images/blog")]
    pub images_dir: PathBuf,

    /// Locale whose posts directory is wrapped in parentheses, e.g. `(en)`
    #[arg(long, default_value = "en")]
    pub default_locale: String,

    /// Remove the source directory afterwards if nothing failed
    #[arg(long)]
    pub cleanup: bool,
}

impl Config {
    pub fn posts_root(&self) -> PathBuf {
        self.target.join(&self.posts_dir)
    }

    pub fn images_root(&self) -> PathBuf {
        self.target.join(&self.images_dir)
    }

    /// Name of the posts subdirectory receiving a locale's files
    pub fn locale_dir_name(&self, locale: &str) -> String {
        if locale == self.default_locale { format!("({})", locale) } else { locale.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::try_parse_from(["migrate"]).unwrap();
        assert_eq!(cfg.posts_root(), PathBuf::from("apps/landing/app/blog/_posts"));
        assert_eq!(cfg.images_root(), PathBuf::from("apps/landing/public/images/blog"));
        assert!(!cfg.cleanup);
    }

    #[test]
    fn test_locale_dir_name() {
        let cfg = Config::try_parse_from(["migrate", "--default-locale", "de"]).unwrap();
        assert_eq!(cfg.locale_dir_name("de"), "(de)");
        assert_eq!(cfg.locale_dir_name("en"), "en");
    }
}
