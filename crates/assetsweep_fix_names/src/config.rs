use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fix-names")]
#[command(about = "Rename files with a doubled extension such as post.mdx.md to post.mdx")]
pub struct Config {
    /// Directory to search recursively
    #[arg(long)]
    pub root: PathBuf,

    /// Trailing suffix to replace
    #[arg(long, default_value = ".mdx.md")]
    pub from_suffix: String,

    /// Replacement suffix
    #[arg(long, default_value = ".mdx")]
    pub to_suffix: String,

    /// Report what would be renamed without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::try_parse_from(["fix-names", "--root", "posts"]).unwrap();
        assert_eq!(cfg.root, PathBuf::from("posts"));
        assert_eq!(cfg.from_suffix, ".mdx.md");
        assert_eq!(cfg.to_suffix, ".mdx");
        assert!(!cfg.dry_run);
    }

    #[test]
    fn test_root_is_required() {
        assert!(Config::try_parse_from(["fix-names"]).is_err());
    }
}
