pub use clap::Parser;

/// Scaffold a Vue 3 web project from the remote starter template.
#[derive(Parser, Debug, Default)]
#[clap(version, ignore_errors = true)]
pub struct Args {
    /// Directory to create the project in; doubles as the project name
    pub target_dir: Option<String>,

    /// Scaffold the TypeScript variant of the template
    #[clap(long, alias = "ts")]
    pub typescript: bool,

    /// Include a unit-test setup
    #[clap(long = "with-tests", alias = "tests")]
    pub with_tests: bool,

    /// Wire vue-router into the generated app
    #[clap(long, alias = "router")]
    pub vue_router: bool,

    /// Enable the vue-devtools integration
    #[clap(long, alias = "devtools")]
    pub vue_devtools: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_becomes_target_dir() {
        let args = Args::parse_from(["sprout", "demo"]);
        assert_eq!(args.target_dir.as_deref(), Some("demo"));
    }

    #[test]
    fn no_arguments_means_no_target() {
        let args = Args::parse_from(["sprout"]);
        assert_eq!(args.target_dir, None);
        assert!(!args.typescript && !args.with_tests && !args.vue_router && !args.vue_devtools);
    }

    #[test]
    fn variant_flags_parse() {
        let args = Args::parse_from([
            "sprout",
            "demo",
            "--typescript",
            "--with-tests",
            "--vue-router",
            "--vue-devtools",
        ]);
        assert!(args.typescript && args.with_tests && args.vue_router && args.vue_devtools);
    }

    #[test]
    fn short_aliases_parse() {
        let args = Args::parse_from(["sprout", "demo", "--ts", "--tests", "--router", "--devtools"]);
        assert!(args.typescript && args.with_tests && args.vue_router && args.vue_devtools);
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        let args = Args::parse_from(["sprout", "demo", "--no-such-flag"]);
        assert_eq!(args.target_dir.as_deref(), Some("demo"));
    }
}
