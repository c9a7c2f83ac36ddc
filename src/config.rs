use structopt::StructOpt;

/// Command line arguments
#[derive(Debug, StructOpt)]
#[structopt(
    name = "methodscan",
    about = "Enumerate the HTTP methods a server accepts."
)]
pub struct Opts {
    /// A level of verbosity, and can be used multiple times
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,

    /// Value to send as the Authorization header on every request
    #[structopt(short = "a", long = "auth", default_value = "")]
    auth: String,

    /// Target host or URL to probe
    host: String,
}

/// Config
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub auth: Option<String>,
    pub verbose: bool,
}

impl Config {
    /// Parse the command line arguments into a runtime config
    pub fn get() -> Result<Config, ()> {
        // parse the opts
        let opts: Opts = Opts::from_args();

        if opts.verbose {
            std::env::set_var("RUST_LOG", "methodscan=debug");
        }

        pretty_env_logger::init();

        Ok(Config::from(opts))
    }
}

impl From<Opts> for Config {
    fn from(opts: Opts) -> Config {
        let auth = if opts.auth.is_empty() {
            None
        } else {
            Some(opts.auth)
        };

        Config {
            host: opts.host,
            auth,
            verbose: opts.verbose,
        }
    }
}
