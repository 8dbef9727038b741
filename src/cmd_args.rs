use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Base URL of the posts API
    #[clap(long, help = "base URL of the posts API")]
    base_url: Option<String>,

    /// Posts shown per page. Must be at least 1.
    #[clap(short = 'n', long, help = "posts per page")]
    items_per_page: Option<String>,

    /// Request timeout in seconds
    #[clap(long, help = "request timeout in seconds")]
    timeout: Option<u64>,

    /// Initial search term
    #[clap(short = 's', long, help = "initial search term")]
    search: Option<String>,

    /// Page printed in print mode
    #[clap(long, default_value_t = 1, help = "page to print with --print")]
    page: usize,

    /// Print one page and exit instead of starting the browser
    #[clap(long, help = "print one page and exit")]
    print: bool,

    /// Write diagnostics to this file instead of stderr
    #[clap(long, help = "write diagnostics to a file")]
    log_file: Option<String>,

    #[clap(short = 'v', long, help = "verbose diagnostics")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    base_url: Option<String>,
    items_per_page: Option<String>,
    timeout: Option<u64>,
    search: Option<String>,
    page: usize,
    print: bool,
    log_file: Option<String>,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            base_url: args.base_url,
            items_per_page: args.items_per_page,
            timeout: args.timeout,
            search: args.search,
            page: args.page,
            print: args.print,
            log_file: args.log_file,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Raw page size; validated when settings are resolved
    pub fn items_per_page(&self) -> Option<&str> {
        self.items_per_page.as_deref()
    }

    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn print(&self) -> bool {
        self.print
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
