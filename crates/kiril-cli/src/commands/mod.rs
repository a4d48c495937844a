pub mod config_ops;
pub mod convert_ops;
pub mod replay_ops;

/// Print `$msg` with the error to stderr and exit 1 if `$result` is `Err`.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub(crate) use die;

/// Install a scheme file before anything touches the global scheme.
pub fn load_scheme(file: Option<&str>) {
    let Some(file) = file else {
        return;
    };
    let content = die!(std::fs::read_to_string(file), "Error reading {file}: {}");
    die!(kiril::init_scheme(content), "Error loading scheme {file}: {}");
}
