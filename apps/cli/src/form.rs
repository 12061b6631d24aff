//! Form input given on the command line as `KEY=VALUE` pairs.

use verdict_validator::rules::FormData;

/// Splits one `KEY=VALUE` argument at the first `=`.
///
/// The value may be empty or contain further `=` signs; the key may not be
/// empty.
///
/// # Errors
///
/// Returns a message suitable for a clap usage error when the argument has
/// no `=` or an empty key.
pub fn parse_pair(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some(("", _)) => Err(format!("missing key in `{arg}`")),
        Some((key, value)) => Ok((key.to_owned(), value.to_owned())),
        None => Err(format!("expected KEY=VALUE, got `{arg}`")),
    }
}

/// Collects pairs into a form; a repeated key keeps its last value.
pub fn form_data<I>(pairs: I) -> FormData
where
    I: IntoIterator<Item = (String, String)>,
{
    pairs.into_iter().collect()
}
