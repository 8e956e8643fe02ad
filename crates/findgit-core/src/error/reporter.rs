use std::error::Error;
use std::fmt::Write;

use super::FindError;
use log::{debug, error, log_enabled, Level};

/// Report an error to the terminal, including its chain of causes when verbose logging is on
pub fn report_error(err: &FindError) {
    error!("{}", err);

    if log_enabled!(Level::Debug) {
        if let Some(details) = compose_error_details(err) {
            debug!("{}", details);
        }
    }
}

fn compose_error_details(err: &FindError) -> Option<String> {
    // Only compose details if there is an underlying cause for the error
    let mut current = err.source()?;
    let mut details = String::new();

    // Walk up the tree of causes and include all of them
    loop {
        // write! to a String cannot fail
        let _ = write!(details, "cause: {}", current);

        match current.source() {
            Some(cause) => {
                details.push_str("\n\n");
                current = cause;
            }
            None => break,
        }
    }

    Some(details)
}
