pub(crate) const HELP_NAME: &str = "help";
pub(crate) const SELF_PLACEHOLDER: &str = "{self}";
pub(crate) const OPTIONS_MARKER: &str = "[options]";
pub(crate) const REQUIRED_MARKER: &str = "(required)";
pub(crate) const USAGE_HEADER: &str = "Usage:";
pub(crate) const OPTIONS_HEADER: &str = "Options:";
pub(crate) const ERRORS_HEADER: &str = "The following errors were found:";
