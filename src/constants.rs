//! Common constants used throughout the appbox application.

/// Supported configuration file names, looked up in the working directory
pub const CONFIG_FILES: [&str; 3] = ["appbox.json", "appbox.yml", "appbox.yaml"];

/// CSV column holding the entry name
pub const NAME_COLUMN: &str = "APPNAME";

/// CSV column holding the entry link
pub const LINK_COLUMN: &str = "APPLINK";

/// CSV column holding the entry icon
pub const ICON_COLUMN: &str = "APPICON";

/// Placeholder replaced with the entry name
pub const NAME_TOKEN: &str = "[[APPNAME]]";

/// Placeholder replaced with the entry link
pub const LINK_TOKEN: &str = "[[APPLINK]]";

/// Placeholder replaced with the entry icon
pub const ICON_TOKEN: &str = "[[APPICON]]";

/// Extension of the provisioned configuration file
pub const CONFIG_FILE_EXTENSION: &str = "ini";
