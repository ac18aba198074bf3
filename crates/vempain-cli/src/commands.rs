//! Main commands enum and shared filter arguments.

use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List site resources from the admin backend
    Resources {
        #[command(flatten)]
        filter: ResourceFilterArgs,
        /// Reject values the backend does not document
        #[arg(long)]
        strict: bool,
        /// Print the page as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Give up after this many seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Print the listing query string without sending it
    Query {
        #[command(flatten)]
        filter: ResourceFilterArgs,
        /// Reject values the backend does not document
        #[arg(long)]
        strict: bool,
    },
}

/// Filters, sort and pagination shared by the listing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ResourceFilterArgs {
    /// Resource type: SITE_FILE, PAGE or GALLERY
    #[arg(long = "type", value_name = "TYPE")]
    pub resource_type: Option<String>,

    /// File type short name, for site files
    #[arg(long)]
    pub file_type: Option<String>,

    /// Free-text search
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only resources protected by this ACL
    #[arg(long, allow_negative_numbers = true)]
    pub acl_id: Option<i64>,

    /// Sort key, e.g. id, name, acl_id (backend default: id)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long)]
    pub direction: Option<String>,

    /// Page number, starting at 0 (backend default: 0)
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Page size (backend default: 25, at most 200)
    #[arg(long, allow_negative_numbers = true)]
    pub size: Option<i64>,
}
