//! Permissions command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use fblogin_core::constants::{
    DEFAULT_SCOPE, FACEBOOK_PERMISSIONS, FACEBOOK_SUBJECT_TOKEN_TYPE, PROFILE_FIELDS,
};

use crate::output;

#[derive(Args, Debug)]
pub struct PermissionsArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Requirements {
    permissions: &'static [&'static str],
    profile_fields: &'static str,
    subject_token_type: &'static str,
    default_scope: &'static str,
}

pub fn run(args: PermissionsArgs) -> Result<()> {
    let requirements = Requirements {
        permissions: &FACEBOOK_PERMISSIONS,
        profile_fields: PROFILE_FIELDS,
        subject_token_type: FACEBOOK_SUBJECT_TOKEN_TYPE,
        default_scope: DEFAULT_SCOPE,
    };

    if args.json {
        return output::json(&requirements);
    }

    output::field("Permissions", &requirements.permissions.join(","));
    output::field("Profile fields", requirements.profile_fields);
    output::field("Subject token type", requirements.subject_token_type);
    output::field("Default scope", requirements.default_scope);

    Ok(())
}
