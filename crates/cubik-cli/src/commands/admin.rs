use anyhow::Context;
use cubik_auth::{AdminAccess, AllowList, admin_access};
use cubik_core::WalletAddress;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AdminCheckArgs, AdminCommands};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AdminCheckResponse {
    wallet: Option<String>,
    granted: bool,
    #[serde(flatten)]
    access: AdminAccess,
}

pub fn handle(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AdminCommands::Check(args) => check(args, ctx, flags),
    }
}

fn check(args: &AdminCheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let allow_list = AllowList::new(ctx.config.admin.require_wallet_addresses()?);
    tracing::debug!(admins = allow_list.len(), "admin allow-list loaded");
    output(&evaluate(args, &allow_list)?, flags.format)
}

fn evaluate(args: &AdminCheckArgs, allow_list: &AllowList) -> anyhow::Result<AdminCheckResponse> {
    let connected = parse_wallet(args.wallet.as_deref(), "--wallet")?;
    let session = if args.no_session_wallet {
        None
    } else {
        match args.session_wallet.as_deref() {
            Some(raw) => parse_wallet(Some(raw), "--session-wallet")?,
            None => connected.clone(),
        }
    };

    let access = admin_access(session.as_ref(), connected.as_ref(), allow_list);
    Ok(AdminCheckResponse {
        wallet: connected.map(String::from),
        granted: access.is_granted(),
        access,
    })
}

fn parse_wallet(raw: Option<&str>, flag: &str) -> anyhow::Result<Option<WalletAddress>> {
    raw.map(|raw| WalletAddress::parse(raw).with_context(|| format!("invalid {flag}")))
        .transpose()
}
