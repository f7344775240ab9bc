use anyhow::{Context, Result};
use std::path::Path;
use std::rc::Rc;
use tracing::debug;
use uc_loader_core::{DocumentContext, Session, SessionContext, SessionKey};

use crate::display::{print_injection, print_warnings};
use crate::utils::{PreviewHost, load_config};

/// Open a throwaway session for `url` and report what it would inject
pub fn match_command(
    config_path: Option<&Path>,
    url: &str,
    primary: Option<String>,
    host_version: Option<String>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let primary_url = primary.unwrap_or_else(|| config.primary_url.clone());
    debug!("Matching {} against primary {}", url, primary_url);

    let host = Rc::new(PreviewHost::new(primary_url, host_version));
    let context = SessionContext::from_config(&config, host.clone())
        .context("Failed to set up loader")?;

    let session = match Session::open(
        SessionKey::new("uc-loader-cli"),
        DocumentContext::new(1, url),
        context.clone(),
    ) {
        Ok(session) => session,
        Err(failure) => {
            println!("🚫 Loader inactive for {url}: {failure}");
            return Ok(());
        }
    };
    context.queue.run_until_idle();

    // Report what the session actually handed to the host
    print_injection(url, &host.executed.borrow(), &host.overlays.borrow());
    if let Some(registry) = session.registry() {
        print_warnings(registry.warnings());
    }

    Ok(())
}
