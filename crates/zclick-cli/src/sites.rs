use zclick_core::AppConfig;

/// Lists the verified properties the configured token has access to.
///
/// # Errors
///
/// Returns an error if the token is missing or the API call fails.
pub(crate) async fn run_sites(config: &AppConfig) -> anyhow::Result<()> {
    let client = crate::build_client(config)?;
    let sites = client.list_sites().await?;

    if sites.is_empty() {
        println!("no verified properties for this token");
        return Ok(());
    }

    for site in sites {
        println!("{}\t{}", site.site_url, site.permission_level);
    }
    Ok(())
}
