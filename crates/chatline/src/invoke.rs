use std::io::Write;

use anyhow::Context as _;

use crate::ClientConfig;

/// Send `prompt` once to the endpoint described by `config` and write the
/// reply text followed by a newline to `out`.
///
/// Every failure is returned unchanged in kind (wrapped with the endpoint for
/// context); nothing is written to `out` unless the call succeeded.
pub async fn invoke<W: Write>(
    config: &ClientConfig,
    prompt: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let client = config.to_client()?;

    tracing::debug!(
        base_url = config.base_url(),
        model = config.model(),
        "invoking chat model"
    );

    let reply = client.invoke(prompt).await.with_context(|| {
        format!(
            "chat completion against {} (model `{}`) failed",
            config.base_url(),
            config.model()
        )
    })?;

    writeln!(out, "{}", reply.content).context("writing reply")?;
    out.flush().context("writing reply")?;
    Ok(())
}
