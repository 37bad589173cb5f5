//! Debug dump helpers for development / troubleshooting.
//! Enabled by the `debug-dumps` feature together with `YF_DEBUG=1`.

use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;

use crate::scrape::utils::{iter_json_scripts, truncate};

pub(crate) fn enabled() -> bool {
    std::env::var("YF_DEBUG").ok().as_deref() == Some("1")
}

fn dump_path(endpoint: &str, symbol: &str, ext: &str) -> PathBuf {
    let safe: String = symbol
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    std::env::temp_dir().join(format!("yahoo_fin_rs-{endpoint}-{safe}.{ext}"))
}

pub(crate) fn debug_dump_html(endpoint: &str, symbol: &str, html: &str) -> std::io::Result<()> {
    let path = dump_path(endpoint, symbol, "html");
    std::fs::File::create(&path)?.write_all(html.as_bytes())?;

    let scripts = iter_json_scripts(html);
    eprintln!(
        "YF_DEBUG: wrote {} bytes of HTML to {} (json scripts: {}, has root.App.main: {})",
        html.len(),
        path.display(),
        scripts.len(),
        html.contains(crate::scrape::extract::APP_MAIN_MARKER)
    );
    if let Some((attrs, body)) = scripts.first() {
        eprintln!(
            "YF_DEBUG: first json script attrs=`{}` body=`{}`",
            truncate(attrs, 180),
            truncate(body, 120)
        );
    }
    Ok(())
}

pub(crate) fn debug_dump_extracted_json(
    endpoint: &str,
    symbol: &str,
    value: &Value,
) -> std::io::Result<()> {
    let path = dump_path(endpoint, symbol, "json");
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    std::fs::File::create(&path)?.write_all(pretty.as_bytes())?;
    eprintln!("YF_DEBUG: wrote extracted JSON to {}", path.display());
    Ok(())
}
