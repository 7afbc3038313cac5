use crate::domain::models::FetchReport;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::time::Duration;

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub fn cache_path(source: &str) -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    let id = hex::encode(hasher.finalize());
    Ok(PathBuf::from(home)
        .join(".cache")
        .join("gss-explorer")
        .join("datasets")
        .join(format!("{}.csv", id)))
}

fn fetch_bytes(source: &str, timeout_ms: u64) -> anyhow::Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()?;
    let resp = client.get(source).send()?.error_for_status()?;
    Ok(resp.bytes()?.to_vec())
}

fn write_cache(source: &str, body: &[u8]) -> anyhow::Result<PathBuf> {
    let cache = cache_path(source)?;
    if let Some(parent) = cache.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&cache, body)?;
    Ok(cache)
}

/// Downloads a remote source into the cache. Local sources are only checked.
/// `offline` reports the existing cached copy without touching the network.
pub fn refresh_dataset(
    source: &str,
    timeout_ms: u64,
    offline: bool,
) -> anyhow::Result<FetchReport> {
    if !is_remote(source) {
        let bytes = std::fs::metadata(source)
            .map_err(|e| anyhow::anyhow!("cannot read dataset {}: {}", source, e))?
            .len() as usize;
        return Ok(FetchReport {
            source: source.to_string(),
            status: "local".to_string(),
            cache_path: None,
            bytes,
        });
    }
    if offline {
        let cache = cache_path(source)?;
        let bytes = std::fs::metadata(&cache)
            .map_err(|_| {
                anyhow::anyhow!(
                    "offline and no cached copy of {} (run `gss-explorer fetch` while online)",
                    source
                )
            })?
            .len() as usize;
        return Ok(FetchReport {
            source: source.to_string(),
            status: "cached".to_string(),
            cache_path: Some(cache.to_string_lossy().to_string()),
            bytes,
        });
    }
    let body = fetch_bytes(source, timeout_ms)?;
    let cache = write_cache(source, &body)?;
    tracing::info!(source, bytes = body.len(), cache = %cache.display(), "dataset cached");
    Ok(FetchReport {
        source: source.to_string(),
        status: "fetched".to_string(),
        cache_path: Some(cache.to_string_lossy().to_string()),
        bytes: body.len(),
    })
}

/// Raw bytes of the dataset. Remote sources fall back to the cache when the
/// fetch fails; `offline` reads the cache only.
pub fn read_source(source: &str, timeout_ms: u64, offline: bool) -> anyhow::Result<Vec<u8>> {
    if !is_remote(source) {
        return std::fs::read(source)
            .map_err(|e| anyhow::anyhow!("cannot read dataset {}: {}", source, e));
    }

    let cache = cache_path(source)?;
    if offline {
        if !cache.exists() {
            anyhow::bail!(
                "no cached copy of {} (run `gss-explorer fetch` while online)",
                source
            );
        }
        tracing::debug!(cache = %cache.display(), "offline: using cached dataset");
        return Ok(std::fs::read(cache)?);
    }

    match fetch_bytes(source, timeout_ms) {
        Ok(body) => {
            write_cache(source, &body)?;
            Ok(body)
        }
        Err(err) if cache.exists() => {
            tracing::warn!(source, error = %err, "fetch failed, using cached dataset");
            Ok(std::fs::read(cache)?)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_http_sources_are_remote() {
        assert!(is_remote("https://example.org/gss.csv"));
        assert!(is_remote("http://example.org/gss.csv"));
        assert!(!is_remote("data/gss.csv"));
        assert!(!is_remote("/tmp/https.csv"));
    }

    #[test]
    fn local_sources_are_read_directly() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gss.csv");
        std::fs::write(&path, b"id\n1\n").unwrap();
        let source = path.to_str().unwrap();

        assert_eq!(read_source(source, 10, true).unwrap(), b"id\n1\n");
        let report = refresh_dataset(source, 10, false).unwrap();
        assert_eq!(report.status, "local");
        assert_eq!(report.bytes, 5);
        assert!(report.cache_path.is_none());
    }

    #[test]
    fn missing_local_source_is_an_error() {
        let err = read_source("/definitely/not/here.csv", 10, false).unwrap_err();
        assert!(err.to_string().contains("cannot read dataset"));
    }
}
