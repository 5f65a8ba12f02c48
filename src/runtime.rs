//! Shared Runtime
//!
//! The extraction engine is synchronous; only the fetch side needs a runtime.
//! The CLI drives async crawls through this single lazily-built runtime.

use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};

static RUNTIME: OnceCell<Runtime> = OnceCell::new();

fn runtime() -> std::io::Result<&'static Runtime> {
    RUNTIME.get_or_try_init(|| Builder::new_multi_thread().enable_all().build())
}

/// Run a future to completion on the shared runtime.
pub fn block_on<F>(future: F) -> crate::Result<F::Output>
where
    F: std::future::Future,
{
    Ok(runtime()?.block_on(future))
}
