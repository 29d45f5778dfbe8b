use bootstrap::App;
use snafu::ResultExt;
use tracing::{error, info};

mod config;
mod dom;
mod error;
mod views;

use dom::{BrowserDocument, LeptosRoot};
use error::BootstrapSnafu;
use views::Home;

// Re-export error types for convenience
pub use error::{Error, Result};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(e) = run() {
        error!("Application error: {e}");
        wasm_bindgen::throw_str(&format!("Application error: {e}"));
    }
}

fn run() -> Result<()> {
    let config = config::load()?;
    let document = BrowserDocument::current()?;

    let mounted = App::new(LeptosRoot(Home), config.target)
        .mount(&document)
        .context(BootstrapSnafu)?;
    info!("mounted at {}", mounted.target());

    // Lives until the page goes away.
    mounted.into_handle().forget();
    Ok(())
}
