use crate::config::AppConfig;
use crate::model::ModelHandle;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod charts;
mod clustering;
mod config;
mod dataset;
mod domain;
mod errors;
mod model;
mod pages;
mod responses;
mod router;
mod state;
mod templates;
mod views;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "configuration invalid");
            std::process::exit(1);
        }
    };

    // The listings are read exactly once; a bad file aborts startup.
    let collection = match dataset::load(&cfg.data_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, path = %cfg.data_path.display(), "failed to load listings");
            std::process::exit(1);
        }
    };

    // The model is only read when someone asks for a prediction.
    let state = AppState {
        collection,
        model: ModelHandle::new(&cfg.model_path),
    };

    tracing::info!(addr = %cfg.addr, "dashboard listening");

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::debug!(error = %err, "request failed");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
