use axum::{extract::State, response::Html, routing::get, Form, Router};
use tokio::{net::TcpListener, signal};

use crate::{encoder::FormSubmission, render::render_index, PredictionService, Result};

/// Builds the router: `GET /` shows the empty form, `POST /` shows it with a decision.
pub fn router(service: PredictionService) -> Router {
    Router::new()
        .route("/", get(index).post(predict))
        .with_state(service)
}

/// Serves `router(service)` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, service: PredictionService) -> std::io::Result<()> {
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => log::info!("received SIGINT, shutting down"),
        Err(e) => {
            log::warn!("cannot listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
    }
}

async fn index() -> Html<String> {
    Html(render_index(None, &FormSubmission::new()))
}

/// A body that is not a urlencoded form counts as an empty submission.
async fn predict(
    State(service): State<PredictionService>,
    form: Option<Form<FormSubmission>>,
) -> Result<Html<String>> {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let decision = service.predict(&form)?;
    log::info!("prediction served: {decision}");
    Ok(Html(render_index(Some(decision.label()), &form)))
}
