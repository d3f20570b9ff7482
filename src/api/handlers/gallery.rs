//! Page handlers: render, form update and fetch trigger

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use tracing::{debug, info};

use crate::api::server::GalleryServer;
use crate::api::types::FormInput;
use crate::gallery::{render_page, trigger_shared};

/// GET /
pub async fn index(State(state): State<Arc<GalleryServer>>) -> Html<String> {
    let mut gallery = state.gallery.lock().await;
    Html(render_page(&mut gallery))
}

/// POST /form
///
/// Stores the submitted fields without fetching.
pub async fn update_form(
    State(state): State<Arc<GalleryServer>>,
    Form(input): Form<FormInput>,
) -> Redirect {
    debug!("Form update: {:?}", input);
    input.apply(&mut *state.gallery.lock().await);
    Redirect::to("/")
}

/// POST /fetch
///
/// Stores the submitted fields, then fetches for whichever mode is active
/// using the values just stored.
pub async fn fetch(
    State(state): State<Arc<GalleryServer>>,
    Form(input): Form<FormInput>,
) -> Redirect {
    input.apply(&mut *state.gallery.lock().await);

    match trigger_shared(&state.gallery, Arc::clone(&state.source)).await {
        Some(target) => info!("Fetch finished: {:?}", target),
        None => info!("Fetch skipped, one is already in flight"),
    }
    Redirect::to("/")
}
