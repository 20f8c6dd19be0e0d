use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use dealscope_app::{payload::AnalysisPayload, shell, App};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Dealscope UI server contains the axum routes required to render the analysis page and serve
/// the wasm bundle cargo-leptos builds into `site_root/site_pkg_dir`.
pub(crate) fn create_leptos_app(leptos_options: LeptosOptions, payload: AnalysisPayload) -> Router {
    let site_root = leptos_options.site_root.to_string();
    let pkg_dir = leptos_options.site_pkg_dir.to_string();
    // The filesystem path of the generated JS/WASM bundle from cargo-leptos
    let bundle_filepath = format!("./{site_root}/{pkg_dir}");
    tracing::info!("Serving pkg dir: {bundle_filepath}");
    let pkg_service = ServeDir::new(&bundle_filepath);

    let analysis = payload.analysis.clone();
    let routes = generate_route_list(move || {
        let analysis = analysis.clone();
        view! { <App analysis /> }
    });

    let app_shell = {
        let leptos_options = leptos_options.clone();
        move || shell(leptos_options.clone(), payload.clone())
    };
    let not_found = leptos_axum::render_app_to_stream(app_shell.clone());

    Router::new()
        .leptos_routes(&leptos_options, routes, app_shell)
        .nest_service(&format!("/{pkg_dir}"), pkg_service)
        .fallback(move |req: Request<Body>| fallback(not_found.clone(), req))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

/// Unknown paths still render the app so its router can show the not found page.
async fn fallback<H, F>(render: H, req: Request<Body>) -> Response
where
    H: Fn(Request<Body>) -> F,
    F: std::future::Future,
    F::Output: IntoResponse,
{
    let mut response = render(req).await.into_response();
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

#[cfg(test)]
mod test {
    use dealscope_api_types::AnalysisResponse;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let analysis = AnalysisResponse {
            query: "usb-c dock".to_string(),
            country: "US".to_string(),
            total_results: 4,
            relevant_results: 0,
            summary: "Nothing worth buying.".to_string(),
            search_engine_used: "Google".to_string(),
            deals: vec![],
        };
        let payload = AnalysisPayload::new(analysis).unwrap();
        let options = LeptosOptions::builder().output_name("dealscope").build();
        create_leptos_app(options, payload)
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_page() {
        let (status, body) = get("/no/such/page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("There is no analysis at this address."));
        assert!(body.contains("href=\"/\""));
    }

    #[tokio::test]
    async fn index_renders_the_analysis() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No relevant deals found"));
        assert!(body.contains("id=\"analysis-data\""));
    }
}
