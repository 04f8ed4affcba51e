use crate::api_model::CreateItem;
use crate::command_line_interface::CliOptions;
use crate::error::Error;
use crate::internal_api;
use log::info;
use log::warn;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::sync::Arc;
use warp::filters::BoxedFilter;
use warp::http::header::HeaderMap;
use warp::http::header::HeaderValue;
use warp::Filter;
use warp::Reply;

/// Start web framework with specified APIs.
pub async fn run_server(cli_options: CliOptions, sqlite_pool: Pool<SqliteConnectionManager>) {
    let package_name = env!("CARGO_PKG_NAME").to_uppercase();
    info!("Starting {} HTTP server", package_name);

    let mut headers = HeaderMap::new();
    warn!("Remove Access-Control-Allow-Origin before releasing to PROD!");
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    let headers = warp::reply::with::headers(headers);

    let api = api_routes(sqlite_pool).with(headers);

    warp::serve(api).run(([0, 0, 0, 0], cli_options.port)).await;
}

/// All API routes, separated from `run_server` so tests can drive them
/// in-process via `warp::test` without binding a socket.
pub fn api_routes(sqlite_pool: Pool<SqliteConnectionManager>) -> BoxedFilter<(Box<dyn Reply>,)> {
    // Get version of the cargo project.
    let version = warp::path("version")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| {
            let version: Box<dyn Reply> = Box::new(internal_api::get_project_version());
            version
        });

    let pool_arc = Arc::new(sqlite_pool);

    // POST API for a single item.
    // Input: json of the item to be created within the body.
    // Return the created item, including its generated id.
    // Return 400 with a fixed error payload if the date is malformed.
    let pool = pool_arc.clone();
    let create_item = warp::path("add")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .map(move |body: CreateItem| {
            let result = pool
                .get()
                .map_err(Error::from)
                .and_then(|conn| internal_api::create_item(&conn, body));
            let boxed: Box<dyn Reply> = match result {
                Ok(result) => Box::new(warp::reply::json(&result)),
                Err(err) => Box::new(warp::reply::with_status(
                    warp::reply::json(&serde_json::json!({ "error": err.msg })),
                    err.code,
                )),
            };
            boxed
        });

    // GET API for all items.
    // Return an array of all items.
    // Return empty array if no items exist.
    let pool = pool_arc.clone();
    let get_all_items = warp::path("items")
        .and(warp::path::end())
        .and(warp::get())
        .map(move || {
            let result = pool
                .get()
                .map_err(Error::from)
                .and_then(|conn| internal_api::get_all_items(&conn));
            let boxed: Box<dyn Reply> = match result {
                Ok(result) => Box::new(warp::reply::json(&result)),
                Err(err) => Box::new(warp::reply::with_status(
                    warp::reply::json(&serde_json::json!({ "error": err.msg })),
                    err.code,
                )),
            };
            boxed
        });

    version
        .or(create_item)
        .unify()
        .or(get_all_items)
        .unify()
        .boxed()
}
