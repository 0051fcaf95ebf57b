//! A small JSON API served by the router.
//!
//! Try:
//!   curl -i http://127.0.0.1:8081/health
//!   curl -i http://127.0.0.1:8081/books/2
//!   curl -i http://127.0.0.1:8081/books/abc
//!   curl -i -X POST http://127.0.0.1:8081/books -H 'Content-Type: application/json' -d '{"title":"Dune"}'
//!   curl -i http://127.0.0.1:8081/static/css/site.css
//!   curl -i -X OPTIONS http://127.0.0.1:8081/anything

use microroute_rs::{
    endpoint_fn, fail_with_error_message, fail_with_json_status, succeed_with_json_status, succeed_with_message,
    Endpoint, HttpRequest, Router, RouterConfig, ServerConfig, HttpServer, StatusCode,
};
use serde::{Deserialize, Serialize};
use log::info;

#[derive(Serialize)]
struct Book {
    id: u32,
    title: &'static str,
}

#[derive(Deserialize)]
struct NewBook {
    title: String,
}

static BOOKS: [Book; 3] = [
    Book { id: 1, title: "Snow Crash" },
    Book { id: 2, title: "Anathem" },
    Book { id: 3, title: "Cryptonomicon" },
];

/// The last path segment, which the `{}` pattern left unconstrained.
fn last_segment(req: &HttpRequest) -> &str {
    req.path.rsplit('/').next().unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut router = Router::new(RouterConfig {
        verbose: true,
        ..RouterConfig::default()
    });

    router
        .get("/health", [endpoint_fn(|rw, _req| succeed_with_message("ok", rw))])
        .get("/books", [endpoint_fn(|rw, _req| succeed_with_json_status(&BOOKS, rw))])
        .get("/books/{}", [endpoint_fn(|rw, req| {
            let id = last_segment(req).parse::<u32>().map_err(|e| {
                fail_with_error_message(StatusCode::BAD_REQUEST, "book id must be a number", e)
            })?;
            match BOOKS.iter().find(|book| book.id == id) {
                Some(book) => succeed_with_json_status(book, rw),
                None => Err(fail_with_json_status(
                    StatusCode::NOT_FOUND,
                    &serde_json::json!({ "error": "no such book", "id": id }),
                    format!("book {id} not found"),
                )),
            }
        })])
        .with_post_endpoint(
            Endpoint::new("/books")
                .with_handler(|_rw, req| {
                    if req.is_json() {
                        Ok(())
                    } else {
                        Err(fail_with_error_message(StatusCode::BAD_REQUEST, "expected a JSON body", "wrong content type"))
                    }
                })
                .with_handler(|rw, req| {
                    let book: NewBook = req.json().map_err(|e| {
                        fail_with_error_message(StatusCode::BAD_REQUEST, "invalid book", e)
                    })?;
                    succeed_with_message(&format!("stored '{}'", book.title), rw)
                }),
        )
        .get("/static/{*}", [endpoint_fn(|rw, req| {
            succeed_with_message(&format!("would serve file {}", req.path), rw)
        })]);

    let config = ServerConfig {
        addr: "127.0.0.1:8081".parse()?,
        ..ServerConfig::default()
    };
    info!("Starting server on http://{}", config.addr);

    HttpServer::new(config, router).start().await?;

    Ok(())
}
