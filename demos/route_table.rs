//! Builds a router without a server and shows how requests resolve.

use microroute_rs::{
    endpoint_fn, fail_with_error_message, handler_fn, succeed_with_message, HttpRequest, HttpVersion, Method,
    Router, RouterConfig, StatusCode,
};
use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut router = Router::new(RouterConfig::default());
    router
        .get("/users", [endpoint_fn(|rw, _req| succeed_with_message("all users", rw))])
        .get("/users/me", [endpoint_fn(|rw, _req| succeed_with_message("current user", rw))])
        .get("/users/{}", [endpoint_fn(|rw, req| succeed_with_message(&format!("user at {}", req.path), rw))])
        .get("/users/{}/posts/{}", [endpoint_fn(|rw, _req| succeed_with_message("one post", rw))])
        .get("/assets/{*}", [endpoint_fn(|rw, req| succeed_with_message(&format!("asset {}", req.path), rw))])
        .delete("/users/{}", [
            endpoint_fn(|_rw, req| {
                if req.has_header("Authorization") {
                    Ok(())
                } else {
                    Err(fail_with_error_message(StatusCode::FORBIDDEN, "admins only", "DELETE without credentials"))
                }
            }),
            endpoint_fn(|rw, _req| succeed_with_message("deleted", rw)),
        ])
        .get_fn("/ping", [
            handler_fn(|rw, _req| rw.write(b"pong")),
            handler_fn(|rw, _req| rw.write(b"!")),
        ]);

    info!("Route table:");
    for name in router.handler_names() {
        info!("  {name}");
    }

    let requests = [
        (Method::GET, "/users"),
        (Method::GET, "/users/me"),
        (Method::GET, "/USERS/42"),
        (Method::GET, "/users/42/posts/7"),
        (Method::GET, "/users/42/likes"),
        (Method::GET, "/assets/css/site.css?v=2"),
        (Method::DELETE, "/users/42"),
        (Method::POST, "/users"),
        (Method::GET, "/ping"),
        (Method::OPTIONS, "/users"),
    ];

    for (method, target) in requests {
        let request = HttpRequest::new(method, target, HttpVersion::Http11, Default::default());
        let route = router
            .resolve(request.method, &request.path)
            .map(|route| format!("{} route '{}'", route.kind, route.pattern))
            .unwrap_or_else(|| "no route".to_string());
        let response = router.handle(&request);
        info!(
            "[{method}] {target} -> {status} via {route}: {body:?}",
            status = response.status,
            body = String::from_utf8_lossy(&response.body),
        );
    }
}
