//! Tests for the request parser.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use serde::Deserialize;

    use crate::parser::{HttpRequest, Method, HttpVersion, Error, parse_request};

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.path, "/index.html");
        assert_eq!(result.query, None);
        assert_eq!(result.version, HttpVersion::Http11);
        assert_eq!(result.headers.get("Host").unwrap(), "example.com");
        assert!(result.body.is_empty());
    }

    #[test]
    fn test_case_insensitive_headers() {
        let request = b"GET /index.html HTTP/1.1\r\nhost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert!(result.has_header("host"));
        assert!(result.has_header("HOST"));
        assert_eq!(result.get_header("Host").unwrap(), "example.com");
    }

    #[test]
    fn test_missing_host_header() {
        let request = b"GET /index.html HTTP/1.1\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::MissingHeader(ref h)) if h == "Host"));
    }

    #[test]
    fn test_http10_without_host() {
        let request = b"GET /index.html HTTP/1.0\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.version, HttpVersion::Http10);
        assert!(result.headers.is_empty());
    }

    #[test]
    fn test_invalid_method() {
        let request = b"BR(EW /pot HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "BR(EW"));
    }

    #[test]
    fn test_extension_methods_are_accepted() {
        for (raw, expected) in [("TRACE", Method::TRACE), ("CONNECT", Method::CONNECT), ("BREW", Method::Other), ("get", Method::Other)] {
            let request = format!("{raw} /pot HTTP/1.1\r\nHost: example.com\r\n\r\n");
            let result = parse_request(request.as_bytes()).unwrap();
            assert_eq!(result.method, expected);
            assert!(!result.method.is_routable());
        }
    }

    #[test]
    fn test_invalid_http_version() {
        let request = b"GET /index.html HTTP/9.9\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidVersion(ref v)) if v == "HTTP/9.9"));
    }

    #[test]
    fn test_invalid_target() {
        let request = b"GET index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidPath)));
    }

    #[test]
    fn test_invalid_header_format() {
        let request = b"GET /index.html HTTP/1.1\r\nInvalidHeader\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::InvalidHeaderFormat)));
    }

    #[test]
    fn test_empty_request() {
        assert!(matches!(parse_request(b""), Err(Error::EmptyRequest)));
    }

    #[test]
    fn test_incomplete_request_line() {
        let result = parse_request(b"GET\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));

        let result = parse_request(b"GET  HTTP/1.1\r\nHost: example.com\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_malformed_utf8_in_headers() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\nX-Test: \xFF\xFF\r\n\r\n";
        let result = parse_request(request);
        assert!(matches!(result, Err(Error::MalformedRequestLine(ref s)) if s == "Invalid UTF-8"));
    }

    #[test]
    fn test_all_methods() {
        for method in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH"] {
            let raw = format!("{method} /x HTTP/1.1\r\nHost: example.com\r\n\r\n");
            let result = parse_request(raw.as_bytes()).unwrap();
            assert_eq!(result.method.as_str(), method);
            assert_eq!(result.method.to_string(), method);
        }
    }

    #[test]
    fn test_routable_methods() {
        assert!(Method::GET.is_routable());
        assert!(Method::POST.is_routable());
        assert!(Method::PATCH.is_routable());
        assert!(Method::DELETE.is_routable());
        assert!(!Method::OPTIONS.is_routable());
        assert!(!Method::PUT.is_routable());
        assert!(!Method::HEAD.is_routable());
    }

    #[test]
    fn test_headers_are_trimmed_and_split_on_first_colon() {
        let request = b"GET /index.html HTTP/1.1\r\nHost:  example.com  \r\nX-Test: value:with:colons\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.headers.get("Host").unwrap(), "example.com");
        assert_eq!(result.headers.get("X-Test").unwrap(), "value:with:colons");
    }

    #[test]
    fn test_mixed_line_endings() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\nUser-Agent: test\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.headers.get("User-Agent").unwrap(), "test");
    }

    #[test]
    fn test_query_string_is_split_from_path() {
        let request = b"GET /search?q=test&flag&empty= HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.path, "/search");
        assert_eq!(result.query.as_deref(), Some("q=test&flag&empty="));
        assert_eq!(result.get_query_param("q").unwrap(), "test");
        assert_eq!(result.get_query_param("flag").unwrap(), "");
        assert!(result.has_query_param("empty"));
        assert!(!result.has_query_param("missing"));
    }

    #[test]
    fn test_body_after_headers() {
        let request = b"POST /api/users?role=admin HTTP/1.1\r\n\
            Host: example.com\r\n\
            Content-Type: application/json\r\n\
            Content-Length: 14\r\n\
            \r\n\
            {\"name\":\"Ada\"}";

        let result = parse_request(request).unwrap();
        assert_eq!(result.method, Method::POST);
        assert_eq!(result.path, "/api/users");
        assert_eq!(result.get_query_param("role").unwrap(), "admin");
        assert_eq!(result.body, b"{\"name\":\"Ada\"}".to_vec());
    }

    #[test]
    fn test_body_is_truncated_to_content_length() {
        let request = b"POST /upload HTTP/1.1\r\nHost: example.com\r\nContent-Length: 3\r\n\r\nabcdef";
        let result = parse_request(request).unwrap();
        assert_eq!(result.body, b"abc".to_vec());
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Widget {
        name: String,
        count: u32,
    }

    #[test]
    fn test_json_body() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let body = br#"{"name":"bolt","count":3}"#.to_vec();
        let request = HttpRequest::with_body(Method::POST, "/widgets", HttpVersion::Http11, headers.clone(), body.clone());
        let widget: Widget = request.json().unwrap();
        assert_eq!(widget, Widget { name: "bolt".to_string(), count: 3 });

        let mut plain = headers.clone();
        plain.insert("Content-Type".to_string(), "text/plain".to_string());
        let request = HttpRequest::with_body(Method::POST, "/widgets", HttpVersion::Http11, plain, body);
        assert!(matches!(request.json::<Widget>(), Err(Error::MissingHeader(_))));

        let request = HttpRequest::with_body(Method::POST, "/widgets", HttpVersion::Http11, headers, b"{\"name\":".to_vec());
        assert!(matches!(request.json::<Widget>(), Err(Error::JsonError(_))));
    }
}
