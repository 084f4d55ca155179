//! # Explorer Page
//!
//! Static GraphiQL HTML shell served to browsers on `GET` with
//! `Accept: text/html`. The JS client is loaded from a CDN; the only
//! configurable part is the endpoint the embedded client posts back to.

const EXPLORER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>GraphQL Explorer</title>
    <link rel="stylesheet" href="https://unpkg.com/graphiql/graphiql.min.css" />
</head>
<body style="margin: 0;">
    <div id="graphiql" style="height: 100vh;"></div>
    <script crossorigin src="https://unpkg.com/react/umd/react.production.min.js"></script>
    <script crossorigin src="https://unpkg.com/react-dom/umd/react-dom.production.min.js"></script>
    <script crossorigin src="https://unpkg.com/graphiql/graphiql.min.js"></script>
    <script>
        const fetcher = GraphiQL.createFetcher({ url: '__ENDPOINT__' });
        ReactDOM.render(
            React.createElement(GraphiQL, { fetcher }),
            document.getElementById('graphiql'),
        );
    </script>
</body>
</html>"#;

/// Renders the explorer page. Stateless and infallible; the HTML is built
/// once per server and served from memory.
#[derive(Debug, Clone)]
pub struct ExplorerRenderer {
    html: String,
}

impl ExplorerRenderer {
    /// Build the page pointed at `endpoint` (the adapter's own route)
    pub fn new(endpoint: &str) -> Self {
        Self {
            html: EXPLORER_TEMPLATE.replace("__ENDPOINT__", endpoint),
        }
    }

    /// The rendered document
    pub fn render(&self) -> &str {
        &self.html
    }
}
