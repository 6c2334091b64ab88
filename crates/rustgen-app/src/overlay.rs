//! Help overlay state and the `curl` recipes it lists

/// Visibility of the help overlay. Only user actions change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpOverlay {
    is_open: bool,
}

impl HelpOverlay {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

/// One command line shown in the help overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlRecipe {
    pub description: &'static str,
    pub command: String,
}

/// Recipes for calling the service without this client
pub fn curl_recipes(endpoint: &str) -> Vec<CurlRecipe> {
    let host = endpoint.trim_end_matches('/');
    vec![
        CurlRecipe {
            description: "use curl to generate schema",
            command: format!("curl -XPOST -d '{{\"hello\":\"world\"}}' '{}/schema'", host),
        },
        CurlRecipe {
            description: "generate schema from JSON file, save to disk",
            command: format!("curl -XPOST -d @input.json '{}/schema' -o meta.rs", host),
        },
        CurlRecipe {
            description: "generate on-the-fly from HTTP API, with testcases",
            command: format!(
                "curl -sf 'https://api.github.com/meta' \\\n  | curl -XPOST -d @- '{}/schema?tests=true'",
                host
            ),
        },
    ]
}
