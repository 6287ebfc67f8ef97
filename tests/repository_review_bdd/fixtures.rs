//! Listing payloads served by the mock GitHub API.

use serde_json::{Value, json};
use wiremock::ResponseTemplate;

const LISTING_PATH: &str = "/user/repos";

pub(crate) fn repository_json(full_name: &str, fork: bool, archived: bool) -> Value {
    json!({
        "id": 1,
        "name": full_name.rsplit('/').next().unwrap_or(full_name),
        "full_name": full_name,
        "fork": fork,
        "archived": archived,
        "pushed_at": "2024-03-01T12:00:00Z"
    })
}

/// Builds the response for `page` of `pages`, linking to the next page.
pub(crate) fn linked_page_response(server_uri: &str, page: u32, pages: u32) -> ResponseTemplate {
    let body = json!([repository_json(&format!("alice/page-{page}"), false, false)]);
    let mut response = ResponseTemplate::new(200).set_body_json(body);

    if page < pages {
        let link = format!(
            "<{server_uri}{LISTING_PATH}?sort=pushed&visibility=public&affiliation=owner&per_page=10&page={next}>; rel=\"next\", \
             <{server_uri}{LISTING_PATH}?sort=pushed&visibility=public&affiliation=owner&per_page=10&page={pages}>; rel=\"last\"",
            next = page + 1,
        );
        response = response.insert_header("Link", link.as_str());
    }

    response
}
