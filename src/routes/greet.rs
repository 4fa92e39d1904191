#![forbid(unsafe_code)]

use poem::error::InternalServerError;
use poem::web::{Form, Html};
use poem::{handler, Request};
use serde::Deserialize;
use tera::Context;

use crate::utils::greet_utils::{self, RequestDebug};
use crate::utils::templates::render_template;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const GREET_TEMPLATE: &str = "greet.html";

// ***************************************************************************
//                          Request/Response Definitions
// ***************************************************************************
#[derive(Debug, Deserialize)]
pub struct ReqGreet {
    pub user_name: String,
}

// Implement the debug record trait for logging.
impl RequestDebug for ReqGreet {
    type Req = ReqGreet;
    fn get_request_info(&self) -> String {
        let mut s = String::with_capacity(255);
        s.push_str("  Request body:");
        s.push_str("\n    user_name: ");
        s.push_str(&self.user_name);
        s
    }
}

// ***************************************************************************
//                                 Handler
// ***************************************************************************
// ---------------------------------------------------------------------------
// post_greet:
// ---------------------------------------------------------------------------
/** Greet the user by the name submitted through the index page's form.
 *
 * The value is rendered exactly as submitted, after the templating layer's
 * HTML escaping.  An empty name renders a greeting with an empty string; a
 * body without the user_name field is rejected as a client error by form
 * extraction before this handler runs.
 */
#[handler]
pub async fn post_greet(http_req: &Request, Form(req): Form<ReqGreet>) -> Result<Html<String>, poem::Error> {
    // Conditional logging depending on log level.
    greet_utils::debug_request(http_req, &req);

    // Hand the submitted name to the greet template.
    let mut context = Context::new();
    context.insert("user_name", &req.user_name);
    render_template(GREET_TEMPLATE, &context)
        .map_err(InternalServerError)
        .map(Html)
}
