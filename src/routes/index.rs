#![forbid(unsafe_code)]

use poem::error::InternalServerError;
use poem::handler;
use poem::web::Html;
use tera::Context;

use crate::utils::templates::render_template;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const INDEX_TEMPLATE: &str = "index.html";

// ***************************************************************************
//                                 Handler
// ***************************************************************************
// ---------------------------------------------------------------------------
// get_index:
// ---------------------------------------------------------------------------
/** Serve the welcome page containing the greeting form.  The page is static,
 * so the template is rendered with an empty context and repeated requests
 * produce identical markup.
 */
#[handler]
pub fn get_index() -> Result<Html<String>, poem::Error> {
    render_template(INDEX_TEMPLATE, &Context::new())
        .map_err(InternalServerError)
        .map(Html)
}
