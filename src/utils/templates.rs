#![forbid(unsafe_code)]

use lazy_static::lazy_static;
use log::info;
use tera::{Context, Tera};

use crate::utils::errors::Errors;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// The templates ship with the crate; resolving them against the manifest
// directory gives the server binary and the test harness the same registry.
const TEMPLATES_GLOB: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html");

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Parse every template exactly once.  Tera's default HTML auto-escaping
// stays in effect for the .html template names registered here.
lazy_static! {
    pub static ref TEMPLATES: Tera = init_templates();
}

// ***************************************************************************
//                             Public Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// render_template:
// ---------------------------------------------------------------------------
/** Render the named template with the given context.  Callers map errors
 * onto their own HTTP responses.
 */
pub fn render_template(name: &str, context: &Context) -> Result<String, tera::Error> {
    TEMPLATES.render(name, context)
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_templates:
// ---------------------------------------------------------------------------
/** Register all HTML templates.  A server without its view templates cannot
 * do anything useful, so registration failure aborts the process.
 */
fn init_templates() -> Tera {
    let tera = match Tera::new(TEMPLATES_GLOB) {
        Ok(t) => t,
        Err(e) => {
            let s = format!("{}", Errors::TemplateRegistration(TEMPLATES_GLOB.to_string(), e.to_string()));
            panic!("{}", s);
        },
    };
    info!("Registered templates: {}.", tera.get_template_names().collect::<Vec<_>>().join(", "));
    tera
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use tera::Context;

    use super::render_template;

    #[test]
    fn index_renders_welcome() {
        let html = render_template("index.html", &Context::new()).expect("index should render");
        assert!(html.contains("Welcome!"));
        assert!(html.contains("user_name"));
    }

    #[test]
    fn greet_renders_submitted_name() {
        let mut context = Context::new();
        context.insert("user_name", "Avi");
        let html = render_template("greet.html", &context).expect("greet should render");
        assert!(html.contains("Hi Avi, nice to meet you!"));
    }
}
