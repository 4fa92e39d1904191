#![forbid(unsafe_code)]

use poem::{get, post, Route};

// Modules
pub mod routes;
pub mod utils;

// ---------------------------------------------------------------------------
// build_app:
// ---------------------------------------------------------------------------
/** Assemble the application's route table.  The server binary and the
 * integration tests both run the endpoint this function returns.
 */
pub fn build_app() -> Route {
    Route::new()
        .at("/", get(routes::index::get_index))
        .at("/greet", post(routes::greet::post_greet))
}
