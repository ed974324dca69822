//! HTML rendering of a [`GameView`] through the embedded page template.

use minijinja::{context, Environment};
use once_cell::sync::OnceCell;

use crate::game::GameView;

const PAGE: &str = "playing_field.html";

static TEMPLATES: OnceCell<Environment<'static>> = OnceCell::new();

fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    // `.html` name turns on HTML auto-escaping
    env.add_template(PAGE, include_str!("templates/playing_field.html"))?;
    Ok(env)
}

/// Full page: board, direction choice, controls and history.
pub fn page(view: &GameView, error: Option<&str>) -> Result<String, minijinja::Error> {
    let env = TEMPLATES.get_or_try_init(environment)?;
    env.get_template(PAGE)?.render(context! { view => view, error => error })
}
