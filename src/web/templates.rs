//! Embedded minijinja templates.

use axum::response::Html;
use minijinja::{Environment, Error, ErrorKind, Value, context};
use rust_embed::RustEmbed;
use std::sync::LazyLock;
use tower_sessions::Session;

use super::{WebError, flash};
use crate::datetime::{DateFormatError, DateStyle, format_datetime};

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

static ENV: LazyLock<Environment<'static>> = LazyLock::new(build_environment);

fn build_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(|name| {
        Ok(Templates::get(name).map(|file| String::from_utf8_lossy(&file.data).into_owned()))
    });
    env.add_filter("datetime", datetime_filter);
    env
}

/// `{{ show.start_time|datetime('full') }}`
fn datetime_filter(value: String, style: Option<String>) -> Result<String, Error> {
    let invalid = |e: DateFormatError| Error::new(ErrorKind::InvalidOperation, e.to_string());

    let style = match style.as_deref() {
        None => DateStyle::default(),
        Some(s) => s.parse::<DateStyle>().map_err(invalid)?,
    };

    format_datetime(&value, style).map_err(invalid)
}

pub fn render(name: &str, ctx: Value) -> Result<Html<String>, Error> {
    let template = ENV.get_template(name)?;
    template.render(ctx).map(Html)
}

/// Renders a full page, handing it any flash messages pending in the session.
pub async fn page(session: &Session, name: &str, ctx: Value) -> Result<Html<String>, WebError> {
    let messages = flash::take(session).await?;
    Ok(render(name, context! { messages => messages, ..ctx })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_filter_styles() {
        let out = ENV
            .render_str(
                "{{ t|datetime('full') }} / {{ t|datetime }}",
                context! { t => "2035-05-21T21:30:00" },
            )
            .unwrap();
        assert_eq!(out, "Monday May, 21, 2035 at 9:30PM / Mon 05, 21, 2035 9:30PM");
    }

    #[test]
    fn datetime_filter_rejects_unknown_style() {
        let result = ENV.render_str(
            "{{ t|datetime('short') }}",
            context! { t => "2035-05-21T21:30:00" },
        );
        assert!(result.is_err());
    }

    #[test]
    fn every_page_template_is_embedded() {
        for name in [
            "layouts/main.html",
            "pages/home.html",
            "pages/venues.html",
            "pages/artists.html",
            "pages/shows.html",
            "pages/search_venues.html",
            "pages/search_artists.html",
            "pages/show_venue.html",
            "pages/show_artist.html",
            "forms/new_venue.html",
            "forms/new_artist.html",
            "forms/new_show.html",
            "forms/edit_venue.html",
            "forms/edit_artist.html",
            "errors/404.html",
            "errors/500.html",
        ] {
            assert!(ENV.get_template(name).is_ok(), "missing template {name}");
        }
    }

    #[test]
    fn error_page_renders() {
        let html = render("errors/404.html", context! { status => 404 }).unwrap();
        assert!(html.0.contains("Not Found"));
    }
}
