use axum::{http::StatusCode, response::Html};
use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::error;

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();

    let sources: &[(&str, &str)] = &[
        ("base.html", include_str!("../templates/base.html")),
        ("home.html", include_str!("../templates/home.html")),
        ("login.html", include_str!("../templates/login.html")),
        ("admin.html", include_str!("../templates/admin.html")),
        ("blogpost.html", include_str!("../templates/blogpost.html")),
        (
            "prediction.html",
            include_str!("../templates/prediction.html"),
        ),
        (
            "prediction_error.html",
            include_str!("../templates/prediction_error.html"),
        ),
    ];

    for (name, source) in sources {
        env.add_template(name, source)
            .unwrap_or_else(|err| panic!("template {name} failed to load: {err}"));
    }

    env
});

pub fn render(name: &str, ctx: impl Serialize) -> Result<Html<String>, (StatusCode, String)> {
    let template = TEMPLATES
        .get_template(name)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    match template.render(ctx) {
        Ok(body) => Ok(Html(body)),
        Err(err) => {
            error!(template = name, error = %err, "template rendering failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "render_failed".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Prediction {
        name: String,
        age: String,
        gender: String,
        nationality: String,
    }

    #[test]
    fn renders_prediction_fields() {
        let html = render(
            "prediction.html",
            Prediction {
                name: "Alice".into(),
                age: "32".into(),
                gender: "female".into(),
                nationality: "US".into(),
            },
        )
        .unwrap();

        assert!(html.0.contains("Age: 32"));
        assert!(html.0.contains("Gender: female"));
        assert!(html.0.contains("Nationality: US"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        #[derive(Serialize)]
        struct Empty {}
        assert!(render("nope.html", Empty {}).is_err());
    }
}
