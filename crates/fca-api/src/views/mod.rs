//! HTML pages rendered with handlebars. Templates are compiled into the binary.

use axum::response::Html;
use handlebars::{Handlebars, TemplateError};
use serde::Serialize;

use crate::error::ApiError;

const PARTIALS: [(&str, &str); 2] = [
    ("layout", include_str!("../../templates/layout.hbs")),
    ("table", include_str!("../../templates/table.hbs")),
];

const PAGES: [(&str, &str); 7] = [
    ("home", include_str!("../../templates/home.hbs")),
    ("campaigns", include_str!("../../templates/campaigns.hbs")),
    ("campaign_form", include_str!("../../templates/campaign_form.hbs")),
    ("lookups", include_str!("../../templates/lookups.hbs")),
    ("lookup_form", include_str!("../../templates/lookup_form.hbs")),
    ("logs", include_str!("../../templates/logs.hbs")),
    ("import", include_str!("../../templates/import.hbs")),
];

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry.register_partial(name, source)?;
        }
        for (name, source) in PAGES {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, page: &str, data: &T) -> Result<Html<String>, ApiError> {
        Ok(Html(self.registry.render(page, data)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_pages_compile() {
        assert!(Views::new().is_ok());
    }

    #[test]
    fn test_import_page_lists_row_errors() {
        let views = Views::new().unwrap();
        let page = views
            .render(
                "import",
                &json!({
                    "title": "Import Campaigns",
                    "action": "/campaigns/import",
                    "template_url": "/campaigns/template",
                    "summary": "Imported: 2, Errors: 1",
                    "messages": ["Row 4: CAMPAIGNNAME is required"],
                }),
            )
            .unwrap();

        assert!(page.0.contains("Imported: 2, Errors: 1"));
        assert!(page.0.contains("Row 4: CAMPAIGNNAME is required"));
        assert!(page.0.contains("href=\"/campaigns/template\""));
    }
}
