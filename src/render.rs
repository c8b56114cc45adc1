//! Page templates. Each page is a named template rendered from a serializable context.

use crate::error::AppError;
use minijinja::{AutoEscape, Environment};
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout", include_str!("../templates/layout.html")),
    ("tableList", include_str!("../templates/tableList.html")),
    ("tableData", include_str!("../templates/tableData.html")),
    ("allPets", include_str!("../templates/allPets.html")),
    ("petDetails", include_str!("../templates/petDetails.html")),
    ("reportForm", include_str!("../templates/reportForm.html")),
    ("reportResult", include_str!("../templates/reportResult.html")),
    ("form", include_str!("../templates/form.html")),
    ("supplierForm", include_str!("../templates/supplierForm.html")),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compile all embedded templates. Fails on a syntax error in any of them.
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        // Template names carry no extension, so escaping is switched on for all of them.
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Templates { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, AppError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(context)?)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|(name, _)| *name)
    }
}
