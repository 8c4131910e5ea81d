//! Tera-backed renderer for the generated site files.
//!
//! The four templates ship inside the binary. A local directory can be
//! layered on top: any file in it replaces the built-in template of the
//! same relative name, and extra files become renderable too.

use std::{error::Error as _, fs, path::Path};

use tera::{Context, Tera};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use quickstart_core::{
    QuickstartError, QuickstartResult,
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateVars,
};

/// Built-in templates as `(name, source)`.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "pelicanconf.py.jinja2",
        include_str!("../../templates/pelicanconf.py.jinja2"),
    ),
    (
        "publishconf.py.jinja2",
        include_str!("../../templates/publishconf.py.jinja2"),
    ),
    ("tasks.py.jinja2", include_str!("../../templates/tasks.py.jinja2")),
    ("Makefile.jinja2", include_str!("../../templates/Makefile.jinja2")),
];

/// Renders templates with Tera.
#[derive(Debug)]
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Renderer with only the built-in templates.
    pub fn new() -> QuickstartResult<Self> {
        let mut tera = Tera::default();
        // Output is Python and Make, never HTML.
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
            .map_err(|e| rendering_failed("<builtin>", &e))?;

        Ok(Self { tera })
    }

    /// Built-in templates overridden by the files under `dir`.
    ///
    /// A missing directory is logged and ignored.
    #[instrument(fields(dir = %dir.as_ref().display()), skip(dir))]
    pub fn with_overrides(dir: impl AsRef<Path>) -> QuickstartResult<Self> {
        let mut renderer = Self::new()?;
        let dir = dir.as_ref();

        if !dir.is_dir() {
            warn!("Template override directory not found, using built-in templates");
            return Ok(renderer);
        }

        let overrides = load_dir(dir)?;
        debug!(count = overrides.len(), "Loaded template overrides");
        renderer
            .tera
            .add_raw_templates(overrides)
            .map_err(|e| rendering_failed(&dir.display().to_string(), &e))?;

        Ok(renderer)
    }

    /// Names of every template this renderer knows, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip(self, vars), fields(vars = vars.len()))]
    fn render(&self, name: &str, vars: &TemplateVars) -> QuickstartResult<String> {
        if !self.tera.get_template_names().any(|n| n == name) {
            return Err(ApplicationError::TemplateNotFound { name: name.into() }.into());
        }

        let context = Context::from_serialize(vars).map_err(|e| rendering_failed(name, &e))?;
        self.tera
            .render(name, &context)
            .map_err(|e| rendering_failed(name, &e))
    }
}

/// Every regular file under `dir`, keyed by its `/`-separated relative path.
fn load_dir(dir: &Path) -> QuickstartResult<Vec<(String, String)>> {
    let mut templates = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| ApplicationError::FilesystemError {
            path: e.path().unwrap_or(dir).to_path_buf(),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(dir) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let source = fs::read_to_string(path).map_err(|e| ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("Failed to read template: {e}"),
        })?;
        debug!(%name, "Template override found");
        templates.push((name, source));
    }

    Ok(templates)
}

/// Tera nests the useful message in the source chain.
fn rendering_failed(name: &str, error: &tera::Error) -> QuickstartError {
    let mut reason = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }

    ApplicationError::RenderingFailed {
        name: name.into(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use quickstart_core::domain::{Defaults, GithubPagesKind, Pagination, Settings};
    use tempfile::TempDir;

    fn settings() -> Settings {
        let mut s = Settings::seeded(&Defaults::default(), PathBuf::from("/site"));
        s.sitename = "Meu Blog".into();
        s.author = "Ana".into();
        s
    }

    fn render(name: &str, vars: &TemplateVars) -> String {
        TeraRenderer::new().unwrap().render(name, vars).unwrap()
    }

    #[test]
    fn builtin_templates_are_registered() {
        let renderer = TeraRenderer::new().unwrap();
        assert_eq!(
            renderer.template_names(),
            vec![
                "Makefile.jinja2",
                "pelicanconf.py.jinja2",
                "publishconf.py.jinja2",
                "tasks.py.jinja2",
            ]
        );
    }

    #[test]
    fn pelicanconf_uses_python_literals() {
        let out = render("pelicanconf.py.jinja2", &TemplateVars::python_literals(&settings()));

        assert!(out.contains("AUTHOR = 'Ana'\n"));
        assert!(out.contains("SITENAME = 'Meu Blog'\n"));
        assert!(out.contains("TIMEZONE = 'America/Fortaleza'\n"));
        assert!(out.contains("DEFAULT_LANG = 'pt'\n"));
        assert!(out.contains("DEFAULT_PAGINATION = 10\n"));
    }

    #[test]
    fn disabled_pagination_renders_false() {
        let mut s = settings();
        s.pagination = Pagination::Disabled;

        let out = render("pelicanconf.py.jinja2", &TemplateVars::python_literals(&s));

        assert!(out.contains("DEFAULT_PAGINATION = False\n"));
    }

    #[test]
    fn quotes_in_names_stay_valid_python() {
        let mut s = settings();
        s.sitename = "Blog d'Ana".into();

        let out = render("pelicanconf.py.jinja2", &TemplateVars::python_literals(&s));

        assert!(out.contains("SITENAME = \"Blog d'Ana\"\n"));
    }

    #[test]
    fn publishconf_uses_raw_siteurl() {
        let mut s = settings();
        s.siteurl = "https://exemplo.com".into();

        let out = render("publishconf.py.jinja2", &TemplateVars::raw(&s));

        assert!(out.contains("SITEURL = \"https://exemplo.com\"\n"));
        assert!(out.contains("CATEGORY_FEED_ATOM = \"feeds/{slug}.atom.xml\""));
    }

    #[test]
    fn makefile_only_lists_enabled_targets() {
        let mut s = settings();
        s.ssh.enabled = true;
        s.github.enabled = true;
        s.github.select(GithubPagesKind::Personal);

        let out = render("Makefile.jinja2", &TemplateVars::raw(&s));

        assert!(out.contains("SSH_HOST=localhost\nSSH_PORT=22\n"));
        assert!(out.contains("GITHUB_PAGES_BRANCH=main\n"));
        assert!(out.contains("\nrsync_upload: publish\n\trsync "));
        assert!(!out.contains("FTP_HOST"));
        assert!(!out.contains("s3_upload"));
        assert!(out.contains(
            ".PHONY: html help clean regenerate serve serve-global devserver devserver-global \
             publish ssh_upload sftp_upload rsync_upload github\n"
        ));
    }

    #[test]
    fn makefile_recipes_keep_tabs() {
        let out = render("Makefile.jinja2", &TemplateVars::raw(&settings()));

        assert!(out.contains("html:\n\t\"$(PELICAN)\""));
        assert!(out.contains("PUBLISHCONF=$(BASEDIR)/publishconf.py\n\nDEBUG ?= 0\n"));
        assert!(out.contains("serve on 0.0.0.0    '\n\t@echo '          "));
    }

    #[test]
    fn tasks_includes_ssh_config_when_enabled() {
        let mut s = settings();
        s.ssh.enabled = true;
        s.ssh.host = "exemplo.com".into();

        let out = render("tasks.py.jinja2", &TemplateVars::raw(&s));

        assert!(out.contains("\"ssh_host\": \"exemplo.com\",\n"));
        assert!(out.contains("def publish(c):"));
        assert!(!out.contains("def cf_upload(c):"));
        assert!(!out.contains("import datetime"));
    }

    #[test]
    fn unknown_template_is_not_found() {
        let err = TeraRenderer::new()
            .unwrap()
            .render("missing.jinja2", &TemplateVars::default())
            .unwrap_err();
        assert!(err.to_string().contains("Template not found"));
    }

    #[test]
    fn local_directory_overrides_builtin() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("publishconf.py.jinja2"), "URL={{ siteurl }}").unwrap();
        fs::create_dir(temp.path().join("extra")).unwrap();
        fs::write(temp.path().join("extra/robots.txt.jinja2"), "# {{ sitename }}").unwrap();

        let renderer = TeraRenderer::with_overrides(temp.path()).unwrap();
        let vars = TemplateVars::raw(&settings());

        assert_eq!(renderer.render("publishconf.py.jinja2", &vars).unwrap(), "URL=");
        assert_eq!(
            renderer.render("extra/robots.txt.jinja2", &vars).unwrap(),
            "# Meu Blog"
        );
        assert!(renderer.render("tasks.py.jinja2", &vars).is_ok());
    }

    #[test]
    fn missing_override_directory_falls_back() {
        let renderer = TeraRenderer::with_overrides("/definitely/not/here").unwrap();
        assert_eq!(renderer.template_names().len(), BUILTIN_TEMPLATES.len());
    }

    #[test]
    fn broken_override_is_rendering_failed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tasks.py.jinja2"), "{% if %}").unwrap();

        let err = TeraRenderer::with_overrides(temp.path()).unwrap_err();
        assert!(err.to_string().contains("Template rendering failed"));
    }
}
