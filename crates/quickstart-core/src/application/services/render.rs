//! Render Service - best-effort output generation.
//!
//! Each directory and file is attempted independently. A failure is
//! logged, recorded in the [`GenerationReport`] and the next item is
//! still attempted, so one unwritable file never aborts the run.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::TemplateVars,
    error::QuickstartError,
};

/// One item that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    pub target: PathBuf,
    pub error: QuickstartError,
}

/// What the generation step did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(&mut self, target: PathBuf, error: QuickstartError) {
        warn!(target = %target.display(), %error, "Generation step failed");
        self.failures.push(GenerationFailure { target, error });
    }
}

/// Renders named templates into files under a base directory.
pub struct RenderService<'a> {
    renderer: &'a dyn TemplateRenderer,
    filesystem: &'a dyn Filesystem,
    basedir: PathBuf,
}

impl<'a> RenderService<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        filesystem: &'a dyn Filesystem,
        basedir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            basedir: basedir.into(),
        }
    }

    /// Create `relative` under the base directory.
    ///
    /// An existing directory counts as a failure and is reported.
    #[instrument(skip(self, relative, report), fields(dir = %relative.as_ref().display()))]
    pub fn create_dir(&self, relative: impl AsRef<Path>, report: &mut GenerationReport) {
        let path = self.basedir.join(relative);
        match self.filesystem.create_dir(&path) {
            Ok(()) => {
                info!(path = %path.display(), "Directory created");
                report.directories.push(path);
            }
            Err(e) => report.fail(path, e),
        }
    }

    /// Render `template` with `vars` and write it to `relative`.
    #[instrument(skip(self, vars, relative, report), fields(target = %relative.as_ref().display()))]
    pub fn render(
        &self,
        template: &str,
        vars: &TemplateVars,
        relative: impl AsRef<Path>,
        report: &mut GenerationReport,
    ) {
        let path = self.basedir.join(relative);
        let written = self
            .renderer
            .render(template, vars)
            .and_then(|content| self.filesystem.write_file(&path, &content));

        match written {
            Ok(()) => {
                info!(path = %path.display(), "File written");
                report.files.push(path);
            }
            Err(e) => report.fail(path, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, MockTemplateRenderer},
    };

    fn io_error(path: &str) -> QuickstartError {
        ApplicationError::FilesystemError {
            path: path.into(),
            reason: "Permission denied".into(),
        }
        .into()
    }

    #[test]
    fn rendered_content_is_written_under_basedir() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|name, _| name == "publishconf.py.jinja2")
            .returning(|_, _| Ok("SITEURL = ''\n".into()));

        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .with(eq(Path::new("/site/publishconf.py")), eq("SITEURL = ''\n"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = RenderService::new(&renderer, &fs, "/site");
        let mut report = GenerationReport::default();
        service.render("publishconf.py.jinja2", &TemplateVars::default(), "publishconf.py", &mut report);

        assert!(report.is_complete());
        assert_eq!(report.files, vec![PathBuf::from("/site/publishconf.py")]);
    }

    #[test]
    fn write_failure_is_recorded_and_later_files_still_written() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|_, _| Ok("x".into()));

        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .with(eq(Path::new("/site/a.py")), eq("x"))
            .returning(|_, _| Err(io_error("/site/a.py")));
        fs.expect_write_file()
            .with(eq(Path::new("/site/b.py")), eq("x"))
            .returning(|_, _| Ok(()));

        let service = RenderService::new(&renderer, &fs, "/site");
        let mut report = GenerationReport::default();
        let vars = TemplateVars::default();
        service.render("a", &vars, "a.py", &mut report);
        service.render("b", &vars, "b.py", &mut report);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].target, PathBuf::from("/site/a.py"));
        assert_eq!(report.files, vec![PathBuf::from("/site/b.py")]);
    }

    #[test]
    fn render_failure_skips_the_write() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|name, _| {
            Err(ApplicationError::TemplateNotFound { name: name.into() }.into())
        });

        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();

        let service = RenderService::new(&renderer, &fs, "/site");
        let mut report = GenerationReport::default();
        service.render("missing", &TemplateVars::default(), "x", &mut report);

        assert!(!report.is_complete());
    }

    #[test]
    fn existing_directory_is_reported_not_fatal() {
        let renderer = MockTemplateRenderer::new();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir()
            .with(eq(Path::new("/site/content")))
            .returning(|_| Err(io_error("/site/content")));
        fs.expect_create_dir()
            .with(eq(Path::new("/site/output")))
            .returning(|_| Ok(()));

        let service = RenderService::new(&renderer, &fs, "/site");
        let mut report = GenerationReport::default();
        service.create_dir("content", &mut report);
        service.create_dir("output", &mut report);

        assert_eq!(report.directories, vec![PathBuf::from("/site/output")]);
        assert_eq!(report.failures.len(), 1);
    }
}
