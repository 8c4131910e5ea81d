//! Quickstart Service - main application orchestrator.
//!
//! This service coordinates the whole run:
//! 1. Resolve the base directory (reuse a project marker or ask)
//! 2. Ask the site questions, in a fixed order, with follow-ups gated by
//!    earlier yes/no answers
//! 3. Create `content/` and `output/` and render the output files
//!
//! Questions go through an injected [`PromptIo`]; everything else through
//! the driven ports handed to [`QuickstartService::new`].

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, PromptIo, TemplateRenderer, TimezoneDatabase},
        services::{
            prompt::PromptEngine,
            render::{GenerationReport, RenderService},
        },
    },
    domain::{
        Defaults, GithubPagesKind, Pagination, PathArg, Settings, TZ_URL, TemplateVars,
        defaults::{LANG_LENGTH, is_valid_lang},
        paths::{absolutize, expand_home},
    },
    error::QuickstartResult,
};

/// Questions, in the order they are asked.
pub mod questions {
    pub const BASEDIR: &str = "Onde deseja criar seu novo site?";
    pub const SITENAME: &str = "Qual o título do seu novo site?";
    pub const AUTHOR: &str = "Quem é o autor deste site?";
    pub const LANG: &str = "Qual a língua padrão deste site?";
    pub const WANT_SITEURL: &str =
        "Deseja especificar um prefixo de URL? ex.: https://exemplo.com ";
    pub const SITEURL: &str =
        "Qual é o prefixo da URL? (veja o exemplo acima; não inclua a barra final)";
    pub const WANT_PAGINATION: &str = "Deseja ativar a paginação dos artigos?";
    pub const PAGINATION: &str = "Quantos artigos por página você quer exibir?";
    pub const TIMEZONE: &str = "Qual é o seu fuso horário?";
    pub const AUTOMATION: &str =
        "Deseja gerar um tasks.py/Makefile para automatizar a geração e a publicação?";

    pub const WANT_FTP: &str = "Usar FTP para enviar seu site?";
    pub const FTP_HOST: &str = "Qual é o endereço do seu servidor FTP?";
    pub const FTP_USER: &str = "Qual é o seu usuário de login?";
    pub const FTP_TARGET_DIR: &str = "Em que diretório do servidor o site deve ficar?";

    pub const WANT_SSH: &str = "Deseja enviar seu site usando SSH?";
    pub const SSH_HOST: &str = "Qual é o endereço do seu servidor SSH?";
    pub const SSH_PORT: &str = "Qual é a porta do seu servidor SSH?";
    pub const SSH_USER: &str = "Qual é o seu usuário nesse servidor?";
    pub const SSH_TARGET_DIR: &str = "Em que diretório desse servidor o site deve ficar?";

    pub const WANT_DROPBOX: &str = "Deseja enviar seu site para o Dropbox?";
    pub const DROPBOX_DIR: &str = "Qual é a pasta do seu projeto no Dropbox?";

    pub const WANT_S3: &str = "Deseja enviar seu site usando o S3?";
    pub const S3_BUCKET: &str = "Qual é o nome do seu bucket S3?";

    pub const WANT_CLOUDFILES: &str = "Deseja enviar seu site usando o Rackspace Cloud Files?";
    pub const CLOUDFILES_USERNAME: &str = "Qual é o seu usuário do Rackspace Cloud?";
    pub const CLOUDFILES_API_KEY: &str = "Qual é a sua API key do Rackspace Cloud?";
    pub const CLOUDFILES_CONTAINER: &str = "Qual é o nome do seu contêiner do Cloud Files?";

    pub const WANT_GITHUB: &str = "Deseja enviar seu site usando o GitHub Pages?";
    pub const GITHUB_PERSONAL: &str = "Este é o seu site pessoal (username.github.io)?";
}

/// Everything the run needs besides the ports.
#[derive(Debug, Clone)]
pub struct QuickstartRequest {
    pub defaults: Defaults,
    pub path: PathArg,
    pub title: Option<String>,
    pub author: Option<String>,
    pub lang: Option<String>,
    /// File whose first line names a previously chosen base directory.
    pub project_marker: Option<PathBuf>,
    /// Relative answers are made absolute against this directory.
    pub working_dir: PathBuf,
    /// Used to expand a leading `~`.
    pub home_dir: Option<PathBuf>,
    /// Rejected answers allowed per question; 0 means unlimited.
    pub max_attempts: u32,
}

impl QuickstartRequest {
    pub fn new(defaults: Defaults, path: PathArg, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            defaults,
            path,
            title: None,
            author: None,
            lang: None,
            project_marker: None,
            working_dir: working_dir.into(),
            home_dir: None,
            max_attempts: 0,
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickstartOutcome {
    pub settings: Settings,
    pub automation: bool,
    /// `true` when the base directory came from the project marker.
    pub reused_project: bool,
    pub report: GenerationReport,
}

/// Template name → output file, for every generated file.
pub const PELICANCONF: (&str, &str) = ("pelicanconf.py.jinja2", "pelicanconf.py");
pub const PUBLISHCONF: (&str, &str) = ("publishconf.py.jinja2", "publishconf.py");
pub const TASKS: (&str, &str) = ("tasks.py.jinja2", "tasks.py");
pub const MAKEFILE: (&str, &str) = ("Makefile.jinja2", "Makefile");

/// Main quickstart service.
pub struct QuickstartService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    timezones: Box<dyn TimezoneDatabase>,
}

impl QuickstartService {
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        timezones: Box<dyn TimezoneDatabase>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            timezones,
        }
    }

    /// Ask every question, then generate the site skeleton.
    #[instrument(skip_all, fields(path = %request.path.path().display()))]
    pub fn run(
        &self,
        request: QuickstartRequest,
        io: &mut dyn PromptIo,
    ) -> QuickstartResult<QuickstartOutcome> {
        let mut prompt = PromptEngine::new(io).with_max_attempts(request.max_attempts);

        let (basedir, reused_project) = self.resolve_basedir(&request, &mut prompt)?;
        info!(basedir = %basedir.display(), reused_project, "Base directory resolved");

        let mut settings = Settings::seeded(&request.defaults, basedir);
        let automation = self.collect(&request, &mut settings, &mut prompt)?;

        // Settings are final from here on.
        let settings = settings;
        let report = self.generate(&settings, automation);

        info!(
            files = report.files.len(),
            failures = report.failures.len(),
            "Quickstart finished"
        );
        Ok(QuickstartOutcome {
            settings,
            automation,
            reused_project,
            report,
        })
    }

    /// Create the directories and render every output file.
    #[instrument(skip_all, fields(basedir = %settings.basedir.display(), automation = automation))]
    pub fn generate(&self, settings: &Settings, automation: bool) -> GenerationReport {
        let service = RenderService::new(
            self.renderer.as_ref(),
            self.filesystem.as_ref(),
            &settings.basedir,
        );
        let mut report = GenerationReport::default();

        service.create_dir("content", &mut report);
        service.create_dir("output", &mut report);

        let literals = TemplateVars::python_literals(settings);
        let raw = TemplateVars::raw(settings);

        service.render(PELICANCONF.0, &literals, PELICANCONF.1, &mut report);
        service.render(PUBLISHCONF.0, &raw, PUBLISHCONF.1, &mut report);

        if automation {
            service.render(TASKS.0, &raw, TASKS.1, &mut report);
            service.render(MAKEFILE.0, &raw, MAKEFILE.1, &mut report);
        }

        report
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve_basedir(
        &self,
        request: &QuickstartRequest,
        prompt: &mut PromptEngine<'_>,
    ) -> QuickstartResult<(PathBuf, bool)> {
        if !request.path.is_explicit() {
            if let Some(stored) = self.read_marker(request) {
                prompt.notice(&format!(
                    "Usando o projeto já associado a este ambiente virtual. \
                     Os arquivos serão salvos em:\n{}\n",
                    stored.display()
                ));
                return Ok((stored, true));
            }
        }

        let default = request.path.path().display().to_string();
        let answer = prompt.ask_text(questions::BASEDIR, Some(default.as_str()), None)?;
        let expanded = expand_home(&answer, request.home_dir.as_deref());
        Ok((absolutize(&expanded, &request.working_dir), false))
    }

    /// First line of the project marker, if there is a usable one.
    fn read_marker(&self, request: &QuickstartRequest) -> Option<PathBuf> {
        let marker = request.project_marker.as_deref()?;
        if !self.filesystem.is_file(marker) {
            return None;
        }

        match self.filesystem.read_to_string(marker) {
            Ok(content) => {
                let line = content.lines().next().unwrap_or_default().trim_end();
                if line.is_empty() {
                    warn!(marker = %marker.display(), "Project marker is empty, ignoring it");
                    None
                } else {
                    Some(PathBuf::from(line))
                }
            }
            Err(e) => {
                warn!(marker = %marker.display(), error = %e, "Project marker unreadable");
                None
            }
        }
    }

    /// Ask the site questions; returns whether automation files are wanted.
    fn collect(
        &self,
        request: &QuickstartRequest,
        settings: &mut Settings,
        prompt: &mut PromptEngine<'_>,
    ) -> QuickstartResult<bool> {
        let defaults = &request.defaults;

        settings.sitename = prompt.ask_text(questions::SITENAME, request.title.as_deref(), None)?;
        settings.author = prompt.ask_text(questions::AUTHOR, request.author.as_deref(), None)?;
        let lang_default = request.lang.as_deref().unwrap_or(defaults.lang.as_str());
        // A default is returned as-is, so one of the wrong length is not offered.
        let lang_default = if is_valid_lang(lang_default) {
            Some(lang_default)
        } else {
            warn!(lang = lang_default, "Default language ignored, expected {LANG_LENGTH} characters");
            None
        };
        settings.lang = prompt.ask_text(questions::LANG, lang_default, Some(LANG_LENGTH))?;

        if prompt.ask_bool(questions::WANT_SITEURL, Some(true))? {
            settings.siteurl =
                prompt.ask_text(questions::SITEURL, Some(defaults.siteurl.as_str()), None)?;
        }

        if prompt.ask_bool(questions::WANT_PAGINATION, Some(settings.pagination.is_enabled()))? {
            let page_default =
                (defaults.default_pagination > 0).then_some(defaults.default_pagination);
            let per_page = prompt.ask_int(questions::PAGINATION, page_default)?;
            settings.pagination = Pagination::Enabled(per_page);
        } else {
            settings.pagination = Pagination::Disabled;
        }

        settings.timezone = prompt.ask_timezone(
            questions::TIMEZONE,
            &defaults.timezone,
            self.timezones.as_ref(),
            TZ_URL,
        )?;

        let automation = prompt.ask_bool(questions::AUTOMATION, Some(true))?;
        if automation {
            self.collect_publishing(settings, prompt)?;
        }

        debug!(?settings, automation, "Answers collected");
        Ok(automation)
    }

    fn collect_publishing(
        &self,
        settings: &mut Settings,
        prompt: &mut PromptEngine<'_>,
    ) -> QuickstartResult<()> {
        if prompt.ask_bool(questions::WANT_FTP, Some(false))? {
            let ftp = &mut settings.ftp;
            ftp.enabled = true;
            ftp.host = prompt.ask_text(questions::FTP_HOST, Some(ftp.host.as_str()), None)?;
            ftp.user = prompt.ask_text(questions::FTP_USER, Some(ftp.user.as_str()), None)?;
            ftp.target_dir =
                prompt.ask_text(questions::FTP_TARGET_DIR, Some(ftp.target_dir.as_str()), None)?;
        }

        if prompt.ask_bool(questions::WANT_SSH, Some(false))? {
            let ssh = &mut settings.ssh;
            ssh.enabled = true;
            ssh.host = prompt.ask_text(questions::SSH_HOST, Some(ssh.host.as_str()), None)?;
            ssh.port = prompt.ask_int(questions::SSH_PORT, Some(ssh.port))?;
            ssh.user = prompt.ask_text(questions::SSH_USER, Some(ssh.user.as_str()), None)?;
            ssh.target_dir =
                prompt.ask_text(questions::SSH_TARGET_DIR, Some(ssh.target_dir.as_str()), None)?;
        }

        if prompt.ask_bool(questions::WANT_DROPBOX, Some(false))? {
            let dropbox = &mut settings.dropbox;
            dropbox.enabled = true;
            dropbox.dir =
                prompt.ask_text(questions::DROPBOX_DIR, Some(dropbox.dir.as_str()), None)?;
        }

        if prompt.ask_bool(questions::WANT_S3, Some(false))? {
            let s3 = &mut settings.s3;
            s3.enabled = true;
            s3.bucket = prompt.ask_text(questions::S3_BUCKET, Some(s3.bucket.as_str()), None)?;
        }

        if prompt.ask_bool(questions::WANT_CLOUDFILES, Some(false))? {
            let cf = &mut settings.cloudfiles;
            cf.enabled = true;
            cf.username =
                prompt.ask_text(questions::CLOUDFILES_USERNAME, Some(cf.username.as_str()), None)?;
            cf.api_key =
                prompt.ask_text(questions::CLOUDFILES_API_KEY, Some(cf.api_key.as_str()), None)?;
            cf.container =
                prompt.ask_text(questions::CLOUDFILES_CONTAINER, Some(cf.container.as_str()), None)?;
        }

        if prompt.ask_bool(questions::WANT_GITHUB, Some(false))? {
            settings.github.enabled = true;
            let kind = if prompt.ask_bool(questions::GITHUB_PERSONAL, Some(false))? {
                GithubPagesKind::Personal
            } else {
                GithubPagesKind::Project
            };
            settings.github.select(kind);
        }

        Ok(())
    }
}
