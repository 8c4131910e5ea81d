//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "pelican-quickstart",
    bin_name = "pelican-quickstart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Um utilitário que gera os arquivos básicos de um site Pelican",
    long_about = "Faz algumas perguntas sobre o seu novo site e gera \
                  pelicanconf.py, publishconf.py e, se desejado, \
                  tasks.py e Makefile.",
    after_help = "EXAMPLES:\n\
        \x20 pelican-quickstart\n\
        \x20 pelican-quickstart --path ~/blog --title 'Meu Blog' --author Ana\n\
        \x20 printf 'Meu Blog\\nAna\\n...' | pelican-quickstart --path ./site",
)]
pub struct Cli {
    /// Logging, colour and config flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Where the site is created. Defaults to the current directory.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "PATH",
        help = "Caminho do diretório onde o site será criado"
    )]
    pub path: Option<PathBuf>,

    /// Default answer for the site title question.
    #[arg(
        short = 't',
        long = "title",
        value_name = "TITLE",
        help = "Defina o título do seu site"
    )]
    pub title: Option<String>,

    /// Default answer for the author question.
    #[arg(
        short = 'a',
        long = "author",
        value_name = "AUTHOR",
        help = "Defina o autor do site"
    )]
    pub author: Option<String>,

    /// Default answer for the language question.
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANG",
        help = "Defina a língua padrão"
    )]
    pub lang: Option<String>,
}
