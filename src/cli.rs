//! Command-line surface over the editing session
//!
//! Each command maps to one user action from the editor: list pages, show
//! or preview a page, edit sections, reorder, save, rebuild. Errors are
//! reported at this boundary and never silently swallowed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use crate::core::config::AppConfig;
use crate::core::session::{EditSession, SectionForm};
use crate::core::store::PageStore;
use crate::core::text;
use crate::rebuild;

/// Content editor for the JSON page files behind a static website.
#[derive(Parser, Debug)]
#[command(name = "pagekeeper", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Content directory override (defaults to the configured one).
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Project root override, used by `rebuild`.
    #[arg(long, global = true)]
    pub project_root: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the website pages that have a content file.
    Pages,

    /// Show a page: title, timestamp, and its sections.
    Show {
        /// Page identifier, e.g. `projects`.
        page: String,
        /// Print the body of one section as plain text.
        #[arg(long)]
        section: Option<usize>,
    },

    /// Set the page title.
    SetTitle { page: String, title: String },

    /// Append a new section to a page.
    Add {
        page: String,
        #[command(flatten)]
        fields: SectionArgs,
    },

    /// Edit an existing section; omitted flags keep the current values.
    Edit {
        page: String,
        /// Section position, zero-based.
        index: usize,
        #[command(flatten)]
        fields: SectionArgs,
    },

    /// Delete a section by position.
    Delete { page: String, index: usize },

    /// Move a section from one position to another.
    Move {
        page: String,
        from: usize,
        to: usize,
    },

    /// Rebuild the static site with the configured bundler command.
    Rebuild,
}

/// Section form fields as command-line flags
#[derive(clap::Args, Debug, Default)]
pub struct SectionArgs {
    /// Section title (required for `add`).
    #[arg(long)]
    pub title: Option<String>,

    /// GitHub repository link.
    #[arg(long)]
    pub github: Option<String>,

    /// Documentation link.
    #[arg(long)]
    pub docs: Option<String>,

    /// Short description.
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated technologies, e.g. "React, TypeScript".
    #[arg(long)]
    pub technologies: Option<String>,

    /// Section body; newlines become `<br>` in storage.
    #[arg(long)]
    pub body: Option<String>,
}

impl SectionArgs {
    /// Overlay the provided flags on top of an existing form
    fn apply_to(self, form: &mut SectionForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(github) = self.github {
            form.github_link = github;
        }
        if let Some(docs) = self.docs {
            form.documentation_link = docs;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(technologies) = self.technologies {
            form.technologies = technologies;
        }
        if let Some(body) = self.body {
            form.body = body;
        }
    }
}

/// Dispatch a parsed CLI invocation
pub fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Some(dir) = cli.content_dir {
        config.content_dir = dir;
    }
    if let Some(root) = cli.project_root {
        config.project_root = root;
    }
    let store = PageStore::new(&config.content_dir);

    match cli.command {
        Commands::Pages => {
            for name in store.list_available(&config.pages) {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Show { page, section } => show(&store, &page, section),
        Commands::SetTitle { page, title } => {
            let mut session = EditSession::load(&store, &page)?;
            session.set_page_title(title);
            session.save(&store)?;
            println!("Updated title of '{page}'");
            Ok(())
        }
        Commands::Add { page, fields } => {
            let mut session = EditSession::load(&store, &page)?;
            let mut form = SectionForm::default();
            fields.apply_to(&mut form);
            let index = session.commit(form)?;
            session.save(&store)?;
            println!("Added section {index} to '{page}'");
            Ok(())
        }
        Commands::Edit {
            page,
            index,
            fields,
        } => {
            let mut session = EditSession::load(&store, &page)?;
            let mut form = session.select(index)?;
            fields.apply_to(&mut form);
            session.commit(form)?;
            session.save(&store)?;
            println!("Updated section {index} of '{page}'");
            Ok(())
        }
        Commands::Delete { page, index } => {
            let mut session = EditSession::load(&store, &page)?;
            session.delete(index)?;
            session.save(&store)?;
            println!("Deleted section {index} of '{page}'");
            Ok(())
        }
        Commands::Move { page, from, to } => {
            let mut session = EditSession::load(&store, &page)?;
            if session.reorder(from, to) {
                session.save(&store)?;
                println!("Moved section {from} to position {to}");
            } else {
                println!("Nothing to move");
            }
            Ok(())
        }
        Commands::Rebuild => {
            let output = rebuild::rebuild_site(&config.project_root, &config.build_command)?;
            print!("{}", output.stdout);
            println!("Static site rebuilt successfully");
            Ok(())
        }
    }
}

fn show(store: &PageStore, page: &str, section: Option<usize>) -> Result<()> {
    let page = store.load(page)?;

    if let Some(index) = section {
        let section = page.sections.get(index).with_context(|| {
            format!(
                "section index {index} out of range (page has {} sections)",
                page.sections.len()
            )
        })?;
        println!("{}", section.title);
        if !section.technologies.is_empty() {
            println!("[{}]", text::join_technologies(&section.technologies));
        }
        println!();
        println!("{}", text::render_preview(&section.text));
        return Ok(());
    }

    println!("{} ({})", page.title, page.page_name);
    if let Some(ref stamp) = page.last_updated {
        println!("last updated: {stamp}");
    }
    for (i, section) in page.sections.iter().enumerate() {
        println!("  [{i}] {} (order {})", section.title, section.order);
    }
    Ok(())
}
